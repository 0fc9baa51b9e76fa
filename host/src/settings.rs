//! Configuration file loading

use anyhow::{ensure, Context, Result};
use game_core::{Config, Side};
use std::fs;
use std::path::Path;

/// Parse a TOML table of [`Config`] overrides
pub fn parse_config(text: &str) -> Result<Config> {
    let config: Config = toml::from_str(text).context("invalid game config")?;
    validate(&config)?;
    Ok(config)
}

/// Load the config file at `path`, or the defaults when no path is given
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config =
        parse_config(&text).with_context(|| format!("failed to load {}", path.display()))?;
    log::info!("Loaded config from {}", path.display());
    Ok(config)
}

pub fn validate(config: &Config) -> Result<()> {
    ensure!(
        config.field_width > 0.0 && config.field_height > 0.0,
        "field must have a positive size, got {}x{}",
        config.field_width,
        config.field_height
    );
    ensure!(config.ball_radius > 0.0, "ball radius must be positive");
    ensure!(
        config.paddle_width > 0.0 && config.paddle_height > 0.0,
        "paddle must have a positive size"
    );
    ensure!(config.ball_speed_base > 0.0, "base ball speed must be positive");
    ensure!(
        config.ball_speed_step >= 0.0,
        "ball speed step must not be negative, got {}",
        config.ball_speed_step
    );
    ensure!(
        config.max_deflection.is_finite(),
        "max deflection must be finite"
    );
    ensure!(
        config.net_width > 0.0 && config.net_segment > 0.0 && config.net_spacing > 0.0,
        "net width, segment and spacing must be positive"
    );
    for side in [Side::User, Side::Opponent] {
        let origin = config.paddle_origin(side);
        ensure!(
            origin.x >= 0.0
                && origin.y >= 0.0
                && origin.x + config.paddle_width <= config.field_width
                && origin.y + config.paddle_height <= config.field_height,
            "{side:?} paddle at ({}, {}) does not fit the field",
            origin.x,
            origin.y
        );
    }
    // Tick period is whole milliseconds
    ensure!(
        (1..=1000).contains(&config.tick_hz) && 1000 % config.tick_hz == 0,
        "tick rate must divide 1000 Hz evenly, got {}",
        config.tick_hz
    );
    ensure!(config.win_score > 0, "win score must be at least 1");
    Ok(())
}
