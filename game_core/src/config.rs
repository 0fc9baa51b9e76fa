use crate::{Params, Side};
use glam::Vec2;
use serde::Deserialize;
use std::time::Duration;

/// Game configuration
///
/// Every field falls back to its [`Params`] value, so a partial table only
/// overrides what it names.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub user_paddle_x: f32,
    pub opponent_paddle_inset: f32,
    pub ball_radius: f32,
    pub ball_speed_base: f32,
    pub ball_speed_step: f32,
    pub ball_serve_vx: f32,
    pub ball_serve_vy: f32,
    pub max_deflection: f32,
    pub net_width: f32,
    pub net_segment: f32,
    pub net_spacing: f32,
    pub win_score: u32,
    pub tick_hz: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            user_paddle_x: Params::USER_PADDLE_X,
            opponent_paddle_inset: Params::OPPONENT_PADDLE_INSET,
            ball_radius: Params::BALL_RADIUS,
            ball_speed_base: Params::BALL_SPEED_BASE,
            ball_speed_step: Params::BALL_SPEED_STEP,
            ball_serve_vx: Params::BALL_SERVE_VX,
            ball_serve_vy: Params::BALL_SERVE_VY,
            max_deflection: Params::MAX_DEFLECTION,
            net_width: Params::NET_WIDTH,
            net_segment: Params::NET_SEGMENT,
            net_spacing: Params::NET_SPACING,
            win_score: Params::WIN_SCORE,
            tick_hz: Params::TICK_HZ,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Center of the field, where the ball is served from
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.field_width / 2.0, self.field_height / 2.0)
    }

    /// Horizontal midpoint splitting the user half from the opponent half
    pub fn midfield(&self) -> f32 {
        self.field_width / 2.0
    }

    /// Top-left corner of a paddle at its starting position
    pub fn paddle_origin(&self, side: Side) -> Vec2 {
        let y = self.field_height / 2.0 - self.paddle_height / 2.0;
        match side {
            Side::User => Vec2::new(self.user_paddle_x, y),
            Side::Opponent => {
                Vec2::new(self.field_width - self.opponent_paddle_inset, y)
            }
        }
    }

    /// Period between two ticks, in whole milliseconds. Exact only when
    /// `tick_hz` divides 1000; loaded configs are rejected otherwise.
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.tick_hz.max(1)))
    }
}
