//! Headless entry point
//!
//! Runs one match with both paddles parked, logging points as they happen.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use game_core::{side_name, Side};
use host::runner::{run_realtime, run_simulated};
use host::settings::load_config;
use host::sink::{FrameRecorder, HostSink};
use proto::HostEvent;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StartWith {
    Space,
    Pointer,
}

#[derive(Debug, Parser)]
#[command(name = "pong", version, about = "Run a two-paddle ball match headless")]
struct Args {
    /// TOML file overriding game parameters
    #[arg(long)]
    config: Option<PathBuf>,

    /// Input used to start the match
    #[arg(long, value_enum, default_value_t = StartWith::Space)]
    start: StartWith,

    /// Tick against the wall clock instead of as fast as possible
    #[arg(long)]
    realtime: bool,

    /// Give up after this many ticks
    #[arg(long, default_value_t = 100_000)]
    max_ticks: u64,

    /// Write every frame to this file
    #[arg(long)]
    record: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    let start = match args.start {
        StartWith::Space => HostEvent::KeyDown {
            code: "Space".to_string(),
        },
        StartWith::Pointer => HostEvent::PointerDown {
            x: config.field_width / 2.0,
            y: config.field_height / 2.0,
        },
    };

    let recorder = match &args.record {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Some(FrameRecorder::new(BufWriter::new(file)))
        }
        None => None,
    };
    let mut sink = HostSink::new(recorder);

    log::info!(
        "Starting {}x{} match, first to {}",
        config.field_width,
        config.field_height,
        config.win_score
    );

    let events = [start];
    let summary = if args.realtime {
        run_realtime(config, &events, &mut sink, args.max_ticks)
    } else {
        run_simulated(config, &events, &mut sink, args.max_ticks)
    };

    match summary.winner {
        Some(winner) => {
            let (won, lost) = match winner {
                Side::User => (summary.user_score, summary.opponent_score),
                Side::Opponent => (summary.opponent_score, summary.user_score),
            };
            log::info!(
                "{} wins {}-{} in {} ticks",
                side_name(winner),
                won,
                lost,
                summary.ticks
            );
        }
        None => log::info!(
            "No winner: User {} - {} AI after {} ticks",
            summary.user_score,
            summary.opponent_score,
            summary.ticks
        ),
    }

    if let Some(recorder) = sink.recorder {
        let written = recorder.written();
        recorder.finish()?;
        if let Some(path) = &args.record {
            log::info!("Recorded {} frames to {}", written, path.display());
        }
    }

    Ok(())
}
