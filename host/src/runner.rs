//! Headless match loop

use crate::clock::{SimClock, SystemClock};
use crate::input::start_signal;
use game_core::{Clock, Config, DriverPhase, LoopDriver, RenderSink, Side, StartOutcome};
use proto::HostEvent;
use std::thread;
use std::time::Duration;

/// How a finished run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub winner: Option<Side>,
    pub user_score: u32,
    pub opponent_score: u32,
    pub ticks: u64,
}

/// Deliver `events` to the driver, then tick until the match is decided or
/// `max_ticks` steps have run. `wait_until` blocks until the clock reaches the
/// given deadline.
pub fn run_match<C: Clock>(
    driver: &mut LoopDriver<C>,
    events: &[HostEvent],
    sink: &mut impl RenderSink,
    max_ticks: u64,
    mut wait_until: impl FnMut(&C, u64),
) -> RunSummary {
    driver.render_now(sink);

    for event in events {
        match start_signal(event) {
            Some(signal) => {
                if driver.start(signal) == StartOutcome::MatchOver {
                    log::warn!("Start ignored, match already decided");
                }
            }
            None => log::debug!("Ignoring {event:?}"),
        }
    }

    while driver.phase() == DriverPhase::Active && driver.state().tick() < max_ticks {
        if let Some(deadline) = driver.next_deadline_ms() {
            wait_until(driver.clock(), deadline);
        }
        driver.poll(sink);
    }

    if driver.phase() == DriverPhase::Active {
        log::warn!("Stopped after {max_ticks} ticks without a winner");
    }

    let state = driver.state();
    RunSummary {
        winner: state.winner(),
        user_score: state.score(Side::User),
        opponent_score: state.score(Side::Opponent),
        ticks: state.tick(),
    }
}

/// Run as fast as possible on a simulated clock
pub fn run_simulated(
    config: Config,
    events: &[HostEvent],
    sink: &mut impl RenderSink,
    max_ticks: u64,
) -> RunSummary {
    let mut driver = LoopDriver::new(config, SimClock::new());
    run_match(&mut driver, events, sink, max_ticks, |clock, deadline| {
        clock.advance_to(deadline)
    })
}

/// Run at the configured cadence against the wall clock
pub fn run_realtime(
    config: Config,
    events: &[HostEvent],
    sink: &mut impl RenderSink,
    max_ticks: u64,
) -> RunSummary {
    let mut driver = LoopDriver::new(config, SystemClock::new());
    run_match(&mut driver, events, sink, max_ticks, |clock, deadline| {
        let now = clock.now_ms();
        if deadline > now {
            thread::sleep(Duration::from_millis(deadline - now));
        }
    })
}
