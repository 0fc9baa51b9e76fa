//! Loop driver
//!
//! Owns the match and the repeating tick schedule. The driver is either idle,
//! waiting for a start signal, or active, stepping the match once per period.
//! A schedule exists only while active, so a second start signal can never
//! double the tick rate.

use crate::{Config, MatchState, Side};
use std::time::Duration;

/// Monotonic time source
pub trait Clock {
    /// Milliseconds since an arbitrary fixed origin
    fn now_ms(&self) -> u64;
}

/// Discrete inputs that can start a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartSignal {
    PointerDown,
    SpaceKey,
}

/// Something that paints the match after every tick
pub trait RenderSink {
    fn render(&mut self, state: &MatchState);
}

/// Driver lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverPhase {
    Idle,
    Active,
}

/// Result of delivering a start signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    Started,
    AlreadyActive,
    /// The match is decided; only a rematch can resume play
    MatchOver,
}

/// Repeating task handle
///
/// Fires at most once per [`Schedule::poll`]; periods missed while the host was
/// busy are dropped rather than replayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    period_ms: u64,
    next_due_ms: u64,
}

impl Schedule {
    /// First firing is one period after `now_ms`
    pub fn start(period: Duration, now_ms: u64) -> Self {
        let period_ms = (period.as_millis() as u64).max(1);
        Self {
            period_ms,
            next_due_ms: now_ms + period_ms,
        }
    }

    pub fn next_due_ms(&self) -> u64 {
        self.next_due_ms
    }

    /// Returns true if a tick is due at `now_ms`, and re-arms the schedule
    pub fn poll(&mut self, now_ms: u64) -> bool {
        if now_ms < self.next_due_ms {
            return false;
        }
        self.next_due_ms += self.period_ms;
        if self.next_due_ms <= now_ms {
            // Fell behind: resume from now instead of bursting
            self.next_due_ms = now_ms + self.period_ms;
        }
        true
    }
}

/// Drives a match at a fixed cadence
pub struct LoopDriver<C: Clock> {
    clock: C,
    state: MatchState,
    schedule: Option<Schedule>,
}

impl<C: Clock> LoopDriver<C> {
    pub fn new(config: Config, clock: C) -> Self {
        Self {
            clock,
            state: MatchState::new(config),
            schedule: None,
        }
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn phase(&self) -> DriverPhase {
        if self.schedule.is_some() {
            DriverPhase::Active
        } else {
            DriverPhase::Idle
        }
    }

    /// Deadline of the next tick, if active
    pub fn next_deadline_ms(&self) -> Option<u64> {
        self.schedule.as_ref().map(Schedule::next_due_ms)
    }

    /// Handle a start signal from either input channel
    pub fn start(&mut self, signal: StartSignal) -> StartOutcome {
        if self.schedule.is_some() {
            log::debug!("Ignoring {signal:?}: already running");
            return StartOutcome::AlreadyActive;
        }
        if !self.state.set_running() {
            log::debug!("Ignoring {signal:?}: match is over");
            return StartOutcome::MatchOver;
        }

        let now = self.clock.now_ms();
        self.schedule = Some(Schedule::start(self.state.config().tick_period(), now));
        log::info!("Match started by {signal:?}");
        StartOutcome::Started
    }

    /// Run a tick if one is due. Returns true if a tick ran.
    pub fn poll(&mut self, sink: &mut impl RenderSink) -> bool {
        let now = self.clock.now_ms();
        let due = match self.schedule.as_mut() {
            Some(schedule) => schedule.poll(now),
            None => false,
        };
        if due {
            self.tick(sink);
        }
        due
    }

    /// Step the match once and hand the result to the renderer
    fn tick(&mut self, sink: &mut impl RenderSink) {
        let winner = self.state.step();
        sink.render(&self.state);

        if let Some(side) = winner {
            self.stop(side);
        }
    }

    fn stop(&mut self, winner: Side) {
        // Dropping the schedule cancels further ticks
        self.schedule = None;
        log::info!("Loop stopped, {winner:?} won");
    }

    /// Paint the current state without stepping, e.g. the idle prompt
    pub fn render_now(&self, sink: &mut impl RenderSink) {
        sink.render(&self.state);
    }

    /// Start over after a decided match. Refused while a match is in play.
    pub fn rematch(&mut self) -> bool {
        if !self.state.is_over() {
            return false;
        }
        self.state.reset();
        self.schedule = None;
        log::info!("Rematch ready");
        true
    }
}
