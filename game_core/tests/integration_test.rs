use game_core::*;
use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Default)]
struct TestClock {
    now: Rc<Cell<u64>>,
}

impl TestClock {
    fn advance(&self, ms: u64) {
        self.now.set(self.now.get() + ms);
    }
}

impl Clock for TestClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

/// Records what the renderer would have seen after each tick
#[derive(Default)]
struct RecordingSink {
    frames: Vec<(Ball, Events)>,
}

impl RenderSink for RecordingSink {
    fn render(&mut self, state: &MatchState) {
        self.frames.push((state.ball(), *state.events()));
    }
}

/// Advance the clock one period at a time until the loop stops or `max_ticks` ran
fn run(driver: &mut LoopDriver<TestClock>, sink: &mut RecordingSink, max_ticks: usize) {
    let period = driver.state().config().tick_period().as_millis() as u64;
    for _ in 0..max_ticks {
        if driver.phase() == DriverPhase::Idle {
            break;
        }
        driver.clock().advance(period);
        driver.poll(sink);
    }
}

#[test]
fn test_full_match_ends_at_win_score() {
    let mut driver = LoopDriver::new(Config::new(), TestClock::default());
    let mut sink = RecordingSink::default();
    driver.start(StartSignal::SpaceKey);

    run(&mut driver, &mut sink, 10_000);

    let state = driver.state();
    assert_eq!(driver.phase(), DriverPhase::Idle);
    assert!(!state.is_running());
    // Static paddles and a diagonal serve: the points alternate, the AI serves first
    assert_eq!(state.winner(), Some(Side::Opponent));
    assert_eq!(state.score(Side::Opponent), 20);
    assert_eq!(state.score(Side::User), 19);
}

#[test]
fn test_decided_match_stays_frozen() {
    let clock = TestClock::default();
    let mut driver = LoopDriver::new(Config::new(), clock.clone());
    let mut sink = RecordingSink::default();
    driver.start(StartSignal::PointerDown);
    run(&mut driver, &mut sink, 10_000);

    let ball = driver.state().ball();
    let scores = (
        driver.state().score(Side::User),
        driver.state().score(Side::Opponent),
    );
    let frames = sink.frames.len();

    assert_eq!(driver.start(StartSignal::SpaceKey), StartOutcome::MatchOver);
    for _ in 0..100 {
        clock.advance(20);
        assert!(!driver.poll(&mut sink));
    }

    assert_eq!(driver.state().ball(), ball);
    assert_eq!(
        (
            driver.state().score(Side::User),
            driver.state().score(Side::Opponent)
        ),
        scores
    );
    assert_eq!(sink.frames.len(), frames, "No ticks after the match is decided");
}

#[test]
fn test_rematch_after_win() {
    let mut driver = LoopDriver::new(Config::new(), TestClock::default());
    let mut sink = RecordingSink::default();
    driver.start(StartSignal::SpaceKey);
    run(&mut driver, &mut sink, 10_000);

    assert!(driver.rematch());
    assert_eq!(driver.state().winner(), None);
    assert_eq!(driver.state().score(Side::Opponent), 0);
    assert_eq!(driver.phase(), DriverPhase::Idle);
    assert_eq!(driver.start(StartSignal::SpaceKey), StartOutcome::Started);
}

#[test]
fn test_rally_ramps_speed_per_hit() {
    // Horizontal serve through the paddle centers keeps the rally going forever
    let config = Config {
        ball_serve_vx: 7.0,
        ball_serve_vy: 0.0,
        ..Config::default()
    };
    let mut driver = LoopDriver::new(config, TestClock::default());
    let mut sink = RecordingSink::default();
    driver.start(StartSignal::PointerDown);

    run(&mut driver, &mut sink, 1_500);

    let hits = sink.frames.iter().filter(|(_, e)| e.paddle_hit).count();
    assert!(hits >= 10, "expected a long rally, got {hits} hits");
    assert!(sink.frames.iter().all(|(_, e)| e.scorer().is_none()));

    let ball = driver.state().ball();
    let expected = 7.0 + 0.2 * hits as f32;
    assert!(
        (ball.speed - expected).abs() < 1e-3,
        "speed {} after {} hits",
        ball.speed,
        hits
    );
}

#[test]
fn test_velocity_matches_speed_after_each_hit() {
    let config = Config {
        ball_serve_vx: 7.0,
        ball_serve_vy: 0.0,
        ..Config::default()
    };
    let mut driver = LoopDriver::new(config, TestClock::default());
    let mut sink = RecordingSink::default();
    driver.start(StartSignal::SpaceKey);

    run(&mut driver, &mut sink, 600);

    for (ball, events) in sink.frames.iter().filter(|(_, e)| e.paddle_hit) {
        assert!(!events.wall_bounce);
        // The hit used the speed from before the ramp
        let used = ball.speed - 0.2;
        assert!((ball.vel.length() - used).abs() < 1e-3);
    }
}

#[test]
fn test_first_point_resets_serve() {
    let mut driver = LoopDriver::new(Config::new(), TestClock::default());
    let mut sink = RecordingSink::default();
    driver.start(StartSignal::SpaceKey);

    run(&mut driver, &mut sink, 200);

    let (ball, _) = sink
        .frames
        .iter()
        .find(|(_, e)| e.opponent_scored)
        .copied()
        .expect("ball should get past the user paddle");
    assert_eq!(ball.pos, driver.state().config().center());
    assert_eq!(ball.speed, 7.0);
    assert!(ball.vel.x > 0.0, "Serve heads back toward the opponent");
}

#[test]
fn test_wall_bounce_keeps_speed_magnitude() {
    let mut driver = LoopDriver::new(Config::new(), TestClock::default());
    let mut sink = RecordingSink::default();
    driver.start(StartSignal::SpaceKey);

    run(&mut driver, &mut sink, 60);

    let (ball, _) = sink
        .frames
        .iter()
        .find(|(_, e)| e.wall_bounce)
        .copied()
        .expect("diagonal serve reaches the top wall");
    assert_eq!(ball.vel.x, -5.0);
    assert_eq!(ball.vel.y, 5.0);
}
