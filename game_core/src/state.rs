use crate::systems::*;
use crate::{Ball, Config, Events, Net, Paddle, Side};
use glam::Vec2;
use hecs::{Entity, World};

/// A single match: the ball, both paddles, the net and the running flag
///
/// The world is private to the match; callers read entities through the
/// accessors and only [`MatchState::step`] mutates them.
pub struct MatchState {
    world: World,
    config: Config,
    net: Net,
    ball: Entity,
    user: Entity,
    opponent: Entity,
    running: bool,
    winner: Option<Side>,
    events: Events,
    tick: u64,
}

impl MatchState {
    pub fn new(config: Config) -> Self {
        let mut world = World::new();
        let paddle_size = Vec2::new(config.paddle_width, config.paddle_height);

        let user = world.spawn((Paddle::new(
            Side::User,
            config.paddle_origin(Side::User),
            paddle_size,
        ),));
        let opponent = world.spawn((Paddle::new(
            Side::Opponent,
            config.paddle_origin(Side::Opponent),
            paddle_size,
        ),));

        // First serve: spawn with the configured velocity and reset once, so
        // play starts moving the opposite way.
        let mut ball = Ball::new(
            config.center(),
            Vec2::new(config.ball_serve_vx, config.ball_serve_vy),
            config.ball_radius,
            config.ball_speed_base,
        );
        ball.reset(config.center(), config.ball_speed_base);
        let ball = world.spawn((ball,));

        Self {
            world,
            net: Net::new(&config),
            config,
            ball,
            user,
            opponent,
            running: false,
            winner: None,
            events: Events::new(),
            tick: 0,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn net(&self) -> &Net {
        &self.net
    }

    pub fn ball(&self) -> Ball {
        self.component::<Ball>(self.ball)
    }

    pub fn paddle(&self, side: Side) -> Paddle {
        match side {
            Side::User => self.component::<Paddle>(self.user),
            Side::Opponent => self.component::<Paddle>(self.opponent),
        }
    }

    pub fn score(&self, side: Side) -> u32 {
        self.paddle(side).score
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Events recorded by the most recent step
    pub fn events(&self) -> &Events {
        &self.events
    }

    /// Number of steps that have advanced the simulation
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Let the simulation advance. Has no effect once the match is decided.
    pub(crate) fn set_running(&mut self) -> bool {
        if self.winner.is_some() {
            return false;
        }
        self.running = true;
        true
    }

    /// Advance the match by one tick. Returns the winner if this tick decided it.
    pub fn step(&mut self) -> Option<Side> {
        if !self.running {
            return None;
        }

        self.events.clear();
        self.tick += 1;

        // 1. Integrate
        move_ball(&mut self.world);

        // 2. Top/bottom walls
        bounce_walls(&mut self.world, &self.config, &mut self.events);

        // 3. Paddle on the ball's half
        check_paddle_hit(&mut self.world, &self.config, &mut self.events);

        // 4. Points and serve
        check_scoring(&mut self.world, &self.config, &mut self.events);

        // 5. Match point
        let winner = check_winner(&self.world, &self.config)?;
        self.running = false;
        self.winner = Some(winner);
        log::info!(
            "{} wins {}-{} after {} ticks",
            side_name(winner),
            self.score(winner),
            self.score(winner.other()),
            self.tick
        );
        Some(winner)
    }

    /// Start a fresh match with the same configuration, stopped
    pub fn reset(&mut self) {
        *self = Self::new(self.config.clone());
    }

    fn component<T: hecs::Component + Copy>(&self, entity: Entity) -> T {
        // Entities are spawned in `new` and never despawned
        *self
            .world
            .get::<&T>(entity)
            .expect("match entity is always present")
    }
}

/// Name shown to players for each side
pub fn side_name(side: Side) -> &'static str {
    match side {
        Side::User => "User",
        Side::Opponent => "AI",
    }
}
