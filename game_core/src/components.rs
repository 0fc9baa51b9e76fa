use glam::Vec2;

/// Which end of the field a paddle guards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    User,     // left
    Opponent, // right
}

impl Side {
    pub fn other(self) -> Self {
        match self {
            Side::User => Side::Opponent,
            Side::Opponent => Side::User,
        }
    }
}

/// Display color, only read by renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    White,
    Yellow,
    Red,
    Black,
}

/// Ball component - the game ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub speed: f32, // magnitude used for the next deflection
    pub color: Color,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, speed: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            speed,
            color: Color::White,
        }
    }

    /// Re-center the ball and serve it back the way it came
    pub fn reset(&mut self, center: Vec2, base_speed: f32) {
        self.pos = center;
        self.speed = base_speed;
        self.vel = -self.vel;
    }
}

/// Paddle component - one of the two bats
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2,  // top-left corner
    pub size: Vec2, // width, height
    pub score: u32,
    pub color: Color,
}

impl Paddle {
    pub fn new(side: Side, pos: Vec2, size: Vec2) -> Self {
        let color = match side {
            Side::User => Color::Yellow,
            Side::Opponent => Color::Red,
        };
        Self {
            side,
            pos,
            size,
            score: 0,
            color,
        }
    }

    /// Vertical center of the paddle
    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }
}

/// Dashed center line; decoration only, the ball passes through it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Net {
    pub pos: Vec2,
    pub segment: Vec2, // width, height of one dash
    pub spacing: f32,
    pub color: Color,
}

impl Net {
    pub fn new(config: &crate::Config) -> Self {
        Self {
            pos: Vec2::new(config.midfield() - config.net_width / 2.0, 0.0),
            segment: Vec2::new(config.net_width, config.net_segment),
            spacing: config.net_spacing,
            color: Color::White,
        }
    }

    /// Top edge of every dash from the top of the field down to `field_height`
    pub fn segments(&self, field_height: f32) -> impl Iterator<Item = f32> + '_ {
        let step = self.spacing.max(f32::EPSILON);
        (0..)
            .map(move |i| i as f32 * step)
            .take_while(move |offset| *offset <= field_height)
            .map(move |offset| self.pos.y + offset)
    }
}
