use crate::Side;

/// Events that occurred during this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Events {
    pub wall_bounce: bool,
    pub paddle_hit: bool,
    pub user_scored: bool,
    pub opponent_scored: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.wall_bounce = false;
        self.paddle_hit = false;
        self.user_scored = false;
        self.opponent_scored = false;
    }

    /// Side that won a point this tick, if any
    pub fn scorer(&self) -> Option<Side> {
        if self.opponent_scored {
            Some(Side::Opponent)
        } else if self.user_scored {
            Some(Side::User)
        } else {
            None
        }
    }

    pub(crate) fn record_point(&mut self, side: Side) {
        match side {
            Side::User => self.user_scored = true,
            Side::Opponent => self.opponent_scored = true,
        }
    }
}
