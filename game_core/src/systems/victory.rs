use crate::{Config, Paddle, Side};
use hecs::World;

/// Side that has reached the winning score
///
/// The opponent is checked first, so it takes the match if both sides somehow
/// reach the threshold on the same tick.
pub fn check_winner(world: &World, config: &Config) -> Option<Side> {
    let mut user = 0;
    let mut opponent = 0;
    for (_e, paddle) in world.query::<&Paddle>().iter() {
        match paddle.side {
            Side::User => user = paddle.score,
            Side::Opponent => opponent = paddle.score,
        }
    }

    if opponent >= config.win_score {
        Some(Side::Opponent)
    } else if user >= config.win_score {
        Some(Side::User)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn world_with_scores(user: u32, opponent: u32) -> World {
        let mut world = World::new();
        for (side, score) in [(Side::User, user), (Side::Opponent, opponent)] {
            let mut paddle = Paddle::new(side, Vec2::ZERO, Vec2::new(10.0, 100.0));
            paddle.score = score;
            world.spawn((paddle,));
        }
        world
    }

    #[test]
    fn test_no_winner_below_threshold() {
        let config = Config::new();
        assert_eq!(check_winner(&world_with_scores(19, 19), &config), None);
    }

    #[test]
    fn test_user_wins_at_threshold() {
        let config = Config::new();
        assert_eq!(
            check_winner(&world_with_scores(20, 3), &config),
            Some(Side::User)
        );
    }

    #[test]
    fn test_opponent_wins_at_threshold() {
        let config = Config::new();
        assert_eq!(
            check_winner(&world_with_scores(0, 20), &config),
            Some(Side::Opponent)
        );
    }

    #[test]
    fn test_opponent_takes_tie() {
        let config = Config::new();
        assert_eq!(
            check_winner(&world_with_scores(20, 20), &config),
            Some(Side::Opponent)
        );
    }
}
