use crate::{Ball, Config, Events, Paddle, Side};
use hecs::World;

/// Side awarded the point when the ball has left the field horizontally
pub fn exit_scorer(ball: &Ball, config: &Config) -> Option<Side> {
    let bounds = ball.bounds();
    if bounds.left() < 0.0 {
        // Got past the user
        Some(Side::Opponent)
    } else if bounds.right() > config.field_width {
        Some(Side::User)
    } else {
        None
    }
}

/// Check if ball left the field, award the point and serve again
pub fn check_scoring(world: &mut World, config: &Config, events: &mut Events) {
    let mut scorers = Vec::new();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if let Some(side) = exit_scorer(ball, config) {
            scorers.push(side);
            ball.reset(config.center(), config.ball_speed_base);
        }
    }

    for side in scorers {
        for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
            if paddle.side == side {
                paddle.score += 1;
                log::debug!("Point to {:?}, score now {}", side, paddle.score);
            }
        }
        events.record_point(side);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn setup_world() -> (World, Config, Events) {
        let mut world = World::new();
        let config = Config::new();
        for side in [Side::User, Side::Opponent] {
            world.spawn((Paddle::new(
                side,
                config.paddle_origin(side),
                Vec2::new(config.paddle_width, config.paddle_height),
            ),));
        }
        (world, config, Events::new())
    }

    fn score_of(world: &World, side: Side) -> u32 {
        world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| p.score)
            .unwrap()
    }

    #[test]
    fn test_opponent_scores_when_ball_exits_left() {
        let (mut world, config, mut events) = setup_world();
        let ball = world.spawn((Ball::new(Vec2::new(9.0, 120.0), Vec2::new(-6.0, 2.5), 10.0, 8.4),));

        check_scoring(&mut world, &config, &mut events);

        assert_eq!(score_of(&world, Side::Opponent), 1);
        assert_eq!(score_of(&world, Side::User), 0);
        assert!(events.opponent_scored);

        let ball = world.get::<&Ball>(ball).unwrap();
        assert_eq!(ball.pos, config.center());
        assert_eq!(ball.speed, config.ball_speed_base);
        assert_eq!(ball.vel, Vec2::new(6.0, -2.5), "Serve reverses both components");
    }

    #[test]
    fn test_user_scores_when_ball_exits_right() {
        let (mut world, config, mut events) = setup_world();
        world.spawn((Ball::new(Vec2::new(591.0, 300.0), Vec2::new(7.0, 1.0), 10.0, 7.0),));

        check_scoring(&mut world, &config, &mut events);

        assert_eq!(score_of(&world, Side::User), 1);
        assert_eq!(score_of(&world, Side::Opponent), 0);
        assert!(events.user_scored);
    }

    #[test]
    fn test_ball_touching_edge_is_still_in_play() {
        let (mut world, config, mut events) = setup_world();
        // Left edge exactly on the field boundary
        world.spawn((Ball::new(Vec2::new(10.0, 200.0), Vec2::new(-7.0, 0.0), 10.0, 7.0),));

        check_scoring(&mut world, &config, &mut events);

        assert_eq!(score_of(&world, Side::Opponent), 0);
        assert_eq!(events.scorer(), None);
    }

    #[test]
    fn test_multiple_scores_accumulate() {
        let (mut world, config, mut events) = setup_world();
        let ball = world.spawn((Ball::new(Vec2::new(-1.0, 200.0), Vec2::new(-7.0, 0.0), 10.0, 7.0),));

        check_scoring(&mut world, &config, &mut events);
        events.clear();
        world.get::<&mut Ball>(ball).unwrap().pos.x = -1.0;
        check_scoring(&mut world, &config, &mut events);

        assert_eq!(score_of(&world, Side::Opponent), 2, "Scores should accumulate");
        assert_eq!(score_of(&world, Side::User), 0);
    }
}
