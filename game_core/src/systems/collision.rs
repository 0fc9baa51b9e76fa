use crate::{intersects, Ball, Config, Events, Paddle, Side};
use hecs::World;

/// Reflect the ball off the top and bottom walls
///
/// The ball is not pushed back inside the field, so it can sit on a wall for a
/// tick before its flipped velocity carries it out.
pub fn bounce_walls(world: &mut World, config: &Config, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let bounds = ball.bounds();
        if bounds.top() <= 0.0 || bounds.bottom() >= config.field_height {
            ball.vel.y = -ball.vel.y;
            events.wall_bounce = true;
        }
    }
}

/// Paddle guarding the half of the field the ball is in
pub fn active_side(ball: &Ball, config: &Config) -> Side {
    if ball.pos.x < config.midfield() {
        Side::User
    } else {
        Side::Opponent
    }
}

/// Redirect the ball off `paddle` and ramp its speed
///
/// The outgoing angle grows with the distance between the contact point and
/// the paddle's center, up to `max_deflection` at the paddle's ends. The ratio
/// is left unclamped, so corner contacts can exceed that angle.
pub fn deflect(ball: &mut Ball, paddle: &Paddle, config: &Config) {
    let half_height = paddle.size.y / 2.0;
    let collide_point = (ball.pos.y - paddle.center_y()) / half_height;
    let angle = config.max_deflection * collide_point;

    let direction = match active_side(ball, config) {
        Side::User => 1.0,
        Side::Opponent => -1.0,
    };

    ball.vel.x = direction * ball.speed * angle.cos();
    ball.vel.y = ball.speed * angle.sin();
    ball.speed += config.ball_speed_step;
}

/// Check the ball against the paddle on its half of the field
pub fn check_paddle_hit(world: &mut World, config: &Config, events: &mut Events) {
    // Copy the paddles out so the ball can be borrowed mutably below
    let paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let side = active_side(ball, config);
        let Some(paddle) = paddles.iter().find(|p| p.side == side) else {
            continue;
        };

        if intersects(ball, paddle) {
            deflect(ball, paddle, config);
            events.paddle_hit = true;
            log::trace!(
                "Paddle hit ({side:?}), speed now {:.1}",
                ball.speed
            );
        }
    }
}
