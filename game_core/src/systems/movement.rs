use crate::Ball;
use hecs::World;

/// Move ball by one tick of velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_ball_advances_by_velocity() {
        let mut world = World::new();
        let entity = world.spawn((Ball::new(
            Vec2::new(300.0, 200.0),
            Vec2::new(-5.0, 3.0),
            10.0,
            7.0,
        ),));

        move_ball(&mut world);
        move_ball(&mut world);

        let ball = world.get::<&Ball>(entity).unwrap();
        assert_eq!(ball.pos, Vec2::new(290.0, 206.0));
        assert_eq!(ball.vel, Vec2::new(-5.0, 3.0), "Velocity is untouched");
    }
}
