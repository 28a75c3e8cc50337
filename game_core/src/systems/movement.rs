use crate::{Arena, Ball, Events};
use hecs::World;

/// Advance every ball by its velocity and bounce it off the top and bottom walls
pub fn move_balls(world: &mut World, arena: &Arena, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.advance(arena) {
            events.wall_bounces += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, Color};
    use glam::Vec2;

    #[test]
    fn test_all_balls_move() {
        let mut world = World::new();
        let arena = Arena::new(800.0, 600.0);
        let mut events = Events::new();
        let a = create_ball(
            &mut world,
            Ball::new(
                Vec2::new(400.0, 300.0),
                10.0,
                Vec2::new(2.0, 3.0),
                Color::rgb(0, 0, 0),
            ),
        );
        let b = create_ball(
            &mut world,
            Ball::new(
                Vec2::new(100.0, 100.0),
                15.0,
                Vec2::new(-4.0, -5.0),
                Color::rgb(0, 0, 0),
            ),
        );

        move_balls(&mut world, &arena, &mut events);

        assert_eq!(world.get::<&Ball>(a).unwrap().pos, Vec2::new(402.0, 303.0));
        assert_eq!(world.get::<&Ball>(b).unwrap().pos, Vec2::new(96.0, 95.0));
        assert_eq!(events.wall_bounces, 0);
    }

    #[test]
    fn test_wall_bounces_are_counted() {
        let mut world = World::new();
        let arena = Arena::new(800.0, 600.0);
        let mut events = Events::new();
        for y in [12.0, 588.0] {
            let vy = if y < 300.0 { -3.0 } else { 3.0 };
            create_ball(
                &mut world,
                Ball::new(
                    Vec2::new(400.0, y),
                    10.0,
                    Vec2::new(2.0, vy),
                    Color::rgb(0, 0, 0),
                ),
            );
        }

        move_balls(&mut world, &arena, &mut events);

        assert_eq!(events.wall_bounces, 2);
        for (_e, ball) in world.query::<&Ball>().iter() {
            let heading_inside = if ball.pos.y < 300.0 {
                ball.vel.y > 0.0
            } else {
                ball.vel.y < 0.0
            };
            assert!(heading_inside, "Ball should head back into the arena");
        }
    }
}
