use crate::{Ball, Events, Paddle};
use hecs::World;

/// Reflect balls off the paddles.
///
/// Paddles are checked left first, then right, and every match flips the
/// horizontal speed. A ball inside both paddles' spans on the same frame is
/// flipped twice and keeps its direction.
pub fn check_paddle_collisions(world: &mut World, events: &mut Events) {
    // Snapshot paddles so the ball query can borrow the world mutably
    let mut paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();
    paddles.sort_by_key(|paddle| paddle.side);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for paddle in &paddles {
            if ball.hits(paddle) {
                ball.reflect_x();
                events.paddle_hits += 1;
            }
        }
    }
}
