use crate::{Arena, Ball, Events};
use hecs::World;

/// Send balls that touched a side boundary back to the centre
pub fn respawn_exited_balls(world: &mut World, arena: &Arena, events: &mut Events) {
    for (entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.has_exited(arena) {
            log::debug!(
                "Ball {:?} left the arena at ({:.1}, {:.1}), resetting",
                entity,
                ball.pos.x,
                ball.pos.y
            );
            ball.reset(arena);
            events.resets += 1;
        }
    }
}
