use crate::{Arena, Controller, Direction, InputState, KeyBindings, Paddle};
use hecs::World;

/// Move player paddles from the held keys.
///
/// Up is applied before down, so holding both ends on the down step
/// (modulo clamping at the arena edges).
pub fn apply_player_input(
    world: &mut World,
    arena: &Arena,
    input: &InputState,
    keys: &KeyBindings,
) {
    let up = input.is_held(&keys.up);
    let down = input.is_held(&keys.down);
    if !up && !down {
        return;
    }

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.controller != Controller::Player {
            continue;
        }
        if up {
            paddle.shift(Direction::Up, arena);
        }
        if down {
            paddle.shift(Direction::Down, arena);
        }
    }
}
