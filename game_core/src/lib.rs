pub mod components;
pub mod config;
pub mod game;
pub mod map;
pub mod params;
pub mod render;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use game::*;
pub use map::*;
pub use params::*;
pub use render::*;
pub use resources::*;

use hecs::{Entity, World};
use rand::Rng;
use systems::*;

/// Run one frame of the simulation.
///
/// Balls move, bounce off paddles and reset when they leave the arena; then
/// the player paddle follows the held keys and the AI paddle follows its
/// target. Each ball is resolved independently, so running each phase over
/// all balls gives the same result as running all phases ball by ball.
pub fn step(
    world: &mut World,
    arena: &Arena,
    config: &Config,
    input: &InputState,
    ai_target: Entity,
    events: &mut Events,
) {
    // Clear events at start of frame
    events.clear();

    // 1. Balls: motion and wall bounce
    move_balls(world, arena, events);

    // 2. Balls: left paddle, then right paddle
    check_paddle_collisions(world, events);

    // 3. Balls: side exits
    respawn_exited_balls(world, arena, events);

    // 4. Player paddle from held keys
    apply_player_input(world, arena, input, &config.keys);

    // 5. AI paddle
    track_target(world, arena, config.ai_target, ai_target);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, paddle: Paddle) -> Entity {
    world.spawn((paddle,))
}

/// Helper to create a ball entity
pub fn create_ball(world: &mut World, ball: Ball) -> Entity {
    world.spawn((ball,))
}

/// Spawn `config.ball_count` balls at the arena centre with random radius,
/// speed and colour. Returned in spawn order.
pub fn spawn_balls(
    world: &mut World,
    config: &Config,
    arena: &Arena,
    rng: &mut GameRng,
) -> Vec<Entity> {
    (0..config.ball_count)
        .map(|_| {
            let radius = rng
                .0
                .gen_range(config.ball_radius_min..=config.ball_radius_max);
            let speed_x = rng
                .0
                .gen_range(config.ball_speed_min..=config.ball_speed_max);
            let speed_y = rng
                .0
                .gen_range(config.ball_speed_min..=config.ball_speed_max);
            let color = Color::random(rng);
            create_ball(
                world,
                Ball::new(
                    arena.center(),
                    radius,
                    glam::Vec2::new(speed_x, speed_y),
                    color,
                ),
            )
        })
        .collect()
}
