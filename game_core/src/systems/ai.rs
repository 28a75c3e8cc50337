use crate::{AiTarget, Arena, Ball, Controller, Paddle};
use hecs::{Entity, World};

/// Pick the ball an AI paddle should follow
pub fn select_target(
    world: &World,
    paddle: &Paddle,
    strategy: AiTarget,
    designated: Entity,
) -> Option<Ball> {
    match strategy {
        AiTarget::Designated => world.get::<&Ball>(designated).ok().map(|ball| *ball),
        AiTarget::Nearest => {
            let center = paddle.center();
            world
                .query::<&Ball>()
                .iter()
                .map(|(_e, ball)| *ball)
                .min_by(|a, b| {
                    a.pos
                        .distance_squared(center)
                        .total_cmp(&b.pos.distance_squared(center))
                })
        }
    }
}

/// Move every AI paddle one step toward its target ball
pub fn track_target(world: &mut World, arena: &Arena, strategy: AiTarget, designated: Entity) {
    let ai_paddles: Vec<(Entity, Paddle)> = world
        .query::<&Paddle>()
        .iter()
        .filter(|(_e, paddle)| paddle.controller == Controller::Ai)
        .map(|(e, paddle)| (e, *paddle))
        .collect();

    for (entity, paddle) in ai_paddles {
        let Some(target) = select_target(world, &paddle, strategy, designated) else {
            log::warn!("AI paddle {:?} has no ball to track", entity);
            continue;
        };

        if let Ok(mut paddle) = world.get::<&mut Paddle>(entity) {
            paddle.auto_move(&target, arena);
        }
    }
}
