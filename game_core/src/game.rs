//! The game owner: entity world, input and configuration in one place
//!
//! `Game` is what a frame driver talks to. It exposes the two input callbacks
//! (`key_down` / `key_up`), a single-steppable `update`, a side-effect free
//! `draw`, and `frame` which is one of each.

use crate::{
    clear_surface, create_paddle, spawn_balls, step, Arena, Ball, Color, Config, ConfigError,
    Controller, Events, GameRng, InputState, Paddle, Side, Surface,
};
use hecs::{Entity, World};

pub struct Game {
    world: World,
    config: Config,
    arena: Arena,
    input: InputState,
    events: Events,
    balls: Vec<Entity>, // spawn order
    player_paddle: Entity,
    ai_paddle: Entity,
    ai_target: Entity,
    frame: u64,
}

impl Game {
    /// Validate `config` and set up both paddles and the ball batch
    pub fn new(config: Config, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let arena = config.arena();
        let mut world = World::new();
        let mut rng = GameRng::new(seed);

        let player_paddle = spawn_paddle(&mut world, &config, &mut rng, Side::Left);
        let ai_paddle = spawn_paddle(&mut world, &config, &mut rng, Side::Right);
        let balls = spawn_balls(&mut world, &config, &arena, &mut rng);
        let ai_target = *balls.first().ok_or(ConfigError::NoBalls)?;

        log::info!(
            "Game ready: {}x{} arena, {} balls, AI target {:?} ({:?})",
            arena.width,
            arena.height,
            balls.len(),
            ai_target,
            config.ai_target
        );

        Ok(Self {
            world,
            config,
            arena,
            input: InputState::new(),
            events: Events::new(),
            balls,
            player_paddle,
            ai_paddle,
            ai_target,
            frame: 0,
        })
    }

    /// Advance the simulation by one frame
    pub fn update(&mut self) {
        step(
            &mut self.world,
            &self.arena,
            &self.config,
            &self.input,
            self.ai_target,
            &mut self.events,
        );
        self.frame += 1;

        if !self.events.is_empty() {
            log::trace!("Frame {}: {:?}", self.frame, self.events);
        }
    }

    /// Clear the surface and draw every ball, then both paddles
    pub fn draw<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        clear_surface(surface)?;

        for &entity in &self.balls {
            if let Ok(ball) = self.world.get::<&Ball>(entity) {
                ball.draw(surface)?;
            }
        }

        for entity in [self.player_paddle, self.ai_paddle] {
            if let Ok(paddle) = self.world.get::<&Paddle>(entity) {
                paddle.draw(surface)?;
            }
        }

        Ok(())
    }

    /// One iteration of the display loop: update, then draw
    pub fn frame<S: Surface>(&mut self, surface: &mut S) -> Result<(), S::Error> {
        self.update();
        self.draw(surface)
    }

    pub fn key_down(&mut self, key: &str) {
        self.input.key_down(key);
    }

    pub fn key_up(&mut self, key: &str) {
        self.input.key_up(key);
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    /// What happened during the last `update`
    pub fn events(&self) -> &Events {
        &self.events
    }

    /// Number of frames simulated so far
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Ball entities in spawn order
    pub fn ball_entities(&self) -> &[Entity] {
        &self.balls
    }

    /// Snapshot of every ball in spawn order
    pub fn balls(&self) -> Vec<Ball> {
        self.balls
            .iter()
            .filter_map(|&e| self.world.get::<&Ball>(e).ok().map(|ball| *ball))
            .collect()
    }

    pub fn ball(&self, index: usize) -> Option<Ball> {
        let entity = *self.balls.get(index)?;
        self.world.get::<&Ball>(entity).ok().map(|ball| *ball)
    }

    pub fn player_paddle_entity(&self) -> Entity {
        self.player_paddle
    }

    pub fn ai_paddle_entity(&self) -> Entity {
        self.ai_paddle
    }

    pub fn player_paddle(&self) -> Option<Paddle> {
        self.world.get::<&Paddle>(self.player_paddle).ok().map(|p| *p)
    }

    pub fn ai_paddle(&self) -> Option<Paddle> {
        self.world.get::<&Paddle>(self.ai_paddle).ok().map(|p| *p)
    }

    /// The ball the AI follows when the strategy is `AiTarget::Designated`
    pub fn ai_target(&self) -> Entity {
        self.ai_target
    }

    /// Point the AI at another ball. Returns `false` if `entity` is not one
    /// of this game's balls.
    pub fn set_ai_target(&mut self, entity: Entity) -> bool {
        if !self.balls.contains(&entity) {
            return false;
        }
        log::debug!("AI target changed to {:?}", entity);
        self.ai_target = entity;
        true
    }
}

fn spawn_paddle(world: &mut World, config: &Config, rng: &mut GameRng, side: Side) -> Entity {
    let (pos, size) = config.paddle_spawn(side);
    let controller = match side {
        Side::Left => Controller::Player,
        Side::Right => Controller::Ai,
    };
    create_paddle(
        world,
        Paddle::new(
            side,
            controller,
            pos,
            size,
            config.paddle_speed,
            Color::random(rng),
        ),
    )
}
