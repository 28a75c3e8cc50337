use crate::{Arena, Params, Side};
use glam::Vec2;
use thiserror::Error;

/// How the AI paddle picks the ball it follows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AiTarget {
    /// Always the first ball spawned, for the whole game
    #[default]
    Designated,
    /// Whichever ball centre is closest to the AI paddle this frame
    Nearest,
}

/// Keys that drive the player paddle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    pub up: String,
    pub down: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            up: Params::KEY_UP.to_string(),
            down: Params::KEY_DOWN.to_string(),
        }
    }
}

/// Rejected game configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("arena must have a positive size, got {width}x{height}")]
    InvalidArena { width: f32, height: f32 },

    #[error("at least one ball is required")]
    NoBalls,

    #[error("ball radius range {min}..={max} is invalid")]
    InvalidRadiusRange { min: f32, max: f32 },

    #[error("ball speed range {min}..={max} is invalid")]
    InvalidSpeedRange { min: f32, max: f32 },

    #[error("paddle dimension must be positive, got {0}")]
    InvalidPaddleSize(f32),

    #[error("paddle speed must be positive, got {0}")]
    InvalidPaddleSpeed(f32),

    #[error("paddle height {height} does not fit in arena height {arena_height}")]
    PaddleTooTall { height: f32, arena_height: f32 },

    #[error("two paddles {width} wide do not fit in arena width {arena_width}")]
    PaddleTooWide { width: f32, arena_width: f32 },
}

/// Game configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub ball_count: usize,
    pub ball_radius_min: f32,
    pub ball_radius_max: f32,
    pub ball_speed_min: f32,
    pub ball_speed_max: f32,
    pub paddle_width: f32,
    pub player_paddle_height: f32,
    pub ai_paddle_height: f32,
    pub paddle_speed: f32,
    pub keys: KeyBindings,
    pub ai_target: AiTarget,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            ball_count: Params::BALL_COUNT,
            ball_radius_min: Params::BALL_RADIUS_MIN,
            ball_radius_max: Params::BALL_RADIUS_MAX,
            ball_speed_min: Params::BALL_SPEED_MIN,
            ball_speed_max: Params::BALL_SPEED_MAX,
            paddle_width: Params::PADDLE_WIDTH,
            player_paddle_height: Params::PLAYER_PADDLE_HEIGHT,
            ai_paddle_height: Params::AI_PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            keys: KeyBindings::default(),
            ai_target: AiTarget::default(),
        }
    }
}

fn positive(v: f32) -> bool {
    v.is_finite() && v > 0.0
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_arena(mut self, width: f32, height: f32) -> Self {
        self.arena_width = width;
        self.arena_height = height;
        self
    }

    pub fn with_ball_count(mut self, count: usize) -> Self {
        self.ball_count = count;
        self
    }

    pub fn with_ai_target(mut self, target: AiTarget) -> Self {
        self.ai_target = target;
        self
    }

    pub fn with_keys(mut self, up: &str, down: &str) -> Self {
        self.keys = KeyBindings {
            up: up.to_string(),
            down: down.to_string(),
        };
        self
    }

    pub fn arena(&self) -> Arena {
        Arena::new(self.arena_width, self.arena_height)
    }

    pub fn paddle_height(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.player_paddle_height,
            Side::Right => self.ai_paddle_height,
        }
    }

    /// Top-left corner and size of a paddle at kick-off, vertically centred
    pub fn paddle_spawn(&self, side: Side) -> (Vec2, Vec2) {
        let size = Vec2::new(self.paddle_width, self.paddle_height(side));
        let x = match side {
            Side::Left => 0.0,
            Side::Right => self.arena_width - self.paddle_width,
        };
        let y = self.arena_height / 2.0 - size.y / 2.0;
        (Vec2::new(x, y), size)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !positive(self.arena_width) || !positive(self.arena_height) {
            return Err(ConfigError::InvalidArena {
                width: self.arena_width,
                height: self.arena_height,
            });
        }

        if self.ball_count == 0 {
            return Err(ConfigError::NoBalls);
        }

        if !positive(self.ball_radius_min)
            || !self.ball_radius_max.is_finite()
            || self.ball_radius_min > self.ball_radius_max
        {
            return Err(ConfigError::InvalidRadiusRange {
                min: self.ball_radius_min,
                max: self.ball_radius_max,
            });
        }

        if !self.ball_speed_min.is_finite()
            || !self.ball_speed_max.is_finite()
            || self.ball_speed_min < 0.0
            || self.ball_speed_min > self.ball_speed_max
        {
            return Err(ConfigError::InvalidSpeedRange {
                min: self.ball_speed_min,
                max: self.ball_speed_max,
            });
        }

        for dim in [
            self.paddle_width,
            self.player_paddle_height,
            self.ai_paddle_height,
        ] {
            if !positive(dim) {
                return Err(ConfigError::InvalidPaddleSize(dim));
            }
        }

        if !positive(self.paddle_speed) {
            return Err(ConfigError::InvalidPaddleSpeed(self.paddle_speed));
        }

        let tallest = self.player_paddle_height.max(self.ai_paddle_height);
        if tallest > self.arena_height {
            return Err(ConfigError::PaddleTooTall {
                height: tallest,
                arena_height: self.arena_height,
            });
        }

        if self.paddle_width * 2.0 > self.arena_width {
            return Err(ConfigError::PaddleTooWide {
                width: self.paddle_width,
                arena_width: self.arena_width,
            });
        }

        Ok(())
    }
}
