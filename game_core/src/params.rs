/// Game tuning parameters for multi-ball Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena (pixels)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PLAYER_PADDLE_HEIGHT: f32 = 200.0; // Double height for the human
    pub const AI_PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_SPEED: f32 = 5.0; // pixels per frame

    // Ball
    pub const BALL_COUNT: usize = 5;
    pub const BALL_RADIUS_MIN: f32 = 10.0;
    pub const BALL_RADIUS_MAX: f32 = 20.0;
    pub const BALL_SPEED_MIN: f32 = 2.0; // per axis, pixels per frame
    pub const BALL_SPEED_MAX: f32 = 6.0;

    // Input (KeyboardEvent.key names)
    pub const KEY_UP: &'static str = "ArrowUp";
    pub const KEY_DOWN: &'static str = "ArrowDown";
}
