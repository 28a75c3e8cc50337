use crate::{Arena, GameRng};
use glam::Vec2;
use rand::Rng;
use std::fmt;

/// Opaque fill colour for balls and paddles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn random(rng: &mut GameRng) -> Self {
        Self::rgb(rng.0.gen(), rng.0.gen(), rng.0.gen())
    }

    /// `#RRGGBB`, as accepted by canvas `fillStyle`
    pub fn to_css(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

/// Which edge of the arena a paddle guards
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    Left,
    Right,
}

/// Who drives a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controller {
    Player,
    Ai,
}

/// Vertical paddle movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Parse `"up"` / `"down"`; anything else is not a direction
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            _ => None,
        }
    }
}

/// Ball component
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2, // pixels per frame
    pub color: Color,
    radius: f32, // fixed at creation
}

impl Ball {
    pub fn new(pos: Vec2, radius: f32, vel: Vec2, color: Color) -> Self {
        Self {
            pos,
            vel,
            color,
            radius,
        }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn left_edge(&self) -> f32 {
        self.pos.x - self.radius
    }

    pub fn right_edge(&self) -> f32 {
        self.pos.x + self.radius
    }

    /// Integrate one frame of motion, then bounce off the top or bottom wall.
    ///
    /// The bounce is a sign flip of the vertical speed only; the position is
    /// not pushed back inside. Returns `true` when a bounce happened.
    pub fn advance(&mut self, arena: &Arena) -> bool {
        self.pos += self.vel;

        if self.pos.y - self.radius <= 0.0 || self.pos.y + self.radius >= arena.height {
            self.vel.y = -self.vel.y;
            true
        } else {
            false
        }
    }

    pub fn reflect_x(&mut self) {
        self.vel.x = -self.vel.x;
    }

    /// Recentre and send the ball back the other way.
    ///
    /// Only the horizontal speed changes sign; vertical speed is kept as is.
    pub fn reset(&mut self, arena: &Arena) {
        self.pos = arena.center();
        self.reflect_x();
    }

    /// Overlap test against a paddle's inner face.
    ///
    /// The ball centre must lie within the paddle's vertical span (inclusive)
    /// and the ball's near edge must have reached the paddle's inner face.
    pub fn hits(&self, paddle: &Paddle) -> bool {
        let within_span = self.pos.y >= paddle.top() && self.pos.y <= paddle.bottom();
        let reached = match paddle.side {
            Side::Left => self.left_edge() <= paddle.pos.x + paddle.size.x,
            Side::Right => self.right_edge() >= paddle.pos.x,
        };
        reached && within_span
    }

    /// Whether the ball has touched or crossed a side boundary
    pub fn has_exited(&self, arena: &Arena) -> bool {
        self.left_edge() <= 0.0 || self.right_edge() >= arena.width
    }
}

/// Paddle component
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub controller: Controller,
    pub pos: Vec2,  // top-left corner; x never changes
    pub size: Vec2, // width, height
    pub speed: f32,
    pub color: Color,
}

impl Paddle {
    pub fn new(
        side: Side,
        controller: Controller,
        pos: Vec2,
        size: Vec2,
        speed: f32,
        color: Color,
    ) -> Self {
        Self {
            side,
            controller,
            pos,
            size,
            speed,
            color,
        }
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Move one step of `speed`, staying inside `[0, arena.height - height]`
    pub fn shift(&mut self, dir: Direction, arena: &Arena) {
        let delta = match dir {
            Direction::Up => -self.speed,
            Direction::Down => self.speed,
        };
        self.pos.y = arena.clamp_y(self.pos.y + delta, self.size.y);
    }

    /// Move by name; unknown names leave the paddle where it is
    pub fn shift_named(&mut self, name: &str, arena: &Arena) {
        if let Some(dir) = Direction::parse(name) {
            self.shift(dir, arena);
        }
    }

    /// Step toward the target's height. No deadband: an exact match is the
    /// only case that holds still.
    pub fn auto_move(&mut self, target: &Ball, arena: &Arena) {
        let center_y = self.center().y;
        if target.pos.y < center_y {
            self.shift(Direction::Up, arena);
        } else if target.pos.y > center_y {
            self.shift(Direction::Down, arena);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Color = Color::rgb(255, 255, 255);

    fn arena() -> Arena {
        Arena::new(800.0, 600.0)
    }

    fn ball(x: f32, y: f32, radius: f32, vx: f32, vy: f32) -> Ball {
        Ball::new(Vec2::new(x, y), radius, Vec2::new(vx, vy), WHITE)
    }

    fn left_paddle(y: f32) -> Paddle {
        Paddle::new(
            Side::Left,
            Controller::Player,
            Vec2::new(0.0, y),
            Vec2::new(10.0, 200.0),
            5.0,
            WHITE,
        )
    }

    fn right_paddle(y: f32) -> Paddle {
        Paddle::new(
            Side::Right,
            Controller::Ai,
            Vec2::new(790.0, y),
            Vec2::new(10.0, 100.0),
            5.0,
            WHITE,
        )
    }

    #[test]
    fn test_color_css() {
        assert_eq!(Color::rgb(0, 0, 0).to_css(), "#000000");
        assert_eq!(Color::rgb(255, 16, 1).to_css(), "#FF1001");
        assert_eq!(Color::rgb(10, 171, 205).to_string(), "#0AABCD");
    }

    #[test]
    fn test_direction_parse() {
        assert_eq!(Direction::parse("up"), Some(Direction::Up));
        assert_eq!(Direction::parse("down"), Some(Direction::Down));
        assert_eq!(Direction::parse("left"), None);
        assert_eq!(Direction::parse("Up"), None);
    }

    #[test]
    fn test_ball_advance_adds_velocity() {
        let mut b = ball(400.0, 300.0, 10.0, 3.0, -4.0);
        let bounced = b.advance(&arena());
        assert!(!bounced);
        assert_eq!(b.pos, Vec2::new(403.0, 296.0));
        assert_eq!(b.vel, Vec2::new(3.0, -4.0));
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let mut b = ball(400.0, 13.0, 10.0, 3.0, -4.0);
        assert!(b.advance(&arena()));
        assert_eq!(b.pos.y, 9.0, "Position is not pushed back inside");
        assert_eq!(b.vel.y, 4.0);
        assert_eq!(b.vel.x, 3.0, "Horizontal speed untouched by walls");
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall_when_touching() {
        // Lands exactly on the wall: 586 + 4 + 10 = 600
        let mut b = ball(400.0, 586.0, 10.0, 3.0, 4.0);
        assert!(b.advance(&arena()));
        assert_eq!(b.vel.y, -4.0);
    }

    #[test]
    fn test_ball_does_not_reflect_off_side_walls() {
        let mut b = ball(5.0, 300.0, 10.0, -3.0, 1.0);
        b.advance(&arena());
        assert_eq!(b.vel.x, -3.0);
    }

    #[test]
    fn test_ball_reset_recenters_and_flips_x_only() {
        let mut b = ball(-3.0, 120.0, 10.0, 3.0, -2.5);
        b.reset(&arena());
        assert_eq!(b.pos, Vec2::new(400.0, 300.0));
        assert_eq!(b.vel, Vec2::new(-3.0, -2.5));

        b.reset(&arena());
        assert_eq!(b.pos, Vec2::new(400.0, 300.0));
        assert_eq!(b.vel, Vec2::new(3.0, -2.5));
    }

    #[test]
    fn test_ball_reset_keeps_radius_and_color() {
        let mut b = Ball::new(
            Vec2::new(1.0, 2.0),
            17.5,
            Vec2::new(2.0, 2.0),
            Color::rgb(1, 2, 3),
        );
        b.reset(&arena());
        assert_eq!(b.radius(), 17.5);
        assert_eq!(b.color, Color::rgb(1, 2, 3));
    }

    #[test]
    fn test_ball_hits_left_paddle() {
        // 15 - 10 = 5 <= 0 + 10, and 300 is within [250, 450]
        let b = ball(15.0, 300.0, 10.0, -2.0, 0.0);
        assert!(b.hits(&left_paddle(250.0)));
    }

    #[test]
    fn test_ball_hits_left_paddle_span_is_inclusive() {
        let p = left_paddle(250.0);
        assert!(ball(15.0, 250.0, 10.0, -2.0, 0.0).hits(&p));
        assert!(ball(15.0, 450.0, 10.0, -2.0, 0.0).hits(&p));
        assert!(!ball(15.0, 249.9, 10.0, -2.0, 0.0).hits(&p));
        assert!(!ball(15.0, 450.1, 10.0, -2.0, 0.0).hits(&p));
    }

    #[test]
    fn test_ball_misses_left_paddle_when_far() {
        let b = ball(30.0, 300.0, 10.0, -2.0, 0.0);
        assert!(!b.hits(&left_paddle(250.0)));
    }

    #[test]
    fn test_ball_hits_right_paddle() {
        let p = right_paddle(250.0);
        assert!(ball(780.0, 300.0, 10.0, 2.0, 0.0).hits(&p));
        assert!(!ball(779.0, 300.0, 10.0, 2.0, 0.0).hits(&p));
        assert!(!ball(785.0, 200.0, 10.0, 2.0, 0.0).hits(&p));
    }

    #[test]
    fn test_ball_has_exited() {
        let a = arena();
        assert!(ball(10.0, 300.0, 10.0, -2.0, 0.0).has_exited(&a));
        assert!(ball(-40.0, 300.0, 10.0, -2.0, 0.0).has_exited(&a));
        assert!(ball(790.0, 300.0, 10.0, 2.0, 0.0).has_exited(&a));
        assert!(!ball(11.0, 300.0, 10.0, -2.0, 0.0).has_exited(&a));
        assert!(!ball(400.0, 300.0, 10.0, 2.0, 0.0).has_exited(&a));
    }

    #[test]
    fn test_paddle_shift_up_clamps_at_top() {
        let mut p = left_paddle(0.0);
        p.shift(Direction::Up, &arena());
        assert_eq!(p.pos.y, 0.0);

        let mut p = left_paddle(3.0);
        p.shift(Direction::Up, &arena());
        assert_eq!(p.pos.y, 0.0, "Partial step is clamped, not overshot");
    }

    #[test]
    fn test_paddle_shift_down_clamps_at_bottom() {
        let mut p = left_paddle(398.0);
        p.shift(Direction::Down, &arena());
        assert_eq!(p.pos.y, 400.0);
        p.shift(Direction::Down, &arena());
        assert_eq!(p.pos.y, 400.0);
    }

    #[test]
    fn test_paddle_shift_moves_by_speed() {
        let mut p = left_paddle(200.0);
        p.shift(Direction::Down, &arena());
        assert_eq!(p.pos.y, 205.0);
        p.shift(Direction::Up, &arena());
        p.shift(Direction::Up, &arena());
        assert_eq!(p.pos.y, 195.0);
        assert_eq!(p.pos.x, 0.0, "x never changes");
    }

    #[test]
    fn test_paddle_shift_named_ignores_unknown() {
        let mut p = left_paddle(200.0);
        p.shift_named("sideways", &arena());
        assert_eq!(p.pos.y, 200.0);
        p.shift_named("up", &arena());
        assert_eq!(p.pos.y, 195.0);
        p.shift_named("down", &arena());
        assert_eq!(p.pos.y, 200.0);
    }

    #[test]
    fn test_paddle_auto_move() {
        let a = arena();

        // Centre at 300
        let mut p = right_paddle(250.0);
        p.auto_move(&ball(400.0, 100.0, 10.0, 2.0, 2.0), &a);
        assert_eq!(p.pos.y, 245.0, "Ball above centre: move up");

        let mut p = right_paddle(250.0);
        p.auto_move(&ball(400.0, 500.0, 10.0, 2.0, 2.0), &a);
        assert_eq!(p.pos.y, 255.0, "Ball below centre: move down");

        let mut p = right_paddle(250.0);
        p.auto_move(&ball(400.0, 300.0, 10.0, 2.0, 2.0), &a);
        assert_eq!(p.pos.y, 250.0, "Exactly level: hold");
    }

    #[test]
    fn test_paddle_auto_move_oscillates_around_target() {
        let a = arena();
        let target = ball(400.0, 302.0, 10.0, 2.0, 2.0);
        let mut p = right_paddle(250.0);

        p.auto_move(&target, &a);
        assert_eq!(p.pos.y, 255.0);
        p.auto_move(&target, &a);
        assert_eq!(p.pos.y, 250.0);
        p.auto_move(&target, &a);
        assert_eq!(p.pos.y, 255.0);
    }

    #[test]
    fn test_paddle_auto_move_is_clamped() {
        let a = arena();
        let mut p = right_paddle(500.0);
        p.auto_move(&ball(400.0, 590.0, 10.0, 2.0, 2.0), &a);
        assert_eq!(p.pos.y, 500.0);
    }
}
