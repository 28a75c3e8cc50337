//! Drawing contract between the simulation and whatever displays it
//!
//! The simulation never touches a display directly; callers hand in a
//! [`Surface`] and the entities draw themselves onto it.

use crate::{Ball, Color, Paddle};
use glam::Vec2;

/// A 2D surface that can clear a region and fill circles and rectangles
pub trait Surface {
    type Error;

    /// Drawable width and height
    fn size(&self) -> Vec2;

    fn clear(&mut self, origin: Vec2, size: Vec2) -> Result<(), Self::Error>;

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) -> Result<(), Self::Error>;

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color) -> Result<(), Self::Error>;
}

impl Ball {
    pub fn draw<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        surface.fill_circle(self.pos, self.radius(), self.color)
    }
}

impl Paddle {
    pub fn draw<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        surface.fill_rect(self.pos, self.size, self.color)
    }
}

/// Wipe the whole surface
pub fn clear_surface<S: Surface>(surface: &mut S) -> Result<(), S::Error> {
    let size = surface.size();
    surface.clear(Vec2::ZERO, size)
}
