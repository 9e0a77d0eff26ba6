//! The right triangle which makes up the third quadrant of the target.
use crate::*;

/// A right triangle with its right angle at the origin, one leg of length `radius` along the negative x axis and one
/// of length `radius / 2` along the negative y axis.
///
/// Containment only checks the hypotenuse side, `y >= -x/2 - radius/2`. Callers restrict points to the third
/// quadrant, where that half-plane and the triangle coincide.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Triangle {
    radius: f32,
}

impl Triangle {
    pub const fn new(radius: f32) -> Triangle {
        Triangle { radius }
    }

    pub fn get_radius(&self) -> f32 {
        self.radius
    }

    /// The hypotenuse, as the y value it passes through at `x`.
    pub fn hypotenuse_at(&self, x: f32) -> f32 {
        x / -2.0 - self.radius / 2.0
    }

    pub fn contains_point(&self, point: &Point) -> bool {
        point.y() >= self.hypotenuse_at(point.x())
    }
}
