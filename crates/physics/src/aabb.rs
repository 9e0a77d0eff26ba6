//! An axis-aligned rectangle.
use crate::errors::*;
use crate::*;

/// A closed axis-aligned box spanning the lower left corner `p1` to the upper right corner `p2`.
///
/// Both edges are inclusive. A box whose corners are inverted contains nothing.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    p1: V2<f32>,
    p2: V2<f32>,
}

impl Aabb {
    /// Build a box from two corners without checking them.
    ///
    /// Used when the corners are derived from a radius which may be negative; the resulting empty box is exactly
    /// the behavior wanted there.
    pub const fn from_corners(p1: V2<f32>, p2: V2<f32>) -> Aabb {
        Aabb { p1, p2 }
    }

    pub fn from_points(p1: V2<f32>, p2: V2<f32>) -> Result<Aabb, AabbError> {
        if [p1.x, p1.y, p2.x, p2.y].iter().any(|c| c.is_nan()) {
            return Err(AabbError::AabbNanCoordinate);
        }

        if p1.x > p2.x || p1.y > p2.y {
            return Err(AabbError::AabbInvertedCorners);
        }

        Ok(Aabb { p1, p2 })
    }

    pub fn get_p1(&self) -> V2<f32> {
        self.p1
    }

    pub fn get_p2(&self) -> V2<f32> {
        self.p2
    }

    pub fn get_width(&self) -> f32 {
        (self.p2 - self.p1).x
    }

    pub fn get_height(&self) -> f32 {
        (self.p2 - self.p1).y
    }

    pub fn contains_point(&self, point: &Point) -> bool {
        let x = point.x();
        let y = point.y();
        self.p1.x <= x && x <= self.p2.x && self.p1.y <= y && y <= self.p2.y
    }
}
