//! A circle centered on the origin.
use crate::*;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Circle {
    radius: f32,
}

impl Circle {
    /// Unchecked: a negative or NaN radius gives a circle containing nothing.
    pub const fn new(radius: f32) -> Circle {
        Circle { radius }
    }

    pub fn get_radius(&self) -> f32 {
        self.radius
    }

    /// Inclusive of the boundary. The point's double precision distance is compared against the widened radius.
    pub fn contains_point(&self, point: &Point) -> bool {
        point.distance() <= f64::from(self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_is_inside() {
        let c = Circle::new(5.0);
        assert!(c.contains_point(&Point::new(-3.0, 4.0)));
        assert!(c.contains_point(&Point::new(0.0, 5.0)));
        assert!(!c.contains_point(&Point::new(-3.0, 4.1)));
    }

    #[test]
    fn degenerate_radii() {
        assert!(Circle::new(0.0).contains_point(&Point::new(0.0, 0.0)));
        assert!(!Circle::new(-1.0).contains_point(&Point::new(0.0, 0.0)));
        assert!(!Circle::new(f32::NAN).contains_point(&Point::new(0.0, 0.0)));
        assert!(Circle::new(f32::INFINITY).contains_point(&Point::new(-1e30, 1e30)));
    }
}
