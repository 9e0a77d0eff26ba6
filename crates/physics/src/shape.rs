//! A shape is one of the concrete shape types behind an enum, so a silhouette can hold one per quadrant.
use crate::*;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Shape {
    Aabb(Aabb),
    Circle(Circle),
    Triangle(Triangle),
    /// Nothing to hit.
    Empty,
}

impl Shape {
    pub fn contains(&self, point: &Point) -> bool {
        match self {
            Shape::Aabb(ref a) => a.contains_point(point),
            Shape::Circle(ref c) => c.contains_point(point),
            Shape::Triangle(ref t) => t.contains_point(point),
            Shape::Empty => false,
        }
    }
}

impl From<Aabb> for Shape {
    fn from(other: Aabb) -> Shape {
        Shape::Aabb(other)
    }
}

impl From<Circle> for Shape {
    fn from(other: Circle) -> Shape {
        Shape::Circle(other)
    }
}

impl From<Triangle> for Shape {
    fn from(other: Triangle) -> Shape {
        Shape::Triangle(other)
    }
}
