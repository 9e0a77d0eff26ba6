//! The target silhouette and missile hit detection.
//!
//! The target sits on the Cartesian plane with a different profile in each quadrant, all sized by one radius `r`:
//!
//! - On the axes, a rectangle spanning `[-r, r]` horizontally and `[-r/2, r]` vertically.
//! - In the first quadrant, a rectangle `r` wide along the x axis and `r/2` tall along the y axis.
//! - In the second quadrant, a circular sector of radius `r`.
//! - In the third quadrant, a right triangle with legs `r` along the x axis and `r/2` along the y axis.
//! - In the fourth quadrant, nothing.
//!
//! No input is rejected. NaN and negative radii simply produce shapes which contain nothing, and NaN points never
//! hit.
use log::*;

use crate::errors::*;
use crate::*;

/// The per-quadrant shapes of a target of a given radius.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Silhouette {
    radius: f32,
    on_axis: Shape,
    first: Shape,
    second: Shape,
    third: Shape,
}

impl Silhouette {
    pub fn new(radius: f32) -> Silhouette {
        let half = radius / 2.0;
        Silhouette {
            radius,
            on_axis: Aabb::from_corners(-V2::new(radius, half), V2::new(radius, radius)).into(),
            first: Aabb::from_corners(V2::new(0.0, 0.0), V2::new(radius, half)).into(),
            second: Circle::new(radius).into(),
            third: Triangle::new(radius).into(),
        }
    }

    /// Like [Silhouette::new], but refuse radii which can't describe a real target.
    pub fn checked(radius: f32) -> Result<Silhouette, SilhouetteError> {
        let err = if radius.is_nan() {
            SilhouetteError::NanRadius
        } else if radius.is_infinite() {
            SilhouetteError::InfiniteRadius(radius)
        } else if radius < 0.0 {
            SilhouetteError::NegativeRadius(radius)
        } else {
            return Ok(Silhouette::new(radius));
        };

        debug!("Rejecting target radius {}: {}", radius, err);
        Err(err)
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn shape_for(&self, quadrant: Quadrant) -> &Shape {
        const EMPTY: &Shape = &Shape::Empty;

        match quadrant {
            Quadrant::OnAxis => &self.on_axis,
            Quadrant::First => &self.first,
            Quadrant::Second => &self.second,
            Quadrant::Third => &self.third,
            Quadrant::Fourth => EMPTY,
        }
    }

    pub fn contains(&self, point: &Point) -> bool {
        self.shape_for(point.quadrant()).contains(point)
    }
}

/// Did a missile landing on `strike_point` hit a target of `target_radius`?
pub fn detect_hit(strike_point: &Point, target_radius: f32) -> bool {
    let hit = Silhouette::new(target_radius).contains(strike_point);
    trace!(
        "Strike at ({}, {}) in {} against radius {}: hit={}",
        strike_point.x(),
        strike_point.y(),
        strike_point.quadrant(),
        target_radius,
        hit
    );
    hit
}
