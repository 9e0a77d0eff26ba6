//! The point a strike lands on.
//!
//! Equality is based on coordinates, while the natural order of points is by ascending distance from the origin.
//! The two are deliberately **inconsistent**:
//!
//! ```
//! use std::cmp::Ordering;
//! use strike_physics::Point;
//!
//! let point = Point::new(1.0, 1.0);
//! let another = Point::new(-1.0, -1.0);
//!
//! assert_eq!(point.cmp_by_distance(&another), Ordering::Equal);
//! assert_ne!(point, another);
//! ```
//!
//! For that reason [Point] implements neither [PartialOrd] nor [Ord]. Ordering is available through
//! [Point::cmp_by_distance] and the [ByDistance] wrapper, which carries its own distance-based equality.
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

use crate::*;

/// Side of the cells [Point::grid_hash] buckets points into.
const GRID_SIZE: f32 = 1.0;

/// An immutable point on the plane.
///
/// The quadrant and the distance from the origin are computed on first use and cached.
#[derive(Clone)]
pub struct Point {
    position: V2<f32>,
    quadrant: OnceLock<Quadrant>,
    distance: OnceLock<f64>,
}

impl Point {
    /// Never fails: NaN and infinite coordinates are accepted and propagate through the derived values.
    pub const fn new(x: f32, y: f32) -> Point {
        Point {
            position: V2::new(x, y),
            quadrant: OnceLock::new(),
            distance: OnceLock::new(),
        }
    }

    pub fn x(&self) -> f32 {
        self.position.x
    }

    pub fn y(&self) -> f32 {
        self.position.y
    }

    pub fn as_v2(&self) -> V2<f32> {
        self.position
    }

    /// The quadrant the point lies in. See [Quadrant::of].
    pub fn quadrant(&self) -> Quadrant {
        *self
            .quadrant
            .get_or_init(|| Quadrant::of(self.position.x, self.position.y))
    }

    /// Euclidean distance from the origin, in double precision.
    pub fn distance(&self) -> f64 {
        *self.distance.get_or_init(|| self.position.length())
    }

    /// Bucket the point into its unit grid cell: `31 * floor(x) + floor(y)`.
    ///
    /// Points in use are mostly near integer coordinates and close together, so the cells are unit sized.
    /// Float-to-int conversion saturates and maps NaN to 0; the integer arithmetic wraps.
    pub fn grid_hash(&self) -> i32 {
        let x_sector = (self.position.x / GRID_SIZE).floor() as i32;
        let y_sector = (self.position.y / GRID_SIZE).floor() as i32;
        x_sector.wrapping_mul(31).wrapping_add(y_sector)
    }

    /// Compare by distance from the origin.
    ///
    /// A NaN distance sorts after every number, and two NaN distances are equal, so this is a total order.
    pub fn cmp_by_distance(&self, other: &Point) -> Ordering {
        total_cmp_nan_last(self.distance(), other.distance())
    }
}

fn total_cmp_nan_last(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        // Distances are never negative, so the only signed zero pair is +0/+0.
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// Exact representation equality, except that every NaN equals every other NaN.
fn same_coordinate(a: f32, b: f32) -> bool {
    a.to_bits() == b.to_bits() || (a.is_nan() && b.is_nan())
}

impl PartialEq for Point {
    fn eq(&self, other: &Point) -> bool {
        same_coordinate(self.position.x, other.position.x)
            && same_coordinate(self.position.y, other.position.y)
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.grid_hash());
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Point")
            .field("x", &self.position.x)
            .field("y", &self.position.y)
            .finish()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Point(")?;
        writeln!(f, "    x={:?},", self.position.x)?;
        writeln!(f, "    y={:?}", self.position.y)?;
        write!(f, ")")
    }
}

impl From<V2<f32>> for Point {
    fn from(position: V2<f32>) -> Point {
        Point::new(position.x, position.y)
    }
}

/// Orders points by [Point::cmp_by_distance].
///
/// Two wrapped points are equal when they are equidistant from the origin, which keeps [Ord] and [Eq] consistent
/// for sorted containers. Use the wrapped [Point] directly when coordinate equality is wanted.
#[derive(Clone, Debug)]
pub struct ByDistance(pub Point);

impl ByDistance {
    pub fn into_inner(self) -> Point {
        self.0
    }
}

impl PartialEq for ByDistance {
    fn eq(&self, other: &ByDistance) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ByDistance {}

impl PartialOrd for ByDistance {
    fn partial_cmp(&self, other: &ByDistance) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ByDistance {
    fn cmp(&self, other: &ByDistance) -> Ordering {
        self.0.cmp_by_distance(&other.0)
    }
}

impl std::ops::Deref for ByDistance {
    type Target = Point;

    fn deref(&self) -> &Point {
        &self.0
    }
}
