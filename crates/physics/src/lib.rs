//! Geometry for deciding whether a missile strike hits its target.
//!
//! The entry point is [detect_hit], which takes a [Point] and a target radius. The target's outline differs per
//! [Quadrant]; [Silhouette] exposes the individual [Shape]s.

mod aabb;
mod circle;
pub mod errors;
mod point;
mod quadrant;
mod shape;
mod silhouette;
mod triangle;
mod v2;

pub use aabb::*;
pub use circle::*;
pub use errors::{Error, Result};
pub use point::*;
pub use quadrant::*;
pub use shape::*;
pub use silhouette::*;
pub use triangle::*;
pub use v2::*;
