//! Classification of a point relative to the coordinate axes.

/// Where a point sits relative to the origin.
///
/// Numbered 0 through 4: 0 is anything on an axis, 1 through 4 are the open quadrants counter-clockwise from the
/// positive x axis.
#[derive(
    Copy, Clone, Debug, Eq, PartialEq, Hash, derive_more::Display, proptest_derive::Arbitrary,
)]
#[repr(u8)]
pub enum Quadrant {
    #[display(fmt = "on axis")]
    OnAxis = 0,
    #[display(fmt = "quadrant 1")]
    First = 1,
    #[display(fmt = "quadrant 2")]
    Second = 2,
    #[display(fmt = "quadrant 3")]
    Third = 3,
    #[display(fmt = "quadrant 4")]
    Fourth = 4,
}

impl Quadrant {
    /// Classify a pair of coordinates.
    ///
    /// Only strict comparisons are used, so a NaN coordinate lands on [Quadrant::OnAxis], as does `-0.0`.
    pub fn of(x: f32, y: f32) -> Quadrant {
        if x > 0.0 && y > 0.0 {
            Quadrant::First
        } else if x < 0.0 && y > 0.0 {
            Quadrant::Second
        } else if x < 0.0 && y < 0.0 {
            Quadrant::Third
        } else if x > 0.0 && y < 0.0 {
            Quadrant::Fourth
        } else {
            Quadrant::OnAxis
        }
    }

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn from_number(number: u8) -> Option<Quadrant> {
        match number {
            0 => Some(Quadrant::OnAxis),
            1 => Some(Quadrant::First),
            2 => Some(Quadrant::Second),
            3 => Some(Quadrant::Third),
            4 => Some(Quadrant::Fourth),
            _ => None,
        }
    }
}

impl From<Quadrant> for u8 {
    fn from(q: Quadrant) -> u8 {
        q.number()
    }
}
