//! A 2-dimensional vector/point.
use num::Num;

/// Coordinates in the strike plane.
///
/// Lengths are always computed in `f64`, whatever `T` is.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct V2<T> {
    pub x: T,
    pub y: T,
}

impl<T: Num> V2<T> {
    pub const fn new(x: T, y: T) -> Self {
        V2 { x, y }
    }
}

impl<T> V2<T>
where
    T: Num + Copy,
    f64: From<T>,
{
    pub fn length_squared(&self) -> f64 {
        let x: f64 = self.x.into();
        let y: f64 = self.y.into();
        x * x + y * y
    }

    /// Distance from the origin.
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }
}

impl<T: Num> std::ops::Sub for V2<T> {
    type Output = V2<T>;

    fn sub(self, rhs: Self) -> Self::Output {
        V2 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl<T: std::ops::Neg> std::ops::Neg for V2<T> {
    type Output = V2<<T as std::ops::Neg>::Output>;

    fn neg(self) -> Self::Output {
        V2 {
            x: -self.x,
            y: -self.y,
        }
    }
}
