pub mod complex;
pub mod point;
pub mod utils;

pub use complex::Complex;
pub use point::{DivisionByZeroError, Point};
pub use utils::ParsePointError;

/// Anything with an `x` and a `y` coordinate.
///
/// Every binary [`Point`] operation accepts a `PointLike` on its right-hand side.
pub trait PointLike {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
}

impl<P: PointLike + ?Sized> PointLike for &P {
    #[inline]
    fn x(&self) -> f64 {
        (**self).x()
    }

    #[inline]
    fn y(&self) -> f64 {
        (**self).y()
    }
}

impl<A: Into<f64> + Copy, B: Into<f64> + Copy> PointLike for (A, B) {
    #[inline]
    fn x(&self) -> f64 {
        self.0.into()
    }

    #[inline]
    fn y(&self) -> f64 {
        self.1.into()
    }
}

impl<T: Into<f64> + Copy> PointLike for [T; 2] {
    #[inline]
    fn x(&self) -> f64 {
        self[0].into()
    }

    #[inline]
    fn y(&self) -> f64 {
        self[1].into()
    }
}
