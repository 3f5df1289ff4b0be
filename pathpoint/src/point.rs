use std::f64::consts::PI;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use error_stack::Report;

use crate::complex::Complex;
use crate::utils::{parse_point, ParsePointError};
use crate::PointLike;

/// A 2D coordinate, also used as a direction vector.
///
/// Binary operations take anything [`PointLike`], so plain `(x, y)` tuples and
/// `[x, y]` arrays can be mixed with points freely.
#[derive(Clone, Copy, Default)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
#[error("Cannot divide {dividend} by {divisor}: the divisor has a zero component")]
pub struct DivisionByZeroError {
	pub dividend: Point,
	pub divisor: Point,
}

impl Point {
	#[must_use]
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	fn from_like(p: &impl PointLike) -> Self {
		Self::new(p.x(), p.y())
	}

	/// Componentwise absolute value.
	#[must_use]
	pub fn abs(self) -> Self {
		Self::new(self.x.abs(), self.y.abs())
	}

	/// Truncates both coordinates toward zero.
	#[must_use]
	pub fn trunc(self) -> Self {
		Self::new(self.x.trunc(), self.y.trunc())
	}

	#[must_use]
	pub const fn to_complex(self) -> Complex {
		Complex {
			re: self.x,
			im: self.y,
		}
	}

	/// Multiplies both coordinates by `factor`.
	pub fn scale(&mut self, factor: impl Into<f64>) {
		let factor = factor.into();
		self.x *= factor;
		self.y *= factor;
	}

	pub fn shift(&mut self, dx: impl Into<f64>, dy: impl Into<f64>) {
		self.x += dx.into();
		self.y += dy.into();
	}

	pub fn set(&mut self, x: impl Into<f64>, y: impl Into<f64>) {
		self.x = x.into();
		self.y = y.into();
	}

	/// Divides componentwise.
	///
	/// # Errors
	///
	/// Returns an error if either component of `other` is zero.
	/// Use the `/` operator to get IEEE infinities instead.
	pub fn divide(self, other: impl PointLike) -> Result<Self, DivisionByZeroError> {
		let divisor = Self::from_like(&other);
		if divisor.x == 0.0 || divisor.y == 0.0 {
			return Err(DivisionByZeroError {
				dividend: self,
				divisor,
			});
		}

		Ok(self / divisor)
	}

	#[must_use]
	pub fn length(self) -> f64 {
		self.length_sq().sqrt()
	}

	#[must_use]
	pub fn length_sq(self) -> f64 {
		self.x * self.x + self.y * self.y
	}

	#[must_use]
	pub fn distance(self, to: impl PointLike) -> f64 {
		self.distance_sq(to).sqrt()
	}

	#[must_use]
	pub fn distance_sq(self, to: impl PointLike) -> f64 {
		(self - to).length_sq()
	}

	/// Returns a vector of length 1 pointing the same way.
	///
	/// The zero vector has no direction and is returned as is.
	#[must_use]
	pub fn normalize(self) -> Self {
		if self.x == 0.0 && self.y == 0.0 {
			tracing::trace!("Normalizing the zero vector, leaving it as is");
			return Self::default();
		}

		let len = self.length();
		Self::new(self.x / len, self.y / len)
	}

	#[must_use]
	pub fn dot(self, rhs: impl PointLike) -> f64 {
		self.x * rhs.x() + self.y * rhs.y()
	}

	/// Z component of the 3D cross product, with both vectors lying on the XY plane.
	#[must_use]
	pub fn cross(self, rhs: impl PointLike) -> f64 {
		self.x * rhs.y() - self.y * rhs.x()
	}

	/// Signed angle in degrees from this vector to `a`.
	///
	/// Turning counter-clockwise gives a negative angle, and a vector opposite
	/// to this one is at `-180`.
	///
	/// ```
	/// # use pathpoint::Point;
	/// assert_eq!(Point::new(100.0, 0.0).angle((0, 100)), -90.0);
	/// ```
	#[must_use]
	pub fn angle(self, a: impl PointLike) -> f64 {
		let a = Self::from_like(&a);
		-(180.0 / PI) * self.cross(a).atan2(self.dot(a))
	}

	/// Rotates the vector by an angle in degrees, returning the rotated copy.
	#[must_use]
	pub fn rotate(self, angle: impl Into<f64>) -> Self {
		let (sin, cos) = angle.into().to_radians().sin_cos();
		Self {
			x: self.x * cos - self.y * sin,
			y: self.y * cos + self.x * sin,
		}
	}
}

impl PointLike for Point {
	fn x(&self) -> f64 {
		self.x
	}

	fn y(&self) -> f64 {
		self.y
	}
}

impl<A: Into<f64>, B: Into<f64>> From<(A, B)> for Point {
	fn from((x, y): (A, B)) -> Self {
		Self::new(x.into(), y.into())
	}
}

impl<T: Into<f64> + Copy> From<[T; 2]> for Point {
	fn from([x, y]: [T; 2]) -> Self {
		Self::new(x.into(), y.into())
	}
}

impl From<Point> for (f64, f64) {
	fn from(point: Point) -> Self {
		(point.x, point.y)
	}
}

impl From<Point> for Complex {
	fn from(point: Point) -> Self {
		point.to_complex()
	}
}

impl<P: PointLike> PartialEq<P> for Point {
	fn eq(&self, other: &P) -> bool {
		self.x == other.x() && self.y == other.y()
	}
}

impl fmt::Display for Point {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Point({},{})", self.x, self.y)
	}
}

impl fmt::Debug for Point {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(self, f)
	}
}

impl FromStr for Point {
	type Err = Report<ParsePointError>;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let result = parse_point(s);
		if let Err(report) = &result {
			tracing::debug!("Could not parse point from {s:?}\n{report:?}");
		}

		result
	}
}

impl Neg for Point {
	type Output = Self;

	fn neg(self) -> Self::Output {
		Self { x: -self.x, y: -self.y }
	}
}

impl<P: PointLike> Add<P> for Point {
	type Output = Self;

	fn add(self, rhs: P) -> Self::Output {
		Self {
			x: self.x + rhs.x(),
			y: self.y + rhs.y(),
		}
	}
}

impl<P: PointLike> Sub<P> for Point {
	type Output = Self;

	fn sub(self, rhs: P) -> Self::Output {
		Self {
			x: self.x - rhs.x(),
			y: self.y - rhs.y(),
		}
	}
}

/// Componentwise product, not the dot product.
impl<P: PointLike> Mul<P> for Point {
	type Output = Self;

	fn mul(self, rhs: P) -> Self::Output {
		Self {
			x: self.x * rhs.x(),
			y: self.y * rhs.y(),
		}
	}
}

/// Componentwise quotient with plain `f64` semantics. See [`Point::divide`] for the checked version.
impl<P: PointLike> Div<P> for Point {
	type Output = Self;

	fn div(self, rhs: P) -> Self::Output {
		Self {
			x: self.x / rhs.x(),
			y: self.y / rhs.y(),
		}
	}
}

/// Writes the result back into the receiver.
impl<P: PointLike> AddAssign<P> for Point {
	fn add_assign(&mut self, rhs: P) {
		*self = *self + rhs;
	}
}

/// Writes the result back into the receiver.
impl<P: PointLike> SubAssign<P> for Point {
	fn sub_assign(&mut self, rhs: P) {
		*self = *self - rhs;
	}
}

/// Writes the result back into the receiver.
impl<P: PointLike> MulAssign<P> for Point {
	fn mul_assign(&mut self, rhs: P) {
		*self = *self * rhs;
	}
}

/// Writes the result back into the receiver.
impl<P: PointLike> DivAssign<P> for Point {
	fn div_assign(&mut self, rhs: P) {
		*self = *self / rhs;
	}
}

#[cfg(test)]
mod tests {
	use approx::{assert_abs_diff_eq, assert_relative_eq};

	use crate::complex::Complex;
	use crate::point::{DivisionByZeroError, Point};

	#[test]
	fn display_and_debug() {
		assert_eq!(Point::new(10.0, 10.0).to_string(), "Point(10,10)");
		assert_eq!(format!("{:?}", Point::new(1.5, -2.25)), "Point(1.5,-2.25)");
	}

	#[test]
	fn equality_against_point_likes() {
		let p = Point::new(10.0, 10.0);
		assert_eq!(p, Point::new(10.0, 10.0));
		assert_ne!(p, Point::new(5.0, 10.0));
		assert_eq!(p, (10, 10));
		assert_eq!(p, [10.0_f32, 10.0]);
		assert_ne!(p, (10.0, 10.000_000_1));
	}

	#[test]
	fn conversions() {
		let p = Point::new(-1.7, 2.9);
		assert_eq!(p.abs(), (1.7, 2.9));
		assert_eq!(p.trunc(), (-1, 2));
		assert_eq!(Complex::from(p), Complex { re: -1.7, im: 2.9 });
		assert_eq!(<(f64, f64)>::from(p), (-1.7, 2.9));
		assert_eq!(Point::from((3_u8, 4_u8)), Point::new(3.0, 4.0));
	}

	#[test]
	fn componentwise_arithmetic() {
		let a = Point::new(6.0, 8.0);
		assert_eq!(a + (1, 2), (7, 10));
		assert_eq!(a - Point::new(1.0, 2.0), (5, 6));
		assert_eq!(a * [2, 3], (12, 24));
		assert_eq!(a / (2, 4), (3, 2));
		assert_eq!(-a, (-6, -8));
	}

	#[test]
	fn compound_assignment_mutates() {
		let mut p = Point::new(1.0, 2.0);
		p += (1, 1);
		assert_eq!(p, (2, 3));
		p -= Point::new(0.5, 0.5);
		assert_eq!(p, (1.5, 2.5));
		p *= (2, 2);
		assert_eq!(p, (3, 5));
		p /= (3, 5);
		assert_eq!(p, (1, 1));
	}

	#[test]
	fn divide_rejects_zero_components() {
		let p = Point::new(1.0, 2.0);
		assert_eq!(p.divide((2, 4)), Ok(Point::new(0.5, 0.5)));
		assert_eq!(
			p.divide((0, 4)),
			Err(DivisionByZeroError {
				dividend: p,
				divisor: Point::new(0.0, 4.0),
			})
		);
		assert!(p.divide((1.0, -0.0)).is_err());

		let ieee = p / (0, 1);
		assert!(ieee.x.is_infinite());
	}

	#[test]
	fn mutators() {
		let mut p = Point::new(2.0, -3.0);
		p.scale(2.0);
		assert_eq!(p, (4, -6));
		p.shift(1.0, 1.0);
		assert_eq!(p, (5, -5));
		p.set(0.0, 7.0);
		assert_eq!(p, (0, 7));
	}

	#[test]
	fn mixed_integer_and_float_inputs() {
		let mut p = Point::from((1, 2.5));
		assert_eq!(p, (1.0, 2.5));
		p.scale(2);
		assert_eq!(p, (2, 5));
		p.shift(1, -0.5);
		assert_eq!(p, (3.0, 4.5));
		p.set(7_u8, 1.5_f32);
		assert_eq!(p, (7, 1.5));
		assert_eq!(p + (1, 0.5), (8, 2));
		assert_eq!(Point::new(0.0, 1.0).rotate(180), Point::new(0.0, 1.0).rotate(180.0));
	}

	#[test]
	fn lengths_and_distances() {
		let p = Point::new(10.0, 10.0);
		assert_eq!(p.length(), 14.142_135_623_730_951);
		assert_eq!(p.length_sq(), 200.0);
		assert_eq!(p.distance(Point::new(5.0, 10.0)), 5.0);
		assert_eq!(p.distance_sq((5, 10)), 25.0);
		assert_relative_eq!(Point::new(90.0, 33.0).distance((76, 34)), 14.035_668_847_618_199);
	}

	#[test]
	fn normalize() {
		assert_eq!(Point::new(0.0, 0.0).normalize(), Point::new(0.0, 0.0));

		let n = Point::new(88.0, 33.0).normalize();
		assert_relative_eq!(n.x, 0.936_329_177_569_044_4, epsilon = 1e-12);
		assert_relative_eq!(n.y, 0.351_123_441_588_391_7, epsilon = 1e-12);
		assert_relative_eq!(n.length(), 1.0, epsilon = 1e-12);
	}

	#[test]
	fn dot_and_cross() {
		assert_eq!(Point::new(2.0, 4.0).dot((2, 2)), 12.0);
		assert_eq!(Point::new(1.0, 0.0).cross((0, 1)), 1.0);
		assert_eq!(Point::new(0.0, 1.0).cross((1, 0)), -1.0);
	}

	#[test]
	fn angle() {
		assert_abs_diff_eq!(Point::new(100.0, 0.0).angle(Point::new(0.0, 100.0)), -90.0, epsilon = 1e-12);
		assert_abs_diff_eq!(Point::new(87.0, 23.0).angle((-77, 10)), -157.792_028_301_070_5, epsilon = 1e-9);
		assert_abs_diff_eq!(Point::new(1.0, 0.0).angle((-1, 0)), -180.0, epsilon = 1e-12);
		assert_abs_diff_eq!(Point::new(0.0, 100.0).angle((100, 0)), 90.0, epsilon = 1e-12);
	}

	#[test]
	fn angle_of_parallel_and_opposite_vectors() {
		let a = Point::new(0.1, 0.3);
		assert_eq!(a.cross(a), 0.0);
		assert_eq!(a.angle(a), 0.0);
		assert_eq!(a.cross(-a), 0.0);
		assert_eq!(a.angle(-a), -180.0);

		let b = Point::new(-87.25, 23.1);
		assert_eq!(b.angle(b), 0.0);
		assert_eq!(b.angle(-b), -180.0);
	}

	#[test]
	fn products_round_each_term() {
		let a = Point::new(0.1, 0.3);
		assert_eq!(a.length_sq(), 0.1 * 0.1 + 0.3 * 0.3);
		assert_eq!(a.dot((0.7, 0.9)), 0.1 * 0.7 + 0.3 * 0.9);
		assert_eq!(a.cross((0.7, 0.9)), 0.1 * 0.9 - 0.3 * 0.7);
	}

	#[test]
	fn rotate_returns_new_point() {
		let v = Point::new(100.0, 0.0);
		let rotated = v.rotate(45.0);
		assert_eq!(v, (100, 0));
		assert_relative_eq!(rotated.x, 70.710_678_118_654_755, epsilon = 1e-9);
		assert_relative_eq!(rotated.y, 70.710_678_118_654_741, epsilon = 1e-9);
	}
}
