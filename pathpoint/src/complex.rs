use std::fmt;

/// A complex number `re + im·i`, as produced by [`Point::to_complex`](crate::Point::to_complex).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Complex {
	pub re: f64,
	pub im: f64,
}

impl fmt::Display for Complex {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.im.is_sign_negative() {
			write!(f, "({}-{}j)", self.re, -self.im)
		} else {
			write!(f, "({}+{}j)", self.re, self.im)
		}
	}
}
