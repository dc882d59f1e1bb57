use std::fmt::Debug;
use std::marker::PhantomData;
use std::ops::{Add, Mul, Sub};

/// A 2D point or offset in coordinate space `C`.
///
/// Arithmetic is component-wise and always stays within the same space; the
/// tag is zero-size and vanishes at runtime.
pub struct Vec2<C> {
	pub x: f64,
	pub y: f64,
	space: PhantomData<C>,
}

impl<C> Vec2<C> {
	#[must_use]
	pub fn new(x: f64, y: f64) -> Self {
		Vec2 {
			x,
			y,
			space: PhantomData,
		}
	}

	/// Component-wise minimum.
	#[must_use]
	pub fn min(self, other: Self) -> Self {
		Vec2::new(self.x.min(other.x), self.y.min(other.y))
	}

	/// Component-wise maximum.
	#[must_use]
	pub fn max(self, other: Self) -> Self {
		Vec2::new(self.x.max(other.x), self.y.max(other.y))
	}

	/// Moves the point into another coordinate space without changing it.
	#[must_use]
	pub fn reinterpret<D>(self) -> Vec2<D> {
		Vec2::new(self.x, self.y)
	}

	/// Maps both components through `f`, producing a point in space `D`.
	///
	/// This is the named conversion step for actual coordinate transforms
	/// (projection, scaling to pixels, ...).
	#[must_use]
	pub fn transform<D>(self, f: impl Fn(f64) -> f64) -> Vec2<D> {
		Vec2::new(f(self.x), f(self.y))
	}
}

impl<C> Add for Vec2<C> {
	type Output = Vec2<C>;
	fn add(self, rhs: Vec2<C>) -> Vec2<C> {
		Vec2::new(self.x + rhs.x, self.y + rhs.y)
	}
}

impl<C> Sub for Vec2<C> {
	type Output = Vec2<C>;
	fn sub(self, rhs: Vec2<C>) -> Vec2<C> {
		Vec2::new(self.x - rhs.x, self.y - rhs.y)
	}
}

impl<C> Mul<f64> for Vec2<C> {
	type Output = Vec2<C>;
	fn mul(self, rhs: f64) -> Vec2<C> {
		Vec2::new(self.x * rhs, self.y * rhs)
	}
}

impl<C> Clone for Vec2<C> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<C> Copy for Vec2<C> {}

impl<C> PartialEq for Vec2<C> {
	fn eq(&self, other: &Self) -> bool {
		self.x == other.x && self.y == other.y
	}
}

impl<C> Debug for Vec2<C> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		[self.x, self.y].fmt(f)
	}
}

impl<C, T: Copy + Into<f64>> From<&[T; 2]> for Vec2<C> {
	fn from(value: &[T; 2]) -> Self {
		Vec2::new(value[0].into(), value[1].into())
	}
}

impl<C> From<[f64; 2]> for Vec2<C> {
	fn from(value: [f64; 2]) -> Self {
		Vec2::new(value[0], value[1])
	}
}

impl<C> From<(f64, f64)> for Vec2<C> {
	fn from(value: (f64, f64)) -> Self {
		Vec2::new(value.0, value.1)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::geo::{Client, Pixel};

	fn v(x: f64, y: f64) -> Vec2<Pixel> {
		Vec2::new(x, y)
	}

	#[test]
	fn arithmetic_is_component_wise() {
		assert_eq!(v(1.0, 2.0) + v(3.0, 4.0), v(4.0, 6.0));
		assert_eq!(v(3.0, 4.0) - v(1.0, 2.0), v(2.0, 2.0));
		assert_eq!(v(1.0, 2.0) * 2.5, v(2.5, 5.0));
	}

	#[test]
	fn min_max() {
		assert_eq!(v(1.0, 4.0).min(v(3.0, 2.0)), v(1.0, 2.0));
		assert_eq!(v(1.0, 4.0).max(v(3.0, 2.0)), v(3.0, 4.0));
	}

	#[test]
	fn reinterpret_and_transform() {
		let p: Vec2<Client> = v(2.0, 3.0).reinterpret();
		assert_eq!(p, Vec2::new(2.0, 3.0));

		let scaled: Vec2<Client> = v(2.0, 3.0).transform(|c| c * 10.0);
		assert_eq!(scaled, Vec2::new(20.0, 30.0));
	}

	#[test]
	fn debug_formats_like_array() {
		assert_eq!(format!("{:?}", v(1.0, 2.0)), "[1.0, 2.0]");
	}

	#[test]
	fn from_conversions() {
		assert_eq!(Vec2::<Pixel>::from(&[1, 2]), v(1.0, 2.0));
		assert_eq!(Vec2::<Pixel>::from([3.0, 4.0]), v(3.0, 4.0));
		assert_eq!(Vec2::<Pixel>::from((5.0, 6.0)), v(5.0, 6.0));
	}
}
