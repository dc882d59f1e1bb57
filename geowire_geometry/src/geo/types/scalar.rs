use std::fmt::Debug;
use std::marker::PhantomData;
use std::ops::{Add, Mul, Sub};

/// A single `f64` value annotated with a coordinate-space tag.
///
/// The tag prevents accidentally mixing, say, a pixel offset with a
/// geographic longitude; arithmetic is only defined between scalars of the
/// same space.
pub struct Scalar<C> {
	value: f64,
	space: PhantomData<C>,
}

impl<C> Scalar<C> {
	#[must_use]
	pub fn new(value: f64) -> Self {
		Scalar {
			value,
			space: PhantomData,
		}
	}

	#[must_use]
	pub fn value(&self) -> f64 {
		self.value
	}

	/// Moves the value into another coordinate space without changing it.
	///
	/// This is the only way to cross spaces; use it at explicit conversion
	/// boundaries.
	#[must_use]
	pub fn reinterpret<D>(self) -> Scalar<D> {
		Scalar::new(self.value)
	}
}

impl<C> Add for Scalar<C> {
	type Output = Scalar<C>;
	fn add(self, rhs: Scalar<C>) -> Scalar<C> {
		Scalar::new(self.value + rhs.value)
	}
}

impl<C> Sub for Scalar<C> {
	type Output = Scalar<C>;
	fn sub(self, rhs: Scalar<C>) -> Scalar<C> {
		Scalar::new(self.value - rhs.value)
	}
}

impl<C> Mul<f64> for Scalar<C> {
	type Output = Scalar<C>;
	fn mul(self, rhs: f64) -> Scalar<C> {
		Scalar::new(self.value * rhs)
	}
}

impl<C> Clone for Scalar<C> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<C> Copy for Scalar<C> {}

impl<C> PartialEq for Scalar<C> {
	fn eq(&self, other: &Self) -> bool {
		self.value == other.value
	}
}

impl<C> Debug for Scalar<C> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.value.fmt(f)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::geo::{Geographic, Pixel};

	#[test]
	fn arithmetic_preserves_space() {
		let a = Scalar::<Pixel>::new(3.0);
		let b = Scalar::<Pixel>::new(4.5);
		assert_eq!((a + b).value(), 7.5);
		assert_eq!((b - a).value(), 1.5);
		assert_eq!((a * 2.0).value(), 6.0);
	}

	#[test]
	fn reinterpret_crosses_spaces() {
		let a = Scalar::<Geographic>::new(13.4);
		let b: Scalar<Pixel> = a.reinterpret();
		assert_eq!(b.value(), 13.4);
	}

	#[test]
	fn debug_prints_value() {
		assert_eq!(format!("{:?}", Scalar::<Pixel>::new(1.5)), "1.5");
	}
}
