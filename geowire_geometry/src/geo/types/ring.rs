use super::{GeometryTrait, Rect, Vec2};
use crate::math::signed_ring_area;
use anyhow::{Result, ensure};
use std::sync::OnceLock;

/// A closed loop of coordinates, the building block of polygons.
///
/// The wire format does not repeat the closing point, so rings are stored
/// open; the loop closes implicitly from the last point back to the first.
/// Winding order distinguishes exterior boundaries (counterclockwise) from
/// holes (clockwise).
pub struct Ring<C> {
	points: Vec<Vec2<C>>,
	bbox: OnceLock<Option<Rect<C>>>,
	area: OnceLock<f64>,
}

impl<C> Ring<C> {
	#[must_use]
	pub fn new(points: Vec<Vec2<C>>) -> Self {
		Ring {
			points,
			bbox: OnceLock::new(),
			area: OnceLock::new(),
		}
	}

	#[must_use]
	pub fn points(&self) -> &[Vec2<C>] {
		&self.points
	}

	pub fn iter(&self) -> impl Iterator<Item = &Vec2<C>> {
		self.points.iter()
	}

	#[must_use]
	pub fn into_inner(self) -> Vec<Vec2<C>> {
		self.points
	}

	/// Signed area from the shoelace formula, positive for counterclockwise
	/// winding. Computed on first access and cached.
	#[must_use]
	pub fn signed_area(&self) -> f64 {
		*self.area.get_or_init(|| signed_ring_area(&self.points))
	}

	/// Winding order test; holes of a polygon are clockwise.
	#[must_use]
	pub fn is_clockwise(&self) -> bool {
		self.signed_area() < 0.0
	}

	/// Verifies that the ring can enclose an area: at least 3 points.
	pub fn verify(&self) -> Result<()> {
		ensure!(self.points.len() >= 3, "Ring must have at least 3 points");
		Ok(())
	}
}

impl<C> GeometryTrait<C> for Ring<C> {
	fn len(&self) -> usize {
		self.points.len()
	}

	fn bbox(&self) -> Option<Rect<C>> {
		*self
			.bbox
			.get_or_init(|| Rect::from_points(self.points.iter().copied()))
	}
}

crate::impl_container!(Ring, Vec2, points);
