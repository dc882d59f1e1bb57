use super::{GeometryTrait, Rect, Ring, union_bboxes};
use std::sync::OnceLock;

/// An ordered sequence of rings.
///
/// By convention ring 0 is the exterior boundary and the remaining rings are
/// holes; the two are told apart by winding order, not by position alone.
pub struct Polygon<C> {
	rings: Vec<Ring<C>>,
	bbox: OnceLock<Option<Rect<C>>>,
}

impl<C> Polygon<C> {
	#[must_use]
	pub fn new(rings: Vec<Ring<C>>) -> Self {
		Polygon {
			rings,
			bbox: OnceLock::new(),
		}
	}

	#[must_use]
	pub fn rings(&self) -> &[Ring<C>] {
		&self.rings
	}

	/// The exterior boundary, if the polygon has any rings.
	#[must_use]
	pub fn exterior(&self) -> Option<&Ring<C>> {
		self.rings.first()
	}

	/// The hole rings following the exterior.
	#[must_use]
	pub fn holes(&self) -> &[Ring<C>] {
		self.rings.get(1..).unwrap_or(&[])
	}

	pub fn iter(&self) -> impl Iterator<Item = &Ring<C>> {
		self.rings.iter()
	}

	#[must_use]
	pub fn into_inner(self) -> Vec<Ring<C>> {
		self.rings
	}
}

impl<C> GeometryTrait<C> for Polygon<C> {
	fn len(&self) -> usize {
		self.rings.len()
	}

	fn bbox(&self) -> Option<Rect<C>> {
		*self
			.bbox
			.get_or_init(|| union_bboxes(self.rings.iter().map(Ring::bbox)))
	}
}

crate::impl_container!(Polygon, Ring, rings);

#[cfg(test)]
mod tests {
	use super::*;
	use crate::geo::{Pixel, Vec2};

	fn ring(points: &[[f64; 2]]) -> Ring<Pixel> {
		points.iter().map(Vec2::from).collect()
	}

	fn donut() -> Polygon<Pixel> {
		Polygon::from(vec![
			ring(&[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]]),
			ring(&[[2.0, 2.0], [2.0, 4.0], [4.0, 4.0], [4.0, 2.0]]),
		])
	}

	#[test]
	fn exterior_and_holes() {
		let polygon = donut();
		assert_eq!(polygon.len(), 2);
		assert!(!polygon.exterior().unwrap().is_clockwise());
		assert_eq!(polygon.holes().len(), 1);
		assert!(polygon.holes()[0].is_clockwise());
	}

	#[test]
	fn bbox_is_union_of_ring_bboxes() {
		let bbox = donut().bbox().unwrap();
		assert_eq!(bbox.origin, Vec2::new(0.0, 0.0));
		assert_eq!(bbox.corner(), Vec2::new(10.0, 10.0));
	}

	#[test]
	fn bbox_empty_is_none() {
		assert!(Polygon::<Pixel>::new(Vec::new()).bbox().is_none());
	}

	#[test]
	fn clone_and_eq() {
		let polygon = donut();
		polygon.bbox();
		assert_eq!(polygon.clone(), donut());
	}
}
