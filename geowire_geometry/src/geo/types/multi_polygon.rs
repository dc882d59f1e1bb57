use super::{GeometryTrait, Polygon, Rect, union_bboxes};
use std::sync::OnceLock;

/// An ordered collection of polygons.
pub struct MultiPolygon<C> {
	polygons: Vec<Polygon<C>>,
	bbox: OnceLock<Option<Rect<C>>>,
}

impl<C> MultiPolygon<C> {
	#[must_use]
	pub fn new(polygons: Vec<Polygon<C>>) -> Self {
		MultiPolygon {
			polygons,
			bbox: OnceLock::new(),
		}
	}

	#[must_use]
	pub fn polygons(&self) -> &[Polygon<C>] {
		&self.polygons
	}

	pub fn iter(&self) -> impl Iterator<Item = &Polygon<C>> {
		self.polygons.iter()
	}

	#[must_use]
	pub fn into_inner(self) -> Vec<Polygon<C>> {
		self.polygons
	}
}

impl<C> GeometryTrait<C> for MultiPolygon<C> {
	fn len(&self) -> usize {
		self.polygons.len()
	}

	fn bbox(&self) -> Option<Rect<C>> {
		*self
			.bbox
			.get_or_init(|| union_bboxes(self.polygons.iter().map(Polygon::bbox)))
	}
}

crate::impl_container!(MultiPolygon, Polygon, polygons);

#[cfg(test)]
mod tests {
	use super::*;
	use crate::geo::{Pixel, Ring, Vec2};

	fn triangle(offset: f64) -> Polygon<Pixel> {
		Polygon::from(vec![Ring::from(vec![
			Vec2::new(offset, 0.0),
			Vec2::new(offset + 2.0, 0.0),
			Vec2::new(offset + 1.0, 3.0),
		])])
	}

	#[test]
	fn bbox_is_union_of_children() {
		let mp = MultiPolygon::from(vec![triangle(0.0), triangle(10.0)]);
		let bbox = mp.bbox().unwrap();
		assert_eq!(bbox.origin, Vec2::new(0.0, 0.0));
		assert_eq!(bbox.corner(), Vec2::new(12.0, 3.0));
	}

	#[test]
	fn empty() {
		let mp = MultiPolygon::<Pixel>::new(Vec::new());
		assert!(mp.is_empty());
		assert!(mp.bbox().is_none());
	}
}
