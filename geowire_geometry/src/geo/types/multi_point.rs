use super::{GeometryTrait, Rect, Vec2};
use std::sync::OnceLock;

/// An ordered collection of independent points.
pub struct MultiPoint<C> {
	points: Vec<Vec2<C>>,
	bbox: OnceLock<Option<Rect<C>>>,
}

impl<C> MultiPoint<C> {
	#[must_use]
	pub fn new(points: Vec<Vec2<C>>) -> Self {
		MultiPoint {
			points,
			bbox: OnceLock::new(),
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
}

impl<C> GeometryTrait<C> for MultiPoint<C> {
	fn len(&self) -> usize {
		self.points.len()
	}

	fn bbox(&self) -> Option<Rect<C>> {
		*self
			.bbox
			.get_or_init(|| Rect::from_points(self.points.iter().copied()))
	}
}

crate::impl_container!(MultiPoint, Vec2, points);
