use super::{GeometryTrait, Rect, Vec2};
use std::sync::OnceLock;

/// An ordered, open sequence of coordinates.
pub struct LineString<C> {
	points: Vec<Vec2<C>>,
	bbox: OnceLock<Option<Rect<C>>>,
}

impl<C> LineString<C> {
	#[must_use]
	pub fn new(points: Vec<Vec2<C>>) -> Self {
		LineString {
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

impl<C> GeometryTrait<C> for LineString<C> {
	fn len(&self) -> usize {
		self.points.len()
	}

	fn bbox(&self) -> Option<Rect<C>> {
		*self
			.bbox
			.get_or_init(|| Rect::from_points(self.points.iter().copied()))
	}
}

crate::impl_container!(LineString, Vec2, points);

#[cfg(test)]
mod tests {
	use super::*;
	use crate::geo::Geographic;

	fn line() -> LineString<Geographic> {
		LineString::from(vec![Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0), Vec2::new(-1.0, 0.5)])
	}

	#[test]
	fn len_and_points() {
		assert_eq!(line().len(), 3);
		assert!(!line().is_empty());
		assert_eq!(line().points()[1], Vec2::new(3.0, 4.0));
	}

	#[test]
	fn bbox_is_min_max_over_points() {
		let bbox = line().bbox().unwrap();
		assert_eq!(bbox.origin, Vec2::new(-1.0, 0.5));
		assert_eq!(bbox.corner(), Vec2::new(3.0, 4.0));
	}

	#[test]
	fn bbox_empty_is_none() {
		assert!(LineString::<Geographic>::new(Vec::new()).bbox().is_none());
	}

	#[test]
	fn clone_and_eq() {
		let a = line();
		a.bbox();
		assert_eq!(a.clone(), line());
	}
}
