use super::Vec2;
use std::fmt::Debug;

/// An axis-aligned box in coordinate space `C`, stored as origin + dimension.
///
/// All other accessors (`left`, `right`, `center`, ...) are pure functions of
/// those two fields.
pub struct Rect<C> {
	pub origin: Vec2<C>,
	pub dimension: Vec2<C>,
}

impl<C> Rect<C> {
	#[must_use]
	pub fn new(origin: Vec2<C>, dimension: Vec2<C>) -> Self {
		Rect { origin, dimension }
	}

	/// Builds a box spanning the two given opposite corners.
	#[must_use]
	pub fn from_corners(min: Vec2<C>, max: Vec2<C>) -> Self {
		Rect::new(min, max - min)
	}

	/// The smallest box containing every point of the iterator, or `None`
	/// when the iterator is empty.
	pub fn from_points(points: impl IntoIterator<Item = Vec2<C>>) -> Option<Rect<C>> {
		let mut iter = points.into_iter();
		let first = iter.next()?;
		let (min, max) = iter.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
		Some(Rect::from_corners(min, max))
	}

	#[must_use]
	pub fn left(&self) -> f64 {
		self.origin.x
	}

	#[must_use]
	pub fn top(&self) -> f64 {
		self.origin.y
	}

	#[must_use]
	pub fn right(&self) -> f64 {
		self.origin.x + self.dimension.x
	}

	#[must_use]
	pub fn bottom(&self) -> f64 {
		self.origin.y + self.dimension.y
	}

	/// The corner opposite the origin.
	#[must_use]
	pub fn corner(&self) -> Vec2<C> {
		self.origin + self.dimension
	}

	#[must_use]
	pub fn center(&self) -> Vec2<C> {
		self.origin + self.dimension * 0.5
	}

	/// The smallest box containing both boxes: component-wise minimum of the
	/// origins and maximum of the opposite corners.
	#[must_use]
	pub fn union(&self, other: &Rect<C>) -> Rect<C> {
		Rect::from_corners(
			self.origin.min(other.origin),
			self.corner().max(other.corner()),
		)
	}
}

/// Folds a list of optional boxes into their union.
///
/// Returns `None` only if every input was `None`; empty geometries never
/// contribute a degenerate box.
pub fn union_bboxes<C>(bboxes: impl IntoIterator<Item = Option<Rect<C>>>) -> Option<Rect<C>> {
	bboxes.into_iter().flatten().reduce(|a, b| a.union(&b))
}

impl<C> Clone for Rect<C> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<C> Copy for Rect<C> {}

impl<C> PartialEq for Rect<C> {
	fn eq(&self, other: &Self) -> bool {
		self.origin == other.origin && self.dimension == other.dimension
	}
}

impl<C> Debug for Rect<C> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Rect")
			.field("origin", &self.origin)
			.field("dimension", &self.dimension)
			.finish()
	}
}
