use super::{GeometryTrait, LineString, Rect, union_bboxes};
use std::sync::OnceLock;

/// An ordered collection of line strings.
pub struct MultiLineString<C> {
	line_strings: Vec<LineString<C>>,
	bbox: OnceLock<Option<Rect<C>>>,
}

impl<C> MultiLineString<C> {
	#[must_use]
	pub fn new(line_strings: Vec<LineString<C>>) -> Self {
		MultiLineString {
			line_strings,
			bbox: OnceLock::new(),
		}
	}

	#[must_use]
	pub fn line_strings(&self) -> &[LineString<C>] {
		&self.line_strings
	}

	pub fn iter(&self) -> impl Iterator<Item = &LineString<C>> {
		self.line_strings.iter()
	}

	#[must_use]
	pub fn into_inner(self) -> Vec<LineString<C>> {
		self.line_strings
	}
}

impl<C> GeometryTrait<C> for MultiLineString<C> {
	fn len(&self) -> usize {
		self.line_strings.len()
	}

	fn bbox(&self) -> Option<Rect<C>> {
		*self
			.bbox
			.get_or_init(|| union_bboxes(self.line_strings.iter().map(LineString::bbox)))
	}
}

crate::impl_container!(MultiLineString, LineString, line_strings);
