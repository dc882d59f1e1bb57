use super::Rect;
use std::fmt::Debug;

/// Shared interface of the ordered geometry containers.
///
/// Containers are immutable after construction; the bounding box is computed
/// at most once and cached for the lifetime of the value.
pub trait GeometryTrait<C>: Debug {
	/// Number of direct elements (points for sequences, children for the
	/// multi/composite kinds).
	fn len(&self) -> usize;

	/// Checks whether the container has no elements.
	fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// The bounding box over all contained points, or `None` when the
	/// container is empty. Never a degenerate zero-size stand-in.
	fn bbox(&self) -> Option<Rect<C>>;
}
