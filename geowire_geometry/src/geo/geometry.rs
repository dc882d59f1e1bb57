use super::{GeometryTrait, MultiLineString, MultiPoint, MultiPolygon, Rect};
use anyhow::{Result, bail};
use std::fmt::Debug;

/// A geometry value: exactly one of the three multi kinds.
///
/// Singular geometries are represented by their containers directly; this
/// enum exists for code that stores heterogeneous features. The checked
/// accessors fail on a variant mismatch instead of silently yielding nothing.
pub enum Geometry<C> {
	MultiPoint(MultiPoint<C>),
	MultiLineString(MultiLineString<C>),
	MultiPolygon(MultiPolygon<C>),
}

impl<C> Geometry<C> {
	#[must_use]
	pub fn type_name(&self) -> &'static str {
		match self {
			Geometry::MultiPoint(_) => "MultiPoint",
			Geometry::MultiLineString(_) => "MultiLineString",
			Geometry::MultiPolygon(_) => "MultiPolygon",
		}
	}

	pub fn as_multi_point(&self) -> Result<&MultiPoint<C>> {
		match self {
			Geometry::MultiPoint(g) => Ok(g),
			other => bail!("expected MultiPoint, found {}", other.type_name()),
		}
	}

	pub fn as_multi_line_string(&self) -> Result<&MultiLineString<C>> {
		match self {
			Geometry::MultiLineString(g) => Ok(g),
			other => bail!("expected MultiLineString, found {}", other.type_name()),
		}
	}

	pub fn as_multi_polygon(&self) -> Result<&MultiPolygon<C>> {
		match self {
			Geometry::MultiPolygon(g) => Ok(g),
			other => bail!("expected MultiPolygon, found {}", other.type_name()),
		}
	}

	pub fn into_multi_point(self) -> Result<MultiPoint<C>> {
		match self {
			Geometry::MultiPoint(g) => Ok(g),
			other => bail!("expected MultiPoint, found {}", other.type_name()),
		}
	}

	pub fn into_multi_line_string(self) -> Result<MultiLineString<C>> {
		match self {
			Geometry::MultiLineString(g) => Ok(g),
			other => bail!("expected MultiLineString, found {}", other.type_name()),
		}
	}

	pub fn into_multi_polygon(self) -> Result<MultiPolygon<C>> {
		match self {
			Geometry::MultiPolygon(g) => Ok(g),
			other => bail!("expected MultiPolygon, found {}", other.type_name()),
		}
	}

	#[must_use]
	pub fn bbox(&self) -> Option<Rect<C>> {
		match self {
			Geometry::MultiPoint(g) => g.bbox(),
			Geometry::MultiLineString(g) => g.bbox(),
			Geometry::MultiPolygon(g) => g.bbox(),
		}
	}
}

impl<C> From<MultiPoint<C>> for Geometry<C> {
	fn from(value: MultiPoint<C>) -> Self {
		Geometry::MultiPoint(value)
	}
}

impl<C> From<MultiLineString<C>> for Geometry<C> {
	fn from(value: MultiLineString<C>) -> Self {
		Geometry::MultiLineString(value)
	}
}

impl<C> From<MultiPolygon<C>> for Geometry<C> {
	fn from(value: MultiPolygon<C>) -> Self {
		Geometry::MultiPolygon(value)
	}
}

impl<C> Clone for Geometry<C> {
	fn clone(&self) -> Self {
		match self {
			Geometry::MultiPoint(g) => Geometry::MultiPoint(g.clone()),
			Geometry::MultiLineString(g) => Geometry::MultiLineString(g.clone()),
			Geometry::MultiPolygon(g) => Geometry::MultiPolygon(g.clone()),
		}
	}
}

impl<C> PartialEq for Geometry<C> {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Geometry::MultiPoint(a), Geometry::MultiPoint(b)) => a == b,
			(Geometry::MultiLineString(a), Geometry::MultiLineString(b)) => a == b,
			(Geometry::MultiPolygon(a), Geometry::MultiPolygon(b)) => a == b,
			_ => false,
		}
	}
}

impl<C> Debug for Geometry<C> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let inner: &dyn Debug = match self {
			Geometry::MultiPoint(g) => g,
			Geometry::MultiLineString(g) => g,
			Geometry::MultiPolygon(g) => g,
		};
		f.debug_tuple(self.type_name()).field(inner).finish()
	}
}
