use crate::geo::{LineString, MultiLineString, MultiPoint, MultiPolygon, Polygon, Vec2};
use anyhow::{Result, bail};

/// Visitor receiving decoded top-level geometries.
///
/// Every method is optional; the default bodies fail, so feeding a geometry
/// kind to a consumer that does not handle it is an explicit error rather
/// than a silent no-op.
///
/// A multi geometry that carries a non-empty id list is *exploded*: each
/// child is delivered through the corresponding singular method, letting
/// downstream code treat the children as independently addressable features.
/// Without ids the aggregate method is called exactly once.
pub trait GeometryConsumer<C> {
	fn on_point(&mut self, _point: Vec2<C>) -> Result<()> {
		bail!("point geometries are not supported by this consumer")
	}

	fn on_line_string(&mut self, _line_string: LineString<C>) -> Result<()> {
		bail!("linestring geometries are not supported by this consumer")
	}

	fn on_polygon(&mut self, _polygon: Polygon<C>) -> Result<()> {
		bail!("polygon geometries are not supported by this consumer")
	}

	fn on_multi_point(&mut self, _multi_point: MultiPoint<C>) -> Result<()> {
		bail!("multipoint geometries are not supported by this consumer")
	}

	fn on_multi_line_string(&mut self, _multi_line_string: MultiLineString<C>) -> Result<()> {
		bail!("multilinestring geometries are not supported by this consumer")
	}

	fn on_multi_polygon(&mut self, _multi_polygon: MultiPolygon<C>) -> Result<()> {
		bail!("multipolygon geometries are not supported by this consumer")
	}
}
