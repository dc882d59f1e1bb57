// This module defines the core geometric types used throughout the
// `geowire_geometry` crate: the tagged primitives `Scalar`, `Vec2` and `Rect`,
// the ordered containers `Ring`, `LineString`, `MultiPoint`, `Polygon`,
// `MultiLineString` and `MultiPolygon`, and the coordinate-space marker types
// they are parameterized over. All containers are immutable after
// construction and memoize their bounding box on first access.

mod linestring;
mod macros;
mod multi_linestring;
mod multi_point;
mod multi_polygon;
mod polygon;
mod rect;
mod ring;
mod scalar;
mod spaces;
mod traits;
mod vec2;

pub use linestring::*;
pub use multi_linestring::*;
pub use multi_point::*;
pub use multi_polygon::*;
pub use polygon::*;
pub use rect::*;
pub use ring::*;
pub use scalar::*;
pub use spaces::*;
pub use traits::*;
pub use vec2::*;
