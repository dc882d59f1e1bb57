use super::FormatError;
use anyhow::Result;

/// Geometry-type codes carried in the low nibble of an object header byte.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GeomType {
	Point = 1,
	LineString = 2,
	Polygon = 3,
	MultiPoint = 4,
	MultiLineString = 5,
	MultiPolygon = 6,
	GeometryCollection = 7,
}

impl GeomType {
	/// Maps a wire code to its geometry type, failing with [`FormatError`]
	/// for anything outside `1..=7`.
	pub fn from_code(code: u8) -> Result<GeomType> {
		Ok(match code {
			1 => GeomType::Point,
			2 => GeomType::LineString,
			3 => GeomType::Polygon,
			4 => GeomType::MultiPoint,
			5 => GeomType::MultiLineString,
			6 => GeomType::MultiPolygon,
			7 => GeomType::GeometryCollection,
			code => return Err(FormatError { code }.into()),
		})
	}

	/// Multi kinds (and collections) carry an element count and an optional
	/// id list after the metadata byte.
	#[must_use]
	pub fn is_multi(self) -> bool {
		matches!(
			self,
			GeomType::MultiPoint | GeomType::MultiLineString | GeomType::MultiPolygon | GeomType::GeometryCollection
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_from_code() {
		assert_eq!(GeomType::from_code(1).unwrap(), GeomType::Point);
		assert_eq!(GeomType::from_code(4).unwrap(), GeomType::MultiPoint);
		assert_eq!(GeomType::from_code(7).unwrap(), GeomType::GeometryCollection);
	}

	#[test]
	fn test_from_code_invalid() {
		for code in [0u8, 8, 9, 15] {
			let error = GeomType::from_code(code).unwrap_err();
			assert_eq!(*error.downcast_ref::<FormatError>().unwrap(), FormatError { code });
		}
	}

	#[test]
	fn test_is_multi() {
		assert!(!GeomType::Point.is_multi());
		assert!(!GeomType::LineString.is_multi());
		assert!(!GeomType::Polygon.is_multi());
		assert!(GeomType::MultiPoint.is_multi());
		assert!(GeomType::MultiLineString.is_multi());
		assert!(GeomType::MultiPolygon.is_multi());
		assert!(GeomType::GeometryCollection.is_multi());
	}
}
