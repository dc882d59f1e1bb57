use super::frame::{Frame, FrameMachine, Value};
use super::{GeomType, GeometryConsumer, InvariantViolationError, UnsupportedFeatureError};
use crate::geo::{LineString, MultiLineString, MultiPoint, MultiPolygon, Polygon};
use anyhow::{Context, Result};
use geowire_core::ByteCursor;
use log::trace;

// Metadata byte flags.
const FLAG_BBOX: u8 = 0b0000_0001;
const FLAG_SIZE: u8 = 0b0000_0010;
const FLAG_ID_LIST: u8 = 0b0000_0100;
const FLAG_EXTENDED_PRECISION: u8 = 0b0000_1000;
const FLAG_EMPTY: u8 = 0b0001_0000;

/// Decodes every object in `data`, delivering results to `consumer`.
///
/// Decoding aborts on the first error; the buffer is not resumable and no
/// partial geometry is reported for the object in progress.
pub fn parse<C>(data: &[u8], consumer: &mut dyn GeometryConsumer<C>) -> Result<()> {
	let mut parser = Parser::new(data, consumer);
	while parser.next()? {}
	Ok(())
}

/// Header and id list of the object currently being parsed.
struct ObjectContext {
	geom_type: GeomType,
	ids: Vec<i64>,
}

/// An incremental decode session over one byte buffer.
///
/// Each [`next`](Parser::next) call performs one unit of work — reading one
/// object header or consuming (at most) one coordinate pair — so the caller
/// can interleave decoding with other work. [`parse`] is the run-to-end
/// convenience wrapper.
pub struct Parser<'a, 'c, C> {
	cursor: ByteCursor<'a>,
	machine: FrameMachine<C>,
	consumer: &'c mut dyn GeometryConsumer<C>,
	object: Option<ObjectContext>,
}

impl<'a, 'c, C> Parser<'a, 'c, C> {
	pub fn new(data: &'a [u8], consumer: &'c mut dyn GeometryConsumer<C>) -> Self {
		Parser {
			cursor: ByteCursor::new(data),
			machine: FrameMachine::new(),
			consumer,
			object: None,
		}
	}

	/// An object header has been read and its coordinates are not yet
	/// exhausted.
	#[must_use]
	pub fn is_parsing_object(&self) -> bool {
		self.machine.is_parsing()
	}

	/// Performs one decode step. Returns `false` once the input is
	/// exhausted and no object is in progress.
	pub fn next(&mut self) -> Result<bool> {
		if self.machine.is_parsing() {
			if let Some(value) = self.machine.advance(&mut self.cursor)? {
				let object = self
					.object
					.take()
					.ok_or(InvariantViolationError("root value reported without an active object"))?;
				self.report(&object, value)?;
			}
			Ok(true)
		} else if self.cursor.has_next() {
			self.read_object_header()?;
			Ok(true)
		} else {
			Ok(false)
		}
	}

	/// Reads one object header plus metadata and pushes the root frame.
	///
	/// Empty objects and collection headers start no frame at all: an empty
	/// object is skipped outright, and collections are flattened by simply
	/// scanning on for the nested objects' own headers.
	fn read_object_header(&mut self) -> Result<()> {
		let header = self.cursor.read_byte().context("Failed to read object header")?;
		let geom_type = GeomType::from_code(header & 0x0F)?;
		let precision = zigzag_nibble(header >> 4);

		let meta = self.cursor.read_byte().context("Failed to read object metadata")?;
		for (flag, feature) in [
			(FLAG_BBOX, "bounding box"),
			(FLAG_SIZE, "size"),
			(FLAG_EXTENDED_PRECISION, "extended precision"),
		] {
			if meta & flag != 0 {
				return Err(UnsupportedFeatureError { feature }.into());
			}
		}

		trace!("object header: type={geom_type:?} precision={precision} meta={meta:#04x}");

		if meta & FLAG_EMPTY != 0 {
			trace!("skipping empty {geom_type:?}");
			return Ok(());
		}

		let mut ids = Vec::new();
		let mut count = 0;
		if geom_type.is_multi() {
			count = self.cursor.read_varint().context("Failed to read element count")? as usize;
			if meta & FLAG_ID_LIST != 0 {
				ids = (0..count)
					.map(|_| self.cursor.read_svarint())
					.collect::<Result<Vec<i64>>>()
					.context("Failed to read id list")?;
			}
		}

		let frame = match geom_type {
			GeomType::Point => Frame::point(),
			GeomType::LineString => Frame::point_list(&mut self.cursor)?,
			GeomType::Polygon => Frame::ring_list(&mut self.cursor)?,
			GeomType::MultiPoint => Frame::multi_point(count),
			GeomType::MultiLineString => Frame::multi_line_string(count),
			GeomType::MultiPolygon => Frame::multi_polygon(count),
			GeomType::GeometryCollection => {
				trace!("flattening collection of {count} geometries");
				return Ok(());
			}
		};

		self.machine.start(frame, precision)?;
		self.object = Some(ObjectContext { geom_type, ids });
		Ok(())
	}

	/// Routes a completed root value to the consumer, exploding id-tagged
	/// multi geometries into their children.
	fn report(&mut self, object: &ObjectContext, value: Value<C>) -> Result<()> {
		match object.geom_type {
			GeomType::Point => self.consumer.on_point(value.into_point()?),
			GeomType::LineString => self.consumer.on_line_string(LineString::new(value.into_points()?)),
			GeomType::Polygon => {
				let rings = value
					.into_list()?
					.into_iter()
					.map(Value::into_ring)
					.collect::<Result<Vec<_>>>()?;
				self.consumer.on_polygon(Polygon::new(rings))
			}
			GeomType::MultiPoint => {
				let points = value
					.into_list()?
					.into_iter()
					.map(Value::into_point)
					.collect::<Result<Vec<_>>>()?;
				if object.ids.is_empty() {
					self.consumer.on_multi_point(MultiPoint::new(points))
				} else {
					for point in points {
						self.consumer.on_point(point)?;
					}
					Ok(())
				}
			}
			GeomType::MultiLineString => {
				let line_strings = value
					.into_list()?
					.into_iter()
					.map(Value::into_line_string)
					.collect::<Result<Vec<_>>>()?;
				if object.ids.is_empty() {
					self.consumer.on_multi_line_string(MultiLineString::new(line_strings))
				} else {
					for line_string in line_strings {
						self.consumer.on_line_string(line_string)?;
					}
					Ok(())
				}
			}
			GeomType::MultiPolygon => {
				let polygons = value
					.into_list()?
					.into_iter()
					.map(Value::into_polygon)
					.collect::<Result<Vec<_>>>()?;
				if object.ids.is_empty() {
					self.consumer.on_multi_polygon(MultiPolygon::new(polygons))
				} else {
					for polygon in polygons {
						self.consumer.on_polygon(polygon)?;
					}
					Ok(())
				}
			}
			GeomType::GeometryCollection => {
				Err(InvariantViolationError("collection reported as a root value").into())
			}
		}
	}
}

/// Decodes the zig-zag-encoded precision nibble of a header byte.
fn zigzag_nibble(value: u8) -> i32 {
	let value = i32::from(value);
	(value >> 1) ^ -(value & 1)
}
