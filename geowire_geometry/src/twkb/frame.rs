//! The push-down automaton at the heart of the decoder.
//!
//! A geometry object is parsed by a stack of frames, one per nesting level;
//! only the top frame is ever active. Each `advance` performs one step of the
//! top frame — usually consuming one coordinate pair — and a frame that
//! finishes reports its value to its parent, cascading upward when parents
//! finish in turn. This keeps the call stack flat: the caller can interleave
//! arbitrary work between coordinates, which plain recursive descent could
//! not offer.
//!
//! Three frame kinds cover the whole format. `Point` and `PointList` are the
//! leaves; the generic `Nested` combinator — a child-frame factory plus a
//! wrap function — realizes every composite kind: a polygon is a `Nested`
//! over point lists wrapped as rings, a multi-polygon is a `Nested` over
//! ring-list frames wrapped as polygons, and so on.

use super::InvariantViolationError;
use crate::geo::{LineString, Polygon, Ring, Vec2};
use anyhow::{Context, Result};
use geowire_core::ByteCursor;
use std::mem::take;

/// An intermediate parse result reported by a finished frame.
#[derive(Debug)]
pub(super) enum Value<C> {
	Point(Vec2<C>),
	Points(Vec<Vec2<C>>),
	Ring(Ring<C>),
	LineString(LineString<C>),
	Polygon(Polygon<C>),
	List(Vec<Value<C>>),
}

impl<C> Value<C> {
	pub(super) fn into_point(self) -> Result<Vec2<C>> {
		match self {
			Value::Point(point) => Ok(point),
			_ => Err(InvariantViolationError("frame reported a non-point value").into()),
		}
	}

	pub(super) fn into_points(self) -> Result<Vec<Vec2<C>>> {
		match self {
			Value::Points(points) => Ok(points),
			_ => Err(InvariantViolationError("frame reported a non-point-list value").into()),
		}
	}

	pub(super) fn into_ring(self) -> Result<Ring<C>> {
		match self {
			Value::Ring(ring) => Ok(ring),
			_ => Err(InvariantViolationError("frame reported a non-ring value").into()),
		}
	}

	pub(super) fn into_line_string(self) -> Result<LineString<C>> {
		match self {
			Value::LineString(line_string) => Ok(line_string),
			_ => Err(InvariantViolationError("frame reported a non-linestring value").into()),
		}
	}

	pub(super) fn into_polygon(self) -> Result<Polygon<C>> {
		match self {
			Value::Polygon(polygon) => Ok(polygon),
			_ => Err(InvariantViolationError("frame reported a non-polygon value").into()),
		}
	}

	pub(super) fn into_list(self) -> Result<Vec<Value<C>>> {
		match self {
			Value::List(items) => Ok(items),
			_ => Err(InvariantViolationError("frame reported a non-list value").into()),
		}
	}
}

type ChildFactory<C> = fn(&mut ByteCursor) -> Result<Frame<C>>;
type WrapFn<C> = fn(Value<C>) -> Result<Value<C>>;

fn child_point<C>(_cursor: &mut ByteCursor) -> Result<Frame<C>> {
	Ok(Frame::point())
}

fn child_point_list<C>(cursor: &mut ByteCursor) -> Result<Frame<C>> {
	Frame::point_list(cursor)
}

fn child_ring_list<C>(cursor: &mut ByteCursor) -> Result<Frame<C>> {
	Frame::ring_list(cursor)
}

fn wrap_identity<C>(value: Value<C>) -> Result<Value<C>> {
	Ok(value)
}

fn wrap_ring<C>(value: Value<C>) -> Result<Value<C>> {
	Ok(Value::Ring(Ring::new(value.into_points()?)))
}

fn wrap_line_string<C>(value: Value<C>) -> Result<Value<C>> {
	Ok(Value::LineString(LineString::new(value.into_points()?)))
}

fn wrap_polygon<C>(value: Value<C>) -> Result<Value<C>> {
	let rings = value
		.into_list()?
		.into_iter()
		.map(Value::into_ring)
		.collect::<Result<Vec<_>>>()?;
	Ok(Value::Polygon(Polygon::new(rings)))
}

/// One level of the parse stack.
pub(super) enum Frame<C> {
	/// Consumes exactly one coordinate pair.
	Point,
	/// Consumes `count` coordinate pairs, one per advance.
	PointList { count: usize, points: Vec<Vec2<C>> },
	/// The generic combinator over child frames; see the module docs.
	Nested(NestedFrame<C>),
}

pub(super) struct NestedFrame<C> {
	count: usize,
	child: ChildFactory<C>,
	wrap: WrapFn<C>,
	items: Vec<Value<C>>,
}

impl<C> NestedFrame<C> {
	fn report(&mut self) -> Value<C> {
		Value::List(take(&mut self.items))
	}
}

/// Outcome of one step of the top frame.
enum Step<C> {
	/// More input needed; the frame stays on the stack.
	Continue,
	/// A child frame becomes the active one.
	Push(Frame<C>),
	/// The frame finished and reports its value.
	Done(Value<C>),
}

impl<C> Frame<C> {
	pub(super) fn point() -> Self {
		Frame::Point
	}

	/// Reads its point count from the cursor, as the wire format stores it
	/// directly before the coordinates.
	pub(super) fn point_list(cursor: &mut ByteCursor) -> Result<Self> {
		let count = cursor.read_varint().context("Failed to read point count")? as usize;
		Ok(Frame::PointList {
			count,
			points: Vec::new(),
		})
	}

	/// A ring sequence (the body of a polygon); reads its ring count from
	/// the cursor.
	pub(super) fn ring_list(cursor: &mut ByteCursor) -> Result<Self> {
		let count = cursor.read_varint().context("Failed to read ring count")? as usize;
		Ok(Frame::nested(count, child_point_list, wrap_ring))
	}

	pub(super) fn multi_point(count: usize) -> Self {
		Frame::nested(count, child_point, wrap_identity)
	}

	pub(super) fn multi_line_string(count: usize) -> Self {
		Frame::nested(count, child_point_list, wrap_line_string)
	}

	pub(super) fn multi_polygon(count: usize) -> Self {
		Frame::nested(count, child_ring_list, wrap_polygon)
	}

	fn nested(count: usize, child: ChildFactory<C>, wrap: WrapFn<C>) -> Self {
		Frame::Nested(NestedFrame {
			count,
			child,
			wrap,
			items: Vec::new(),
		})
	}

	/// Performs one step while this frame is on top of the stack.
	fn step(&mut self, coords: &mut CoordDecoder, cursor: &mut ByteCursor) -> Result<Step<C>> {
		match self {
			Frame::Point => Ok(Step::Done(Value::Point(coords.read_point(cursor)?))),
			Frame::PointList { count, points } => {
				if points.len() < *count {
					points.push(coords.read_point(cursor)?);
				}
				if points.len() == *count {
					Ok(Step::Done(Value::Points(take(points))))
				} else {
					Ok(Step::Continue)
				}
			}
			Frame::Nested(nested) => {
				if nested.items.len() == nested.count {
					// Zero children requested; finish without input.
					Ok(Step::Done(nested.report()))
				} else {
					Ok(Step::Push((nested.child)(cursor)?))
				}
			}
		}
	}

	/// Receives the value of a finished child frame.
	fn child_done(&mut self, value: Value<C>) -> Result<Option<Value<C>>> {
		match self {
			Frame::Nested(nested) => {
				nested.items.push((nested.wrap)(value)?);
				if nested.items.len() == nested.count {
					Ok(Some(nested.report()))
				} else {
					Ok(None)
				}
			}
			_ => Err(InvariantViolationError("completion delivered to a leaf frame").into()),
		}
	}
}

/// The per-object delta accumulator.
///
/// Coordinate deltas are relative to the previously decoded point of the same
/// top-level object, even across ring and part boundaries; the accumulator
/// resets only when a new object header is read. Raw integer coordinates are
/// divided by the precision scale before they become a `Vec2`.
pub(super) struct CoordDecoder {
	x: i64,
	y: i64,
	scale: f64,
}

impl CoordDecoder {
	pub(super) fn new() -> Self {
		CoordDecoder {
			x: 0,
			y: 0,
			scale: 1.0,
		}
	}

	fn reset(&mut self, precision: i32) {
		self.x = 0;
		self.y = 0;
		self.scale = 10f64.powi(precision);
	}

	fn read_point<C>(&mut self, cursor: &mut ByteCursor) -> Result<Vec2<C>> {
		self.x += cursor.read_svarint().context("Failed to read x delta")?;
		self.y += cursor.read_svarint().context("Failed to read y delta")?;
		Ok(Vec2::new(self.x as f64 / self.scale, self.y as f64 / self.scale))
	}
}

/// The frame stack plus the coordinate accumulator of one decode session.
pub(super) struct FrameMachine<C> {
	stack: Vec<Frame<C>>,
	coords: CoordDecoder,
}

impl<C> FrameMachine<C> {
	pub(super) fn new() -> Self {
		FrameMachine {
			stack: Vec::new(),
			coords: CoordDecoder::new(),
		}
	}

	/// An object is still being parsed.
	pub(super) fn is_parsing(&self) -> bool {
		!self.stack.is_empty()
	}

	/// Begins a new top-level object with the given root frame.
	pub(super) fn start(&mut self, frame: Frame<C>, precision: i32) -> Result<()> {
		if self.is_parsing() {
			return Err(InvariantViolationError("object started while another is being parsed").into());
		}
		self.coords.reset(precision);
		self.stack.push(frame);
		Ok(())
	}

	/// Advances the top frame by one step, consuming at most one coordinate
	/// pair. Returns the root value once the whole object is parsed.
	pub(super) fn advance(&mut self, cursor: &mut ByteCursor) -> Result<Option<Value<C>>> {
		let step = match self.stack.last_mut() {
			Some(frame) => frame.step(&mut self.coords, cursor)?,
			None => return Err(InvariantViolationError("advance called with an empty frame stack").into()),
		};
		match step {
			Step::Continue => Ok(None),
			Step::Push(child) => {
				self.stack.push(child);
				Ok(None)
			}
			Step::Done(value) => self.complete(value),
		}
	}

	/// Pops the finished top frame and delivers its value to the parent,
	/// cascading while parents finish in turn. A value surviving past the
	/// bottom of the stack is the root value.
	fn complete(&mut self, value: Value<C>) -> Result<Option<Value<C>>> {
		let mut value = value;
		loop {
			if self.stack.pop().is_none() {
				return Err(InvariantViolationError("completion with an empty frame stack").into());
			}
			match self.stack.last_mut() {
				None => return Ok(Some(value)),
				Some(parent) => match parent.child_done(value)? {
					None => return Ok(None),
					Some(done) => value = done,
				},
			}
		}
	}
}
