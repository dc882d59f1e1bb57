//! Decoder for a TWKB-style compact binary geometry format.
//!
//! Objects are delta-coded pairs of zig-zag varints with a per-object decimal
//! precision; nesting (rings in polygons, polygons in multi-polygons) is
//! handled by a push-down stack of parser frames so the caller can drive
//! decoding one coordinate at a time. Decoded values are delivered through
//! the [`GeometryConsumer`] visitor.

mod consumer;
mod error;
mod frame;
mod geometry_type;
mod parser;

pub use consumer::*;
pub use error::*;
pub use geometry_type::*;
pub use parser::*;
