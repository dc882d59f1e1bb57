//! Typed 2D geometry and a decoder for a compact binary geometry wire format.
//!
//! The [`geo`] module defines an immutable geometry value model whose types
//! carry a compile-time coordinate-space tag, so values from different spaces
//! (geographic degrees, tile pixels, client device units) cannot be mixed
//! without an explicit conversion. The [`twkb`] module decodes a TWKB-style
//! delta-coded, varint-encoded wire format into that model, one coordinate at
//! a time, via a push-down stack of parser frames.

pub mod geo;
pub mod math;
pub mod twkb;

pub use geo::*;
