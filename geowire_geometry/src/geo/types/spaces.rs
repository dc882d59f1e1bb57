//! Coordinate-space marker types.
//!
//! Every geometry value carries one of these zero-size tags as a type
//! parameter. The tag has no runtime representation; its only purpose is to
//! make mixing values from different coordinate spaces a compile error.
//! Crossing spaces requires an explicit `reinterpret` call.

/// Longitude/latitude degrees (WGS84).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Geographic;

/// Pixels of a rendered tile or canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pixel;

/// Device-independent client units (e.g. CSS pixels).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Client;
