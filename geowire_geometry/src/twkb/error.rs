use thiserror::Error;

/// The object header carried a geometry-type code outside the known range.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognized geometry type code {code}")]
pub struct FormatError {
	pub code: u8,
}

/// The metadata byte requested a format extension this decoder rejects
/// (bounding box, size, or extended precision).
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unsupported feature: {feature}")]
pub struct UnsupportedFeatureError {
	pub feature: &'static str,
}

/// An internal consistency check of the frame machine failed.
///
/// This indicates a decoder bug, not malformed input; like the other decode
/// errors it aborts the session.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("decoder invariant violated: {0}")]
pub struct InvariantViolationError(pub &'static str);
