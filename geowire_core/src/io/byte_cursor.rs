//! This module provides the `ByteCursor` struct for reading a compact binary
//! stream one byte at a time.
//!
//! # Overview
//!
//! `ByteCursor` is a strictly forward-only reader over an immutable byte
//! slice. It decodes the two integer shapes used by delta-coded geometry wire
//! formats: base-128 little-endian varints and their zig-zag-encoded signed
//! counterpart. There is no rewind and no peeking beyond the next byte; the
//! formats it serves are designed for single-pass streaming decode.
//!
//! # Examples
//!
//! ```rust
//! use geowire_core::ByteCursor;
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let mut cursor = ByteCursor::new(&[0xAC, 0x02, 0x95, 0x01]);
//!     assert_eq!(cursor.read_varint()?, 300);
//!     assert_eq!(cursor.read_svarint()?, -75);
//!     assert!(!cursor.has_next());
//!     Ok(())
//! }
//! ```

use anyhow::{Result, bail};
use byteorder::ReadBytesExt;
use std::io::Cursor;
use thiserror::Error;

/// A read ran past the end of the input buffer.
///
/// Raised by [`ByteCursor::read_byte`] and everything built on top of it.
/// Decoding is not resumable once this has been raised.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("input truncated at byte {position} of {length}")]
pub struct TruncatedInputError {
	pub position: u64,
	pub length: u64,
}

/// A forward-only reader over an immutable byte buffer.
pub struct ByteCursor<'a> {
	cursor: Cursor<&'a [u8]>,
	len: u64,
}

impl<'a> ByteCursor<'a> {
	/// Creates a new cursor positioned at the start of `data`.
	#[must_use]
	pub fn new(data: &'a [u8]) -> ByteCursor<'a> {
		ByteCursor {
			len: data.len() as u64,
			cursor: Cursor::new(data),
		}
	}

	/// Returns the total length of the underlying buffer.
	#[must_use]
	pub fn len(&self) -> u64 {
		self.len
	}

	/// Checks if the underlying buffer is empty.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	/// Returns the current read position.
	#[must_use]
	pub fn position(&self) -> u64 {
		self.cursor.position()
	}

	/// Checks whether at least one more byte can be read.
	#[must_use]
	pub fn has_next(&self) -> bool {
		self.cursor.position() < self.len
	}

	/// Reads the next byte.
	///
	/// # Errors
	/// Fails with [`TruncatedInputError`] if the buffer is exhausted.
	pub fn read_byte(&mut self) -> Result<u8> {
		if !self.has_next() {
			return Err(TruncatedInputError {
				position: self.cursor.position(),
				length: self.len,
			}
			.into());
		}
		Ok(self.cursor.read_u8()?)
	}

	/// Reads a variable-length unsigned integer.
	///
	/// Each byte contributes 7 bits of magnitude, least significant group
	/// first; the high bit marks continuation.
	///
	/// # Errors
	/// Fails if the input ends mid-varint or the encoding exceeds 70 bits.
	pub fn read_varint(&mut self) -> Result<u64> {
		let mut value = 0;
		let mut shift = 0;
		loop {
			let byte = self.read_byte()?;
			value |= (u64::from(byte) & 0x7F) << shift;
			if byte & 0x80 == 0 {
				break;
			}
			shift += 7;
			if shift >= 70 {
				bail!("Varint too long");
			}
		}
		Ok(value)
	}

	/// Reads a zig-zag-encoded signed variable-length integer.
	///
	/// Even encoded values map to `v / 2`, odd values to `-(v + 1) / 2`,
	/// which keeps small-magnitude deltas of either sign compact.
	///
	/// # Errors
	/// Fails if reading the underlying varint fails.
	pub fn read_svarint(&mut self) -> Result<i64> {
		let value = self.read_varint()? as i64;
		Ok((value >> 1) ^ -(value & 1))
	}
}
