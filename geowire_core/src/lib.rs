//! Low-level byte input for the geowire decoder.
//!
//! Provides [`io::ByteCursor`], a strictly forward-only reader over an
//! in-memory buffer with variable-length integer decoding, and the
//! [`io::TruncatedInputError`] raised when a read runs past the end of the
//! buffer.

pub mod io;

pub use io::{ByteCursor, TruncatedInputError};
