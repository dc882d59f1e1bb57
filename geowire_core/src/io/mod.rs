//! Forward-only byte input.

mod byte_cursor;

pub use byte_cursor::*;
