use std::num::TryFromIntError;

use thiserror::Error;

use crate::int::IntegerWidth;

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Only programming-error class failures are represented here. A value that falls outside the
/// legal domain of an accessor is an expected outcome and is reported through the `bool` returned
/// by the write operations, never through this type.
///
/// # Error Categories
///
/// ## Access Errors
/// - [`Error::OutOfBounds`] - The requested byte range does not lie inside the buffer
///
/// ## Configuration Errors
/// - [`Error::UnsupportedWidth`] - An accessor was requested for a bit width other than 8/16/32/64
///
/// ## Internal Invariant Errors
/// - [`Error::InvalidBitPattern`] - A raw pattern wider than its width reached the decoder
/// - [`Error::ValueOutOfDomain`] - An unvalidated value reached the encoder
/// - [`Error::TryFromInt`] - A decoded value did not fit its Rust primitive
///
/// # Examples
///
/// ```rust
/// use bytedatas::{ByteBuffer, Error};
///
/// let mut buffer = ByteBuffer::new(4);
///
/// // Out of domain: expected failure, no error
/// assert!(!buffer.write_uint8(0, 256)?);
///
/// // Out of bounds: programming error
/// assert!(matches!(buffer.write_uint32(2, 1), Err(Error::OutOfBounds)));
/// # Ok::<(), bytedatas::Error>(())
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An out of bound access was attempted.
    ///
    /// Raised when `seat .. seat + len` does not fit inside the buffer, or when the range
    /// arithmetic itself would overflow. The buffer is never modified when this is returned.
    #[error("Out of Bound access would have occurred!")]
    OutOfBounds,

    /// The requested bit width is not one of 8, 16, 32 or 64.
    ///
    /// This is a configuration error. It is raised once, when an accessor is constructed,
    /// and never by individual read or write calls.
    #[error("Value of bit width should be one of 8, 16, 32, 64, but was {0}")]
    UnsupportedWidth(u32),

    /// The decoder received a raw pattern outside `[0, 2^width - 1]`.
    ///
    /// Raw patterns are assembled from exactly `width / 8` bytes, so this indicates a corrupted
    /// internal invariant rather than bad user input.
    #[error("Raw pattern {raw:#x} does not fit in {width}")]
    InvalidBitPattern {
        /// The width the pattern was decoded for
        width: IntegerWidth,
        /// The offending raw pattern
        raw: u64,
    },

    /// The encoder received a value outside the signed domain of its width.
    ///
    /// Writes validate before encoding, so this indicates a corrupted internal invariant.
    #[error("Value {value} can not be encoded in {width}")]
    ValueOutOfDomain {
        /// The width the value was encoded for
        width: IntegerWidth,
        /// The offending value
        value: i128,
    },

    /// A decoded value did not fit the Rust primitive it was requested as.
    #[error("Invalid integer for destination type: {0}")]
    TryFromInt(#[from] TryFromIntError),
}
