//! Two's-complement conversion between signed logical values and stored bit patterns.
//!
//! The buffer only ever stores raw unsigned patterns. Signed accessors pass through this module
//! on the way in ([`encode`]) and on the way out ([`decode`]); unsigned accessors bypass it.
//!
//! Over the signed domain of a width the two functions are exact inverses:
//!
//! ```rust
//! use bytedatas::{codec, IntegerWidth};
//!
//! let pattern = codec::encode(IntegerWidth::W8, -124)?;
//! assert_eq!(pattern, 132);
//! assert_eq!(codec::decode(IntegerWidth::W8, pattern)?, -124);
//! # Ok::<(), bytedatas::Error>(())
//! ```

use super::{IntegerWidth, Signedness, ValueDomain};
use crate::{Error, Result};

/// Convert a signed `value` into the unsigned pattern stored for `width`.
///
/// Negative values map to `value + 2^width`, non-negative values are stored unchanged.
///
/// # Errors
/// Returns [`Error::ValueOutOfDomain`] if `value` is outside the signed domain of `width`
pub fn encode(width: IntegerWidth, value: i128) -> Result<u64> {
    if !ValueDomain::of(width, Signedness::Signed).contains(value) {
        return Err(Error::ValueOutOfDomain { width, value });
    }

    let pattern = if value < 0 {
        value + width.modulus()
    } else {
        value
    };

    Ok(u64::try_from(pattern)?)
}

/// Convert a stored unsigned pattern back into the signed value it represents for `width`.
///
/// Patterns with the top bit set (`raw > 2^width / 2 - 1`) map to `raw - 2^width`, all others are
/// returned unchanged.
///
/// # Errors
/// Returns [`Error::InvalidBitPattern`] if `raw` exceeds `2^width - 1`
pub fn decode(width: IntegerWidth, raw: u64) -> Result<i128> {
    if raw > width.max_pattern() {
        return Err(Error::InvalidBitPattern { width, raw });
    }

    let raw = i128::from(raw);
    if raw > width.modulus() / 2 - 1 {
        Ok(raw - width.modulus())
    } else {
        Ok(raw)
    }
}
