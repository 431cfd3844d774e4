//! The validate, encode, store and load, decode pipeline shared by all typed accessors.

use tracing::{debug, trace};

use super::ByteBuffer;
use crate::{
    int::{codec, IntegerWidth, Signedness, ValueDomain},
    Error, Result,
};

/// A typed integer accessor for one width and signedness.
///
/// The width is validated once, when the accessor is created. Every subsequent
/// [`IntAccessor::write`] and [`IntAccessor::read`] runs the same explicit pipeline:
///
/// - write: check [`ValueDomain`] → [`codec::encode`] (signed only) → store `width / 8` bytes,
///   least-significant first
/// - read: load `width / 8` bytes, least-significant first → [`codec::decode`] (signed only)
///
/// The named methods on [`ByteBuffer`] (`write_uint8`, `read_int32`, ...) are thin wrappers around
/// the eight fixed accessors; this type is the runtime-width entry point for callers that only
/// know the width as a number.
///
/// # Examples
///
/// ```rust
/// use bytedatas::{ByteBuffer, IntAccessor, Signedness};
///
/// let int16 = IntAccessor::new(16, Signedness::Signed)?;
/// let mut buffer = ByteBuffer::new(8);
///
/// assert!(int16.write(&mut buffer, 2, -2)?);
/// assert_eq!(buffer.as_slice()[2..4], [0xFE, 0xFF]);
/// assert_eq!(int16.read(&buffer, 2)?, -2);
///
/// // Outside [-32768, 32767]: rejected, buffer untouched
/// assert!(!int16.write(&mut buffer, 2, 40_000)?);
/// assert_eq!(int16.read(&buffer, 2)?, -2);
///
/// // Widths other than 8/16/32/64 fail at construction
/// assert!(IntAccessor::new(24, Signedness::Unsigned).is_err());
/// # Ok::<(), bytedatas::Error>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntAccessor {
    width: IntegerWidth,
    signedness: Signedness,
    domain: ValueDomain,
}

impl IntAccessor {
    /// Create an accessor from a bit count
    ///
    /// ## Arguments
    /// * 'bits'       - The bit width, one of 8, 16, 32 or 64
    /// * 'signedness' - How stored patterns are interpreted
    ///
    /// # Errors
    /// Returns [`Error::UnsupportedWidth`] for any other bit count
    pub fn new(bits: u32, signedness: Signedness) -> Result<Self> {
        let width = IntegerWidth::try_from(bits).inspect_err(|_| {
            debug!(bits, %signedness, "refusing to build accessor for unsupported width");
        })?;

        Ok(Self::of(width, signedness))
    }

    /// Create an accessor from an already validated width
    #[must_use]
    pub const fn of(width: IntegerWidth, signedness: Signedness) -> Self {
        IntAccessor {
            width,
            signedness,
            domain: ValueDomain::of(width, signedness),
        }
    }

    /// The width this accessor operates on
    #[must_use]
    pub const fn width(&self) -> IntegerWidth {
        self.width
    }

    /// The signedness this accessor operates with
    #[must_use]
    pub const fn signedness(&self) -> Signedness {
        self.signedness
    }

    /// The values this accessor accepts
    #[must_use]
    pub const fn domain(&self) -> ValueDomain {
        self.domain
    }

    /// Write `value` at `seat`
    ///
    /// Returns `Ok(false)` without touching the buffer if `value` lies outside
    /// [`IntAccessor::domain`]. Otherwise all `width / 8` bytes are stored and `Ok(true)` is
    /// returned.
    ///
    /// ## Arguments
    /// * 'buffer' - The buffer to write into
    /// * 'seat'   - Offset of the least-significant byte
    /// * 'value'  - The logical value to store
    ///
    /// # Errors
    /// Returns [`Error::OutOfBounds`] if `seat .. seat + width / 8` is not inside the buffer, in
    /// which case nothing is written.
    pub fn write(&self, buffer: &mut ByteBuffer, seat: usize, value: i128) -> Result<bool> {
        if !self.domain.contains(value) {
            trace!(
                width = %self.width,
                signedness = %self.signedness,
                seat,
                value = %value,
                "value outside domain, write rejected"
            );
            return Ok(false);
        }

        let mut pattern = match self.signedness {
            Signedness::Signed => codec::encode(self.width, value)?,
            Signedness::Unsigned => u64::try_from(value)?,
        };

        let slots = buffer.slots_mut(seat, self.width.bytes())?;
        for slot in slots.iter_mut() {
            *slot = (pattern & 0xFF) as u8;
            pattern >>= 8;
        }

        Ok(true)
    }

    /// Read the value stored at `seat`
    ///
    /// ## Arguments
    /// * 'buffer' - The buffer to read from
    /// * 'seat'   - Offset of the least-significant byte
    ///
    /// # Errors
    /// Returns [`Error::OutOfBounds`] if `seat .. seat + width / 8` is not inside the buffer
    pub fn read(&self, buffer: &ByteBuffer, seat: usize) -> Result<i128> {
        let slots = buffer.slots(seat, self.width.bytes())?;
        let raw = slots
            .iter()
            .enumerate()
            .fold(0_u64, |raw, (index, byte)| raw | (u64::from(*byte) << (index * 8)));

        match self.signedness {
            Signedness::Signed => codec::decode(self.width, raw),
            Signedness::Unsigned if raw > self.width.max_pattern() => Err(Error::InvalidBitPattern {
                width: self.width,
                raw,
            }),
            Signedness::Unsigned => Ok(i128::from(raw)),
        }
    }
}
