use strum::{Display, EnumCount, EnumIter};

use crate::{Error, Result};

/// The bit widths an integer accessor can operate on.
///
/// This is a closed set; any other width is rejected with [`Error::UnsupportedWidth`] when an
/// accessor is constructed through [`IntegerWidth::try_from`].
///
/// ## Layout
///
/// Every width occupies exactly `bits / 8` bytes in the buffer, least-significant byte first.
///
/// # Examples
///
/// ```rust
/// use bytedatas::IntegerWidth;
/// use strum::IntoEnumIterator;
///
/// let widths: Vec<u32> = IntegerWidth::iter().map(IntegerWidth::bits).collect();
/// assert_eq!(widths, [8, 16, 32, 64]);
///
/// assert_eq!(IntegerWidth::try_from(32)?, IntegerWidth::W32);
/// assert!(IntegerWidth::try_from(24).is_err());
/// # Ok::<(), bytedatas::Error>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, EnumCount)]
pub enum IntegerWidth {
    /// 8 bits, 1 byte
    #[strum(to_string = "8-bit")]
    W8,
    /// 16 bits, 2 bytes
    #[strum(to_string = "16-bit")]
    W16,
    /// 32 bits, 4 bytes
    #[strum(to_string = "32-bit")]
    W32,
    /// 64 bits, 8 bytes
    #[strum(to_string = "64-bit")]
    W64,
}

impl IntegerWidth {
    /// Number of bits of this width
    #[must_use]
    pub const fn bits(self) -> u32 {
        match self {
            IntegerWidth::W8 => 8,
            IntegerWidth::W16 => 16,
            IntegerWidth::W32 => 32,
            IntegerWidth::W64 => 64,
        }
    }

    /// Number of bytes a value of this width occupies in the buffer
    #[must_use]
    pub const fn bytes(self) -> usize {
        (self.bits() / 8) as usize
    }

    /// `2^bits`, the number of distinct bit patterns of this width
    #[must_use]
    pub const fn modulus(self) -> i128 {
        1_i128 << self.bits()
    }

    /// `2^bits - 1`, the largest raw pattern of this width
    #[must_use]
    pub const fn max_pattern(self) -> u64 {
        u64::MAX >> (64 - self.bits())
    }
}

impl TryFrom<u32> for IntegerWidth {
    type Error = Error;

    fn try_from(bits: u32) -> Result<Self> {
        match bits {
            8 => Ok(IntegerWidth::W8),
            16 => Ok(IntegerWidth::W16),
            32 => Ok(IntegerWidth::W32),
            64 => Ok(IntegerWidth::W64),
            _ => Err(Error::UnsupportedWidth(bits)),
        }
    }
}

/// Whether an accessor interprets stored patterns as two's-complement signed values or as plain
/// unsigned values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum Signedness {
    /// Two's-complement, domain `[-2^(w-1), 2^(w-1) - 1]`
    #[strum(to_string = "signed")]
    Signed,
    /// Plain binary, domain `[0, 2^w - 1]`
    #[strum(to_string = "unsigned")]
    Unsigned,
}

impl Signedness {
    /// Returns `true` for [`Signedness::Signed`]
    #[must_use]
    pub const fn is_signed(self) -> bool {
        matches!(self, Signedness::Signed)
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn sizes() {
        assert_eq!(IntegerWidth::COUNT, 4);

        for width in IntegerWidth::iter() {
            assert_eq!(width.bytes() * 8, width.bits() as usize);
            assert_eq!(i128::from(width.max_pattern()), width.modulus() - 1);
        }

        assert_eq!(IntegerWidth::W8.max_pattern(), 0xFF);
        assert_eq!(IntegerWidth::W16.max_pattern(), 0xFFFF);
        assert_eq!(IntegerWidth::W32.max_pattern(), 0xFFFF_FFFF);
        assert_eq!(IntegerWidth::W64.max_pattern(), u64::MAX);
    }

    #[test]
    fn try_from_bits() {
        for width in IntegerWidth::iter() {
            assert_eq!(IntegerWidth::try_from(width.bits()), Ok(width));
        }

        for bits in [0, 1, 7, 9, 12, 24, 48, 63, 65, 128] {
            assert_eq!(
                IntegerWidth::try_from(bits),
                Err(Error::UnsupportedWidth(bits))
            );
        }
    }

    #[test]
    fn display() {
        assert_eq!(IntegerWidth::W8.to_string(), "8-bit");
        assert_eq!(IntegerWidth::W64.to_string(), "64-bit");
        assert_eq!(Signedness::Signed.to_string(), "signed");
        assert!(!Signedness::Unsigned.is_signed());
    }
}
