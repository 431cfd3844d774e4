//! Integer widths, value domains and two's-complement conversion.
//!
//! This module holds everything an accessor needs to know about an integer before it touches the
//! buffer:
//!
//! - [`IntegerWidth`] and [`Signedness`] - the closed set of accessor shapes
//! - [`ValueDomain`] - the inclusive range of values legal for a shape
//! - [`codec`] - conversion between signed values and stored bit patterns
//! - [`BufferInt`] - maps Rust primitives onto a shape at compile time
//!
//! The byte-level store and load live in [`crate::buffer`].

pub mod codec;
mod domain;
mod width;

pub use domain::ValueDomain;
pub use width::{IntegerWidth, Signedness};

use crate::Result;

/// Trait for primitive integer types that can be read from and written to a
/// [`crate::ByteBuffer`].
///
/// Each implementation binds a Rust primitive to the width and signedness of its accessor, so
/// `read_int::<i32>` and `write_int::<i32>` resolve to the signed 32-bit pipeline without any
/// runtime dispatch.
///
/// Implemented for `u8`, `u16`, `u32`, `u64`, `i8`, `i16`, `i32` and `i64`.
pub trait BufferInt: Sized + Copy {
    /// Width of the stored representation
    const WIDTH: IntegerWidth;
    /// Interpretation of the stored representation
    const SIGNEDNESS: Signedness;

    /// Convert a decoded logical value into `Self`
    ///
    /// ## Arguments
    /// * 'value' - A value inside `ValueDomain::of(Self::WIDTH, Self::SIGNEDNESS)`
    ///
    /// # Errors
    /// Returns [`crate::Error::TryFromInt`] if `value` does not fit `Self`
    fn from_logical(value: i128) -> Result<Self>;
}

macro_rules! impl_buffer_int {
    ($($ty:ty => $width:ident, $signedness:ident;)*) => {
        $(
            impl BufferInt for $ty {
                const WIDTH: IntegerWidth = IntegerWidth::$width;
                const SIGNEDNESS: Signedness = Signedness::$signedness;

                fn from_logical(value: i128) -> Result<Self> {
                    Ok(<$ty>::try_from(value)?)
                }
            }
        )*
    };
}

impl_buffer_int! {
    u8 => W8, Unsigned;
    u16 => W16, Unsigned;
    u32 => W32, Unsigned;
    u64 => W64, Unsigned;
    i8 => W8, Signed;
    i16 => W16, Signed;
    i32 => W32, Signed;
    i64 => W64, Signed;
}
