//! Fixed-length byte storage with typed integer accessors.
//!
//! [`ByteBuffer`] owns a contiguous run of bytes whose length is fixed at construction. It exposes
//! eight named accessor pairs, one per width and signedness:
//!
//! | Width | Unsigned                         | Signed                         |
//! |-------|----------------------------------|--------------------------------|
//! | 8     | `write_uint8` / `read_uint8`     | `write_int8` / `read_int8`     |
//! | 16    | `write_uint16` / `read_uint16`   | `write_int16` / `read_int16`   |
//! | 32    | `write_uint32` / `read_uint32`   | `write_int32` / `read_int32`   |
//! | 64    | `write_uint64` / `read_uint64`   | `write_int64` / `read_int64`   |
//!
//! plus the generic [`ByteBuffer::write_int`] / [`ByteBuffer::read_int`] and the raw
//! [`ByteBuffer::write_bytes`] / [`ByteBuffer::read_bytes`] helpers.
//!
//! # Failure model
//!
//! Writes return `Result<bool>`:
//! - `Ok(true)` - every byte of the value was stored
//! - `Ok(false)` - the value is outside the accessor's domain, nothing was stored
//! - `Err(_)` - a programming error such as an out of bounds seat, nothing was stored
//!
//! # Examples
//!
//! ```rust
//! use bytedatas::ByteBuffer;
//!
//! let mut buffer = ByteBuffer::new(100);
//!
//! buffer[2] = 124;
//! assert_eq!(buffer.read_uint8(2)?, 124);
//!
//! assert!(buffer.write_int32(19, 3241)?);
//! assert_eq!(buffer.read_int32(19)?, 3241);
//!
//! assert!(!buffer.write_uint8(40, 258)?);
//! assert_eq!(buffer.read_uint8(40)?, 0);
//! # Ok::<(), bytedatas::Error>(())
//! ```

mod accessor;

pub use accessor::IntAccessor;

use std::ops::{Index, IndexMut};

use crate::{int::BufferInt, Error::OutOfBounds, Result};

/// An owned, fixed-length byte buffer.
///
/// The length is set at construction and never changes. All mutation happens in place through
/// the typed accessors, [`ByteBuffer::write_bytes`], indexing or [`ByteBuffer::as_mut_slice`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ByteBuffer {
    data: Box<[u8]>,
}

macro_rules! int_accessors {
    ($($ty:ty => $write:ident, $read:ident;)*) => {
        $(
            #[doc = concat!("Write `value` as a `", stringify!($ty), "` at `seat`, least-significant byte first.")]
            ///
            /// Returns `Ok(false)` and leaves the buffer untouched if `value` is outside the
            /// type's range.
            ///
            /// # Errors
            /// Returns [`crate::Error::OutOfBounds`] if the value does not fit at `seat`
            pub fn $write(&mut self, seat: usize, value: i128) -> Result<bool> {
                self.write_int::<$ty>(seat, value)
            }

            #[doc = concat!("Read the `", stringify!($ty), "` stored at `seat`.")]
            ///
            /// # Errors
            /// Returns [`crate::Error::OutOfBounds`] if the value does not fit at `seat`
            pub fn $read(&self, seat: usize) -> Result<$ty> {
                self.read_int::<$ty>(seat)
            }
        )*
    };
}

impl ByteBuffer {
    /// Create a zero-filled buffer
    ///
    /// ## Arguments
    /// * 'len' - The fixed length of the buffer in bytes
    #[must_use]
    pub fn new(len: usize) -> ByteBuffer {
        ByteBuffer {
            data: vec![0; len].into_boxed_slice(),
        }
    }

    /// Returns the length of the buffer in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the buffer has a length of 0
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the whole buffer as a slice
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Returns the whole buffer as a mutable slice; the length can not be changed through it
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Returns the byte at `seat`, or `None` if `seat` is past the end
    #[must_use]
    pub fn get(&self, seat: usize) -> Option<u8> {
        self.data.get(seat).copied()
    }

    /// Consume the buffer, returning its bytes
    #[must_use]
    pub fn into_inner(self) -> Vec<u8> {
        self.data.into_vec()
    }

    /// Write `value` as a `T` at `seat`
    ///
    /// ## Arguments
    /// * 'seat'  - Offset of the least-significant byte
    /// * 'value' - The logical value to store
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if the value does not fit at `seat`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bytedatas::ByteBuffer;
    ///
    /// let mut buffer = ByteBuffer::new(8);
    /// assert!(buffer.write_int::<u64>(0, u64::MAX.into())?);
    /// assert!(!buffer.write_int::<u64>(0, -1)?);
    /// assert_eq!(buffer.read_int::<i64>(0)?, -1);
    /// # Ok::<(), bytedatas::Error>(())
    /// ```
    pub fn write_int<T: BufferInt>(&mut self, seat: usize, value: i128) -> Result<bool> {
        IntAccessor::of(T::WIDTH, T::SIGNEDNESS).write(self, seat, value)
    }

    /// Read the `T` stored at `seat`
    ///
    /// ## Arguments
    /// * 'seat' - Offset of the least-significant byte
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if the value does not fit at `seat`
    pub fn read_int<T: BufferInt>(&self, seat: usize) -> Result<T> {
        let value = IntAccessor::of(T::WIDTH, T::SIGNEDNESS).read(self, seat)?;
        T::from_logical(value)
    }

    int_accessors! {
        u8 => write_uint8, read_uint8;
        u16 => write_uint16, read_uint16;
        u32 => write_uint32, read_uint32;
        u64 => write_uint64, read_uint64;
        i8 => write_int8, read_int8;
        i16 => write_int16, read_int16;
        i32 => write_int32, read_int32;
        i64 => write_int64, read_int64;
    }

    /// Copy up to `length` bytes of `data` to `seat`, zero-filling the rest of the `length` range
    ///
    /// Returns the number of bytes taken from `data`, which is `min(data.len(), length)`.
    ///
    /// Only byte sequences are accepted; text has to be converted explicitly:
    ///
    /// ```rust,compile_fail
    /// use bytedatas::ByteBuffer;
    ///
    /// let mut buffer = ByteBuffer::new(100);
    /// buffer.write_bytes(90, "it is failed", 9);
    /// ```
    ///
    /// ## Arguments
    /// * 'seat'   - Offset of the first byte
    /// * 'data'   - The bytes to copy
    /// * 'length' - Number of buffer bytes to fill
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if `seat .. seat + length` is not inside the buffer, in
    /// which case nothing is written.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bytedatas::ByteBuffer;
    ///
    /// let mut buffer = ByteBuffer::from(vec![0xFF; 8]);
    /// assert_eq!(buffer.write_bytes(1, b"abc", 5)?, 3);
    /// assert_eq!(buffer.as_slice(), &[0xFF, b'a', b'b', b'c', 0, 0, 0xFF, 0xFF]);
    /// # Ok::<(), bytedatas::Error>(())
    /// ```
    pub fn write_bytes(&mut self, seat: usize, data: &[u8], length: usize) -> Result<usize> {
        let slots = self.slots_mut(seat, length)?;
        let copied = data.len().min(length);

        let (head, tail) = slots.split_at_mut(copied);
        head.copy_from_slice(&data[..copied]);
        tail.fill(0);

        Ok(copied)
    }

    /// Returns up to `length` bytes starting at `seat`
    ///
    /// The result is truncated at the end of the buffer, and is empty if `seat` is at or past the
    /// end.
    ///
    /// ## Arguments
    /// * 'seat'   - Offset of the first byte
    /// * 'length' - Maximum number of bytes to return
    #[must_use]
    pub fn read_bytes(&self, seat: usize, length: usize) -> &[u8] {
        let start = seat.min(self.data.len());
        let end = seat.saturating_add(length).min(self.data.len());

        &self.data[start..end]
    }

    /// Returns `len` bytes at `seat`, or [`crate::Error::OutOfBounds`]
    pub(crate) fn slots(&self, seat: usize, len: usize) -> Result<&[u8]> {
        let Some(seat_end) = seat.checked_add(len) else {
            return Err(OutOfBounds);
        };

        self.data.get(seat..seat_end).ok_or(OutOfBounds)
    }

    /// Returns `len` mutable bytes at `seat`, or [`crate::Error::OutOfBounds`]
    pub(crate) fn slots_mut(&mut self, seat: usize, len: usize) -> Result<&mut [u8]> {
        let Some(seat_end) = seat.checked_add(len) else {
            return Err(OutOfBounds);
        };

        self.data.get_mut(seat..seat_end).ok_or(OutOfBounds)
    }
}

impl From<Vec<u8>> for ByteBuffer {
    fn from(data: Vec<u8>) -> Self {
        ByteBuffer {
            data: data.into_boxed_slice(),
        }
    }
}

impl From<&[u8]> for ByteBuffer {
    fn from(data: &[u8]) -> Self {
        ByteBuffer { data: data.into() }
    }
}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl Index<usize> for ByteBuffer {
    type Output = u8;

    fn index(&self, seat: usize) -> &u8 {
        &self.data[seat]
    }
}

impl IndexMut<usize> for ByteBuffer {
    fn index_mut(&mut self, seat: usize) -> &mut u8 {
        &mut self.data[seat]
    }
}
