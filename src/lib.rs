// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # bytedatas
//!
//! A fixed-size mutable byte buffer with typed accessors for reading and writing signed and
//! unsigned integers of 8, 16, 32 and 64 bits at arbitrary byte offsets, plus helpers for copying
//! raw byte runs in and out.
//!
//! ## Features
//!
//! - **Typed accessors** - `write_uint8` .. `read_int64`, little-endian, at any offset
//! - **Inclusive domain checks** - out-of-range values are refused with `Ok(false)`, never stored
//! - **Two's-complement codec** - explicit conversion between signed values and stored patterns
//! - **Fixed length** - the buffer never grows or shrinks after construction
//! - **Memory safe** - every byte range is bounds checked before anything is written
//!
//! ## Quick Start
//!
//! ```rust
//! use bytedatas::ByteBuffer;
//!
//! let mut buffer = ByteBuffer::new(100);
//!
//! // Values inside the domain are stored least-significant byte first
//! assert!(buffer.write_int32(23, -3241)?);
//! assert_eq!(buffer.read_int32(23)?, -3241);
//!
//! // Values outside the domain are refused and leave the buffer untouched
//! assert!(!buffer.write_int8(9, -230)?);
//! assert_eq!(buffer.read_int8(9)?, 0);
//!
//! // Raw bytes, zero padded up to the requested length
//! buffer.write_bytes(60, b"bytes", 8)?;
//! assert_eq!(buffer.read_bytes(60, 8), b"bytes\0\0\0");
//! # Ok::<(), bytedatas::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`int`] - widths, value domains, the two's-complement [`int::codec`] and the [`BufferInt`] trait
//! - [`buffer`] - the [`ByteBuffer`] storage and the [`IntAccessor`] pipeline
//! - [`Error`] and [`Result`] - error handling
//!
//! ## Error Handling
//!
//! Two classes of failure are kept apart:
//!
//! - **Expected** - a value outside the accessor's domain. Writes return `Ok(false)` and the
//!   buffer is unchanged; callers branch on it as ordinary control flow.
//! - **Programming errors** - an unsupported width, an out of bounds seat, or a broken internal
//!   invariant. These are reported as [`Error`].
//!
//! ```rust
//! use bytedatas::{ByteBuffer, Error};
//!
//! let mut buffer = ByteBuffer::new(2);
//! match buffer.write_uint16(0, 70_000) {
//!     Ok(true) => println!("stored"),
//!     Ok(false) => println!("does not fit in 16 bits"),
//!     Err(Error::OutOfBounds) => println!("seat outside the buffer"),
//!     Err(e) => println!("Error: {}", e),
//! }
//! ```
//!
//! ## Logging
//!
//! Rejected writes and refused accessor widths are reported through [`tracing`] at `trace` and
//! `debug` level. No subscriber is installed by this crate.
//!
//! ## Thread Safety
//!
//! [`ByteBuffer`] is `Send` and `Sync` but has no interior locking. Sharing one buffer between
//! threads for writing requires external synchronisation, e.g. a `Mutex<ByteBuffer>`.

pub(crate) mod error;

/// Convenient re-exports of the most commonly used types and traits.
pub mod prelude;

/// Integer widths, value domains and two's-complement conversion.
///
/// # Key Types
///
/// - [`int::IntegerWidth`] - the closed set of widths 8/16/32/64
/// - [`int::Signedness`] - signed or unsigned interpretation
/// - [`int::ValueDomain`] - the inclusive range of legal values
/// - [`int::BufferInt`] - Rust primitives usable with the generic accessors
///
/// # Main Functions
///
/// - [`int::codec::encode`] - signed value to stored pattern
/// - [`int::codec::decode`] - stored pattern to signed value
pub mod int;

/// Fixed-length byte storage with typed integer accessors.
pub mod buffer;

/// `bytedatas` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `bytedatas` Error type
///
/// Only programming errors are reported through this type; see the crate level
/// "Error Handling" section.
pub use error::Error;

/// The fixed-length byte buffer.
///
/// See [`buffer::ByteBuffer`] for all accessors.
pub use buffer::{ByteBuffer, IntAccessor};

pub use int::{codec, BufferInt, IntegerWidth, Signedness, ValueDomain};
