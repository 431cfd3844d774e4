//! # bytedatas Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the bytedatas library.
//!
//! ```rust
//! use bytedatas::prelude::*;
//!
//! let mut buffer = ByteBuffer::new(4);
//! assert!(buffer.write_int::<i16>(0, -7)?);
//! # Ok::<(), Error>(())
//! ```

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all bytedatas operations
pub use crate::Error;

/// The result type used throughout bytedatas
pub use crate::Result;

// ================================================================================================
// Buffer and Accessors
// ================================================================================================

/// The fixed-length byte buffer
pub use crate::ByteBuffer;

/// Runtime-width integer accessor
pub use crate::IntAccessor;

// ================================================================================================
// Integer Model
// ================================================================================================

/// Width, signedness and domain of an accessor
pub use crate::{IntegerWidth, Signedness, ValueDomain};

/// Primitive types usable with `read_int` / `write_int`
pub use crate::BufferInt;
