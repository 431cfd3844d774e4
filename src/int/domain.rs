//! Legal value ranges for each width and signedness.

use super::{IntegerWidth, Signedness};

/// The inclusive `[min, max]` range of logical values an accessor accepts.
///
/// A domain is derived from its width and signedness and never stored alongside the data:
///
/// - unsigned: `[0, 2^w - 1]`
/// - signed: `[-2^(w-1), 2^(w-1) - 1]`
///
/// Both bounds are inclusive. For example the signed 32-bit domain accepts `2^31 - 1` and rejects
/// `2^31`.
///
/// # Examples
///
/// ```rust
/// use bytedatas::{IntegerWidth, Signedness, ValueDomain};
///
/// let domain = ValueDomain::of(IntegerWidth::W8, Signedness::Signed);
/// assert_eq!((domain.min(), domain.max()), (-128, 127));
/// assert!(domain.contains(-128));
/// assert!(!domain.contains(128));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValueDomain {
    min: i128,
    max: i128,
}

impl ValueDomain {
    /// Derive the domain for `width` and `signedness`
    #[must_use]
    pub const fn of(width: IntegerWidth, signedness: Signedness) -> Self {
        let modulus = width.modulus();
        match signedness {
            Signedness::Unsigned => ValueDomain {
                min: 0,
                max: modulus - 1,
            },
            Signedness::Signed => ValueDomain {
                min: -(modulus / 2),
                max: modulus / 2 - 1,
            },
        }
    }

    /// Smallest legal value
    #[must_use]
    pub const fn min(&self) -> i128 {
        self.min
    }

    /// Largest legal value
    #[must_use]
    pub const fn max(&self) -> i128 {
        self.max
    }

    /// Check whether `value` lies within `[min, max]`
    #[must_use]
    pub const fn contains(&self, value: i128) -> bool {
        self.min <= value && value <= self.max
    }
}
