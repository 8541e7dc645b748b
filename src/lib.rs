//! Fixed-capacity arbitrary-precision signed integers.
//!
//! [`BigInt`] keeps values that fit a machine word in a compact `i64` and
//! switches to a sign-magnitude block representation when they do not. The
//! magnitude capacity is fixed at compile time; results that would exceed it
//! are truncated to their low blocks, a documented data-loss policy that the
//! `checked_*` methods surface as errors instead.

use std::cmp::Ordering;

mod arith;
mod bitwise;
mod macros;
mod magnitude;
mod radix;

pub mod error;
pub mod random;

use magnitude::Magnitude;

/// Marker trait for types that convert losslessly into [`BigInt`], used to
/// define mixed-operand methods like `Add<T>`.
pub trait ToBigInt: Into<BigInt> {}

/// Sign of a value. Zero is always `NonNegative`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sign {
    NonNegative,
    Negative,
}

impl Sign {
    fn flip(self) -> Self {
        match self {
            Sign::NonNegative => Sign::Negative,
            Sign::Negative => Sign::NonNegative,
        }
    }

    /// Sign of a product or quotient: negative exactly when the operand
    /// signs differ.
    fn xor(self, other: Self) -> Self {
        if self == other {
            Sign::NonNegative
        } else {
            Sign::Negative
        }
    }

    fn is_negative(self) -> bool {
        matches!(self, Sign::Negative)
    }
}

/// Exactly one representation is authoritative at any instant.
#[derive(Clone, Copy)]
enum Repr {
    Compact(i64),
    Expanded(Sign, Magnitude),
}

/// Signed integer with a fixed maximum magnitude of 32768 bits.
///
/// Values in `i64` range are held in a compact machine word; larger values
/// use a sign plus little-endian 64-bit magnitude blocks. Every operation
/// re-compacts its result when it provably fits, so the two forms are never
/// both live.
///
/// # Examples
/// ```
/// use bigint::BigInt;
///
/// let a: BigInt = "123456789012345678901234567890".parse().unwrap();
/// let b = a * BigInt::from(2);
/// assert_eq!(b.to_string(), "246913578024691357802469135780");
///
/// assert_eq!(BigInt::from(5) + BigInt::from(-3), BigInt::from(2));
/// ```
#[derive(Clone, Copy)]
pub struct BigInt {
    repr: Repr,
}

impl BigInt {
    pub const ZERO: Self = Self {
        repr: Repr::Compact(0),
    };

    pub const ONE: Self = Self {
        repr: Repr::Compact(1),
    };

    /// Largest representable value: all magnitude bits set.
    pub const MAX: Self = Self {
        repr: Repr::Expanded(Sign::NonNegative, Magnitude::MAX),
    };

    pub const MIN: Self = Self {
        repr: Repr::Expanded(Sign::Negative, Magnitude::MAX),
    };

    /// Builds a non-negative value from little-endian 64-bit blocks. Blocks
    /// past the fixed capacity are discarded.
    pub fn from_blocks(blocks: &[u64]) -> Self {
        Self::from_parts(Sign::NonNegative, Magnitude::from_blocks(blocks))
    }

    pub fn is_zero(&self) -> bool {
        match &self.repr {
            Repr::Compact(v) => *v == 0,
            Repr::Expanded(_, mag) => mag.is_zero(),
        }
    }

    pub fn is_negative(&self) -> bool {
        match &self.repr {
            Repr::Compact(v) => *v < 0,
            Repr::Expanded(sign, _) => sign.is_negative(),
        }
    }

    /// The single construction funnel: clears the sign of zero, then
    /// compacts when the magnitude fits the machine word.
    fn from_parts(sign: Sign, mag: Magnitude) -> Self {
        let sign = if mag.is_zero() { Sign::NonNegative } else { sign };
        let mut out = Self {
            repr: Repr::Expanded(sign, mag),
        };
        out.try_compact();
        out
    }

    /// Rebuilds from a double-width intermediate, staying compact when the
    /// value is in `i64` range.
    fn from_i128(value: i128) -> Self {
        if let Ok(v) = i64::try_from(value) {
            Self {
                repr: Repr::Compact(v),
            }
        } else {
            let sign = if value < 0 {
                Sign::Negative
            } else {
                Sign::NonNegative
            };
            Self::from_parts(sign, Magnitude::from_u128(value.unsigned_abs()))
        }
    }

    /// Materializes the expanded form. Idempotent.
    fn expand(&mut self) {
        if let Repr::Compact(v) = self.repr {
            let sign = if v < 0 {
                Sign::Negative
            } else {
                Sign::NonNegative
            };
            self.repr = Repr::Expanded(sign, Magnitude::from_block(v.unsigned_abs()));
        }
    }

    /// Switches back to the compact form when the single remaining block is
    /// in `i64` range (`2^63` is allowed for negative values). Idempotent.
    fn try_compact(&mut self) {
        if let Repr::Expanded(sign, mag) = &self.repr {
            if mag.len() == 1 {
                let block = mag.block(0);
                let fits = match sign {
                    Sign::NonNegative => block <= i64::MAX as u64,
                    Sign::Negative => block <= 1 << 63,
                };
                if fits {
                    let value = match sign {
                        Sign::NonNegative => block as i64,
                        Sign::Negative => block.wrapping_neg() as i64,
                    };
                    self.repr = Repr::Compact(value);
                }
            }
        }
    }

    /// Sign and magnitude of the expanded form, leaving `self` untouched.
    fn expanded_parts(&self) -> (Sign, Magnitude) {
        let mut copy = *self;
        copy.expand();
        match copy.repr {
            Repr::Expanded(sign, mag) => (sign, mag),
            Repr::Compact(_) => unreachable!("expand always leaves the expanded form"),
        }
    }

    /// Number of blocks the expanded magnitude occupies.
    fn width(&self) -> usize {
        match &self.repr {
            Repr::Compact(_) => 1,
            Repr::Expanded(_, mag) => mag.len(),
        }
    }
}

impl From<i64> for BigInt {
    fn from(value: i64) -> Self {
        Self {
            repr: Repr::Compact(value),
        }
    }
}

impl From<i32> for BigInt {
    fn from(value: i32) -> Self {
        Self::from(value as i64)
    }
}

impl From<i16> for BigInt {
    fn from(value: i16) -> Self {
        Self::from(value as i64)
    }
}

impl From<i8> for BigInt {
    fn from(value: i8) -> Self {
        Self::from(value as i64)
    }
}

impl From<u64> for BigInt {
    fn from(value: u64) -> Self {
        if value <= i64::MAX as u64 {
            Self::from(value as i64)
        } else {
            Self::from_parts(Sign::NonNegative, Magnitude::from_block(value))
        }
    }
}

impl From<u32> for BigInt {
    fn from(value: u32) -> Self {
        Self::from(value as i64)
    }
}

impl From<u16> for BigInt {
    fn from(value: u16) -> Self {
        Self::from(value as i64)
    }
}

impl From<u8> for BigInt {
    fn from(value: u8) -> Self {
        Self::from(value as i64)
    }
}

impl ToBigInt for i64 {}
impl ToBigInt for i32 {}
impl ToBigInt for i16 {}
impl ToBigInt for i8 {}
impl ToBigInt for u64 {}
impl ToBigInt for u32 {}
impl ToBigInt for u16 {}
impl ToBigInt for u8 {}

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        if let (Repr::Compact(a), Repr::Compact(b)) = (&self.repr, &other.repr) {
            return a == b;
        }

        let (a_sign, a_mag) = self.expanded_parts();
        let (b_sign, b_mag) = other.expanded_parts();
        a_sign == b_sign && a_mag.compare_abs(&b_mag) == Ordering::Equal
    }
}

impl Eq for BigInt {}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        if let (Repr::Compact(a), Repr::Compact(b)) = (&self.repr, &other.repr) {
            return a.cmp(b);
        }

        let (a_sign, a_mag) = self.expanded_parts();
        let (b_sign, b_mag) = other.expanded_parts();

        match (a_sign, b_sign) {
            (Sign::NonNegative, Sign::Negative) => Ordering::Greater,
            (Sign::Negative, Sign::NonNegative) => Ordering::Less,
            (Sign::NonNegative, Sign::NonNegative) => a_mag.compare_abs(&b_mag),
            // Both negative: the larger magnitude is the smaller value
            (Sign::Negative, Sign::Negative) => b_mag.compare_abs(&a_mag),
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
