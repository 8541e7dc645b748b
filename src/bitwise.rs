//! Two's-complement emulation over the sign-magnitude store.
//!
//! The operators behave as if values were kept in infinite-width two's
//! complement: NOT of a non-negative value is negative, AND of two negative
//! values is negative, and so on. The conversion in and out of the fixed
//! width buffer is kept in one place so the sign tricks never leak into the
//! individual operators.

use std::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, ShlAssign, Shr,
    ShrAssign,
};

use crate::{
    error::{BigIntError, BigIntErrorKind, BigIntResult},
    magnitude::{Magnitude, MAX_BLOCKS},
    BigInt, Sign,
};

/// Every emulated operation needs at most one guard block past the
/// magnitude capacity to keep the sign bit unambiguous.
const TWOS_BLOCKS: usize = MAX_BLOCKS + 1;

/// Fixed-width two's-complement view of a value.
struct TwosBuf {
    blocks: [u64; TWOS_BLOCKS],
    len: usize,
}

impl TwosBuf {
    /// Encodes a value into `width` blocks: the absolute magnitude, bit
    /// inverted and incremented when the value is negative.
    fn encode(value: &BigInt, width: usize) -> Self {
        let (sign, mag) = value.expanded_parts();

        let mut blocks = [0u64; TWOS_BLOCKS];
        for (i, block) in blocks.iter_mut().enumerate().take(mag.len()) {
            *block = mag.block(i);
        }

        let mut buf = Self { blocks, len: width };
        if sign.is_negative() {
            buf.invert();
            buf.add_one();
        }
        buf
    }

    /// Decodes back into a value. The top bit of the top block carries the
    /// sign; negative buffers are decremented and inverted before the
    /// blocks are reinterpreted as a magnitude.
    fn decode(mut self) -> BigInt {
        let negative = self.blocks[self.len - 1] >> 63 != 0;
        if negative {
            self.sub_one();
            self.invert();
        }

        let sign = if negative {
            Sign::Negative
        } else {
            Sign::NonNegative
        };
        BigInt::from_parts(sign, Magnitude::from_blocks(&self.blocks[..self.len]))
    }

    fn invert(&mut self) {
        for block in &mut self.blocks[..self.len] {
            *block = !*block;
        }
    }

    fn add_one(&mut self) {
        for block in &mut self.blocks[..self.len] {
            let (sum, carry) = block.overflowing_add(1);
            *block = sum;
            if !carry {
                break;
            }
        }
    }

    fn sub_one(&mut self) {
        for block in &mut self.blocks[..self.len] {
            let (diff, borrow) = block.overflowing_sub(1);
            *block = diff;
            if !borrow {
                break;
            }
        }
    }
}

fn bit_op(lhs: BigInt, rhs: BigInt, op: impl Fn(u64, u64) -> u64) -> BigInt {
    let width = lhs.width().max(rhs.width()) + 1;
    let mut a = TwosBuf::encode(&lhs, width);
    let b = TwosBuf::encode(&rhs, width);

    for i in 0..width {
        a.blocks[i] = op(a.blocks[i], b.blocks[i]);
    }
    a.decode()
}

impl BigInt {
    fn shl_by(self, shift: u32) -> (Self, bool) {
        if self.is_zero() || shift == 0 {
            return (self, false);
        }
        let (sign, mag) = self.expanded_parts();
        let (shifted, truncated) = mag.shl(shift);
        (Self::from_parts(sign, shifted), truncated)
    }

    /// Logical shift on the magnitude with the sign reattached afterwards.
    /// This is not the arithmetic signed shift: `-7 >> 1` is `-3` and
    /// `-1 >> 1` is `0`.
    fn shr_by(self, shift: u32) -> Self {
        if self.is_zero() || shift == 0 {
            return self;
        }
        let (sign, mag) = self.expanded_parts();
        Self::from_parts(sign, mag.shr(shift))
    }

    /// Left shift that reports capacity overflow instead of truncating.
    pub fn checked_shl(self, shift: i32) -> BigIntResult<Self> {
        if shift < 0 {
            return Ok(self.shr_by(shift.unsigned_abs()));
        }
        match self.shl_by(shift as u32) {
            (out, false) => Ok(out),
            (_, true) => Err(BigIntError::new(
                BigIntErrorKind::CapacityOverflow,
                "left shift exceeds the magnitude capacity",
            )),
        }
    }
}

impl BitAnd for BigInt {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        bit_op(self, rhs, |a, b| a & b)
    }
}

impl BitOr for BigInt {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        bit_op(self, rhs, |a, b| a | b)
    }
}

impl BitXor for BigInt {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self::Output {
        bit_op(self, rhs, |a, b| a ^ b)
    }
}

impl Not for BigInt {
    type Output = Self;

    fn not(self) -> Self::Output {
        // One block wider than the operand so the inversion of a
        // non-negative value has room for its sign bit
        let width = self.width() + 1;
        let mut buf = TwosBuf::encode(&self, width);
        buf.invert();
        buf.decode()
    }
}

impl BitAndAssign for BigInt {
    fn bitand_assign(&mut self, rhs: Self) {
        *self = *self & rhs;
    }
}

impl BitOrAssign for BigInt {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}

impl BitXorAssign for BigInt {
    fn bitxor_assign(&mut self, rhs: Self) {
        *self = *self ^ rhs;
    }
}

impl Shl<i32> for BigInt {
    type Output = Self;

    /// A negative amount shifts right by the absolute amount.
    fn shl(self, shift: i32) -> Self::Output {
        if shift < 0 {
            self.shr_by(shift.unsigned_abs())
        } else {
            self.shl_by(shift as u32).0
        }
    }
}

impl Shr<i32> for BigInt {
    type Output = Self;

    /// A negative amount shifts left by the absolute amount.
    fn shr(self, shift: i32) -> Self::Output {
        if shift < 0 {
            self.shl_by(shift.unsigned_abs()).0
        } else {
            self.shr_by(shift as u32)
        }
    }
}

impl ShlAssign<i32> for BigInt {
    fn shl_assign(&mut self, shift: i32) {
        *self = *self << shift;
    }
}

impl ShrAssign<i32> for BigInt {
    fn shr_assign(&mut self, shift: i32) {
        *self = *self >> shift;
    }
}
