use std::{
    cmp::Ordering,
    iter::{Product, Sum},
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign},
};

use crate::{
    bigint_math_impl,
    error::{BigIntError, BigIntErrorKind, BigIntResult},
    BigInt, Repr, ToBigInt,
};

impl BigInt {
    /// Signed addition. The flag reports a carry lost past capacity.
    fn add_impl(self, rhs: Self) -> (Self, bool) {
        if let (Repr::Compact(a), Repr::Compact(b)) = (&self.repr, &rhs.repr) {
            return (Self::from_i128(*a as i128 + *b as i128), false);
        }

        let (a_sign, a_mag) = self.expanded_parts();
        let (b_sign, b_mag) = rhs.expanded_parts();

        if a_sign == b_sign {
            let (mag, overflow) = a_mag.add_abs(&b_mag);
            (Self::from_parts(a_sign, mag), overflow)
        } else {
            // Differing signs subtract the smaller magnitude from the larger
            // and take the larger operand's sign; ties are zero
            match a_mag.compare_abs(&b_mag) {
                Ordering::Greater => (Self::from_parts(a_sign, a_mag.sub_abs(&b_mag)), false),
                Ordering::Less => (Self::from_parts(b_sign, b_mag.sub_abs(&a_mag)), false),
                Ordering::Equal => (Self::ZERO, false),
            }
        }
    }

    fn mul_impl(self, rhs: Self) -> (Self, bool) {
        if let (Repr::Compact(a), Repr::Compact(b)) = (&self.repr, &rhs.repr) {
            return (Self::from_i128(*a as i128 * *b as i128), false);
        }

        let (a_sign, a_mag) = self.expanded_parts();
        let (b_sign, b_mag) = rhs.expanded_parts();
        let (mag, truncated) = a_mag.mul_abs(&b_mag);
        (Self::from_parts(a_sign.xor(b_sign), mag), truncated)
    }

    /// Quotient and remainder in one pass. Callers must rule out a zero
    /// divisor first.
    fn div_rem_impl(self, rhs: Self) -> (Self, Self) {
        if let (Repr::Compact(a), Repr::Compact(b)) = (&self.repr, &rhs.repr) {
            return (
                Self::from_i128(*a as i128 / *b as i128),
                Self::from_i128(*a as i128 % *b as i128),
            );
        }

        let (a_sign, a_mag) = self.expanded_parts();
        let (b_sign, b_mag) = rhs.expanded_parts();
        let (q_mag, r_mag) = a_mag.div_rem_abs(&b_mag);

        // Quotient sign is the XOR of the operand signs; the remainder
        // keeps the dividend's sign. Zero results drop the sign in
        // from_parts.
        (
            Self::from_parts(a_sign.xor(b_sign), q_mag),
            Self::from_parts(a_sign, r_mag),
        )
    }

    /// Addition that reports capacity overflow instead of truncating.
    pub fn checked_add(self, rhs: Self) -> BigIntResult<Self> {
        match self.add_impl(rhs) {
            (sum, false) => Ok(sum),
            (_, true) => Err(BigIntError::new(
                BigIntErrorKind::CapacityOverflow,
                "addition exceeds the magnitude capacity",
            )),
        }
    }

    pub fn checked_sub(self, rhs: Self) -> BigIntResult<Self> {
        self.checked_add(-rhs)
    }

    /// Multiplication that reports capacity overflow instead of truncating.
    pub fn checked_mul(self, rhs: Self) -> BigIntResult<Self> {
        match self.mul_impl(rhs) {
            (product, false) => Ok(product),
            (_, true) => Err(BigIntError::new(
                BigIntErrorKind::CapacityOverflow,
                "product exceeds the magnitude capacity",
            )),
        }
    }

    /// Division that reports a zero divisor instead of panicking.
    pub fn checked_div(self, rhs: Self) -> BigIntResult<Self> {
        if rhs.is_zero() {
            return Err(BigIntError::new(
                BigIntErrorKind::DivisionByZero,
                "division by zero",
            ));
        }
        Ok(self.div_rem_impl(rhs).0)
    }

    pub fn checked_rem(self, rhs: Self) -> BigIntResult<Self> {
        if rhs.is_zero() {
            return Err(BigIntError::new(
                BigIntErrorKind::DivisionByZero,
                "remainder by zero",
            ));
        }
        Ok(self.div_rem_impl(rhs).1)
    }

    /// Pre-increment: adds one and returns the updated value.
    pub fn inc(&mut self) -> Self {
        *self = *self + Self::ONE;
        *self
    }

    /// Post-increment: adds one and returns the value held before.
    pub fn inc_post(&mut self) -> Self {
        let prev = *self;
        *self = *self + Self::ONE;
        prev
    }

    /// Pre-decrement: subtracts one and returns the updated value.
    pub fn dec(&mut self) -> Self {
        *self = *self - Self::ONE;
        *self
    }

    /// Post-decrement: subtracts one and returns the value held before.
    pub fn dec_post(&mut self) -> Self {
        let prev = *self;
        *self = *self - Self::ONE;
        prev
    }
}

impl Add for BigInt {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.add_impl(rhs).0
    }
}

impl Sub for BigInt {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + -rhs
    }
}

impl Mul for BigInt {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.mul_impl(rhs).0
    }
}

impl Div for BigInt {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        if rhs.is_zero() {
            panic!("Attempt to divide BigInt by zero")
        }
        self.div_rem_impl(rhs).0
    }
}

impl Rem for BigInt {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self::Output {
        if rhs.is_zero() {
            panic!("Attempt to take remainder of BigInt by zero")
        }
        self.div_rem_impl(rhs).1
    }
}

impl Neg for BigInt {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self.repr {
            // The compact minimum has no compact negation; its magnitude
            // 2^63 moves to the expanded form below
            Repr::Compact(v) if v != i64::MIN => Self {
                repr: Repr::Compact(-v),
            },
            _ => {
                let (sign, mag) = self.expanded_parts();
                Self::from_parts(sign.flip(), mag)
            }
        }
    }
}

impl AddAssign for BigInt {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for BigInt {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for BigInt {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl DivAssign for BigInt {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl RemAssign for BigInt {
    fn rem_assign(&mut self, rhs: Self) {
        *self = *self % rhs;
    }
}

impl<T> Add<T> for BigInt
where
    T: ToBigInt,
{
    type Output = Self;

    fn add(self, rhs: T) -> Self::Output {
        self + rhs.into()
    }
}

impl<T> AddAssign<T> for BigInt
where
    T: ToBigInt,
{
    fn add_assign(&mut self, rhs: T) {
        *self = *self + rhs.into();
    }
}

impl<T> Sub<T> for BigInt
where
    T: ToBigInt,
{
    type Output = Self;

    fn sub(self, rhs: T) -> Self::Output {
        self - rhs.into()
    }
}

impl<T> SubAssign<T> for BigInt
where
    T: ToBigInt,
{
    fn sub_assign(&mut self, rhs: T) {
        *self = *self - rhs.into();
    }
}

impl<T> Mul<T> for BigInt
where
    T: ToBigInt,
{
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        self * rhs.into()
    }
}

impl<T> MulAssign<T> for BigInt
where
    T: ToBigInt,
{
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs.into();
    }
}

impl<T> Div<T> for BigInt
where
    T: ToBigInt,
{
    type Output = Self;

    fn div(self, rhs: T) -> Self::Output {
        self / rhs.into()
    }
}

impl<T> DivAssign<T> for BigInt
where
    T: ToBigInt,
{
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs.into();
    }
}

impl<T> Rem<T> for BigInt
where
    T: ToBigInt,
{
    type Output = Self;

    fn rem(self, rhs: T) -> Self::Output {
        self % rhs.into()
    }
}

impl<T> RemAssign<T> for BigInt
where
    T: ToBigInt,
{
    fn rem_assign(&mut self, rhs: T) {
        *self = *self % rhs.into();
    }
}

impl Sum for BigInt {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(BigInt::ZERO, |acc, x| acc + x)
    }
}

impl Product for BigInt {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(BigInt::ONE, |acc, x| acc * x)
    }
}

bigint_math_impl!(i64);
bigint_math_impl!(i32);
bigint_math_impl!(i16);
bigint_math_impl!(i8);
bigint_math_impl!(u64);
bigint_math_impl!(u32);
bigint_math_impl!(u16);
bigint_math_impl!(u8);

#[cfg(test)]
mod tests {
    use crate::error::{BigIntErrorKind, BigIntTestResult};

    use super::*;

    #[test]
    fn add_sign_matrix() {
        assert_eq!(BigInt::from(5) + BigInt::from(-3), BigInt::from(2));
        assert_eq!(BigInt::from(-5) + BigInt::from(3), BigInt::from(-2));
        assert_eq!(BigInt::from(-5) + BigInt::from(-3), BigInt::from(-8));
        assert_eq!(BigInt::from(5) + BigInt::from(3), BigInt::from(8));
        assert_eq!(BigInt::from(5) + BigInt::from(-5), BigInt::ZERO);
    }

    #[test]
    fn sub_is_add_of_negation() {
        assert_eq!(BigInt::from(5) - BigInt::from(3), BigInt::from(2));
        assert_eq!(BigInt::from(3) - BigInt::from(5), BigInt::from(-2));
        assert_eq!(BigInt::from(-3) - BigInt::from(-5), BigInt::from(2));
        assert_eq!(BigInt::ZERO - BigInt::ZERO, BigInt::ZERO);
    }

    #[test]
    fn add_carries_past_the_machine_word() {
        let max = BigInt::from(i64::MAX);
        let sum = max + BigInt::ONE;
        assert_eq!(sum.to_string(), "9223372036854775808");
        assert_eq!(sum - BigInt::ONE, max);
    }

    #[test]
    fn negating_the_compact_minimum_expands() {
        let min = BigInt::from(i64::MIN);
        let flipped = -min;

        assert!(matches!(flipped.repr, Repr::Expanded(..)));
        assert_eq!(flipped.to_string(), "9223372036854775808");
        assert_eq!(-flipped, min);
        assert_eq!(min - min, BigInt::ZERO);
    }

    #[test]
    fn mul_signs_and_magnitude() -> BigIntTestResult {
        assert_eq!(BigInt::from(6) * BigInt::from(7), BigInt::from(42));
        assert_eq!(BigInt::from(-6) * BigInt::from(7), BigInt::from(-42));
        assert_eq!(BigInt::from(-6) * BigInt::from(-7), BigInt::from(42));
        assert!(!(BigInt::from(-6) * BigInt::ZERO).is_negative());

        let a: BigInt = "123456789012345678901234567890".parse()?;
        assert_eq!(
            (a * BigInt::from(2)).to_string(),
            "246913578024691357802469135780"
        );

        Ok(())
    }

    #[test]
    fn division_undoes_multiplication() -> BigIntTestResult {
        let a: BigInt = "123456789012345678901234567890".parse()?;
        let b = BigInt::from(997);
        let product = a * b;

        assert_eq!(product / a, b);
        assert_eq!(product % a, BigInt::ZERO);
        assert_eq!(-product / a, -b);

        Ok(())
    }

    #[test]
    fn quotient_and_remainder_signs() {
        assert_eq!(BigInt::from(7) / BigInt::from(3), BigInt::from(2));
        assert_eq!(BigInt::from(7) % BigInt::from(3), BigInt::from(1));
        assert_eq!(BigInt::from(7) / BigInt::from(-3), BigInt::from(-2));
        assert_eq!(BigInt::from(7) % BigInt::from(-3), BigInt::from(1));
        assert_eq!(BigInt::from(-7) / BigInt::from(3), BigInt::from(-2));
        assert_eq!(BigInt::from(-7) % BigInt::from(3), BigInt::from(-1));
        assert_eq!(BigInt::from(-7) / BigInt::from(-3), BigInt::from(2));
        assert_eq!(BigInt::from(-7) % BigInt::from(-3), BigInt::from(-1));
        assert!(!(BigInt::from(6) % BigInt::from(-3)).is_negative());
    }

    #[should_panic(expected = "Attempt to divide BigInt by zero")]
    #[test]
    fn div_zero_panics() {
        let _ = BigInt::from(5) / BigInt::ZERO;
    }

    #[should_panic(expected = "Attempt to take remainder of BigInt by zero")]
    #[test]
    fn rem_zero_panics() {
        let _ = BigInt::from(5) % BigInt::ZERO;
    }

    #[test]
    fn checked_division_reports_zero_divisor() {
        let err = BigInt::from(5).checked_div(BigInt::ZERO).unwrap_err();
        assert_eq!(err.kind(), BigIntErrorKind::DivisionByZero);

        let err = BigInt::from(5).checked_rem(BigInt::ZERO).unwrap_err();
        assert_eq!(err.kind(), BigIntErrorKind::DivisionByZero);

        assert_eq!(
            BigInt::from(7).checked_div(BigInt::from(2)).unwrap(),
            BigInt::from(3)
        );
    }

    #[test]
    fn operators_truncate_at_capacity() {
        // All overflow blocks of MAX + 1 are discarded, leaving the kept
        // low blocks at zero
        assert_eq!(BigInt::MAX + BigInt::ONE, BigInt::ZERO);
        assert_eq!(BigInt::MAX * BigInt::from(2), BigInt::MAX - BigInt::ONE);
    }

    #[test]
    fn checked_ops_report_capacity_overflow() {
        let err = BigInt::MAX.checked_add(BigInt::ONE).unwrap_err();
        assert_eq!(err.kind(), BigIntErrorKind::CapacityOverflow);

        let err = BigInt::MAX.checked_mul(BigInt::from(2)).unwrap_err();
        assert_eq!(err.kind(), BigIntErrorKind::CapacityOverflow);

        let err = BigInt::MIN.checked_sub(BigInt::ONE).unwrap_err();
        assert_eq!(err.kind(), BigIntErrorKind::CapacityOverflow);

        assert_eq!(
            BigInt::from(2).checked_mul(BigInt::from(3)).unwrap(),
            BigInt::from(6)
        );
    }

    #[test]
    fn increment_and_decrement() {
        let mut x = BigInt::from(41);

        assert_eq!(x.inc(), BigInt::from(42));
        assert_eq!(x, BigInt::from(42));
        assert_eq!(x.inc_post(), BigInt::from(42));
        assert_eq!(x, BigInt::from(43));

        assert_eq!(x.dec(), BigInt::from(42));
        assert_eq!(x.dec_post(), BigInt::from(42));
        assert_eq!(x, BigInt::from(41));

        let mut z = BigInt::ZERO;
        assert_eq!(z.dec(), BigInt::from(-1));
        assert_eq!(z.inc(), BigInt::ZERO);
        assert!(!z.is_negative());
    }

    #[test]
    fn compound_assignment() {
        let mut x = BigInt::from(10);
        x += BigInt::from(5);
        assert_eq!(x, BigInt::from(15));
        x -= BigInt::from(20);
        assert_eq!(x, BigInt::from(-5));
        x *= BigInt::from(-3);
        assert_eq!(x, BigInt::from(15));
        x /= BigInt::from(4);
        assert_eq!(x, BigInt::from(3));
        x %= BigInt::from(2);
        assert_eq!(x, BigInt::from(1));
    }

    #[test]
    fn mixed_operand_arithmetic() {
        assert_eq!(BigInt::from(5) + 3i64, BigInt::from(8));
        assert_eq!(3i64 + BigInt::from(5), BigInt::from(8));
        assert_eq!(10u32 - BigInt::from(4), BigInt::from(6));
        assert_eq!(BigInt::from(6) * 7u8, BigInt::from(42));
        assert_eq!(100i16 / BigInt::from(7), BigInt::from(14));

        let mut x = BigInt::from(1);
        x += 9i32;
        x *= 2u16;
        assert_eq!(x, BigInt::from(20));
    }

    #[test]
    fn sum_and_product() {
        let values = [1i64, 2, 3, 4].map(BigInt::from);

        assert_eq!(values.into_iter().sum::<BigInt>(), BigInt::from(10));
        assert_eq!(values.into_iter().product::<BigInt>(), BigInt::from(24));
        assert_eq!(std::iter::empty::<BigInt>().sum::<BigInt>(), BigInt::ZERO);
        assert_eq!(
            std::iter::empty::<BigInt>().product::<BigInt>(),
            BigInt::ONE
        );
    }
}
