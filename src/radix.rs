use std::{
    fmt::{self, Debug, Display, Formatter},
    str::FromStr,
};

use crate::{
    error::{BigIntError, BigIntErrorKind, BigIntResult},
    BigInt, Repr,
};

impl BigInt {
    /// Parses a digit string in the given base (2 to 36).
    ///
    /// Digits are `0`-`9` then case-insensitive `a`-`z`, optionally preceded
    /// by a single `+` or `-`. The value accumulates one digit at a time as
    /// `acc * base + digit`. Characters that are not digits of the base are
    /// rejected, and a string that reduces to zero never carries a negative
    /// sign.
    ///
    /// # Examples
    /// ```
    /// use bigint::BigInt;
    ///
    /// let v = BigInt::from_str_radix("-ff", 16).unwrap();
    /// assert_eq!(v, BigInt::from(-255));
    /// ```
    pub fn from_str_radix(input: &str, base: u32) -> BigIntResult<Self> {
        if !(2..=36).contains(&base) {
            return Err(BigIntError::new(
                BigIntErrorKind::UnsupportedBase,
                format!("base {} is outside the supported range 2-36", base),
            ));
        }

        let (negative, digits) = if let Some(rest) = input.strip_prefix('-') {
            (true, rest)
        } else if let Some(rest) = input.strip_prefix('+') {
            (false, rest)
        } else {
            (false, input)
        };

        if digits.is_empty() {
            return Err(BigIntError::new(
                BigIntErrorKind::EmptyInput,
                "no digits in input",
            ));
        }

        let base_big = Self::from(base as i64);
        let mut acc = Self::ZERO;

        for c in digits.chars() {
            let digit = match c {
                '0'..='9' => c as u32 - '0' as u32,
                'a'..='z' => c as u32 - 'a' as u32 + 10,
                'A'..='Z' => c as u32 - 'A' as u32 + 10,
                _ => {
                    return Err(BigIntError::new(
                        BigIntErrorKind::InvalidDigit,
                        format!("invalid digit {:?} for base {}", c, base),
                    ))
                }
            };
            if digit >= base {
                return Err(BigIntError::new(
                    BigIntErrorKind::InvalidDigit,
                    format!("digit {:?} is out of range for base {}", c, base),
                ));
            }

            acc = acc * base_big + Self::from(digit as i64);
        }

        Ok(if negative { -acc } else { acc })
    }
}

impl FromStr for BigInt {
    type Err = BigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_radix(s, 10)
    }
}

impl Display for BigInt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Compact(v) => write!(f, "{}", v),
            Repr::Expanded(sign, mag) => {
                // Peel decimal digits off the absolute value, least
                // significant first
                let mut mag = *mag;
                let mut digits = Vec::new();
                while !mag.is_zero() {
                    digits.push(mag.div_rem_small(10) as u8);
                }
                if digits.is_empty() {
                    digits.push(0);
                }

                let mut out = String::with_capacity(digits.len() + 1);
                if sign.is_negative() {
                    out.push('-');
                }
                for digit in digits.iter().rev() {
                    out.push((b'0' + digit) as char);
                }
                f.write_str(&out)
            }
        }
    }
}

// 512 raw blocks are useless in assertion output, so show the value
impl Debug for BigInt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "BigInt({})", self)
    }
}
