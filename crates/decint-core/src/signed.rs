//! The signed integer collaborator.
//!
//! A sign flag over a [`DecUint`] magnitude. Quotients truncate toward
//! zero and the remainder's sign follows the dividend, the C convention.
//! Zero is always positive, so no negative zero is observable.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};
use std::str::FromStr;

use crate::error::{ConvertError, ParseDecimalError};
use crate::DecUint;

/// Arbitrary-precision signed decimal integer.
///
/// # Example
/// ```
/// use decint_core::DecInt;
///
/// let a: DecInt = "-7".parse().unwrap();
/// let b = DecInt::from(2);
/// assert_eq!((&a / &b).to_decimal(), "-3");
/// assert_eq!((&a % &b).to_decimal(), "-1");
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct DecInt {
    negative: bool,
    magnitude: DecUint,
}

impl DecInt {
    /// The value zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            negative: false,
            magnitude: DecUint::new(),
        }
    }

    fn make(negative: bool, magnitude: DecUint) -> Self {
        Self {
            negative: negative && !magnitude.is_zero(),
            magnitude,
        }
    }

    /// Parse a decimal string with an optional leading `+` or `-`.
    pub fn from_decimal(s: &str) -> Result<Self, ParseDecimalError> {
        let (negative, rest) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        if rest.is_empty() {
            return Err(ParseDecimalError::Empty);
        }
        let magnitude = DecUint::from_decimal(rest).map_err(|e| match e {
            // Offsets are reported against the original input.
            ParseDecimalError::InvalidDigit { position } if rest.len() < s.len() => {
                ParseDecimalError::InvalidDigit {
                    position: position + 1,
                }
            }
            other => other,
        })?;
        Ok(Self::make(negative, magnitude))
    }

    /// Canonical decimal form; no `+` sign, `-` for negative values.
    #[must_use]
    pub fn to_decimal(&self) -> String {
        let mut out = String::new();
        if self.negative {
            out.push('-');
        }
        out.push_str(&self.magnitude.to_decimal());
        out
    }

    /// Whether the value is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    /// Whether the value is strictly negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// The magnitude as an unsigned integer.
    #[must_use]
    pub fn abs(&self) -> DecUint {
        self.magnitude.clone()
    }

    /// Truncated quotient and remainder: `self = q·rhs + r` with `|r| < |rhs|`
    /// and `r` carrying the dividend's sign.
    ///
    /// # Panics
    /// Panics if `rhs` is zero.
    #[must_use]
    pub fn divmod(&self, rhs: &Self) -> (Self, Self) {
        let (q, r) = self.magnitude.divmod(&rhs.magnitude);
        (
            Self::make(self.negative != rhs.negative, q),
            Self::make(self.negative, r),
        )
    }
}

impl From<DecUint> for DecInt {
    fn from(magnitude: DecUint) -> Self {
        Self::make(false, magnitude)
    }
}

impl From<i64> for DecInt {
    fn from(v: i64) -> Self {
        Self::make(v < 0, DecUint::from(v.unsigned_abs()))
    }
}

impl From<i32> for DecInt {
    fn from(v: i32) -> Self {
        Self::from(i64::from(v))
    }
}

impl From<i128> for DecInt {
    fn from(v: i128) -> Self {
        Self::make(v < 0, DecUint::from(v.unsigned_abs()))
    }
}

impl From<u64> for DecInt {
    fn from(v: u64) -> Self {
        Self::make(false, DecUint::from(v))
    }
}

impl TryFrom<&DecInt> for i64 {
    type Error = ConvertError;

    fn try_from(v: &DecInt) -> Result<Self, ConvertError> {
        let mag = v.magnitude.to_u64().ok_or(ConvertError::OutOfRange)?;
        if v.negative {
            if mag > i64::MIN.unsigned_abs() {
                return Err(ConvertError::OutOfRange);
            }
            Ok((mag as i64).wrapping_neg())
        } else {
            i64::try_from(mag).map_err(|_| ConvertError::OutOfRange)
        }
    }
}

impl FromStr for DecInt {
    type Err = ParseDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_decimal(s)
    }
}

impl fmt::Display for DecInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.magnitude.to_decimal();
        f.pad_integral(!self.negative, "", &s)
    }
}

impl fmt::Debug for DecInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl Ord for DecInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.magnitude.cmp(&other.magnitude),
            (true, true) => other.magnitude.cmp(&self.magnitude),
        }
    }
}

impl PartialOrd for DecInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Neg for &DecInt {
    type Output = DecInt;

    fn neg(self) -> DecInt {
        DecInt::make(!self.negative, self.magnitude.clone())
    }
}

impl Neg for DecInt {
    type Output = DecInt;

    fn neg(self) -> DecInt {
        DecInt::make(!self.negative, self.magnitude)
    }
}

fn signed_add(a: &DecInt, b: &DecInt) -> DecInt {
    if a.negative == b.negative {
        return DecInt::make(a.negative, &a.magnitude + &b.magnitude);
    }
    match a.magnitude.cmp(&b.magnitude) {
        Ordering::Equal => DecInt::new(),
        Ordering::Greater => DecInt::make(a.negative, &a.magnitude - &b.magnitude),
        Ordering::Less => DecInt::make(b.negative, &b.magnitude - &a.magnitude),
    }
}

fn signed_sub(a: &DecInt, b: &DecInt) -> DecInt {
    signed_add(a, &-b)
}

fn signed_mul(a: &DecInt, b: &DecInt) -> DecInt {
    DecInt::make(a.negative != b.negative, &a.magnitude * &b.magnitude)
}

fn signed_div(a: &DecInt, b: &DecInt) -> DecInt {
    a.divmod(b).0
}

fn signed_rem(a: &DecInt, b: &DecInt) -> DecInt {
    a.divmod(b).1
}

macro_rules! forward_signed_binop {
    ($trait:ident, $method:ident, $func:path) => {
        impl $trait<&DecInt> for &DecInt {
            type Output = DecInt;
            fn $method(self, rhs: &DecInt) -> DecInt {
                $func(self, rhs)
            }
        }

        impl $trait<DecInt> for &DecInt {
            type Output = DecInt;
            fn $method(self, rhs: DecInt) -> DecInt {
                $func(self, &rhs)
            }
        }

        impl $trait<&DecInt> for DecInt {
            type Output = DecInt;
            fn $method(self, rhs: &DecInt) -> DecInt {
                $func(&self, rhs)
            }
        }

        impl $trait for DecInt {
            type Output = DecInt;
            fn $method(self, rhs: DecInt) -> DecInt {
                $func(&self, &rhs)
            }
        }
    };
}

forward_signed_binop!(Add, add, signed_add);
forward_signed_binop!(Sub, sub, signed_sub);
forward_signed_binop!(Mul, mul, signed_mul);
forward_signed_binop!(Div, div, signed_div);
forward_signed_binop!(Rem, rem, signed_rem);

macro_rules! forward_signed_assign {
    ($trait:ident, $method:ident, $func:path) => {
        impl $trait<&DecInt> for DecInt {
            fn $method(&mut self, rhs: &DecInt) {
                *self = $func(self, rhs);
            }
        }

        impl $trait for DecInt {
            fn $method(&mut self, rhs: DecInt) {
                *self = $func(self, &rhs);
            }
        }
    };
}

forward_signed_assign!(AddAssign, add_assign, signed_add);
forward_signed_assign!(SubAssign, sub_assign, signed_sub);
forward_signed_assign!(MulAssign, mul_assign, signed_mul);
forward_signed_assign!(DivAssign, div_assign, signed_div);
forward_signed_assign!(RemAssign, rem_assign, signed_rem);
