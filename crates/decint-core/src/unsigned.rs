//! The unsigned integer façade.
//!
//! `DecUint` bundles a digit vector with operation semantics: comparisons,
//! arithmetic operators dispatching to the schoolbook or convolution
//! kernels, decimal text conversion, and narrowing to fixed-width types.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Rem, RemAssign, Sub, SubAssign};
use std::str::FromStr;

use crate::digits::Digits;
use crate::error::{ConvertError, ParseDecimalError};
use crate::{div, kernels, mul, radix, BASE};

/// Arbitrary-precision unsigned decimal integer.
///
/// The default value is zero, and a moved-from value observed through
/// [`std::mem::take`] is canonically zero again.
///
/// # Example
/// ```
/// use decint_core::DecUint;
///
/// let a: DecUint = "123456789012345678901234567890".parse().unwrap();
/// let b: DecUint = "987654321098765432109876543210".parse().unwrap();
/// assert_eq!((&a + &b).to_decimal(), "1111111110111111111011111111100");
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct DecUint {
    digits: Digits,
}

impl DecUint {
    /// The value zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            digits: Digits::new(),
        }
    }

    pub(crate) fn from_digits(digits: Digits) -> Self {
        Self { digits }.assert_valid()
    }

    /// Parse an unsigned decimal string. Leading zeros are accepted.
    pub fn from_decimal(s: &str) -> Result<Self, ParseDecimalError> {
        radix::parse_decimal(s).map(Self::from_digits)
    }

    /// Canonical decimal form as an owned string.
    #[must_use]
    pub fn to_decimal(&self) -> String {
        let mut out = String::new();
        radix::emit_into(&self.digits, &mut out);
        out
    }

    /// Run `f` over the decimal form written into the calling thread's
    /// emission buffer, avoiding an owned allocation.
    ///
    /// The borrowed view is valid only inside `f`; the buffer is reused by
    /// the next emission on the same thread.
    pub fn with_decimal_str<R>(&self, f: impl FnOnce(&str) -> R) -> R {
        let mut buf = decint_memory::acquire_string();
        radix::emit_into(&self.digits, &mut buf);
        let result = f(&buf);
        decint_memory::release_string(buf);
        result
    }

    /// Whether the value is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.digits.is_zero()
    }

    /// Number of decimal digits ("0" counts one).
    #[must_use]
    pub fn digit_len(&self) -> usize {
        match self.digits.limbs().last() {
            None => 1,
            Some(&top) => (self.digits.len() - 1) * 9 + decimal_width(top),
        }
    }

    /// Number of base-10^9 limbs.
    #[must_use]
    pub fn limb_len(&self) -> usize {
        self.digits.len()
    }

    /// Difference, or `None` when `rhs` is larger.
    #[must_use]
    pub fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        if self < rhs {
            None
        } else {
            Some(Self::from_digits(kernels::sub(&self.digits, &rhs.digits)))
        }
    }

    /// Quotient and remainder in one pass: `self = q·rhs + r`, `0 <= r < rhs`.
    ///
    /// # Panics
    /// Panics if `rhs` is zero.
    #[must_use]
    pub fn divmod(&self, rhs: &Self) -> (Self, Self) {
        let (q, r) = div::divmod(&self.digits, &rhs.digits);
        (Self::from_digits(q), Self::from_digits(r))
    }

    /// Quotient, or `None` for a zero divisor.
    #[must_use]
    pub fn checked_div(&self, rhs: &Self) -> Option<Self> {
        if rhs.is_zero() {
            None
        } else {
            Some(self.divmod(rhs).0)
        }
    }

    /// Remainder, or `None` for a zero divisor.
    #[must_use]
    pub fn checked_rem(&self, rhs: &Self) -> Option<Self> {
        if rhs.is_zero() {
            None
        } else {
            Some(self.divmod(rhs).1)
        }
    }

    pub(crate) fn to_u64(&self) -> Option<u64> {
        let mut acc: u64 = 0;
        for &l in self.digits.limbs().iter().rev() {
            acc = acc
                .checked_mul(u64::from(BASE))?
                .checked_add(u64::from(l))?;
        }
        Some(acc)
    }

    pub(crate) fn to_u128(&self) -> Option<u128> {
        let mut acc: u128 = 0;
        for &l in self.digits.limbs().iter().rev() {
            acc = acc
                .checked_mul(u128::from(BASE))?
                .checked_add(u128::from(l))?;
        }
        Some(acc)
    }

    #[inline]
    fn assert_valid(self) -> Self {
        #[cfg(feature = "validity-checks")]
        {
            assert!(
                self.digits.limbs().last() != Some(&0),
                "non-canonical trailing zero limb"
            );
            assert!(
                self.digits.limbs().iter().all(|&l| l < BASE),
                "limb out of range"
            );
        }
        self
    }
}

fn decimal_width(mut limb: u32) -> usize {
    let mut width = 1;
    while limb >= 10 {
        limb /= 10;
        width += 1;
    }
    width
}

impl fmt::Display for DecUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.to_decimal();
        f.pad_integral(true, "", &s)
    }
}

impl fmt::Debug for DecUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl FromStr for DecUint {
    type Err = ParseDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_decimal(s)
    }
}

impl Ord for DecUint {
    fn cmp(&self, other: &Self) -> Ordering {
        kernels::compare(&self.digits, &other.digits)
    }
}

impl PartialOrd for DecUint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// --- constructors from primitives ---------------------------------------

impl From<u64> for DecUint {
    fn from(v: u64) -> Self {
        Self {
            digits: Digits::from_u64(v),
        }
    }
}

impl From<u128> for DecUint {
    fn from(v: u128) -> Self {
        Self {
            digits: Digits::from_u128(v),
        }
    }
}

macro_rules! from_small_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for DecUint {
            fn from(v: $t) -> Self {
                Self::from(u64::from(v))
            }
        }
    )*};
}
from_small_unsigned!(u8, u16, u32);

impl From<usize> for DecUint {
    fn from(v: usize) -> Self {
        Self::from(v as u64)
    }
}

macro_rules! try_from_signed {
    ($($t:ty),*) => {$(
        impl TryFrom<$t> for DecUint {
            type Error = ConvertError;

            fn try_from(v: $t) -> Result<Self, ConvertError> {
                if v < 0 {
                    Err(ConvertError::Negative)
                } else {
                    Ok(Self::from(v as u128))
                }
            }
        }
    )*};
}
try_from_signed!(i8, i16, i32, i64, i128, isize);

impl TryFrom<f64> for DecUint {
    type Error = ConvertError;

    /// Floor of a finite nonnegative float, by scaling the mantissa into
    /// base B.
    fn try_from(v: f64) -> Result<Self, ConvertError> {
        if !v.is_finite() {
            return Err(ConvertError::NotFinite);
        }
        if v < 0.0 {
            return Err(ConvertError::Negative);
        }
        if v < 1.0 {
            return Ok(Self::new());
        }
        let bits = v.to_bits();
        let exp = ((bits >> 52) & 0x7ff) as i64;
        let mant = (bits & ((1u64 << 52) - 1)) | (1u64 << 52);
        let e2 = exp - 1075;
        if e2 >= 0 {
            let mut digits = Digits::from_u64(mant);
            let mut left = e2 as u32;
            while left >= 29 {
                digits = kernels::scalar_mul(&digits, 1 << 29);
                left -= 29;
            }
            if left > 0 {
                digits = kernels::scalar_mul(&digits, 1 << left);
            }
            Ok(Self { digits })
        } else {
            let shift = (-e2) as u32;
            Ok(Self {
                digits: Digits::from_u64(mant >> shift),
            })
        }
    }
}

// --- narrowing conversions ----------------------------------------------

impl TryFrom<&DecUint> for u64 {
    type Error = ConvertError;

    fn try_from(v: &DecUint) -> Result<Self, ConvertError> {
        v.to_u64().ok_or(ConvertError::OutOfRange)
    }
}

impl TryFrom<&DecUint> for u128 {
    type Error = ConvertError;

    fn try_from(v: &DecUint) -> Result<Self, ConvertError> {
        v.to_u128().ok_or(ConvertError::OutOfRange)
    }
}

impl TryFrom<&DecUint> for u32 {
    type Error = ConvertError;

    fn try_from(v: &DecUint) -> Result<Self, ConvertError> {
        let wide = v.to_u64().ok_or(ConvertError::OutOfRange)?;
        u32::try_from(wide).map_err(|_| ConvertError::OutOfRange)
    }
}

impl TryFrom<&DecUint> for i64 {
    type Error = ConvertError;

    fn try_from(v: &DecUint) -> Result<Self, ConvertError> {
        let wide = v.to_u64().ok_or(ConvertError::OutOfRange)?;
        i64::try_from(wide).map_err(|_| ConvertError::OutOfRange)
    }
}

// --- arithmetic operators ------------------------------------------------

fn op_add(a: &DecUint, b: &DecUint) -> DecUint {
    DecUint::from_digits(kernels::add(&a.digits, &b.digits))
}

fn op_sub(a: &DecUint, b: &DecUint) -> DecUint {
    DecUint::from_digits(kernels::sub(&a.digits, &b.digits))
}

fn op_mul(a: &DecUint, b: &DecUint) -> DecUint {
    DecUint::from_digits(mul::mul(&a.digits, &b.digits))
}

fn op_div(a: &DecUint, b: &DecUint) -> DecUint {
    DecUint::from_digits(div::divmod(&a.digits, &b.digits).0)
}

fn op_rem(a: &DecUint, b: &DecUint) -> DecUint {
    DecUint::from_digits(div::divmod(&a.digits, &b.digits).1)
}

macro_rules! forward_binop {
    ($trait:ident, $method:ident, $func:path) => {
        impl $trait<&DecUint> for &DecUint {
            type Output = DecUint;
            fn $method(self, rhs: &DecUint) -> DecUint {
                $func(self, rhs)
            }
        }

        impl $trait<DecUint> for &DecUint {
            type Output = DecUint;
            fn $method(self, rhs: DecUint) -> DecUint {
                $func(self, &rhs)
            }
        }

        impl $trait<&DecUint> for DecUint {
            type Output = DecUint;
            fn $method(self, rhs: &DecUint) -> DecUint {
                $func(&self, rhs)
            }
        }

        impl $trait for DecUint {
            type Output = DecUint;
            fn $method(self, rhs: DecUint) -> DecUint {
                $func(&self, &rhs)
            }
        }
    };
}

forward_binop!(Add, add, op_add);
forward_binop!(Sub, sub, op_sub);
forward_binop!(Mul, mul, op_mul);
forward_binop!(Div, div, op_div);
forward_binop!(Rem, rem, op_rem);

macro_rules! forward_assign {
    ($trait:ident, $method:ident, $func:path) => {
        impl $trait<&DecUint> for DecUint {
            fn $method(&mut self, rhs: &DecUint) {
                *self = $func(self, rhs);
            }
        }

        impl $trait for DecUint {
            fn $method(&mut self, rhs: DecUint) {
                *self = $func(self, &rhs);
            }
        }
    };
}

forward_assign!(AddAssign, add_assign, op_add);
forward_assign!(SubAssign, sub_assign, op_sub);
forward_assign!(MulAssign, mul_assign, op_mul);
forward_assign!(DivAssign, div_assign, op_div);
forward_assign!(RemAssign, rem_assign, op_rem);

/// Small-step increment, the `x += 1` idiom.
impl AddAssign<u32> for DecUint {
    fn add_assign(&mut self, rhs: u32) {
        self.digits = kernels::add(&self.digits, &Digits::from_u64(u64::from(rhs)));
    }
}

/// Small-step decrement. Panics on underflow like the subtraction operator.
impl SubAssign<u32> for DecUint {
    fn sub_assign(&mut self, rhs: u32) {
        self.digits = kernels::sub(&self.digits, &Digits::from_u64(u64::from(rhs)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> DecUint {
        s.parse().expect("test literal")
    }

    #[test]
    fn default_is_zero() {
        assert!(DecUint::default().is_zero());
        assert_eq!(DecUint::new(), DecUint::from(0u64));
        assert_eq!(DecUint::default().to_decimal(), "0");
    }

    #[test]
    fn move_donor_is_zero() {
        let mut a = dec("123456789123456789");
        let taken = std::mem::take(&mut a);
        assert!(a.is_zero());
        assert_eq!(taken, dec("123456789123456789"));
    }

    #[test]
    fn ordering_is_numeric() {
        assert!(dec("2") < dec("10"));
        assert!(dec("999999999999999999") < dec("1000000000000000000"));
        assert_eq!(dec("0"), DecUint::new());
        let mut vals = vec![dec("5"), dec("1000000000"), dec("0"), dec("999999999")];
        vals.sort();
        let shown: Vec<String> = vals.iter().map(DecUint::to_decimal).collect();
        assert_eq!(shown, ["0", "5", "999999999", "1000000000"]);
    }

    #[test]
    fn operator_surface() {
        let a = dec("1000000000000000000");
        let b = dec("3");
        assert_eq!((&a + &b).to_decimal(), "1000000000000000003");
        assert_eq!((&a - &b).to_decimal(), "999999999999999997");
        assert_eq!((&a * &b).to_decimal(), "3000000000000000000");
        assert_eq!((&a / &b).to_decimal(), "333333333333333333");
        assert_eq!((&a % &b).to_decimal(), "1");

        let mut c = a.clone();
        c += &b;
        c -= &b;
        assert_eq!(c, a);
        c *= dec("10");
        c /= dec("10");
        assert_eq!(c, a);
        c %= dec("7");
        assert!(c < dec("7"));
    }

    #[test]
    fn increment_and_decrement() {
        let mut x = dec("999999999999999999");
        x += 1u32;
        assert_eq!(x.to_decimal(), "1000000000000000000");
        x -= 1u32;
        assert_eq!(x.to_decimal(), "999999999999999999");
    }

    #[test]
    #[should_panic(expected = "underflow")]
    fn subtraction_underflow_panics() {
        let _ = dec("1") - dec("2");
    }

    #[test]
    fn checked_sub_reports_underflow() {
        assert!(dec("1").checked_sub(&dec("2")).is_none());
        assert_eq!(dec("2").checked_sub(&dec("1")), Some(dec("1")));
    }

    #[test]
    fn checked_div_rejects_zero() {
        assert!(dec("5").checked_div(&DecUint::new()).is_none());
        assert!(dec("5").checked_rem(&DecUint::new()).is_none());
        assert_eq!(dec("7").checked_div(&dec("2")), Some(dec("3")));
        assert_eq!(dec("7").checked_rem(&dec("2")), Some(dec("1")));
    }

    #[test]
    fn primitive_round_trips() {
        assert_eq!(u64::try_from(&DecUint::from(u64::MAX)), Ok(u64::MAX));
        assert_eq!(u128::try_from(&DecUint::from(u128::MAX)), Ok(u128::MAX));
        assert_eq!(u32::try_from(&DecUint::from(7u8)), Ok(7));
        assert_eq!(i64::try_from(&DecUint::from(7u16)), Ok(7));
        assert_eq!(
            u64::try_from(&(DecUint::from(u64::MAX) + DecUint::from(1u32))),
            Err(ConvertError::OutOfRange)
        );
        assert_eq!(
            i64::try_from(&DecUint::from(u64::MAX)),
            Err(ConvertError::OutOfRange)
        );
    }

    #[test]
    fn signed_sources_must_be_nonnegative() {
        assert_eq!(DecUint::try_from(42i64), Ok(dec("42")));
        assert_eq!(DecUint::try_from(-1i32), Err(ConvertError::Negative));
        assert_eq!(
            DecUint::try_from(i128::MAX).unwrap().to_decimal(),
            i128::MAX.to_string()
        );
    }

    #[test]
    fn float_conversion_floors() {
        assert_eq!(DecUint::try_from(0.0), Ok(DecUint::new()));
        assert_eq!(DecUint::try_from(0.999), Ok(DecUint::new()));
        assert_eq!(DecUint::try_from(1.0), Ok(dec("1")));
        assert_eq!(DecUint::try_from(2.75), Ok(dec("2")));
        assert_eq!(DecUint::try_from(1e15 + 0.5), Ok(dec("1000000000000000")));
        assert_eq!(
            DecUint::try_from(2f64.powi(64)).unwrap().to_decimal(),
            "18446744073709551616"
        );
        assert_eq!(DecUint::try_from(-1.5), Err(ConvertError::Negative));
        assert_eq!(DecUint::try_from(f64::NAN), Err(ConvertError::NotFinite));
        assert_eq!(DecUint::try_from(f64::INFINITY), Err(ConvertError::NotFinite));
    }

    #[test]
    fn digit_len_counts_decimal_digits() {
        assert_eq!(DecUint::new().digit_len(), 1);
        assert_eq!(dec("7").digit_len(), 1);
        assert_eq!(dec("1000000000").digit_len(), 10);
        assert_eq!(dec("999999999999999999").digit_len(), 18);
    }

    #[test]
    fn thread_local_emission_view() {
        let a = dec("123456789012345678901234567890");
        let len = a.with_decimal_str(|s| {
            assert_eq!(s, "123456789012345678901234567890");
            s.len()
        });
        assert_eq!(len, 30);
    }

    #[test]
    fn display_honors_padding() {
        assert_eq!(format!("{:>8}", dec("42")), "      42");
        assert_eq!(format!("{}", dec("0")), "0");
        assert_eq!(format!("{:?}", dec("42")), "42");
    }
}
