//! Decimal text conversion.
//!
//! Parsing splits the digit string in balanced halves and combines the
//! recursive results with a power-of-ten multiply, bottoming out in a direct
//! `u64` scan at 18 digits. Emission walks the limbs from the most
//! significant end, nine digits per interior limb.

use std::fmt::Write as _;

use crate::digits::Digits;
use crate::error::ParseDecimalError;
use crate::kernels::add;
use crate::mul::mul;

/// Digit counts at or below this parse directly into at most two limbs.
const DIRECT_PARSE_DIGITS: usize = 18;

/// Parse an unsigned decimal string. Leading zeros are accepted and
/// stripped; the sign collaborator handles any sign character.
pub(crate) fn parse_decimal(s: &str) -> Result<Digits, ParseDecimalError> {
    let bytes = s.as_bytes();
    if bytes.is_empty() {
        return Err(ParseDecimalError::Empty);
    }
    if let Some(position) = bytes.iter().position(|b| !b.is_ascii_digit()) {
        return Err(ParseDecimalError::InvalidDigit { position });
    }
    match bytes.iter().position(|&b| b != b'0') {
        None => Ok(Digits::new()),
        Some(first) => Ok(parse_digits(&bytes[first..])),
    }
}

/// Recursive balanced-split parse of a pure digit slice with no leading
/// zero handling; the slice is nonempty.
fn parse_digits(digits: &[u8]) -> Digits {
    if digits.len() <= DIRECT_PARSE_DIGITS {
        let mut v = 0u64;
        for &b in digits {
            v = v * 10 + u64::from(b - b'0');
        }
        return Digits::from_u64(v);
    }
    let low_len = digits.len() / 2;
    let split = digits.len() - low_len;
    let high = parse_digits(&digits[..split]);
    let low = parse_digits(&digits[split..]);
    add(&mul(&high, &pow10(low_len)), &low)
}

/// 10^exp as a digit vector: a one-limb leading power shifted by whole
/// limbs, since the radix is itself a power of ten.
#[must_use]
pub(crate) fn pow10(exp: usize) -> Digits {
    let mut p = Digits::from_u64(10u64.pow((exp % 9) as u32));
    p.shift_limbs_left(exp / 9);
    p
}

/// Append the canonical decimal form of `v` to `out`.
pub(crate) fn emit_into(v: &Digits, out: &mut String) {
    if v.is_zero() {
        out.push('0');
        return;
    }
    out.reserve(v.len() * 9);
    emit_rec(v.limbs(), out, false);
}

/// Emit a limb range, splitting long runs in half. `pad` forces the full
/// nine-digit width on the leading limb, which every part below the overall
/// top needs.
fn emit_rec(limbs: &[u32], out: &mut String, pad: bool) {
    if limbs.len() <= 2 {
        let mut iter = limbs.iter().rev();
        if let Some(&top) = iter.next() {
            if pad {
                let _ = write!(out, "{top:09}");
            } else {
                let _ = write!(out, "{top}");
            }
        }
        for &limb in iter {
            let _ = write!(out, "{limb:09}");
        }
        return;
    }
    let split = limbs.len() / 2;
    emit_rec(&limbs[split..], out, pad);
    emit_rec(&limbs[..split], out, true);
}
