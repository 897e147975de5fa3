//! Big-multiply dispatch.
//!
//! Products with a short side at or below the crossover run the schoolbook
//! kernel; everything else goes through the convolution engine. The choice
//! is symmetric and depends only on operand lengths.

use tracing::debug;

use crate::digits::Digits;
use crate::kernels;

/// Operand length (limbs) at or below which schoolbook multiplication wins.
pub const SCHOOLBOOK_MUL_THRESHOLD: usize = 64;

/// Largest multiply operand, in limbs, the engine accepts. Two operands of
/// this size split into exactly the capped transform length.
pub const MAX_MUL_LIMBS: usize = decint_fft::MAX_FFT_LEN / (2 * decint_fft::MINIS_PER_LIMB);

/// Exact product of two canonical vectors.
#[must_use]
pub(crate) fn mul(a: &Digits, b: &Digits) -> Digits {
    if a.is_zero() || b.is_zero() {
        return Digits::new();
    }
    if a.len().min(b.len()) <= SCHOOLBOOK_MUL_THRESHOLD {
        return kernels::schoolbook_mul(a, b);
    }
    assert!(
        a.len() <= MAX_MUL_LIMBS && b.len() <= MAX_MUL_LIMBS,
        "multiply operand exceeds {MAX_MUL_LIMBS} limbs"
    );
    debug!(len_a = a.len(), len_b = b.len(), "dispatching convolution multiply");
    Digits::from_vec(decint_fft::mul(a.limbs(), b.limbs()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(len: usize, seed: u64) -> Digits {
        let limbs: Vec<u32> = (0..len as u64)
            .map(|i| (((i + 1) * seed) % u64::from(crate::BASE)) as u32)
            .map(|l| l.max(1))
            .collect();
        Digits::from_vec(limbs)
    }

    #[test]
    fn dispatch_paths_agree_around_threshold() {
        // Lengths straddling the crossover must give identical products.
        for &(la, lb) in &[
            (SCHOOLBOOK_MUL_THRESHOLD, SCHOOLBOOK_MUL_THRESHOLD + 1),
            (SCHOOLBOOK_MUL_THRESHOLD + 1, SCHOOLBOOK_MUL_THRESHOLD + 1),
            (SCHOOLBOOK_MUL_THRESHOLD + 40, SCHOOLBOOK_MUL_THRESHOLD + 3),
        ] {
            let a = pattern(la, 977_482_913);
            let b = pattern(lb, 356_901_287);
            let via_dispatch = mul(&a, &b);
            let via_schoolbook = kernels::schoolbook_mul(&a, &b);
            assert_eq!(via_dispatch, via_schoolbook, "paths diverge at ({la}, {lb})");
        }
    }

    #[test]
    fn mul_is_symmetric() {
        let a = pattern(70, 123_456_791);
        let b = pattern(90, 543_212_345);
        assert_eq!(mul(&a, &b), mul(&b, &a));
    }

    #[test]
    fn zero_short_circuits() {
        let a = pattern(100, 7);
        assert!(mul(&a, &Digits::new()).is_zero());
        assert!(mul(&Digits::new(), &a).is_zero());
    }
}
