//! # decint-fft
//!
//! Exact convolution engine for packed-decimal limbs.
//!
//! Base-10^9 limbs are split into three base-10^3 mini-limbs each, cyclically
//! convolved with a number-theoretic transform over the prime
//! p = 2^64 − 2^32 + 1, and repacked with carry propagation. Coefficients are
//! bounded well below p (see the compile-time assertion in [`poly`]), so the
//! convolution is exact and needs no rounding analysis.

pub mod cache;
pub mod field;
pub mod ntt;
pub mod poly;

/// Hard cap on the transform length.
pub const MAX_FFT_LEN: usize = 1 << 22;

/// Mini-limb radix used inside the transform.
pub const MINI_BASE: u64 = 1_000;

/// Mini-limbs per base-10^9 limb.
pub const MINIS_PER_LIMB: usize = 3;

pub use poly::mul;
