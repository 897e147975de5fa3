//! # decint-core
//!
//! Arbitrary-precision decimal integers over packed base-10^9 limbs.
//!
//! Each limb holds nine decimal digits in a `u32`, little-endian, with no
//! trailing zero limb; zero is the empty vector. Small operands run the
//! schoolbook kernels; past the crossover, multiplication goes through the
//! exact convolution engine in `decint-fft` and division through a
//! Newton-iteration reciprocal that reduces to multiplication. Decimal text
//! converts by balanced halving, so radix-10 I/O never dominates.
//!
//! # Example
//! ```
//! use decint_core::{DecInt, DecUint};
//!
//! let a: DecUint = "999999999999999999".parse().unwrap();
//! assert_eq!((&a + &DecUint::from(1u32)).to_decimal(), "1000000000000000000");
//!
//! let (q, r) = DecInt::from(-7).divmod(&DecInt::from(2));
//! assert_eq!((q.to_decimal(), r.to_decimal()), ("-3".into(), "-1".into()));
//! ```

mod digits;
mod div;
mod error;
mod kernels;
mod mul;
mod radix;
mod signed;
mod unsigned;

pub use div::{MAX_DIV_LIMBS, SCHOOLBOOK_DIV_THRESHOLD};
pub use error::{ConvertError, ParseDecimalError};
pub use mul::{MAX_MUL_LIMBS, SCHOOLBOOK_MUL_THRESHOLD};
pub use signed::DecInt;
pub use unsigned::DecUint;

/// The limb radix: each limb stores nine decimal digits.
pub const BASE: u32 = 1_000_000_000;

/// Decimal digits per limb.
pub const BASE_DIGITS: usize = 9;
