//! Error types for parsing and narrowing conversions.

/// Failure to parse a decimal string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseDecimalError {
    /// The input was empty (or a bare sign with no digits).
    #[error("empty decimal string")]
    Empty,

    /// A byte outside `0-9` (or a misplaced sign) at the given offset.
    #[error("invalid decimal digit at position {position}")]
    InvalidDigit {
        /// Byte offset of the offending character.
        position: usize,
    },
}

/// Failure to convert between a big integer and a fixed-width type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// The value does not fit in the target type.
    #[error("value out of range for the target type")]
    OutOfRange,

    /// A negative value cannot become unsigned.
    #[error("negative value cannot convert to an unsigned integer")]
    Negative,

    /// NaN or an infinity has no integer value.
    #[error("non-finite floating-point value")]
    NotFinite,
}
