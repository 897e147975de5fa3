//! Command-line configuration.

use clap::{Parser, ValueEnum};

/// decint — arbitrary-precision decimal integer calculator.
#[derive(Parser, Debug)]
#[command(name = "decint", version, about)]
pub struct AppConfig {
    /// Operation to perform.
    #[arg(value_enum)]
    pub op: Operation,

    /// Left operand, a decimal integer with optional sign.
    #[arg(allow_hyphen_values = true)]
    pub lhs: String,

    /// Right operand, a decimal integer with optional sign.
    #[arg(allow_hyphen_values = true)]
    pub rhs: String,

    /// Only output the result value.
    #[arg(short, long)]
    pub quiet: bool,

    /// Report timing on stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Supported binary operations.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    /// Sum.
    Add,
    /// Difference.
    Sub,
    /// Product.
    Mul,
    /// Truncated quotient.
    Div,
    /// Remainder with the dividend's sign.
    Mod,
    /// Three-way comparison, printed as <, =, or >.
    Cmp,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
