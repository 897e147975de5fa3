//! Application logic: parse operands, dispatch, print.

use std::cmp::Ordering;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use decint_core::DecInt;
use tracing::info;

use crate::config::{AppConfig, Operation};

pub fn run(config: &AppConfig) -> Result<()> {
    let lhs: DecInt = config
        .lhs
        .parse()
        .with_context(|| format!("invalid left operand {:?}", config.lhs))?;
    let rhs: DecInt = config
        .rhs
        .parse()
        .with_context(|| format!("invalid right operand {:?}", config.rhs))?;

    if rhs.is_zero() && matches!(config.op, Operation::Div | Operation::Mod) {
        bail!("division by zero");
    }

    let started = Instant::now();
    let output = match config.op {
        Operation::Add => (&lhs + &rhs).to_decimal(),
        Operation::Sub => (&lhs - &rhs).to_decimal(),
        Operation::Mul => (&lhs * &rhs).to_decimal(),
        Operation::Div => (&lhs / &rhs).to_decimal(),
        Operation::Mod => (&lhs % &rhs).to_decimal(),
        Operation::Cmp => match lhs.cmp(&rhs) {
            Ordering::Less => "<".to_string(),
            Ordering::Equal => "=".to_string(),
            Ordering::Greater => ">".to_string(),
        },
    };
    let elapsed = started.elapsed();
    info!(?elapsed, op = ?config.op, "operation complete");

    if config.verbose {
        eprintln!("computed in {elapsed:?}");
    }
    if config.quiet {
        println!("{output}");
    } else {
        let symbol = match config.op {
            Operation::Add => "+",
            Operation::Sub => "-",
            Operation::Mul => "*",
            Operation::Div => "/",
            Operation::Mod => "%",
            Operation::Cmp => "<=>",
        };
        println!("{} {symbol} {} = {output}", config.lhs, config.rhs);
    }
    Ok(())
}
