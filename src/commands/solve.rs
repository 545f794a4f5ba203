//! `polyroot solve`: parse coefficients, solve, print.

use anyhow::Result;

use crate::commands::report::render;
use crate::config::Settings;
use crate::core::input::parse_coefficients;
use crate::core::solver::Solver;
use crate::debug_log;

pub fn main(tokens: &[String], settings: &Settings) -> Result<i32> {
    let mut eq = parse_coefficients(tokens)?;
    debug_log!("solve: parsed `{}` from {:?}", eq, tokens);

    Solver::new(settings.tolerance).try_solve(&mut eq)?;
    println!("{}", render(&eq, settings.format, settings.precision)?);
    Ok(0)
}
