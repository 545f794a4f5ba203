pub mod check;
pub mod report;
pub mod solve;

use colored::Colorize;

/// User-facing failure: one colored line on stderr, context chain included.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {:#}", "error:".bright_red().bold(), err);
}
