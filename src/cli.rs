use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "polyroot",
    about = "The polynomial equation solver: real roots of equations up to degree 2",
    version,
    propagate_version = true,
    disable_help_subcommand = true,
    args_conflicts_with_subcommands = true
)]
pub struct PolyrootCli {
    /// Global: path to config (TOML); default: ~/.polyroot/config.toml
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Global: absolute tolerance for float comparisons (default 1e-6)
    #[arg(long = "epsilon", value_name = "EPS", global = true, allow_negative_numbers = true)]
    pub epsilon: Option<f64>,

    /// Global: output format
    #[arg(long = "format", value_enum, value_name = "FORMAT", global = true)]
    pub format: Option<OutputFormat>,

    /// Global: significant digits when printing roots (default 6)
    #[arg(long = "precision", value_name = "N", global = true)]
    pub precision: Option<usize>,

    /// Global: print solver diagnostics to stderr (same as POLYROOT_DEBUG=1)
    #[arg(long = "debug", action = ArgAction::SetTrue, global = true)]
    pub debug: bool,

    /// Coefficients, highest power first. Shorthand for `polyroot solve`.
    /// Options go first: everything from the first coefficient on is a coefficient.
    #[arg(value_name = "COEFFS", allow_hyphen_values = true)]
    pub coeffs: Vec<String>,

    #[command(subcommand)]
    pub cmd: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Solve a*x^2 + b*x + c = 0
    ///
    /// Examples:
    ///   polyroot solve 1 -5 6
    ///   polyroot solve --format json 0 -5 10
    Solve {
        /// Up to three coefficients, highest power first; non-numbers are skipped
        #[arg(value_name = "COEFFS", allow_hyphen_values = true)]
        coeffs: Vec<String>,
    },

    /// Verify the solver against a TOML fixture file
    Check {
        #[arg(value_name = "FILE")]
        fixtures: PathBuf,
    },
}

impl PolyrootCli {
    /// Coefficient tokens from either the subcommand or the top-level shorthand.
    pub fn solve_tokens(&self) -> Option<&[String]> {
        match &self.cmd {
            Some(Command::Solve { coeffs }) => Some(coeffs),
            Some(_) => None,
            None => Some(&self.coeffs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        PolyrootCli::command().debug_assert();
    }

    #[test]
    fn shorthand_accepts_negative_numbers() {
        let cli = PolyrootCli::try_parse_from(["polyroot", "1", "-5", "6"]).unwrap();
        assert!(cli.cmd.is_none());
        assert_eq!(cli.solve_tokens().unwrap(), &["1", "-5", "6"]);
    }

    #[test]
    fn shorthand_keeps_dash_prefixed_junk() {
        let cli = PolyrootCli::try_parse_from(["polyroot", "1", "-x", "2"]).unwrap();
        assert_eq!(cli.solve_tokens().unwrap(), &["1", "-x", "2"]);

        let cli = PolyrootCli::try_parse_from(["polyroot", "-x", "1"]).unwrap();
        assert_eq!(cli.solve_tokens().unwrap(), &["-x", "1"]);
    }

    #[test]
    fn options_after_coefficients_are_tokens() {
        let cli = PolyrootCli::try_parse_from(["polyroot", "1", "2", "--debug"]).unwrap();
        assert!(!cli.debug);
        assert_eq!(cli.solve_tokens().unwrap(), &["1", "2", "--debug"]);
    }

    #[test]
    fn help_flag_still_wins() {
        let err = PolyrootCli::try_parse_from(["polyroot", "-h"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn solve_subcommand_with_global_flags() {
        let cli = PolyrootCli::try_parse_from([
            "polyroot", "solve", "--format", "json", "--epsilon", "1e-9", "0", "-5", "10",
        ])
        .unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert_eq!(cli.epsilon, Some(1e-9));
        assert_eq!(cli.solve_tokens().unwrap(), &["0", "-5", "10"]);
    }

    #[test]
    fn check_subcommand() {
        let cli = PolyrootCli::try_parse_from(["polyroot", "check", "cases.toml"]).unwrap();
        assert!(matches!(cli.cmd, Some(Command::Check { .. })));
        assert!(cli.solve_tokens().is_none());
    }
}
