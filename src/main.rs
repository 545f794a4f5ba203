//! polyroot main: `polyroot <coeffs>` shorthand, `solve` and `check` subcommands.

use clap::{CommandFactory, Parser};

use polyroot::cli::{Command, PolyrootCli};
use polyroot::commands;
use polyroot::config::Settings;
use polyroot::core::debug;

fn main() {
    let args = match PolyrootCli::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help/--version go to stdout and succeed; usage errors exit 1
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };
    if args.debug {
        debug::enable();
    }

    match run(&args) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            commands::print_error(&e);
            std::process::exit(1);
        }
    }
}

fn run(args: &PolyrootCli) -> anyhow::Result<i32> {
    let settings = Settings::resolve(args)?;

    match &args.cmd {
        Some(Command::Check { fixtures }) => commands::check::main(fixtures, &settings),
        Some(Command::Solve { .. }) | None => {
            let tokens = args.solve_tokens().unwrap_or_default();
            // Nothing to solve: same as a bare invocation, show usage and fail.
            if tokens.is_empty() {
                eprintln!("{}", PolyrootCli::command().render_help());
                return Ok(1);
            }
            commands::solve::main(tokens, &settings)
        }
    }
}
