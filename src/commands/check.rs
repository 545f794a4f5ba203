//! `polyroot check <FILE>`: run the solver over a table of expected results.
//!
//! ```toml
//! [[case]]
//! name = "two roots"
//! coefficients = [1.0, -5.0, 6.0]
//! roots = [2.0, 3.0]
//!
//! [[case]]
//! coefficients = [0.0, 0.0]
//! infinite = true
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Deserialize;

use crate::commands::report::describe_roots;
use crate::config::Settings;
use crate::core::equation::{Equation, Roots};
use crate::core::equivalence::solutions_equal_with;
use crate::core::error::InputError;
use crate::core::normalize::normalize_with;
use crate::core::solver::Solver;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FixtureFile {
    #[serde(default, rename = "case")]
    cases: Vec<FixtureCase>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FixtureCase {
    name: Option<String>,
    coefficients: Vec<f64>,
    #[serde(default)]
    roots: Vec<f64>,
    #[serde(default)]
    infinite: bool,
}

#[derive(Clone, Debug)]
pub struct Fixture {
    pub name: String,
    pub input: Equation,
    pub expected: Equation,
}

#[derive(Clone, Debug)]
pub struct Outcome {
    pub passed: bool,
    pub got: Equation,
    /// Set when the coefficients overflow; the case then fails.
    pub error: Option<InputError>,
}

pub fn load_fixtures(path: &Path) -> Result<Vec<Fixture>> {
    let txt = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    parse_fixtures(&txt).with_context(|| format!("parsing {}", path.display()))
}

pub fn parse_fixtures(txt: &str) -> Result<Vec<Fixture>> {
    let file: FixtureFile = toml::from_str(txt)?;
    if file.cases.is_empty() {
        anyhow::bail!("no [[case]] entries");
    }

    file.cases
        .into_iter()
        .enumerate()
        .map(|(i, case)| -> Result<Fixture> {
            let name = case.name.unwrap_or_else(|| format!("#{}", i + 1));
            let roots = if case.infinite {
                if !case.roots.is_empty() {
                    anyhow::bail!("case {}: `infinite` and `roots` are mutually exclusive", name);
                }
                Roots::Infinite
            } else {
                Roots::finite(&case.roots).with_context(|| format!("case {}", name))?
            };
            let input = Equation::from_coefficients(&case.coefficients)
                .with_context(|| format!("case {}", name))?;
            let expected = Equation::with_roots(&case.coefficients, roots)
                .with_context(|| format!("case {}", name))?;
            Ok(Fixture { name, input, expected })
        })
        .collect()
}

pub fn check_case(fixture: &Fixture, solver: &Solver) -> Outcome {
    let mut got = fixture.input.clone();
    if let Err(e) = solver.try_solve(&mut got) {
        return Outcome { passed: false, got, error: Some(e) };
    }

    let mut expected = fixture.expected.clone();
    normalize_with(&mut expected, solver.tolerance());

    let passed = solutions_equal_with(&got, &expected, solver.tolerance());
    Outcome { passed, got, error: None }
}

pub fn main(path: &Path, settings: &Settings) -> Result<i32> {
    let fixtures = load_fixtures(path)?;
    let solver = Solver::new(settings.tolerance);

    let mut failed = 0usize;
    for fixture in &fixtures {
        let outcome = check_case(fixture, &solver);
        if outcome.passed {
            println!("case {} ... {}", fixture.name, "ok".green());
            continue;
        }
        failed += 1;
        println!("case {} ... {}", fixture.name, "FAILED".bright_red().bold());
        println!("    equation: {}", fixture.input);
        match &outcome.error {
            Some(e) => println!("    error:    {}", e),
            None => println!("    got:      {}", describe_roots(outcome.got.roots(), settings.precision)),
        }
        println!("    expected: {}", describe_roots(fixture.expected.roots(), settings.precision));
    }

    let passed = fixtures.len() - failed;
    let summary = format!("{} passed; {} failed", passed, failed);
    if failed == 0 {
        println!("\n{}", summary.green());
        Ok(0)
    } else {
        println!("\n{}", summary.bright_red());
        Ok(1)
    }
}
