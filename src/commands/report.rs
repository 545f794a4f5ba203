//! Rendering of solved equations: the four-way text form and JSON.

use anyhow::Result;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::core::equation::{Equation, RootCount, Roots};

pub fn render(eq: &Equation, format: OutputFormat, precision: usize) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(eq, precision)),
        OutputFormat::Json => render_json(eq),
    }
}

pub fn render_text(eq: &Equation, precision: usize) -> String {
    let g = |x: f64| format_general(x, precision);
    match eq.roots() {
        Roots::Infinite => "Infinite number of roots.".to_string(),
        Roots::Finite(list) => match list.as_slice() {
            [] => "No real roots.".to_string(),
            [x] => format!("One root found: {}.", g(*x)),
            [x1, x2] => format!("Two roots found: {}, {}.", g(*x1), g(*x2)),
            more => unreachable!("{} roots for a degree <= 2 equation", more.len()),
        },
    }
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    equation: String,
    degree: usize,
    coefficients: &'a [f64],
    root_count: RootCount,
    roots: &'a [f64],
}

pub fn render_json(eq: &Equation) -> Result<String> {
    let report = Report {
        equation: eq.to_string(),
        degree: eq.degree(),
        coefficients: eq.coefficients(),
        root_count: eq.root_count(),
        roots: eq.roots().as_slice(),
    };
    Ok(serde_json::to_string(&report)?)
}

/// Short form of a root set for diagnostics: `infinite`, `none`, or a list.
pub fn describe_roots(roots: &Roots, precision: usize) -> String {
    match roots {
        Roots::Infinite => "infinite".to_string(),
        Roots::Finite(list) if list.is_empty() => "none".to_string(),
        Roots::Finite(list) => list
            .iter()
            .map(|x| format_general(*x, precision))
            .collect::<Vec<_>>()
            .join(", "),
    }
}

/// printf `%g`: `precision` significant digits, trailing zeros dropped,
/// scientific notation for exponents below -4 or at least `precision`.
pub fn format_general(x: f64, precision: usize) -> String {
    let p = precision.max(1);
    if x == 0.0 {
        return "0".to_string();
    }
    if !x.is_finite() {
        return x.to_string();
    }

    // Let the formatter do the rounding, then read the exponent back.
    let sci = format!("{:.*e}", p - 1, x);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exp < -4 || exp >= p as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exp.abs())
    } else {
        let decimals = (p as i32 - 1 - exp).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, x)).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
