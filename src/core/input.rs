//! Coefficient parsing from raw argument tokens.
//!
//! A token counts as a number if it starts with one (`3abc` reads as 3).
//! Tokens without a numeric prefix are skipped rather than rejected; the
//! degree is inferred from how many tokens did parse.

use crate::core::equation::{Coefficients, Equation, MAX_COEFFS};
use crate::core::error::InputError;
use crate::debug_log;

/// Parses up to [`MAX_COEFFS`] tokens, highest-degree coefficient first.
pub fn parse_coefficients<S: AsRef<str>>(tokens: &[S]) -> Result<Equation, InputError> {
    if tokens.is_empty() {
        return Err(InputError::MissingArguments);
    }
    if tokens.len() > MAX_COEFFS {
        return Err(InputError::TooManyArguments { given: tokens.len(), max: MAX_COEFFS });
    }

    let coeffs: Coefficients = tokens
        .iter()
        .filter_map(|t| {
            let parsed = parse_number(t.as_ref());
            if parsed.is_none() {
                debug_log!("input: skipping `{}`", t.as_ref());
            }
            parsed
        })
        .collect();

    if coeffs.is_empty() {
        return Err(InputError::NoValidCoefficients);
    }
    Equation::from_coefficients(&coeffs)
}

/// The longest leading part of `token` that reads as a finite number.
/// Leading whitespace is ignored. `inf` and `nan` parse as floats but could
/// never be valid coefficients.
pub fn parse_number(token: &str) -> Option<f64> {
    let token = token.trim_start();
    token
        .char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .rev()
        .find_map(|end| token[..end].parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_in_order() {
        let eq = parse_coefficients(&["1", "-5", "6"]).unwrap();
        assert_eq!(eq.coefficients(), &[1.0, -5.0, 6.0]);
        assert_eq!(eq.degree(), 2);
    }

    #[test]
    fn skips_garbage_tokens() {
        let eq = parse_coefficients(&["abc", "2.5", "-1e1"]).unwrap();
        assert_eq!(eq.coefficients(), &[2.5, -10.0]);
        assert_eq!(eq.degree(), 1);

        let eq = parse_coefficients(&["inf", " 7 ", "nan"]).unwrap();
        assert_eq!(eq.coefficients(), &[7.0]);
    }

    #[test]
    fn rejects_empty_and_excess() {
        let none: [&str; 0] = [];
        assert_eq!(parse_coefficients(&none), Err(InputError::MissingArguments));
        assert_eq!(
            parse_coefficients(&["x", "1", "2", "3"]),
            Err(InputError::TooManyArguments { given: 4, max: 3 })
        );
    }

    #[test]
    fn rejects_all_garbage() {
        assert_eq!(parse_coefficients(&["a", "b"]), Err(InputError::NoValidCoefficients));
    }

    #[test]
    fn accepts_owned_strings() {
        let args = vec!["0".to_string(), "3".to_string()];
        assert_eq!(parse_coefficients(&args).unwrap().degree(), 1);
    }

    #[test]
    fn number_parsing() {
        assert_eq!(parse_number("1e-3"), Some(0.001));
        assert_eq!(parse_number("-0.5"), Some(-0.5));
        assert_eq!(parse_number("-inf"), None);
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("x3"), None);
        assert_eq!(parse_number("-x"), None);
    }

    #[test]
    fn number_prefix_is_enough() {
        assert_eq!(parse_number("3abc"), Some(3.0));
        assert_eq!(parse_number("-2.5x"), Some(-2.5));
        assert_eq!(parse_number("1e3e"), Some(1000.0));
        assert_eq!(parse_number("4.5.6"), Some(4.5));
        assert_eq!(parse_number("  7 "), Some(7.0));
        assert_eq!(parse_number("infx"), None);

        let eq = parse_coefficients(&["3abc", "1"]).unwrap();
        assert_eq!(eq.coefficients(), &[3.0, 1.0]);
    }
}
