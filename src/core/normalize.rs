//! Normalization: drop leading zero coefficients and order the roots.
//!
//! The degree of an [`Equation`] comes straight from user input, so a
//! "quadratic" like `0*x^2 - 5*x + 10` is really linear. Normalizing lowers
//! the recorded degree until the leading coefficient is non-zero (or only the
//! constant term is left).

use crate::core::equation::{Equation, Roots};
use crate::core::float_cmp::Tolerance;

pub fn normalize(eq: &mut Equation) {
    normalize_with(eq, Tolerance::DEFAULT);
}

pub fn normalize_with(eq: &mut Equation, tol: Tolerance) {
    assert!(eq.is_valid(), "normalize: invalid equation {:?}", eq);

    while eq.degree() > 0 && eq.leading().is_some_and(|c| tol.is_zero(c)) {
        eq.coeffs.remove(0);
    }

    if let Roots::Finite(list) = &mut eq.roots {
        sort_roots(list, tol);
    }

    debug_assert!(eq.is_valid());
}

/// Exchange sort under the tolerance-aware ordering. `less_or_equal` is not a
/// total order, so this must not go through `slice::sort_by`.
pub(crate) fn sort_roots(roots: &mut [f64], tol: Tolerance) {
    for i in 0..roots.len() {
        for j in i + 1..roots.len() {
            if !tol.less_or_equal(roots[i], roots[j]) {
                roots.swap(i, j);
            }
        }
    }
}
