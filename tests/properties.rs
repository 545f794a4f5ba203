//! Property-based tests for the normalize/solve pipeline.

use polyroot::core::equivalence::solutions_equal;
use polyroot::core::float_cmp::less_or_equal;
use polyroot::core::normalize::normalize;
use polyroot::core::{solve, Equation, RootCount};
use proptest::prelude::*;

// Strategy for coefficients that are often exactly zero, so degenerate
// equations show up regularly.
fn coefficient() -> impl Strategy<Value = f64> {
    prop_oneof![
        1 => Just(0.0),
        4 => -1000.0f64..1000.0f64,
    ]
}

fn coefficients() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(coefficient(), 1..=3)
}

proptest! {
    #[test]
    fn normalize_is_idempotent(coeffs in coefficients()) {
        let mut once = Equation::from_coefficients(&coeffs).unwrap();
        normalize(&mut once);
        let mut twice = once.clone();
        normalize(&mut twice);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn solve_matches_normalized_degree(coeffs in coefficients()) {
        let mut normalized = Equation::from_coefficients(&coeffs).unwrap();
        normalize(&mut normalized);

        let mut solved = Equation::from_coefficients(&coeffs).unwrap();
        solve(&mut solved);

        prop_assert_eq!(solved.degree(), normalized.degree());
        prop_assert!(solved.is_valid());
    }

    #[test]
    fn roots_are_sorted(coeffs in coefficients()) {
        let mut eq = Equation::from_coefficients(&coeffs).unwrap();
        solve(&mut eq);
        let roots = eq.roots().as_slice();
        for pair in roots.windows(2) {
            prop_assert!(less_or_equal(pair[0], pair[1]), "unsorted roots {:?}", roots);
        }
    }

    #[test]
    fn solutions_equal_is_reflexive(coeffs in coefficients()) {
        let mut eq = Equation::from_coefficients(&coeffs).unwrap();
        solve(&mut eq);
        prop_assert!(solutions_equal(&eq, &eq));
    }

    #[test]
    fn infinite_only_for_the_zero_polynomial(coeffs in coefficients()) {
        let mut eq = Equation::from_coefficients(&coeffs).unwrap();
        solve(&mut eq);
        if eq.root_count() == RootCount::Infinite {
            prop_assert_eq!(eq.degree(), 0);
            prop_assert!(eq.coefficients()[0].abs() <= 1e-6);
        }
    }

    #[test]
    fn factored_quadratic_recovers_its_roots(r1 in -100i32..100, r2 in -100i32..100) {
        // (x - r1)(x - r2)
        let (r1, r2) = (r1 as f64, r2 as f64);
        let mut eq = Equation::from_coefficients(&[1.0, -(r1 + r2), r1 * r2]).unwrap();
        solve(&mut eq);
        let (lo, hi) = (r1.min(r2), r1.max(r2));
        if r1 == r2 {
            prop_assert_eq!(eq.roots().as_slice(), &[lo][..]);
        } else {
            let roots = eq.roots().as_slice();
            prop_assert_eq!(roots.len(), 2);
            prop_assert!((roots[0] - lo).abs() <= 1e-6 && (roots[1] - hi).abs() <= 1e-6,
                "roots {:?}, expected [{}, {}]", roots, lo, hi);
        }
    }
}
