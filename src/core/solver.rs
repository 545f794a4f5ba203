//! Closed-form solver for equations of degree 0, 1 and 2.
//!
//! [`Solver::solve`] normalizes the equation first, so the dispatch below can
//! rely on a non-zero leading coefficient for the linear and quadratic cases.
//! Every entry point asserts [`Equation::is_valid`]: a broken equation here
//! is a bug in the caller, not a user error.
//!
//! Finite coefficients can still overflow: `b*b` in the discriminant or
//! `-b/a` for a tiny `a`. [`Solver::try_solve`] reports that as an
//! [`InputError`]; [`Solver::solve`] treats it as fatal.

use crate::core::equation::{Equation, RootCount, RootList, Roots};
use crate::core::error::InputError;
use crate::core::float_cmp::Tolerance;
use crate::core::normalize::{normalize_with, sort_roots};
use crate::debug_log;

/// Solves `eq` in place with the default tolerance.
pub fn solve(eq: &mut Equation) -> RootCount {
    Solver::default().solve(eq)
}

#[derive(Copy, Clone, Debug, Default)]
pub struct Solver {
    tol: Tolerance,
}

impl Solver {
    pub fn new(tol: Tolerance) -> Self {
        Self { tol }
    }

    pub fn tolerance(&self) -> Tolerance {
        self.tol
    }

    pub fn solve(&self, eq: &mut Equation) -> RootCount {
        match self.try_solve(eq) {
            Ok(count) => count,
            Err(e) => panic!("solve: `{}`: {}", eq, e),
        }
    }

    /// On error `eq` is left normalized with no roots.
    pub fn try_solve(&self, eq: &mut Equation) -> Result<RootCount, InputError> {
        assert!(eq.is_valid(), "solve: invalid equation {:?}", eq);

        normalize_with(eq, self.tol);
        eq.roots = Roots::none();
        debug_log!("solve: normalized to `{}` (degree {})", eq, eq.degree());

        let roots = match eq.degree() {
            0 => self.solve_constant(eq),
            1 => self.solve_linear(eq),
            2 => self.solve_quadratic(eq)?,
            d => unreachable!("degree {} survived normalization", d),
        };
        if roots.as_slice().iter().any(|x| !x.is_finite()) {
            debug_log!("solve: roots overflowed {:?}", roots);
            return Err(InputError::RootOutOfRange);
        }

        eq.roots = roots;
        debug_log!("solve: roots {:?}", eq.roots);
        Ok(eq.root_count())
    }

    // A zero leading coefficient is fine here: `0 = 0` holds everywhere.
    fn solve_constant(&self, eq: &Equation) -> Roots {
        if self.tol.is_zero(eq.coeffs[0]) {
            Roots::Infinite
        } else {
            Roots::none()
        }
    }

    fn solve_linear(&self, eq: &Equation) -> Roots {
        let (a, b) = (eq.coeffs[0], eq.coeffs[1]);
        debug_assert!(!self.tol.is_zero(a));

        Roots::Finite(one(-b / a))
    }

    fn solve_quadratic(&self, eq: &Equation) -> Result<Roots, InputError> {
        let (a, b, c) = (eq.coeffs[0], eq.coeffs[1], eq.coeffs[2]);
        debug_assert!(!self.tol.is_zero(a));

        if self.tol.is_zero(a) && self.tol.is_zero(b) && self.tol.is_zero(c) {
            return Ok(Roots::none());
        }

        let d = b * b - 4.0 * a * c;
        debug_log!("solve: discriminant {}", d);
        if !d.is_finite() {
            return Err(InputError::DiscriminantOutOfRange);
        }

        if self.tol.is_zero(d) {
            debug_log!("solve: double root");
            return Ok(Roots::Finite(one(-b / (2.0 * a))));
        }

        if self.tol.less(d, 0.0) {
            debug_log!("solve: no real roots");
            return Ok(Roots::none());
        }

        // x * (a*x + b) = 0, only for an exact zero: a merely small `c`
        // still shifts both roots.
        if c == 0.0 {
            debug_log!("solve: zero constant term");
            return Ok(Roots::Finite(self.pair(0.0, -b / a)));
        }

        let s = d.sqrt();
        Ok(Roots::Finite(self.pair((-b - s) / (2.0 * a), (-b + s) / (2.0 * a))))
    }

    fn pair(&self, x1: f64, x2: f64) -> RootList {
        let mut roots: RootList = [x1 + 0.0, x2 + 0.0].into();
        sort_roots(&mut roots, self.tol);
        roots
    }
}

fn one(x: f64) -> RootList {
    let mut roots = RootList::new();
    roots.push(x + 0.0);
    roots
}
