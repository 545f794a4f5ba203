//! Tolerance-based float comparisons.
//!
//! Every numeric decision in the solver goes through a [`Tolerance`]: two
//! values closer than the tolerance are treated as equal, and ordering is
//! only decided once the gap exceeds it.

use crate::core::error::InputError;

/// Absolute tolerance used when nothing else is configured.
pub const DEFAULT_EPSILON: f64 = 1e-6;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tolerance {
    eps: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Tolerance {
    pub const DEFAULT: Tolerance = Tolerance { eps: DEFAULT_EPSILON };

    /// Accepts any finite, non-negative epsilon.
    pub fn new(eps: f64) -> Result<Self, InputError> {
        if eps.is_finite() && eps >= 0.0 {
            Ok(Self { eps })
        } else {
            Err(InputError::InvalidTolerance(eps))
        }
    }

    pub fn epsilon(&self) -> f64 {
        self.eps
    }

    /// `|a - b| <= eps`
    #[inline]
    pub fn equal(&self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.eps
    }

    /// `a` is below `b` by more than eps.
    #[inline]
    pub fn less(&self, a: f64, b: f64) -> bool {
        a - b < -self.eps
    }

    #[inline]
    pub fn less_or_equal(&self, a: f64, b: f64) -> bool {
        self.less(a, b) || self.equal(a, b)
    }

    #[inline]
    pub fn is_zero(&self, x: f64) -> bool {
        self.equal(x, 0.0)
    }
}

#[inline]
pub fn equal(a: f64, b: f64) -> bool {
    Tolerance::DEFAULT.equal(a, b)
}

#[inline]
pub fn less(a: f64, b: f64) -> bool {
    Tolerance::DEFAULT.less(a, b)
}

#[inline]
pub fn less_or_equal(a: f64, b: f64) -> bool {
    Tolerance::DEFAULT.less_or_equal(a, b)
}

#[inline]
pub fn is_zero(x: f64) -> bool {
    Tolerance::DEFAULT.is_zero(x)
}
