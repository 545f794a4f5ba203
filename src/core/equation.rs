//! Polynomial equation of degree <= 2 together with its solution set.
//!
//! Coefficients are stored highest-degree first, so `[a, b, c]` stands for
//! `a*x^2 + b*x + c = 0` and the degree is simply `len - 1`. Slots that
//! carry no meaning are not stored at all.

use std::fmt;

use arrayvec::ArrayVec;
use serde::{Serialize, Serializer};

use crate::core::error::InputError;

pub const MAX_DEGREE: usize = 2;
pub const MAX_COEFFS: usize = MAX_DEGREE + 1;
pub const MAX_ROOTS: usize = MAX_DEGREE;

pub type Coefficients = ArrayVec<f64, MAX_COEFFS>;
pub type RootList = ArrayVec<f64, MAX_ROOTS>;

#[derive(Clone, Debug, PartialEq)]
pub enum Roots {
    /// Ascending once the equation has been normalized or solved.
    Finite(RootList),
    /// Every real number satisfies the equation (`0 = 0`).
    Infinite,
}

impl Default for Roots {
    fn default() -> Self {
        Roots::Finite(RootList::new())
    }
}

impl Roots {
    pub fn none() -> Self {
        Self::default()
    }

    /// Checked construction from a slice of finite values.
    pub fn finite(values: &[f64]) -> Result<Self, InputError> {
        if values.len() > MAX_ROOTS {
            return Err(InputError::TooManyRoots { given: values.len(), max: MAX_ROOTS });
        }
        if let Some(&bad) = values.iter().find(|v| !v.is_finite()) {
            return Err(InputError::NonFiniteRoot(bad));
        }
        Ok(Roots::Finite(values.iter().copied().collect()))
    }

    pub fn count(&self) -> RootCount {
        match self {
            Roots::Finite(list) => RootCount::Finite(list.len()),
            Roots::Infinite => RootCount::Infinite,
        }
    }

    /// The finite roots; empty for [`Roots::Infinite`].
    pub fn as_slice(&self) -> &[f64] {
        match self {
            Roots::Finite(list) => list.as_slice(),
            Roots::Infinite => &[],
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RootCount {
    Finite(usize),
    Infinite,
}

// A plain number, or the string "infinite".
impl Serialize for RootCount {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match self {
            RootCount::Finite(n) => s.serialize_u64(*n as u64),
            RootCount::Infinite => s.serialize_str("infinite"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Equation {
    pub coeffs: Coefficients,
    pub roots: Roots,
}

impl Equation {
    /// Builds an unsolved equation, rejecting anything that would break
    /// [`Equation::is_valid`].
    pub fn from_coefficients(coeffs: &[f64]) -> Result<Self, InputError> {
        if coeffs.is_empty() {
            return Err(InputError::MissingArguments);
        }
        if coeffs.len() > MAX_COEFFS {
            return Err(InputError::TooManyArguments { given: coeffs.len(), max: MAX_COEFFS });
        }
        if let Some(&bad) = coeffs.iter().find(|c| !c.is_finite()) {
            return Err(InputError::NonFiniteCoefficient(bad));
        }
        Ok(Self { coeffs: coeffs.iter().copied().collect(), roots: Roots::none() })
    }

    /// An equation with a known solution set, e.g. a test fixture.
    pub fn with_roots(coeffs: &[f64], roots: Roots) -> Result<Self, InputError> {
        if let Roots::Finite(list) = &roots {
            if let Some(&bad) = list.iter().find(|r| !r.is_finite()) {
                return Err(InputError::NonFiniteRoot(bad));
            }
        }
        let mut eq = Self::from_coefficients(coeffs)?;
        eq.roots = roots;
        Ok(eq)
    }

    pub fn is_valid(&self) -> bool {
        if self.coeffs.is_empty() || self.coeffs.len() > MAX_COEFFS {
            return false;
        }
        if !self.coeffs.iter().all(|c| c.is_finite()) {
            return false;
        }
        match &self.roots {
            Roots::Finite(list) => list.iter().all(|r| r.is_finite()),
            Roots::Infinite => true,
        }
    }

    pub fn degree(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coeffs
    }

    /// Coefficient of the highest recorded power (possibly zero before
    /// normalization).
    pub fn leading(&self) -> Option<f64> {
        self.coeffs.first().copied()
    }

    pub fn roots(&self) -> &Roots {
        &self.roots
    }

    pub fn root_count(&self) -> RootCount {
        self.roots.count()
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let degree = self.degree();
        for (i, &c) in self.coeffs.iter().enumerate() {
            let c = c + 0.0; // drops the sign of -0.0
            let power = degree - i;
            if i == 0 {
                write!(f, "{}", c)?;
            } else if c < 0.0 {
                write!(f, " - {}", -c)?;
            } else {
                write!(f, " + {}", c)?;
            }
            match power {
                0 => {}
                1 => write!(f, "*x")?,
                p => write!(f, "*x^{}", p)?,
            }
        }
        write!(f, " = 0")
    }
}
