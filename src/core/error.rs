use std::fmt;

/// Errors caused by user-supplied data. Broken invariants inside the solver
/// are never reported through this type; they panic.
#[derive(Debug, Clone, PartialEq)]
pub enum InputError {
    MissingArguments,
    TooManyArguments { given: usize, max: usize },
    NoValidCoefficients,
    NonFiniteCoefficient(f64),
    TooManyRoots { given: usize, max: usize },
    NonFiniteRoot(f64),
    InvalidTolerance(f64),
    DiscriminantOutOfRange,
    RootOutOfRange,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::MissingArguments => write!(f, "no coefficients given"),
            InputError::TooManyArguments { given, max } => {
                write!(f, "too many coefficients: got {}, at most {} allowed", given, max)
            }
            InputError::NoValidCoefficients => write!(f, "none of the arguments is a valid number"),
            InputError::NonFiniteCoefficient(v) => write!(f, "coefficient {} is not finite", v),
            InputError::TooManyRoots { given, max } => {
                write!(f, "too many roots: got {}, at most {} allowed", given, max)
            }
            InputError::NonFiniteRoot(v) => write!(f, "root {} is not finite", v),
            InputError::InvalidTolerance(v) => {
                write!(f, "tolerance {} must be finite and non-negative", v)
            }
            InputError::DiscriminantOutOfRange => {
                write!(f, "coefficients too large: the discriminant is out of range")
            }
            InputError::RootOutOfRange => write!(f, "a root is out of floating-point range"),
        }
    }
}

impl std::error::Error for InputError {}
