//! Core module tree: equation model, comparisons, normalization, solving.

pub mod debug; // gated debug logging (POLYROOT_DEBUG=1), exports debug_log!
pub mod equation;
pub mod equivalence;
pub mod error;
pub mod float_cmp;
pub mod input;
pub mod normalize;
pub mod solver;

pub use equation::{Equation, RootCount, Roots};
pub use error::InputError;
pub use float_cmp::Tolerance;
pub use solver::{solve, Solver};
