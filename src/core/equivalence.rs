use crate::core::equation::Equation;
use crate::core::float_cmp::Tolerance;

/// Do two solved equations have the same roots? Both root lists are expected
/// to be sorted, which `solve` and `normalize` guarantee.
pub fn solutions_equal(lhs: &Equation, rhs: &Equation) -> bool {
    solutions_equal_with(lhs, rhs, Tolerance::DEFAULT)
}

pub fn solutions_equal_with(lhs: &Equation, rhs: &Equation, tol: Tolerance) -> bool {
    assert!(lhs.is_valid(), "solutions_equal: invalid equation {:?}", lhs);
    assert!(rhs.is_valid(), "solutions_equal: invalid equation {:?}", rhs);

    if lhs.root_count() != rhs.root_count() {
        return false;
    }

    lhs.roots()
        .as_slice()
        .iter()
        .zip(rhs.roots().as_slice())
        .all(|(a, b)| tol.equal(*a, *b))
}
