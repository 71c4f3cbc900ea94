use crate::basic_types::ConstraintSet;
use crate::basic_types::OracleFailure;

/// The external consistency predicate the diagnosis engines minimise their calls to.
///
/// Implementations must be deterministic and side-effect free with respect to the submitted
/// constraint set: submitting the same set twice must yield the same verdict. Every invocation is
/// assumed expensive; the engines never submit a set whose verdict the recursion does not need.
///
/// The receiver is mutable so that implementations may keep internal state such as a verdict
/// cache.
pub trait ConsistencyOracle {
    /// Decide whether the given constraint set is jointly satisfiable.
    fn is_consistent(&mut self, constraints: &ConstraintSet) -> Result<bool, OracleFailure>;
}

/// Infallible oracles can be plain closures.
impl<F> ConsistencyOracle for F
where
    F: FnMut(&ConstraintSet) -> bool,
{
    fn is_consistent(&mut self, constraints: &ConstraintSet) -> Result<bool, OracleFailure> {
        Ok(self(constraints))
    }
}
