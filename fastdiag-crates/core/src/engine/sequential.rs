use log::trace;

use crate::basic_types::ConstraintSet;
use crate::basic_types::DiagnosisError;
use crate::engine::CheckLog;
use crate::engine::ConsistencyOracle;

/// The classic single-context FastDiag recursion.
///
/// [`SequentialDiagnosisEngine::fd`] computes the part of the consideration set `C` which belongs
/// to a maximal satisfiable subset (MSS) of `B ∪ C`:
///
/// ```text
/// FD(check_owed, C = {c1..cn}, B) : MSS
///   if check_owed and consistent(B ∪ C) return C
///   if singleton(C) return ∅
///   k = ⌊n/2⌋; C1 = {c1..ck}; C2 = {ck+1..cn}
///   Δ2 = FD(true, C1, B)
///   Δ1 = FD(C1 \ Δ2 ≠ ∅, C2, B ∪ Δ2)
///   return Δ1 ∪ Δ2
/// ```
///
/// The right branch runs first and its result is folded into the background of the left branch;
/// that asymmetry is what bounds the number of oracle calls logarithmically in the size of the
/// consideration set per diagnosis element. The left branch skips its check exactly when
/// `Δ2 = C1`, in which case `B ∪ Δ2 ∪ C2` equals a set already known to be inconsistent.
///
/// The caller must ensure that `B ∪ C` is known to be inconsistent whenever `check_owed` is
/// false; [`crate::Diagnoser`] establishes this with its seed check of the full consideration
/// set.
pub(crate) struct SequentialDiagnosisEngine<'a, Oracle> {
    oracle: &'a mut Oracle,
    check_log: &'a mut CheckLog,
}

impl<'a, Oracle: ConsistencyOracle> SequentialDiagnosisEngine<'a, Oracle> {
    pub(crate) fn new(oracle: &'a mut Oracle, check_log: &'a mut CheckLog) -> Self {
        SequentialDiagnosisEngine { oracle, check_log }
    }

    pub(crate) fn fd(
        &mut self,
        check_owed: bool,
        consideration_set: &ConstraintSet,
        background: &ConstraintSet,
    ) -> Result<ConstraintSet, DiagnosisError> {
        if check_owed {
            let probe = background.union(consideration_set);
            let sequence = self.check_log.record(&probe);

            if self.oracle.is_consistent(&probe)? {
                trace!("check {sequence} is consistent, keeping {consideration_set}");
                return Ok(consideration_set.clone());
            }
        }

        if consideration_set.len() == 1 {
            return Ok(ConstraintSet::default());
        }

        let (c1, c2) = consideration_set.split_in_half();

        let delta2 = self.fd(true, &c1, background)?;

        let left_check_owed = !c1.difference(&delta2).is_empty();
        let delta1 = self.fd(left_check_owed, &c2, &background.union(&delta2))?;

        Ok(delta1.union(&delta2))
    }
}
