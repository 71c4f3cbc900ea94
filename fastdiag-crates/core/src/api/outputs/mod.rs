//! The result types of a diagnosis computation, together with the [`CheckLog`] which witnesses
//! the consistency checks it submitted.
use crate::basic_types::ConstraintSet;
use crate::engine::CheckLog;

/// The result of a call to [`crate::Diagnoser::diagnose`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnosis {
    mss: ConstraintSet,
    diagnosis: ConstraintSet,
    check_log: CheckLog,
}

impl Diagnosis {
    pub(crate) fn new(mss: ConstraintSet, diagnosis: ConstraintSet, check_log: CheckLog) -> Self {
        Diagnosis {
            mss,
            diagnosis,
            check_log,
        }
    }

    /// The maximal satisfiable subset of the consideration set: no strict superset of it within
    /// the consideration set is consistent.
    pub fn mss(&self) -> &ConstraintSet {
        &self.mss
    }

    /// The minimal diagnosis: the complement of [`Diagnosis::mss`] within the consideration set,
    /// i.e. the constraints to remove to restore consistency.
    pub fn diagnosis(&self) -> &ConstraintSet {
        &self.diagnosis
    }

    /// Every constraint set submitted to the oracle, in submission order.
    pub fn check_log(&self) -> &CheckLog {
        &self.check_log
    }
}

/// The result of a call to [`crate::Diagnoser::diagnose_batched`].
///
/// Rather than a single resolved MSS, the batched engine enumerates a frontier of MSS candidates
/// across all background contexts it carried through the recursion. The frontier grows
/// multiplicatively with recursion depth; bounding it (deduplication, pruning of contexts known
/// to be inconsistent) is the caller's responsibility.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchedDiagnosis {
    candidates: Vec<ConstraintSet>,
    check_log: CheckLog,
}

impl BatchedDiagnosis {
    pub(crate) fn new(candidates: Vec<ConstraintSet>, check_log: CheckLog) -> Self {
        BatchedDiagnosis {
            candidates,
            check_log,
        }
    }

    /// The enumerated MSS candidates.
    pub fn candidates(&self) -> &[ConstraintSet] {
        &self.candidates
    }

    /// Every constraint set submitted to the oracle, in submission order.
    pub fn check_log(&self) -> &CheckLog {
        &self.check_log
    }
}
