use log::debug;

use crate::api::outputs::BatchedDiagnosis;
use crate::api::outputs::Diagnosis;
use crate::basic_types::ConstraintSet;
use crate::basic_types::DiagnosisError;
use crate::engine::BatchedDiagnosisEngine;
use crate::engine::CheckLog;
use crate::engine::ConsistencyOracle;
use crate::engine::SequentialDiagnosisEngine;

/// The entry point for diagnosis computations.
///
/// A [`Diagnoser`] owns a [`ConsistencyOracle`] and seeds the FastDiag recursion for it. Each
/// computation owns a fresh [`CheckLog`], so repeated computations never interfere with one
/// another.
///
/// # Example
/// ```rust
/// # use fastdiag_core::constraint_set;
/// # use fastdiag_core::ConstraintSet;
/// # use fastdiag_core::Diagnoser;
/// // The oracle deems every set containing "c2" inconsistent.
/// let oracle = |set: &ConstraintSet| !set.contains(&"c2".into());
/// let mut diagnoser = Diagnoser::new(oracle);
///
/// let result = diagnoser
///     .diagnose(&constraint_set!["c1", "c2", "c3"])
///     .expect("the consideration set is not empty");
///
/// assert_eq!(result.diagnosis(), &constraint_set!["c2"]);
/// assert_eq!(result.mss(), &constraint_set!["c1", "c3"]);
/// ```
#[derive(Debug)]
pub struct Diagnoser<Oracle> {
    oracle: Oracle,
}

impl<Oracle: ConsistencyOracle> Diagnoser<Oracle> {
    pub fn new(oracle: Oracle) -> Self {
        Diagnoser { oracle }
    }

    pub fn into_oracle(self) -> Oracle {
        self.oracle
    }

    /// Compute a minimal diagnosis of the consideration set with the sequential engine.
    ///
    /// The full set is checked first; if it is already consistent the diagnosis is empty and no
    /// recursion takes place. Otherwise the FastDiag recursion determines a maximal satisfiable
    /// subset, and the diagnosis is its complement within the consideration set.
    pub fn diagnose(
        &mut self,
        consideration_set: &ConstraintSet,
    ) -> Result<Diagnosis, DiagnosisError> {
        if consideration_set.is_empty() {
            return Err(DiagnosisError::EmptyConsiderationSet);
        }

        let mut check_log = CheckLog::default();

        let _ = check_log.record(consideration_set);
        if self.oracle.is_consistent(consideration_set)? {
            debug!("consideration set {consideration_set} is already consistent");
            return Ok(Diagnosis::new(
                consideration_set.clone(),
                ConstraintSet::default(),
                check_log,
            ));
        }

        let mss = SequentialDiagnosisEngine::new(&mut self.oracle, &mut check_log).fd(
            false,
            consideration_set,
            &ConstraintSet::default(),
        )?;
        let diagnosis = consideration_set.difference(&mss);

        debug!(
            "diagnosis {diagnosis} with mss {mss} after {} consistency checks",
            check_log.len()
        );

        Ok(Diagnosis::new(mss, diagnosis, check_log))
    }

    /// Run the batched engine on the consideration set, seeded with the single context `[C]` and
    /// the skip-flag list `[∅]`.
    ///
    /// The returned frontier enumerates MSS candidates; resolving them against the logged oracle
    /// verdicts is left to the caller.
    pub fn diagnose_batched(
        &mut self,
        consideration_set: &ConstraintSet,
    ) -> Result<BatchedDiagnosis, DiagnosisError> {
        if consideration_set.is_empty() {
            return Err(DiagnosisError::EmptyConsiderationSet);
        }

        let mut check_log = CheckLog::default();

        let flags = [ConstraintSet::default()];
        let contexts = [consideration_set.clone()];
        let candidates = BatchedDiagnosisEngine::new(&mut self.oracle, &mut check_log).fd(
            &flags,
            consideration_set,
            &contexts,
        )?;

        debug!(
            "batched frontier of {} candidates after {} consistency checks",
            candidates.len(),
            check_log.len()
        );

        Ok(BatchedDiagnosis::new(candidates, check_log))
    }
}
