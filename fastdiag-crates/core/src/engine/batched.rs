use itertools::Itertools;

use crate::basic_types::ConstraintSet;
use crate::basic_types::DiagnosisError;
use crate::engine::CheckLog;
use crate::engine::ConsistencyOracle;
use crate::fastdiag_assert_eq_simple;

/// The multi-context generalisation of the FastDiag recursion.
///
/// Where [`super::SequentialDiagnosisEngine`] carries a single background context through the
/// recursion, this engine carries an ordered list of contexts together with an index-aligned list
/// of skip flags. All consistency checks owed at one recursion step are submitted together, which
/// gives a caller the opportunity to dispatch them concurrently; the recursion itself is ordinary
/// synchronous divide-and-conquer and produces the same tree shape as the sequential engine.
///
/// The engine does not resolve the oracle verdicts inline. The singleton base case returns the
/// two-candidate frontier `[C, ∅]`, and the combine step forms the full cross product of the
/// sub-results, so the outcome is an enumerated frontier of MSS candidates across all input
/// contexts. Interpreting the verdicts (and bounding the multiplicative growth of the frontier)
/// is the caller's post-processing step. A failing oracle still aborts the whole computation.
pub(crate) struct BatchedDiagnosisEngine<'a, Oracle> {
    oracle: &'a mut Oracle,
    check_log: &'a mut CheckLog,
}

impl<'a, Oracle: ConsistencyOracle> BatchedDiagnosisEngine<'a, Oracle> {
    pub(crate) fn new(oracle: &'a mut Oracle, check_log: &'a mut CheckLog) -> Self {
        BatchedDiagnosisEngine { oracle, check_log }
    }

    /// `flags` and `contexts` are index-aligned: a non-empty flag at index `i` means a check is
    /// owed for context `i` at this step.
    pub(crate) fn fd(
        &mut self,
        flags: &[ConstraintSet],
        consideration_set: &ConstraintSet,
        contexts: &[ConstraintSet],
    ) -> Result<Vec<ConstraintSet>, DiagnosisError> {
        fastdiag_assert_eq_simple!(flags.len(), contexts.len());

        for (flag, context) in flags.iter().zip(contexts.iter()) {
            if flag.is_empty() {
                continue;
            }

            let probe = context.union(consideration_set);
            let _ = self.check_log.record(&probe);
            // The verdict is deferred to the caller's post-processing of the candidate frontier.
            let _ = self.oracle.is_consistent(&probe)?;
        }

        if consideration_set.len() == 1 {
            return Ok(vec![consideration_set.clone(), ConstraintSet::default()]);
        }

        let (c1, c2) = consideration_set.split_in_half();

        // The check is always owed on the right branch, exactly as in the sequential recursion
        // where the right branch's flag is the never-empty C2.
        let right_contexts: Vec<ConstraintSet> = contexts
            .iter()
            .map(|context| context.difference(&c2))
            .collect();
        let right_flags = vec![c2.clone(); contexts.len()];
        let delta2 = self.fd(&right_flags, &c1, &right_contexts)?;

        let (left_flags, left_contexts) = expand_contexts(contexts, &delta2);
        let delta1 = self.fd(&left_flags, &c2, &left_contexts)?;

        Ok(delta1
            .iter()
            .cartesian_product(delta2.iter())
            .map(|(d1, d2)| d2.union(d1))
            .collect())
    }
}

/// The cartesian expansion for the left sub-call: every context minus every candidate, row-major
/// (contexts outer, candidates inner), paired with the candidate list broadcast across all
/// contexts as the new flags. Both returned lists have exactly `contexts.len() * candidates.len()`
/// entries.
fn expand_contexts(
    contexts: &[ConstraintSet],
    candidates: &[ConstraintSet],
) -> (Vec<ConstraintSet>, Vec<ConstraintSet>) {
    let flags = contexts
        .iter()
        .flat_map(|_| candidates.iter().cloned())
        .collect();

    let expanded = contexts
        .iter()
        .cartesian_product(candidates.iter())
        .map(|(context, candidate)| context.difference(candidate))
        .collect();

    (flags, expanded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint_set;

    fn run(consideration_set: &ConstraintSet) -> (Vec<ConstraintSet>, CheckLog) {
        let mut oracle = |_: &ConstraintSet| true;
        let mut check_log = CheckLog::default();
        let candidates = BatchedDiagnosisEngine::new(&mut oracle, &mut check_log)
            .fd(
                &[ConstraintSet::default()],
                consideration_set,
                &[consideration_set.clone()],
            )
            .expect("closure oracles do not fail");
        (candidates, check_log)
    }

    #[test]
    fn expansion_has_one_entry_per_context_candidate_pair() {
        let contexts = [
            constraint_set!["c1", "c2", "c3"],
            constraint_set!["c2", "c3", "c4"],
        ];
        let candidates = [constraint_set!["c1"], constraint_set!["c2"], constraint_set!()];

        let (flags, expanded) = expand_contexts(&contexts, &candidates);

        assert_eq!(expanded.len(), contexts.len() * candidates.len());
        assert_eq!(flags.len(), expanded.len());

        // Row-major: all candidates against the first context come first.
        assert_eq!(expanded[0], constraint_set!["c2", "c3"]);
        assert_eq!(expanded[1], constraint_set!["c1", "c3"]);
        assert_eq!(expanded[2], constraint_set!["c1", "c2", "c3"]);
        assert_eq!(expanded[3], constraint_set!["c2", "c3", "c4"]);

        // The flags are the candidate list broadcast per context.
        assert_eq!(flags[0], candidates[0]);
        assert_eq!(flags[4], candidates[1]);
    }

    #[test]
    fn singleton_returns_the_deferred_two_candidate_frontier() {
        let (candidates, check_log) = run(&constraint_set!["c1"]);

        assert_eq!(candidates, vec![constraint_set!["c1"], constraint_set!()]);
        assert!(check_log.is_empty());
    }

    #[test]
    fn pair_produces_the_full_subset_frontier() {
        let (candidates, check_log) = run(&constraint_set!["c1", "c2"]);

        assert_eq!(
            candidates,
            vec![
                constraint_set!["c1", "c2"],
                constraint_set!["c2"],
                constraint_set!["c1"],
                constraint_set!(),
            ]
        );

        let submitted: Vec<ConstraintSet> = check_log
            .iter()
            .map(|record| record.constraints().clone())
            .collect();
        assert_eq!(submitted, vec![constraint_set!["c1"], constraint_set!["c2"]]);
    }

    #[test]
    fn frontier_size_is_the_product_of_branch_frontiers() {
        for n in 2..=4 {
            let consideration_set: ConstraintSet = (1..=n)
                .map(|i| crate::basic_types::ConstraintId::from(format!("c{i}")))
                .collect();

            let (candidates, _) = run(&consideration_set);

            assert_eq!(candidates.len(), 1 << n);
        }
    }
}
