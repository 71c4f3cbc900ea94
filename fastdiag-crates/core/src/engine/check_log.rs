use std::ops::Index;

use log::trace;

use crate::basic_types::ConstraintSet;

/// One consistency check: the 1-based sequence number under which it was submitted and a snapshot
/// of the exact constraint set that was handed to the oracle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckRecord {
    sequence: u64,
    constraints: ConstraintSet,
}

impl CheckRecord {
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }
}

/// The append-only, ordered record of every constraint set submitted to the oracle during one
/// top-level diagnosis computation.
///
/// A fresh log is created per computation, so sequence numbers never leak between computations.
/// The append order matches the submission order, which makes the log the witness for the
/// check-minimisation property of the engines.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckLog {
    records: Vec<CheckRecord>,
}

impl CheckLog {
    /// Append a snapshot of the submitted set and return its 1-based sequence number.
    ///
    /// The snapshot is a copy; later mutation of the submitted set does not alter the record.
    pub(crate) fn record(&mut self, constraints: &ConstraintSet) -> u64 {
        let sequence = self.records.len() as u64 + 1;
        trace!("consistency check {sequence}: {constraints}");

        self.records.push(CheckRecord {
            sequence,
            constraints: constraints.clone(),
        });

        sequence
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over the records in submission order.
    pub fn iter(&self) -> impl Iterator<Item = &'_ CheckRecord> {
        self.records.iter()
    }
}

impl Index<usize> for CheckLog {
    type Output = CheckRecord;

    /// Index by 0-based position in submission order.
    fn index(&self, position: usize) -> &Self::Output {
        &self.records[position]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint_set;

    #[test]
    fn sequence_numbers_start_at_one_and_increase() {
        let mut log = CheckLog::default();

        assert_eq!(log.record(&constraint_set!["c1"]), 1);
        assert_eq!(log.record(&constraint_set!["c2"]), 2);
        assert_eq!(log.record(&constraint_set!["c1"]), 3);

        assert_eq!(log.len(), 3);
        assert_eq!(log[2].sequence(), 3);
    }

    #[test]
    fn records_are_snapshots_not_live_references() {
        let mut log = CheckLog::default();
        let mut set = constraint_set!["c1"];

        let _ = log.record(&set);
        let _ = set.insert("c2".into());

        assert_eq!(log[0].constraints(), &constraint_set!["c1"]);
    }
}
