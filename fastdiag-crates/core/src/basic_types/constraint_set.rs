use std::fmt;

use fnv::FnvHashSet;
use itertools::Itertools;

use crate::fastdiag_assert_eq_simple;
use crate::fastdiag_assert_moderate;

/// An opaque identifier naming one constraint; unique within a consideration set.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConstraintId(String);

impl ConstraintId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ConstraintId {
    fn from(name: &str) -> Self {
        ConstraintId(name.to_owned())
    }
}

impl From<String> for ConstraintId {
    fn from(name: String) -> Self {
        ConstraintId(name)
    }
}

impl fmt::Display for ConstraintId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A duplicate-free set of [`ConstraintId`]s which remembers insertion order.
///
/// The insertion order is what makes [`ConstraintSet::split_in_half`] deterministic: the first
/// ⌊n/2⌋ constraints in that order form the left half. Equality ignores the order.
#[derive(Clone, Default, Eq)]
pub struct ConstraintSet {
    constraints: Vec<ConstraintId>,
}

impl ConstraintSet {
    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    pub fn contains(&self, constraint: &ConstraintId) -> bool {
        self.constraints.contains(constraint)
    }

    /// Add a constraint at the end of the insertion order.
    ///
    /// Returns false if the constraint was already present, in which case the set is unchanged.
    pub fn insert(&mut self, constraint: ConstraintId) -> bool {
        if self.contains(&constraint) {
            return false;
        }

        self.constraints.push(constraint);
        true
    }

    /// Iterate over the constraints in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &'_ ConstraintId> {
        self.constraints.iter()
    }

    /// The union of two sets: the constraints of `self` in their insertion order, followed by the
    /// constraints of `other` which are not in `self`.
    pub fn union(&self, other: &ConstraintSet) -> ConstraintSet {
        let known: FnvHashSet<&ConstraintId> = self.constraints.iter().collect();

        let constraints = self
            .constraints
            .iter()
            .chain(other.iter().filter(|constraint| !known.contains(constraint)))
            .cloned()
            .collect();

        ConstraintSet { constraints }
    }

    /// The constraints of `self` which are not in `other`, keeping insertion order.
    pub fn difference(&self, other: &ConstraintSet) -> ConstraintSet {
        let removed: FnvHashSet<&ConstraintId> = other.constraints.iter().collect();

        let constraints = self
            .constraints
            .iter()
            .filter(|constraint| !removed.contains(constraint))
            .cloned()
            .collect();

        ConstraintSet { constraints }
    }

    /// Split the set into its first ⌊n/2⌋ constraints and the remainder, in insertion order.
    ///
    /// The halves are disjoint and their union restores the set.
    pub fn split_in_half(&self) -> (ConstraintSet, ConstraintSet) {
        let half = self.constraints.len() / 2;

        let left = ConstraintSet {
            constraints: self.constraints[..half].to_vec(),
        };
        let right = ConstraintSet {
            constraints: self.constraints[half..].to_vec(),
        };

        fastdiag_assert_eq_simple!(left.len() + right.len(), self.len());
        fastdiag_assert_moderate!(left.iter().all(|constraint| !right.contains(constraint)));

        (left, right)
    }
}

impl Extend<ConstraintId> for ConstraintSet {
    fn extend<T: IntoIterator<Item = ConstraintId>>(&mut self, iter: T) {
        for constraint in iter {
            let _ = self.insert(constraint);
        }
    }
}

impl FromIterator<ConstraintId> for ConstraintSet {
    fn from_iter<T: IntoIterator<Item = ConstraintId>>(iter: T) -> Self {
        let mut set = ConstraintSet::default();
        set.extend(iter);
        set
    }
}

impl IntoIterator for ConstraintSet {
    type Item = ConstraintId;

    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.constraints.into_iter()
    }
}

impl<'a> IntoIterator for &'a ConstraintSet {
    type Item = &'a ConstraintId;

    type IntoIter = std::slice::Iter<'a, ConstraintId>;

    fn into_iter(self) -> Self::IntoIter {
        self.constraints.iter()
    }
}

impl PartialEq for ConstraintSet {
    fn eq(&self, other: &Self) -> bool {
        if self.constraints.len() != other.constraints.len() {
            return false;
        }

        self.constraints
            .iter()
            .all(|constraint| other.contains(constraint))
    }
}

impl fmt::Display for ConstraintSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.constraints.iter().join(", "))
    }
}

impl fmt::Debug for ConstraintSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

/// A macro which allows for the creation of a [`ConstraintSet`] from constraint names.
///
/// # Example
/// ```rust
/// # use fastdiag_core::constraint_set;
/// # use fastdiag_core::ConstraintId;
/// let set = constraint_set!["c1", "c2"];
///
/// assert_eq!(set.len(), 2);
/// assert!(set.contains(&ConstraintId::from("c1")));
/// ```
#[macro_export]
macro_rules! constraint_set {
    () => {
        $crate::ConstraintSet::default()
    };

    ($($name:expr),+ $(,)?) => {{
        let mut set = $crate::ConstraintSet::default();
        $(let _ = set.insert($crate::ConstraintId::from($name));)+
        set
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint_set;

    fn numbered(n: usize) -> ConstraintSet {
        (1..=n).map(|i| ConstraintId::from(format!("c{i}"))).collect()
    }

    #[test]
    fn split_produces_floored_half_and_remainder() {
        for n in 1..=9 {
            let set = numbered(n);
            let (left, right) = set.split_in_half();

            assert_eq!(left.len(), n / 2);
            assert_eq!(right.len(), n - n / 2);
            assert!(left.iter().all(|constraint| !right.contains(constraint)));
            assert_eq!(left.union(&right), set);
        }
    }

    #[test]
    fn split_follows_insertion_order() {
        let (left, right) = constraint_set!["c1", "c2", "c3", "c4"].split_in_half();

        assert_eq!(left, constraint_set!["c1", "c2"]);
        assert_eq!(right, constraint_set!["c3", "c4"]);
    }

    #[test]
    fn insert_rejects_duplicates() {
        let mut set = constraint_set!["c1"];

        assert!(!set.insert("c1".into()));
        assert!(set.insert("c2".into()));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn union_keeps_left_order_and_appends_novel_constraints() {
        let union = constraint_set!["c1", "c3"].union(&constraint_set!["c2", "c3"]);

        let order: Vec<&str> = union.iter().map(ConstraintId::as_str).collect();
        assert_eq!(order, vec!["c1", "c3", "c2"]);
    }

    #[test]
    fn difference_removes_shared_constraints() {
        let difference = constraint_set!["c1", "c2", "c3"].difference(&constraint_set!["c2", "c4"]);

        assert_eq!(difference, constraint_set!["c1", "c3"]);
    }

    #[test]
    fn order_is_ignored_for_equality() {
        assert_eq!(constraint_set!["c1", "c2"], constraint_set!["c2", "c1"]);
        assert_ne!(constraint_set!["c1"], constraint_set!["c1", "c2"]);
    }

    #[test]
    fn display_wraps_constraints_in_braces() {
        assert_eq!(constraint_set!["c1", "c2"].to_string(), "{c1, c2}");
        assert_eq!(constraint_set!().to_string(), "{}");
    }
}
