//! Ordered integer sets.
//!
//! Set values iterate in ascending order and never hold duplicates. The
//! element type is always `i64`: char members are stored as code points and
//! enumeration members as ordinals.

use std::collections::BTreeSet;
use std::fmt;

#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct IntSet {
    members: BTreeSet<i64>,
}

impl IntSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `n`. Returns `false` if it was already present.
    pub fn insert(&mut self, n: i64) -> bool {
        self.members.insert(n)
    }

    #[inline]
    pub fn contains(&self, n: i64) -> bool {
        self.members.contains(&n)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.members.iter().copied()
    }

    pub fn union(&self, other: &IntSet) -> IntSet {
        self.members.union(&other.members).copied().collect()
    }

    /// Members of `self` that are not in `other`.
    pub fn difference(&self, other: &IntSet) -> IntSet {
        self.members.difference(&other.members).copied().collect()
    }

    pub fn intersection(&self, other: &IntSet) -> IntSet {
        self.members.intersection(&other.members).copied().collect()
    }

    /// True if every member of `other` is also in `self`.
    ///
    /// Scans `other`, so the cost follows the size of the set being tested.
    pub fn contains_all(&self, other: &IntSet) -> bool {
        other.iter().all(|n| self.contains(n))
    }
}

impl FromIterator<i64> for IntSet {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        IntSet {
            members: iter.into_iter().collect(),
        }
    }
}

impl Extend<i64> for IntSet {
    fn extend<I: IntoIterator<Item = i64>>(&mut self, iter: I) {
        self.members.extend(iter);
    }
}

impl fmt::Debug for IntSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.members.iter()).finish()
    }
}

/// Pascal notation: `[1, 3, 5]`.
impl fmt::Display for IntSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, n) in self.members.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{n}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn set(members: &[i64]) -> IntSet {
        members.iter().copied().collect()
    }

    #[test]
    fn test_ascending_without_duplicates() {
        let mut s = IntSet::new();
        for n in [5, 1, 3, 1, 5] {
            s.insert(n);
        }
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![1, 3, 5]);
        assert_eq!(s.len(), 3);
    }

    #[test]
    fn test_algebra() {
        let a = set(&[1, 3, 5]);
        let b = set(&[3, 4]);
        assert_eq!(a.union(&b), set(&[1, 3, 4, 5]));
        assert_eq!(a.difference(&b), set(&[1, 5]));
        assert_eq!(a.intersection(&b), set(&[3]));
    }

    #[test]
    fn test_contains_all() {
        let a = set(&[1, 3, 5]);
        assert!(a.contains_all(&set(&[1, 5])));
        assert!(a.contains_all(&IntSet::new()));
        assert!(!a.contains_all(&set(&[1, 2])));
    }

    #[test]
    fn test_display() {
        assert_eq!(set(&[-1, 3, 5]).to_string(), "[-1, 3, 5]");
        assert_eq!(IntSet::new().to_string(), "[]");
    }
}
