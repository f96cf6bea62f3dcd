/*!
# Bidirectional Map

A pair of hash maps kept in sync on every mutation, mapping left values to right values
and back. Both directions are unique: a left value has at most one right value and
vice versa.
*/

use std::{borrow::Borrow, hash::Hash};

use fxhash::FxHashMap;

/// Bijection between a subset of `L` and a subset of `R`
#[derive(Debug, Clone)]
pub struct BiMap<L, R> {
    forward: FxHashMap<L, R>,
    backward: FxHashMap<R, L>,
}

impl<L, R> Default for BiMap<L, R> {
    fn default() -> Self {
        Self {
            forward: FxHashMap::default(),
            backward: FxHashMap::default(),
        }
    }
}

impl<L, R> BiMap<L, R>
where
    L: Hash + Eq + Clone,
    R: Hash + Eq + Clone,
{
    /// Creates an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored pairs
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// Returns *true* if no pair is stored
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Returns the right value mapped to `left`
    pub fn forward<Q>(&self, left: &Q) -> Option<&R>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.forward.get(left)
    }

    /// Returns the left value mapped to `right`
    pub fn backward<Q>(&self, right: &Q) -> Option<&L>
    where
        R: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.backward.get(right)
    }

    pub fn contains_left<Q>(&self, left: &Q) -> bool
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.forward.contains_key(left)
    }

    pub fn contains_right<Q>(&self, right: &Q) -> bool
    where
        R: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.backward.contains_key(right)
    }

    /// Stores `left <-> right`, dropping any pair that previously involved either value.
    /// Returns the right value formerly mapped to `left`.
    pub fn insert(&mut self, left: L, right: R) -> Option<R> {
        let old_right = self.forward.remove(&left);
        if let Some(old) = &old_right {
            self.backward.remove(old);
        }
        if let Some(old_left) = self.backward.remove(&right) {
            self.forward.remove(&old_left);
        }

        self.forward.insert(left.clone(), right.clone());
        self.backward.insert(right, left);

        old_right
    }

    /// Removes the pair containing `left` and returns its right value
    pub fn remove_left<Q>(&mut self, left: &Q) -> Option<R>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let right = self.forward.remove(left)?;
        self.backward.remove(&right);
        Some(right)
    }

    /// Removes the pair containing `right` and returns its left value
    pub fn remove_right<Q>(&mut self, right: &Q) -> Option<L>
    where
        R: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let left = self.backward.remove(right)?;
        self.forward.remove(&left);
        Some(left)
    }

    /// Keeps only the pairs for which `keep` returns *true*
    pub fn retain(&mut self, mut keep: impl FnMut(&L, &R) -> bool) {
        let backward = &mut self.backward;
        self.forward.retain(|l, r| {
            let k = keep(l, r);
            if !k {
                backward.remove(r);
            }
            k
        });
    }

    /// Iterates over all pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&L, &R)> + '_ {
        self.forward.iter()
    }
}

impl<L, R> PartialEq for BiMap<L, R>
where
    L: Hash + Eq,
    R: Hash + Eq,
{
    fn eq(&self, other: &Self) -> bool {
        self.forward == other.forward
    }
}

impl<L: Hash + Eq, R: Hash + Eq> Eq for BiMap<L, R> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_consistent(map: &BiMap<u64, String>) {
        assert_eq!(map.forward.len(), map.backward.len());
        for (l, r) in map.iter() {
            assert_eq!(map.backward(r.as_str()), Some(l));
        }
    }

    #[test]
    fn insert_and_lookup() {
        let mut map = BiMap::new();
        assert!(map.is_empty());

        assert_eq!(map.insert(1u64, "a".to_string()), None);
        assert_eq!(map.insert(2, "b".to_string()), None);

        assert_eq!(map.forward(&1).map(String::as_str), Some("a"));
        assert_eq!(map.backward("b"), Some(&2));
        assert!(map.contains_left(&2));
        assert!(!map.contains_right("c"));
        assert_eq!(map.len(), 2);
        assert_consistent(&map);
    }

    #[test]
    fn insert_replaces_both_sides() {
        let mut map = BiMap::new();
        map.insert(1u64, "a".to_string());
        map.insert(2, "b".to_string());

        // rebinding an existing left value frees its old right value
        assert_eq!(map.insert(1, "c".to_string()), Some("a".to_string()));
        assert!(!map.contains_right("a"));

        // rebinding an existing right value drops its old left value
        map.insert(3, "b".to_string());
        assert!(!map.contains_left(&2));
        assert_eq!(map.backward("b"), Some(&3));

        // idempotent insert
        assert_eq!(map.insert(3, "b".to_string()), Some("b".to_string()));
        assert_eq!(map.backward("b"), Some(&3));

        assert_eq!(map.len(), 2);
        assert_consistent(&map);
    }

    #[test]
    fn removal() {
        let mut map = BiMap::new();
        for i in 0..10u64 {
            map.insert(i, format!("v{i}"));
        }

        assert_eq!(map.remove_left(&3), Some("v3".to_string()));
        assert_eq!(map.remove_left(&3), None);
        assert_eq!(map.remove_right("v4"), Some(4));
        assert_eq!(map.remove_right("v4"), None);

        map.retain(|l, _| l % 2 == 0);
        assert_eq!(map.len(), 4);
        assert!(!map.contains_right("v5"));
        assert_consistent(&map);
    }
}
