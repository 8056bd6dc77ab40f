//! Read-only containers for properties declared with frozen container types.
//!
//! Each wrapper shares its storage through an `Arc`, so cloning a frozen value (which generated accessors do on every
//! call) is cheap and no handle can mutate the shared contents.
//!
//! ## Examples
//! ```rust
//! use prefsmith_runtime::FrozenList;
//!
//! let source = vec![1, 2, 3];
//! let frozen = FrozenList::from(source.clone());
//! let shared = frozen.clone();
//! assert_eq!(shared.as_slice(), source.as_slice());
//! ```

use std::borrow::Borrow;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

/// An immutable list.
#[derive(PartialEq, Eq)]
pub struct FrozenList<T> {
    data: Arc<[T]>,
}

impl<T> Clone for FrozenList<T> {
    fn clone(&self) -> Self {
        Self { data: Arc::clone(&self.data) }
    }
}

impl<T> FrozenList<T> {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn get(&self, idx: usize) -> Option<&T> {
        self.data.get(idx)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T: Clone> FrozenList<T> {
    /// Copy the elements into a new, mutable vector.
    pub fn to_vec(&self) -> Vec<T> {
        self.data.to_vec()
    }
}

impl<T> Default for FrozenList<T> {
    fn default() -> Self {
        Self { data: Arc::from(Vec::new()) }
    }
}

impl<T> From<Vec<T>> for FrozenList<T> {
    fn from(items: Vec<T>) -> Self {
        Self { data: Arc::from(items) }
    }
}

impl<T> FromIterator<T> for FrozenList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<'a, T> IntoIterator for &'a FrozenList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for FrozenList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

/// An immutable hash set.
pub struct FrozenSet<T> {
    data: Arc<HashSet<T>>,
}

impl<T> Clone for FrozenSet<T> {
    fn clone(&self) -> Self {
        Self { data: Arc::clone(&self.data) }
    }
}

impl<T: Eq + Hash> FrozenSet<T> {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> std::collections::hash_set::Iter<'_, T> {
        self.data.iter()
    }

    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.data.contains(item)
    }
}

impl<T: Eq + Hash + Clone> FrozenSet<T> {
    /// Copy the elements into a new, mutable set.
    pub fn to_set(&self) -> HashSet<T> {
        self.data.as_ref().clone()
    }
}

impl<T> Default for FrozenSet<T> {
    fn default() -> Self {
        Self { data: Arc::new(HashSet::new()) }
    }
}

impl<T: Eq + Hash> PartialEq for FrozenSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T: Eq + Hash> Eq for FrozenSet<T> {}

impl<T> From<HashSet<T>> for FrozenSet<T> {
    fn from(items: HashSet<T>) -> Self {
        Self { data: Arc::new(items) }
    }
}

impl<T: Eq + Hash> FromIterator<T> for FrozenSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<HashSet<_>>())
    }
}

impl<'a, T> IntoIterator for &'a FrozenSet<T> {
    type Item = &'a T;
    type IntoIter = std::collections::hash_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for FrozenSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.data.iter()).finish()
    }
}

/// An immutable hash map.
pub struct FrozenMap<K, V> {
    data: Arc<HashMap<K, V>>,
}

impl<K, V> Clone for FrozenMap<K, V> {
    fn clone(&self) -> Self {
        Self { data: Arc::clone(&self.data) }
    }
}

impl<K: Eq + Hash, V> FrozenMap<K, V> {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> std::collections::hash_map::Iter<'_, K, V> {
        self.data.iter()
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.data.get(key)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.data.contains_key(key)
    }
}

impl<K: Eq + Hash + Clone, V: Clone> FrozenMap<K, V> {
    /// Copy the entries into a new, mutable map.
    pub fn to_map(&self) -> HashMap<K, V> {
        self.data.as_ref().clone()
    }
}

impl<K, V> Default for FrozenMap<K, V> {
    fn default() -> Self {
        Self { data: Arc::new(HashMap::new()) }
    }
}

impl<K: Eq + Hash, V: PartialEq> PartialEq for FrozenMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<K: Eq + Hash, V: Eq> Eq for FrozenMap<K, V> {}

impl<K, V> From<HashMap<K, V>> for FrozenMap<K, V> {
    fn from(entries: HashMap<K, V>) -> Self {
        Self { data: Arc::new(entries) }
    }
}

impl<K: Eq + Hash, V> FromIterator<(K, V)> for FrozenMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<HashMap<_, _>>())
    }
}

impl<'a, K, V> IntoIterator for &'a FrozenMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = std::collections::hash_map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for FrozenMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.data.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_storage() {
        let list = FrozenList::from(vec!["a".to_string()]);
        let copy = list.clone();
        assert!(std::ptr::eq(list.as_slice(), copy.as_slice()));
    }

    #[test]
    fn to_vec_detaches() {
        let list: FrozenList<i32> = (1..=3).collect();
        let mut owned = list.to_vec();
        owned.push(4);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn set_equality_ignores_order() {
        let a: FrozenSet<&str> = ["x", "y"].into_iter().collect();
        let b: FrozenSet<&str> = ["y", "x"].into_iter().collect();
        assert_eq!(a, b);
        assert!(a.contains("x"));
    }

    #[test]
    fn map_lookup() {
        let map: FrozenMap<String, i32> = [("k".to_string(), 1)].into_iter().collect();
        assert_eq!(map.get("k"), Some(&1));
        assert!(!map.contains_key("z"));
    }
}
