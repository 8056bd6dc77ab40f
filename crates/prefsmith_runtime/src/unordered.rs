//! Order-independent `Debug` output for sets and maps.
//!
//! Generated `Display` impls render set and map fields through [`Unordered`], so two equal values always describe
//! the same way regardless of the container's iteration order. Entries are sorted by their own `Debug` rendering,
//! which also puts ordered containers in text order (`10` before `2`).
//!
//! ## Examples
//! ```rust
//! use std::collections::HashSet;
//! use prefsmith_runtime::Unordered;
//!
//! let tags: HashSet<&str> = ["b", "c", "a"].into_iter().collect();
//! assert_eq!(format!("{:?}", Unordered(&tags)), r#"{"a", "b", "c"}"#);
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fmt;

use crate::frozen::{FrozenMap, FrozenSet};

/// Borrowed set or map whose `Debug` output lists entries in sorted order.
pub struct Unordered<'a, C: ?Sized>(pub &'a C);

/// Containers [`Unordered`] can render.
pub trait UnorderedEntries {
    /// Each entry rendered on its own: `item` for sets, `key: value` for maps.
    fn rendered_entries(&self) -> Vec<String>;
}

impl<T: fmt::Debug, S> UnorderedEntries for HashSet<T, S> {
    fn rendered_entries(&self) -> Vec<String> {
        self.iter().map(|item| format!("{:?}", item)).collect()
    }
}

impl<K: fmt::Debug, V: fmt::Debug, S> UnorderedEntries for HashMap<K, V, S> {
    fn rendered_entries(&self) -> Vec<String> {
        self.iter().map(|(key, value)| format!("{:?}: {:?}", key, value)).collect()
    }
}

impl<T: fmt::Debug> UnorderedEntries for BTreeSet<T> {
    fn rendered_entries(&self) -> Vec<String> {
        self.iter().map(|item| format!("{:?}", item)).collect()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> UnorderedEntries for BTreeMap<K, V> {
    fn rendered_entries(&self) -> Vec<String> {
        self.iter().map(|(key, value)| format!("{:?}: {:?}", key, value)).collect()
    }
}

impl<T: fmt::Debug> UnorderedEntries for FrozenSet<T> {
    fn rendered_entries(&self) -> Vec<String> {
        self.into_iter().map(|item| format!("{:?}", item)).collect()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> UnorderedEntries for FrozenMap<K, V> {
    fn rendered_entries(&self) -> Vec<String> {
        self.into_iter().map(|(key, value)| format!("{:?}: {:?}", key, value)).collect()
    }
}

/// Writes an already rendered entry verbatim.
struct Rendered<'a>(&'a str);

impl fmt::Debug for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl<C: UnorderedEntries + ?Sized> fmt::Debug for Unordered<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries = self.0.rendered_entries();
        entries.sort();
        f.debug_set().entries(entries.iter().map(|entry| Rendered(entry))).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sets_render_sorted() {
        let set: HashSet<i32> = (0..20).rev().collect();
        let mut by_text: Vec<String> = (0..20).map(|n| n.to_string()).collect();
        by_text.sort();
        assert_eq!(format!("{:?}", Unordered(&set)), format!("{{{}}}", by_text.join(", ")));
    }

    #[test]
    fn ordered_sets_sort_by_rendering() {
        let set: BTreeSet<i32> = [2, 10].into_iter().collect();
        assert_eq!(format!("{:?}", set), "{2, 10}");
        assert_eq!(format!("{:?}", Unordered(&set)), "{10, 2}");
    }

    #[test]
    fn maps_render_sorted_by_entry() {
        let map: HashMap<String, i32> = [("b".to_string(), 2), ("a".to_string(), 1)].into_iter().collect();
        assert_eq!(format!("{:?}", Unordered(&map)), r#"{"a": 1, "b": 2}"#);
    }

    #[test]
    fn frozen_containers_render_like_their_sources() {
        let set: FrozenSet<&str> = ["y", "x"].into_iter().collect();
        assert_eq!(format!("{:?}", Unordered(&set)), r#"{"x", "y"}"#);
        let map: FrozenMap<&str, bool> = [("k", true)].into_iter().collect();
        assert_eq!(format!("{:?}", Unordered(&map)), r#"{"k": true}"#);
    }

    #[test]
    fn empty_containers_render_as_braces() {
        let set: HashSet<String> = HashSet::new();
        assert_eq!(format!("{:?}", Unordered(&set)), "{}");
    }
}
