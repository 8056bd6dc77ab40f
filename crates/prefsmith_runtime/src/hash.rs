//! Stable hash codes for property values.
//!
//! Generated `hash_code` methods call [`HashCode::hash_code`] on every field and fold the results with
//! [`combine`]. The per-type values come from `prefsmith_core::hashing`, the same functions the generator's IR
//! evaluator uses, so generated code and evaluated IR agree.
//!
//! User types used as property values implement [`HashCode`] themselves.
//!
//! ## Examples
//! ```rust
//! use prefsmith_runtime::HashCode;
//! use prefsmith_runtime::hash::{DEFAULT_MULTIPLIER, DEFAULT_SEED, combine};
//!
//! let mut acc = DEFAULT_SEED;
//! acc = combine(acc, DEFAULT_MULTIPLIER, "ada".to_string().hash_code());
//! acc = combine(acc, DEFAULT_MULTIPLIER, true.hash_code());
//! assert_eq!(acc, (17 * 37 + "ada".hash_code()) * 37 + 1231);
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use prefsmith_core::hashing;

use crate::frozen::{FrozenList, FrozenMap, FrozenSet};

pub use prefsmith_core::hashing::{DEFAULT_MULTIPLIER, DEFAULT_SEED, combine};

/// A deterministic 32-bit hash code.
///
/// Values that compare equal must return the same code.
pub trait HashCode {
    fn hash_code(&self) -> i32;
}

impl HashCode for bool {
    fn hash_code(&self) -> i32 {
        hashing::bool_hash(*self)
    }
}

impl HashCode for i8 {
    fn hash_code(&self) -> i32 {
        hashing::int_hash(i32::from(*self))
    }
}

impl HashCode for i16 {
    fn hash_code(&self) -> i32 {
        hashing::int_hash(i32::from(*self))
    }
}

impl HashCode for i32 {
    fn hash_code(&self) -> i32 {
        hashing::int_hash(*self)
    }
}

impl HashCode for i64 {
    fn hash_code(&self) -> i32 {
        hashing::long_hash(*self)
    }
}

impl HashCode for f32 {
    fn hash_code(&self) -> i32 {
        hashing::float_hash(*self)
    }
}

impl HashCode for f64 {
    fn hash_code(&self) -> i32 {
        hashing::double_hash(*self)
    }
}

impl HashCode for char {
    fn hash_code(&self) -> i32 {
        hashing::char_hash(*self)
    }
}

impl HashCode for str {
    fn hash_code(&self) -> i32 {
        hashing::str_hash(self)
    }
}

impl HashCode for String {
    fn hash_code(&self) -> i32 {
        hashing::str_hash(self)
    }
}

impl<T: HashCode + ?Sized> HashCode for &T {
    fn hash_code(&self) -> i32 {
        (**self).hash_code()
    }
}

impl<T: HashCode> HashCode for Option<T> {
    fn hash_code(&self) -> i32 {
        self.as_ref().map_or(0, HashCode::hash_code)
    }
}

impl<T: HashCode> HashCode for [T] {
    fn hash_code(&self) -> i32 {
        hashing::ordered_hash(self.iter().map(HashCode::hash_code))
    }
}

impl<T: HashCode> HashCode for Vec<T> {
    fn hash_code(&self) -> i32 {
        self.as_slice().hash_code()
    }
}

impl<T: HashCode> HashCode for FrozenList<T> {
    fn hash_code(&self) -> i32 {
        self.as_slice().hash_code()
    }
}

impl<T: HashCode, S> HashCode for HashSet<T, S> {
    fn hash_code(&self) -> i32 {
        hashing::unordered_hash(self.iter().map(HashCode::hash_code))
    }
}

impl<T: HashCode> HashCode for BTreeSet<T> {
    fn hash_code(&self) -> i32 {
        hashing::unordered_hash(self.iter().map(HashCode::hash_code))
    }
}

impl<T: HashCode> HashCode for FrozenSet<T> {
    fn hash_code(&self) -> i32 {
        hashing::unordered_hash(self.into_iter().map(HashCode::hash_code))
    }
}

impl<K: HashCode, V: HashCode, S> HashCode for HashMap<K, V, S> {
    fn hash_code(&self) -> i32 {
        hashing::unordered_hash(
            self.iter()
                .map(|(k, v)| hashing::entry_hash(k.hash_code(), v.hash_code())),
        )
    }
}

impl<K: HashCode, V: HashCode> HashCode for BTreeMap<K, V> {
    fn hash_code(&self) -> i32 {
        hashing::unordered_hash(
            self.iter()
                .map(|(k, v)| hashing::entry_hash(k.hash_code(), v.hash_code())),
        )
    }
}

impl<K: HashCode, V: HashCode> HashCode for FrozenMap<K, V> {
    fn hash_code(&self) -> i32 {
        hashing::unordered_hash(
            self.into_iter()
                .map(|(k, v)| hashing::entry_hash(k.hash_code(), v.hash_code())),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn containers_with_equal_contents_hash_equally() {
        let vec = vec!["a".to_string(), "b".to_string()];
        let frozen: FrozenList<String> = vec.iter().cloned().collect();
        assert_eq!(vec.hash_code(), frozen.hash_code());

        let set: HashSet<String> = vec.iter().cloned().collect();
        let sorted: BTreeSet<String> = vec.iter().cloned().collect();
        assert_eq!(set.hash_code(), sorted.hash_code());
    }

    #[test]
    fn none_hashes_to_zero() {
        assert_eq!(Option::<String>::None.hash_code(), 0);
        assert_eq!(Some(5i32).hash_code(), 5);
    }
}
