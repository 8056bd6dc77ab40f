//! The key-value store generated classes persist their properties in.
//!
//! The trait has one getter/setter pair per natively storable type; the pair names follow
//! [`prefsmith_core::lang::store_types::getter_name`] so the generator and this crate agree on them.
//!
//! ## Notes
//! - A getter returns `default` when the key is missing **or** holds a value of another type.
//! - Implementations own their persistence; the generated code never flushes or closes a store.
//!
//! ## Examples
//! ```rust
//! use prefsmith_runtime::{MemoryStore, PreferenceStore};
//!
//! let mut store = MemoryStore::new();
//! store.put_i32("launches", 3);
//! assert_eq!(store.get_i32("launches", 0), 3);
//! assert_eq!(store.get_i32("missing", 7), 7);
//! ```

use std::collections::{BTreeMap, HashSet};

use prefsmith_core::lang::store_types::StoreTypeId;

/// A preference store holding values of the natively storable types.
pub trait PreferenceStore {
    fn get_bool(&self, key: &str, default: bool) -> bool;
    fn get_i32(&self, key: &str, default: i32) -> i32;
    fn get_i64(&self, key: &str, default: i64) -> i64;
    fn get_f32(&self, key: &str, default: f32) -> f32;
    fn get_string(&self, key: &str, default: String) -> String;
    fn get_string_set(&self, key: &str, default: HashSet<String>) -> HashSet<String>;

    fn put_bool(&mut self, key: &str, value: bool);
    fn put_i32(&mut self, key: &str, value: i32);
    fn put_i64(&mut self, key: &str, value: i64);
    fn put_f32(&mut self, key: &str, value: f32);
    fn put_string(&mut self, key: &str, value: String);
    fn put_string_set(&mut self, key: &str, value: HashSet<String>);

    /// Return true if a value of any type is stored under `key`.
    fn contains(&self, key: &str) -> bool;

    /// Remove the value stored under `key`, if any.
    fn remove(&mut self, key: &str);
}

/// A value held by a [`MemoryStore`].
#[derive(Debug, Clone, PartialEq)]
pub enum StoredValue {
    Bool(bool),
    Int(i32),
    Long(i64),
    Float(f32),
    String(String),
    StringSet(HashSet<String>),
}

impl StoredValue {
    /// The storable type this value belongs to.
    pub fn store_type(&self) -> StoreTypeId {
        match self {
            StoredValue::Bool(_) => StoreTypeId::Bool,
            StoredValue::Int(_) => StoreTypeId::Int,
            StoredValue::Long(_) => StoreTypeId::Long,
            StoredValue::Float(_) => StoreTypeId::Float,
            StoredValue::String(_) => StoreTypeId::String,
            StoredValue::StringSet(_) => StoreTypeId::StringSet,
        }
    }
}

/// An in-process store backed by an ordered map.
///
/// Useful for tests and for callers that snapshot preferences elsewhere.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryStore {
    values: BTreeMap<String, StoredValue>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the raw stored value for `key`.
    pub fn get(&self, key: &str) -> Option<&StoredValue> {
        self.values.get(key)
    }

    /// Store a raw value, replacing any previous value of any type.
    pub fn insert(&mut self, key: impl Into<String>, value: StoredValue) {
        self.values.insert(key.into(), value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StoredValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

macro_rules! typed_get {
    ($self:ident, $key:ident, $default:ident, $variant:ident) => {
        match $self.values.get($key) {
            Some(StoredValue::$variant(value)) => value.clone(),
            _ => $default,
        }
    };
}

impl PreferenceStore for MemoryStore {
    fn get_bool(&self, key: &str, default: bool) -> bool {
        typed_get!(self, key, default, Bool)
    }

    fn get_i32(&self, key: &str, default: i32) -> i32 {
        typed_get!(self, key, default, Int)
    }

    fn get_i64(&self, key: &str, default: i64) -> i64 {
        typed_get!(self, key, default, Long)
    }

    fn get_f32(&self, key: &str, default: f32) -> f32 {
        typed_get!(self, key, default, Float)
    }

    fn get_string(&self, key: &str, default: String) -> String {
        typed_get!(self, key, default, String)
    }

    fn get_string_set(&self, key: &str, default: HashSet<String>) -> HashSet<String> {
        typed_get!(self, key, default, StringSet)
    }

    fn put_bool(&mut self, key: &str, value: bool) {
        self.insert(key, StoredValue::Bool(value));
    }

    fn put_i32(&mut self, key: &str, value: i32) {
        self.insert(key, StoredValue::Int(value));
    }

    fn put_i64(&mut self, key: &str, value: i64) {
        self.insert(key, StoredValue::Long(value));
    }

    fn put_f32(&mut self, key: &str, value: f32) {
        self.insert(key, StoredValue::Float(value));
    }

    fn put_string(&mut self, key: &str, value: String) {
        self.insert(key, StoredValue::String(value));
    }

    fn put_string_set(&mut self, key: &str, value: HashSet<String>) {
        self.insert(key, StoredValue::StringSet(value));
    }

    fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }
}
