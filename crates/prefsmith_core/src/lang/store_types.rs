//! Types the preference store persists natively.
//!
//! The set is closed: a property either has one of these types or goes through a converter whose storage side is
//! one of them. The runtime's `PreferenceStore` trait has exactly one getter/setter pair per entry, named
//! `get_<accessor>` / `put_<accessor>`.
//!
//! ## Examples
//! ```rust
//! use prefsmith_core::lang::store_types::{self, StoreTypeId};
//!
//! assert_eq!(store_types::getter_name(StoreTypeId::Long), "get_i64");
//! assert_eq!(store_types::info(StoreTypeId::StringSet).spelling, "HashSet<String>");
//! assert!(store_types::contains("bool"));
//! ```

/// Stable identifier for natively storable types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreTypeId {
    Bool,
    Int,
    Long,
    Float,
    String,
    StringSet,
}

/// Metadata for a storable type.
#[derive(Debug, Clone, Copy)]
pub struct StoreTypeInfo {
    pub id: StoreTypeId,
    /// Canonical type spelling.
    pub spelling: &'static str,
    /// Suffix of the store's accessor pair.
    pub accessor: &'static str,
    /// Default literal read back when a property declares none.
    pub default_literal: &'static str,
    pub description: &'static str,
}

/// Registry of natively storable types.
pub const STORE_TYPES: &[StoreTypeInfo] = &[
    StoreTypeInfo {
        id: StoreTypeId::Bool,
        spelling: "bool",
        accessor: "bool",
        default_literal: "false",
        description: "Boolean flag.",
    },
    StoreTypeInfo {
        id: StoreTypeId::Int,
        spelling: "i32",
        accessor: "i32",
        default_literal: "0",
        description: "32-bit integer.",
    },
    StoreTypeInfo {
        id: StoreTypeId::Long,
        spelling: "i64",
        accessor: "i64",
        default_literal: "0",
        description: "64-bit integer.",
    },
    StoreTypeInfo {
        id: StoreTypeId::Float,
        spelling: "f32",
        accessor: "f32",
        default_literal: "0.0",
        description: "32-bit floating point number.",
    },
    StoreTypeInfo {
        id: StoreTypeId::String,
        spelling: "String",
        accessor: "string",
        default_literal: "",
        description: "UTF-8 string.",
    },
    StoreTypeInfo {
        id: StoreTypeId::StringSet,
        spelling: "HashSet<String>",
        accessor: "string_set",
        default_literal: "",
        description: "Unordered set of strings.",
    },
];

/// Look up the metadata of a storable type.
pub fn info(id: StoreTypeId) -> &'static StoreTypeInfo {
    match id {
        StoreTypeId::Bool => &STORE_TYPES[0],
        StoreTypeId::Int => &STORE_TYPES[1],
        StoreTypeId::Long => &STORE_TYPES[2],
        StoreTypeId::Float => &STORE_TYPES[3],
        StoreTypeId::String => &STORE_TYPES[4],
        StoreTypeId::StringSet => &STORE_TYPES[5],
    }
}

/// Resolve a canonical spelling to a [`StoreTypeId`].
pub fn from_spelling(spelling: &str) -> Option<StoreTypeId> {
    STORE_TYPES.iter().find(|info| info.spelling == spelling).map(|info| info.id)
}

/// Return true if the canonical spelling names a natively storable type.
pub fn contains(spelling: &str) -> bool {
    from_spelling(spelling).is_some()
}

/// Name of the store method reading a value of this type.
pub fn getter_name(id: StoreTypeId) -> String {
    format!("get_{}", info(id).accessor)
}

/// Name of the store method writing a value of this type.
pub fn setter_name(id: StoreTypeId) -> String {
    format!("put_{}", info(id).accessor)
}
