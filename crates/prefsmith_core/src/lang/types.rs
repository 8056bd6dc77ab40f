//! Type vocabulary accepted in declarations.
//!
//! This registry covers the builtin spellings a declaration may use for property types: primitives, the string
//! type, the nullable wrapper, and container types (mutable and frozen).
//!
//! ## Notes
//! - Lookups are **case-sensitive**.
//! - Canonical spellings are Rust's; JVM-style aliases (`int`, `List`, …) are accepted so manifests produced by
//!   other frontends resolve to the same IDs.
//! - Any spelling not listed here is a *declared* type (a user type such as `Date` or an enum).
//!
//! ## Examples
//! ```rust
//! use prefsmith_core::lang::types::{self, ContainerFamily, ContainerId};
//!
//! assert_eq!(types::container_from_str("List"), Some(ContainerId::Vec));
//! assert_eq!(ContainerId::Vec.family(), ContainerFamily::List);
//! assert!(ContainerId::Vec.is_mutable());
//! assert_eq!(ContainerId::Vec.frozen_counterpart(), ContainerId::FrozenList);
//! ```

use super::registry::{LangItemInfo, lookup};

/// Canonical spelling of the owned string type.
pub const STRING_TYPE: &str = "String";

/// Aliases accepted for the owned string type.
pub const STRING_ALIASES: &[&str] = &["string"];

/// Canonical spelling of the nullable wrapper.
pub const OPTION_TYPE: &str = "Option";

/// Stable identifier for primitive value types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveId {
    Bool,
    I8,
    I16,
    I32,
    I64,
    F32,
    F64,
    Char,
}

/// Metadata for a primitive type.
pub type PrimitiveInfo = LangItemInfo<PrimitiveId>;

/// Registry of primitive types.
pub const PRIMITIVES: &[PrimitiveInfo] = &[
    prim(PrimitiveId::Bool, "bool", &["boolean"], "Boolean truth value."),
    prim(PrimitiveId::I8, "i8", &["byte"], "8-bit signed integer."),
    prim(PrimitiveId::I16, "i16", &["short"], "16-bit signed integer."),
    prim(PrimitiveId::I32, "i32", &["int"], "32-bit signed integer."),
    prim(PrimitiveId::I64, "i64", &["long"], "64-bit signed integer."),
    prim(PrimitiveId::F32, "f32", &["float"], "32-bit floating point number."),
    prim(PrimitiveId::F64, "f64", &["double"], "64-bit floating point number."),
    prim(PrimitiveId::Char, "char", &[], "Unicode scalar value."),
];

const fn prim(
    id: PrimitiveId,
    canonical: &'static str,
    aliases: &'static [&'static str],
    description: &'static str,
) -> PrimitiveInfo {
    LangItemInfo {
        id,
        canonical,
        aliases,
        description,
    }
}

/// Resolve a spelling to a [`PrimitiveId`].
pub fn primitive_from_str(name: &str) -> Option<PrimitiveId> {
    lookup(PRIMITIVES, name)
}

/// Return the canonical spelling for a [`PrimitiveId`].
pub fn primitive_as_str(id: PrimitiveId) -> &'static str {
    PRIMITIVES
        .iter()
        .find(|info| info.id == id)
        .map(|info| info.canonical)
        .unwrap_or("?")
}

/// Return true if `name` spells the owned string type.
pub fn is_string(name: &str) -> bool {
    name == STRING_TYPE || STRING_ALIASES.contains(&name)
}

/// Container family, independent of mutability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerFamily {
    List,
    Set,
    Map,
}

impl ContainerFamily {
    /// Number of type arguments a container of this family takes.
    pub fn arity(self) -> usize {
        match self {
            ContainerFamily::List | ContainerFamily::Set => 1,
            ContainerFamily::Map => 2,
        }
    }
}

/// Stable identifier for container types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerId {
    Vec,
    HashSet,
    BTreeSet,
    HashMap,
    BTreeMap,
    FrozenList,
    FrozenSet,
    FrozenMap,
}

/// Metadata for a container type.
pub type ContainerInfo = LangItemInfo<ContainerId>;

/// Registry of container types.
pub const CONTAINERS: &[ContainerInfo] = &[
    container(ContainerId::Vec, "Vec", &["List", "ArrayList"], "Growable list."),
    container(ContainerId::HashSet, "HashSet", &["Set"], "Unordered hash set."),
    container(ContainerId::BTreeSet, "BTreeSet", &["SortedSet", "TreeSet"], "Ordered set."),
    container(ContainerId::HashMap, "HashMap", &["Map"], "Unordered hash map."),
    container(ContainerId::BTreeMap, "BTreeMap", &["SortedMap", "TreeMap"], "Ordered map."),
    container(ContainerId::FrozenList, "FrozenList", &["ImmutableList"], "Immutable list."),
    container(ContainerId::FrozenSet, "FrozenSet", &["ImmutableSet"], "Immutable set."),
    container(ContainerId::FrozenMap, "FrozenMap", &["ImmutableMap"], "Immutable map."),
];

const fn container(
    id: ContainerId,
    canonical: &'static str,
    aliases: &'static [&'static str],
    description: &'static str,
) -> ContainerInfo {
    LangItemInfo {
        id,
        canonical,
        aliases,
        description,
    }
}

impl ContainerId {
    /// The container's family.
    pub fn family(self) -> ContainerFamily {
        match self {
            ContainerId::Vec | ContainerId::FrozenList => ContainerFamily::List,
            ContainerId::HashSet | ContainerId::BTreeSet | ContainerId::FrozenSet => ContainerFamily::Set,
            ContainerId::HashMap | ContainerId::BTreeMap | ContainerId::FrozenMap => ContainerFamily::Map,
        }
    }

    /// Whether values of this container can be modified through a shared handle.
    pub fn is_mutable(self) -> bool {
        !matches!(
            self,
            ContainerId::FrozenList | ContainerId::FrozenSet | ContainerId::FrozenMap
        )
    }

    /// The immutable container of the same family.
    pub fn frozen_counterpart(self) -> ContainerId {
        match self.family() {
            ContainerFamily::List => ContainerId::FrozenList,
            ContainerFamily::Set => ContainerId::FrozenSet,
            ContainerFamily::Map => ContainerId::FrozenMap,
        }
    }

    /// Canonical spelling.
    pub fn as_str(self) -> &'static str {
        CONTAINERS
            .iter()
            .find(|info| info.id == self)
            .map(|info| info.canonical)
            .unwrap_or("?")
    }
}

/// Resolve a spelling to a [`ContainerId`].
pub fn container_from_str(name: &str) -> Option<ContainerId> {
    lookup(CONTAINERS, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_primitive_aliases() {
        assert_eq!(primitive_from_str("boolean"), Some(PrimitiveId::Bool));
        assert_eq!(primitive_from_str("long"), Some(PrimitiveId::I64));
        assert_eq!(primitive_from_str("Long"), None);
    }

    #[test]
    fn frozen_containers_are_immutable() {
        for info in CONTAINERS {
            let frozen = info.id.frozen_counterpart();
            assert!(!frozen.is_mutable(), "{:?}", frozen);
            assert_eq!(frozen.family(), info.id.family());
        }
    }

    #[test]
    fn map_family_takes_two_arguments() {
        assert_eq!(ContainerId::BTreeMap.family().arity(), 2);
        assert_eq!(ContainerId::HashSet.family().arity(), 1);
    }
}
