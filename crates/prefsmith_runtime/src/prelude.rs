//! Items generated code brings into scope with a single glob import.

pub use crate::converter::{Converter, DefaultConverter};
pub use crate::frozen::{FrozenList, FrozenMap, FrozenSet};
pub use crate::hash::HashCode;
pub use crate::store::PreferenceStore;
