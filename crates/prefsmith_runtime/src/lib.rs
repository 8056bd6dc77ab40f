//! Runtime support for prefsmith-generated preference classes.
//!
//! Generated implementations depend on this crate for the store abstraction they read from and write to, the
//! converter trait used by properties whose type the store cannot hold natively, read-only containers, and the
//! stable hash codes their `hash_code` methods fold together.

#![deny(clippy::unwrap_used)]

pub mod converter;
pub mod frozen;
pub mod hash;
pub mod prelude;
pub mod store;
pub mod unordered;

pub use converter::{Converter, DefaultConverter};
pub use frozen::{FrozenList, FrozenMap, FrozenSet};
pub use hash::HashCode;
pub use store::{MemoryStore, PreferenceStore, StoredValue};
pub use unordered::Unordered;
