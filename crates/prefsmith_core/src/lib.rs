//! Provide shared, pure helpers and canonical vocabulary for the prefsmith generator and its runtime crate.
//!
//! This crate is intentionally small and dependency-free. It holds deterministic helpers that both:
//! - the generator uses when normalizing declarations (field-name derivation, type spellings, storable types), and
//! - the runtime crate uses so emitted code and the generator agree on store accessor names and hash codes.
//!
//! ## Notes
//!
//! - This is a "semantic core" crate: **no IO**, no global mutable state, and no generator-specific types.
//! - Registries are `const` tables; callers work with stable IDs and look up spellings/metadata.

pub mod hashing;
pub mod lang;
pub mod naming;

pub use naming::{CaseFormat, convert_case, derive_field_name};
