//! prefsmith vocabulary registries.
//!
//! This module is the "front door" for vocabulary shared by the generator and the runtime: type spellings accepted
//! in declarations, the closed set of natively storable types, and Rust keywords for identifier escaping.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no IO, no side effects, `const` tables only.
//! - Callers work with stable IDs (e.g. `PrimitiveId`, `StoreTypeId`) and look up spellings via the tables.
//!
//! ## Examples
//! ```rust
//! use prefsmith_core::lang::types::{self, PrimitiveId};
//!
//! assert_eq!(types::primitive_from_str("i32"), Some(PrimitiveId::I32));
//! assert_eq!(types::primitive_from_str("int"), Some(PrimitiveId::I32));
//! ```

pub mod registry;
pub mod rust_keywords;
pub mod store_types;
pub mod types;
