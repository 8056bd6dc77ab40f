#![forbid(unsafe_code)]
//! prefsmith: preference-store-backed implementations of declared types
//!
//! Given declared types (interfaces or abstract classes whose accessors describe typed properties persisted in a
//! key-value preference store), prefsmith generates concrete implementations that read and write the store, convert
//! stored values, supply defaults, and implement structural equality, hashing and a string form.
//!
//! This crate provides the generator: the manifest frontend, the metadata model, the validation engine, the
//! generation engine and its IR, the Rust emitter, and the CLI. Emitted code links against `prefsmith_runtime`.
//!
//! ## Pipeline
//!
//! ```text
//! manifest → frontend::Manifest → metadata::ClassDescriptor → validation → backend::generate
//!          → backend::ir::GeneratedClassSpec → backend::ir::emit → Rust source
//! ```
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **Generated code**: Emitted Rust never unwraps; a store getter always has a default to fall back on.

pub mod backend;
pub mod cli;
pub mod config;
pub mod frontend;
pub mod metadata;
pub mod validation;
pub mod version;

pub use backend::{Codegen, CodegenError, GeneratedFile, generate};
pub use config::{ConfigError, GeneratorConfig};
pub use frontend::Manifest;
pub use metadata::ClassDescriptor;
pub use validation::{ErrorKind, ValidationError, validate};
