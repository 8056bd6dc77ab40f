//! prefsmith backend
//!
//! This module turns validated descriptors into generated code.
//!
//! The pipeline is:
//! 1. `ClassDescriptor` → [`generate`] → [`ir::GeneratedClassSpec`]
//! 2. `GeneratedClassSpec` → [`ir::emit::RustEmitter`] → formatted Rust source
//!
//! ## Module Organization
//!
//! - `generate/` - Generation engine (fields, constructor, equality/hashing/string form, accessors, store I/O)
//! - `ir/` - Concrete-class IR, its text rendering, evaluator and Rust emitter
//! - `codegen.rs` - Pipeline facade running every stage per declared type

pub mod codegen;
pub mod generate;
pub mod ir;

pub use codegen::{Codegen, CodegenError, GeneratedFile};
pub use generate::{ClassGenerator, generate};
