//! Define error types for IR → Rust emission.
//!
//! These errors represent *backend emission* failures (as opposed to manifest or validation errors).
//!
//! ## Notes
//!
//! - Default literals are parsed here, not during generation. `Codegen` rejects unparsable literals during
//!   validation, so [`EmitError::InvalidDefault`] only surfaces for specs emitted directly.

use crate::backend::ir::LiteralError;

/// Error during IR emission.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EmitError {
    #[error("syn parse error: {0}")]
    SynParse(String),
    #[error("property `{key}`: {source}")]
    InvalidDefault {
        key: String,
        #[source]
        source: LiteralError,
    },
    #[error("unsupported: {0}")]
    Unsupported(String),
}
