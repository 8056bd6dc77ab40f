//! prefsmith version information.
//!
//! Exposes the generator version as a single constant so the CLI and the emitted-file header agree on it.

/// The prefsmith version string (for example, `0.1.0`).
pub const PREFSMITH_VERSION: &str = env!("CARGO_PKG_VERSION");
