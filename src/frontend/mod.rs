//! prefsmith frontend
//!
//! This module turns an on-disk manifest into raw declarations:
//! - `raw`: the frontend input contract (declared types, methods, property directives)
//! - `type_expr`: parsing of type expressions such as `HashSet<String>`
//! - `manifest`: loading a JSON manifest and indexing its type universe

pub mod manifest;
pub mod raw;
pub mod type_expr;

pub use manifest::{Manifest, ManifestError, TypeUniverse};
pub use raw::{ConverterRef, RawConstructor, RawDirective, RawMethod, RawTypeDecl, TypeKind, Visibility};
pub use type_expr::{TypeExpr, TypeExprError};
