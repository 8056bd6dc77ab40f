//! Metadata model
//!
//! Normalizes raw declarations into the descriptors the validation and generation engines work on:
//! - [`ClassDescriptor`]: one declared type and its properties
//! - [`PropertyDescriptor`]: one accessor standing for a persisted property
//! - [`ConverterDescriptor`]: the converter a property goes through
//! - [`ValueType`]: a normalized property type
//!
//! Descriptors are built fresh for each generation pass and never mutated afterwards.

pub mod class;
pub mod converter;
pub mod property;
pub mod value_type;

pub use class::{ClassDescriptor, build_class_descriptor};
pub use converter::{ConverterDescriptor, resolve_converter};
pub use property::{PropertyDescriptor, build_property_descriptor};
pub use value_type::ValueType;

use crate::frontend::raw::{RawTypeDecl, Visibility};

/// Whether a type can be instantiated through a public, zero-argument constructor.
///
/// A type declaring no constructor at all gets an implicit one.
pub(crate) fn has_default_constructor(decl: &RawTypeDecl) -> bool {
    decl.constructors.is_empty()
        || decl
            .constructors
            .iter()
            .any(|c| c.visibility == Visibility::Public && !c.is_abstract && c.parameters.is_empty())
}
