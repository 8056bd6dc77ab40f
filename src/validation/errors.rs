//! The error crossing the core boundary.
//!
//! Metadata construction and validation report failures as [`ValidationError`]. Its message is shown to the user
//! verbatim; the kind only classifies it (and selects the diagnostic code).
//!
//! ## Notes
//!
//! - `Structural`: the raw declaration cannot be normalized (unresolvable converter, malformed type expression).
//! - `Rule`: a declaration was normalized but breaks a generation rule.
//! - `Invariant`: a reference that must denote a declared type does not. This indicates a broken frontend.

use std::fmt;

/// Classification of a [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Structural,
    Rule,
    Invariant,
}

impl ErrorKind {
    /// Stable diagnostic code.
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::Structural => "prefsmith::structural",
            ErrorKind::Rule => "prefsmith::rule",
            ErrorKind::Invariant => "prefsmith::invariant",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Structural => write!(f, "structural error"),
            ErrorKind::Rule => write!(f, "rule violation"),
            ErrorKind::Invariant => write!(f, "invariant violation"),
        }
    }
}

/// A declaration rejected before generation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    pub kind: ErrorKind,
    pub message: String,
}

impl ValidationError {
    pub fn structural(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Structural,
            message: message.into(),
        }
    }

    pub fn rule(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Rule,
            message: message.into(),
        }
    }

    pub fn invariant(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Invariant,
            message: message.into(),
        }
    }
}

impl miette::Diagnostic for ValidationError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.kind.code()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self.kind {
            ErrorKind::Invariant => Some(Box::new("this is a bug in the frontend that produced the declaration")),
            ErrorKind::Structural | ErrorKind::Rule => None,
        }
    }
}

// Message constructors. Wording is user facing and stable.

pub(crate) fn abstract_converter(name: &str) -> ValidationError {
    ValidationError::rule(format!("Converter class({}) must not be an abstract class or interface", name))
}

pub(crate) fn converter_without_default_constructor(name: &str) -> ValidationError {
    ValidationError::rule(format!("Converter class({}) must provide a default constructor", name))
}

pub(crate) fn unsupported_store_type(ty: &impl fmt::Display) -> ValidationError {
    ValidationError::rule(format!("Type({}) is not allowed to store the preferences", ty))
}

pub(crate) fn not_abstract_type(name: &str) -> ValidationError {
    ValidationError::rule(format!("Type({}) must be an interface or an abstract class", name))
}

pub(crate) fn class_without_default_constructor(name: &str) -> ValidationError {
    ValidationError::rule(format!("Abstract class({}) must provide a default constructor", name))
}

pub(crate) fn incompatible_equals_hash_code(name: &str) -> ValidationError {
    ValidationError::rule(format!("Type({}) must define both equals and hashCode, or neither", name))
}

pub(crate) fn accessor_with_parameters(name: &str) -> ValidationError {
    ValidationError::rule(format!("Method({}) must not take parameters", name))
}

pub(crate) fn accessor_without_return(name: &str) -> ValidationError {
    ValidationError::rule(format!("Method({}) must return a value", name))
}

pub(crate) fn duplicate_field(field: &str, first: &str, second: &str) -> ValidationError {
    ValidationError::rule(format!(
        "Field({}) is derived from both {} and {}",
        field, first, second
    ))
}

pub(crate) fn invalid_field_name(field: &str, accessor: &str) -> ValidationError {
    ValidationError::rule(format!(
        "Field({}) derived from {} is not a valid identifier",
        field, accessor
    ))
}

pub(crate) fn property_needs_converter(accessor: &str, ty: &impl fmt::Display) -> ValidationError {
    ValidationError::rule(format!(
        "Type({}) of property({}) is not allowed to store the preferences without a converter",
        ty, accessor
    ))
}

pub(crate) fn converter_type_mismatch(
    converter: &str,
    converted: &impl fmt::Display,
    accessor: &str,
    declared: &impl fmt::Display,
) -> ValidationError {
    ValidationError::rule(format!(
        "Converter class({}) converts to {} but property({}) is {}",
        converter, converted, accessor, declared
    ))
}

pub(crate) fn invalid_default(accessor: &str, reason: &impl fmt::Display) -> ValidationError {
    ValidationError::rule(format!("Property({}) has an invalid default: {}", accessor, reason))
}

pub(crate) fn empty_key(accessor: &str) -> ValidationError {
    ValidationError::structural(format!("Property({}) must define a non-empty key", accessor))
}

pub(crate) fn unknown_converter(name: &str) -> ValidationError {
    ValidationError::structural(format!("Converter class({}) is not declared", name))
}

pub(crate) fn converter_without_interface(name: &str) -> ValidationError {
    ValidationError::structural(format!(
        "Converter class({}) must implement Converter<Converted, Supported>",
        name
    ))
}

pub(crate) fn invalid_type_expression(text: &str, reason: &impl fmt::Display) -> ValidationError {
    ValidationError::structural(format!("Type expression `{}` is invalid: {}", text, reason))
}

pub(crate) fn wrong_type_arity(ty: &str, expected: usize, found: usize) -> ValidationError {
    ValidationError::structural(format!(
        "Type({}) takes {} type argument(s) but {} were given",
        ty, expected, found
    ))
}

pub(crate) fn mirror_not_declared_type(expr: &impl fmt::Display) -> ValidationError {
    ValidationError::invariant(format!("Converter type({}) is not a declared type", expr))
}

#[cfg(test)]
mod tests {
    use super::*;
    use miette::Diagnostic;

    #[test]
    fn message_is_displayed_verbatim() {
        let err = abstract_converter("DateConverter");
        assert_eq!(
            err.to_string(),
            "Converter class(DateConverter) must not be an abstract class or interface"
        );
        assert_eq!(err.kind, ErrorKind::Rule);
    }

    #[test]
    fn diagnostic_code_follows_kind() {
        let err = unknown_converter("X");
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("prefsmith::structural"));
        assert!(err.help().is_none());

        let invariant = mirror_not_declared_type(&"i32");
        assert_eq!(invariant.code().map(|c| c.to_string()).as_deref(), Some("prefsmith::invariant"));
        assert!(invariant.help().is_some());
    }
}
