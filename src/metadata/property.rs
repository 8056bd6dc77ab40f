//! Property descriptors.

use prefsmith_core::derive_field_name;

use crate::config::GeneratorConfig;
use crate::frontend::TypeUniverse;
use crate::frontend::raw::{RawDirective, RawMethod};
use crate::validation::ValidationError;
use crate::validation::errors;

use super::{ConverterDescriptor, ValueType, resolve_converter};

/// Return type spellings that mean "no value".
const UNIT_SPELLINGS: &[&str] = &["()", "void", ""];

/// One accessor standing for a persisted property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDescriptor {
    /// Accessor name as declared (`getUserName`)
    pub accessor_name: String,
    /// Storage field name derived from the accessor (`userName`)
    pub field_name: String,
    pub value_type: ValueType,
    /// Number of parameters the accessor declares; a valid accessor has none
    pub parameter_count: usize,
    /// Storage key, never empty
    pub key: String,
    /// Default value literal, un-parsed
    pub default_value: Option<String>,
    pub converter: ConverterDescriptor,
}

impl PropertyDescriptor {
    /// The type read from and written to the store.
    pub fn storage_type(&self) -> &ValueType {
        &self.converter.supported_type
    }
}

/// Build the descriptor of one accessor carrying a property directive.
pub fn build_property_descriptor(
    method: &RawMethod,
    directive: &RawDirective,
    universe: &TypeUniverse<'_>,
    config: &GeneratorConfig,
) -> Result<PropertyDescriptor, ValidationError> {
    let return_type = method
        .return_type
        .as_deref()
        .map(str::trim)
        .filter(|ty| !UNIT_SPELLINGS.contains(ty))
        .ok_or_else(|| errors::accessor_without_return(&method.name))?;
    let value_type = ValueType::parse(return_type)?;
    let key = resolve_key(directive).ok_or_else(|| errors::empty_key(&method.name))?;
    let default_value = Some(directive.def_value.clone()).filter(|v| !v.is_empty());
    let converter = resolve_converter(directive, &value_type, universe, config)?;

    Ok(PropertyDescriptor {
        accessor_name: method.name.clone(),
        field_name: derive_field_name(&method.name, config.field_case),
        value_type,
        parameter_count: method.parameters.len(),
        key,
        default_value,
        converter,
    })
}

/// `value` wins over `key`; the accessor name is never a fallback.
fn resolve_key(directive: &RawDirective) -> Option<String> {
    [&directive.value, &directive.key]
        .into_iter()
        .find(|k| !k.is_empty())
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::raw::RawTypeDecl;
    use crate::validation::ErrorKind;

    fn accessor(name: &str, return_type: &str) -> RawMethod {
        RawMethod {
            name: name.to_string(),
            return_type: Some(return_type.to_string()),
            is_abstract: true,
            ..RawMethod::default()
        }
    }

    fn build(method: &RawMethod, directive: &RawDirective) -> Result<PropertyDescriptor, ValidationError> {
        let types: Vec<RawTypeDecl> = Vec::new();
        let universe = TypeUniverse::new(&types);
        build_property_descriptor(method, directive, &universe, &GeneratorConfig::default())
    }

    #[test]
    fn user_name_example() {
        let directive = RawDirective {
            key: "user_name".to_string(),
            ..RawDirective::default()
        };
        let property = build(&accessor("getUserName", "String"), &directive).unwrap();
        assert_eq!(property.field_name, "userName");
        assert_eq!(property.key, "user_name");
        assert_eq!(property.default_value, None);
        assert!(property.converter.is_default);
        assert_eq!(property.storage_type(), &ValueType::String);
    }

    #[test]
    fn value_wins_over_key() {
        let directive = RawDirective {
            key: "from_key".to_string(),
            value: "from_value".to_string(),
            def_value: "true".to_string(),
            ..RawDirective::default()
        };
        let property = build(&accessor("isEnabled", "bool"), &directive).unwrap();
        assert_eq!(property.key, "from_value");
        assert_eq!(property.field_name, "enabled");
        assert_eq!(property.default_value.as_deref(), Some("true"));
    }

    #[test]
    fn accessor_name_is_never_the_key() {
        let err = build(&accessor("getCount", "i32"), &RawDirective::default()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Structural);
        assert_eq!(err.message, "Property(getCount) must define a non-empty key");
    }

    #[test]
    fn void_accessor_is_rejected() {
        let directive = RawDirective {
            key: "k".to_string(),
            ..RawDirective::default()
        };
        let mut method = accessor("reset", "void");
        assert_eq!(build(&method, &directive).unwrap_err().message, "Method(reset) must return a value");
        method.return_type = None;
        assert!(build(&method, &directive).is_err());
    }

    #[test]
    fn parameters_are_recorded_not_rejected() {
        let directive = RawDirective {
            key: "k".to_string(),
            ..RawDirective::default()
        };
        let mut method = accessor("getName", "String");
        method.parameters.push("i32".to_string());
        assert_eq!(build(&method, &directive).unwrap().parameter_count, 1);
    }
}
