//! Converter rules.

use prefsmith_core::lang::store_types;

use crate::metadata::ConverterDescriptor;

use super::{ValidationError, Validator, errors};

/// Rejects converters generated code cannot instantiate or whose store side the store cannot hold.
///
/// The identity converter is always accepted; whether the property type itself is storable is a property rule.
pub struct ConverterValidator;

impl Validator<ConverterDescriptor> for ConverterValidator {
    fn validate(&self, converter: &ConverterDescriptor) -> Result<(), ValidationError> {
        if converter.is_default {
            return Ok(());
        }
        if converter.is_abstract {
            return Err(errors::abstract_converter(&converter.simple_name));
        }
        if !converter.has_default_constructor {
            return Err(errors::converter_without_default_constructor(&converter.simple_name));
        }
        let supported = converter.supported_type.to_string();
        if !store_types::contains(&supported) {
            return Err(errors::unsupported_store_type(&supported));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::ValueType;

    fn converter() -> ConverterDescriptor {
        ConverterDescriptor {
            simple_name: "DateConverter".to_string(),
            qualified_name: "app::DateConverter".to_string(),
            is_default: false,
            is_abstract: false,
            has_default_constructor: true,
            supported_type: ValueType::parse("i64").unwrap(),
            converted_type: ValueType::parse("app::Date").unwrap(),
        }
    }

    #[test]
    fn concrete_converter_passes() {
        assert!(ConverterValidator.validate(&converter()).is_ok());
    }

    #[test]
    fn abstract_converter_fails_first() {
        let mut c = converter();
        c.is_abstract = true;
        c.has_default_constructor = false;
        assert_eq!(
            ConverterValidator.validate(&c).unwrap_err().message,
            "Converter class(DateConverter) must not be an abstract class or interface"
        );
    }

    #[test]
    fn missing_default_constructor() {
        let mut c = converter();
        c.has_default_constructor = false;
        assert_eq!(
            ConverterValidator.validate(&c).unwrap_err().message,
            "Converter class(DateConverter) must provide a default constructor"
        );
    }

    #[test]
    fn unsupported_store_side() {
        let mut c = converter();
        c.supported_type = ValueType::parse("f64").unwrap();
        assert_eq!(
            ConverterValidator.validate(&c).unwrap_err().message,
            "Type(f64) is not allowed to store the preferences"
        );
    }

    #[test]
    fn default_converter_is_never_rejected() {
        let mut c = converter();
        c.is_default = true;
        c.is_abstract = true;
        c.supported_type = ValueType::parse("f64").unwrap();
        assert!(ConverterValidator.validate(&c).is_ok());
    }
}
