//! Property rules.

use std::collections::HashMap;

use prefsmith_core::naming::is_identifier;

use crate::metadata::{ClassDescriptor, PropertyDescriptor};

use super::{ConverterValidator, ValidationError, Validator, errors};

/// Rejects properties that cannot be stored, converted or named.
pub struct PropertyValidator;

impl PropertyValidator {
    fn validate_property(&self, property: &PropertyDescriptor) -> Result<(), ValidationError> {
        if property.parameter_count > 0 {
            return Err(errors::accessor_with_parameters(&property.accessor_name));
        }
        if !is_identifier(&property.field_name) {
            return Err(errors::invalid_field_name(&property.field_name, &property.accessor_name));
        }

        ConverterValidator.validate(&property.converter)?;

        let converter = &property.converter;
        if converter.is_default {
            if !property.value_type.is_storable() {
                return Err(errors::property_needs_converter(
                    &property.accessor_name,
                    &property.value_type,
                ));
            }
        } else if converter.converted_type != property.value_type {
            return Err(errors::converter_type_mismatch(
                &converter.simple_name,
                &converter.converted_type,
                &property.accessor_name,
                &property.value_type,
            ));
        }
        Ok(())
    }
}

impl Validator<ClassDescriptor> for PropertyValidator {
    fn validate(&self, class: &ClassDescriptor) -> Result<(), ValidationError> {
        for property in &class.properties {
            self.validate_property(property)?;
        }

        let mut fields: HashMap<&str, &str> = HashMap::new();
        for property in &class.properties {
            if let Some(first) = fields.insert(&property.field_name, &property.accessor_name) {
                return Err(errors::duplicate_field(&property.field_name, first, &property.accessor_name));
            }
        }
        Ok(())
    }
}
