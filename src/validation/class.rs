//! Class rules.

use crate::metadata::ClassDescriptor;

use super::{ValidationError, Validator, errors};

/// Rejects declared types that cannot be implemented by a generated class.
pub struct ClassValidator;

impl Validator<ClassDescriptor> for ClassValidator {
    fn validate(&self, class: &ClassDescriptor) -> Result<(), ValidationError> {
        if !(class.is_interface() || (class.is_class() && class.is_abstract)) {
            return Err(errors::not_abstract_type(&class.simple_name));
        }
        if class.is_class() && !class.has_accessible_default_constructor {
            return Err(errors::class_without_default_constructor(&class.simple_name));
        }
        if class.defines_equals != class.defines_hash_code {
            return Err(errors::incompatible_equals_hash_code(&class.simple_name));
        }
        Ok(())
    }
}
