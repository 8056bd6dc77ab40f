//! Validation engine
//!
//! An ordered chain of rule checkers run over a [`ClassDescriptor`] before generation. The first failing rule ends
//! the pass for that declared type; no errors are aggregated.
//!
//! Order: class rules, then each property in declaration order (accessor shape, converter, type agreement), then
//! field-name uniqueness.

pub mod class;
pub mod converter;
pub mod errors;
pub mod property;

pub use class::ClassValidator;
pub use converter::ConverterValidator;
pub use errors::{ErrorKind, ValidationError};
pub use property::PropertyValidator;

use crate::metadata::ClassDescriptor;

/// A rule checker over one kind of descriptor.
pub trait Validator<T: ?Sized> {
    fn validate(&self, target: &T) -> Result<(), ValidationError>;
}

/// The ordered chain of class-level validators.
pub struct ValidationChain {
    validators: Vec<Box<dyn Validator<ClassDescriptor>>>,
}

impl Default for ValidationChain {
    fn default() -> Self {
        Self {
            validators: vec![Box::new(ClassValidator), Box::new(PropertyValidator)],
        }
    }
}

impl ValidationChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a validator run after the built-in ones.
    pub fn with(mut self, validator: impl Validator<ClassDescriptor> + 'static) -> Self {
        self.validators.push(Box::new(validator));
        self
    }
}

impl Validator<ClassDescriptor> for ValidationChain {
    fn validate(&self, target: &ClassDescriptor) -> Result<(), ValidationError> {
        self.validators.iter().try_for_each(|v| v.validate(target))
    }
}

/// Run the default chain over a class descriptor.
#[tracing::instrument(level = "debug", skip_all, fields(ty = %descriptor.qualified_name))]
pub fn validate(descriptor: &ClassDescriptor) -> Result<(), ValidationError> {
    ValidationChain::default().validate(descriptor)
}
