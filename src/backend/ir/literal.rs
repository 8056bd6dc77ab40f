//! Default-value literals.
//!
//! Property directives carry their default as an un-typed string. Backends parse it against the property's store
//! type here, so the emitter and the evaluator accept exactly the same spellings.
//!
//! | store type        | accepted                                  |
//! |-------------------|-------------------------------------------|
//! | `bool`            | `true`, `false`                           |
//! | `i32`             | decimal integer                           |
//! | `i64`             | decimal integer, optional `L` suffix      |
//! | `f32`             | decimal float, optional `f` suffix        |
//! | `String`          | anything, verbatim                        |
//! | `HashSet<String>` | comma-separated items, trimmed, no empties |

use prefsmith_core::lang::store_types::{self, StoreTypeId};

use crate::metadata::ClassDescriptor;
use crate::validation::{ValidationError, Validator, errors};

/// A parsed default value.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreLiteral {
    Bool(bool),
    Int(i32),
    Long(i64),
    Float(f32),
    String(String),
    StringSet(Vec<String>),
}

/// Error while parsing a default literal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("default value `{literal}` is not a valid {expected}")]
pub struct LiteralError {
    pub literal: String,
    pub expected: &'static str,
}

/// Parse a default literal, or the store type's own default when none is given.
pub fn parse_default(store_type: StoreTypeId, literal: Option<&str>) -> Result<StoreLiteral, LiteralError> {
    let info = store_types::info(store_type);
    let raw = literal.unwrap_or(info.default_literal);
    let invalid = || LiteralError {
        literal: raw.to_string(),
        expected: info.spelling,
    };

    match store_type {
        StoreTypeId::Bool => match raw.trim() {
            "true" => Ok(StoreLiteral::Bool(true)),
            "false" => Ok(StoreLiteral::Bool(false)),
            _ => Err(invalid()),
        },
        StoreTypeId::Int => raw.trim().parse().map(StoreLiteral::Int).map_err(|_| invalid()),
        StoreTypeId::Long => {
            let digits = raw.trim().trim_end_matches(['L', 'l']);
            digits.parse().map(StoreLiteral::Long).map_err(|_| invalid())
        }
        StoreTypeId::Float => {
            let digits = raw.trim().trim_end_matches(['f', 'F']);
            match digits.parse::<f32>() {
                Ok(value) if value.is_finite() => Ok(StoreLiteral::Float(value)),
                _ => Err(invalid()),
            }
        }
        StoreTypeId::String => Ok(StoreLiteral::String(raw.to_string())),
        StoreTypeId::StringSet => Ok(StoreLiteral::StringSet(
            raw.split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect(),
        )),
    }
}

/// Rejects declared defaults the store type cannot parse, so `check` fails where generation would.
pub struct DefaultLiteralValidator;

impl Validator<ClassDescriptor> for DefaultLiteralValidator {
    fn validate(&self, target: &ClassDescriptor) -> Result<(), ValidationError> {
        for property in &target.properties {
            let (Some(default), Some(store_type)) = (&property.default_value, property.storage_type().store_type())
            else {
                continue;
            };
            parse_default(store_type, Some(default.as_str()))
                .map_err(|err| errors::invalid_default(&property.accessor_name, &err))?;
        }
        Ok(())
    }
}
