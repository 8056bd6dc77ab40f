//! Normalized property types.
//!
//! A [`ValueType`] is a [`TypeExpr`] with builtin spellings resolved through the core vocabulary, so aliases
//! (`List<String>`, `Vec<String>`) compare equal and storability is decided in one place.

use std::fmt;

use prefsmith_core::lang::store_types::{self, StoreTypeId};
use prefsmith_core::lang::types::{self, ContainerId, PrimitiveId};

use crate::frontend::TypeExpr;
use crate::validation::ValidationError;
use crate::validation::errors;

/// The declared type of a property, or either side of a converter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValueType {
    Primitive(PrimitiveId),
    String,
    /// A value that may be absent
    Nullable(Box<ValueType>),
    Container {
        container: ContainerId,
        args: Vec<ValueType>,
    },
    /// Any user type, kept as written
    Declared {
        name: String,
        args: Vec<ValueType>,
    },
}

impl ValueType {
    /// Parse and normalize a type expression.
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        let expr = TypeExpr::parse(text).map_err(|e| errors::invalid_type_expression(text, &e))?;
        Self::from_expr(&expr)
    }

    /// Normalize a parsed type expression.
    pub fn from_expr(expr: &TypeExpr) -> Result<Self, ValidationError> {
        let name = expr.name.as_str();
        if let Some(id) = types::primitive_from_str(name) {
            expect_arity(expr, 0)?;
            return Ok(ValueType::Primitive(id));
        }
        if types::is_string(name) {
            expect_arity(expr, 0)?;
            return Ok(ValueType::String);
        }
        if name == types::OPTION_TYPE {
            expect_arity(expr, 1)?;
            return Ok(ValueType::Nullable(Box::new(Self::from_expr(&expr.args[0])?)));
        }
        if let Some(container) = types::container_from_str(name) {
            expect_arity(expr, container.family().arity())?;
            let args = expr.args.iter().map(Self::from_expr).collect::<Result<_, _>>()?;
            return Ok(ValueType::Container { container, args });
        }
        let args = expr.args.iter().map(Self::from_expr).collect::<Result<_, _>>()?;
        Ok(ValueType::Declared {
            name: expr.name.clone(),
            args,
        })
    }

    /// The native store type this value is persisted as, if it needs no converter.
    pub fn store_type(&self) -> Option<StoreTypeId> {
        store_types::from_spelling(&self.to_string())
    }

    pub fn is_storable(&self) -> bool {
        self.store_type().is_some()
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, ValueType::Primitive(_))
    }

    pub fn is_declared(&self) -> bool {
        matches!(self, ValueType::Declared { .. })
    }

    /// Whether values of this type need a defensive copy when stored or returned.
    pub fn is_mutable_container(&self) -> bool {
        matches!(self, ValueType::Container { container, .. } if container.is_mutable())
    }

    /// The natively storable set of strings.
    pub fn string_set() -> Self {
        ValueType::Container {
            container: ContainerId::HashSet,
            args: vec![ValueType::String],
        }
    }
}

fn expect_arity(expr: &TypeExpr, expected: usize) -> Result<(), ValidationError> {
    if expr.args.len() == expected {
        Ok(())
    } else {
        Err(errors::wrong_type_arity(&expr.name, expected, expr.args.len()))
    }
}

fn write_args(f: &mut fmt::Formatter<'_>, args: &[ValueType]) -> fmt::Result {
    if args.is_empty() {
        return Ok(());
    }
    f.write_str("<")?;
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", arg)?;
    }
    f.write_str(">")
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::Primitive(id) => f.write_str(types::primitive_as_str(*id)),
            ValueType::String => f.write_str(types::STRING_TYPE),
            ValueType::Nullable(inner) => write!(f, "{}<{}>", types::OPTION_TYPE, inner),
            ValueType::Container { container, args } => {
                f.write_str(container.as_str())?;
                write_args(f, args)
            }
            ValueType::Declared { name, args } => {
                f.write_str(name)?;
                write_args(f, args)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ErrorKind;

    #[test]
    fn aliases_normalize_to_canonical_spelling() {
        assert_eq!(ValueType::parse("List<string>").unwrap().to_string(), "Vec<String>");
        assert_eq!(ValueType::parse("long").unwrap(), ValueType::Primitive(PrimitiveId::I64));
        assert_eq!(ValueType::parse("Set<String>").unwrap(), ValueType::string_set());
    }

    #[test]
    fn storable_types() {
        for text in ["bool", "boolean", "int", "i64", "float", "String", "HashSet<String>", "Set<string>"] {
            assert!(ValueType::parse(text).unwrap().is_storable(), "{text}");
        }
        for text in ["f64", "char", "Vec<String>", "HashSet<i32>", "Option<String>", "Date"] {
            assert!(!ValueType::parse(text).unwrap().is_storable(), "{text}");
        }
        assert_eq!(ValueType::parse("int").unwrap().store_type(), Some(StoreTypeId::Int));
    }

    #[test]
    fn declared_types_keep_their_name() {
        let ty = ValueType::parse("java.util.Date").unwrap();
        assert!(ty.is_declared());
        assert_eq!(ty.to_string(), "java.util.Date");
    }

    #[test]
    fn mutable_containers_are_flagged() {
        let ty = ValueType::parse("HashMap<String, i32>").unwrap();
        assert!(ty.is_mutable_container());
        assert!(!ValueType::parse("FrozenMap<String, i32>").unwrap().is_mutable_container());
        assert!(!ValueType::String.is_mutable_container());
    }

    #[test]
    fn arity_is_checked() {
        let err = ValueType::parse("Vec<String, String>").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Structural);
        assert!(err.message.contains("takes 1 type argument"));
        assert!(ValueType::parse("i32<String>").is_err());
    }

    #[test]
    fn malformed_expression_is_structural() {
        let err = ValueType::parse("Vec<").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Structural);
    }
}
