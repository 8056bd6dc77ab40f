//! IR type definitions
//!
//! These types are lowered from [`ValueType`] plus the handful of types only generated code refers to (the store,
//! the generated class itself, the declared type).

use std::fmt;

use prefsmith_core::lang::types::{self as core_types, ContainerId, PrimitiveId};

use crate::metadata::ValueType;

/// IR type representation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum IrType {
    #[default]
    Unit,
    Primitive(PrimitiveId),
    String,
    Option(Box<IrType>),
    Container {
        container: ContainerId,
        args: Vec<IrType>,
    },
    /// A user type by name (declared type, converter value type)
    Named {
        name: String,
        args: Vec<IrType>,
    },
    /// The generated class
    SelfType,
    /// Any value; only the `equals` parameter has this type
    Any,
    /// The preference store
    Store,
}

impl IrType {
    pub fn bool() -> Self {
        IrType::Primitive(PrimitiveId::Bool)
    }

    pub fn i32() -> Self {
        IrType::Primitive(PrimitiveId::I32)
    }

    pub fn named(name: impl Into<String>) -> Self {
        IrType::Named {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Whether values of this type are implicitly copied (no clone needed when read through `&self`).
    pub fn is_copy(&self) -> bool {
        matches!(self, IrType::Primitive(_) | IrType::Unit)
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, IrType::Primitive(_))
    }

    /// The container of a container type.
    pub fn container(&self) -> Option<ContainerId> {
        match self {
            IrType::Container { container, .. } => Some(*container),
            _ => None,
        }
    }
}

impl From<&ValueType> for IrType {
    fn from(ty: &ValueType) -> Self {
        match ty {
            ValueType::Primitive(id) => IrType::Primitive(*id),
            ValueType::String => IrType::String,
            ValueType::Nullable(inner) => IrType::Option(Box::new(IrType::from(inner.as_ref()))),
            ValueType::Container { container, args } => IrType::Container {
                container: *container,
                args: args.iter().map(IrType::from).collect(),
            },
            ValueType::Declared { name, args } => IrType::Named {
                name: name.clone(),
                args: args.iter().map(IrType::from).collect(),
            },
        }
    }
}

fn write_args(f: &mut fmt::Formatter<'_>, args: &[IrType]) -> fmt::Result {
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

impl fmt::Display for IrType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IrType::Unit => f.write_str("()"),
            IrType::Primitive(id) => f.write_str(core_types::primitive_as_str(*id)),
            IrType::String => f.write_str(core_types::STRING_TYPE),
            IrType::Option(inner) => write!(f, "{}<{}>", core_types::OPTION_TYPE, inner),
            IrType::Container { container, args } => {
                f.write_str(container.as_str())?;
                write_args(f, args)
            }
            IrType::Named { name, args } => {
                f.write_str(name)?;
                write_args(f, args)
            }
            IrType::SelfType => f.write_str("Self"),
            IrType::Any => f.write_str("Any"),
            IrType::Store => f.write_str("Store"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowered_types_keep_canonical_spelling() {
        for text in ["bool", "Option<String>", "HashMap<String, Vec<i64>>", "app::Date"] {
            let value = ValueType::parse(text).unwrap();
            assert_eq!(IrType::from(&value).to_string(), value.to_string());
        }
    }

    #[test]
    fn only_primitives_are_copy() {
        assert!(IrType::i32().is_copy());
        assert!(!IrType::String.is_copy());
        assert!(!IrType::named("Date").is_copy());
    }
}
