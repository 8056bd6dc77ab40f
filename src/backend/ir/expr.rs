//! IR expression definitions.
//!
//! Every construct generated method bodies need has its own variant (identity check, hash fold, defensive copy,
//! store access, conversion), so the emitter and the evaluator match exhaustively instead of pattern-matching on
//! method names.

use prefsmith_core::lang::store_types::StoreTypeId;
use prefsmith_core::lang::types::ContainerId;

use super::IrType;

/// A typed expression in IR
#[derive(Debug, Clone, PartialEq)]
pub struct TypedExpr {
    pub kind: IrExprKind,
    /// Resolved type
    pub ty: IrType,
}

impl TypedExpr {
    pub fn new(kind: IrExprKind, ty: IrType) -> Self {
        Self { kind, ty }
    }
}

/// IR expression (alias for TypedExpr for convenience)
pub type IrExpr = TypedExpr;

/// Direction of a converter call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConvertDirection {
    /// Store value → property value
    ToConverted,
    /// Property value → store value
    ToSupported,
}

/// Expression kinds in IR
#[derive(Debug, Clone, PartialEq)]
pub enum IrExprKind {
    BoolLit(bool),
    StrLit(String),

    /// The receiver
    This,
    /// A method or constructor parameter
    Param(String),
    /// A local binding
    Local(String),
    /// A field of the receiver
    Field(String),

    /// `this` and the operand are the same instance
    Identity(Box<IrExpr>),
    /// The operand is an instance of the named declared type
    InstanceOf { value: Box<IrExpr>, type_name: String },
    Not(Box<IrExpr>),
    /// View the operand as the named declared type
    Cast { value: Box<IrExpr>, type_name: String },
    /// Call a declared accessor on a target
    AccessorCall { target: Box<IrExpr>, accessor: String },
    /// Value equality
    Eq(Box<IrExpr>, Box<IrExpr>),
    /// Short-circuit conjunction; empty means true
    And(Vec<IrExpr>),
    /// `acc = seed; for v in values { acc = acc * multiplier + hash(v) }`
    HashFold {
        seed: i32,
        multiplier: i32,
        values: Vec<IrExpr>,
    },
    /// `Name{field=value, ...}`
    Describe { name: String, entries: Vec<(String, IrExpr)> },
    /// Immutable copy of a mutable container
    Unmodifiable { value: Box<IrExpr>, container: ContainerId },
    /// Read a value from the store, falling back to the default literal (or the store type's default)
    StoreGet {
        store: Box<IrExpr>,
        store_type: StoreTypeId,
        key: String,
        default: Option<String>,
    },
    /// Write a value to the store
    StorePut {
        store: Box<IrExpr>,
        store_type: StoreTypeId,
        key: String,
        value: Box<IrExpr>,
    },
    /// Pass a value through a converter
    Convert {
        converter: String,
        direction: ConvertDirection,
        /// Property-side type
        converted: IrType,
        /// Store-side type
        supported: IrType,
        value: Box<IrExpr>,
    },
    /// Construct the generated class
    New(Vec<IrExpr>),
}

impl TypedExpr {
    pub fn bool_lit(value: bool) -> Self {
        Self::new(IrExprKind::BoolLit(value), IrType::bool())
    }

    pub fn this() -> Self {
        Self::new(IrExprKind::This, IrType::SelfType)
    }

    pub fn param(name: impl Into<String>, ty: IrType) -> Self {
        Self::new(IrExprKind::Param(name.into()), ty)
    }

    pub fn local(name: impl Into<String>, ty: IrType) -> Self {
        Self::new(IrExprKind::Local(name.into()), ty)
    }

    pub fn field(name: impl Into<String>, ty: IrType) -> Self {
        Self::new(IrExprKind::Field(name.into()), ty)
    }

    pub fn not(value: IrExpr) -> Self {
        Self::new(IrExprKind::Not(Box::new(value)), IrType::bool())
    }

    pub fn eq(left: IrExpr, right: IrExpr) -> Self {
        Self::new(IrExprKind::Eq(Box::new(left), Box::new(right)), IrType::bool())
    }

    /// Wrap in a defensive copy when the type is a mutable container.
    pub fn unmodifiable(self) -> Self {
        match self.ty.container() {
            Some(container) if container.is_mutable() => {
                let ty = self.ty.clone();
                Self::new(
                    IrExprKind::Unmodifiable {
                        value: Box::new(self),
                        container,
                    },
                    ty,
                )
            }
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmodifiable_wraps_only_mutable_containers() {
        let list = IrType::Container {
            container: ContainerId::Vec,
            args: vec![IrType::String],
        };
        let wrapped = IrExpr::param("tags", list.clone()).unmodifiable();
        assert!(matches!(wrapped.kind, IrExprKind::Unmodifiable { container: ContainerId::Vec, .. }));
        assert_eq!(wrapped.ty, list);

        let frozen = IrType::Container {
            container: ContainerId::FrozenList,
            args: vec![IrType::String],
        };
        assert!(matches!(
            IrExpr::param("tags", frozen).unmodifiable().kind,
            IrExprKind::Param(_)
        ));
        assert!(matches!(IrExpr::param("name", IrType::String).unmodifiable().kind, IrExprKind::Param(_)));
    }
}
