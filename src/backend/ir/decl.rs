//! IR declaration definitions

use super::{IrStmt, IrType};

/// Visibility of a member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Public,
    Private,
}

/// A storage field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IrField {
    pub name: String,
    pub ty: IrType,
    pub visibility: Visibility,
    pub is_final: bool,
}

/// A constructor or method parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IrParam {
    pub name: String,
    pub ty: IrType,
    /// Parameters that are neither primitive nor optional are annotated as never null
    pub non_null: bool,
}

impl IrParam {
    pub fn new(name: impl Into<String>, ty: IrType) -> Self {
        let non_null = !ty.is_primitive() && !matches!(ty, IrType::Option(_));
        Self {
            name: name.into(),
            ty,
            non_null,
        }
    }
}

/// The constructor of the generated class
#[derive(Debug, Clone, PartialEq)]
pub struct IrConstructor {
    pub visibility: Visibility,
    pub params: Vec<IrParam>,
    pub body: Vec<IrStmt>,
}

/// What a generated method is for.
///
/// Backends that cannot render a method as a plain function (equality and hashing become trait impls in Rust)
/// dispatch on this.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MethodRole {
    Equals,
    HashCode,
    ToString,
    /// Override of a declared accessor; `field` names the backing field
    Accessor { field: String },
    /// Static constructor reading every property from a store
    Load,
    /// Writes every property to a store
    Save,
}

/// A generated method
#[derive(Debug, Clone, PartialEq)]
pub struct IrMethod {
    pub name: String,
    pub role: MethodRole,
    pub visibility: Visibility,
    pub is_static: bool,
    /// Overrides a method of the declared type (or of the root object type)
    pub is_override: bool,
    pub params: Vec<IrParam>,
    pub return_type: IrType,
    pub body: Vec<IrStmt>,
}
