//! Concrete-class intermediate representation
//!
//! The generation engine derives a [`GeneratedClassSpec`] from a validated class descriptor; backends turn it into
//! source code. The IR is:
//!
//! - **Typed**: every expression carries its resolved type
//! - **Structured**: method bodies are ordered statement vectors, never text
//! - **Backend-neutral**: roles ([`MethodRole`]) tell a backend what a method is for, so it can map equality and
//!   hashing onto its own conventions
//!
//! ## Pipeline
//!
//! ```text
//! ClassDescriptor → generate → GeneratedClassSpec → emit (Rust) / eval (tests) / render (text)
//! ```

pub mod decl;
pub mod emit;
pub mod eval;
pub mod expr;
pub mod literal;
pub mod render;
pub mod stmt;
pub mod types;

pub use decl::{IrConstructor, IrField, IrMethod, IrParam, MethodRole, Visibility};
pub use emit::{EmitError, RustEmitter, emit_class};
pub use eval::{EvalError, EvalStore, Evaluator, Value};
pub use expr::{ConvertDirection, IrExpr, IrExprKind, TypedExpr};
pub use literal::{DefaultLiteralValidator, LiteralError, StoreLiteral, parse_default};
pub use stmt::IrStmt;
pub use types::IrType;

/// The concrete class generated for one declared type.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedClassSpec {
    /// Generated class name (`SettingsImpl`)
    pub name: String,
    /// Simple name of the declared type (`Settings`)
    pub declared_name: String,
    /// Qualified name of the declared type
    pub declared_qualified_name: String,
    /// Declared abstract class being extended
    pub supertype: Option<String>,
    /// Declared interfaces being implemented
    pub interfaces: Vec<String>,
    /// Fields in property declaration order
    pub fields: Vec<IrField>,
    pub constructor: IrConstructor,
    /// Methods in generation order: equality, hashing, string form, accessors, store I/O
    pub methods: Vec<IrMethod>,
}

impl GeneratedClassSpec {
    /// Return the first method with the given name.
    pub fn method(&self, name: &str) -> Option<&IrMethod> {
        self.methods.iter().find(|m| m.name == name)
    }

    /// Return the method generated for a role.
    pub fn method_with_role(&self, role: &MethodRole) -> Option<&IrMethod> {
        self.methods.iter().find(|m| &m.role == role)
    }

    pub fn field(&self, name: &str) -> Option<&IrField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Accessor methods, in property order.
    pub fn accessors(&self) -> impl Iterator<Item = &IrMethod> {
        self.methods
            .iter()
            .filter(|m| matches!(m.role, MethodRole::Accessor { .. }))
    }
}
