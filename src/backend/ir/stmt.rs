//! IR statement definitions

use super::IrExpr;

/// An IR statement
#[derive(Debug, Clone, PartialEq)]
pub enum IrStmt {
    /// Expression statement (expr;)
    Expr(IrExpr),

    /// Immutable local binding
    Let { name: String, value: IrExpr },

    /// Field initialization (`this.field = value`)
    AssignField { field: String, value: IrExpr },

    /// Return statement
    Return(IrExpr),

    /// If statement without else
    If { condition: IrExpr, then_branch: Vec<IrStmt> },
}

impl IrStmt {
    /// `if condition { return value }`
    pub fn return_if(condition: IrExpr, value: IrExpr) -> Self {
        IrStmt::If {
            condition,
            then_branch: vec![IrStmt::Return(value)],
        }
    }
}
