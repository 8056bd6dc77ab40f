//! Statement emission for IR to Rust code generation

use proc_macro2::TokenStream;
use quote::quote;

use super::super::expr::IrExprKind;
use super::super::stmt::IrStmt;
use super::types::member_ident;
use super::{EmitError, RustEmitter};

/// A condition whose value is known when the receiver is typed `&Self`.
fn static_condition(kind: &IrExprKind) -> Option<bool> {
    match kind {
        IrExprKind::InstanceOf { .. } => Some(true),
        IrExprKind::Not(inner) => static_condition(&inner.kind).map(|value| !value),
        _ => None,
    }
}

impl RustEmitter<'_> {
    /// Emit a function body. A trailing `return` becomes the tail expression.
    pub(super) fn emit_body(&self, body: &[IrStmt]) -> Result<TokenStream, EmitError> {
        let stmts = self.emit_block(body, true)?;
        Ok(quote! { #(#stmts)* })
    }

    fn emit_block(&self, body: &[IrStmt], is_tail: bool) -> Result<Vec<TokenStream>, EmitError> {
        let mut out = Vec::with_capacity(body.len());
        for (i, stmt) in body.iter().enumerate() {
            let last = is_tail && i + 1 == body.len();
            out.extend(self.emit_stmt(stmt, last)?);
        }
        Ok(out)
    }

    fn emit_stmt(&self, stmt: &IrStmt, is_tail: bool) -> Result<Vec<TokenStream>, EmitError> {
        let tokens = match stmt {
            IrStmt::Expr(expr) => {
                let expr = self.emit_expr(expr)?;
                quote! { #expr; }
            }
            IrStmt::Let { name, value } => {
                let name = member_ident(name);
                let value = self.emit_expr(value)?;
                quote! { let #name = #value; }
            }
            IrStmt::AssignField { field, value } => {
                let field = member_ident(field);
                let value = self.emit_expr(value)?;
                quote! { self.#field = #value; }
            }
            IrStmt::Return(value) => {
                let value = self.emit_expr(value)?;
                if is_tail {
                    quote! { #value }
                } else {
                    quote! { return #value; }
                }
            }
            IrStmt::If {
                condition,
                then_branch,
            } => match static_condition(&condition.kind) {
                Some(true) => return self.emit_block(then_branch, is_tail),
                Some(false) => return Ok(Vec::new()),
                None => {
                    let condition = self.emit_expr(condition)?;
                    let then_branch = self.emit_block(then_branch, false)?;
                    quote! {
                        if #condition {
                            #(#then_branch)*
                        }
                    }
                }
            },
        };
        Ok(vec![tokens])
    }
}
