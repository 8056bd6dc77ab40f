//! Item emission: the struct, its inherent impl and its trait impls.
//!
//! | IR                     | Rust                                               |
//! |------------------------|----------------------------------------------------|
//! | fields                 | private struct fields                              |
//! | constructor            | `pub fn new(..) -> Self`                           |
//! | `Load` / `Save`        | `pub fn load(&S) -> Self` / `pub fn save(&mut S)`  |
//! | `Accessor`             | methods of `impl Declared for XImpl`               |
//! | `Equals`               | `impl PartialEq`                                   |
//! | `HashCode`             | `impl HashCode` plus `impl Hash`                   |
//! | `ToString`             | `impl Display`                                     |

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use super::super::decl::{IrMethod, MethodRole};
use super::super::expr::IrExprKind;
use super::super::stmt::IrStmt;
use super::types::{member_ident, path_tokens};
use super::{EmitError, RustEmitter};

/// Constructors with more parameters than this trip `clippy::too_many_arguments`.
const CLIPPY_MAX_ARGS: usize = 7;

impl RustEmitter<'_> {
    pub(super) fn emit_struct(&self) -> TokenStream {
        let name = self.type_ident();
        let fields = self.spec.fields.iter().map(|field| {
            let ident = member_ident(&field.name);
            let ty = self.emit_type(&field.ty);
            quote! { #ident: #ty }
        });
        let doc = format!(" Generated implementation of `{}`.", self.spec.declared_qualified_name);
        quote! {
            #[doc = #doc]
            #[derive(Debug, Clone)]
            pub struct #name {
                #(#fields,)*
            }
        }
    }

    /// `new`, plus `load`/`save` when generated.
    pub(super) fn emit_inherent_impl(&self) -> Result<TokenStream, EmitError> {
        let name = self.type_ident();
        let constructor = self.emit_constructor()?;
        let store_methods = self
            .spec
            .methods
            .iter()
            .filter(|m| matches!(m.role, MethodRole::Load | MethodRole::Save))
            .map(|m| self.emit_store_method(m))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(quote! {
            impl #name {
                #constructor
                #(#store_methods)*
            }
        })
    }

    fn emit_constructor(&self) -> Result<TokenStream, EmitError> {
        let ctor = &self.spec.constructor;
        let params: Vec<_> = ctor
            .params
            .iter()
            .map(|param| {
                let ident = member_ident(&param.name);
                let ty = self.emit_type(&param.ty);
                quote! { #ident: #ty }
            })
            .collect();

        let mut inits = Vec::with_capacity(ctor.body.len());
        for stmt in &ctor.body {
            let IrStmt::AssignField { field, value } = stmt else {
                return Err(EmitError::Unsupported(
                    "constructor bodies may only assign fields".to_string(),
                ));
            };
            let ident = member_ident(field);
            let moved_param = match &value.kind {
                IrExprKind::Param(p) => member_ident(p) == ident,
                IrExprKind::Unmodifiable { value, .. } => {
                    matches!(&value.kind, IrExprKind::Param(p) if member_ident(p) == ident)
                }
                _ => false,
            };
            if moved_param {
                inits.push(quote! { #ident });
            } else {
                let value = self.emit_expr(value)?;
                inits.push(quote! { #ident: #value });
            }
        }

        let allow = (params.len() > CLIPPY_MAX_ARGS).then(|| quote! { #[allow(clippy::too_many_arguments)] });
        Ok(quote! {
            #allow
            pub fn new(#(#params),*) -> Self {
                Self { #(#inits),* }
            }
        })
    }

    fn emit_store_method(&self, method: &IrMethod) -> Result<TokenStream, EmitError> {
        let runtime = self.runtime();
        let name = member_ident(&method.name);
        let body = self.emit_body(&method.body)?;
        let store = method
            .params
            .first()
            .map(|param| member_ident(&param.name))
            .ok_or_else(|| EmitError::Unsupported(format!("`{}` takes no store parameter", method.name)))?;
        let bound = quote! { S: #runtime::PreferenceStore + ?Sized };

        Ok(if method.is_static {
            let ret = self.emit_type(&method.return_type);
            quote! {
                pub fn #name<#bound>(#store: &S) -> #ret {
                    #body
                }
            }
        } else {
            quote! {
                pub fn #name<#bound>(&self, #store: &mut S) {
                    #body
                }
            }
        })
    }

    /// Accessor overrides, as an impl of the declared trait.
    pub(super) fn emit_declared_impl(&self) -> Result<TokenStream, EmitError> {
        let name = self.type_ident();
        let declared = path_tokens(&self.spec.declared_qualified_name);
        let accessors = self
            .spec
            .accessors()
            .map(|method| {
                let ident = member_ident(&method.name);
                let ret = self.emit_type(&method.return_type);
                let body = self.emit_body(&method.body)?;
                Ok(quote! {
                    fn #ident(&self) -> #ret {
                        #body
                    }
                })
            })
            .collect::<Result<Vec<_>, EmitError>>()?;

        Ok(quote! {
            impl #declared for #name {
                #(#accessors)*
            }
        })
    }

    pub(super) fn emit_equality_impl(&self, method: &IrMethod) -> Result<TokenStream, EmitError> {
        let name = self.type_ident();
        let other = method
            .params
            .first()
            .map(|param| member_ident(&param.name))
            .unwrap_or_else(|| format_ident!("other"));
        let body = self.emit_body(&method.body)?;
        Ok(quote! {
            impl PartialEq for #name {
                fn eq(&self, #other: &Self) -> bool {
                    #body
                }
            }
        })
    }

    pub(super) fn emit_hash_impls(&self, method: &IrMethod) -> Result<TokenStream, EmitError> {
        let name = self.type_ident();
        let runtime = self.runtime();
        let body = self.emit_body(&method.body)?;
        Ok(quote! {
            impl #runtime::HashCode for #name {
                fn hash_code(&self) -> i32 {
                    #body
                }
            }

            impl std::hash::Hash for #name {
                fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                    state.write_i32(#runtime::HashCode::hash_code(self));
                }
            }
        })
    }

    pub(super) fn emit_display_impl(&self, method: &IrMethod) -> Result<TokenStream, EmitError> {
        let name = self.type_ident();
        let body = match &method.body[..] {
            [IrStmt::Return(expr)] => match &expr.kind {
                IrExprKind::Describe { name, entries } => {
                    let (format, args) = self.describe_parts(name, entries)?;
                    quote! { write!(f, #format, #(#args),*) }
                }
                _ => {
                    let value = self.emit_expr(expr)?;
                    quote! { f.write_str(&#value) }
                }
            },
            _ => {
                return Err(EmitError::Unsupported(format!(
                    "`{}` must be a single return statement",
                    method.name
                )));
            }
        };
        Ok(quote! {
            impl std::fmt::Display for #name {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    #body
                }
            }
        })
    }
}
