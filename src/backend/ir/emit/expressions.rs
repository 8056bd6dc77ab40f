//! Expression emission for IR to Rust code generation
//!
//! Two flavours of every expression exist:
//!
//! - [`RustEmitter::emit_expr`] produces an **owned** value: field reads of non-`Copy` types are cloned, because
//!   the receiver is always `&self`.
//! - [`RustEmitter::emit_place`] produces a **place** for by-reference uses (comparison, hashing, formatting), so no
//!   clone is emitted there.
//!
//! A defensive copy (`Unmodifiable`) needs no extra code in Rust: a constructor parameter is moved in, and a field
//! read through an accessor is already a clone.

use proc_macro2::{Literal, TokenStream};
use quote::{format_ident, quote};

use prefsmith_core::lang::store_types;
use prefsmith_core::lang::types::ContainerFamily;

use super::super::IrType;
use super::super::expr::{ConvertDirection, IrExpr, IrExprKind};
use super::super::literal::{StoreLiteral, parse_default};
use super::types::{member_ident, path_tokens};
use super::{EmitError, RustEmitter};

impl RustEmitter<'_> {
    /// Emit an expression producing an owned value.
    pub(super) fn emit_expr(&self, expr: &IrExpr) -> Result<TokenStream, EmitError> {
        Ok(match &expr.kind {
            IrExprKind::BoolLit(true) => quote! { true },
            IrExprKind::BoolLit(false) => quote! { false },
            IrExprKind::StrLit(s) => quote! { String::from(#s) },
            IrExprKind::This => quote! { self },
            IrExprKind::Param(name) | IrExprKind::Local(name) => {
                let ident = member_ident(name);
                quote! { #ident }
            }
            IrExprKind::Field(name) => {
                let ident = member_ident(name);
                if expr.ty.is_copy() {
                    quote! { self.#ident }
                } else {
                    quote! { self.#ident.clone() }
                }
            }
            IrExprKind::Identity(other) => {
                let other = self.emit_place(other)?;
                quote! { std::ptr::eq(self, #other) }
            }
            // Receivers are statically typed as `&Self`.
            IrExprKind::InstanceOf { .. } => quote! { true },
            IrExprKind::Not(inner) => {
                let inner = self.emit_expr(inner)?;
                quote! { !(#inner) }
            }
            IrExprKind::Cast { value, .. } => self.emit_place(value)?,
            IrExprKind::AccessorCall { target, accessor } => {
                let declared = path_tokens(&self.spec.declared_qualified_name);
                let method = member_ident(accessor);
                let target = self.emit_place(target)?;
                quote! { <Self as #declared>::#method(#target) }
            }
            IrExprKind::Eq(left, right) => {
                let left = self.emit_place(left)?;
                let right = self.emit_place(right)?;
                quote! { #left == #right }
            }
            IrExprKind::And(parts) => {
                let mut parts = parts.iter();
                match parts.next() {
                    None => quote! { true },
                    Some(first) => {
                        let mut acc = self.emit_expr(first)?;
                        for part in parts {
                            let part = self.emit_expr(part)?;
                            acc = quote! { #acc && #part };
                        }
                        acc
                    }
                }
            }
            IrExprKind::HashFold {
                seed,
                multiplier,
                values,
            } => self.emit_hash_fold(*seed, *multiplier, values)?,
            IrExprKind::Describe { name, entries } => {
                let (format, args) = self.describe_parts(name, entries)?;
                quote! { format!(#format, #(#args),*) }
            }
            IrExprKind::Unmodifiable { value, .. } => self.emit_expr(value)?,
            IrExprKind::StoreGet {
                store,
                store_type,
                key,
                default,
            } => {
                let store = self.emit_expr(store)?;
                let getter = format_ident!("{}", store_types::getter_name(*store_type));
                let literal = parse_default(*store_type, default.as_deref()).map_err(|source| {
                    EmitError::InvalidDefault {
                        key: key.clone(),
                        source,
                    }
                })?;
                let default = literal_tokens(&literal);
                quote! { #store.#getter(#key, #default) }
            }
            IrExprKind::StorePut {
                store,
                store_type,
                key,
                value,
            } => {
                let store = self.emit_expr(store)?;
                let setter = format_ident!("{}", store_types::setter_name(*store_type));
                let value = self.emit_expr(value)?;
                quote! { #store.#setter(#key, #value) }
            }
            IrExprKind::Convert {
                converter,
                direction,
                converted,
                supported,
                value,
            } => {
                let runtime = self.runtime();
                let converter = path_tokens(converter);
                let converted = self.emit_type(converted);
                let supported = self.emit_type(supported);
                let method = match direction {
                    ConvertDirection::ToConverted => format_ident!("to_converted"),
                    ConvertDirection::ToSupported => format_ident!("to_supported"),
                };
                let value = self.emit_expr(value)?;
                quote! {
                    #runtime::Converter::<#converted, #supported>::#method(&<#converter as Default>::default(), #value)
                }
            }
            IrExprKind::New(args) => {
                let args = args.iter().map(|arg| self.emit_expr(arg)).collect::<Result<Vec<_>, _>>()?;
                quote! { Self::new(#(#args),*) }
            }
        })
    }

    /// Emit an expression used by reference.
    pub(super) fn emit_place(&self, expr: &IrExpr) -> Result<TokenStream, EmitError> {
        match &expr.kind {
            IrExprKind::Field(name) => {
                let ident = member_ident(name);
                Ok(quote! { self.#ident })
            }
            _ => self.emit_expr(expr),
        }
    }

    fn emit_hash_fold(&self, seed: i32, multiplier: i32, values: &[IrExpr]) -> Result<TokenStream, EmitError> {
        let seed = signed_lit(i64::from(seed));
        if values.is_empty() {
            return Ok(seed);
        }
        let runtime = self.runtime();
        let multiplier = signed_lit(i64::from(multiplier));
        let hashes = values
            .iter()
            .map(|value| {
                let place = self.emit_place(value)?;
                Ok(quote! { #runtime::HashCode::hash_code(&#place) })
            })
            .collect::<Result<Vec<_>, EmitError>>()?;
        Ok(quote! {
            [#(#hashes),*]
                .into_iter()
                .fold(#seed, |hash, value| #runtime::hash::combine(hash, #multiplier, value))
        })
    }

    /// Format string and arguments rendering `Name{field=value, ...}`.
    pub(super) fn describe_parts(
        &self,
        name: &str,
        entries: &[(String, IrExpr)],
    ) -> Result<(String, Vec<TokenStream>), EmitError> {
        let labels: Vec<String> = entries.iter().map(|(label, _)| format!("{}={{:?}}", label)).collect();
        let format = format!("{}{{{{{}}}}}", name, labels.join(", "));
        let runtime = self.runtime();
        let args = entries
            .iter()
            .map(|(_, value)| {
                let place = self.emit_place(value)?;
                Ok(if is_described_sorted(&value.ty) {
                    quote! { #runtime::Unordered(&#place) }
                } else {
                    place
                })
            })
            .collect::<Result<Vec<_>, EmitError>>()?;
        Ok((format, args))
    }
}

/// Sets and maps are described with their entries sorted, so equal values describe identically.
fn is_described_sorted(ty: &IrType) -> bool {
    match ty {
        IrType::Container { container, .. } => container.family() != ContainerFamily::List,
        _ => false,
    }
}

/// Integer literal with an explicit sign, typed by context.
fn signed_lit(value: i64) -> TokenStream {
    let magnitude = Literal::u64_unsuffixed(value.unsigned_abs());
    if value < 0 {
        quote! { -#magnitude }
    } else {
        quote! { #magnitude }
    }
}

/// Tokens for a parsed default literal.
fn literal_tokens(literal: &StoreLiteral) -> TokenStream {
    match literal {
        StoreLiteral::Bool(true) => quote! { true },
        StoreLiteral::Bool(false) => quote! { false },
        StoreLiteral::Int(value) => signed_lit(i64::from(*value)),
        StoreLiteral::Long(value) => signed_lit(*value),
        StoreLiteral::Float(value) => {
            let magnitude = Literal::f32_unsuffixed(value.abs());
            if value.is_sign_negative() {
                quote! { -#magnitude }
            } else {
                quote! { #magnitude }
            }
        }
        StoreLiteral::String(value) => quote! { String::from(#value) },
        StoreLiteral::StringSet(items) if items.is_empty() => quote! { std::collections::HashSet::new() },
        StoreLiteral::StringSet(items) => quote! {
            std::collections::HashSet::from([#(String::from(#items)),*])
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prefsmith_core::lang::store_types::StoreTypeId;

    fn default_tokens(store_type: StoreTypeId, literal: Option<&str>) -> String {
        literal_tokens(&parse_default(store_type, literal).unwrap()).to_string()
    }

    #[test]
    fn negative_literals_keep_their_sign() {
        assert_eq!(signed_lit(-17).to_string(), "- 17");
        assert_eq!(signed_lit(i64::MIN).to_string(), "- 9223372036854775808");
        assert_eq!(default_tokens(StoreTypeId::Float, Some("-1.5f")), "- 1.5");
    }

    #[test]
    fn sets_and_maps_are_described_sorted() {
        use prefsmith_core::lang::types::ContainerId;

        let container = |container| IrType::Container {
            container,
            args: vec![IrType::String],
        };
        assert!(is_described_sorted(&container(ContainerId::HashSet)));
        assert!(is_described_sorted(&container(ContainerId::FrozenMap)));
        assert!(is_described_sorted(&container(ContainerId::BTreeSet)));
        assert!(!is_described_sorted(&container(ContainerId::Vec)));
        assert!(!is_described_sorted(&container(ContainerId::FrozenList)));
        assert!(!is_described_sorted(&IrType::String));
    }

    #[test]
    fn default_literals() {
        assert_eq!(default_tokens(StoreTypeId::Bool, None), "false");
        assert_eq!(default_tokens(StoreTypeId::Long, Some("42L")), "42");
        assert_eq!(default_tokens(StoreTypeId::String, Some("hi")), "String :: from (\"hi\")");
        assert_eq!(default_tokens(StoreTypeId::StringSet, None), "std :: collections :: HashSet :: new ()");
    }
}
