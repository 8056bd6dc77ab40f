//! Type and identifier emission for IR to Rust code generation
//!
//! Declared names arrive as qualified paths (`app::Date` or `app.Date`); every path segment and member name goes
//! through keyword escaping before it becomes an [`Ident`].

use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};

use prefsmith_core::lang::rust_keywords;
use prefsmith_core::lang::types::{ContainerId, primitive_as_str};

use super::super::types::IrType;
use super::RustEmitter;

/// Path segments that are keywords but valid in path position.
const PATH_KEYWORDS: &[&str] = &["crate", "self", "super", "Self"];

impl RustEmitter<'_> {
    /// Emit a type as Rust tokens.
    pub(super) fn emit_type(&self, ty: &IrType) -> TokenStream {
        match ty {
            IrType::Unit => quote! { () },
            IrType::Primitive(id) => {
                let name = format_ident!("{}", primitive_as_str(*id));
                quote! { #name }
            }
            IrType::String => quote! { String },
            IrType::Option(inner) => {
                let inner = self.emit_type(inner);
                quote! { Option<#inner> }
            }
            IrType::Container { container, args } => {
                let path = self.container_path(*container);
                let args: Vec<_> = args.iter().map(|arg| self.emit_type(arg)).collect();
                quote! { #path<#(#args),*> }
            }
            IrType::Named { name, args } => {
                let path = path_tokens(name);
                if args.is_empty() {
                    path
                } else {
                    let args: Vec<_> = args.iter().map(|arg| self.emit_type(arg)).collect();
                    quote! { #path<#(#args),*> }
                }
            }
            IrType::SelfType | IrType::Any => quote! { Self },
            IrType::Store => quote! { S },
        }
    }

    fn container_path(&self, container: ContainerId) -> TokenStream {
        let name = format_ident!("{}", container.as_str());
        match container {
            ContainerId::Vec => quote! { Vec },
            ContainerId::HashSet | ContainerId::BTreeSet | ContainerId::HashMap | ContainerId::BTreeMap => {
                quote! { std::collections::#name }
            }
            ContainerId::FrozenList | ContainerId::FrozenSet | ContainerId::FrozenMap => {
                let runtime = self.runtime();
                quote! { #runtime::#name }
            }
        }
    }

    /// Path of the runtime crate.
    pub(super) fn runtime(&self) -> TokenStream {
        path_tokens(&self.config.runtime_crate)
    }
}

/// Tokens for a qualified name, accepting `.` and `::` separators.
pub(super) fn path_tokens(name: &str) -> TokenStream {
    let normalized = name.replace('.', "::");
    let segments: Vec<TokenStream> = normalized
        .split("::")
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            if PATH_KEYWORDS.contains(&segment) {
                let ident = Ident::new(segment, proc_macro2::Span::call_site());
                quote! { #ident }
            } else {
                let ident = format_ident!("{}", rust_keywords::escape(segment));
                quote! { #ident }
            }
        })
        .collect();
    quote! { #(#segments)::* }
}

/// Convert a camel, underscore or hyphen name to snake case.
pub(super) fn snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_lower = false;
    for ch in name.chars() {
        match ch {
            '-' | '_' => {
                if !out.is_empty() && !out.ends_with('_') {
                    out.push('_');
                }
                prev_lower = false;
            }
            c if c.is_ascii_uppercase() => {
                if prev_lower {
                    out.push('_');
                }
                out.push(c.to_ascii_lowercase());
                prev_lower = false;
            }
            c => {
                out.push(c);
                prev_lower = c.is_ascii_lowercase() || c.is_ascii_digit();
            }
        }
    }
    out
}

/// Identifier for a field, parameter, local or method name.
pub(super) fn member_ident(name: &str) -> Ident {
    format_ident!("{}", rust_keywords::escape(&snake_case(name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snake_case_handles_every_field_convention() {
        assert_eq!(snake_case("userName"), "user_name");
        assert_eq!(snake_case("USER_NAME"), "user_name");
        assert_eq!(snake_case("user-name"), "user_name");
        assert_eq!(snake_case("getURL"), "get_url");
        assert_eq!(snake_case("isEnabled"), "is_enabled");
        assert_eq!(snake_case("v2Token"), "v2_token");
    }

    #[test]
    fn member_idents_are_escaped() {
        assert_eq!(member_ident("type").to_string(), "r#type");
        assert_eq!(member_ident("getType").to_string(), "get_type");
    }

    #[test]
    fn paths_accept_both_separators() {
        assert_eq!(path_tokens("app.model.Date").to_string(), "app :: model :: Date");
        assert_eq!(path_tokens("crate::Settings").to_string(), "crate :: Settings");
    }
}
