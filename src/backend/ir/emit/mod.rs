//! Emit Rust source code from typed IR.
//!
//! This module defines [`RustEmitter`] and wires together the focused submodules that implement IR → Rust emission.
//! The heavy lifting lives in those submodules; `mod.rs` stays thin.
//!
//! ## Notes
//! - Emission produces a Rust syntax tree (`syn`) and formats it via `prettyplease`.
//! - Declared types (interfaces and abstract classes alike) are traits on the Rust side; the generated struct
//!   implements the declared trait with the accessor overrides.
//! - Emitted code refers to runtime items through [`GeneratorConfig::runtime_crate`], never through `use` imports.
//!
//! ## See also
//! - [`decls`]: struct and impl emission
//! - [`statements`]: statement emission
//! - [`expressions`]: expression emission
//! - [`types`]: type and identifier helpers

mod decls;
mod errors;
mod expressions;
mod statements;
mod types;

pub use errors::EmitError;

use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};

use super::GeneratedClassSpec;
use super::decl::MethodRole;
use crate::config::GeneratorConfig;
use crate::version::PREFSMITH_VERSION;

/// Emit Rust source code for one generated class.
///
/// ## Notes
/// - The public API is [`RustEmitter::emit`]; [`RustEmitter::emit_tokens`] returns the unformatted item stream.
pub struct RustEmitter<'a> {
    config: &'a GeneratorConfig,
    spec: &'a GeneratedClassSpec,
}

impl<'a> RustEmitter<'a> {
    pub fn new(config: &'a GeneratorConfig, spec: &'a GeneratedClassSpec) -> Self {
        Self { config, spec }
    }

    /// Emit a formatted Rust source file.
    pub fn emit(&self) -> Result<String, EmitError> {
        let tokens = self.emit_tokens()?;
        let syntax_tree: syn::File = syn::parse2(tokens).map_err(|e| EmitError::SynParse(e.to_string()))?;
        let formatted = prettyplease::unparse(&syntax_tree);

        let header = format!(
            "// Generated by prefsmith v{} from `{}`. Do not edit.\n\n",
            PREFSMITH_VERSION, self.spec.declared_qualified_name
        );
        Ok(header + &formatted)
    }

    /// Emit the items of the generated class, in a fixed order.
    pub fn emit_tokens(&self) -> Result<TokenStream, EmitError> {
        let mut items = vec![self.emit_struct(), self.emit_inherent_impl()?, self.emit_declared_impl()?];

        for method in &self.spec.methods {
            match method.role {
                MethodRole::Equals => items.push(self.emit_equality_impl(method)?),
                MethodRole::HashCode => items.push(self.emit_hash_impls(method)?),
                MethodRole::ToString => items.push(self.emit_display_impl(method)?),
                MethodRole::Accessor { .. } | MethodRole::Load | MethodRole::Save => {}
            }
        }

        Ok(quote! { #(#items)* })
    }

    fn type_ident(&self) -> Ident {
        format_ident!("{}", self.spec.name)
    }
}

/// Emit a formatted Rust source file for a generated class.
pub fn emit_class(spec: &GeneratedClassSpec, config: &GeneratorConfig) -> Result<String, EmitError> {
    RustEmitter::new(config, spec).emit()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::generate::generate;
    use crate::frontend::Manifest;
    use crate::metadata::build_class_descriptor;

    const MANIFEST: &str = r#"{"types": [
        {
            "name": "Flags",
            "qualified_name": "app.Flags",
            "kind": "interface",
            "generate": true,
            "methods": [
                { "name": "isBeta", "return_type": "boolean", "property": { "key": "beta", "defValue": "true" } },
                { "name": "getRetries", "return_type": "int", "property": { "key": "retries", "defValue": "-3" } },
                { "name": "getType", "return_type": "String", "property": { "key": "type" } }
            ]
        }
    ]}"#;

    fn emitted(config: &GeneratorConfig) -> String {
        let manifest = Manifest::from_json(MANIFEST).unwrap();
        let universe = manifest.universe();
        let class = build_class_descriptor(universe.get("app.Flags").unwrap(), &universe, config).unwrap();
        emit_class(&generate(&class, config), config).unwrap()
    }

    #[test]
    fn output_parses_as_a_rust_file() {
        let source = emitted(&GeneratorConfig::default());
        assert!(source.starts_with("// Generated by prefsmith v"));
        let file = syn::parse_file(&source).unwrap();
        assert_eq!(file.items.len(), 7);
    }

    #[test]
    fn declared_trait_and_accessors() {
        let source = emitted(&GeneratorConfig::default());
        assert!(source.contains("pub struct FlagsImpl"));
        assert!(source.contains("impl app::Flags for FlagsImpl"));
        assert!(source.contains("fn is_beta(&self) -> bool"));
        assert!(source.contains("fn get_type(&self) -> String"));
        assert!(source.contains("r#type: String"));
        assert!(source.contains("store.get_i32(\"retries\", -3)"));
    }

    #[test]
    fn store_io_disabled_leaves_only_new() {
        let source = emitted(&GeneratorConfig::default().with_store_io(false));
        assert!(source.contains("pub fn new("));
        assert!(!source.contains("pub fn load"));
        assert!(!source.contains("PreferenceStore"));
    }

    #[test]
    fn runtime_path_is_configurable() {
        let config = GeneratorConfig::default().with_runtime_crate("crate::prefs");
        let source = emitted(&config);
        assert!(source.contains("impl crate::prefs::HashCode for FlagsImpl"));
    }
}
