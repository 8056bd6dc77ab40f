//! Generation engine: class descriptor to IR.
//!
//! Derives a [`GeneratedClassSpec`] from a validated [`ClassDescriptor`]. Generation is pure and deterministic: the
//! same descriptor and configuration always produce an identical spec.
//!
//! # Architecture
//!
//! - `fields` - storage fields
//! - `constructor` - the all-properties constructor
//! - `methods` - `equals`, `hashCode`, `toString`
//! - `accessors` - accessor overrides
//! - `store_io` - `load`/`save` against the preference store
//!
//! # Usage
//!
//! ```rust,ignore
//! use prefsmith::backend::generate::generate;
//!
//! validation::validate(&descriptor)?;
//! let spec = generate(&descriptor, &config);
//! ```

mod accessors;
mod constructor;
mod fields;
mod methods;
mod store_io;

use crate::backend::ir::{GeneratedClassSpec, IrType};
use crate::config::GeneratorConfig;
use crate::metadata::{ClassDescriptor, PropertyDescriptor};

/// Generation context for one declared type.
pub struct ClassGenerator<'a> {
    class: &'a ClassDescriptor,
    config: &'a GeneratorConfig,
}

impl<'a> ClassGenerator<'a> {
    pub fn new(class: &'a ClassDescriptor, config: &'a GeneratorConfig) -> Self {
        Self { class, config }
    }

    /// Derive the concrete class.
    pub fn generate(&self) -> GeneratedClassSpec {
        let (supertype, interfaces) = if self.class.is_interface() {
            (None, vec![self.class.qualified_name.clone()])
        } else {
            (Some(self.class.qualified_name.clone()), Vec::new())
        };

        let mut methods = Vec::new();
        if !self.class.keeps_user_equality() {
            methods.push(self.equals_method());
            methods.push(self.hash_code_method());
        }
        if !self.class.defines_to_string {
            methods.push(self.to_string_method());
        }
        methods.extend(self.accessor_methods());
        if self.config.store_io {
            methods.extend(self.store_io_methods());
        }

        GeneratedClassSpec {
            name: self.config.impl_name(&self.class.simple_name),
            declared_name: self.class.simple_name.clone(),
            declared_qualified_name: self.class.qualified_name.clone(),
            supertype,
            interfaces,
            fields: self.fields(),
            constructor: self.constructor(),
            methods,
        }
    }

    fn properties(&self) -> &'a [PropertyDescriptor] {
        &self.class.properties
    }
}

/// The IR type of a property's value.
fn value_ir_type(property: &PropertyDescriptor) -> IrType {
    IrType::from(&property.value_type)
}

/// Derive the concrete class for a validated descriptor.
#[tracing::instrument(level = "debug", skip_all, fields(ty = %class.qualified_name))]
pub fn generate(class: &ClassDescriptor, config: &GeneratorConfig) -> GeneratedClassSpec {
    let spec = ClassGenerator::new(class, config).generate();
    tracing::debug!(
        name = %spec.name,
        fields = spec.fields.len(),
        methods = spec.methods.len(),
        "generated class"
    );
    spec
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::ir::{IrExprKind, IrStmt, MethodRole};
    use crate::frontend::Manifest;
    use crate::metadata::build_class_descriptor;

    pub(super) const MANIFEST: &str = r#"{"types": [
        {
            "name": "DateConverter",
            "qualified_name": "app::DateConverter",
            "kind": "class",
            "interfaces": ["prefsmith_runtime::Converter<app::Date, i64>"]
        },
        {
            "name": "Settings",
            "qualified_name": "app::Settings",
            "kind": "interface",
            "generate": true,
            "methods": [
                { "name": "getUserName", "return_type": "String", "property": { "key": "user_name" } },
                { "name": "isEnabled", "return_type": "bool", "property": { "key": "enabled", "defValue": "true" } },
                { "name": "getTags", "return_type": "Set<String>", "property": { "key": "tags" } },
                { "name": "getCreated", "return_type": "app::Date",
                  "property": { "key": "created", "converter": { "class": "app::DateConverter" } } }
            ]
        },
        {
            "name": "Account",
            "qualified_name": "app::Account",
            "kind": "class",
            "is_abstract": true,
            "generate": true,
            "methods": [
                { "name": "equals", "return_type": "bool", "parameters": ["Any"] },
                { "name": "hashCode", "return_type": "i32" },
                { "name": "toString", "return_type": "String" },
                { "name": "getId", "return_type": "i64", "is_abstract": true, "property": { "key": "id" } }
            ]
        }
    ]}"#;

    pub(super) fn descriptor(name: &str) -> ClassDescriptor {
        let manifest = Manifest::from_json(MANIFEST).unwrap();
        let universe = manifest.universe();
        build_class_descriptor(universe.get(name).unwrap(), &universe, &GeneratorConfig::default()).unwrap()
    }

    #[test]
    fn interface_is_implemented() {
        let spec = generate(&descriptor("app::Settings"), &GeneratorConfig::default());
        assert_eq!(spec.name, "SettingsImpl");
        assert_eq!(spec.interfaces, vec!["app::Settings".to_string()]);
        assert_eq!(spec.supertype, None);
    }

    #[test]
    fn abstract_class_is_extended_and_user_equality_is_kept() {
        let spec = generate(&descriptor("app::Account"), &GeneratorConfig::default());
        assert_eq!(spec.supertype.as_deref(), Some("app::Account"));
        assert!(spec.interfaces.is_empty());
        assert!(spec.method_with_role(&MethodRole::Equals).is_none());
        assert!(spec.method_with_role(&MethodRole::HashCode).is_none());
        assert!(spec.method_with_role(&MethodRole::ToString).is_none());
        assert!(spec.method("getId").is_some());
    }

    #[test]
    fn method_order() {
        let spec = generate(&descriptor("app::Settings"), &GeneratorConfig::default());
        let names: Vec<_> = spec.methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "equals",
                "hashCode",
                "toString",
                "getUserName",
                "isEnabled",
                "getTags",
                "getCreated",
                "load",
                "save"
            ]
        );
    }

    #[test]
    fn store_io_can_be_disabled() {
        let config = GeneratorConfig::default().with_store_io(false);
        let spec = generate(&descriptor("app::Settings"), &config);
        assert!(spec.method_with_role(&MethodRole::Load).is_none());
        assert!(spec.method_with_role(&MethodRole::Save).is_none());
    }

    #[test]
    fn configured_suffix_and_hash_constants() {
        let config = GeneratorConfig::default().with_impl_suffix("Prefs").with_hash(1, 31);
        let spec = generate(&descriptor("app::Settings"), &config);
        assert_eq!(spec.name, "SettingsPrefs");
        let hash = spec.method_with_role(&MethodRole::HashCode).unwrap();
        match &hash.body[..] {
            [IrStmt::Return(expr)] => match &expr.kind {
                IrExprKind::HashFold { seed, multiplier, .. } => assert_eq!((*seed, *multiplier), (1, 31)),
                other => panic!("unexpected {:?}", other),
            },
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let class = descriptor("app::Settings");
        let config = GeneratorConfig::default();
        assert_eq!(generate(&class, &config), generate(&class, &config));
    }
}
