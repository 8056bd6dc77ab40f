//! Raw declarations: the frontend input contract.
//!
//! These types mirror the manifest's JSON shape one to one. Nothing here is validated beyond what `serde` enforces;
//! normalization into descriptors happens in [`crate::metadata`].
//!
//! ## Examples
//!
//! ```rust
//! use prefsmith::frontend::raw::{RawTypeDecl, TypeKind};
//!
//! let decl: RawTypeDecl = serde_json::from_str(r#"{
//!     "name": "Settings",
//!     "qualified_name": "crate::prefs::Settings",
//!     "kind": "interface",
//!     "generate": true,
//!     "methods": [
//!         { "name": "isEnabled", "return_type": "bool", "is_abstract": true, "property": { "key": "enabled" } }
//!     ]
//! }"#).unwrap();
//! assert_eq!(decl.kind, TypeKind::Interface);
//! assert_eq!(decl.methods[0].property.as_ref().map(|p| p.key.as_str()), Some("enabled"));
//! ```

use serde::{Deserialize, Serialize};

/// Kind of a declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    Interface,
    Class,
    Enum,
}

/// Visibility of a constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Package,
    Private,
}

/// One type declaration, either a declared type to generate for or a member of the type universe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTypeDecl {
    pub name: String,
    pub qualified_name: String,
    pub kind: TypeKind,
    #[serde(default)]
    pub is_abstract: bool,
    /// Whether an implementation should be generated for this type
    #[serde(default)]
    pub generate: bool,
    /// Qualified name of the superclass, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub superclass: Option<String>,
    /// Implemented (or, for interfaces, extended) interfaces as type expressions
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interfaces: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constructors: Vec<RawConstructor>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<RawMethod>,
}

/// A declared constructor.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawConstructor {
    /// Parameter type expressions
    #[serde(default)]
    pub parameters: Vec<String>,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub is_abstract: bool,
}

/// A declared method.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawMethod {
    pub name: String,
    /// Return type expression; absent for methods returning nothing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<String>,
    /// Parameter type expressions
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<String>,
    #[serde(default)]
    pub is_abstract: bool,
    #[serde(default)]
    pub is_final: bool,
    /// Property directive attached to this accessor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property: Option<RawDirective>,
}

/// A property directive (`{key, value, defValue, converter}`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawDirective {
    #[serde(default)]
    pub key: String,
    /// Alternative spelling of the key; wins over `key` when non-empty
    #[serde(default)]
    pub value: String,
    /// Default value literal; empty means no default
    #[serde(default, rename = "defValue", alias = "def_value")]
    pub def_value: String,
    /// Converter reference; absent means the identity converter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub converter: Option<ConverterRef>,
}

/// How a directive refers to its converter.
///
/// A direct class reference names the converter by qualified name. A mirrored reference carries the converter as
/// a type expression, which must denote a declared type before it can be looked up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConverterRef {
    Class(String),
    Mirror(String),
}

impl RawTypeDecl {
    /// Return the method with the given name, if declared directly on this type.
    pub fn method(&self, name: &str) -> Option<&RawMethod> {
        self.methods.iter().find(|m| m.name == name)
    }
}
