//! Class descriptors.
//!
//! Properties are collected from every method carrying a property directive, walking supertypes present in the
//! type universe first (superclass, then interfaces, each depth first) and the declared type's own methods last.
//! An accessor redeclared further down keeps the position of its first declaration and the directive of its last.

use std::collections::HashSet;

use crate::config::GeneratorConfig;
use crate::frontend::raw::{RawMethod, RawTypeDecl, TypeKind};
use crate::frontend::{TypeExpr, TypeUniverse};
use crate::validation::ValidationError;

use super::{PropertyDescriptor, build_property_descriptor};

const EQUALS: &str = "equals";
const HASH_CODE: &str = "hashCode";
const TO_STRING: &str = "toString";

/// One declared type, normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDescriptor {
    pub simple_name: String,
    pub qualified_name: String,
    pub kind: TypeKind,
    pub is_abstract: bool,
    /// Properties in declaration order
    pub properties: Vec<PropertyDescriptor>,
    pub defines_equals: bool,
    pub defines_hash_code: bool,
    pub defines_to_string: bool,
    pub has_accessible_default_constructor: bool,
}

impl ClassDescriptor {
    pub fn is_interface(&self) -> bool {
        self.kind == TypeKind::Interface
    }

    pub fn is_class(&self) -> bool {
        self.kind == TypeKind::Class
    }

    /// Whether generation keeps a user-defined `equals`/`hashCode` pair.
    pub fn keeps_user_equality(&self) -> bool {
        self.defines_equals && self.defines_hash_code
    }
}

/// Build the descriptor of a declared type.
#[tracing::instrument(level = "debug", skip_all, fields(ty = %raw.qualified_name))]
pub fn build_class_descriptor(
    raw: &RawTypeDecl,
    universe: &TypeUniverse<'_>,
    config: &GeneratorConfig,
) -> Result<ClassDescriptor, ValidationError> {
    let mut accessors: Vec<&RawMethod> = Vec::new();
    let mut visited = HashSet::new();
    collect_accessors(raw, universe, &mut visited, &mut accessors);

    let properties = accessors
        .into_iter()
        .filter_map(|method| method.property.as_ref().map(|directive| (method, directive)))
        .map(|(method, directive)| build_property_descriptor(method, directive, universe, config))
        .collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(properties = properties.len(), "described declared type");

    Ok(ClassDescriptor {
        simple_name: raw.name.clone(),
        qualified_name: raw.qualified_name.clone(),
        kind: raw.kind,
        is_abstract: raw.is_abstract || raw.kind == TypeKind::Interface,
        properties,
        defines_equals: raw.methods.iter().any(is_equals),
        defines_hash_code: raw.methods.iter().any(is_hash_code),
        defines_to_string: raw.methods.iter().any(is_to_string),
        has_accessible_default_constructor: super::has_default_constructor(raw),
    })
}

fn collect_accessors<'a>(
    decl: &'a RawTypeDecl,
    universe: &TypeUniverse<'a>,
    visited: &mut HashSet<&'a str>,
    out: &mut Vec<&'a RawMethod>,
) {
    if !visited.insert(decl.qualified_name.as_str()) {
        return;
    }
    let supertypes = decl
        .superclass
        .iter()
        .map(String::as_str)
        .chain(decl.interfaces.iter().map(String::as_str));
    for name in supertypes {
        let base = TypeExpr::parse(name).map(|expr| expr.name).unwrap_or_else(|_| name.to_string());
        if let Some(supertype) = universe.get(&base) {
            collect_accessors(supertype, universe, visited, out);
        }
    }
    for method in decl.methods.iter().filter(|m| m.property.is_some()) {
        match out.iter_mut().find(|existing| existing.name == method.name) {
            Some(existing) => *existing = method,
            None => out.push(method),
        }
    }
}

fn returns(method: &RawMethod, spellings: &[&str]) -> bool {
    method
        .return_type
        .as_deref()
        .is_some_and(|ty| spellings.contains(&ty.trim()))
}

fn is_equals(method: &RawMethod) -> bool {
    method.name == EQUALS && method.parameters.len() == 1 && returns(method, &["bool", "boolean"])
}

fn is_hash_code(method: &RawMethod) -> bool {
    method.name == HASH_CODE && method.parameters.is_empty() && returns(method, &["i32", "int"])
}

fn is_to_string(method: &RawMethod) -> bool {
    method.name == TO_STRING && method.parameters.is_empty() && returns(method, &["String", "string"])
}
