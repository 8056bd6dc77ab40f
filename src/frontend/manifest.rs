//! Manifest loading
//!
//! A manifest is a JSON document `{ "types": [ ... ] }`. Entries flagged `"generate": true` are the declared types an
//! implementation is generated for; every entry (declared or not) is part of the type universe used to resolve
//! converters and supertypes.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::raw::RawTypeDecl;

/// Error while loading a manifest.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("failed to read manifest {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid manifest: {0}")]
    Json(#[from] serde_json::Error),
    #[error("type `{0}` is declared more than once")]
    DuplicateType(String),
}

/// A parsed manifest.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub types: Vec<RawTypeDecl>,
}

impl Manifest {
    /// Parse a manifest from JSON text.
    pub fn from_json(text: &str) -> Result<Self, ManifestError> {
        let manifest: Manifest = serde_json::from_str(text)?;
        manifest.check_unique()?;
        Ok(manifest)
    }

    /// Read and parse a manifest file.
    #[tracing::instrument(level = "debug")]
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let text = fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let manifest = Self::from_json(&text)?;
        tracing::debug!(types = manifest.types.len(), "loaded manifest");
        Ok(manifest)
    }

    /// Declared types, in manifest order.
    pub fn declared(&self) -> impl Iterator<Item = &RawTypeDecl> {
        self.types.iter().filter(|t| t.generate)
    }

    /// Index every type of the manifest.
    pub fn universe(&self) -> TypeUniverse<'_> {
        TypeUniverse::new(&self.types)
    }

    fn check_unique(&self) -> Result<(), ManifestError> {
        let mut seen = HashSet::new();
        for decl in &self.types {
            if !seen.insert(decl.qualified_name.as_str()) {
                return Err(ManifestError::DuplicateType(decl.qualified_name.clone()));
            }
        }
        Ok(())
    }
}

/// Lookup table over all type declarations of one manifest.
#[derive(Debug, Clone, Default)]
pub struct TypeUniverse<'a> {
    by_qualified: HashMap<&'a str, &'a RawTypeDecl>,
    by_simple: HashMap<&'a str, Vec<&'a RawTypeDecl>>,
}

impl<'a> TypeUniverse<'a> {
    pub fn new(types: &'a [RawTypeDecl]) -> Self {
        let mut universe = Self::default();
        for decl in types {
            universe.by_qualified.insert(decl.qualified_name.as_str(), decl);
            universe.by_simple.entry(decl.name.as_str()).or_default().push(decl);
        }
        universe
    }

    /// Look a type up by qualified name.
    ///
    /// An unqualified name also matches a type whose simple name it is, provided exactly one such type exists.
    pub fn get(&self, name: &str) -> Option<&'a RawTypeDecl> {
        if let Some(decl) = self.by_qualified.get(name) {
            return Some(*decl);
        }
        if name.contains('.') || name.contains("::") {
            return None;
        }
        match self.by_simple.get(name).map(Vec::as_slice) {
            Some([only]) => Some(*only),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.by_qualified.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_qualified.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"{
        "types": [
            { "name": "Settings", "qualified_name": "app::Settings", "kind": "interface", "generate": true },
            { "name": "DateConverter", "qualified_name": "app::DateConverter", "kind": "class" },
            { "name": "Theme", "qualified_name": "app::ui::Theme", "kind": "enum" },
            { "name": "Theme", "qualified_name": "app::legacy::Theme", "kind": "enum" }
        ]
    }"#;

    #[test]
    fn declared_types_are_flagged_entries() {
        let manifest = Manifest::from_json(MANIFEST).unwrap();
        let names: Vec<_> = manifest.declared().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Settings"]);
    }

    #[test]
    fn universe_lookup() {
        let manifest = Manifest::from_json(MANIFEST).unwrap();
        let universe = manifest.universe();
        assert_eq!(universe.len(), 4);
        assert!(universe.get("app::DateConverter").is_some());
        assert!(universe.get("DateConverter").is_some());
        // ambiguous simple name
        assert!(universe.get("Theme").is_none());
        assert!(universe.get("other::DateConverter").is_none());
    }

    #[test]
    fn duplicate_qualified_names_are_rejected() {
        let text = r#"{"types": [
            {"name": "A", "qualified_name": "x::A", "kind": "class"},
            {"name": "A", "qualified_name": "x::A", "kind": "class"}
        ]}"#;
        assert!(matches!(Manifest::from_json(text), Err(ManifestError::DuplicateType(name)) if name == "x::A"));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Manifest::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
