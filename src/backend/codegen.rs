//! Pipeline facade
//!
//! Runs one generation pass per declared type of a manifest:
//!
//! ```text
//! Discover → Describe → Validate → Generate → Emit
//! ```
//!
//! ## Error Handling
//!
//! A failing stage ends the pass for that type only; [`Codegen::run`] returns one outcome per declared type so
//! callers can report every failure and still write the files that did generate. No partially generated class
//! reaches emission.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use prefsmith::backend::codegen::Codegen;
//!
//! let manifest = Manifest::load(path)?;
//! for outcome in Codegen::new(GeneratorConfig::default()).run(&manifest) {
//!     let file = outcome?;
//!     std::fs::write(out.join(file.file_name()), &file.source)?;
//! }
//! ```

use std::collections::HashMap;

use prefsmith_core::{CaseFormat, convert_case};

use crate::backend::generate::generate;
use crate::backend::ir::emit::{EmitError, RustEmitter};
use crate::backend::ir::{DefaultLiteralValidator, GeneratedClassSpec};
use crate::config::{ConfigError, GeneratorConfig};
use crate::frontend::{Manifest, ManifestError, RawTypeDecl, TypeUniverse};
use crate::metadata::{ClassDescriptor, build_class_descriptor};
use crate::validation::{ValidationChain, ValidationError, Validator};

/// Error during a generation pass.
#[derive(Debug, thiserror::Error)]
pub enum CodegenError {
    #[error(transparent)]
    Manifest(#[from] ManifestError),
    #[error("{ty}: {source}")]
    Config {
        ty: String,
        #[source]
        source: ConfigError,
    },
    /// Describing or validating a declared type failed
    #[error("{ty}: {source}")]
    Validation {
        ty: String,
        #[source]
        source: ValidationError,
    },
    #[error("{ty}: {source}")]
    Emission {
        ty: String,
        #[source]
        source: EmitError,
    },
    /// Another declared type already generated into the same file
    #[error("{ty}: output file {file} is already generated for {first}")]
    DuplicateOutput { ty: String, file: String, first: String },
}

impl CodegenError {
    /// The validation error behind this failure, if any.
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            CodegenError::Validation { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// One emitted source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Qualified name of the declared type
    pub declared: String,
    /// Generated type name
    pub class_name: String,
    pub source: String,
}

impl GeneratedFile {
    /// Module path of the declared type followed by the class name: `app::ui::Settings` → `app_ui_settings_impl.rs`
    pub fn file_name(&self) -> String {
        let mut segments: Vec<&str> = self.declared.split(['.', ':']).filter(|s| !s.is_empty()).collect();
        segments.pop();
        let mut words: Vec<String> = segments
            .into_iter()
            .map(|segment| convert_case(segment, CaseFormat::LowerCamel, CaseFormat::LowerUnderscore))
            .collect();
        words.push(convert_case(&self.class_name, CaseFormat::UpperCamel, CaseFormat::LowerUnderscore));
        format!("{}.rs", words.join("_"))
    }
}

/// Runs generation passes with one configuration.
#[derive(Debug, Clone, Default)]
pub struct Codegen {
    config: GeneratorConfig,
}

impl Codegen {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Describe and validate one declared type.
    pub fn describe(&self, decl: &RawTypeDecl, universe: &TypeUniverse<'_>) -> Result<ClassDescriptor, CodegenError> {
        let invalid = |source| CodegenError::Validation {
            ty: decl.qualified_name.clone(),
            source,
        };
        self.config.validate().map_err(|source| CodegenError::Config {
            ty: decl.qualified_name.clone(),
            source,
        })?;
        let class = build_class_descriptor(decl, universe, &self.config).map_err(invalid)?;
        let mut chain = ValidationChain::default();
        if self.config.store_io {
            chain = chain.with(DefaultLiteralValidator);
        }
        chain.validate(&class).map_err(invalid)?;
        Ok(class)
    }

    /// Describe, validate and generate one declared type.
    pub fn generate_spec(
        &self,
        decl: &RawTypeDecl,
        universe: &TypeUniverse<'_>,
    ) -> Result<GeneratedClassSpec, CodegenError> {
        let class = self.describe(decl, universe)?;
        Ok(generate(&class, &self.config))
    }

    /// Run a full pass for one declared type.
    #[tracing::instrument(level = "debug", skip_all, fields(ty = %decl.qualified_name))]
    pub fn generate_file(&self, decl: &RawTypeDecl, universe: &TypeUniverse<'_>) -> Result<GeneratedFile, CodegenError> {
        let spec = self.generate_spec(decl, universe)?;
        let source = RustEmitter::new(&self.config, &spec)
            .emit()
            .map_err(|source| CodegenError::Emission {
                ty: decl.qualified_name.clone(),
                source,
            })?;
        Ok(GeneratedFile {
            declared: decl.qualified_name.clone(),
            class_name: spec.name,
            source,
        })
    }

    /// Run a pass for every declared type, in manifest order.
    ///
    /// A type whose file name is already taken by an earlier type fails instead of overwriting it.
    pub fn run(&self, manifest: &Manifest) -> Vec<Result<GeneratedFile, CodegenError>> {
        let universe = manifest.universe();
        let mut taken: HashMap<String, String> = HashMap::new();
        manifest
            .declared()
            .map(|decl| {
                let outcome = self.generate_file(decl, &universe).and_then(|file| {
                    let name = file.file_name();
                    match taken.get(&name) {
                        Some(first) => Err(CodegenError::DuplicateOutput {
                            ty: file.declared,
                            file: name,
                            first: first.clone(),
                        }),
                        None => {
                            taken.insert(name, file.declared.clone());
                            Ok(file)
                        }
                    }
                });
                match &outcome {
                    Ok(file) => tracing::debug!(ty = %file.declared, class = %file.class_name, "generated"),
                    Err(err) => tracing::warn!(ty = %decl.qualified_name, error = %err, "generation failed"),
                }
                outcome
            })
            .collect()
    }

    /// Describe and validate every declared type without generating anything.
    pub fn check(&self, manifest: &Manifest) -> Vec<Result<ClassDescriptor, CodegenError>> {
        let universe = manifest.universe();
        manifest.declared().map(|decl| self.describe(decl, &universe)).collect()
    }
}
