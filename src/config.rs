//! Generator configuration
//!
//! Every knob the generation engine and the Rust emitter read lives here. The CLI mirrors each field with a flag.

use prefsmith_core::CaseFormat;

/// Default suffix appended to the declared type's simple name.
pub const DEFAULT_IMPL_SUFFIX: &str = "Impl";

/// Default qualified name of the identity converter.
pub const DEFAULT_CONVERTER: &str = "prefsmith_runtime::DefaultConverter";

/// Default path of the runtime crate emitted code imports from.
pub const DEFAULT_RUNTIME_CRATE: &str = "prefsmith_runtime";

/// A configuration the generator cannot run with.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("field case '{0}' does not produce identifiers")]
    FieldCase(CaseFormat),
}

/// Generator configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Suffix of the generated type name (`Settings` → `SettingsImpl`)
    pub impl_suffix: String,
    /// Naming convention of derived field names
    pub field_case: CaseFormat,
    /// Initial accumulator of the generated hash code
    pub hash_seed: i32,
    /// Multiplier applied to the accumulator before adding each field hash
    pub hash_multiplier: i32,
    /// Whether to generate `load`/`save` methods against the preference store
    pub store_io: bool,
    /// Qualified name recognized as the identity converter
    pub default_converter: String,
    /// Crate path emitted code uses for runtime items
    pub runtime_crate: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            impl_suffix: DEFAULT_IMPL_SUFFIX.to_string(),
            field_case: CaseFormat::LowerCamel,
            hash_seed: prefsmith_core::hashing::DEFAULT_SEED,
            hash_multiplier: prefsmith_core::hashing::DEFAULT_MULTIPLIER,
            store_io: true,
            default_converter: DEFAULT_CONVERTER.to_string(),
            runtime_crate: DEFAULT_RUNTIME_CRATE.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the generated type name suffix
    pub fn with_impl_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.impl_suffix = suffix.into();
        self
    }

    /// Set the field naming convention
    pub fn with_field_case(mut self, case: CaseFormat) -> Self {
        self.field_case = case;
        self
    }

    /// Set the hash seed and multiplier
    pub fn with_hash(mut self, seed: i32, multiplier: i32) -> Self {
        self.hash_seed = seed;
        self.hash_multiplier = multiplier;
        self
    }

    /// Enable or disable store `load`/`save` generation
    pub fn with_store_io(mut self, enabled: bool) -> Self {
        self.store_io = enabled;
        self
    }

    /// Set the qualified name of the identity converter
    pub fn with_default_converter(mut self, name: impl Into<String>) -> Self {
        self.default_converter = name.into();
        self
    }

    /// Set the runtime crate path
    pub fn with_runtime_crate(mut self, path: impl Into<String>) -> Self {
        self.runtime_crate = path.into();
        self
    }

    /// Reject settings no declared type could generate under.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.field_case.produces_identifiers() {
            return Err(ConfigError::FieldCase(self.field_case));
        }
        Ok(())
    }

    /// Name of the class generated for a declared type.
    pub fn impl_name(&self, simple_name: &str) -> String {
        format!("{}{}", simple_name, self.impl_suffix)
    }
}
