//! CLI module for prefsmith
//!
//! ## Commands
//!
//! - `generate <manifest>` - Generate a Rust source file per declared type
//! - `check <manifest>` - Describe and validate declared types without generating
//! - `ir <manifest>` - Print the generated class IR as text
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

use crate::config::{DEFAULT_CONVERTER, DEFAULT_IMPL_SUFFIX, DEFAULT_RUNTIME_CRATE, GeneratorConfig};
use crate::version::PREFSMITH_VERSION;
use prefsmith_core::CaseFormat;
use prefsmith_core::hashing::{DEFAULT_MULTIPLIER, DEFAULT_SEED};

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Generate preference-store-backed implementations of declared types
#[derive(Parser, Debug)]
#[command(name = "prefsmith")]
#[command(version = PREFSMITH_VERSION)]
#[command(about = "Generate preference-store-backed implementations of declared types", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate one Rust source file per declared type
    Generate {
        /// Manifest describing the declared types
        #[arg(value_name = "MANIFEST")]
        manifest: PathBuf,
        /// Output directory (default: generated)
        #[arg(short = 'o', long = "out-dir", value_name = "DIR", default_value = "generated")]
        out_dir: PathBuf,
        #[command(flatten)]
        generator: GeneratorArgs,
    },

    /// Describe and validate declared types without generating
    Check {
        #[arg(value_name = "MANIFEST")]
        manifest: PathBuf,
        #[command(flatten)]
        generator: GeneratorArgs,
    },

    /// Print the generated class IR
    Ir {
        #[arg(value_name = "MANIFEST")]
        manifest: PathBuf,
        /// Only print this declared type (qualified or simple name)
        #[arg(long = "type", value_name = "NAME")]
        type_name: Option<String>,
        #[command(flatten)]
        generator: GeneratorArgs,
    },
}

/// Flags mirroring [`GeneratorConfig`].
#[derive(Args, Debug, Clone)]
pub struct GeneratorArgs {
    /// Suffix of generated type names
    #[arg(long, value_name = "SUFFIX", default_value = DEFAULT_IMPL_SUFFIX)]
    pub suffix: String,
    /// Naming convention of derived field names
    #[arg(long = "field-case", value_name = "CASE", default_value = "lower-camel", value_parser = parse_case)]
    pub field_case: CaseFormat,
    /// Do not generate `load`/`save` methods
    #[arg(long = "no-store-io")]
    pub no_store_io: bool,
    /// Initial accumulator of generated hash codes
    #[arg(long = "hash-seed", value_name = "N", default_value_t = DEFAULT_SEED, allow_negative_numbers = true)]
    pub hash_seed: i32,
    /// Multiplier of generated hash codes
    #[arg(long = "hash-multiplier", value_name = "N", default_value_t = DEFAULT_MULTIPLIER, allow_negative_numbers = true)]
    pub hash_multiplier: i32,
    /// Qualified name of the identity converter
    #[arg(long = "default-converter", value_name = "PATH", default_value = DEFAULT_CONVERTER)]
    pub default_converter: String,
    /// Crate path emitted code uses for runtime items
    #[arg(long = "runtime-crate", value_name = "PATH", default_value = DEFAULT_RUNTIME_CRATE)]
    pub runtime_crate: String,
}

fn parse_case(value: &str) -> Result<CaseFormat, String> {
    let case: CaseFormat = value
        .parse()
        .map_err(|e: prefsmith_core::naming::UnknownCaseFormat| e.to_string())?;
    if !case.produces_identifiers() {
        return Err(format!("'{}' field names are not identifiers", case));
    }
    Ok(case)
}

impl GeneratorArgs {
    pub fn to_config(&self) -> GeneratorConfig {
        GeneratorConfig::new()
            .with_impl_suffix(self.suffix.clone())
            .with_field_case(self.field_case)
            .with_store_io(!self.no_store_io)
            .with_hash(self.hash_seed, self.hash_multiplier)
            .with_default_converter(self.default_converter.clone())
            .with_runtime_crate(self.runtime_crate.clone())
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Command::Generate {
            manifest,
            out_dir,
            generator,
        } => commands::generate(&manifest, &out_dir, generator.to_config()),
        Command::Check { manifest, generator } => commands::check(&manifest, generator.to_config()),
        Command::Ir {
            manifest,
            type_name,
            generator,
        } => commands::print_ir(&manifest, type_name.as_deref(), generator.to_config()),
    }
}

// ============================================================================
// Tests
// ============================================================================
