//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::backend::codegen::{Codegen, CodegenError, GeneratedFile};
use crate::config::GeneratorConfig;
use crate::frontend::Manifest;

use super::{CliError, CliResult, ExitCode};

/// Validate output directory path for security.
///
/// ## Errors
///
/// Returns an error if the path contains `..` components.
fn validate_output_dir(out_dir: &Path) -> CliResult<()> {
    if out_dir
        .components()
        .any(|component| matches!(component, std::path::Component::ParentDir))
    {
        return Err(CliError::failure(format!(
            "Output directory '{}' contains path traversal (..)",
            out_dir.display()
        )));
    }

    if out_dir.is_absolute() {
        tracing::warn!(
            "Using absolute output path: {}. Consider using a relative path.",
            out_dir.display()
        );
    }

    Ok(())
}

fn load_manifest(path: &Path) -> CliResult<Manifest> {
    Manifest::load(path).map_err(|e| CliError::failure(format!("Error: {}", e)))
}

/// Render a pass failure for the terminal; validation errors go through miette.
pub fn render_error(err: &CodegenError) -> String {
    match err {
        CodegenError::Validation { ty, source } => {
            format!("{}:\n{:?}", ty, miette::Report::new(source.clone()))
        }
        other => format!("Error: {}", other),
    }
}

/// Report every failure and turn them into the command's exit status.
fn finish(failures: Vec<String>, total: usize) -> CliResult<ExitCode> {
    if failures.is_empty() {
        return Ok(ExitCode::SUCCESS);
    }
    for failure in &failures {
        eprintln!("{}", failure);
    }
    Err(CliError::failure(format!(
        "{} of {} declared type(s) failed",
        failures.len(),
        total
    )))
}

/// Write one generated file under `out_dir`, returning its path or a rendered failure.
fn write_file(out_dir: &Path, file: &GeneratedFile) -> Result<PathBuf, String> {
    fs::create_dir_all(out_dir).map_err(|e| format!("Error creating '{}': {}", out_dir.display(), e))?;
    let path = out_dir.join(file.file_name());
    fs::write(&path, &file.source).map_err(|e| format!("Error writing '{}': {}", path.display(), e))?;
    Ok(path)
}

/// Generate a source file for each declared type in `manifest`.
///
/// A file that cannot be written is reported with the other failures; the remaining types are still written.
pub fn generate(manifest: &Path, out_dir: &Path, config: GeneratorConfig) -> CliResult<ExitCode> {
    validate_output_dir(out_dir)?;
    let manifest = load_manifest(manifest)?;
    let outcomes = Codegen::new(config).run(&manifest);
    let total = outcomes.len();

    let mut failures = Vec::new();
    let mut written = 0usize;
    for outcome in outcomes {
        match outcome {
            Ok(file) => match write_file(out_dir, &file) {
                Ok(path) => {
                    tracing::info!(ty = %file.declared, path = %path.display(), "wrote generated class");
                    written += 1;
                }
                Err(failure) => failures.push(failure),
            },
            Err(err) => failures.push(render_error(&err)),
        }
    }

    println!("Generated {} of {} declared type(s) into {}", written, total, out_dir.display());
    finish(failures, total)
}

/// Validate every declared type in `manifest`.
pub fn check(manifest: &Path, config: GeneratorConfig) -> CliResult<ExitCode> {
    let manifest = load_manifest(manifest)?;
    let outcomes = Codegen::new(config).check(&manifest);
    let total = outcomes.len();

    let mut failures = Vec::new();
    for outcome in outcomes {
        match outcome {
            Ok(class) => println!("ok  {} ({} properties)", class.qualified_name, class.properties.len()),
            Err(err) => failures.push(render_error(&err)),
        }
    }
    finish(failures, total)
}

/// Print the IR of declared types, optionally only one.
pub fn print_ir(manifest: &Path, type_name: Option<&str>, config: GeneratorConfig) -> CliResult<ExitCode> {
    let manifest = load_manifest(manifest)?;
    let universe = manifest.universe();
    let codegen = Codegen::new(config);

    let selected: Vec<_> = match type_name {
        Some(name) => {
            let decl = universe
                .get(name)
                .filter(|decl| decl.generate)
                .ok_or_else(|| CliError::failure(format!("Error: no declared type named '{}'", name)))?;
            vec![decl]
        }
        None => manifest.declared().collect(),
    };

    let total = selected.len();
    let mut failures = Vec::new();
    for decl in selected {
        match codegen.generate_spec(decl, &universe) {
            Ok(spec) => println!("{}", spec),
            Err(err) => failures.push(render_error(&err)),
        }
    }
    finish(failures, total)
}
