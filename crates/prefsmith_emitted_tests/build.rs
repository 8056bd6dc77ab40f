//! Runs the generator over `fixtures/settings.json` and writes each generated file to `OUT_DIR`.

use std::env::var;
use std::error::Error;
use std::fs;
use std::path::PathBuf;

use prefsmith::{Codegen, Manifest};

fn main() -> Result<(), Box<dyn Error>> {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=fixtures/settings.json");

    let manifest_dir = PathBuf::from(var("CARGO_MANIFEST_DIR")?);
    let out_dir = PathBuf::from(var("OUT_DIR")?);

    let manifest = Manifest::load(&manifest_dir.join("fixtures").join("settings.json"))?;
    for outcome in Codegen::default().run(&manifest) {
        let file = outcome?;
        fs::write(out_dir.join(file.file_name()), &file.source)?;
    }
    Ok(())
}
