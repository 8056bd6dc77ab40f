//! The generator may only use `prefsmith_runtime` as a dev-dependency, to check emitted code against it.
//!
//! This test scans the root `Cargo.toml` and fails if `prefsmith_runtime` appears in `[dependencies]`.

#[test]
fn generator_does_not_depend_on_runtime_in_main_dependencies() {
    let manifest = include_str!("../Cargo.toml");
    let mut in_dependencies = false;

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        if line.starts_with('[') {
            if line == "[dependencies]" {
                in_dependencies = true;
                continue;
            }
            if in_dependencies {
                break;
            }
        }

        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }

        let line_no_comment = line.split('#').next().unwrap_or("").trim();
        if line_no_comment.starts_with("prefsmith_runtime") {
            panic!("`prefsmith_runtime` must not appear in [dependencies]; use [dev-dependencies] instead");
        }
    }
}
