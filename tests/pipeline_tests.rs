//! End-to-end tests of the generation pipeline over the fixture manifest.

use std::path::Path;

use prefsmith::backend::ir::{ConvertDirection, IrExprKind, IrStmt, MethodRole};
use prefsmith::frontend::{ConverterRef, Manifest};
use prefsmith::{Codegen, ErrorKind, GeneratorConfig};

const FIXTURE: &str = include_str!("fixtures/settings.json");

fn manifest() -> Manifest {
    Manifest::from_json(FIXTURE).expect("fixture manifest must parse")
}

#[test]
fn fixture_loads_from_disk() {
    let loaded = Manifest::load(Path::new("tests/fixtures/settings.json")).unwrap();
    assert_eq!(loaded, manifest());
    let declared: Vec<_> = loaded.declared().map(|d| d.qualified_name.as_str()).collect();
    assert_eq!(declared, vec!["app::Settings", "app::Broken"]);
}

#[test]
fn accessor_names_become_field_names_and_keys_are_kept() {
    let manifest = manifest();
    let universe = manifest.universe();
    let class = Codegen::default()
        .describe(universe.get("app::Settings").unwrap(), &universe)
        .unwrap();

    let user_name = &class.properties[0];
    assert_eq!(user_name.field_name, "userName");
    assert_eq!(user_name.key, "user_name");

    let enabled = &class.properties[1];
    assert_eq!(enabled.field_name, "enabled");
    assert_eq!(enabled.default_value.as_deref(), Some("true"));
}

#[test]
fn abstract_converter_stops_generation_for_its_type_only() {
    let outcomes = Codegen::default().run(&manifest());
    assert_eq!(outcomes.len(), 2);
    assert!(outcomes[0].is_ok());

    let err = outcomes[1].as_ref().unwrap_err();
    let validation = err.validation().expect("expected a validation failure");
    assert_eq!(validation.kind, ErrorKind::Rule);
    assert_eq!(
        validation.message,
        "Converter class(AbstractDateConverter) must not be an abstract class or interface"
    );
}

#[test]
fn mirror_and_class_references_resolve_identically() {
    let mirrored = manifest();
    let mut by_class = manifest();
    for decl in by_class.types.iter_mut().filter(|d| d.name == "Settings") {
        for method in &mut decl.methods {
            if let Some(directive) = method.property.as_mut() {
                if let Some(ConverterRef::Mirror(name)) = &directive.converter {
                    directive.converter = Some(ConverterRef::Class(name.clone()));
                }
            }
        }
    }

    let codegen = Codegen::default();
    let generate = |m: &Manifest| {
        let universe = m.universe();
        codegen.generate_spec(universe.get("app::Settings").unwrap(), &universe).unwrap()
    };
    assert_eq!(generate(&mirrored), generate(&by_class));
}

#[test]
fn generation_is_deterministic() {
    let manifest = manifest();
    let first = Codegen::default().run(&manifest);
    let second = Codegen::default().run(&manifest);
    let sources = |outcomes: &[Result<prefsmith::GeneratedFile, prefsmith::CodegenError>]| {
        outcomes
            .iter()
            .filter_map(|o| o.as_ref().ok().map(|f| f.source.clone()))
            .collect::<Vec<_>>()
    };
    assert_eq!(sources(&first), sources(&second));
}

#[test]
fn default_converter_properties_read_the_store_directly() {
    let manifest = manifest();
    let universe = manifest.universe();
    let spec = Codegen::default()
        .generate_spec(universe.get("app::Settings").unwrap(), &universe)
        .unwrap();
    let load = spec.method_with_role(&MethodRole::Load).unwrap();
    let [IrStmt::Return(result)] = &load.body[..] else {
        panic!("load must be a single return");
    };
    let IrExprKind::New(args) = &result.kind else {
        panic!("load must construct the class");
    };
    let converted: Vec<_> = args
        .iter()
        .map(|arg| match &arg.kind {
            IrExprKind::Convert { direction, .. } => Some(*direction),
            _ => None,
        })
        .collect();
    assert_eq!(
        converted,
        vec![None, None, None, None, Some(ConvertDirection::ToConverted)]
    );
}

#[test]
fn emitted_source_is_valid_rust() {
    let config = GeneratorConfig::default();
    let outcomes = Codegen::new(config).run(&manifest());
    let file = outcomes[0].as_ref().unwrap();
    assert_eq!(file.file_name(), "app_settings_impl.rs");

    let parsed = syn::parse_file(&file.source).unwrap();
    let names: Vec<String> = parsed
        .items
        .iter()
        .filter_map(|item| match item {
            syn::Item::Struct(s) => Some(s.ident.to_string()),
            _ => None,
        })
        .collect();
    assert_eq!(names, vec!["SettingsImpl"]);
    assert!(file.source.contains("impl app::Settings for SettingsImpl"));
    assert!(file.source.contains("store.get_i32(\"launches\", 3)"));
    assert!(file.source.contains("prefsmith_runtime::Converter::<app::Date, i64>::to_converted"));
    assert_eq!(file.source.matches("prefsmith_runtime::Unordered").count(), 1);
}
