//! Converter resolution.
//!
//! A directive refers to its converter either by class name or by a mirrored type expression. Both paths end in
//! [`describe`], so the descriptor does not depend on which shape the frontend produced.

use crate::config::GeneratorConfig;
use crate::frontend::raw::{ConverterRef, RawDirective, RawTypeDecl, TypeKind};
use crate::frontend::{TypeExpr, TypeUniverse};
use crate::validation::ValidationError;
use crate::validation::errors;

use super::ValueType;

/// Simple name of the runtime converter trait a converter declaration implements.
pub const CONVERTER_TRAIT: &str = "Converter";

/// The converter a property is read and written through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterDescriptor {
    pub simple_name: String,
    pub qualified_name: String,
    /// The identity converter; properties using it bypass conversion
    pub is_default: bool,
    pub is_abstract: bool,
    pub has_default_constructor: bool,
    /// Store-side type
    pub supported_type: ValueType,
    /// Property-side type
    pub converted_type: ValueType,
}

impl ConverterDescriptor {
    /// The identity converter for a property of type `ty`.
    pub fn identity(config: &GeneratorConfig, ty: &ValueType) -> Self {
        let expr = TypeExpr::named(config.default_converter.clone());
        Self {
            simple_name: expr.simple_name().to_string(),
            qualified_name: config.default_converter.clone(),
            is_default: true,
            is_abstract: false,
            has_default_constructor: true,
            supported_type: ty.clone(),
            converted_type: ty.clone(),
        }
    }
}

/// Resolve the converter of a property declared with type `declared`.
pub fn resolve_converter(
    directive: &RawDirective,
    declared: &ValueType,
    universe: &TypeUniverse<'_>,
    config: &GeneratorConfig,
) -> Result<ConverterDescriptor, ValidationError> {
    let name = match &directive.converter {
        None => return Ok(ConverterDescriptor::identity(config, declared)),
        Some(ConverterRef::Class(name)) => name.clone(),
        Some(ConverterRef::Mirror(text)) => {
            let expr = TypeExpr::parse(text).map_err(|e| errors::invalid_type_expression(text, &e))?;
            if !ValueType::from_expr(&expr)?.is_declared() {
                return Err(errors::mirror_not_declared_type(&expr));
            }
            expr.name
        }
    };

    if name == config.default_converter {
        return Ok(ConverterDescriptor::identity(config, declared));
    }
    match universe.get(&name) {
        Some(decl) => describe(decl),
        // A bare simple name of the identity converter, unless the manifest declares its own type by that name
        None if is_default_simple_name(&name, config) => Ok(ConverterDescriptor::identity(config, declared)),
        None => Err(errors::unknown_converter(&name)),
    }
}

fn is_default_simple_name(name: &str, config: &GeneratorConfig) -> bool {
    let default = TypeExpr::named(config.default_converter.clone());
    !name.contains("::") && !name.contains('.') && name == default.simple_name()
}

/// Build the descriptor of a converter declaration.
fn describe(decl: &RawTypeDecl) -> Result<ConverterDescriptor, ValidationError> {
    let (converted_type, supported_type) = converter_types(decl)?;
    Ok(ConverterDescriptor {
        simple_name: decl.name.clone(),
        qualified_name: decl.qualified_name.clone(),
        is_default: false,
        is_abstract: decl.is_abstract || decl.kind != TypeKind::Class,
        has_default_constructor: super::has_default_constructor(decl),
        supported_type,
        converted_type,
    })
}

/// Read `Converter<Converted, Supported>` off the declaration's implemented interfaces.
fn converter_types(decl: &RawTypeDecl) -> Result<(ValueType, ValueType), ValidationError> {
    for text in &decl.interfaces {
        let expr = TypeExpr::parse(text).map_err(|e| errors::invalid_type_expression(text, &e))?;
        if expr.simple_name() == CONVERTER_TRAIT && expr.args.len() == 2 {
            let converted = ValueType::from_expr(&expr.args[0])?;
            let supported = ValueType::from_expr(&expr.args[1])?;
            return Ok((converted, supported));
        }
    }
    Err(errors::converter_without_interface(&decl.name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::Manifest;
    use crate::validation::ErrorKind;

    const MANIFEST: &str = r#"{"types": [
        {
            "name": "DateConverter",
            "qualified_name": "app::DateConverter",
            "kind": "class",
            "interfaces": ["prefsmith_runtime::Converter<app::Date, i64>"]
        },
        {
            "name": "Plain",
            "qualified_name": "app::Plain",
            "kind": "class"
        }
    ]}"#;

    fn directive(converter: Option<ConverterRef>) -> RawDirective {
        RawDirective {
            key: "k".to_string(),
            converter,
            ..RawDirective::default()
        }
    }

    #[test]
    fn missing_reference_is_identity() {
        let manifest = Manifest::from_json(MANIFEST).unwrap();
        let config = GeneratorConfig::default();
        let ty = ValueType::String;
        let converter = resolve_converter(&directive(None), &ty, &manifest.universe(), &config).unwrap();
        assert!(converter.is_default);
        assert_eq!(converter.simple_name, "DefaultConverter");
        assert_eq!(converter.supported_type, ValueType::String);
    }

    #[test]
    fn class_and_mirror_references_agree() {
        let manifest = Manifest::from_json(MANIFEST).unwrap();
        let universe = manifest.universe();
        let config = GeneratorConfig::default();
        let ty = ValueType::parse("app::Date").unwrap();

        let by_class = resolve_converter(
            &directive(Some(ConverterRef::Class("app::DateConverter".to_string()))),
            &ty,
            &universe,
            &config,
        )
        .unwrap();
        let by_mirror = resolve_converter(
            &directive(Some(ConverterRef::Mirror("app::DateConverter".to_string()))),
            &ty,
            &universe,
            &config,
        )
        .unwrap();

        assert_eq!(by_class, by_mirror);
        assert_eq!(by_class.supported_type.to_string(), "i64");
        assert_eq!(by_class.converted_type, ty);
        assert!(!by_class.is_default);
    }

    #[test]
    fn explicit_default_converter_is_identity() {
        let manifest = Manifest::from_json(MANIFEST).unwrap();
        let config = GeneratorConfig::default();
        let reference = ConverterRef::Mirror("prefsmith_runtime::DefaultConverter".to_string());
        let converter = resolve_converter(&directive(Some(reference)), &ValueType::String, &manifest.universe(), &config)
            .unwrap();
        assert!(converter.is_default);
    }

    #[test]
    fn simple_default_converter_name_is_identity() {
        let manifest = Manifest::from_json(MANIFEST).unwrap();
        let config = GeneratorConfig::default();
        let reference = ConverterRef::Class("DefaultConverter".to_string());
        let converter = resolve_converter(&directive(Some(reference)), &ValueType::String, &manifest.universe(), &config)
            .unwrap();
        assert!(converter.is_default);
        assert_eq!(converter.supported_type, ValueType::String);

        let renamed = GeneratorConfig::new().with_default_converter("crate::Identity");
        let reference = ConverterRef::Class("DefaultConverter".to_string());
        let err = resolve_converter(&directive(Some(reference)), &ValueType::String, &manifest.universe(), &renamed)
            .unwrap_err();
        assert_eq!(err.message, "Converter class(DefaultConverter) is not declared");
    }

    #[test]
    fn declared_type_shadows_the_default_simple_name() {
        let manifest = Manifest::from_json(
            r#"{"types": [{
                "name": "DefaultConverter",
                "qualified_name": "app::DefaultConverter",
                "kind": "class",
                "interfaces": ["prefsmith_runtime::Converter<app::Date, i64>"]
            }]}"#,
        )
        .unwrap();
        let reference = ConverterRef::Class("DefaultConverter".to_string());
        let ty = ValueType::parse("app::Date").unwrap();
        let converter =
            resolve_converter(&directive(Some(reference)), &ty, &manifest.universe(), &GeneratorConfig::default())
                .unwrap();
        assert!(!converter.is_default);
        assert_eq!(converter.qualified_name, "app::DefaultConverter");
    }

    #[test]
    fn mirror_of_builtin_is_an_invariant_violation() {
        let manifest = Manifest::from_json(MANIFEST).unwrap();
        let config = GeneratorConfig::default();
        let reference = ConverterRef::Mirror("Vec<String>".to_string());
        let err = resolve_converter(&directive(Some(reference)), &ValueType::String, &manifest.universe(), &config)
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Invariant);
    }

    #[test]
    fn unresolvable_references_are_structural() {
        let manifest = Manifest::from_json(MANIFEST).unwrap();
        let universe = manifest.universe();
        let config = GeneratorConfig::default();

        let unknown = directive(Some(ConverterRef::Class("app::Missing".to_string())));
        let err = resolve_converter(&unknown, &ValueType::String, &universe, &config).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Structural);
        assert_eq!(err.message, "Converter class(app::Missing) is not declared");

        let plain = directive(Some(ConverterRef::Class("app::Plain".to_string())));
        let err = resolve_converter(&plain, &ValueType::String, &universe, &config).unwrap_err();
        assert_eq!(err.message, "Converter class(Plain) must implement Converter<Converted, Supported>");
    }
}
