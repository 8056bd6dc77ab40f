//! One private final field per property.

use crate::backend::ir::{IrField, Visibility};

use super::{ClassGenerator, value_ir_type};

impl ClassGenerator<'_> {
    pub(super) fn fields(&self) -> Vec<IrField> {
        self.properties()
            .iter()
            .map(|property| IrField {
                name: property.field_name.clone(),
                ty: value_ir_type(property),
                visibility: Visibility::Private,
                is_final: true,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::descriptor;
    use crate::backend::generate::generate;
    use crate::backend::ir::IrType;
    use crate::config::GeneratorConfig;

    #[test]
    fn fields_follow_property_order_and_types() {
        let spec = generate(&descriptor("app::Settings"), &GeneratorConfig::default());
        let fields: Vec<_> = spec.fields.iter().map(|f| (f.name.as_str(), f.ty.to_string())).collect();
        assert_eq!(
            fields,
            vec![
                ("userName", "String".to_string()),
                ("enabled", "bool".to_string()),
                ("tags", "HashSet<String>".to_string()),
                ("created", "app::Date".to_string()),
            ]
        );
        assert!(spec.fields.iter().all(|f| f.is_final));
        assert_eq!(spec.field("enabled").map(|f| &f.ty), Some(&IrType::bool()));
    }
}
