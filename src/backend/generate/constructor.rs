//! The all-properties constructor.
//!
//! Parameters follow property order. Mutable containers are stored as immutable copies so later changes to the
//! caller's argument never reach the instance.

use crate::backend::ir::{IrConstructor, IrExpr, IrParam, IrStmt, Visibility};

use super::{ClassGenerator, value_ir_type};

impl ClassGenerator<'_> {
    pub(super) fn constructor(&self) -> IrConstructor {
        let params = self
            .properties()
            .iter()
            .map(|property| IrParam::new(property.field_name.clone(), value_ir_type(property)))
            .collect();

        let body = self
            .properties()
            .iter()
            .map(|property| IrStmt::AssignField {
                field: property.field_name.clone(),
                value: IrExpr::param(property.field_name.clone(), value_ir_type(property)).unmodifiable(),
            })
            .collect();

        IrConstructor {
            visibility: Visibility::Public,
            params,
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::descriptor;
    use crate::backend::generate::generate;
    use crate::backend::ir::{IrExprKind, IrStmt};
    use crate::config::GeneratorConfig;

    #[test]
    fn non_primitive_parameters_are_non_null() {
        let spec = generate(&descriptor("app::Settings"), &GeneratorConfig::default());
        let flags: Vec<_> = spec
            .constructor
            .params
            .iter()
            .map(|p| (p.name.as_str(), p.non_null))
            .collect();
        assert_eq!(
            flags,
            vec![("userName", true), ("enabled", false), ("tags", true), ("created", true)]
        );
    }

    #[test]
    fn only_mutable_containers_are_copied() {
        let spec = generate(&descriptor("app::Settings"), &GeneratorConfig::default());
        let copied: Vec<_> = spec
            .constructor
            .body
            .iter()
            .filter_map(|stmt| match stmt {
                IrStmt::AssignField { field, value } => {
                    Some((field.as_str(), matches!(value.kind, IrExprKind::Unmodifiable { .. })))
                }
                _ => None,
            })
            .collect();
        assert_eq!(
            copied,
            vec![("userName", false), ("enabled", false), ("tags", true), ("created", false)]
        );
    }
}
