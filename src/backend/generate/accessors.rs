//! Accessor overrides.

use crate::backend::ir::{IrExpr, IrMethod, IrStmt, MethodRole, Visibility};

use super::{ClassGenerator, value_ir_type};

impl ClassGenerator<'_> {
    /// One override per property returning the (defensively copied) field.
    pub(super) fn accessor_methods(&self) -> Vec<IrMethod> {
        self.properties()
            .iter()
            .map(|property| {
                let ty = value_ir_type(property);
                IrMethod {
                    name: property.accessor_name.clone(),
                    role: MethodRole::Accessor {
                        field: property.field_name.clone(),
                    },
                    visibility: Visibility::Public,
                    is_static: false,
                    is_override: true,
                    params: Vec::new(),
                    return_type: ty.clone(),
                    body: vec![IrStmt::Return(
                        IrExpr::field(property.field_name.clone(), ty).unmodifiable(),
                    )],
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::descriptor;
    use crate::backend::generate::generate;
    use crate::backend::ir::{IrExprKind, IrStmt, MethodRole};
    use crate::config::GeneratorConfig;

    #[test]
    fn container_accessor_returns_a_copy() {
        let spec = generate(&descriptor("app::Settings"), &GeneratorConfig::default());
        let tags = spec.method("getTags").unwrap();
        assert_eq!(
            tags.role,
            MethodRole::Accessor {
                field: "tags".to_string()
            }
        );
        assert!(matches!(
            &tags.body[..],
            [IrStmt::Return(e)] if matches!(e.kind, IrExprKind::Unmodifiable { .. })
        ));

        let name = spec.method("getUserName").unwrap();
        assert!(matches!(
            &name.body[..],
            [IrStmt::Return(e)] if matches!(&e.kind, IrExprKind::Field(f) if f == "userName")
        ));
    }
}
