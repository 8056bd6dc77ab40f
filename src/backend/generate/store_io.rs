//! `load` and `save` against the preference store.
//!
//! Properties using the identity converter read and write the store directly; all others go through their converter
//! (`to_converted` on load, `to_supported` on save).

use prefsmith_core::lang::store_types::StoreTypeId;

use crate::backend::ir::{ConvertDirection, IrExpr, IrExprKind, IrMethod, IrParam, IrStmt, IrType, MethodRole, Visibility};
use crate::metadata::PropertyDescriptor;

use super::{ClassGenerator, value_ir_type};

const LOAD: &str = "load";
const SAVE: &str = "save";
const STORE: &str = "store";

impl ClassGenerator<'_> {
    /// `load` and `save`, or nothing if a property has no native store type (an unvalidated descriptor).
    pub(super) fn store_io_methods(&self) -> Vec<IrMethod> {
        let store_types: Option<Vec<StoreTypeId>> = self
            .properties()
            .iter()
            .map(|property| property.storage_type().store_type())
            .collect();
        let Some(store_types) = store_types else {
            tracing::warn!(ty = %self.class.qualified_name, "skipping store I/O: a property has no store type");
            return Vec::new();
        };

        vec![self.load_method(&store_types), self.save_method(&store_types)]
    }

    fn load_method(&self, store_types: &[StoreTypeId]) -> IrMethod {
        let args = self
            .properties()
            .iter()
            .zip(store_types)
            .map(|(property, store_type)| {
                let read = IrExpr::new(
                    IrExprKind::StoreGet {
                        store: Box::new(store()),
                        store_type: *store_type,
                        key: property.key.clone(),
                        default: property.default_value.clone(),
                    },
                    IrType::from(property.storage_type()),
                );
                convert(property, ConvertDirection::ToConverted, read)
            })
            .collect();

        IrMethod {
            name: LOAD.to_string(),
            role: MethodRole::Load,
            visibility: Visibility::Public,
            is_static: true,
            is_override: false,
            params: vec![IrParam::new(STORE, IrType::Store)],
            return_type: IrType::SelfType,
            body: vec![IrStmt::Return(IrExpr::new(IrExprKind::New(args), IrType::SelfType))],
        }
    }

    fn save_method(&self, store_types: &[StoreTypeId]) -> IrMethod {
        let body = self
            .properties()
            .iter()
            .zip(store_types)
            .map(|(property, store_type)| {
                let field = IrExpr::field(property.field_name.clone(), value_ir_type(property));
                IrStmt::Expr(IrExpr::new(
                    IrExprKind::StorePut {
                        store: Box::new(store()),
                        store_type: *store_type,
                        key: property.key.clone(),
                        value: Box::new(convert(property, ConvertDirection::ToSupported, field)),
                    },
                    IrType::Unit,
                ))
            })
            .collect();

        IrMethod {
            name: SAVE.to_string(),
            role: MethodRole::Save,
            visibility: Visibility::Public,
            is_static: false,
            is_override: false,
            params: vec![IrParam::new(STORE, IrType::Store)],
            return_type: IrType::Unit,
            body,
        }
    }
}

fn store() -> IrExpr {
    IrExpr::param(STORE, IrType::Store)
}

/// Route a value through the property's converter unless it is the identity converter.
fn convert(property: &PropertyDescriptor, direction: ConvertDirection, value: IrExpr) -> IrExpr {
    let converter = &property.converter;
    if converter.is_default {
        return value;
    }
    let converted = IrType::from(&converter.converted_type);
    let supported = IrType::from(&converter.supported_type);
    let ty = match direction {
        ConvertDirection::ToConverted => converted.clone(),
        ConvertDirection::ToSupported => supported.clone(),
    };
    IrExpr::new(
        IrExprKind::Convert {
            converter: converter.qualified_name.clone(),
            direction,
            converted,
            supported,
            value: Box::new(value),
        },
        ty,
    )
}

#[cfg(test)]
mod tests {
    use super::super::tests::descriptor;
    use crate::backend::generate::generate;
    use crate::backend::ir::{ConvertDirection, IrExprKind, IrStmt, MethodRole};
    use crate::config::GeneratorConfig;
    use prefsmith_core::lang::store_types::StoreTypeId;

    #[test]
    fn load_reads_every_property_in_order() {
        let spec = generate(&descriptor("app::Settings"), &GeneratorConfig::default());
        let load = spec.method_with_role(&MethodRole::Load).unwrap();
        assert!(load.is_static);
        let [IrStmt::Return(result)] = &load.body[..] else {
            panic!("load must be a single return");
        };
        let IrExprKind::New(args) = &result.kind else {
            panic!("load must construct the class");
        };
        assert_eq!(args.len(), 4);

        match &args[1].kind {
            IrExprKind::StoreGet {
                store_type,
                key,
                default,
                ..
            } => {
                assert_eq!(*store_type, StoreTypeId::Bool);
                assert_eq!(key, "enabled");
                assert_eq!(default.as_deref(), Some("true"));
            }
            other => panic!("unexpected {:?}", other),
        }

        match &args[3].kind {
            IrExprKind::Convert {
                converter,
                direction,
                value,
                ..
            } => {
                assert_eq!(converter, "app::DateConverter");
                assert_eq!(*direction, ConvertDirection::ToConverted);
                assert!(matches!(value.kind, IrExprKind::StoreGet { store_type: StoreTypeId::Long, .. }));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn default_converter_properties_bypass_conversion() {
        let spec = generate(&descriptor("app::Settings"), &GeneratorConfig::default());
        let save = spec.method_with_role(&MethodRole::Save).unwrap();
        let converted: Vec<bool> = save
            .body
            .iter()
            .map(|stmt| match stmt {
                IrStmt::Expr(e) => match &e.kind {
                    IrExprKind::StorePut { value, .. } => matches!(value.kind, IrExprKind::Convert { .. }),
                    other => panic!("unexpected {:?}", other),
                },
                other => panic!("unexpected {:?}", other),
            })
            .collect();
        assert_eq!(converted, vec![false, false, false, true]);
    }
}
