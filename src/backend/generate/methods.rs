//! `equals`, `hashCode` and `toString`.

use crate::backend::ir::{IrExpr, IrExprKind, IrMethod, IrParam, IrStmt, IrType, MethodRole, Visibility};

use super::{ClassGenerator, value_ir_type};

const EQUALS: &str = "equals";
const HASH_CODE: &str = "hashCode";
const TO_STRING: &str = "toString";
const OTHER: &str = "object";
const THAT: &str = "that";

impl ClassGenerator<'_> {
    /// Identity, then type compatibility, then field-by-field against the other instance's accessors.
    pub(super) fn equals_method(&self) -> IrMethod {
        let declared = self.class.qualified_name.clone();
        let declared_ty = IrType::named(declared.clone());
        let other = IrExpr::param(OTHER, IrType::Any);

        let identity = IrExpr::new(IrExprKind::Identity(Box::new(other.clone())), IrType::bool());
        let instance_of = IrExpr::new(
            IrExprKind::InstanceOf {
                value: Box::new(other.clone()),
                type_name: declared.clone(),
            },
            IrType::bool(),
        );
        let cast = IrExpr::new(
            IrExprKind::Cast {
                value: Box::new(other),
                type_name: declared,
            },
            declared_ty.clone(),
        );

        let comparisons = self
            .properties()
            .iter()
            .map(|property| {
                let ty = value_ir_type(property);
                let theirs = IrExpr::new(
                    IrExprKind::AccessorCall {
                        target: Box::new(IrExpr::local(THAT, declared_ty.clone())),
                        accessor: property.accessor_name.clone(),
                    },
                    ty.clone(),
                );
                IrExpr::eq(IrExpr::field(property.field_name.clone(), ty), theirs)
            })
            .collect();

        IrMethod {
            name: EQUALS.to_string(),
            role: MethodRole::Equals,
            visibility: Visibility::Public,
            is_static: false,
            is_override: true,
            params: vec![IrParam {
                name: OTHER.to_string(),
                ty: IrType::Any,
                non_null: false,
            }],
            return_type: IrType::bool(),
            body: vec![
                IrStmt::return_if(identity, IrExpr::bool_lit(true)),
                IrStmt::return_if(IrExpr::not(instance_of), IrExpr::bool_lit(false)),
                IrStmt::Let {
                    name: THAT.to_string(),
                    value: cast,
                },
                IrStmt::Return(IrExpr::new(IrExprKind::And(comparisons), IrType::bool())),
            ],
        }
    }

    pub(super) fn hash_code_method(&self) -> IrMethod {
        let values = self
            .properties()
            .iter()
            .map(|property| IrExpr::field(property.field_name.clone(), value_ir_type(property)))
            .collect();
        let fold = IrExpr::new(
            IrExprKind::HashFold {
                seed: self.config.hash_seed,
                multiplier: self.config.hash_multiplier,
                values,
            },
            IrType::i32(),
        );

        IrMethod {
            name: HASH_CODE.to_string(),
            role: MethodRole::HashCode,
            visibility: Visibility::Public,
            is_static: false,
            is_override: true,
            params: Vec::new(),
            return_type: IrType::i32(),
            body: vec![IrStmt::Return(fold)],
        }
    }

    pub(super) fn to_string_method(&self) -> IrMethod {
        let entries = self
            .properties()
            .iter()
            .map(|property| {
                (
                    property.field_name.clone(),
                    IrExpr::field(property.field_name.clone(), value_ir_type(property)),
                )
            })
            .collect();
        let describe = IrExpr::new(
            IrExprKind::Describe {
                name: self.class.simple_name.clone(),
                entries,
            },
            IrType::String,
        );

        IrMethod {
            name: TO_STRING.to_string(),
            role: MethodRole::ToString,
            visibility: Visibility::Public,
            is_static: false,
            is_override: true,
            params: Vec::new(),
            return_type: IrType::String,
            body: vec![IrStmt::Return(describe)],
        }
    }
}
