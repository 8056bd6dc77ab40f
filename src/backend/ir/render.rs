//! Text rendering of the IR.
//!
//! A compact, Java-flavoured listing used by the `ir` CLI command and by snapshot tests. It is meant for reading,
//! not compiling.

use std::fmt::{self, Write};

use prefsmith_core::lang::store_types;

use super::decl::{IrMethod, IrParam, Visibility};
use super::expr::{ConvertDirection, IrExpr, IrExprKind};
use super::stmt::IrStmt;
use super::GeneratedClassSpec;

const INDENT: &str = "    ";

impl fmt::Display for GeneratedClassSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "class {}", self.name)?;
        if let Some(supertype) = &self.supertype {
            write!(f, " extends {}", supertype)?;
        }
        if !self.interfaces.is_empty() {
            write!(f, " implements {}", self.interfaces.join(", "))?;
        }
        f.write_str(" {\n")?;

        for field in &self.fields {
            let finality = if field.is_final { " final" } else { "" };
            writeln!(f, "{INDENT}{}{} {}: {}", visibility(field.visibility), finality, field.name, field.ty)?;
        }

        f.write_str("\n")?;
        writeln!(
            f,
            "{INDENT}{} new({}) {{",
            visibility(self.constructor.visibility),
            params(&self.constructor.params)
        )?;
        write_block(f, &self.constructor.body, 2)?;
        writeln!(f, "{INDENT}}}")?;

        for method in &self.methods {
            f.write_str("\n")?;
            write_method(f, method)?;
        }
        f.write_str("}\n")
    }
}

fn visibility(v: Visibility) -> &'static str {
    match v {
        Visibility::Public => "public",
        Visibility::Private => "private",
    }
}

fn params(params: &[IrParam]) -> String {
    params
        .iter()
        .map(|p| {
            let marker = if p.non_null { "@NonNull " } else { "" };
            format!("{}{}: {}", marker, p.name, p.ty)
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn write_method(f: &mut fmt::Formatter<'_>, method: &IrMethod) -> fmt::Result {
    if method.is_override {
        writeln!(f, "{INDENT}@Override")?;
    }
    let stat = if method.is_static { " static" } else { "" };
    writeln!(
        f,
        "{INDENT}{}{} {}({}) -> {} {{",
        visibility(method.visibility),
        stat,
        method.name,
        params(&method.params),
        method.return_type
    )?;
    write_block(f, &method.body, 2)?;
    writeln!(f, "{INDENT}}}")
}

fn write_block(f: &mut fmt::Formatter<'_>, body: &[IrStmt], depth: usize) -> fmt::Result {
    for stmt in body {
        write_stmt(f, stmt, depth)?;
    }
    Ok(())
}

fn write_stmt(f: &mut fmt::Formatter<'_>, stmt: &IrStmt, depth: usize) -> fmt::Result {
    let pad = INDENT.repeat(depth);
    match stmt {
        IrStmt::Expr(e) => writeln!(f, "{pad}{}", expr(e)),
        IrStmt::Let { name, value } => writeln!(f, "{pad}let {} = {}", name, expr(value)),
        IrStmt::AssignField { field, value } => writeln!(f, "{pad}this.{} = {}", field, expr(value)),
        IrStmt::Return(value) => writeln!(f, "{pad}return {}", expr(value)),
        IrStmt::If { condition, then_branch } => {
            writeln!(f, "{pad}if {} {{", expr(condition))?;
            write_block(f, then_branch, depth + 1)?;
            writeln!(f, "{pad}}}")
        }
    }
}

/// Render one expression on a single line.
pub fn expr(e: &IrExpr) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_expr(&mut out, e);
    out
}

fn write_expr(out: &mut String, e: &IrExpr) -> fmt::Result {
    match &e.kind {
        IrExprKind::BoolLit(b) => write!(out, "{}", b),
        IrExprKind::StrLit(s) => write!(out, "{:?}", s),
        IrExprKind::This => out.write_str("this"),
        IrExprKind::Param(name) | IrExprKind::Local(name) => out.write_str(name),
        IrExprKind::Field(name) => write!(out, "this.{}", name),
        IrExprKind::Identity(other) => write!(out, "this == {}", expr(other)),
        IrExprKind::InstanceOf { value, type_name } => write!(out, "{} instanceof {}", expr(value), type_name),
        IrExprKind::Not(inner) => match inner.kind {
            IrExprKind::InstanceOf { .. } | IrExprKind::Eq(..) | IrExprKind::And(_) | IrExprKind::Identity(_) => {
                write!(out, "!({})", expr(inner))
            }
            _ => write!(out, "!{}", expr(inner)),
        },
        IrExprKind::Cast { value, type_name } => write!(out, "{} as {}", expr(value), type_name),
        IrExprKind::AccessorCall { target, accessor } => write!(out, "{}.{}()", expr(target), accessor),
        IrExprKind::Eq(l, r) => write!(out, "{} == {}", expr(l), expr(r)),
        IrExprKind::And(parts) if parts.is_empty() => out.write_str("true"),
        IrExprKind::And(parts) => {
            let rendered: Vec<_> = parts.iter().map(expr).collect();
            out.write_str(&rendered.join(" && "))
        }
        IrExprKind::HashFold {
            seed,
            multiplier,
            values,
        } => {
            let rendered: Vec<_> = values.iter().map(expr).collect();
            write!(out, "hash_fold({}, {}, [{}])", seed, multiplier, rendered.join(", "))
        }
        IrExprKind::Describe { name, entries } => {
            let rendered: Vec<_> = entries
                .iter()
                .map(|(label, value)| format!("{}={}", label, expr(value)))
                .collect();
            write!(out, "describe({:?}, {})", name, rendered.join(", "))
        }
        IrExprKind::Unmodifiable { value, container } => {
            write!(out, "{}::copy_of({})", container.frozen_counterpart().as_str(), expr(value))
        }
        IrExprKind::StoreGet {
            store,
            store_type,
            key,
            default,
        } => {
            write!(out, "{}.{}({:?}", expr(store), store_types::getter_name(*store_type), key)?;
            match default {
                Some(literal) => write!(out, ", {:?})", literal),
                None => out.write_str(")"),
            }
        }
        IrExprKind::StorePut {
            store,
            store_type,
            key,
            value,
        } => write!(
            out,
            "{}.{}({:?}, {})",
            expr(store),
            store_types::setter_name(*store_type),
            key,
            expr(value)
        ),
        IrExprKind::Convert {
            converter,
            direction,
            value,
            ..
        } => {
            let method = match direction {
                ConvertDirection::ToConverted => "to_converted",
                ConvertDirection::ToSupported => "to_supported",
            };
            write!(out, "new {}().{}({})", converter, method, expr(value))
        }
        IrExprKind::New(args) => {
            let rendered: Vec<_> = args.iter().map(expr).collect();
            write!(out, "new({})", rendered.join(", "))
        }
    }
}
