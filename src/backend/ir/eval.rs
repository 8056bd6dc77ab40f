//! IR evaluator
//!
//! Executes a [`GeneratedClassSpec`] directly, against an in-memory store, so tests can check the behaviour of
//! generated classes (equality, hashing, defensive copies, store round trips) without compiling emitted code.
//!
//! ## Notes
//!
//! - Containers are shared handles (`Rc<RefCell<..>>`) tagged mutable or frozen, so mutating a caller's container
//!   after construction is observable and writing to a frozen container is an error.
//! - Hash codes use `prefsmith_core::hashing`, the same functions the runtime crate uses.
//! - Converters are registered as pairs of closures keyed by the converter's qualified name.
//!
//! ## Examples
//!
//! ```rust,ignore
//! let eval = Evaluator::new(&spec);
//! let a = eval.construct(vec![Value::str("ada"), Value::Bool(true)])?;
//! let b = eval.construct(vec![Value::str("ada"), Value::Bool(true)])?;
//! assert!(eval.equals(&a, &b)?);
//! assert_eq!(eval.hash_code(&a)?, eval.hash_code(&b)?);
//! ```

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::rc::Rc;

use prefsmith_core::hashing;
use prefsmith_core::lang::store_types::StoreTypeId;

use super::decl::MethodRole;
use super::expr::{ConvertDirection, IrExpr, IrExprKind};
use super::literal::{LiteralError, StoreLiteral, parse_default};
use super::stmt::IrStmt;
use super::{GeneratedClassSpec, IrMethod};

/// Error while evaluating IR.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvalError {
    #[error("no method `{0}` on the generated class")]
    UnknownMethod(String),
    #[error("`{method}` takes {expected} argument(s) but {found} were given")]
    Arity {
        method: String,
        expected: usize,
        found: usize,
    },
    #[error("unbound name `{0}`")]
    Unbound(String),
    #[error("expected {expected}, found {found}")]
    TypeMismatch { expected: &'static str, found: String },
    #[error("cannot modify a frozen container")]
    Frozen,
    #[error("no converter registered for `{0}`")]
    UnknownConverter(String),
    #[error("converter failed: {0}")]
    Converter(String),
    #[error(transparent)]
    Literal(#[from] LiteralError),
    #[error("method `{0}` finished without returning a value")]
    MissingReturn(String),
    #[error("field `{0}` was not initialized by the constructor")]
    Uninitialized(String),
    #[error("no store available")]
    NoStore,
}

/// A shared, possibly frozen, container payload.
#[derive(Debug, Clone)]
pub struct Shared<T> {
    cell: Rc<RefCell<T>>,
    mutable: bool,
}

impl<T: Clone> Shared<T> {
    fn new(value: T, mutable: bool) -> Self {
        Self {
            cell: Rc::new(RefCell::new(value)),
            mutable,
        }
    }

    fn snapshot(&self) -> T {
        self.cell.borrow().clone()
    }

    fn frozen_copy(&self) -> Self {
        Self::new(self.snapshot(), false)
    }

    fn update(&self, f: impl FnOnce(&mut T)) -> Result<(), EvalError> {
        if !self.mutable {
            return Err(EvalError::Frozen);
        }
        f(&mut self.cell.borrow_mut());
        Ok(())
    }
}

/// An instance of the generated class.
#[derive(Debug)]
pub struct Instance {
    /// Qualified name of the declared type the class implements
    pub declared: String,
    /// Field values in declaration order
    pub fields: Vec<(String, Value)>,
}

/// A runtime value.
#[derive(Debug, Clone)]
pub enum Value {
    Unit,
    /// Absent nullable value
    Null,
    Bool(bool),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Char(char),
    Str(String),
    List(Shared<Vec<Value>>),
    Set(Shared<Vec<Value>>),
    Map(Shared<Vec<(Value, Value)>>),
    Instance(Rc<Instance>),
}

impl Value {
    pub fn str(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    /// A mutable list.
    pub fn list(items: impl IntoIterator<Item = Value>) -> Self {
        Value::List(Shared::new(items.into_iter().collect(), true))
    }

    /// A mutable set; duplicates are dropped.
    pub fn set(items: impl IntoIterator<Item = Value>) -> Self {
        let mut unique: Vec<Value> = Vec::new();
        for item in items {
            if !unique.contains(&item) {
                unique.push(item);
            }
        }
        Value::Set(Shared::new(unique, true))
    }

    /// A mutable map; later entries replace earlier ones with an equal key.
    pub fn map(entries: impl IntoIterator<Item = (Value, Value)>) -> Self {
        let mut unique: Vec<(Value, Value)> = Vec::new();
        for (key, value) in entries {
            match unique.iter_mut().find(|(k, _)| *k == key) {
                Some(slot) => slot.1 = value,
                None => unique.push((key, value)),
            }
        }
        Value::Map(Shared::new(unique, true))
    }

    /// A mutable set of strings.
    pub fn string_set<S: Into<String>>(items: impl IntoIterator<Item = S>) -> Self {
        Value::set(items.into_iter().map(|s| Value::Str(s.into())))
    }

    /// Whether this is a container that accepts modification.
    pub fn is_mutable(&self) -> bool {
        match self {
            Value::List(s) | Value::Set(s) => s.mutable,
            Value::Map(s) => s.mutable,
            _ => false,
        }
    }

    /// Append to a list or add to a set.
    pub fn push(&self, item: Value) -> Result<(), EvalError> {
        match self {
            Value::List(s) => s.update(|items| items.push(item)),
            Value::Set(s) => s.update(|items| {
                if !items.contains(&item) {
                    items.push(item);
                }
            }),
            other => Err(mismatch("a list or set", other)),
        }
    }

    /// Insert into a map.
    pub fn insert(&self, key: Value, value: Value) -> Result<(), EvalError> {
        match self {
            Value::Map(s) => s.update(|entries| match entries.iter_mut().find(|(k, _)| *k == key) {
                Some(slot) => slot.1 = value,
                None => entries.push((key, value)),
            }),
            other => Err(mismatch("a map", other)),
        }
    }

    /// Number of elements of a container.
    pub fn len(&self) -> Option<usize> {
        match self {
            Value::List(s) | Value::Set(s) => Some(s.cell.borrow().len()),
            Value::Map(s) => Some(s.cell.borrow().len()),
            _ => None,
        }
    }

    /// Immutable copy of a container; other values are returned as they are.
    fn frozen(&self) -> Value {
        match self {
            Value::List(s) if s.mutable => Value::List(s.frozen_copy()),
            Value::Set(s) if s.mutable => Value::Set(s.frozen_copy()),
            Value::Map(s) if s.mutable => Value::Map(s.frozen_copy()),
            other => other.clone(),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Value::Unit => "unit",
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "i32",
            Value::Long(_) => "i64",
            Value::Float(_) => "f32",
            Value::Double(_) => "f64",
            Value::Char(_) => "char",
            Value::Str(_) => "String",
            Value::List(_) => "list",
            Value::Set(_) => "set",
            Value::Map(_) => "map",
            Value::Instance(_) => "instance",
        }
    }

    /// Stable hash code, matching the runtime crate's `HashCode`.
    pub fn hash_code(&self) -> i32 {
        match self {
            Value::Unit | Value::Null => 0,
            Value::Bool(b) => hashing::bool_hash(*b),
            Value::Int(i) => hashing::int_hash(*i),
            Value::Long(l) => hashing::long_hash(*l),
            Value::Float(x) => hashing::float_hash(*x),
            Value::Double(x) => hashing::double_hash(*x),
            Value::Char(c) => hashing::char_hash(*c),
            Value::Str(s) => hashing::str_hash(s),
            Value::List(s) => hashing::ordered_hash(s.cell.borrow().iter().map(Value::hash_code)),
            Value::Set(s) => hashing::unordered_hash(s.cell.borrow().iter().map(Value::hash_code)),
            Value::Map(s) => hashing::unordered_hash(
                s.cell
                    .borrow()
                    .iter()
                    .map(|(k, v)| hashing::entry_hash(k.hash_code(), v.hash_code())),
            ),
            Value::Instance(i) => hashing::ordered_hash(i.fields.iter().map(|(_, v)| v.hash_code())),
        }
    }
}

fn mismatch(expected: &'static str, found: &Value) -> EvalError {
    EvalError::TypeMismatch {
        expected,
        found: found.kind().to_string(),
    }
}

fn unordered_eq(a: &[Value], b: &[Value]) -> bool {
    a.len() == b.len() && a.iter().all(|x| b.contains(x))
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Unit, Value::Unit) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Long(a), Value::Long(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Double(a), Value::Double(b)) => a == b,
            (Value::Char(a), Value::Char(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => *a.cell.borrow() == *b.cell.borrow(),
            (Value::Set(a), Value::Set(b)) => unordered_eq(&a.cell.borrow(), &b.cell.borrow()),
            (Value::Map(a), Value::Map(b)) => {
                let (a, b) = (a.cell.borrow(), b.cell.borrow());
                a.len() == b.len()
                    && a
                        .iter()
                        .all(|(k, v)| b.iter().any(|(k2, v2)| k == k2 && v == v2))
            }
            (Value::Instance(a), Value::Instance(b)) => {
                Rc::ptr_eq(a, b) || (a.declared == b.declared && a.fields == b.fields)
            }
            _ => false,
        }
    }
}

fn write_joined<'v>(
    f: &mut fmt::Formatter<'_>,
    open: &str,
    items: impl Iterator<Item = &'v Value>,
    close: &str,
) -> fmt::Result {
    f.write_str(open)?;
    for (i, item) in items.enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item)?;
    }
    f.write_str(close)
}

/// Debug-style rendering, the way emitted `Display` impls print field values; set and map entries are sorted.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unit => f.write_str("()"),
            Value::Null => f.write_str("None"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Long(l) => write!(f, "{}", l),
            Value::Float(x) => write!(f, "{:?}", x),
            Value::Double(x) => write!(f, "{:?}", x),
            Value::Char(c) => write!(f, "{:?}", c),
            Value::Str(s) => write!(f, "{:?}", s),
            Value::List(s) => write_joined(f, "[", s.cell.borrow().iter(), "]"),
            Value::Set(s) => {
                let mut items: Vec<String> = s.cell.borrow().iter().map(Value::to_string).collect();
                items.sort();
                write!(f, "{{{}}}", items.join(", "))
            }
            Value::Map(s) => {
                let mut entries: Vec<String> = s.cell.borrow().iter().map(|(k, v)| format!("{}: {}", k, v)).collect();
                entries.sort();
                write!(f, "{{{}}}", entries.join(", "))
            }
            Value::Instance(i) => {
                f.write_str(&i.declared)?;
                f.write_str("{")?;
                for (n, (name, value)) in i.fields.iter().enumerate() {
                    if n > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}={}", name, value)?;
                }
                f.write_str("}")
            }
        }
    }
}

/// In-memory preference store for evaluation.
///
/// Mirrors the runtime `MemoryStore`: a read whose stored value has another type yields the default.
#[derive(Debug, Clone, Default)]
pub struct EvalStore {
    values: BTreeMap<String, Value>,
}

impl EvalStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&mut self, key: impl Into<String>, value: Value) {
        self.values.insert(key.into(), value.frozen_into_store());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn read(&self, store_type: StoreTypeId, key: &str, default: Value) -> Value {
        match self.values.get(key) {
            Some(value) if holds(store_type, value) => value.clone().thawed(),
            _ => default,
        }
    }
}

impl Value {
    /// Stores keep their own snapshot of containers.
    fn frozen_into_store(self) -> Value {
        match &self {
            Value::Set(s) => Value::Set(Shared::new(s.snapshot(), false)),
            _ => self,
        }
    }

    /// Values read from a store are fresh, mutable copies.
    fn thawed(self) -> Value {
        match &self {
            Value::Set(s) => Value::Set(Shared::new(s.snapshot(), true)),
            _ => self,
        }
    }
}

fn holds(store_type: StoreTypeId, value: &Value) -> bool {
    match (store_type, value) {
        (StoreTypeId::Bool, Value::Bool(_))
        | (StoreTypeId::Int, Value::Int(_))
        | (StoreTypeId::Long, Value::Long(_))
        | (StoreTypeId::Float, Value::Float(_))
        | (StoreTypeId::String, Value::Str(_)) => true,
        (StoreTypeId::StringSet, Value::Set(s)) => s.cell.borrow().iter().all(|v| matches!(v, Value::Str(_))),
        _ => false,
    }
}

fn literal_value(literal: StoreLiteral) -> Value {
    match literal {
        StoreLiteral::Bool(b) => Value::Bool(b),
        StoreLiteral::Int(i) => Value::Int(i),
        StoreLiteral::Long(l) => Value::Long(l),
        StoreLiteral::Float(x) => Value::Float(x),
        StoreLiteral::String(s) => Value::Str(s),
        StoreLiteral::StringSet(items) => Value::string_set(items),
    }
}

type ConvertFn = Box<dyn Fn(Value) -> Result<Value, EvalError>>;

struct ConverterFns {
    to_converted: ConvertFn,
    to_supported: ConvertFn,
}

enum StoreAccess<'s> {
    None,
    Read(&'s EvalStore),
    Write(&'s mut EvalStore),
}

struct Frame<'s> {
    this: Option<Value>,
    locals: HashMap<String, Value>,
    store: StoreAccess<'s>,
    /// Fields assigned so far, while a constructor runs
    building: Vec<(String, Value)>,
}

impl<'s> Frame<'s> {
    fn new(this: Option<Value>, store: StoreAccess<'s>) -> Self {
        Self {
            this,
            locals: HashMap::new(),
            store,
            building: Vec::new(),
        }
    }
}

/// Executes the IR of one generated class.
pub struct Evaluator<'a> {
    spec: &'a GeneratedClassSpec,
    converters: HashMap<String, ConverterFns>,
}

impl<'a> Evaluator<'a> {
    pub fn new(spec: &'a GeneratedClassSpec) -> Self {
        Self {
            spec,
            converters: HashMap::new(),
        }
    }

    /// Register a converter by qualified name.
    pub fn with_converter(
        mut self,
        name: impl Into<String>,
        to_converted: impl Fn(Value) -> Result<Value, EvalError> + 'static,
        to_supported: impl Fn(Value) -> Result<Value, EvalError> + 'static,
    ) -> Self {
        self.converters.insert(
            name.into(),
            ConverterFns {
                to_converted: Box::new(to_converted),
                to_supported: Box::new(to_supported),
            },
        );
        self
    }

    /// Run the constructor.
    pub fn construct(&self, args: Vec<Value>) -> Result<Value, EvalError> {
        let ctor = &self.spec.constructor;
        check_arity("new", ctor.params.len(), args.len())?;
        let mut frame = Frame::new(None, StoreAccess::None);
        for (param, arg) in ctor.params.iter().zip(args) {
            frame.locals.insert(param.name.clone(), arg);
        }
        self.exec_block(&ctor.body, &mut frame)?;

        let mut assigned: HashMap<String, Value> = frame.building.into_iter().collect();
        let fields = self
            .spec
            .fields
            .iter()
            .map(|field| {
                assigned
                    .remove(&field.name)
                    .map(|value| (field.name.clone(), value))
                    .ok_or_else(|| EvalError::Uninitialized(field.name.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Value::Instance(Rc::new(Instance {
            declared: self.spec.declared_qualified_name.clone(),
            fields,
        })))
    }

    /// Call an instance method by name.
    pub fn call(&self, receiver: &Value, method: &str, args: Vec<Value>) -> Result<Value, EvalError> {
        let method = self.instance_method(method)?;
        self.invoke(method, Some(receiver.clone()), args, StoreAccess::None)
    }

    /// Run the generated `equals`.
    pub fn equals(&self, a: &Value, b: &Value) -> Result<bool, EvalError> {
        let method = self.role(&MethodRole::Equals)?;
        match self.invoke(method, Some(a.clone()), vec![b.clone()], StoreAccess::None)? {
            Value::Bool(result) => Ok(result),
            other => Err(mismatch("bool", &other)),
        }
    }

    /// Run the generated `hashCode`.
    pub fn hash_code(&self, value: &Value) -> Result<i32, EvalError> {
        let method = self.role(&MethodRole::HashCode)?;
        match self.invoke(method, Some(value.clone()), Vec::new(), StoreAccess::None)? {
            Value::Int(result) => Ok(result),
            other => Err(mismatch("i32", &other)),
        }
    }

    /// Run the generated `toString`.
    pub fn describe(&self, value: &Value) -> Result<String, EvalError> {
        let method = self.role(&MethodRole::ToString)?;
        match self.invoke(method, Some(value.clone()), Vec::new(), StoreAccess::None)? {
            Value::Str(result) => Ok(result),
            other => Err(mismatch("String", &other)),
        }
    }

    /// Run the generated `load`.
    pub fn load(&self, store: &EvalStore) -> Result<Value, EvalError> {
        let method = self.role(&MethodRole::Load)?;
        self.invoke(method, None, Vec::new(), StoreAccess::Read(store))
    }

    /// Run the generated `save`.
    pub fn save(&self, receiver: &Value, store: &mut EvalStore) -> Result<(), EvalError> {
        let method = self.role(&MethodRole::Save)?;
        self.invoke(method, Some(receiver.clone()), Vec::new(), StoreAccess::Write(store))
            .map(|_| ())
    }

    fn instance_method(&self, name: &str) -> Result<&'a IrMethod, EvalError> {
        self.spec
            .methods
            .iter()
            .find(|m| m.name == name && !m.is_static)
            .ok_or_else(|| EvalError::UnknownMethod(name.to_string()))
    }

    fn role(&self, role: &MethodRole) -> Result<&'a IrMethod, EvalError> {
        self.spec
            .method_with_role(role)
            .ok_or_else(|| EvalError::UnknownMethod(format!("{:?}", role)))
    }

    fn invoke(
        &self,
        method: &IrMethod,
        this: Option<Value>,
        args: Vec<Value>,
        store: StoreAccess<'_>,
    ) -> Result<Value, EvalError> {
        // The store parameter is bound through the frame, not as a value.
        let value_params: Vec<_> = method.params.iter().filter(|p| p.ty != super::IrType::Store).collect();
        check_arity(&method.name, value_params.len(), args.len())?;

        let mut frame = Frame::new(this, store);
        for (param, arg) in value_params.into_iter().zip(args) {
            frame.locals.insert(param.name.clone(), arg);
        }
        match self.exec_block(&method.body, &mut frame)? {
            Some(value) => Ok(value),
            None if method.return_type == super::IrType::Unit => Ok(Value::Unit),
            None => Err(EvalError::MissingReturn(method.name.clone())),
        }
    }

    fn exec_block(&self, body: &[IrStmt], frame: &mut Frame<'_>) -> Result<Option<Value>, EvalError> {
        for stmt in body {
            if let Some(value) = self.exec(stmt, frame)? {
                return Ok(Some(value));
            }
        }
        Ok(None)
    }

    fn exec(&self, stmt: &IrStmt, frame: &mut Frame<'_>) -> Result<Option<Value>, EvalError> {
        match stmt {
            IrStmt::Expr(e) => {
                self.eval(e, frame)?;
                Ok(None)
            }
            IrStmt::Let { name, value } => {
                let value = self.eval(value, frame)?;
                frame.locals.insert(name.clone(), value);
                Ok(None)
            }
            IrStmt::AssignField { field, value } => {
                let value = self.eval(value, frame)?;
                frame.building.push((field.clone(), value));
                Ok(None)
            }
            IrStmt::Return(value) => self.eval(value, frame).map(Some),
            IrStmt::If {
                condition,
                then_branch,
            } => match self.eval(condition, frame)? {
                Value::Bool(true) => self.exec_block(then_branch, frame),
                Value::Bool(false) => Ok(None),
                other => Err(mismatch("bool", &other)),
            },
        }
    }

    fn eval(&self, expr: &IrExpr, frame: &mut Frame<'_>) -> Result<Value, EvalError> {
        match &expr.kind {
            IrExprKind::BoolLit(b) => Ok(Value::Bool(*b)),
            IrExprKind::StrLit(s) => Ok(Value::Str(s.clone())),
            IrExprKind::This => frame.this.clone().ok_or_else(|| EvalError::Unbound("this".to_string())),
            IrExprKind::Param(name) | IrExprKind::Local(name) => frame
                .locals
                .get(name)
                .cloned()
                .ok_or_else(|| EvalError::Unbound(name.clone())),
            IrExprKind::Field(name) => {
                let this = frame.this.as_ref().ok_or_else(|| EvalError::Unbound("this".to_string()))?;
                field_of(this, name)
            }
            IrExprKind::Identity(other) => {
                let other = self.eval(other, frame)?;
                Ok(Value::Bool(match (&frame.this, &other) {
                    (Some(Value::Instance(a)), Value::Instance(b)) => Rc::ptr_eq(a, b),
                    _ => false,
                }))
            }
            IrExprKind::InstanceOf { value, type_name } => {
                let value = self.eval(value, frame)?;
                Ok(Value::Bool(matches!(&value, Value::Instance(i) if &i.declared == type_name)))
            }
            IrExprKind::Not(inner) => match self.eval(inner, frame)? {
                Value::Bool(b) => Ok(Value::Bool(!b)),
                other => Err(mismatch("bool", &other)),
            },
            IrExprKind::Cast { value, .. } => match self.eval(value, frame)? {
                instance @ Value::Instance(_) => Ok(instance),
                other => Err(mismatch("instance", &other)),
            },
            IrExprKind::AccessorCall { target, accessor } => {
                let target = self.eval(target, frame)?;
                self.call(&target, accessor, Vec::new())
            }
            IrExprKind::Eq(left, right) => {
                let left = self.eval(left, frame)?;
                let right = self.eval(right, frame)?;
                Ok(Value::Bool(left == right))
            }
            IrExprKind::And(parts) => {
                for part in parts {
                    match self.eval(part, frame)? {
                        Value::Bool(true) => {}
                        Value::Bool(false) => return Ok(Value::Bool(false)),
                        other => return Err(mismatch("bool", &other)),
                    }
                }
                Ok(Value::Bool(true))
            }
            IrExprKind::HashFold {
                seed,
                multiplier,
                values,
            } => {
                let mut acc = *seed;
                for value in values {
                    acc = hashing::combine(acc, *multiplier, self.eval(value, frame)?.hash_code());
                }
                Ok(Value::Int(acc))
            }
            IrExprKind::Describe { name, entries } => {
                let mut rendered = Vec::with_capacity(entries.len());
                for (label, value) in entries {
                    rendered.push(format!("{}={}", label, self.eval(value, frame)?));
                }
                Ok(Value::Str(format!("{}{{{}}}", name, rendered.join(", "))))
            }
            IrExprKind::Unmodifiable { value, .. } => Ok(self.eval(value, frame)?.frozen()),
            IrExprKind::StoreGet {
                store_type,
                key,
                default,
                ..
            } => {
                let default = literal_value(parse_default(*store_type, default.as_deref())?);
                match &frame.store {
                    StoreAccess::Read(store) => Ok(store.read(*store_type, key, default)),
                    StoreAccess::Write(store) => Ok(store.read(*store_type, key, default)),
                    StoreAccess::None => Err(EvalError::NoStore),
                }
            }
            IrExprKind::StorePut {
                store_type,
                key,
                value,
                ..
            } => {
                let value = self.eval(value, frame)?;
                if !holds(*store_type, &value) {
                    return Err(mismatch(prefsmith_core::lang::store_types::info(*store_type).spelling, &value));
                }
                match &mut frame.store {
                    StoreAccess::Write(store) => {
                        store.put(key.clone(), value);
                        Ok(Value::Unit)
                    }
                    StoreAccess::Read(_) | StoreAccess::None => Err(EvalError::NoStore),
                }
            }
            IrExprKind::Convert {
                converter,
                direction,
                value,
                ..
            } => {
                let value = self.eval(value, frame)?;
                let fns = self
                    .converters
                    .get(converter)
                    .ok_or_else(|| EvalError::UnknownConverter(converter.clone()))?;
                match direction {
                    ConvertDirection::ToConverted => (fns.to_converted)(value),
                    ConvertDirection::ToSupported => (fns.to_supported)(value),
                }
            }
            IrExprKind::New(args) => {
                let args = args
                    .iter()
                    .map(|arg| self.eval(arg, frame))
                    .collect::<Result<Vec<_>, _>>()?;
                self.construct(args)
            }
        }
    }
}

fn check_arity(method: &str, expected: usize, found: usize) -> Result<(), EvalError> {
    if expected == found {
        Ok(())
    } else {
        Err(EvalError::Arity {
            method: method.to_string(),
            expected,
            found,
        })
    }
}

fn field_of(value: &Value, name: &str) -> Result<Value, EvalError> {
    match value {
        Value::Instance(instance) => instance
            .fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
            .ok_or_else(|| EvalError::Unbound(name.to_string())),
        other => Err(mismatch("instance", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_equality_ignores_order() {
        let a = Value::string_set(["x", "y"]);
        let b = Value::string_set(["y", "x", "y"]);
        assert_eq!(a, b);
        assert_eq!(a.hash_code(), b.hash_code());
        assert_eq!(b.len(), Some(2));
    }

    #[test]
    fn frozen_copies_are_detached_and_read_only() {
        let list = Value::list([Value::Int(1)]);
        let frozen = list.frozen();
        list.push(Value::Int(2)).unwrap();
        assert_eq!(frozen.len(), Some(1));
        assert_eq!(frozen.push(Value::Int(3)), Err(EvalError::Frozen));
        assert!(!frozen.is_mutable());
    }

    #[test]
    fn store_reads_fall_back_on_type_mismatch() {
        let mut store = EvalStore::new();
        store.put("count", Value::str("three"));
        assert_eq!(store.read(StoreTypeId::Int, "count", Value::Int(3)), Value::Int(3));
        assert_eq!(store.read(StoreTypeId::String, "count", Value::str("")), Value::str("three"));
    }

    #[test]
    fn display_matches_debug_formatting() {
        assert_eq!(Value::str("a\"b").to_string(), "\"a\\\"b\"");
        assert_eq!(Value::Float(1.0).to_string(), "1.0");
        assert_eq!(Value::list([Value::Int(1), Value::Int(2)]).to_string(), "[1, 2]");
    }

    #[test]
    fn sets_and_maps_display_in_sorted_order() {
        assert_eq!(Value::string_set(["b", "c", "a"]).to_string(), r#"{"a", "b", "c"}"#);
        assert_eq!(
            Value::string_set(["c", "a", "b"]).to_string(),
            Value::string_set(["a", "b", "c"]).to_string()
        );
        let map = Value::map([(Value::str("z"), Value::Int(1)), (Value::str("k"), Value::Int(2))]);
        assert_eq!(map.to_string(), r#"{"k": 2, "z": 1}"#);
        assert_eq!(Value::set([Value::Int(2), Value::Int(10)]).to_string(), "{10, 2}");
    }
}
