//! Behaviour of generated classes, checked by executing their IR.

use prefsmith::Codegen;
use prefsmith::backend::ir::{EvalError, EvalStore, Evaluator, GeneratedClassSpec, Value};
use prefsmith::frontend::Manifest;
use prefsmith_core::hashing;
use proptest::prelude::*;

const FIXTURE: &str = include_str!("fixtures/settings.json");

fn settings_spec() -> GeneratedClassSpec {
    let manifest = Manifest::from_json(FIXTURE).unwrap();
    let universe = manifest.universe();
    Codegen::default()
        .generate_spec(universe.get("app::Settings").unwrap(), &universe)
        .unwrap()
}

/// Dates are epoch millis in the store and decimal strings on the property side.
fn evaluator(spec: &GeneratedClassSpec) -> Evaluator<'_> {
    Evaluator::new(spec).with_converter(
        "app::DateConverter",
        |stored| match stored {
            Value::Long(millis) => Ok(Value::Str(millis.to_string())),
            other => Err(EvalError::Converter(format!("expected millis, got {}", other))),
        },
        |date| match date {
            Value::Str(text) => text
                .parse()
                .map(Value::Long)
                .map_err(|e| EvalError::Converter(format!("{}", e))),
            other => Err(EvalError::Converter(format!("expected a date, got {}", other))),
        },
    )
}

fn args(name: &str, enabled: bool, tags: &[String], launches: i32, created: i64) -> Vec<Value> {
    vec![
        Value::str(name),
        Value::Bool(enabled),
        Value::string_set(tags.iter().cloned()),
        Value::Int(launches),
        Value::Str(created.to_string()),
    ]
}

#[test]
fn same_values_from_different_literals_are_equal() {
    let spec = settings_spec();
    let eval = evaluator(&spec);
    let a = eval
        .construct(vec![
            Value::str("ada"),
            Value::Bool(true),
            Value::string_set(["x", "y"]),
            Value::Int(3),
            Value::str("17"),
        ])
        .unwrap();
    let b = eval
        .construct(vec![
            Value::str("ada"),
            Value::Bool(true),
            Value::string_set(["y", "x"]),
            Value::Int(3),
            Value::str("17"),
        ])
        .unwrap();

    assert!(eval.equals(&a, &b).unwrap());
    assert!(eval.equals(&a, &a).unwrap());
    assert!(!eval.equals(&a, &Value::Int(3)).unwrap());
    assert_eq!(eval.hash_code(&a).unwrap(), eval.hash_code(&b).unwrap());
}

#[test]
fn hash_code_folds_field_hashes_in_declaration_order() {
    let spec = settings_spec();
    let eval = evaluator(&spec);
    let instance = eval
        .construct(vec![
            Value::str("ada"),
            Value::Bool(false),
            Value::string_set(["x"]),
            Value::Int(-4),
            Value::str("17"),
        ])
        .unwrap();

    let expected = [
        hashing::str_hash("ada"),
        hashing::bool_hash(false),
        hashing::unordered_hash([hashing::str_hash("x")]),
        hashing::int_hash(-4),
        hashing::str_hash("17"),
    ]
    .into_iter()
    .fold(hashing::DEFAULT_SEED, |acc, h| hashing::combine(acc, hashing::DEFAULT_MULTIPLIER, h));
    assert_eq!(eval.hash_code(&instance).unwrap(), expected);
}

#[test]
fn describe_lists_fields_in_order() {
    let spec = settings_spec();
    let eval = evaluator(&spec);
    let instance = eval
        .construct(vec![
            Value::str("ada"),
            Value::Bool(true),
            Value::string_set(["x"]),
            Value::Int(3),
            Value::str("17"),
        ])
        .unwrap();
    assert_eq!(
        eval.describe(&instance).unwrap(),
        "Settings{userName=\"ada\", enabled=true, tags={\"x\"}, launches=3, created=\"17\"}"
    );
}

#[test]
fn load_from_an_empty_store_uses_defaults() {
    let spec = settings_spec();
    let eval = evaluator(&spec);
    let loaded = eval.load(&EvalStore::new()).unwrap();

    assert_eq!(eval.call(&loaded, "getUserName", vec![]).unwrap(), Value::str(""));
    assert_eq!(eval.call(&loaded, "isEnabled", vec![]).unwrap(), Value::Bool(true));
    assert_eq!(eval.call(&loaded, "getLaunches", vec![]).unwrap(), Value::Int(3));
    assert_eq!(eval.call(&loaded, "getCreated", vec![]).unwrap(), Value::str("0"));
    assert_eq!(eval.call(&loaded, "getTags", vec![]).unwrap().len(), Some(0));
}

#[test]
fn save_writes_store_values_through_converters() {
    let spec = settings_spec();
    let eval = evaluator(&spec);
    let instance = eval.construct(args("ada", false, &["x".to_string()], 9, 1_700)).unwrap();

    let mut store = EvalStore::new();
    eval.save(&instance, &mut store).unwrap();
    assert_eq!(store.len(), 5);
    assert_eq!(store.get("created"), Some(&Value::Long(1_700)));
    assert_eq!(store.get("user_name"), Some(&Value::str("ada")));
}

#[test]
fn stored_values_of_another_type_fall_back_to_defaults() {
    let spec = settings_spec();
    let eval = evaluator(&spec);
    let mut store = EvalStore::new();
    store.put("launches", Value::str("many"));
    let loaded = eval.load(&store).unwrap();
    assert_eq!(eval.call(&loaded, "getLaunches", vec![]).unwrap(), Value::Int(3));
}

#[test]
fn accessor_results_are_frozen() {
    let spec = settings_spec();
    let eval = evaluator(&spec);
    let instance = eval.construct(args("ada", true, &[], 0, 0)).unwrap();
    let tags = eval.call(&instance, "getTags", vec![]).unwrap();
    assert!(!tags.is_mutable());
    assert_eq!(tags.push(Value::str("z")), Err(EvalError::Frozen));
}

proptest! {
    #[test]
    fn equal_values_give_equal_instances_and_hashes(
        name in "[a-z]{0,8}",
        enabled in any::<bool>(),
        tags in prop::collection::vec("[a-z]{1,5}", 0..5),
        launches in any::<i32>(),
        created in any::<i64>(),
    ) {
        let spec = settings_spec();
        let eval = evaluator(&spec);
        let a = eval.construct(args(&name, enabled, &tags, launches, created)).unwrap();
        let mut reversed = tags.clone();
        reversed.reverse();
        let b = eval.construct(args(&name, enabled, &reversed, launches, created)).unwrap();

        prop_assert!(eval.equals(&a, &b).unwrap());
        prop_assert_eq!(eval.hash_code(&a).unwrap(), eval.hash_code(&b).unwrap());
    }

    #[test]
    fn mutating_the_argument_does_not_change_the_accessor(
        tags in prop::collection::vec("[a-z]{1,5}", 0..5),
        extra in "[A-Z]{1,5}",
    ) {
        let spec = settings_spec();
        let eval = evaluator(&spec);
        let original = Value::string_set(tags.iter().cloned());
        let before = original.len();
        let instance = eval
            .construct(vec![Value::str("n"), Value::Bool(true), original.clone(), Value::Int(0), Value::str("0")])
            .unwrap();

        original.push(Value::str(extra)).unwrap();
        let seen = eval.call(&instance, "getTags", vec![]).unwrap();
        prop_assert_eq!(seen.len(), before);
    }

    #[test]
    fn save_then_load_round_trips(
        name in "[a-z]{0,8}",
        enabled in any::<bool>(),
        tags in prop::collection::vec("[a-z]{1,5}", 0..5),
        launches in any::<i32>(),
        created in any::<i64>(),
    ) {
        let spec = settings_spec();
        let eval = evaluator(&spec);
        let instance = eval.construct(args(&name, enabled, &tags, launches, created)).unwrap();
        let mut store = EvalStore::new();
        eval.save(&instance, &mut store).unwrap();
        let loaded = eval.load(&store).unwrap();
        prop_assert!(eval.equals(&instance, &loaded).unwrap());
    }
}
