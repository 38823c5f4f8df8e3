use std::collections::BTreeMap;

use serde_json::Value;

use plansheet::state::data_model::{self, Fields, RowId};

#[test]
fn test_row_id_integer() {
    let row: Fields = BTreeMap::from([("id".to_string(), Value::Number(7.into()))]);
    assert_eq!(data_model::row_id(&row), Some(RowId::Int(7)));
}

#[test]
fn test_row_id_string() {
    let row: Fields = BTreeMap::from([("id".to_string(), Value::String("crm-7".to_string()))]);
    assert_eq!(data_model::row_id(&row), Some(RowId::Text("crm-7".to_string())));
}

#[test]
fn test_row_id_missing_or_unusable() {
    assert_eq!(data_model::row_id(&Fields::new()), None);

    let row: Fields = BTreeMap::from([("id".to_string(), Value::Bool(true))]);
    assert_eq!(data_model::row_id(&row), None);
}

#[test]
fn test_next_row_id_continues_sequence() {
    let rows: Vec<Fields> = vec![
        BTreeMap::from([("id".to_string(), Value::Number(1.into()))]),
        BTreeMap::from([("id".to_string(), Value::Number(5.into()))]),
        BTreeMap::from([("id".to_string(), Value::String("crm-7".to_string()))]),
    ];
    assert_eq!(data_model::next_row_id(&rows), RowId::Int(6));
}

#[test]
fn test_next_row_id_starts_at_one() {
    assert_eq!(data_model::next_row_id(&[]), RowId::Int(1));
}

#[test]
fn test_display_value_string() {
    let v = Value::String("hello".to_string());
    assert_eq!(data_model::display_value(&v), "hello");
}

#[test]
fn test_display_value_number() {
    let v = Value::Number(42.into());
    assert_eq!(data_model::display_value(&v), "42");
}

#[test]
fn test_display_value_bool() {
    assert_eq!(data_model::display_value(&Value::Bool(true)), "true");
    assert_eq!(data_model::display_value(&Value::Bool(false)), "false");
}

#[test]
fn test_display_value_null() {
    assert_eq!(data_model::display_value(&Value::Null), "");
}

#[test]
fn test_display_value_nested() {
    let v: Value = serde_json::from_str("[1,2,3]").unwrap();
    assert_eq!(data_model::display_value(&v), "[1,2,3]");
}

#[test]
fn test_value_as_f64_variants() {
    assert_eq!(data_model::value_as_f64(&Value::Number(3.into())), Some(3.0));
    assert_eq!(
        data_model::value_as_f64(&Value::String(" 2.5 ".to_string())),
        Some(2.5)
    );
    assert_eq!(data_model::value_as_f64(&Value::Bool(true)), Some(1.0));
    assert_eq!(data_model::value_as_f64(&Value::Null), None);
}

#[test]
fn test_row_id_display() {
    assert_eq!(RowId::Int(3).to_string(), "3");
    assert_eq!(RowId::Text("crm-7".to_string()).to_string(), "crm-7");
}
