use std::collections::BTreeMap;

use serde_json::Value;

use plansheet::state::column::{Column, EditType, SelectOption};
use plansheet::state::data_model::{Fields, RowId};
use plansheet::state::edit::{self, CellEditor};

fn sample_columns() -> Vec<Column> {
    vec![
        Column::new("title", "Title").editable(EditType::Text),
        Column::new("guests", "Guests").editable(EditType::Number),
        Column::new("priority", "Priority")
            .editable(EditType::Select)
            .options(vec![
                SelectOption::new("high", "High"),
                SelectOption::new("medium", "Medium"),
            ]),
        Column::new("event_date", "Event date").editable(EditType::Date),
        Column::new("created", "Created"),
    ]
}

fn sample_row() -> Fields {
    BTreeMap::from([
        ("id".to_string(), Value::Number(1.into())),
        ("title".to_string(), Value::String("Book venue".to_string())),
        ("guests".to_string(), Value::Number(80.into())),
        ("priority".to_string(), Value::String("medium".to_string())),
        ("created".to_string(), Value::String("2025-01-01".to_string())),
    ])
}

#[test]
fn test_begin_seeds_draft_from_current_value() {
    let columns = sample_columns();
    let row = sample_row();
    let mut editor = CellEditor::new();

    assert!(editor.begin(&columns, &row, "title"));
    assert_eq!(editor.draft(), Some("Book venue"));
    assert!(editor.is_editing(&RowId::Int(1), "title"));
}

#[test]
fn test_begin_rejects_non_editable_column() {
    let columns = sample_columns();
    let row = sample_row();
    let mut editor = CellEditor::new();

    assert!(!editor.begin(&columns, &row, "created"));
    assert_eq!(editor.editing(), None);
}

#[test]
fn test_begin_rejects_unknown_field() {
    let columns = sample_columns();
    let row = sample_row();
    let mut editor = CellEditor::new();

    assert!(!editor.begin(&columns, &row, "nonexistent"));
    assert_eq!(editor.editing(), None);
}

#[test]
fn test_commit_changed_value_produces_single_update() {
    let columns = sample_columns();
    let row = sample_row();
    let mut editor = CellEditor::new();

    editor.begin(&columns, &row, "title");
    editor.set_draft("Book garden venue".to_string());

    let update = editor.commit(&columns, &row).expect("update expected");
    assert_eq!(update.row_id, RowId::Int(1));
    assert_eq!(update.field, "title");
    assert_eq!(update.value, Value::String("Book garden venue".to_string()));
    assert_eq!(update.row, row);

    // The session ended; a second commit produces nothing.
    assert_eq!(editor.commit(&columns, &row), None);
    assert!(!editor.is_editing(&RowId::Int(1), "title"));
}

#[test]
fn test_commit_unchanged_value_produces_no_update() {
    let columns = sample_columns();
    let row = sample_row();
    let mut editor = CellEditor::new();

    editor.begin(&columns, &row, "title");
    assert_eq!(editor.commit(&columns, &row), None);
    assert_eq!(editor.editing(), None);
}

#[test]
fn test_commit_converts_number_draft() {
    let columns = sample_columns();
    let row = sample_row();
    let mut editor = CellEditor::new();

    editor.begin(&columns, &row, "guests");
    editor.set_draft("95".to_string());

    let update = editor.commit(&columns, &row).unwrap();
    assert_eq!(update.value, Value::Number(95.into()));
}

#[test]
fn test_commit_unparseable_number_falls_back_to_string() {
    let columns = sample_columns();
    let row = sample_row();
    let mut editor = CellEditor::new();

    editor.begin(&columns, &row, "guests");
    editor.set_draft("a lot".to_string());

    let update = editor.commit(&columns, &row).unwrap();
    assert_eq!(update.value, Value::String("a lot".to_string()));
}

#[test]
fn test_commit_empty_number_draft_is_null() {
    let columns = sample_columns();
    let row = sample_row();
    let mut editor = CellEditor::new();

    editor.begin(&columns, &row, "guests");
    editor.set_draft("  ".to_string());

    let update = editor.commit(&columns, &row).unwrap();
    assert_eq!(update.value, Value::Null);
}

#[test]
fn test_cancel_discards_draft_without_update() {
    let columns = sample_columns();
    let row = sample_row();
    let mut editor = CellEditor::new();

    editor.begin(&columns, &row, "title");
    editor.set_draft("changed but abandoned".to_string());
    editor.cancel();

    assert_eq!(editor.editing(), None);
    assert_eq!(editor.commit(&columns, &row), None);
}

#[test]
fn test_begin_replaces_prior_edit_session() {
    let columns = sample_columns();
    let row = sample_row();
    let mut editor = CellEditor::new();

    editor.begin(&columns, &row, "title");
    editor.begin(&columns, &row, "guests");

    assert!(!editor.is_editing(&RowId::Int(1), "title"));
    assert!(editor.is_editing(&RowId::Int(1), "guests"));
    assert_eq!(editor.draft(), Some("80"));
}

#[test]
fn test_commit_against_different_row_is_dropped() {
    let columns = sample_columns();
    let row = sample_row();
    let mut other = sample_row();
    other.insert("id".to_string(), Value::Number(2.into()));

    let mut editor = CellEditor::new();
    editor.begin(&columns, &row, "title");
    editor.set_draft("changed".to_string());

    assert_eq!(editor.commit(&columns, &other), None);
    assert_eq!(editor.editing(), None);
}

#[test]
fn test_select_change_commits_immediately() {
    let columns = sample_columns();
    let row = sample_row();

    let update = edit::select_change(&columns, &row, "priority", "high").unwrap();
    assert_eq!(update.row_id, RowId::Int(1));
    assert_eq!(update.field, "priority");
    assert_eq!(update.value, Value::String("high".to_string()));
}

#[test]
fn test_select_change_same_value_is_noop() {
    let columns = sample_columns();
    let row = sample_row();

    assert_eq!(edit::select_change(&columns, &row, "priority", "medium"), None);
}

#[test]
fn test_convert_date_draft_trims_valid_dates() {
    assert_eq!(
        edit::convert_draft(EditType::Date, " 2025-06-01 "),
        Value::String("2025-06-01".to_string())
    );
    assert_eq!(
        edit::convert_draft(EditType::Date, "June 1st"),
        Value::String("June 1st".to_string())
    );
    assert_eq!(edit::convert_draft(EditType::Date, ""), Value::Null);
}

#[test]
fn test_convert_number_draft_precision() {
    assert_eq!(
        edit::convert_draft(EditType::Number, "9007199254740993"),
        Value::Number(9_007_199_254_740_993i64.into())
    );
    assert_eq!(
        edit::convert_draft(EditType::Number, "2.5"),
        Value::Number(serde_json::Number::from_f64(2.5).unwrap())
    );
}
