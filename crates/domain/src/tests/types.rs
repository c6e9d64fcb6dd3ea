// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{RawRecord, RawValue};

#[test]
fn test_text_value_parses_with_whitespace() {
    assert_eq!(RawValue::text(" 12 ").as_number(), Some(12.0));
    assert_eq!(RawValue::text("3.5").as_number(), Some(3.5));
    assert_eq!(RawValue::text("1e3").as_number(), Some(1000.0));
}

#[test]
fn test_non_numeric_text_is_not_a_number() {
    assert_eq!(RawValue::text("abc").as_number(), None);
    assert_eq!(RawValue::text("").as_number(), None);
    assert_eq!(RawValue::text("NaN").as_number(), None);
    assert_eq!(RawValue::text("-inf").as_number(), None);
}

#[test]
fn test_number_and_other_values() {
    assert_eq!(RawValue::Number(8.0).as_number(), Some(8.0));
    assert_eq!(RawValue::Number(f64::INFINITY).as_number(), None);
    assert_eq!(RawValue::Other(String::from("null")).as_number(), None);
}

#[test]
fn test_raw_value_display() {
    assert_eq!(RawValue::text("TeamOmega").to_string(), "TeamOmega");
    assert_eq!(RawValue::Number(7.0).to_string(), "7");
    assert_eq!(RawValue::Number(2.5).to_string(), "2.5");
    assert_eq!(RawValue::Other(String::from("true")).to_string(), "true");
}

#[test]
fn test_insert_replaces_existing_field() {
    let mut record: RawRecord = RawRecord::new();
    record.insert("team_id", RawValue::text("A"));
    record.insert("team_id", RawValue::text("B"));

    assert_eq!(record.len(), 1);
    assert_eq!(record.get("team_id"), Some(&RawValue::text("B")));
}

#[test]
fn test_record_preserves_insertion_order() {
    let record: RawRecord = [
        ("b", RawValue::text("2")),
        ("a", RawValue::text("1")),
        ("c", RawValue::text("3")),
    ]
    .into_iter()
    .collect();

    let names: Vec<&str> = record.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["b", "a", "c"]);
}

#[test]
fn test_remove_field() {
    let mut record: RawRecord = RawRecord::new().with("shift_hours", 8.0);

    assert_eq!(record.remove("shift_hours"), Some(RawValue::Number(8.0)));
    assert!(!record.contains("shift_hours"));
    assert!(record.is_empty());
    assert_eq!(record.remove("shift_hours"), None);
}
