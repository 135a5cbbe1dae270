//! Field profiling tests

use super::*;
use crate::types::Record;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::collections::BTreeSet;
use test_case::test_case;

fn record(id: usize, fields: Value) -> Record {
    Record::from_value(format!("rec{id}"), fields)
}

fn kinds(list: &[ValueKind]) -> BTreeSet<ValueKind> {
    list.iter().copied().collect()
}

// ============================================================================
// Bounded containers
// ============================================================================

#[test]
fn test_bounded_set_stops_at_cap() {
    let mut set = BoundedSet::new(3);
    assert!(set.insert("a"));
    assert!(!set.insert("a"));
    assert!(set.insert("b"));
    assert!(set.insert("c"));
    assert!(set.is_full());
    assert!(!set.insert("d"));
    assert_eq!(set.len(), 3);
    assert!(!set.contains(&"d"));
}

#[test]
fn test_bounded_list_stops_at_cap() {
    let mut list = BoundedList::new(2);
    assert!(list.push(1));
    assert!(list.push(1));
    assert!(!list.push(2));
    assert_eq!(list.as_slice(), &[1, 1]);
}

#[test]
fn test_bounded_set_serializes_sorted() {
    let mut set = BoundedSet::new(10);
    set.insert("b".to_string());
    set.insert("a".to_string());
    assert_eq!(serde_json::to_value(&set).unwrap(), json!(["a", "b"]));
}

// ============================================================================
// Kinds
// ============================================================================

#[test_case(json!(null), ValueKind::Null ; "null")]
#[test_case(json!(true), ValueKind::Boolean ; "boolean")]
#[test_case(json!(42), ValueKind::Number ; "integer")]
#[test_case(json!(3.5), ValueKind::Number ; "float")]
#[test_case(json!("x"), ValueKind::String ; "string")]
#[test_case(json!([1]), ValueKind::Array ; "array")]
#[test_case(json!({"a": 1}), ValueKind::Object ; "object")]
fn test_value_kind_of(value: Value, expected: ValueKind) {
    assert_eq!(ValueKind::of(&value), expected);
}

#[test]
fn test_mixed_array_and_string() {
    let records = vec![
        record(1, json!({"tags": ["a", "b"]})),
        record(2, json!({"tags": "x"})),
    ];

    let report = profile_records(&records);
    let tags = report.field("tags").unwrap();

    assert_eq!(tags.kinds, kinds(&[ValueKind::Array, ValueKind::String]));
    assert!(tags.is_mixed());
    assert_eq!(tags.primary_kind(), "mixed: array, string");
    assert!(tags.is_array);
    assert_eq!(tags.element_kinds, kinds(&[ValueKind::String]));
    assert!(!tags.is_nullable());
}

// ============================================================================
// Presence and nullability
// ============================================================================

#[test]
fn test_email_presence_over_237_records() {
    let records: Vec<Record> = (0..237)
        .map(|i| {
            if i < 200 {
                record(i, json!({"id": i, "email": format!("user{i}@example.com")}))
            } else {
                record(i, json!({"id": i}))
            }
        })
        .collect();

    let report = profile_records(&records);
    let email = report.field("email").unwrap();

    assert_eq!(report.total_records, 237);
    assert_eq!(email.appearances, 200);
    assert_eq!(format!("{:.1}", email.presence_pct(237)), "84.4");
    assert_eq!(round_to(report.presence_pct("email"), 2), 84.39);
    assert!(email.is_nullable());

    let id = report.field("id").unwrap();
    assert_eq!(id.appearances, 237);
    assert!(!id.is_nullable());
}

#[test]
fn test_appearances_match_key_counts() {
    let records = vec![
        record(1, json!({"a": 1, "b": null})),
        record(2, json!({"a": 2, "c": "x"})),
        record(3, json!({"b": "y"})),
        record(4, json!({})),
    ];

    let report = profile_records(&records);

    for name in report.field_names() {
        let expected = records.iter().filter(|r| r.fields.contains_key(name)).count();
        let profile = report.field(name).unwrap();
        assert_eq!(profile.appearances, expected, "field {name}");
        assert!(profile.appearances <= report.total_records);
        assert_eq!(
            profile.appearances < report.total_records,
            profile.is_nullable(),
            "field {name}"
        );
    }

    let names: Vec<&str> = report.field_names().collect();
    assert_eq!(names, vec!["a", "b", "c"]);
    assert_eq!(report.total_fields(), 3);
}

#[test]
fn test_explicit_null_marks_nullable() {
    let records = vec![record(1, json!({"a": null})), record(2, json!({"a": 1}))];

    let report = profile_records(&records);
    let a = report.field("a").unwrap();

    assert_eq!(a.appearances, 2);
    assert!(a.is_nullable());
    assert_eq!(a.kinds, kinds(&[ValueKind::Null, ValueKind::Number]));
}

#[test]
fn test_empty_record_set() {
    let report = profile_records(&[]);
    assert_eq!(report.total_records, 0);
    assert_eq!(report.total_fields(), 0);
    assert_eq!(report.presence_pct("missing"), 0.0);
}

#[test]
fn test_optional_and_structured_fields() {
    let records = vec![
        record(1, json!({"name": "a", "links": ["recX"], "meta": {"k": 1}})),
        record(2, json!({"name": "b"})),
    ];

    let report = profile_records(&records);

    let optional: Vec<&str> = report.optional_fields().map(|p| p.name.as_str()).collect();
    assert_eq!(optional, vec!["links", "meta"]);

    let structured: Vec<&str> = report
        .structured_fields()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(structured, vec!["links", "meta"]);
}

// ============================================================================
// Caps and samples
// ============================================================================

#[test]
fn test_distinct_values_capped_at_50() {
    let records: Vec<Record> = (0..500)
        .map(|i| record(i, json!({"code": format!("C{i:04}")})))
        .collect();

    let report = profile_records(&records);
    let code = report.field("code").unwrap();

    assert_eq!(code.distinct_values.len(), 50);
    assert_eq!(code.samples.len(), 5);
    assert_eq!(code.appearances, 500);
}

#[test]
fn test_custom_caps() {
    let mut profiler = FieldProfiler::new().with_distinct_cap(2).with_sample_cap(1);
    profiler.observe_all(&[
        record(1, json!({"n": 1})),
        record(2, json!({"n": 2})),
        record(3, json!({"n": 3})),
    ]);
    assert_eq!(profiler.total_records(), 3);

    let report = profiler.finish();
    let n = report.field("n").unwrap();
    assert_eq!(n.distinct_values.iter().collect::<Vec<_>>(), vec!["1", "2"]);
    assert_eq!(n.samples.as_slice(), &[json!(1)]);
}

#[test]
fn test_long_strings_truncated_in_preview_only() {
    let long = "x".repeat(150);
    let report = profile_records(&[record(1, json!({"notes": long.clone()}))]);
    let notes = report.field("notes").unwrap();

    assert_eq!(notes.max_length, 150);
    let preview = notes.samples.as_slice()[0].as_str().unwrap();
    assert_eq!(preview.len(), 103);
    assert!(preview.ends_with("..."));
    assert!(notes.distinct_values.contains(&long));
}

#[test]
fn test_truncate_multibyte() {
    use super::profiler::truncate;

    assert_eq!(truncate("ñandú", 3), "ñan...");
    assert_eq!(truncate("abc", 3), "abc");
    assert_eq!(truncate("", 3), "");
}

#[test]
fn test_max_length_counts_characters() {
    let report = profile_records(&[
        record(1, json!({"city": "Bogotá"})),
        record(2, json!({"city": "Quito"})),
    ]);
    assert_eq!(report.field("city").unwrap().max_length, 6);
}

#[test]
fn test_array_previews() {
    let records = vec![
        record(1, json!({"tags": ["a", "b", "c"]})),
        record(2, json!({"tags": []})),
        record(3, json!({"tags": [1, 2, 3, 4]})),
        record(4, json!({"tags": [{"url": "x"}]})),
        record(5, json!({"tags": ["late"]})),
    ];

    let report = profile_records(&records);
    let tags = report.field("tags").unwrap();

    assert_eq!(
        tags.samples.as_slice(),
        &[json!(["a", "b"]), json!("[4 items]"), json!("[1 items]")]
    );
    assert_eq!(
        tags.element_kinds,
        kinds(&[ValueKind::Number, ValueKind::Object, ValueKind::String])
    );
    assert!(tags.distinct_values.is_empty());
}

#[test]
fn test_object_previews() {
    let records: Vec<Record> = (0..5)
        .map(|i| record(i, json!({"attachment": {"id": i, "url": "u"}})))
        .collect();

    let report = profile_records(&records);
    let attachment = report.field("attachment").unwrap();

    assert!(attachment.is_object);
    assert_eq!(attachment.samples.len(), 3);
    assert_eq!(
        attachment.samples.as_slice()[0],
        json!("Object with keys: [id, url]")
    );
}

#[test]
fn test_scalar_distinct_values_use_string_form() {
    let records = vec![
        record(1, json!({"active": true, "salary": 1200.5})),
        record(2, json!({"active": false, "salary": 1200.5})),
        record(3, json!({"active": true, "salary": 900})),
    ];

    let report = profile_records(&records);

    let active = report.field("active").unwrap();
    assert_eq!(
        active.distinct_values.iter().collect::<Vec<_>>(),
        vec!["false", "true"]
    );
    assert_eq!(active.samples.len(), 3);
    assert_eq!(active.max_length, 0);

    let salary = report.field("salary").unwrap();
    assert_eq!(salary.distinct_values.len(), 2);
    assert_eq!(salary.samples.as_slice()[2], json!(900));
}

#[test]
fn test_report_source() {
    let report = profile_records(&[]).with_source(ReportSource {
        base_id: "app1".to_string(),
        table_id: "tbl1".to_string(),
        view_id: None,
    });
    assert_eq!(report.source.unwrap().base_id, "app1");
}

#[test_case(84.3881, 1, 84.4)]
#[test_case(84.3881, 2, 84.39)]
#[test_case(100.0, 2, 100.0)]
fn test_round_to(value: f64, decimals: u32, expected: f64) {
    assert!((round_to(value, decimals) - expected).abs() < f64::EPSILON * 100.0);
}
