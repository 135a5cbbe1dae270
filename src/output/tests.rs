//! Tests for output module

use super::*;
use crate::airtable::{FieldSchema, SchemaComparison, TableSchema, ViewSchema};
use crate::error::Error;
use crate::profile::{profile_records, ProfileReport, ReportSource, ValueKind};
use crate::types::Record;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tempfile::tempdir;
use test_case::test_case;

fn record(id: usize, fields: Value) -> Record {
    Record::from_value(format!("rec{id}"), fields)
}

fn sample_report() -> ProfileReport {
    let records = vec![
        record(1, json!({"Nombre": "Ana", "Tags": ["a", "b"], "Edad": 30})),
        record(2, json!({"Nombre": "Luis", "Tags": "x"})),
        record(3, json!({"Nombre": "Eva", "Foto": {"url": "u"}})),
    ];
    profile_records(&records).with_source(ReportSource {
        base_id: "app1".to_string(),
        table_id: "tbl1".to_string(),
        view_id: Some("viw1".to_string()),
    })
}

// ============================================================================
// JSON Report Tests
// ============================================================================

#[test]
fn test_report_document_fields() {
    let doc = ReportDocument::from(&sample_report());

    assert_eq!(doc.base_id.as_deref(), Some("app1"));
    assert_eq!(doc.view_id.as_deref(), Some("viw1"));
    assert_eq!(doc.total_records, 3);
    assert_eq!(doc.total_fields, 4);

    let tags = &doc.fields["Tags"];
    assert_eq!(tags.primary_kind, "mixed: array, string");
    assert_eq!(tags.kinds, vec![ValueKind::Array, ValueKind::String]);
    assert_eq!(tags.presence_pct, 66.67);
    assert!(tags.has_nulls);
    assert_eq!(tags.element_kinds, Some(vec![ValueKind::String]));

    let edad = &doc.fields["Edad"];
    assert_eq!(edad.primary_kind, "number");
    assert_eq!(edad.presence_pct, 33.33);
    assert_eq!(edad.max_length, None);
    assert_eq!(edad.element_kinds, None);

    let nombre = &doc.fields["Nombre"];
    assert_eq!(nombre.presence_pct, 100.0);
    assert_eq!(nombre.max_length, Some(4));
    assert_eq!(nombre.distinct_count, 3);
    assert!(!nombre.has_nulls);
}

#[test]
fn test_report_document_serializes_nulls() {
    let doc = ReportDocument::from(&sample_report());
    let value = serde_json::to_value(&doc).unwrap();

    assert_eq!(value["fields"]["Edad"]["max_length"], Value::Null);
    assert_eq!(value["fields"]["Edad"]["element_kinds"], Value::Null);
    assert_eq!(value["fields"]["Tags"]["kinds"], json!(["array", "string"]));
    assert_eq!(value["fields"]["Foto"]["is_object"], json!(true));
    assert_eq!(
        value["fields"]["Foto"]["samples"],
        json!(["Object with keys: [url]"])
    );
}

#[test]
fn test_report_document_without_source() {
    let doc = ReportDocument::from(&profile_records(&[]));
    assert!(doc.base_id.is_none());
    assert!(doc.table_id.is_none());
    assert_eq!(doc.total_records, 0);
    assert!(doc.fields.is_empty());
}

#[test]
fn test_write_json_creates_parent_dirs() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("out").join("field_report.json");

    write_json(&path, &ReportDocument::from(&sample_report())).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let value: Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value["total_fields"], json!(4));
    assert_eq!(value["table_id"], json!("tbl1"));
    assert!(content.contains("\n  "));
}

#[cfg(target_os = "linux")]
#[test]
fn test_write_json_reports_full_device() {
    let err = write_json("/dev/full", &json!({"a": 1})).unwrap_err();
    assert!(matches!(err, Error::Output { ref message } if message.contains("/dev/full")));
}

#[cfg(target_os = "linux")]
#[test]
fn test_write_summary_reports_full_device() {
    assert!(write_summary_csv("/dev/full", &sample_report()).is_err());
}

#[test]
fn test_write_json_parent_is_a_file() {
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "x").unwrap();

    let err = write_json(blocker.join("report.json"), &json!({})).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

// ============================================================================
// Record Sample Tests
// ============================================================================

#[test_case(0, 0 ; "no records")]
#[test_case(3, 3 ; "fewer than sample size")]
#[test_case(12, 5 ; "more than sample size")]
fn test_record_sample_size(total: usize, kept: usize) {
    let records: Vec<Record> = (0..total).map(|i| record(i, json!({"n": i}))).collect();
    let sample = RecordSample::new(&records);
    assert_eq!(sample.total_records, total);
    assert_eq!(sample.records.len(), kept);
}

#[test]
fn test_record_sample_json() {
    let dir = tempdir().unwrap();
    let records: Vec<Record> = (0..7).map(|i| record(i, json!({"n": i}))).collect();
    let path = dir.path().join("record_sample.json");

    write_json(&path, &RecordSample::new(&records)).unwrap();

    let value: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["total_records"], json!(7));
    assert_eq!(value["records"].as_array().unwrap().len(), 5);
    assert_eq!(value["records"][0]["id"], json!("rec0"));
    assert_eq!(value["records"][4]["fields"]["n"], json!(4));
}

#[test]
fn test_output_files_in_dir() {
    let files = OutputFiles::in_dir("/tmp/run");
    assert_eq!(files.report, std::path::Path::new("/tmp/run/field_report.json"));
    assert_eq!(files.summary, std::path::Path::new("/tmp/run/field_summary.csv"));
    assert_eq!(files.sample, std::path::Path::new("/tmp/run/record_sample.json"));
}

// ============================================================================
// CSV Summary Tests
// ============================================================================

#[test]
fn test_summary_rows_alphabetical() {
    let mut buffer = Vec::new();
    let rows = write_summary(&mut buffer, &sample_report()).unwrap();
    assert_eq!(rows, 4);

    let text = String::from_utf8(buffer).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "field,kinds,presence_pct,is_array,is_object,nullable,distinct_values",
            "Edad,number,33.3,no,no,yes,1",
            "Foto,object,33.3,no,yes,yes,0",
            "Nombre,string,100.0,no,no,no,3",
            "Tags,\"array, string\",66.7,yes,no,yes,1",
        ]
    );
}

#[test]
fn test_summary_empty_report_has_header() {
    let mut buffer = Vec::new();
    let rows = write_summary(&mut buffer, &profile_records(&[])).unwrap();
    assert_eq!(rows, 0);
    assert_eq!(
        String::from_utf8(buffer).unwrap().trim_end(),
        "field,kinds,presence_pct,is_array,is_object,nullable,distinct_values"
    );
}

#[test]
fn test_write_summary_csv_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("field_summary.csv");

    write_summary_csv(&path, &sample_report()).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let fields: Vec<String> = reader
        .records()
        .map(|r| r.unwrap().get(0).unwrap().to_string())
        .collect();
    assert_eq!(fields, vec!["Edad", "Foto", "Nombre", "Tags"]);
}

// ============================================================================
// Hint Tests
// ============================================================================

#[test]
fn test_default_matcher_is_case_insensitive() {
    let matcher = KeyFieldMatcher::defaults().unwrap();
    assert!(matcher.is_match("Nombre Completo"));
    assert!(matcher.is_match("CORREO ELECTRONICO"));
    assert!(matcher.is_match("Centro de Costos"));
    assert!(!matcher.is_match("Fecha de Ingreso"));
}

#[test]
fn test_matcher_escapes_keywords() {
    let matcher = KeyFieldMatcher::new(["c++", "a.b"]).unwrap();
    assert!(matcher.is_match("Skill C++"));
    assert!(matcher.is_match("a.b"));
    assert!(!matcher.is_match("axb"));
}

#[test]
fn test_matcher_requires_keywords() {
    assert!(KeyFieldMatcher::new(Vec::<String>::new()).is_err());
    assert!(KeyFieldMatcher::new(["  "]).is_err());
}

#[test]
fn test_matching_keeps_order() {
    let matcher = KeyFieldMatcher::new(["codigo", "cargo"]).unwrap();
    let found = matcher.matching(["Cargo", "Edad", "Codigo Empleado"]);
    assert_eq!(found, vec!["Cargo", "Codigo Empleado"]);
}

// ============================================================================
// Console Tests
// ============================================================================

#[test]
fn test_render_report() {
    let text = console::render_report(&sample_report());

    assert!(text.contains("Records: 3"));
    assert!(text.contains("Fields:  4"));
    assert!(text.contains("1. 'Edad'"));
    assert!(text.contains("kind: mixed: array, string"));
    assert!(text.contains("presence: 66.7%"));
    assert!(text.contains("distinct values (3): Ana, Eva, Luis"));
    assert!(text.contains("Fields missing from some records (3):"));
    assert!(text.contains("Foto: object"));
    assert!(text.contains("Tags: array"));

    let edad = text.find("'Edad'").unwrap();
    let tags = text.find("'Tags'").unwrap();
    assert!(edad < tags);
}

#[test]
fn test_render_report_truncates_long_samples() {
    let long = "y".repeat(95);
    let text = console::render_report(&profile_records(&[record(1, json!({"Notas": long}))]));
    let expected = format!("      - {}...", "y".repeat(80));
    assert!(text.contains(&expected));
}

#[test]
fn test_render_report_many_distinct_values() {
    let records: Vec<Record> = (0..60)
        .map(|i| record(i, json!({"Codigo": format!("C{i}")})))
        .collect();
    let text = console::render_report(&profile_records(&records));
    assert!(text.contains("distinct values: 50 (capped)"));
}

fn table() -> TableSchema {
    TableSchema {
        id: "tbl1".to_string(),
        name: "Colaboradores".to_string(),
        description: None,
        primary_field_id: Some("fldA".to_string()),
        fields: vec![
            FieldSchema {
                id: "fldA".to_string(),
                name: "Nombre".to_string(),
                field_type: "singleLineText".to_string(),
                description: Some("Full name".to_string()),
                options: None,
            },
            FieldSchema {
                id: "fldB".to_string(),
                name: "Total".to_string(),
                field_type: "rollup".to_string(),
                description: None,
                options: Some(json!({"rollupFunction": "SUM(values)"})),
            },
        ],
        views: vec![ViewSchema {
            id: "viw1".to_string(),
            name: "Grid view".to_string(),
            view_type: "grid".to_string(),
        }],
    }
}

#[test]
fn test_render_schema() {
    let text = console::render_schema(&table());
    assert!(text.contains("TABLE SCHEMA: Colaboradores"));
    assert!(text.contains("Primary field: Nombre"));
    assert!(text.contains("1. Nombre (singleLineText) [fldA]"));
    assert!(text.contains("   description: Full name"));
    assert!(text.contains("   rollup function: SUM(values)"));
    assert!(text.contains("Grid view (grid) [viw1]"));
}

#[test]
fn test_render_comparison() {
    let comparison = table().compare_fields(["Nombre", "Extra"]);
    let text = console::render_comparison(&comparison);
    assert!(text.contains("Declared fields: 2"));
    assert!(text.contains("Declared but never present"));
    assert!(text.contains("   Total"));
    assert!(text.contains("   Extra"));

    let consistent = console::render_comparison(&SchemaComparison {
        declared: 1,
        observed: 1,
        ..Default::default()
    });
    assert!(consistent.contains("Every declared field appears"));
}

#[test]
fn test_render_records_and_hints() {
    let records = vec![record(1, json!({"Nombre": "Ana", "Tags": ["a"]}))];
    let text = console::render_records(&records);
    assert!(text.contains("RECORD SAMPLE (1 records)"));
    assert!(text.contains("1. rec1"));
    assert!(text.contains("   Nombre: Ana"));
    assert!(text.contains("   Tags: [\"a\"]"));

    assert_eq!(console::render_hints(&[]), "");
    assert!(console::render_hints(&["Nombre"]).contains("Key fields (1):"));
}
