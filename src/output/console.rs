//! Plain-text rendering for the terminal
//!
//! Every function returns a `String` so callers decide where it goes.

use crate::airtable::{SchemaComparison, TableSchema};
use crate::profile::{FieldProfile, ProfileReport};
use crate::types::{JsonValue, Record};
use std::fmt::Write;

const RULE_WIDTH: usize = 80;
const SUB_RULE_WIDTH: usize = 40;

/// Distinct values are listed only up to this many
const LISTED_DISTINCT_VALUES: usize = 10;
const LISTED_SAMPLES: usize = 3;
const SAMPLE_DISPLAY_CHARS: usize = 80;

fn banner(out: &mut String, title: &str) {
    let rule = "=".repeat(RULE_WIDTH);
    let _ = writeln!(out, "{rule}\n{title}\n{rule}");
}

/// Full field-by-field report
pub fn render_report(report: &ProfileReport) -> String {
    let mut out = String::new();

    banner(&mut out, "FIELD PROFILE");
    if let Some(source) = &report.source {
        let _ = writeln!(out, "Base:  {}", source.base_id);
        let _ = writeln!(out, "Table: {}", source.table_id);
        if let Some(view) = &source.view_id {
            let _ = writeln!(out, "View:  {view}");
        }
    }
    let _ = writeln!(out, "Records: {}", report.total_records);
    let _ = writeln!(out, "Fields:  {}", report.total_fields());

    for (idx, profile) in report.fields.values().enumerate() {
        out.push('\n');
        render_field(&mut out, idx + 1, profile, report.total_records);
    }

    out.push('\n');
    out.push_str(&render_special_fields(report));
    out
}

fn render_field(out: &mut String, position: usize, profile: &FieldProfile, total: usize) {
    let _ = writeln!(out, "{position}. '{}'", profile.name);
    let _ = writeln!(out, "{}", "-".repeat(SUB_RULE_WIDTH));
    let _ = writeln!(out, "   kind: {}", profile.primary_kind());
    let _ = writeln!(out, "   appearances: {}/{total} records", profile.appearances);
    let _ = writeln!(out, "   presence: {:.1}%", profile.presence_pct(total));

    if profile.is_nullable() {
        let _ = writeln!(out, "   nullable: holds null or is missing from some records");
    }
    if profile.is_array {
        let _ = writeln!(out, "   array");
        if !profile.element_kinds.is_empty() {
            let _ = writeln!(out, "   element kinds: {}", profile.element_kinds_label());
        }
    }
    if profile.is_object {
        let _ = writeln!(out, "   object");
    }
    if profile.max_length > 0 {
        let _ = writeln!(out, "   max text length: {} characters", profile.max_length);
    }

    let distinct = profile.distinct_values.len();
    if distinct > LISTED_DISTINCT_VALUES {
        let capped = if profile.distinct_values.is_full() {
            " (capped)"
        } else {
            ""
        };
        let _ = writeln!(out, "   distinct values: {distinct}{capped}");
    } else if distinct > 0 {
        let values: Vec<&str> = profile.distinct_values.iter().map(String::as_str).collect();
        let _ = writeln!(out, "   distinct values ({distinct}): {}", values.join(", "));
    }

    if !profile.samples.is_empty() {
        let _ = writeln!(out, "   samples:");
        for sample in profile.samples.iter().take(LISTED_SAMPLES) {
            let _ = writeln!(out, "      - {}", display_sample(sample));
        }
    }
}

fn display_sample(sample: &JsonValue) -> String {
    match sample {
        JsonValue::String(text) => match text.char_indices().nth(SAMPLE_DISPLAY_CHARS) {
            Some((end, _)) => format!("{}...", &text[..end]),
            None => text.clone(),
        },
        other => other.to_string(),
    }
}

/// Optional fields and fields holding arrays or objects
pub fn render_special_fields(report: &ProfileReport) -> String {
    let mut out = String::new();
    banner(&mut out, "SPECIAL FIELDS");

    let optional: Vec<&FieldProfile> = report.optional_fields().collect();
    if !optional.is_empty() {
        let _ = writeln!(
            out,
            "\nFields missing from some records ({}):",
            optional.len()
        );
        for profile in optional {
            let _ = writeln!(
                out,
                "   {}: present in {:.1}% of records",
                profile.name,
                profile.presence_pct(report.total_records)
            );
        }
    }

    let structured: Vec<&FieldProfile> = report.structured_fields().collect();
    if !structured.is_empty() {
        let _ = writeln!(
            out,
            "\nLikely linked or computed fields ({}):",
            structured.len()
        );
        for profile in structured {
            let kind = if profile.is_array { "array" } else { "object" };
            let _ = writeln!(out, "   {}: {kind}", profile.name);
        }
    }

    out
}

/// Declared fields and views of a table
pub fn render_schema(table: &TableSchema) -> String {
    let mut out = String::new();
    banner(&mut out, &format!("TABLE SCHEMA: {}", table.name));

    let _ = writeln!(out, "Id: {}", table.id);
    if let Some(description) = &table.description {
        let _ = writeln!(out, "Description: {description}");
    }
    if let Some(primary) = &table.primary_field_id {
        let name = table
            .fields
            .iter()
            .find(|f| &f.id == primary)
            .map_or(primary.as_str(), |f| f.name.as_str());
        let _ = writeln!(out, "Primary field: {name}");
    }
    let _ = writeln!(out, "Fields: {}", table.fields.len());

    for (idx, field) in table.fields.iter().enumerate() {
        let _ = writeln!(
            out,
            "\n{}. {} ({}) [{}]",
            idx + 1,
            field.name,
            field.field_type,
            field.id
        );
        if let Some(description) = &field.description {
            let _ = writeln!(out, "   description: {description}");
        }
        for line in field.describe_options() {
            let _ = writeln!(out, "   {line}");
        }
    }

    if !table.views.is_empty() {
        let _ = writeln!(out, "\nViews:");
        for view in &table.views {
            let _ = writeln!(out, "   {} ({}) [{}]", view.name, view.view_type, view.id);
        }
    }

    out
}

/// Declared fields versus fields seen in records
pub fn render_comparison(comparison: &SchemaComparison) -> String {
    let mut out = String::new();
    banner(&mut out, "SCHEMA VS RECORDS");

    let _ = writeln!(out, "Declared fields: {}", comparison.declared);
    let _ = writeln!(out, "Fields in records: {}", comparison.observed);

    if comparison.is_consistent() {
        let _ = writeln!(out, "\nEvery declared field appears in the records.");
        return out;
    }

    if !comparison.schema_only.is_empty() {
        let _ = writeln!(
            out,
            "\nDeclared but never present (hidden in the view or always empty):"
        );
        for name in &comparison.schema_only {
            let _ = writeln!(out, "   {name}");
        }
    }
    if !comparison.records_only.is_empty() {
        let _ = writeln!(out, "\nPresent in records but not declared:");
        for name in &comparison.records_only {
            let _ = writeln!(out, "   {name}");
        }
    }

    out
}

/// Records with one line per field
pub fn render_records(records: &[Record]) -> String {
    let mut out = String::new();
    banner(&mut out, &format!("RECORD SAMPLE ({} records)", records.len()));

    for (idx, record) in records.iter().enumerate() {
        let _ = writeln!(out, "\n{}. {}", idx + 1, record.id);
        if let Some(created) = &record.created_time {
            let _ = writeln!(out, "   created: {created}");
        }
        for (name, value) in &record.fields {
            let _ = writeln!(out, "   {name}: {}", display_sample(value));
        }
    }

    out
}

/// Field names flagged by the key-field matcher
pub fn render_hints(fields: &[&str]) -> String {
    if fields.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    let _ = writeln!(out, "\nKey fields ({}):", fields.len());
    for name in fields {
        let _ = writeln!(out, "   {name}");
    }
    out
}
