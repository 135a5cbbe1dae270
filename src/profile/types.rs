//! Profile types

use crate::types::JsonValue;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::bounded::{BoundedList, BoundedSet};

/// Kind tag of a JSON value
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Array,
    Boolean,
    Null,
    Number,
    Object,
    String,
}

impl ValueKind {
    /// Tag a value
    pub fn of(value: &JsonValue) -> Self {
        match value {
            JsonValue::Null => ValueKind::Null,
            JsonValue::Bool(_) => ValueKind::Boolean,
            JsonValue::Number(_) => ValueKind::Number,
            JsonValue::String(_) => ValueKind::String,
            JsonValue::Array(_) => ValueKind::Array,
            JsonValue::Object(_) => ValueKind::Object,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Array => "array",
            ValueKind::Boolean => "boolean",
            ValueKind::Null => "null",
            ValueKind::Number => "number",
            ValueKind::Object => "object",
            ValueKind::String => "string",
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shape summary of one field across a record set
#[derive(Debug, Clone, PartialEq)]
pub struct FieldProfile {
    /// Field name
    pub name: String,
    /// Every kind observed; more than one means the field is mixed
    pub kinds: BTreeSet<ValueKind>,
    /// Records in which the field key was present
    pub appearances: usize,
    /// Explicit null seen, or the field is missing from some records
    pub has_nulls: bool,
    /// Field held an array at least once
    pub is_array: bool,
    /// Kinds of the array elements seen
    pub element_kinds: BTreeSet<ValueKind>,
    /// Field held an object at least once
    pub is_object: bool,
    /// Longest string value in characters
    pub max_length: usize,
    /// Distinct string/scalar values, capped
    pub distinct_values: BoundedSet<String>,
    /// Preview values for human inspection, capped
    pub samples: BoundedList<JsonValue>,
}

impl FieldProfile {
    /// Create an empty profile
    pub fn new(name: impl Into<String>, distinct_cap: usize, sample_cap: usize) -> Self {
        Self {
            name: name.into(),
            kinds: BTreeSet::new(),
            appearances: 0,
            has_nulls: false,
            is_array: false,
            element_kinds: BTreeSet::new(),
            is_object: false,
            max_length: 0,
            distinct_values: BoundedSet::new(distinct_cap),
            samples: BoundedList::new(sample_cap),
        }
    }

    /// Check whether more than one kind was observed
    pub fn is_mixed(&self) -> bool {
        self.kinds.len() > 1
    }

    /// Single kind name, or `mixed: a, b` when several were seen
    pub fn primary_kind(&self) -> String {
        match self.kinds.len() {
            0 => "unknown".to_string(),
            1 => self.kinds_label(),
            _ => format!("mixed: {}", self.kinds_label()),
        }
    }

    /// Kinds joined with `, `
    pub fn kinds_label(&self) -> String {
        join_kinds(&self.kinds)
    }

    /// Element kinds joined with `, `
    pub fn element_kinds_label(&self) -> String {
        join_kinds(&self.element_kinds)
    }

    /// Check whether the field is nullable/optional in this dataset
    pub fn is_nullable(&self) -> bool {
        self.has_nulls
    }

    /// appearances / total × 100, unrounded
    pub fn presence_pct(&self, total_records: usize) -> f64 {
        if total_records == 0 {
            return 0.0;
        }
        self.appearances as f64 / total_records as f64 * 100.0
    }
}

fn join_kinds(kinds: &BTreeSet<ValueKind>) -> String {
    kinds
        .iter()
        .map(ValueKind::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Round to a fixed number of decimal places
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Where a report's records came from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSource {
    pub base_id: String,
    pub table_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_id: Option<String>,
}

/// Per-field profiles for one record set
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileReport {
    /// When profiling finished
    pub generated_at: DateTime<Utc>,
    /// Origin of the records, when known
    pub source: Option<ReportSource>,
    /// Number of records profiled
    pub total_records: usize,
    /// Profiles keyed (and iterated) by field name
    pub fields: BTreeMap<String, FieldProfile>,
}

impl ProfileReport {
    /// Attach the record origin
    #[must_use]
    pub fn with_source(mut self, source: ReportSource) -> Self {
        self.source = Some(source);
        self
    }

    /// Number of distinct field names
    pub fn total_fields(&self) -> usize {
        self.fields.len()
    }

    /// Look up one field's profile
    pub fn field(&self, name: &str) -> Option<&FieldProfile> {
        self.fields.get(name)
    }

    /// Field names in alphabetical order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Presence percentage for a field (0 if it never appeared)
    pub fn presence_pct(&self, name: &str) -> f64 {
        self.field(name)
            .map_or(0.0, |p| p.presence_pct(self.total_records))
    }

    /// Fields missing from at least one record
    pub fn optional_fields(&self) -> impl Iterator<Item = &FieldProfile> {
        self.fields
            .values()
            .filter(|p| p.appearances < self.total_records)
    }

    /// Fields that ever held an array or an object
    ///
    /// These usually come from links, lookups, rollups or attachments.
    pub fn structured_fields(&self) -> impl Iterator<Item = &FieldProfile> {
        self.fields.values().filter(|p| p.is_array || p.is_object)
    }
}
