//! Airtable wire types

use crate::pagination::Page;
use crate::types::{JsonValue, Record};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// ============================================================================
// Records
// ============================================================================

/// Body of a list-records response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListRecordsResponse {
    /// Records on this page
    #[serde(default)]
    pub records: Vec<Record>,
    /// Continuation token for the next page
    #[serde(default)]
    pub offset: Option<String>,
}

impl From<ListRecordsResponse> for Page {
    fn from(response: ListRecordsResponse) -> Self {
        Page {
            records: response.records,
            next_token: response.offset,
        }
    }
}

// ============================================================================
// Schema Metadata
// ============================================================================

/// All tables of a base
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BaseSchema {
    #[serde(default)]
    pub tables: Vec<TableSchema>,
}

impl BaseSchema {
    /// Find a table by id, falling back to an exact name match
    pub fn find_table(&self, id_or_name: &str) -> Option<&TableSchema> {
        self.tables
            .iter()
            .find(|t| t.id == id_or_name)
            .or_else(|| self.tables.iter().find(|t| t.name == id_or_name))
    }
}

/// Declared schema of one table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableSchema {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_field_id: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldSchema>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub views: Vec<ViewSchema>,
}

impl TableSchema {
    /// Names of all declared fields
    pub fn field_names(&self) -> BTreeSet<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    /// Compare declared fields with the field names seen in records
    pub fn compare_fields<'a>(
        &self,
        observed: impl IntoIterator<Item = &'a str>,
    ) -> SchemaComparison {
        let declared = self.field_names();
        let observed: BTreeSet<&str> = observed.into_iter().collect();

        SchemaComparison {
            declared: declared.len(),
            observed: observed.len(),
            schema_only: declared
                .difference(&observed)
                .map(|s| (*s).to_string())
                .collect(),
            records_only: observed
                .difference(&declared)
                .map(|s| (*s).to_string())
                .collect(),
        }
    }
}

/// Declared field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSchema {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<JsonValue>,
}

impl FieldSchema {
    /// Human-readable lines describing the type-specific options
    pub fn describe_options(&self) -> Vec<String> {
        let Some(options) = &self.options else {
            return Vec::new();
        };
        let text = |key: &str| {
            options
                .get(key)
                .and_then(JsonValue::as_str)
                .unwrap_or("N/A")
                .to_string()
        };

        match self.field_type.as_str() {
            "singleSelect" | "multipleSelects" => options
                .get("choices")
                .and_then(JsonValue::as_array)
                .map(|choices| {
                    choices
                        .iter()
                        .map(|choice| {
                            let name = choice.get("name").and_then(JsonValue::as_str);
                            let color = choice.get("color").and_then(JsonValue::as_str);
                            format!(
                                "choice: {} (color: {})",
                                name.unwrap_or(""),
                                color.unwrap_or("default")
                            )
                        })
                        .collect()
                })
                .unwrap_or_default(),
            "multipleRecordLinks" => vec![
                format!("linked table: {}", text("linkedTableId")),
                format!("link view: {}", text("viewIdForRecordSelection")),
            ],
            "formula" => vec![format!("formula: {}", text("formula"))],
            "rollup" => vec![format!("rollup function: {}", text("rollupFunction"))],
            "count" => vec![format!("counted link field: {}", text("recordLinkFieldId"))],
            _ => Vec::new(),
        }
    }
}

/// Declared view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewSchema {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub view_type: String,
}

/// Declared fields versus fields present in fetched records
///
/// The service leaves empty cells out of responses, so a declared field
/// that never shows up is either hidden from the view or always empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SchemaComparison {
    /// Number of declared fields
    pub declared: usize,
    /// Number of distinct field names in records
    pub observed: usize,
    /// Declared but never present in a record
    pub schema_only: Vec<String>,
    /// Present in records but not declared
    pub records_only: Vec<String>,
}

impl SchemaComparison {
    /// Check if both sides list the same fields
    pub fn is_consistent(&self) -> bool {
        self.schema_only.is_empty() && self.records_only.is_empty()
    }
}
