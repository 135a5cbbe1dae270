//! Common types used throughout airtable-profiler
//!
//! This module contains shared type definitions and type aliases
//! used across multiple modules.

use serde::{Deserialize, Serialize};

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

// ============================================================================
// Records
// ============================================================================

/// One row of a remote table
///
/// The service omits empty cells entirely, so a field that is missing from
/// `fields` is distinct from one that is present with a `null` value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Opaque record identifier (e.g. `rec123...`)
    pub id: String,

    /// Field name to cell value
    #[serde(default)]
    pub fields: JsonObject,

    /// Creation timestamp as reported by the service
    #[serde(
        rename = "createdTime",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub created_time: Option<String>,
}

impl Record {
    /// Create a record from an id and a field map
    pub fn new(id: impl Into<String>, fields: JsonObject) -> Self {
        Self {
            id: id.into(),
            fields,
            created_time: None,
        }
    }

    /// Build a record from a JSON object literal of fields
    ///
    /// Non-object values produce a record with no fields.
    pub fn from_value(id: impl Into<String>, fields: JsonValue) -> Self {
        let fields = match fields {
            JsonValue::Object(map) => map,
            _ => JsonObject::new(),
        };
        Self::new(id, fields)
    }

    /// Look up a field value
    pub fn get(&self, field: &str) -> Option<&JsonValue> {
        self.fields.get(field)
    }
}
