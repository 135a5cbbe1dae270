//! Field profiling over a record set

use super::types::{FieldProfile, ProfileReport, ValueKind};
use crate::types::{JsonObject, JsonValue, Record};
use chrono::Utc;
use std::collections::BTreeMap;
use tracing::debug;

/// Caps and preview sizes used while profiling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfilerConfig {
    /// Maximum distinct values kept per field
    pub distinct_cap: usize,
    /// Maximum samples kept per field
    pub sample_cap: usize,
    /// Array/object previews are only stored while fewer samples than this exist
    pub structured_sample_cap: usize,
    /// Array elements kept in a preview
    pub array_preview_items: usize,
    /// String previews longer than this are truncated
    pub preview_chars: usize,
}

impl Default for ProfilerConfig {
    fn default() -> Self {
        Self {
            distinct_cap: 50,
            sample_cap: 5,
            structured_sample_cap: 3,
            array_preview_items: 2,
            preview_chars: 100,
        }
    }
}

/// Builds field profiles one record at a time
#[derive(Debug, Clone)]
pub struct FieldProfiler {
    config: ProfilerConfig,
    total_records: usize,
    fields: BTreeMap<String, FieldProfile>,
}

impl Default for FieldProfiler {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldProfiler {
    /// Create a profiler with default caps
    pub fn new() -> Self {
        Self::with_config(ProfilerConfig::default())
    }

    /// Create a profiler with custom caps
    pub fn with_config(config: ProfilerConfig) -> Self {
        Self {
            config,
            total_records: 0,
            fields: BTreeMap::new(),
        }
    }

    /// Set the distinct-value cap
    #[must_use]
    pub fn with_distinct_cap(mut self, cap: usize) -> Self {
        self.config.distinct_cap = cap;
        self
    }

    /// Set the sample cap
    #[must_use]
    pub fn with_sample_cap(mut self, cap: usize) -> Self {
        self.config.sample_cap = cap;
        self
    }

    /// Get the active config
    pub fn config(&self) -> &ProfilerConfig {
        &self.config
    }

    /// Records observed so far
    pub fn total_records(&self) -> usize {
        self.total_records
    }

    /// Fold one record into the profiles
    pub fn observe(&mut self, record: &Record) {
        self.total_records += 1;
        for (name, value) in &record.fields {
            let config = self.config;
            let profile = self.fields.entry(name.clone()).or_insert_with(|| {
                FieldProfile::new(name.clone(), config.distinct_cap, config.sample_cap)
            });
            observe_value(profile, value, &config);
        }
    }

    /// Fold every record into the profiles
    pub fn observe_all<'a>(&mut self, records: impl IntoIterator<Item = &'a Record>) {
        for record in records {
            self.observe(record);
        }
    }

    /// Close the pass and produce the report
    ///
    /// Fields absent from some records are marked nullable here, even if
    /// they never held an explicit null.
    pub fn finish(mut self) -> ProfileReport {
        for profile in self.fields.values_mut() {
            if profile.appearances < self.total_records {
                profile.has_nulls = true;
            }
        }

        debug!(
            records = self.total_records,
            fields = self.fields.len(),
            "Profiling complete"
        );

        ProfileReport {
            generated_at: Utc::now(),
            source: None,
            total_records: self.total_records,
            fields: self.fields,
        }
    }
}

/// Profile a full record set with default caps
pub fn profile_records(records: &[Record]) -> ProfileReport {
    let mut profiler = FieldProfiler::new();
    profiler.observe_all(records);
    profiler.finish()
}

fn observe_value(profile: &mut FieldProfile, value: &JsonValue, config: &ProfilerConfig) {
    profile.appearances += 1;
    profile.kinds.insert(ValueKind::of(value));

    match value {
        JsonValue::Null => profile.has_nulls = true,
        JsonValue::Array(items) => {
            profile.is_array = true;
            profile
                .element_kinds
                .extend(items.iter().map(ValueKind::of));

            if !items.is_empty() && profile.samples.len() < config.structured_sample_cap {
                profile.samples.push(array_preview(items, config));
            }
        }
        JsonValue::Object(map) => {
            profile.is_object = true;
            if profile.samples.len() < config.structured_sample_cap {
                profile.samples.push(object_preview(map));
            }
        }
        JsonValue::String(text) => {
            profile.max_length = profile.max_length.max(text.chars().count());
            profile.distinct_values.insert(text.clone());
            if !profile.samples.is_full() {
                profile
                    .samples
                    .push(JsonValue::String(truncate(text, config.preview_chars)));
            }
        }
        JsonValue::Number(_) | JsonValue::Bool(_) => {
            profile.distinct_values.insert(value.to_string());
            profile.samples.push(value.clone());
        }
    }
}

/// First few elements when the array holds strings, otherwise its length
fn array_preview(items: &[JsonValue], config: &ProfilerConfig) -> JsonValue {
    if items.first().is_some_and(JsonValue::is_string) {
        JsonValue::Array(
            items
                .iter()
                .take(config.array_preview_items)
                .cloned()
                .collect(),
        )
    } else {
        JsonValue::String(format!("[{} items]", items.len()))
    }
}

fn object_preview(map: &JsonObject) -> JsonValue {
    let keys: Vec<&str> = map.keys().map(String::as_str).collect();
    JsonValue::String(format!("Object with keys: [{}]", keys.join(", ")))
}

pub(super) fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => format!("{}...", &text[..end]),
        None => text.to_string(),
    }
}
