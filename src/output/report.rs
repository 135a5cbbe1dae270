//! JSON documents written to disk

use crate::error::{Error, Result};
use crate::profile::{round_to, FieldProfile, ProfileReport, ValueKind};
use crate::types::{JsonValue, Record};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Records kept in the record sample dump
pub const RECORD_SAMPLE_SIZE: usize = 5;

/// Serializable form of a [`ProfileReport`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportDocument {
    pub generated_at: DateTime<Utc>,
    pub base_id: Option<String>,
    pub table_id: Option<String>,
    pub view_id: Option<String>,
    pub total_records: usize,
    pub total_fields: usize,
    pub fields: BTreeMap<String, FieldEntry>,
}

/// One field of the JSON report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldEntry {
    /// Single kind, or `mixed: a, b`
    pub primary_kind: String,
    pub kinds: Vec<ValueKind>,
    pub appearances: usize,
    /// Rounded to two decimals
    pub presence_pct: f64,
    pub has_nulls: bool,
    pub is_array: bool,
    pub is_object: bool,
    pub element_kinds: Option<Vec<ValueKind>>,
    pub max_length: Option<usize>,
    pub distinct_count: usize,
    pub samples: Vec<JsonValue>,
}

impl FieldEntry {
    fn from_profile(profile: &FieldProfile, total_records: usize) -> Self {
        let element_kinds: Vec<ValueKind> = profile.element_kinds.iter().copied().collect();

        Self {
            primary_kind: profile.primary_kind(),
            kinds: profile.kinds.iter().copied().collect(),
            appearances: profile.appearances,
            presence_pct: round_to(profile.presence_pct(total_records), 2),
            has_nulls: profile.has_nulls,
            is_array: profile.is_array,
            is_object: profile.is_object,
            element_kinds: (!element_kinds.is_empty()).then_some(element_kinds),
            max_length: (profile.max_length > 0).then_some(profile.max_length),
            distinct_count: profile.distinct_values.len(),
            samples: profile.samples.as_slice().to_vec(),
        }
    }
}

impl From<&ProfileReport> for ReportDocument {
    fn from(report: &ProfileReport) -> Self {
        let source = report.source.as_ref();

        Self {
            generated_at: report.generated_at,
            base_id: source.map(|s| s.base_id.clone()),
            table_id: source.map(|s| s.table_id.clone()),
            view_id: source.and_then(|s| s.view_id.clone()),
            total_records: report.total_records,
            total_fields: report.total_fields(),
            fields: report
                .fields
                .iter()
                .map(|(name, profile)| {
                    (
                        name.clone(),
                        FieldEntry::from_profile(profile, report.total_records),
                    )
                })
                .collect(),
        }
    }
}

/// Total record count plus the first few records
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordSample<'a> {
    pub total_records: usize,
    pub records: &'a [Record],
}

impl<'a> RecordSample<'a> {
    /// Take the first [`RECORD_SAMPLE_SIZE`] records
    pub fn new(records: &'a [Record]) -> Self {
        Self::with_size(records, RECORD_SAMPLE_SIZE)
    }

    /// Take the first `size` records
    pub fn with_size(records: &'a [Record], size: usize) -> Self {
        Self {
            total_records: records.len(),
            records: &records[..records.len().min(size)],
        }
    }
}

/// File names used inside an output directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFiles {
    pub report: PathBuf,
    pub summary: PathBuf,
    pub sample: PathBuf,
}

impl OutputFiles {
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            report: dir.join("field_report.json"),
            summary: dir.join("field_summary.csv"),
            sample: dir.join("record_sample.json"),
        }
    }
}

/// Write any serializable value as pretty-printed JSON
///
/// Missing parent directories are created. The buffer is flushed before
/// returning so a failed write surfaces as an error.
pub fn write_json<T: Serialize + ?Sized>(path: impl AsRef<Path>, value: &T) -> Result<()> {
    let path = path.as_ref();
    create_parent(path)?;

    let file = File::create(path).map_err(|e| {
        Error::output(format!("Failed to create file {}: {e}", path.display()))
    })?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer
        .flush()
        .map_err(|e| Error::output(format!("Failed to flush {}: {e}", path.display())))?;

    debug!(path = %path.display(), "Wrote JSON");
    Ok(())
}

pub(super) fn create_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent)?;
            Ok(())
        }
        _ => Ok(()),
    }
}
