//! Flat CSV summary

use super::report::create_parent;
use crate::error::{Error, Result};
use crate::profile::{FieldProfile, ProfileReport};
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// One CSV row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    pub field: String,
    pub kinds: String,
    /// One decimal, as text
    pub presence_pct: String,
    pub is_array: &'static str,
    pub is_object: &'static str,
    pub nullable: &'static str,
    pub distinct_values: usize,
}

impl SummaryRow {
    pub fn from_profile(profile: &FieldProfile, total_records: usize) -> Self {
        Self {
            field: profile.name.clone(),
            kinds: profile.kinds_label(),
            presence_pct: format!("{:.1}", profile.presence_pct(total_records)),
            is_array: yes_no(profile.is_array),
            is_object: yes_no(profile.is_object),
            nullable: yes_no(profile.is_nullable()),
            distinct_values: profile.distinct_values.len(),
        }
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

/// Write the summary to any writer, one row per field in name order
pub fn write_summary<W: Write>(writer: W, report: &ProfileReport) -> Result<usize> {
    let mut csv = csv::Writer::from_writer(writer);
    let mut rows = 0;

    for profile in report.fields.values() {
        csv.serialize(SummaryRow::from_profile(profile, report.total_records))?;
        rows += 1;
    }

    // Headers come from the first serialized row
    if rows == 0 {
        csv.write_record([
            "field",
            "kinds",
            "presence_pct",
            "is_array",
            "is_object",
            "nullable",
            "distinct_values",
        ])?;
    }

    csv.flush()
        .map_err(|e| Error::output(format!("Failed to flush CSV: {e}")))?;
    Ok(rows)
}

/// Write the summary to a file
pub fn write_summary_csv(path: impl AsRef<Path>, report: &ProfileReport) -> Result<usize> {
    let path = path.as_ref();
    create_parent(path)?;

    let file = std::fs::File::create(path).map_err(|e| {
        Error::output(format!("Failed to create file {}: {e}", path.display()))
    })?;
    let rows = write_summary(file, report)?;

    debug!(path = %path.display(), rows, "Wrote CSV summary");
    Ok(rows)
}
