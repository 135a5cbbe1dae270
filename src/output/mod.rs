//! Output module
//!
//! Renders profiling results for people and for other tools.
//!
//! # Overview
//!
//! - [`ReportDocument`]: the structured JSON report, one entry per field
//! - [`write_summary_csv`]: a flat CSV summary, one row per field
//! - [`console`]: plain-text rendering for the terminal
//! - [`KeyFieldMatcher`]: keyword hints for fields worth a closer look
//! - [`OutputFiles`]: file names used inside an output directory

pub mod console;
mod hints;
mod report;
mod summary;

pub use hints::{KeyFieldMatcher, DEFAULT_KEY_KEYWORDS};
pub use report::{
    write_json, FieldEntry, OutputFiles, RecordSample, ReportDocument, RECORD_SAMPLE_SIZE,
};
pub use summary::{write_summary, write_summary_csv, SummaryRow};

#[cfg(test)]
mod tests;
