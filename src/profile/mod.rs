//! Field profiling module
//!
//! Walks a fully fetched record set once and builds a shape summary for
//! every field name that appears in it.
//!
//! # Features
//!
//! - **Kind Tracking**: Records every value kind seen per field (mixed kinds allowed)
//! - **Presence**: Counts appearances and flags fields missing from some records
//! - **Arrays and Objects**: Tracks element kinds and key previews
//! - **Bounded Samples**: Distinct values and samples stop growing at fixed caps

mod bounded;
mod profiler;
mod types;

pub use bounded::{BoundedList, BoundedSet};
pub use profiler::{profile_records, FieldProfiler, ProfilerConfig};
pub use types::{round_to, FieldProfile, ProfileReport, ReportSource, ValueKind};

#[cfg(test)]
mod tests;
