// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Airtable Profiler
//!
//! Fetches every record of an Airtable table (or view) through the
//! continuation-token API and reports the shape of each field: which value
//! kinds it holds, how often it is present, whether it is nullable, and a
//! few bounded samples.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use airtable_profiler::{profile_records, AirtableClient, ProfilerSettings, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let settings = ProfilerSettings::new("pat...", "app...", "tbl...").with_view("viw...");
//!     let client = AirtableClient::new(&settings)?;
//!
//!     let records = client.fetch_all_records().await?;
//!     let report = profile_records(&records);
//!
//!     for (name, field) in &report.fields {
//!         println!("{name}: {} ({:.1}%)", field.primary_kind(),
//!             field.presence_pct(report.total_records));
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     CLI (profile/schema/sample)              │
//! └──────────────────────────────────────────────────────────────┘
//!                                │
//! ┌────────────┬─────────────────┴──┬──────────────┬─────────────┐
//! │  Airtable  │    Pagination      │   Profile    │   Output    │
//! ├────────────┼────────────────────┼──────────────┼─────────────┤
//! │ Records    │ Continuation token │ Value kinds  │ JSON report │
//! │ Schema     │ Partial on failure │ Presence     │ CSV summary │
//! │ HTTP+Auth  │                    │ Bounded caps │ Console     │
//! └────────────┴────────────────────┴──────────────┴─────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the profiler
pub mod error;

/// Common types and type aliases
pub mod types;

/// Authentication
pub mod auth;

/// HTTP client
pub mod http;

/// Continuation-token pagination
pub mod pagination;

/// Airtable REST endpoints and wire types
pub mod airtable;

/// Field profiling
pub mod profile;

/// JSON/CSV reports and console rendering
pub mod output;

/// Run configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use airtable::{AirtableClient, BaseSchema, SchemaComparison, TableSchema};
pub use config::{PartialSettings, ProfilerSettings};
pub use pagination::{PageSource, PartialFetch, TokenPaginator};
pub use profile::{profile_records, FieldProfile, FieldProfiler, ProfileReport, ValueKind};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
