//! CLI module
//!
//! Command-line interface for profiling a table.
//!
//! # Commands
//!
//! - `profile` - Fetch every record, profile fields, write reports
//! - `schema` - Show declared fields, optionally compared with records
//! - `sample` - Print the first few records

mod commands;
mod runner;

pub use commands::{Cli, Commands, ConnectionArgs, OutputFormat};
pub use runner::{write_reports, Runner};
