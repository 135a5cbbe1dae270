//! CLI commands and argument parsing

use crate::config::PartialSettings;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Airtable table profiler
#[derive(Parser, Debug)]
#[command(name = "airtable-profiler")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Settings file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Output format for stdout
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Connection flags; each one can also come from the environment
#[derive(Args, Debug, Clone, Default)]
pub struct ConnectionArgs {
    /// Personal access token
    #[arg(long, global = true, env = "AIRTABLE_API_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,

    /// Base id (app...)
    #[arg(long, global = true, env = "AIRTABLE_BASE_ID")]
    pub base_id: Option<String>,

    /// Table id or name (tbl...)
    #[arg(long, global = true, env = "AIRTABLE_TABLE_ID")]
    pub table_id: Option<String>,

    /// View id or name (viw...)
    #[arg(long, global = true, env = "AIRTABLE_VIEW_ID")]
    pub view_id: Option<String>,

    /// API root
    #[arg(long, global = true, env = "AIRTABLE_API_URL")]
    pub api_url: Option<String>,

    /// Records per page (1-100)
    #[arg(long, global = true, env = "AIRTABLE_PAGE_SIZE")]
    pub page_size: Option<u32>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "AIRTABLE_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,
}

impl ConnectionArgs {
    /// Settings layer built from these flags
    pub fn to_partial(&self) -> PartialSettings {
        PartialSettings {
            api_url: self.api_url.clone(),
            api_token: self.api_token.clone(),
            base_id: self.base_id.clone(),
            table_id: self.table_id.clone(),
            view_id: self.view_id.clone(),
            page_size: self.page_size,
            max_records: None,
            timeout_secs: self.timeout_secs,
        }
    }
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch every record, profile all fields and write the reports
    Profile {
        /// Directory for the report JSON, CSV summary and record sample
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,

        /// Stop after this many records
        #[arg(long)]
        max_records: Option<u32>,

        /// Keywords used to flag key fields (comma-separated)
        #[arg(long, value_delimiter = ',')]
        keywords: Vec<String>,

        /// Print to stdout only, write no files
        #[arg(long)]
        no_files: bool,
    },

    /// Show the declared table schema
    Schema {
        /// Also fetch records and compare their fields with the schema
        #[arg(long)]
        compare: bool,

        /// Records fetched for the comparison (1-100)
        #[arg(long, default_value = "100", value_parser = clap::value_parser!(u32).range(1..=100))]
        sample_size: u32,

        /// Write the table schema JSON here
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Fetch and print the first few records
    Sample {
        /// Number of records (1-100)
        #[arg(default_value = "5", value_parser = clap::value_parser!(u32).range(1..=100))]
        count: u32,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Pretty-printed JSON
    Json,
}
