//! CLI runner - executes commands

use crate::airtable::AirtableClient;
use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::{PartialSettings, ProfilerSettings};
use crate::error::{Error, Result, ResultExt};
use crate::output::{
    console, write_json, write_summary_csv, KeyFieldMatcher, OutputFiles, RecordSample,
    ReportDocument,
};
use crate::profile::{profile_records, ProfileReport, ReportSource};
use crate::types::Record;
use serde::Serialize;
use std::collections::BTreeSet;
use std::io::{self, Write};
use std::path::Path;
use std::time::Instant;
use tracing::{error, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Profile {
                output_dir,
                max_records,
                keywords,
                no_files,
            } => {
                let output_dir = (!*no_files).then_some(output_dir.as_path());
                self.profile(output_dir, *max_records, keywords).await
            }
            Commands::Schema {
                compare,
                sample_size,
                output,
            } => {
                self.schema(*compare, *sample_size, output.as_deref())
                    .await
            }
            Commands::Sample { count } => self.sample(*count).await,
        }
    }

    /// Resolve settings: flags and environment first, then the settings file
    pub fn load_settings(&self, max_records: Option<u32>) -> Result<ProfilerSettings> {
        let mut layer = self.cli.connection.to_partial();
        layer.max_records = max_records;

        let file = match &self.cli.config {
            Some(path) => PartialSettings::from_file(path)?,
            None => PartialSettings::default(),
        };

        layer.or(file).resolve()
    }

    /// Fetch everything, profile, print and write reports
    async fn profile(
        &self,
        output_dir: Option<&Path>,
        max_records: Option<u32>,
        keywords: &[String],
    ) -> Result<()> {
        let settings = self.load_settings(max_records)?;
        let matcher = key_field_matcher(keywords)?;
        let client = AirtableClient::new(&settings)?;
        let started = Instant::now();

        let records = match client.fetch_all_records().await {
            Ok(records) => records,
            Err(partial) => {
                error!(
                    pages = partial.pages,
                    gathered = partial.records.len(),
                    "{partial}"
                );
                error!("No report written");
                return Err(partial.into_error());
            }
        };
        info!(
            records = records.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Total records fetched: {}",
            records.len()
        );

        let report = profile_records(&records).with_source(ReportSource {
            base_id: settings.base_id.clone(),
            table_id: settings.table_id.clone(),
            view_id: settings.view_id.clone(),
        });

        match self.cli.format {
            OutputFormat::Text => {
                emit(&console::render_report(&report))?;
                let hints = matcher.matching(report.field_names());
                emit(&console::render_hints(&hints))?;
            }
            OutputFormat::Json => print_json(&ReportDocument::from(&report))?,
        }

        if let Some(dir) = output_dir {
            write_reports(dir, &report, &records)
                .with_context(|| format!("Writing reports to {}", dir.display()))?;
        }
        Ok(())
    }

    /// Print the declared schema, optionally compared with real records
    async fn schema(&self, compare: bool, sample_size: u32, output: Option<&Path>) -> Result<()> {
        let settings = self.load_settings(None)?;
        let client = AirtableClient::new(&settings)?;

        let table = client.fetch_table_schema().await?;
        info!(
            table = %table.name,
            fields = table.fields.len(),
            "Fetched table schema"
        );

        match self.cli.format {
            OutputFormat::Text => emit(&console::render_schema(&table))?,
            OutputFormat::Json => print_json(&table)?,
        }

        if let Some(path) = output {
            write_json(path, &table)?;
            info!(path = %path.display(), "Wrote table schema");
        }

        if compare {
            let records = client.fetch_sample(sample_size).await?;
            let observed: BTreeSet<&str> = records
                .iter()
                .flat_map(|r| r.fields.keys().map(String::as_str))
                .collect();
            let comparison = table.compare_fields(observed);

            match self.cli.format {
                OutputFormat::Text => emit(&console::render_comparison(&comparison))?,
                OutputFormat::Json => print_json(&comparison)?,
            }
        }

        Ok(())
    }

    /// Print the first `count` records
    async fn sample(&self, count: u32) -> Result<()> {
        let settings = self.load_settings(None)?;
        let client = AirtableClient::new(&settings)?;

        let records = client.fetch_sample(count).await?;
        match self.cli.format {
            OutputFormat::Text => emit(&console::render_records(&records))?,
            OutputFormat::Json => print_json(&records)?,
        }
        Ok(())
    }
}

/// Write the report JSON, CSV summary and record sample into `dir`
pub fn write_reports(dir: &Path, report: &ProfileReport, records: &[Record]) -> Result<OutputFiles> {
    let files = OutputFiles::in_dir(dir);

    write_json(&files.report, &ReportDocument::from(report))?;
    let rows = write_summary_csv(&files.summary, report)?;
    write_json(&files.sample, &RecordSample::new(records))?;

    info!(
        report = %files.report.display(),
        summary = %files.summary.display(),
        sample = %files.sample.display(),
        rows,
        "Reports written"
    );
    Ok(files)
}

/// Matcher for `--keywords`, or the default keyword list when none are given
pub(crate) fn key_field_matcher(keywords: &[String]) -> Result<KeyFieldMatcher> {
    if keywords.is_empty() {
        KeyFieldMatcher::defaults()
    } else {
        KeyFieldMatcher::new(keywords)
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| Error::output(format!("Failed to render JSON: {e}")))?;
    emit(&format!("{text}\n"))
}

/// Write rendered text to stdout
fn emit(text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
