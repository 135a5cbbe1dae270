//! Run configuration
//!
//! Settings come from two layers: values given on the command line (or the
//! matching `AIRTABLE_*` environment variables) and an optional YAML/JSON
//! settings file. Command-line values win; the file fills the gaps.

use crate::error::{Error, Result};
use crate::pagination::{PaginationConfig, MAX_PAGE_SIZE};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Default API root
pub const DEFAULT_API_URL: &str = "https://api.airtable.com";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// Resolved Settings
// ============================================================================

/// Fully resolved settings for one run
#[derive(Clone, PartialEq, Eq)]
pub struct ProfilerSettings {
    /// API root (scheme + host)
    pub api_url: String,
    /// Personal access token
    pub api_token: String,
    /// Base identifier (`app...`)
    pub base_id: String,
    /// Table identifier or name (`tbl...`)
    pub table_id: String,
    /// Optional view identifier or name (`viw...`)
    pub view_id: Option<String>,
    /// Records per page
    pub page_size: u32,
    /// Optional ceiling on records returned
    pub max_records: Option<u32>,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl ProfilerSettings {
    /// Create settings with defaults for everything but the identifiers
    pub fn new(
        api_token: impl Into<String>,
        base_id: impl Into<String>,
        table_id: impl Into<String>,
    ) -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_token: api_token.into(),
            base_id: base_id.into(),
            table_id: table_id.into(),
            view_id: None,
            page_size: MAX_PAGE_SIZE,
            max_records: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set the API root
    #[must_use]
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Set the view
    #[must_use]
    pub fn with_view(mut self, view_id: impl Into<String>) -> Self {
        self.view_id = Some(view_id.into());
        self
    }

    /// Set the page size
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the record ceiling
    #[must_use]
    pub fn with_max_records(mut self, max_records: Option<u32>) -> Self {
        self.max_records = max_records;
        self
    }

    /// Validate required fields and numeric bounds
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("api_token", &self.api_token),
            ("base_id", &self.base_id),
            ("table_id", &self.table_id),
        ] {
            if value.trim().is_empty() {
                return Err(Error::missing_field(field));
            }
        }

        url::Url::parse(&self.api_url)?;

        if self.timeout_secs == 0 {
            return Err(Error::invalid_value("timeout_secs", "must be greater than 0"));
        }

        self.pagination().validate()
    }

    /// Pagination parameters derived from these settings
    pub fn pagination(&self) -> PaginationConfig {
        PaginationConfig {
            page_size: self.page_size,
            max_records: self.max_records,
        }
    }

    /// Request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl fmt::Debug for ProfilerSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfilerSettings")
            .field("api_url", &self.api_url)
            .field("api_token", &"<redacted>")
            .field("base_id", &self.base_id)
            .field("table_id", &self.table_id)
            .field("view_id", &self.view_id)
            .field("page_size", &self.page_size)
            .field("max_records", &self.max_records)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

// ============================================================================
// Partial Settings (one layer)
// ============================================================================

/// One layer of settings where every value is optional
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PartialSettings {
    pub api_url: Option<String>,
    pub api_token: Option<String>,
    pub base_id: Option<String>,
    pub table_id: Option<String>,
    pub view_id: Option<String>,
    pub page_size: Option<u32>,
    pub max_records: Option<u32>,
    pub timeout_secs: Option<u64>,
}

impl PartialSettings {
    /// Load a settings file
    ///
    /// Files ending in `.json` are parsed as JSON, everything else as YAML.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read settings file {}: {e}", path.display()))
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Ok(serde_json::from_str(&content)?)
        } else {
            Ok(serde_yaml::from_str(&content)?)
        }
    }

    /// Fill unset values from `fallback`
    #[must_use]
    pub fn or(self, fallback: PartialSettings) -> Self {
        Self {
            api_url: self.api_url.or(fallback.api_url),
            api_token: self.api_token.or(fallback.api_token),
            base_id: self.base_id.or(fallback.base_id),
            table_id: self.table_id.or(fallback.table_id),
            view_id: self.view_id.or(fallback.view_id),
            page_size: self.page_size.or(fallback.page_size),
            max_records: self.max_records.or(fallback.max_records),
            timeout_secs: self.timeout_secs.or(fallback.timeout_secs),
        }
    }

    /// Resolve into validated settings, applying defaults
    pub fn resolve(self) -> Result<ProfilerSettings> {
        let settings = ProfilerSettings {
            api_url: self.api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            api_token: self
                .api_token
                .ok_or_else(|| Error::missing_field("api_token"))?,
            base_id: self.base_id.ok_or_else(|| Error::missing_field("base_id"))?,
            table_id: self
                .table_id
                .ok_or_else(|| Error::missing_field("table_id"))?,
            view_id: self.view_id.filter(|v| !v.is_empty()),
            page_size: self.page_size.unwrap_or(MAX_PAGE_SIZE),
            max_records: self.max_records,
            timeout_secs: self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
        };
        settings.validate()?;
        Ok(settings)
    }
}

impl fmt::Debug for PartialSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PartialSettings")
            .field("api_url", &self.api_url)
            .field("api_token", &self.api_token.as_ref().map(|_| "<redacted>"))
            .field("base_id", &self.base_id)
            .field("table_id", &self.table_id)
            .field("view_id", &self.view_id)
            .field("page_size", &self.page_size)
            .field("max_records", &self.max_records)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
