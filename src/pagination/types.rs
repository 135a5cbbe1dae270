//! Pagination types and traits
//!
//! Defines the core pagination abstractions used by the paginator.

use crate::error::{Error, Result};
use crate::types::Record;
use async_trait::async_trait;

/// Largest page the remote service will return
pub const MAX_PAGE_SIZE: u32 = 100;

/// One page of records plus the token for the page after it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    /// Records on this page, in service order
    pub records: Vec<Record>,
    /// Continuation token; absent or empty means this is the last page
    pub next_token: Option<String>,
}

impl Page {
    /// Create a page that has a successor
    pub fn new(records: Vec<Record>, next_token: impl Into<String>) -> Self {
        Self {
            records,
            next_token: Some(next_token.into()),
        }
    }

    /// Create the final page
    pub fn last(records: Vec<Record>) -> Self {
        Self {
            records,
            next_token: None,
        }
    }

    /// Token to request the next page with, if any
    pub fn continuation(&self) -> Option<&str> {
        self.next_token.as_deref().filter(|t| !t.is_empty())
    }

    /// Check if more pages follow
    pub fn has_more(&self) -> bool {
        self.continuation().is_some()
    }
}

/// Parameters for a single page request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageRequest {
    /// Continuation token from the previous page (None for the first page)
    pub token: Option<String>,
    /// Records per page
    pub page_size: u32,
    /// Overall record ceiling forwarded to the service
    pub max_records: Option<u32>,
}

/// Configuration for pagination behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationConfig {
    /// Records per page (1..=100)
    pub page_size: u32,
    /// Optional overall ceiling on records returned by the service
    pub max_records: Option<u32>,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            page_size: MAX_PAGE_SIZE,
            max_records: None,
        }
    }
}

impl PaginationConfig {
    /// Create a config with the given page size
    pub fn new(page_size: u32) -> Result<Self> {
        let config = Self {
            page_size,
            ..Default::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Set the record ceiling
    #[must_use]
    pub fn with_max_records(mut self, max_records: Option<u32>) -> Self {
        self.max_records = max_records;
        self
    }

    /// Check the page size against the service maximum
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 || self.page_size > MAX_PAGE_SIZE {
            return Err(Error::invalid_value(
                "page_size",
                format!(
                    "must be between 1 and {MAX_PAGE_SIZE}, got {}",
                    self.page_size
                ),
            ));
        }
        if self.max_records == Some(0) {
            return Err(Error::invalid_value(
                "max_records",
                "must be greater than 0",
            ));
        }
        Ok(())
    }

    /// Build the request for the page following `token`
    pub fn request(&self, token: Option<&str>) -> PageRequest {
        PageRequest {
            token: token.map(String::from),
            page_size: self.page_size,
            max_records: self.max_records,
        }
    }
}

/// Tracks pagination progress during iteration
#[derive(Debug, Clone, Default)]
pub struct PaginationState {
    /// Pages fetched successfully so far
    pub pages: u32,
    /// Total records fetched so far
    pub total_fetched: u64,
    /// Current continuation token
    pub token: Option<String>,
    /// Is pagination complete?
    pub done: bool,
}

impl PaginationState {
    /// Create a new pagination state
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a fetched page and advance the token
    pub fn advance(&mut self, page: &Page) {
        self.pages += 1;
        self.total_fetched += page.records.len() as u64;
        self.token = page.continuation().map(String::from);
        if self.token.is_none() {
            self.done = true;
        }
    }
}

/// Anything that can fetch one page of records
///
/// Implementations must not retain state between calls that would change
/// the meaning of a request; the paginator may be run more than once over
/// the same source.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch the page described by `request`
    async fn fetch_page(&self, request: &PageRequest) -> Result<Page>;
}

/// A pagination run that stopped on a failed page
///
/// Carries the error together with every record from the pages that
/// succeeded before it, so callers can decide whether partial results are
/// still useful.
#[derive(Debug, thiserror::Error)]
#[error(
    "page {page} failed after {gathered} records: {error}",
    page = .pages + 1,
    gathered = .records.len()
)]
pub struct PartialFetch {
    /// What went wrong on the failing page
    #[source]
    pub error: Error,
    /// Records from pages 1..k-1
    pub records: Vec<Record>,
    /// Number of pages fetched successfully before the failure
    pub pages: u32,
}

impl PartialFetch {
    /// HTTP status of the failed request, if any
    pub fn status(&self) -> Option<u16> {
        self.error.status()
    }

    /// Discard the partial records and keep the error
    pub fn into_error(self) -> Error {
        self.error
    }
}

impl From<PartialFetch> for Error {
    fn from(partial: PartialFetch) -> Self {
        partial.error
    }
}
