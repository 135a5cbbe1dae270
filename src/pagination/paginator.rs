//! Token paginator
//!
//! Drives a [`PageSource`] from the first page to the last.

use super::types::{PageSource, PaginationConfig, PaginationState, PartialFetch};
use crate::error::Result;
use crate::types::Record;
use tracing::{debug, info, warn};

/// Follows continuation tokens until the source reports the last page
#[derive(Debug, Clone, Default)]
pub struct TokenPaginator {
    config: PaginationConfig,
}

impl TokenPaginator {
    /// Create a paginator, validating the page size
    pub fn new(config: PaginationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the pagination config
    pub fn config(&self) -> &PaginationConfig {
        &self.config
    }

    /// Fetch every page and return all records in page order
    ///
    /// Stops when a page comes back without a continuation token. On the
    /// first failed request the loop ends and the records gathered so far
    /// are returned inside the [`PartialFetch`].
    pub async fn collect_all(
        &self,
        source: &dyn PageSource,
    ) -> std::result::Result<Vec<Record>, PartialFetch> {
        let mut state = PaginationState::new();
        let mut records = Vec::new();

        while !state.done {
            let request = self.config.request(state.token.as_deref());
            debug!(
                page = state.pages + 1,
                has_token = request.token.is_some(),
                "Requesting page"
            );

            let page = match source.fetch_page(&request).await {
                Ok(page) => page,
                Err(error) => {
                    warn!(
                        page = state.pages + 1,
                        gathered = records.len(),
                        "Page request failed: {error}"
                    );
                    return Err(PartialFetch {
                        error,
                        records,
                        pages: state.pages,
                    });
                }
            };

            state.advance(&page);
            info!(
                "Page {}: {} records fetched",
                state.pages,
                page.records.len()
            );
            records.extend(page.records);
        }

        info!(
            pages = state.pages,
            total = state.total_fetched,
            "Pagination complete"
        );
        Ok(records)
    }
}
