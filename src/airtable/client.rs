//! Airtable client

use super::types::{BaseSchema, ListRecordsResponse, TableSchema};
use crate::auth::AuthConfig;
use crate::config::ProfilerSettings;
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig, RequestConfig};
use crate::pagination::{
    Page, PageRequest, PageSource, PaginationConfig, PartialFetch, TokenPaginator, MAX_PAGE_SIZE,
};
use crate::types::Record;
use async_trait::async_trait;
use tracing::{debug, info};
use url::Url;

/// Client for one table (and optionally one view) of a base
#[derive(Debug)]
pub struct AirtableClient {
    http: HttpClient,
    api_url: Url,
    base_id: String,
    table_id: String,
    view_id: Option<String>,
    paginator: TokenPaginator,
}

impl AirtableClient {
    /// Build a client from resolved settings
    pub fn new(settings: &ProfilerSettings) -> Result<Self> {
        settings.validate()?;

        let http_config = HttpClientConfig::builder()
            .timeout(settings.timeout())
            .header("Content-Type", "application/json")
            .build();
        let http = HttpClient::with_auth(http_config, AuthConfig::bearer(&settings.api_token))?;

        Ok(Self {
            http,
            api_url: Url::parse(&settings.api_url)?,
            base_id: settings.base_id.clone(),
            table_id: settings.table_id.clone(),
            view_id: settings.view_id.clone(),
            paginator: TokenPaginator::new(settings.pagination())?,
        })
    }

    /// Base identifier
    pub fn base_id(&self) -> &str {
        &self.base_id
    }

    /// Table identifier
    pub fn table_id(&self) -> &str {
        &self.table_id
    }

    /// View identifier, if one is configured
    pub fn view_id(&self) -> Option<&str> {
        self.view_id.as_deref()
    }

    /// Pagination parameters used for full fetches
    pub fn pagination(&self) -> &PaginationConfig {
        self.paginator.config()
    }

    /// Fetch a single page of records
    pub async fn list_records_page(&self, request: &PageRequest) -> Result<Page> {
        let url = self.endpoint(&[self.base_id.as_str(), self.table_id.as_str()])?;
        let config = RequestConfig::new()
            .query("pageSize", request.page_size.to_string())
            .query_opt("view", self.view_id.as_deref())
            .query_opt("maxRecords", request.max_records.map(|n| n.to_string()))
            .query_opt("offset", request.token.as_deref());

        let response: ListRecordsResponse = self.http.get_json_with_config(&url, config).await?;
        debug!(
            records = response.records.len(),
            has_offset = response.offset.is_some(),
            "Received records page"
        );
        Ok(response.into())
    }

    /// Fetch every record of the table or view
    ///
    /// On failure the records from earlier pages travel with the error.
    pub async fn fetch_all_records(&self) -> std::result::Result<Vec<Record>, PartialFetch> {
        info!(
            base = %self.base_id,
            table = %self.table_id,
            view = self.view_id.as_deref().unwrap_or("-"),
            "Fetching all records"
        );
        self.paginator.collect_all(self).await
    }

    /// Fetch at most `count` records with a single request
    ///
    /// `count` must fit in one page (1..=100).
    pub async fn fetch_sample(&self, count: u32) -> Result<Vec<Record>> {
        if count == 0 || count > MAX_PAGE_SIZE {
            return Err(Error::invalid_value(
                "count",
                format!("must be between 1 and {MAX_PAGE_SIZE}, got {count}"),
            ));
        }
        let request = PageRequest {
            token: None,
            page_size: count,
            max_records: Some(count),
        };
        let page = self.list_records_page(&request).await?;
        Ok(page.records)
    }

    /// Fetch the schema of every table in the base
    pub async fn fetch_base_schema(&self) -> Result<BaseSchema> {
        let url = self.endpoint(&["meta", "bases", self.base_id.as_str(), "tables"])?;
        self.http.get_json(&url).await
    }

    /// Fetch the schema of the configured table
    pub async fn fetch_table_schema(&self) -> Result<TableSchema> {
        let schema = self.fetch_base_schema().await?;
        schema
            .find_table(&self.table_id)
            .cloned()
            .ok_or_else(|| Error::TableNotFound {
                base: self.base_id.clone(),
                table: self.table_id.clone(),
            })
    }

    /// Build `{api_url}/v0/{segments...}` with each segment percent-encoded
    fn endpoint(&self, segments: &[&str]) -> Result<String> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::config(format!("API URL cannot be a base: {}", self.api_url)))?
            .pop_if_empty()
            .push("v0")
            .extend(segments);
        Ok(url.to_string())
    }
}

#[async_trait]
impl PageSource for AirtableClient {
    async fn fetch_page(&self, request: &PageRequest) -> Result<Page> {
        self.list_records_page(request).await
    }
}
