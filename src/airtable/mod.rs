//! Airtable REST API access
//!
//! Two endpoints are used:
//!
//! - `GET /v0/{base}/{table}` lists records, 100 at a time, with an opaque
//!   `offset` continuation token.
//! - `GET /v0/meta/bases/{base}/tables` returns the declared table schema.
//!
//! [`AirtableClient`] implements [`PageSource`](crate::pagination::PageSource)
//! so the generic paginator can walk a whole view.

mod client;
mod types;

pub use client::AirtableClient;
pub use types::{
    BaseSchema, FieldSchema, ListRecordsResponse, SchemaComparison, TableSchema, ViewSchema,
};
