//! Pagination module
//!
//! Continuation-token pagination over a remote record collection.
//!
//! # Overview
//!
//! A [`PageSource`] knows how to fetch one page given an optional
//! continuation token. The [`TokenPaginator`] drives it from the first page
//! to the last, accumulating every record in page order. Paging ends only
//! when the source returns no token (or an empty one). A failed page aborts
//! the loop and hands back the records gathered so far in a
//! [`PartialFetch`].

mod paginator;
mod types;

pub use paginator::TokenPaginator;
pub use types::{
    Page, PageRequest, PageSource, PaginationConfig, PaginationState, PartialFetch,
    MAX_PAGE_SIZE,
};
