use serde::{Deserialize, Serialize};

use crate::domain::Item;

/// One page of results for one query, as returned by a [`Fetcher`](crate::fetcher::Fetcher).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub items: Vec<Item>,
    /// Zero-based page number.
    pub page_index: u32,
    /// Number of pages the backend reports for this query, when known.
    pub total_pages: Option<u32>,
    pub total_hits: Option<u64>,
}

impl Page {
    pub fn new(page_index: u32, items: Vec<Item>) -> Self {
        Self {
            items,
            page_index,
            total_pages: None,
            total_hits: None,
        }
    }
}
