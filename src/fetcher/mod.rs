pub mod http_fetcher;

use async_trait::async_trait;

use crate::app::Result;
use crate::controller::FetchRequest;
use crate::domain::Page;

pub use http_fetcher::HttpFetcher;

/// Transport for paginated search.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch one zero-based page of results for `query`.
    async fn fetch_page(&self, query: &str, page: u32, page_size: u32) -> Result<Page>;

    async fn fetch(&self, request: &FetchRequest) -> Result<Page> {
        self.fetch_page(&request.query, request.page, request.page_size)
            .await
    }
}
