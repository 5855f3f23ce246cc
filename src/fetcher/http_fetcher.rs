use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::app::Result;
use crate::config::SearchConfig;
use crate::domain::Page;
use crate::fetcher::Fetcher;
use crate::normalizer::Normalizer;

pub struct HttpFetcher {
    client: Client,
    base_url: Url,
    normalizer: Normalizer,
}

impl HttpFetcher {
    pub fn new(config: &SearchConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .gzip(true)
            .brotli(true)
            .user_agent(concat!("hnsift/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: Url::parse(&config.base_url)?,
            normalizer: Normalizer::new(),
        })
    }

    /// Build the request URL for one page of `query`.
    pub fn search_url(&self, query: &str, page: u32, page_size: u32) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("query", query)
            .append_pair("page", &page.to_string())
            .append_pair("hitsPerPage", &page_size.to_string());
        url
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch_page(&self, query: &str, page: u32, page_size: u32) -> Result<Page> {
        let url = self.search_url(query, page, page_size);
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        response.error_for_status_ref()?;

        let body = response.bytes().await?;
        self.normalizer.normalize(&body, page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_url() {
        let fetcher = HttpFetcher::new(&SearchConfig::default()).unwrap();
        let url = fetcher.search_url("redux", 2, 10);
        assert_eq!(
            url.as_str(),
            "https://hn.algolia.com/api/v1/search?query=redux&page=2&hitsPerPage=10"
        );
    }

    #[test]
    fn test_search_url_encodes_query() {
        let fetcher = HttpFetcher::new(&SearchConfig::default()).unwrap();
        let url = fetcher.search_url("rust & go", 0, 25);
        assert_eq!(
            url.query(),
            Some("query=rust+%26+go&page=0&hitsPerPage=25")
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let config = SearchConfig {
            base_url: "not a url".into(),
            ..SearchConfig::default()
        };
        assert!(HttpFetcher::new(&config).is_err());
    }
}
