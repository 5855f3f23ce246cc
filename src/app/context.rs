use std::sync::Arc;

use crate::app::error::Result;
use crate::app::session::Session;
use crate::config::Config;
use crate::controller::QueryController;
use crate::fetcher::{Fetcher, HttpFetcher};

pub struct AppContext {
    pub config: Config,
    pub fetcher: Arc<dyn Fetcher>,
}

impl AppContext {
    pub fn new(config: Config) -> Result<Self> {
        let fetcher: Arc<dyn Fetcher> = Arc::new(HttpFetcher::new(&config.search)?);
        Ok(Self::with_fetcher(config, fetcher))
    }

    pub fn with_fetcher(config: Config, fetcher: Arc<dyn Fetcher>) -> Self {
        Self { config, fetcher }
    }

    /// A fresh controller with an empty cache.
    pub fn controller(&self) -> QueryController {
        QueryController::new(
            self.config.search.page_size,
            self.config.search.default_query.clone(),
        )
    }

    pub fn session(&self) -> Session {
        Session::new(self.controller(), self.fetcher.clone())
            .with_view_options(self.config.search.view_options())
    }
}
