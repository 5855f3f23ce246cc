//! Fetch lifecycle for a search session.
//!
//! The controller never performs I/O itself. Intents that need the network
//! return a [`FetchRequest`]; whoever owns the transport runs it and hands
//! the outcome back through [`QueryController::complete`]. At most one
//! request is in flight at a time.

use std::sync::Arc;

use crate::app::{Result, SiftError};
use crate::domain::Page;
use crate::sort::{self, SortKey, SortState};
use crate::store::{MemoryStore, Store};
use crate::view::{self, ViewOptions, ViewState};

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const DEFAULT_QUERY: &str = "redux";

/// A page the controller wants fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub query: String,
    pub page: u32,
    pub page_size: u32,
}

#[derive(Debug, Clone, Default)]
pub struct FetchStatus {
    pub loading: bool,
    pub error: Option<Arc<SiftError>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPhase {
    Idle,
    Fetching,
    Errored,
}

pub struct QueryController<S: Store = MemoryStore> {
    store: S,
    search_term: String,
    active_query: Option<String>,
    sort: SortState,
    status: FetchStatus,
    in_flight: Option<FetchRequest>,
    page_size: u32,
    default_query: String,
}

impl QueryController<MemoryStore> {
    pub fn new(page_size: u32, default_query: impl Into<String>) -> Self {
        Self::with_store(MemoryStore::new(), page_size, default_query)
    }
}

impl Default for QueryController<MemoryStore> {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, DEFAULT_QUERY)
    }
}

impl<S: Store> QueryController<S> {
    pub fn with_store(store: S, page_size: u32, default_query: impl Into<String>) -> Self {
        Self {
            store,
            search_term: String::new(),
            active_query: None,
            sort: SortState::default(),
            status: FetchStatus::default(),
            in_flight: None,
            page_size: page_size.max(1),
            default_query: default_query.into(),
        }
    }

    /// Record typed text. Nothing is fetched until the text is submitted.
    pub fn change_search_term(&mut self, text: impl Into<String>) {
        self.search_term = text.into();
    }

    /// Make `text` the active query.
    ///
    /// Returns a page-0 request on a cache miss. A query already in the
    /// cache is shown from memory and never refetched. A miss submitted
    /// while another request is in flight is issued by [`complete`](Self::complete).
    pub fn submit_search(&mut self, text: &str) -> Option<FetchRequest> {
        let query = self.query_key(text);
        self.active_query = Some(query.clone());

        if self.store.contains(&query) {
            tracing::debug!("Cache hit for {:?}", query);
            return None;
        }
        if self.status.loading {
            tracing::debug!("Deferring {:?} until the in-flight request completes", query);
            return None;
        }
        self.begin(query, 0)
    }

    /// Submit whatever has been typed so far.
    pub fn submit_current(&mut self) -> Option<FetchRequest> {
        let text = self.search_term.clone();
        self.submit_search(&text)
    }

    /// Request the page after the last one merged for the active query.
    ///
    /// Ignored while a request is in flight.
    pub fn request_more(&mut self) -> Result<Option<FetchRequest>> {
        let query = self.active_query.clone().unwrap_or_default();
        let next = self
            .store
            .get(&query)
            .map(|set| set.next_page())
            .ok_or_else(|| SiftError::UnknownKey(query.clone()))?;

        if self.status.loading {
            tracing::debug!("Ignoring request for page {} of {:?}: busy", next, query);
            return Ok(None);
        }
        Ok(self.begin(query, next))
    }

    /// Remove an item from the active query's results only.
    pub fn dismiss(&mut self, id: &str) -> Result<()> {
        let query = self
            .active_query
            .as_deref()
            .ok_or_else(|| SiftError::UnknownKey(String::new()))?;
        self.store.remove_item(query, id)?;
        tracing::debug!("Dismissed {} from {:?}", id, query);
        Ok(())
    }

    pub fn on_sort(&mut self, key: SortKey) -> SortState {
        self.sort = sort::on_sort(key, self.sort);
        self.sort
    }

    /// Apply the outcome of a request returned earlier.
    ///
    /// Pages are merged under the query they were fetched for, even if the
    /// active query has changed since. A failure is recorded in the status
    /// and leaves the cache untouched. Returns the next request to run when
    /// a query was submitted while this one was in flight.
    pub fn complete(&mut self, request: FetchRequest, result: Result<Page>) -> Option<FetchRequest> {
        if self.in_flight.as_ref() != Some(&request) {
            tracing::warn!(
                "Completing page {} of {:?} which was not in flight",
                request.page,
                request.query
            );
        }
        self.in_flight = None;
        self.status.loading = false;

        match result {
            Ok(page) => {
                let set = self.store.merge_page(&request.query, page);
                tracing::info!(
                    "{:?} now holds {} items through page {}",
                    request.query,
                    set.len(),
                    set.last_page()
                );
            }
            Err(e) => {
                tracing::warn!(
                    "Fetching page {} of {:?} failed: {}",
                    request.page,
                    request.query,
                    e
                );
                self.status.error = Some(Arc::new(e));
            }
        }

        let pending = self
            .active_query
            .as_ref()
            .filter(|active| **active != request.query && !self.store.contains(active))
            .cloned()?;
        self.begin(pending, 0)
    }

    pub fn view(&self, options: ViewOptions) -> ViewState {
        view::project(self, options)
    }

    pub fn phase(&self) -> FetchPhase {
        if self.status.loading {
            FetchPhase::Fetching
        } else if self.status.error.is_some() {
            FetchPhase::Errored
        } else {
            FetchPhase::Idle
        }
    }

    pub fn status(&self) -> &FetchStatus {
        &self.status
    }

    pub fn in_flight(&self) -> Option<&FetchRequest> {
        self.in_flight.as_ref()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn active_query(&self) -> Option<&str> {
        self.active_query.as_deref()
    }

    pub fn sort_state(&self) -> SortState {
        self.sort
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    fn query_key(&self, text: &str) -> String {
        if text.trim().is_empty() {
            self.default_query.clone()
        } else {
            text.to_string()
        }
    }

    fn begin(&mut self, query: String, page: u32) -> Option<FetchRequest> {
        let request = FetchRequest {
            query,
            page,
            page_size: self.page_size,
        };
        tracing::debug!("Fetching page {} of {:?}", request.page, request.query);
        self.status.loading = true;
        self.status.error = None;
        self.in_flight = Some(request.clone());
        Some(request)
    }
}
