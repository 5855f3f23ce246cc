use std::sync::Arc;

use crate::app::Result;
use crate::controller::{FetchRequest, QueryController};
use crate::fetcher::Fetcher;
use crate::sort::{SortKey, SortState};
use crate::view::{ViewOptions, ViewState};

/// A controller wired to a transport, with each intent awaited to
/// completion.
///
/// Intents run one at a time, so a session never has two requests in
/// flight. Front ends that must stay responsive while fetching drive the
/// [`QueryController`] directly and run its requests on their own tasks.
pub struct Session {
    controller: QueryController,
    fetcher: Arc<dyn Fetcher>,
    view_options: ViewOptions,
}

impl Session {
    pub fn new(controller: QueryController, fetcher: Arc<dyn Fetcher>) -> Self {
        Self {
            controller,
            fetcher,
            view_options: ViewOptions::default(),
        }
    }

    pub fn with_view_options(mut self, options: ViewOptions) -> Self {
        self.view_options = options;
        self
    }

    pub fn change_search_term(&mut self, text: &str) {
        self.controller.change_search_term(text);
    }

    pub async fn submit_search(&mut self, text: &str) -> ViewState {
        let request = self.controller.submit_search(text);
        self.drive(request).await;
        self.view()
    }

    /// Fetch the next page of the active query.
    ///
    /// Fails with `UnknownKey` when the active query has no results yet.
    pub async fn request_more(&mut self) -> Result<ViewState> {
        let request = self.controller.request_more()?;
        self.drive(request).await;
        Ok(self.view())
    }

    pub fn dismiss(&mut self, id: &str) -> Result<ViewState> {
        self.controller.dismiss(id)?;
        Ok(self.view())
    }

    pub fn on_sort(&mut self, key: SortKey) -> SortState {
        self.controller.on_sort(key)
    }

    pub fn view(&self) -> ViewState {
        self.controller.view(self.view_options)
    }

    pub fn controller(&self) -> &QueryController {
        &self.controller
    }

    async fn drive(&mut self, mut request: Option<FetchRequest>) {
        while let Some(current) = request {
            let result = self.fetcher.fetch(&current).await;
            request = self.controller.complete(current, result);
        }
    }
}
