use ratatui::widgets::TableState;

use crate::app::Result;
use crate::controller::{FetchRequest, QueryController};
use crate::domain::{Item, Page};
use crate::sort::SortKey;
use crate::view::{ViewOptions, ViewState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

pub struct TuiApp {
    pub controller: QueryController,
    pub view: ViewState,
    pub view_options: ViewOptions,
    pub input_mode: InputMode,
    pub selected: usize,
    pub table_state: TableState,
    pub should_quit: bool,
    pub status_message: Option<String>,
}

impl TuiApp {
    pub fn new(controller: QueryController, view_options: ViewOptions) -> Self {
        let view = controller.view(view_options);
        let mut table_state = TableState::default();
        table_state.select(Some(0));

        Self {
            controller,
            view,
            view_options,
            input_mode: InputMode::Normal,
            selected: 0,
            table_state,
            should_quit: false,
            status_message: None,
        }
    }

    /// Re-derive the view after a controller mutation.
    pub fn refresh_view(&mut self) {
        self.view = self.controller.view(self.view_options);
        let max_index = self.view.items.len().saturating_sub(1);
        self.selected = self.selected.min(max_index);
        self.table_state.select(Some(self.selected));
    }

    /// The highlighted item, or `None` while the error panel hides the list.
    pub fn selected_item(&self) -> Option<&Item> {
        if self.view.error.is_some() {
            return None;
        }
        self.view.items.get(self.selected)
    }

    pub fn move_up(&mut self) {
        if self.view.error.is_some() {
            return;
        }
        if self.selected > 0 {
            self.selected -= 1;
            self.table_state.select(Some(self.selected));
        }
    }

    pub fn move_down(&mut self) {
        if self.view.error.is_some() {
            return;
        }
        if self.selected + 1 < self.view.items.len() {
            self.selected += 1;
            self.table_state.select(Some(self.selected));
        }
    }

    pub fn start_editing(&mut self) {
        self.input_mode = InputMode::Editing;
        self.clear_status();
    }

    pub fn cancel_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn push_char(&mut self, c: char) {
        let mut text = self.controller.search_term().to_string();
        text.push(c);
        self.controller.change_search_term(text);
        self.refresh_view();
    }

    pub fn pop_char(&mut self) {
        let mut text = self.controller.search_term().to_string();
        text.pop();
        self.controller.change_search_term(text);
        self.refresh_view();
    }

    /// Submit the typed text and leave edit mode.
    pub fn submit(&mut self) -> Option<FetchRequest> {
        self.input_mode = InputMode::Normal;
        let request = self.controller.submit_current();
        self.selected = 0;
        self.refresh_view();
        request
    }

    pub fn submit_query(&mut self, query: &str) -> Option<FetchRequest> {
        self.controller.change_search_term(query);
        self.submit()
    }

    pub fn load_more(&mut self) -> Option<FetchRequest> {
        let result = self.controller.request_more();
        let request = self.report(result)?;
        self.refresh_view();
        request
    }

    pub fn dismiss_selected(&mut self) {
        let Some(id) = self.selected_item().map(|item| item.id.clone()) else {
            return;
        };
        let result = self.controller.dismiss(&id);
        if self.report(result).is_some() {
            self.refresh_view();
        }
    }

    pub fn sort(&mut self, key: SortKey) {
        let state = self.controller.on_sort(key);
        self.selected = 0;
        self.refresh_view();
        self.set_status(format!(
            "Sorted by {}{}",
            state.key,
            if state.reverse { " (reversed)" } else { "" }
        ));
    }

    /// Apply a finished request; returns the follow-up request, if any.
    pub fn complete(&mut self, request: FetchRequest, result: Result<Page>) -> Option<FetchRequest> {
        let next = self.controller.complete(request, result);
        self.refresh_view();
        next
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Intents on a query with no results are logged and dropped.
    fn report<T>(&mut self, result: Result<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Ignoring intent: {}", e);
                self.set_status("Nothing loaded yet".to_string());
                None
            }
        }
    }
}
