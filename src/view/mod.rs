//! Read-only snapshot of a session for front ends.

use std::sync::Arc;

use crate::app::SiftError;
use crate::controller::QueryController;
use crate::domain::Item;
use crate::sort::{self, SortState};
use crate::store::Store;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewOptions {
    /// Narrow the visible items to titles containing the typed text.
    pub live_filter: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub items: Vec<Item>,
    pub current_page: u32,
    pub loading: bool,
    pub error: Option<Arc<SiftError>>,
    pub active_query: Option<String>,
    pub search_term: String,
    pub sort: SortState,
    pub total_hits: Option<u64>,
    pub has_more: bool,
}

impl ViewState {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

pub fn project<S: Store>(controller: &QueryController<S>, options: ViewOptions) -> ViewState {
    let result_set = controller
        .active_query()
        .and_then(|query| controller.store().get(query));
    let status = controller.status();
    let sort = controller.sort_state();
    let search_term = controller.search_term();

    let items = match result_set {
        Some(set) if options.live_filter && !search_term.is_empty() => {
            let matching: Vec<Item> = set
                .items()
                .iter()
                .filter(|item| item.title_matches(search_term))
                .cloned()
                .collect();
            sort::apply(sort, &matching)
        }
        Some(set) => sort::apply(sort, set.items()),
        None => Vec::new(),
    };

    ViewState {
        items,
        current_page: result_set.map(|set| set.last_page()).unwrap_or(0),
        loading: status.loading,
        error: status.error.clone(),
        active_query: controller.active_query().map(String::from),
        search_term: search_term.to_string(),
        sort,
        total_hits: result_set.and_then(|set| set.total_hits()),
        has_more: result_set.map(|set| set.has_more()).unwrap_or(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Page;
    use crate::sort::SortKey;

    fn story(id: &str, title: &str, points: u32) -> Item {
        let mut item = Item::new(id, title);
        item.score = points;
        item
    }

    fn controller_with(query: &str, items: Vec<Item>) -> QueryController {
        let mut controller = QueryController::default();
        let request = controller.submit_search(query).unwrap();
        controller.complete(request, Ok(Page::new(0, items)));
        controller
    }

    #[test]
    fn test_empty_view() {
        let controller = QueryController::default();
        let view = controller.view(ViewOptions::default());

        assert!(view.is_empty());
        assert_eq!(view.current_page, 0);
        assert!(!view.loading);
        assert!(view.error.is_none());
        assert!(!view.has_more);
    }

    #[test]
    fn test_view_while_loading() {
        let mut controller = QueryController::default();
        controller.submit_search("rust");
        let view = controller.view(ViewOptions::default());

        assert!(view.loading);
        assert!(view.is_empty());
        assert_eq!(view.active_query.as_deref(), Some("rust"));
    }

    #[test]
    fn test_view_applies_sort_without_touching_cache() {
        let mut controller = controller_with(
            "redux",
            vec![story("1", "b", 1), story("2", "a", 9), story("3", "c", 5)],
        );
        controller.on_sort(SortKey::Points);

        let view = controller.view(ViewOptions::default());
        let ids: Vec<&str> = view.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3", "1"]);

        let cached: Vec<&str> = controller
            .store()
            .get("redux")
            .unwrap()
            .items()
            .iter()
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(cached, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_view_reports_current_page() {
        let mut controller = controller_with("redux", vec![story("1", "a", 0)]);
        let request = controller.request_more().unwrap().unwrap();
        controller.complete(request, Ok(Page::new(1, vec![story("2", "b", 0)])));

        let view = controller.view(ViewOptions::default());
        assert_eq!(view.current_page, 1);
        assert_eq!(view.items.len(), 2);
        assert!(view.has_more);
    }

    #[test]
    fn test_view_carries_error() {
        let mut controller = controller_with("redux", vec![story("1", "a", 0)]);
        let request = controller.request_more().unwrap().unwrap();
        controller.complete(request, Err(SiftError::Transport("timeout".into())));

        let view = controller.view(ViewOptions::default());
        assert!(!view.loading);
        assert!(matches!(view.error.as_deref(), Some(SiftError::Transport(_))));
        assert_eq!(view.items.len(), 1);
    }

    #[test]
    fn test_live_filter() {
        let mut controller = controller_with(
            "js",
            vec![story("1", "Redux", 0), story("2", "React", 0), story("3", "redux-saga", 0)],
        );
        controller.change_search_term("REDUX");

        let filtered = controller.view(ViewOptions { live_filter: true });
        let ids: Vec<&str> = filtered.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);

        let unfiltered = controller.view(ViewOptions::default());
        assert_eq!(unfiltered.items.len(), 3);
    }
}
