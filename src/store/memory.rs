use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::app::{Result, SiftError};
use crate::domain::Page;
use crate::store::{ResultSet, Store};

/// In-memory store living for one session.
#[derive(Debug, Default)]
pub struct MemoryStore {
    results: HashMap<String, ResultSet>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn queries(&self) -> impl Iterator<Item = &str> {
        self.results.keys().map(String::as_str)
    }
}

impl Store for MemoryStore {
    fn merge_page(&mut self, query: &str, page: Page) -> &ResultSet {
        let page_index = page.page_index;
        let fetched = page.items.len();

        match self.results.entry(query.to_string()) {
            Entry::Occupied(entry) => {
                let set = entry.into_mut();
                let added = set.absorb(page);
                tracing::debug!(
                    "Merged page {} of {:?}: {} new of {} fetched",
                    page_index,
                    query,
                    added,
                    fetched
                );
                set
            }
            Entry::Vacant(entry) => {
                tracing::debug!("Caching {:?} from page {}", query, page_index);
                entry.insert(ResultSet::from_page(page))
            }
        }
    }

    fn remove_item(&mut self, query: &str, id: &str) -> Result<&ResultSet> {
        let set = self
            .results
            .get_mut(query)
            .ok_or_else(|| SiftError::UnknownKey(query.to_string()))?;
        if !set.remove(id) {
            tracing::debug!("Item {} not present in {:?}", id, query);
        }
        Ok(set)
    }

    fn get(&self, query: &str) -> Option<&ResultSet> {
        self.results.get(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Item;

    fn page(index: u32, ids: &[&str]) -> Page {
        Page::new(index, ids.iter().map(|id| Item::new(*id, *id)).collect())
    }

    fn ids(set: &ResultSet) -> Vec<String> {
        set.items().iter().map(|i| i.id.clone()).collect()
    }

    #[test]
    fn test_merge_creates_result_set() {
        let mut store = MemoryStore::new();
        let set = store.merge_page("redux", page(0, &["r1", "r2"]));

        assert_eq!(ids(set), vec!["r1", "r2"]);
        assert_eq!(set.last_page(), 0);
        assert!(store.contains("redux"));
        assert!(!store.contains("react"));
    }

    #[test]
    fn test_merge_is_idempotent() {
        let mut store = MemoryStore::new();
        store.merge_page("redux", page(0, &["r1", "r2"]));
        let once = ids(store.get("redux").unwrap());

        store.merge_page("redux", page(0, &["r1", "r2"]));
        assert_eq!(ids(store.get("redux").unwrap()), once);
    }

    #[test]
    fn test_merge_is_monotonic() {
        let mut store = MemoryStore::new();
        let pages = [
            page(0, &["a", "b"]),
            page(1, &["b", "c"]),
            page(2, &["a", "c"]),
            page(3, &["d"]),
        ];

        let mut previous = 0;
        for p in pages {
            let len = store.merge_page("q", p).len();
            assert!(len >= previous);
            previous = len;
        }
        assert_eq!(ids(store.get("q").unwrap()), vec!["a", "b", "c", "d"]);
        assert_eq!(store.get("q").unwrap().last_page(), 3);
    }

    #[test]
    fn test_pages_then_dismiss() {
        let mut store = MemoryStore::new();
        store.merge_page("redux", page(0, &["r1", "r2"]));
        let set = store.merge_page("redux", page(1, &["r3"]));
        assert_eq!(ids(set), vec!["r1", "r2", "r3"]);
        assert_eq!(set.last_page(), 1);

        let set = store.remove_item("redux", "r1").unwrap();
        assert_eq!(ids(set), vec!["r2", "r3"]);
        assert_eq!(set.last_page(), 1);
    }

    #[test]
    fn test_queries_are_partitioned() {
        let mut store = MemoryStore::new();
        store.merge_page("react", page(0, &["x"]));
        store.merge_page("redux", page(0, &["x"]));
        store.remove_item("redux", "x").unwrap();

        assert_eq!(ids(store.get("react").unwrap()), vec!["x"]);
        assert!(store.get("redux").unwrap().is_empty());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_remove_unknown_key() {
        let mut store = MemoryStore::new();
        let err = store.remove_item("nothing", "a").unwrap_err();
        assert!(matches!(err, SiftError::UnknownKey(ref q) if q == "nothing"));
    }

    #[test]
    fn test_remove_missing_id_is_noop() {
        let mut store = MemoryStore::new();
        store.merge_page("q", page(0, &["a"]));
        let set = store.remove_item("q", "zzz").unwrap();
        assert_eq!(ids(set), vec!["a"]);
    }

    #[test]
    fn test_empty_result_set_survives() {
        let mut store = MemoryStore::new();
        store.merge_page("q", page(0, &["a"]));
        store.remove_item("q", "a").unwrap();
        assert!(store.contains("q"));
        assert!(store.get("q").unwrap().is_empty());
    }
}
