use std::collections::HashSet;

use crate::domain::{Item, Page};

/// Accumulated results for one query.
///
/// Items keep first-seen order across merged pages and never repeat an id.
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    items: Vec<Item>,
    ids: HashSet<String>,
    last_page: u32,
    total_pages: Option<u32>,
    total_hits: Option<u64>,
}

impl ResultSet {
    pub fn from_page(page: Page) -> Self {
        let mut set = Self::default();
        set.absorb(page);
        set
    }

    /// Append the page's items that are not already present and advance
    /// `last_page`. Returns the number of items added.
    pub fn absorb(&mut self, page: Page) -> usize {
        let before = self.items.len();
        for item in page.items {
            if self.ids.insert(item.id.clone()) {
                self.items.push(item);
            }
        }
        self.last_page = page.page_index;
        if page.total_pages.is_some() {
            self.total_pages = page.total_pages;
        }
        if page.total_hits.is_some() {
            self.total_hits = page.total_hits;
        }
        self.items.len() - before
    }

    /// Remove the item with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        if !self.ids.remove(id) {
            return false;
        }
        self.items.retain(|item| item.id != id);
        true
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn last_page(&self) -> u32 {
        self.last_page
    }

    pub fn next_page(&self) -> u32 {
        self.last_page.saturating_add(1)
    }

    pub fn total_hits(&self) -> Option<u64> {
        self.total_hits
    }

    /// False only when the backend reported a page count and it is exhausted.
    pub fn has_more(&self) -> bool {
        if self.last_page == u32::MAX {
            return false;
        }
        self.total_pages
            .map(|total| self.next_page() < total)
            .unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(index: u32, ids: &[&str]) -> Page {
        Page::new(index, ids.iter().map(|id| Item::new(*id, *id)).collect())
    }

    fn ids(set: &ResultSet) -> Vec<&str> {
        set.items().iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_from_page_dedups_first_occurrence() {
        let mut first = Item::new("a", "first");
        first.score = 1;
        let mut dup = Item::new("a", "second");
        dup.score = 2;
        let set = ResultSet::from_page(Page::new(0, vec![first, Item::new("b", "b"), dup]));

        assert_eq!(ids(&set), vec!["a", "b"]);
        assert_eq!(set.items()[0].title, "first");
        assert_eq!(set.last_page(), 0);
    }

    #[test]
    fn test_absorb_skips_present_ids() {
        let mut set = ResultSet::from_page(page(0, &["a", "b"]));
        let added = set.absorb(page(1, &["b", "c"]));

        assert_eq!(added, 1);
        assert_eq!(ids(&set), vec!["a", "b", "c"]);
        assert_eq!(set.last_page(), 1);
    }

    #[test]
    fn test_absorb_does_not_refresh_content() {
        let mut set = ResultSet::from_page(page(0, &["a"]));
        let mut updated = Item::new("a", "edited");
        updated.score = 99;
        set.absorb(Page::new(1, vec![updated]));

        assert_eq!(set.items()[0].title, "a");
        assert_eq!(set.items()[0].score, 0);
    }

    #[test]
    fn test_remove_then_readd() {
        let mut set = ResultSet::from_page(page(0, &["a", "b"]));
        assert!(set.remove("a"));
        assert!(!set.remove("a"));
        assert!(!set.contains("a"));

        set.absorb(page(1, &["a"]));
        assert_eq!(ids(&set), vec!["b", "a"]);
    }

    #[test]
    fn test_has_more() {
        let mut set = ResultSet::from_page(page(0, &["a"]));
        assert!(set.has_more());

        let mut last = page(1, &["b"]);
        last.total_pages = Some(2);
        last.total_hits = Some(2);
        set.absorb(last);
        assert!(!set.has_more());
        assert_eq!(set.total_hits(), Some(2));
    }

    #[test]
    fn test_next_page_saturates_at_max_index() {
        let set = ResultSet::from_page(page(u32::MAX, &["a"]));
        assert_eq!(set.next_page(), u32::MAX);
        assert!(!set.has_more());
    }
}
