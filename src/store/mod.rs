pub mod memory;
pub mod result_set;

use crate::app::Result;
use crate::domain::Page;

pub use memory::MemoryStore;
pub use result_set::ResultSet;

/// Per-query result cache.
///
/// Result sets are created by the first merged page for a query and are
/// never dropped; they only shrink through [`Store::remove_item`].
pub trait Store {
    /// Merge a fetched page into the result set for `query`, creating it if
    /// needed. Merging the same page twice adds nothing the second time.
    fn merge_page(&mut self, query: &str, page: Page) -> &ResultSet;

    /// Remove one item from the result set for `query`.
    ///
    /// Fails with [`SiftError::UnknownKey`](crate::app::SiftError::UnknownKey)
    /// when `query` has never been fetched.
    fn remove_item(&mut self, query: &str, id: &str) -> Result<&ResultSet>;

    fn get(&self, query: &str) -> Option<&ResultSet>;

    fn contains(&self, query: &str) -> bool {
        self.get(query).is_some()
    }
}
