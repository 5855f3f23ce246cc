//! Sort keys and the orderings they select.
//!
//! Sorting is applied when the view is derived; cached result sets keep
//! their merge order.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::Item;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    None,
    Title,
    Author,
    Comments,
    Points,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::None,
        SortKey::Title,
        SortKey::Author,
        SortKey::Comments,
        SortKey::Points,
    ];

    /// Comparator for this key, or `None` when the merge order is kept.
    ///
    /// Text keys sort ascending by byte order (case-sensitive), numeric
    /// keys descending.
    pub fn comparator(self) -> Option<fn(&Item, &Item) -> Ordering> {
        match self {
            SortKey::None => None,
            SortKey::Title => Some(by_title),
            SortKey::Author => Some(by_author),
            SortKey::Comments => Some(by_comments),
            SortKey::Points => Some(by_points),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::None => "none",
            SortKey::Title => "title",
            SortKey::Author => "author",
            SortKey::Comments => "comments",
            SortKey::Points => "points",
        }
    }
}

fn by_title(a: &Item, b: &Item) -> Ordering {
    a.title.cmp(&b.title)
}

fn by_author(a: &Item, b: &Item) -> Ordering {
    a.author.cmp(&b.author)
}

fn by_comments(a: &Item, b: &Item) -> Ordering {
    b.comment_count.cmp(&a.comment_count)
}

fn by_points(a: &Item, b: &Item) -> Ordering {
    b.score.cmp(&a.score)
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown sort key: {}", s))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub key: SortKey,
    pub reverse: bool,
}

impl SortState {
    pub fn new(key: SortKey, reverse: bool) -> Self {
        Self { key, reverse }
    }
}

/// Order `items` according to `state`.
///
/// The sort is stable. With `reverse` set, the sorted output is reversed
/// as a whole. `SortKey::None` keeps the input order and ignores `reverse`.
pub fn apply(state: SortState, items: &[Item]) -> Vec<Item> {
    let mut sorted = items.to_vec();
    if let Some(compare) = state.key.comparator() {
        sorted.sort_by(compare);
        if state.reverse {
            sorted.reverse();
        }
    }
    sorted
}

/// State after the user selects `requested`.
///
/// Selecting the current key again flips `reverse`; selecting another key
/// starts ascending. `None` is never reversed.
pub fn on_sort(requested: SortKey, current: SortState) -> SortState {
    if requested == SortKey::None {
        return SortState::default();
    }
    SortState {
        key: requested,
        reverse: current.key == requested && !current.reverse,
    }
}
