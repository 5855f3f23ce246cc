use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single search hit. Identity is `id`; items are never edited after
/// they are received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub title: String,
    pub author: String,
    pub url: Option<String>,
    pub comment_count: u32,
    pub score: u32,
    pub created_at: Option<DateTime<Utc>>,
}

impl Item {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: String::new(),
            url: None,
            comment_count: 0,
            score: 0,
            created_at: None,
        }
    }

    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            "(Untitled)"
        } else {
            &self.title
        }
    }

    /// Link to open: the story URL, or the discussion page for text posts.
    pub fn link(&self) -> String {
        match &self.url {
            Some(url) if !url.is_empty() => url.clone(),
            _ => format!("https://news.ycombinator.com/item?id={}", self.id),
        }
    }

    /// Case-insensitive substring match on the title.
    pub fn title_matches(&self, pattern: &str) -> bool {
        self.title
            .to_lowercase()
            .contains(&pattern.to_lowercase())
    }
}
