use chrono::{DateTime, Utc};
use html_escape::decode_html_entities;
use serde::Deserialize;

use crate::app::Result;
use crate::domain::{Item, Page};

/// Response body of the Algolia search endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchResponse {
    #[serde(default)]
    hits: Vec<Hit>,
    page: Option<u32>,
    nb_pages: Option<u32>,
    nb_hits: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct Hit {
    #[serde(rename = "objectID")]
    object_id: String,
    title: Option<String>,
    story_title: Option<String>,
    url: Option<String>,
    story_url: Option<String>,
    author: Option<String>,
    points: Option<u32>,
    num_comments: Option<u32>,
    created_at: Option<DateTime<Utc>>,
}

impl From<Hit> for Item {
    fn from(hit: Hit) -> Self {
        let title = hit
            .title
            .or(hit.story_title)
            .map(|t| decode_html_entities(&t).to_string())
            .unwrap_or_default();

        Item {
            id: hit.object_id,
            title,
            author: hit.author.unwrap_or_default(),
            url: hit.url.or(hit.story_url).filter(|u| !u.is_empty()),
            comment_count: hit.num_comments.unwrap_or(0),
            score: hit.points.unwrap_or(0),
            created_at: hit.created_at,
        }
    }
}

#[derive(Clone, Default)]
pub struct Normalizer;

impl Normalizer {
    pub fn new() -> Self {
        Self
    }

    /// Decode a search response into a [`Page`].
    ///
    /// `requested_page` is used when the body does not echo its page number.
    pub fn normalize(&self, body: &[u8], requested_page: u32) -> Result<Page> {
        let response: SearchResponse = serde_json::from_slice(body)?;

        Ok(Page {
            items: response.hits.into_iter().map(Item::from).collect(),
            page_index: response.page.unwrap_or(requested_page),
            total_pages: response.nb_pages,
            total_hits: response.nb_hits,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::SiftError;

    const SEARCH_SAMPLE: &str = r#"{
  "hits": [
    {
      "objectID": "11987286",
      "title": "Redux &amp; React: a practical guide",
      "url": "https://example.com/redux",
      "author": "dan",
      "points": 120,
      "num_comments": 42,
      "created_at": "2016-06-27T11:14:24.000Z",
      "_tags": ["story"]
    },
    {
      "objectID": "11987999",
      "title": "Ask HN: Redux or MobX?",
      "url": null,
      "author": "someone",
      "points": 7,
      "num_comments": null,
      "created_at": "2016-06-28T08:00:00.000Z"
    }
  ],
  "page": 2,
  "nbPages": 50,
  "nbHits": 1234,
  "hitsPerPage": 10,
  "query": "redux"
}"#;

    #[test]
    fn test_parse_hits() {
        let page = Normalizer::new()
            .normalize(SEARCH_SAMPLE.as_bytes(), 0)
            .unwrap();

        assert_eq!(page.page_index, 2);
        assert_eq!(page.total_pages, Some(50));
        assert_eq!(page.total_hits, Some(1234));
        assert_eq!(page.items.len(), 2);

        let first = &page.items[0];
        assert_eq!(first.id, "11987286");
        assert_eq!(first.title, "Redux & React: a practical guide");
        assert_eq!(first.url.as_deref(), Some("https://example.com/redux"));
        assert_eq!(first.author, "dan");
        assert_eq!(first.score, 120);
        assert_eq!(first.comment_count, 42);
        assert!(first.created_at.is_some());
    }

    #[test]
    fn test_null_fields_default() {
        let page = Normalizer::new()
            .normalize(SEARCH_SAMPLE.as_bytes(), 0)
            .unwrap();

        let second = &page.items[1];
        assert_eq!(second.url, None);
        assert_eq!(second.comment_count, 0);
        assert_eq!(second.score, 7);
    }

    #[test]
    fn test_comment_hit_uses_story_fields() {
        let body = r#"{"hits":[{"objectID":"5","title":null,"story_title":"Parent story","story_url":"https://example.com/p","author":"x"}]}"#;
        let page = Normalizer::new().normalize(body.as_bytes(), 3).unwrap();

        assert_eq!(page.page_index, 3);
        assert_eq!(page.total_pages, None);
        assert_eq!(page.items[0].title, "Parent story");
        assert_eq!(page.items[0].url.as_deref(), Some("https://example.com/p"));
    }

    #[test]
    fn test_empty_hits() {
        let page = Normalizer::new()
            .normalize(br#"{"hits":[],"page":0,"nbPages":0,"nbHits":0}"#, 0)
            .unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, Some(0));
    }

    #[test]
    fn test_invalid_body() {
        let err = Normalizer::new().normalize(b"<html>", 0).unwrap_err();
        assert!(matches!(err, SiftError::Decode(_)));
    }
}
