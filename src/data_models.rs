use serde::{Deserialize, Serialize};

/// One normalized web search result used to ground an answer.
///
/// Ids are dense, 1-based, and assigned in provider order. They are only
/// meaningful within the response they came back with; nothing persists them.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Source {
    pub id: u32,
    pub title: String,
    pub url: String,
    pub snippet: String,
    pub published_date: Option<String>,
}

impl Source {
    pub fn new(
        id: u32,
        title: String,
        url: String,
        snippet: String,
        published_date: Option<String>,
    ) -> Source {
        Source {
            id,
            title,
            url,
            snippet,
            published_date,
        }
    }
}
