use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::data_models::Source;

const SEARCH_TIMEOUT: Duration = Duration::from_secs(25);

/// Domains considered authoritative for travel facts. Sent to the provider
/// as an include-list when a caller asks for official sources only.
const OFFICIAL_DOMAINS: [&str; 7] = [
    "*.gov",
    "*.edu",
    "lonelyplanet.com",
    "visitbritain.com",
    "visitscotland.com",
    "scotrail.co.uk",
    "rome2rio.com",
];

/// Tavily search request body. The api key travels in the body, not a header.
#[derive(Serialize)]
struct TavilyRequest<'a> {
    api_key: &'a str,
    query: &'a str,
    search_depth: &'a str,
    max_results: u32,
    include_answer: bool,
    include_raw_content: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    time_range: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    include_domains: Option<Vec<&'a str>>,
}

#[derive(Deserialize)]
struct TavilyResponse {
    #[serde(default)]
    results: Vec<TavilyResult>,
}

#[derive(Deserialize)]
struct TavilyResult {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    url: String,
    #[serde(default)]
    snippet: Option<String>,
    #[serde(default)]
    published_date: Option<String>,
}

/// Client for the Tavily web-search API.
pub struct SearchClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl SearchClient {
    pub fn new(api_key: &str) -> SearchClient {
        Self::with_base_url(api_key, "https://api.tavily.com")
    }

    pub fn with_base_url(api_key: &str, base_url: &str) -> SearchClient {
        SearchClient {
            client: reqwest::Client::new(),
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Run one search and normalize the provider's results into `Source`
    /// records with dense 1-based ids in provider order.
    ///
    /// `recent_only` restricts results to roughly the past year;
    /// `official_only` restricts them to the curated authoritative domains.
    /// Any non-2xx status or transport failure fails the whole call.
    pub async fn search(
        &self,
        query: &str,
        max_results: u32,
        recent_only: bool,
        official_only: bool,
    ) -> Result<Vec<Source>> {
        let request = TavilyRequest {
            api_key: &self.api_key,
            query,
            search_depth: "advanced",
            max_results,
            include_answer: false,
            include_raw_content: false,
            time_range: recent_only.then_some("year"),
            include_domains: official_only.then(|| OFFICIAL_DOMAINS.to_vec()),
        };

        let response = self
            .client
            .post(format!("{}/search", self.base_url))
            .timeout(SEARCH_TIMEOUT)
            .json(&request)
            .send()
            .await
            .context("Failed to send search request")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Search API returned {status}: {body}");
        }

        let data: TavilyResponse = response
            .json()
            .await
            .context("Failed to parse search response")?;

        Ok(normalize_results(data.results))
    }
}

/// Provider results in the order received become sources with ids `1..=N`.
/// Missing titles fall back to "Untitled", missing snippets to empty text.
fn normalize_results(results: Vec<TavilyResult>) -> Vec<Source> {
    results
        .into_iter()
        .enumerate()
        .map(|(i, r)| {
            let title = r
                .title
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| "Untitled".to_string());
            Source::new(
                i as u32 + 1,
                title,
                r.url,
                r.snippet.unwrap_or_default(),
                r.published_date,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_body_with_filters() {
        let request = TavilyRequest {
            api_key: "key",
            query: "skye in june",
            search_depth: "advanced",
            max_results: 6,
            include_answer: false,
            include_raw_content: false,
            time_range: Some("year"),
            include_domains: Some(OFFICIAL_DOMAINS.to_vec()),
        };
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["search_depth"], "advanced");
        assert_eq!(body["include_answer"], json!(false));
        assert_eq!(body["include_raw_content"], json!(false));
        assert_eq!(body["time_range"], "year");
        assert_eq!(body["include_domains"][0], "*.gov");
        assert_eq!(
            body["include_domains"].as_array().unwrap().len(),
            OFFICIAL_DOMAINS.len()
        );
    }

    #[test]
    fn test_request_body_without_filters() {
        let request = TavilyRequest {
            api_key: "key",
            query: "skye in june",
            search_depth: "advanced",
            max_results: 8,
            include_answer: false,
            include_raw_content: false,
            time_range: None,
            include_domains: None,
        };
        let body = serde_json::to_value(&request).unwrap();
        assert!(body.get("time_range").is_none());
        assert!(body.get("include_domains").is_none());
    }

    #[test]
    fn test_normalize_assigns_dense_one_based_ids() {
        let json = r#"{
            "results": [
                {"title": "A", "url": "https://a.example", "snippet": "one"},
                {"title": "B", "url": "https://b.example", "snippet": "two"},
                {"title": "C", "url": "https://c.example", "snippet": "three"}
            ]
        }"#;
        let parsed: TavilyResponse = serde_json::from_str(json).unwrap();
        let sources = normalize_results(parsed.results);
        let ids: Vec<u32> = sources.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(sources[0].title, "A");
        assert_eq!(sources[2].url, "https://c.example");
    }

    #[test]
    fn test_normalize_empty_results() {
        let parsed: TavilyResponse = serde_json::from_str(r#"{"results": []}"#).unwrap();
        assert!(normalize_results(parsed.results).is_empty());
    }

    #[test]
    fn test_normalize_defaults_missing_fields() {
        let json = r#"{
            "results": [
                {"url": "https://no-title.example"},
                {"title": "", "url": "https://empty-title.example", "snippet": null},
                {"title": "Dated", "url": "https://d.example", "published_date": "2025-05-01"}
            ]
        }"#;
        let parsed: TavilyResponse = serde_json::from_str(json).unwrap();
        let sources = normalize_results(parsed.results);
        assert_eq!(sources[0].title, "Untitled");
        assert_eq!(sources[0].snippet, "");
        assert!(sources[0].published_date.is_none());
        assert_eq!(sources[1].title, "Untitled");
        assert_eq!(sources[1].snippet, "");
        assert_eq!(sources[2].published_date.as_deref(), Some("2025-05-01"));
    }
}
