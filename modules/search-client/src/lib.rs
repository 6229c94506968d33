use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::info;

const CUSTOM_SEARCH_URL: &str = "https://www.googleapis.com/customsearch/v1";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// --- WebSearcher trait ---

#[async_trait]
pub trait WebSearcher: Send + Sync {
    async fn search(&self, query: &str, max_results: u32) -> Result<Vec<SearchResult>>;
}

#[derive(Debug, Clone)]
pub struct SearchResult {
    pub url: String,
    pub title: String,
    pub snippet: String,
}

// --- Google Custom Search ---

pub struct GoogleSearcher {
    api_key: String,
    engine_id: String,
    client: reqwest::Client,
}

#[derive(Debug, serde::Deserialize)]
struct CustomSearchResponse {
    #[serde(default)]
    items: Vec<CustomSearchItem>,
}

#[derive(Debug, serde::Deserialize)]
struct CustomSearchItem {
    #[serde(default)]
    link: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    snippet: String,
}

impl GoogleSearcher {
    pub fn new(api_key: &str, engine_id: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            engine_id: engine_id.to_string(),
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
        }
    }
}

#[async_trait]
impl WebSearcher for GoogleSearcher {
    async fn search(&self, query: &str, max_results: u32) -> Result<Vec<SearchResult>> {
        info!(query, max_results, "Custom Search request");

        let num = max_results.to_string();
        let resp = self
            .client
            .get(CUSTOM_SEARCH_URL)
            .query(&[
                ("q", query),
                ("key", self.api_key.as_str()),
                ("cx", self.engine_id.as_str()),
                ("num", num.as_str()),
            ])
            .send()
            .await
            .context("Custom Search API request failed")?;

        let data: CustomSearchResponse = resp
            .json()
            .await
            .context("Failed to parse Custom Search response")?;

        let results = collect_results(data, max_results as usize);

        info!(query, count = results.len(), "Custom Search complete");
        Ok(results)
    }
}

/// Map raw items to results, keeping the service's ranking order and
/// dropping entries whose link is not a parseable URL.
fn collect_results(data: CustomSearchResponse, max_results: usize) -> Vec<SearchResult> {
    data.items
        .into_iter()
        .filter(|item| url::Url::parse(&item.link).is_ok())
        .map(|item| SearchResult {
            url: item.link,
            title: item.title,
            snippet: item.snippet,
        })
        .take(max_results)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> CustomSearchResponse {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn missing_items_key_yields_empty() {
        let data = parse(r#"{"kind": "customsearch#search"}"#);
        assert!(collect_results(data, 3).is_empty());
    }

    #[test]
    fn ranking_order_is_preserved() {
        let data = parse(
            r#"{"items": [
                {"link": "https://a.example/1", "title": "first", "snippet": ""},
                {"link": "https://b.example/2", "title": "second", "snippet": ""},
                {"link": "https://c.example/3", "title": "third", "snippet": ""}
            ]}"#,
        );
        let results = collect_results(data, 3);
        let urls: Vec<&str> = results.iter().map(|r| r.url.as_str()).collect();
        assert_eq!(
            urls,
            vec![
                "https://a.example/1",
                "https://b.example/2",
                "https://c.example/3"
            ]
        );
    }

    #[test]
    fn malformed_links_are_dropped() {
        let data = parse(
            r#"{"items": [
                {"link": "not a url", "title": "bad", "snippet": ""},
                {"link": "https://ok.example/page", "title": "good", "snippet": "s"}
            ]}"#,
        );
        let results = collect_results(data, 3);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].url, "https://ok.example/page");
        assert_eq!(results[0].title, "good");
    }

    #[test]
    fn truncates_to_max_results() {
        let data = parse(
            r#"{"items": [
                {"link": "https://a.example/", "title": "", "snippet": ""},
                {"link": "https://b.example/", "title": "", "snippet": ""},
                {"link": "https://c.example/", "title": "", "snippet": ""},
                {"link": "https://d.example/", "title": "", "snippet": ""}
            ]}"#,
        );
        assert_eq!(collect_results(data, 3).len(), 3);
    }
}
