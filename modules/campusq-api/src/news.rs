// University RSS news service.
// Read-only, independent of the prediction path.

use std::time::Duration;

use tracing::info;

use campusq_common::{CampusqError, NewsItem};

const NEWS_LIMIT: usize = 3;

pub struct NewsService {
    client: reqwest::Client,
    feed_url: String,
}

impl NewsService {
    pub fn new(feed_url: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .expect("Failed to build RSS HTTP client");
        Self {
            client,
            feed_url: feed_url.to_string(),
        }
    }

    /// Fetch and parse the news feed, returning the newest few items.
    pub async fn latest(&self) -> Result<Vec<NewsItem>, CampusqError> {
        let resp = self
            .client
            .get(&self.feed_url)
            .header("User-Agent", "campusq-api/0.1")
            .send()
            .await
            .map_err(|e| CampusqError::Feed(format!("news feed fetch failed: {e}")))?;

        let bytes = resp
            .bytes()
            .await
            .map_err(|e| CampusqError::Feed(format!("failed to read news feed body: {e}")))?;

        let feed = feed_rs::parser::parse(&bytes[..])
            .map_err(|e| CampusqError::Feed(format!("failed to parse RSS/Atom feed: {e}")))?;

        let items = map_entries(feed.entries);

        info!(feed_url = %self.feed_url, items = items.len(), "news feed parsed");
        Ok(items)
    }
}

/// Map feed entries to NewsItems, keeping feed order. Entries without a
/// usable link are skipped; some feeds put the URL in the entry id instead
/// of a link element.
fn map_entries(entries: Vec<feed_rs::model::Entry>) -> Vec<NewsItem> {
    entries
        .into_iter()
        .filter_map(|entry| {
            let link = entry
                .links
                .first()
                .map(|l| l.href.clone())
                .or_else(|| entry.id.starts_with("http").then(|| entry.id.clone()))?;
            let title = entry.title.map(|t| t.content).unwrap_or_default();
            Some(NewsItem { title, link })
        })
        .take(NEWS_LIMIT)
        .collect()
}
