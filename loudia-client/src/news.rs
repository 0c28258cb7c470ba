//! Front-page news feed
//!
//! One fetch per page load, no retry, no polling. On any failure the
//! panel keeps the static entries it was rendered with; the visitor
//! never sees a news error.

use crate::{ClientResult, HttpClient};
use shared::{CollectionResponse, NewsItem};
use std::sync::Arc;

/// Path of the news collection resource
pub const NEWS_PATH: &str = "tables/news";

/// Render target for news entries (the news grid).
pub trait NewsPanel {
    /// Drop the pre-rendered static entries
    fn clear(&mut self);

    /// Append one entry: formatted date, title, content
    fn push(&mut self, display_date: &str, title: &str, content: &str);
}

/// Loads the most recent news entries into a panel.
pub struct NewsLoader<H> {
    http: Arc<H>,
    limit: u32,
}

impl<H: HttpClient> NewsLoader<H> {
    pub fn new(http: Arc<H>, limit: u32) -> Self {
        Self { http, limit }
    }

    /// Fetch the newest entries and render them in received order.
    ///
    /// With at least one entry the panel is cleared first; otherwise it
    /// is left untouched and the failure is only logged. Returns the
    /// number of entries rendered.
    pub async fn load(&self, panel: &mut impl NewsPanel) -> usize {
        match self.fetch().await {
            Ok(items) if !items.is_empty() => {
                panel.clear();
                for item in &items {
                    panel.push(&item.display_date(), &item.title, &item.content);
                }
                tracing::debug!(count = items.len(), "news entries rendered");
                items.len()
            }
            Ok(_) => {
                tracing::debug!("news feed empty, keeping static entries");
                0
            }
            Err(err) => {
                tracing::warn!(error = %err, "news load failed, keeping static entries");
                0
            }
        }
    }

    /// One read request: the newest `limit` entries, newest first.
    async fn fetch(&self) -> ClientResult<Vec<NewsItem>> {
        let path = format!("{}?page=1&limit={}&sort=-created_at", NEWS_PATH, self.limit);
        let response: CollectionResponse<NewsItem> = self.http.get(&path).await?;
        Ok(response.data)
    }
}
