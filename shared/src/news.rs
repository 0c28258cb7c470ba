//! News wire types
//!
//! Read-only announcement entries from the `tables/news` collection.
//! Fetched once on page load, rendered into at most a handful of slots,
//! never cached locally.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A single announcement entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    /// Headline
    pub title: String,
    /// Body text
    pub content: String,
    /// Explicit publication date, when the editor set one (YYYY-MM-DD)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    /// Record creation timestamp, epoch milliseconds
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

impl NewsItem {
    /// Date shown next to the entry: the explicit publication date when
    /// present, otherwise the creation timestamp, as `YYYY.MM.DD`.
    pub fn display_date(&self) -> String {
        let date = self.date.unwrap_or_else(|| self.created_at.date_naive());
        date.format("%Y.%m.%d").to_string()
    }
}
