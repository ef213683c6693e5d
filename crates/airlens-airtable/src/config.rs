use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const AIRTABLE_API_BASE: &str = "https://api.airtable.com/v0";

/// Client settings for the Airtable REST API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AirtableConfig {
    /// API root, without trailing slash
    pub base_url: String,
    /// Transport timeout for each request
    pub timeout_secs: u64,
    /// Records per page; the API default applies when unset
    pub page_size: Option<u32>,
    /// Cap on pages per listing, counting the first page; unbounded when unset.
    /// Zero is rejected when the client is built.
    pub max_pages: Option<usize>,
}

impl Default for AirtableConfig {
    fn default() -> Self {
        Self {
            base_url: AIRTABLE_API_BASE.to_string(),
            timeout_secs: 30,
            page_size: None,
            max_pages: None,
        }
    }
}

impl AirtableConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// At least one page is always fetched, so `0` is raised to `1`
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = Some(max_pages.max(1));
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
