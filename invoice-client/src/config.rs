//! Client configuration

use std::time::Duration;

/// Product feed used when nothing else is configured
pub const DEFAULT_FEED_URL: &str = "https://cdn0.it4profit.com/s3/cms/feeds/google_55_128_ru.xml";

/// Catalog client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// URL of the XML product feed
    pub feed_url: String,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
}

impl ClientConfig {
    pub fn new(feed_url: impl Into<String>) -> Self {
        Self {
            feed_url: feed_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_string(),
            timeout_ms: 10_000,
        }
    }
}
