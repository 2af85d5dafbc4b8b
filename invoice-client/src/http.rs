//! HTTP catalog backed by a remote XML feed

use async_trait::async_trait;
use reqwest::Client;
use shared::LineItem;
use tracing::{debug, info, instrument};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::feed::find_entry;
use crate::lookup::ProductLookup;

/// Catalog that downloads the product feed on every lookup
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: Client,
    feed_url: String,
}

impl HttpCatalog {
    /// Create a new catalog from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        if config.feed_url.trim().is_empty() {
            return Err(ClientError::Config("feed URL is empty".to_string()));
        }

        let client = Client::builder().timeout(config.timeout()).build()?;

        Ok(Self {
            client,
            feed_url: config.feed_url.clone(),
        })
    }

    /// Download the raw feed body
    async fn fetch_feed(&self) -> ClientResult<String> {
        let response = self
            .client
            .get(&self.feed_url)
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;
        if body.trim().is_empty() {
            return Err(ClientError::InvalidResponse("empty feed body".to_string()));
        }
        Ok(body)
    }
}

#[async_trait]
impl ProductLookup for HttpCatalog {
    #[instrument(skip(self), fields(feed = %self.feed_url))]
    async fn lookup(&self, article_id: &str) -> ClientResult<Option<LineItem>> {
        if article_id.trim().is_empty() {
            return Ok(None);
        }

        let body = self.fetch_feed().await?;
        debug!(bytes = body.len(), "Feed downloaded");

        match find_entry(&body, article_id)? {
            Some(entry) => {
                let item = entry.into_line_item()?;
                info!(id = %item.id, title = %item.title, "Product found");
                Ok(Some(item))
            }
            None => {
                info!("Product not found in feed");
                Ok(None)
            }
        }
    }
}
