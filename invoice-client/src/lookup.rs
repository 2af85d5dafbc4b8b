//! Product lookup abstraction

use async_trait::async_trait;
use shared::LineItem;
use std::collections::HashMap;

use crate::error::ClientResult;

/// Source of line item candidates
///
/// - `Ok(Some(item))`: one candidate, quantity 1, already validated
/// - `Ok(None)`: the article id is unknown
/// - `Err(_)`: the lookup itself failed
#[async_trait]
pub trait ProductLookup: Send + Sync {
    async fn lookup(&self, article_id: &str) -> ClientResult<Option<LineItem>>;
}

/// Fixed catalog held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    items: HashMap<String, LineItem>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an item, keyed by its id
    pub fn with_item(mut self, item: LineItem) -> Self {
        self.items.insert(item.id.clone(), item);
        self
    }
}

#[async_trait]
impl ProductLookup for InMemoryCatalog {
    async fn lookup(&self, article_id: &str) -> ClientResult<Option<LineItem>> {
        Ok(self
            .items
            .get(article_id.trim())
            .map(|item| item.with_quantity(1)))
    }
}
