//! Google-merchant style product feed
//!
//! The feed is RSS where each `<item>` carries `g:`-namespaced fields:
//!
//! ```xml
//! <rss xmlns:g="http://base.google.com/ns/1.0" version="2.0">
//!   <channel>
//!     <item>
//!       <g:id>A-100</g:id>
//!       <g:title>Phone</g:title>
//!       <g:price>100.00 KZT</g:price>
//!       <g:brand>Acme</g:brand>
//!       <g:image_link>https://example.com/a.jpg</g:image_link>
//!     </item>
//!   </channel>
//! </rss>
//! ```
//!
//! Elements are matched by local name so both `g:title` and a plain `title`
//! inside an item are accepted. Atom `<entry>` elements are treated the same
//! as `<item>`.

use roxmltree::{Document, Node};
use serde::{Deserialize, Serialize};
use shared::{CandidateFields, LineItem};

use crate::error::ClientResult;

/// Raw feed entry, nothing validated yet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedEntry {
    pub id: String,
    pub title: String,
    pub price: String,
    pub brand: String,
    pub image_link: String,
}

impl FeedEntry {
    /// Convert into a validated line item with quantity 1
    pub fn into_line_item(self) -> ClientResult<LineItem> {
        let item = LineItem::candidate(CandidateFields {
            id: self.id,
            title: self.title,
            price: self.price,
            quantity: 1,
            brand: self.brand,
            image: self.image_link,
        })?;
        Ok(item)
    }
}

fn is_entry(node: &Node<'_, '_>) -> bool {
    node.is_element() && matches!(node.tag_name().name(), "item" | "entry")
}

fn child_text(entry: &Node<'_, '_>, local_name: &str) -> Option<String> {
    entry
        .children()
        .filter(|c| c.is_element() && c.tag_name().name() == local_name)
        .find_map(|c| c.text())
        .map(|t| t.trim().to_string())
}

fn read_entry(node: &Node<'_, '_>) -> FeedEntry {
    FeedEntry {
        id: child_text(node, "id").unwrap_or_default(),
        title: child_text(node, "title").unwrap_or_default(),
        price: child_text(node, "price").unwrap_or_default(),
        brand: child_text(node, "brand").unwrap_or_default(),
        image_link: child_text(node, "image_link").unwrap_or_default(),
    }
}

/// Parse every entry of a feed document
pub fn parse_feed(xml: &str) -> ClientResult<Vec<FeedEntry>> {
    let doc = Document::parse(xml)?;
    Ok(doc
        .descendants()
        .filter(is_entry)
        .map(|n| read_entry(&n))
        .collect())
}

/// Find the entry whose id equals `article_id` (after trimming)
///
/// Returns the first match; later duplicates are ignored.
pub fn find_entry(xml: &str, article_id: &str) -> ClientResult<Option<FeedEntry>> {
    let wanted = article_id.trim();
    if wanted.is_empty() {
        return Ok(None);
    }

    let doc = Document::parse(xml)?;
    Ok(doc
        .descendants()
        .filter(is_entry)
        .find(|n| child_text(n, "id").as_deref() == Some(wanted))
        .map(|n| read_entry(&n)))
}
