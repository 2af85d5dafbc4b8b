//! Product catalog client
//!
//! Turns a free-text article id into at most one [`shared::LineItem`]
//! candidate. The HTTP implementation reads a Google-merchant style XML feed.

pub mod config;
pub mod error;
pub mod feed;
pub mod http;
pub mod lookup;

pub use config::{ClientConfig, DEFAULT_FEED_URL};
pub use error::{ClientError, ClientResult};
pub use feed::{FeedEntry, find_entry, parse_feed};
pub use http::HttpCatalog;
pub use lookup::{InMemoryCatalog, ProductLookup};
