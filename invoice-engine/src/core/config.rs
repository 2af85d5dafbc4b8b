use std::path::PathBuf;

use invoice_client::{ClientConfig, DEFAULT_FEED_URL};
use shared::models::{DEFAULT_DUE_IN_DAYS, MAX_DUE_IN_DAYS};

/// Invoice desk configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | ./invoice-desk | working dir (exports, logs) |
/// | CATALOG_FEED_URL | it4profit Google feed | product feed URL |
/// | CATALOG_TIMEOUT_MS | 10000 | catalog request timeout (ms) |
/// | DUE_IN_DAYS | 30 | payment term for new invoices, at most 36500 |
/// | LOG_LEVEL | info | tracing level |
/// | ENVIRONMENT | development | development / production |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/tmp/desk DUE_IN_DAYS=14 cargo run --bin invoice-desk
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory, holds `exports/` and `logs/`
    pub work_dir: PathBuf,
    /// Product feed URL
    pub catalog_feed_url: String,
    /// Catalog request timeout (ms)
    pub catalog_timeout_ms: u64,
    /// Days between issue date and due date for new invoices
    pub due_in_days: u64,
    /// Log level: trace | debug | info | warn | error
    pub log_level: String,
    /// Runtime environment: development | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset, unparsable or out-of-range values fall back to their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            work_dir: get("WORK_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./invoice-desk")),
            catalog_feed_url: get("CATALOG_FEED_URL").unwrap_or_else(|| DEFAULT_FEED_URL.into()),
            catalog_timeout_ms: get("CATALOG_TIMEOUT_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(10_000),
            due_in_days: get("DUE_IN_DAYS")
                .and_then(|v| v.parse().ok())
                .filter(|days| *days <= MAX_DUE_IN_DAYS)
                .unwrap_or(DEFAULT_DUE_IN_DAYS),
            log_level: get("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            environment: get("ENVIRONMENT").unwrap_or_else(|| "development".into()),
        }
    }

    /// Directory exported documents are written to
    pub fn exports_dir(&self) -> PathBuf {
        self.work_dir.join("exports")
    }

    /// Directory log files are written to
    pub fn logs_dir(&self) -> PathBuf {
        self.work_dir.join("logs")
    }

    /// Catalog client settings
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.catalog_feed_url.clone()).with_timeout_ms(self.catalog_timeout_ms)
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
