//! Document exporters
//!
//! Write paginated documents to their final destination.

use std::path::PathBuf;

use tracing::{info, instrument};

use crate::error::{PrintError, PrintResult};
use crate::page::Page;

/// Separator written between pages (form feed)
const PAGE_BREAK: &str = "\x0C";

/// Trait for document exporters
#[allow(async_fn_in_trait)]
pub trait DocumentExporter {
    /// Export pages under the given file stem, returning the written path
    async fn export(&self, file_stem: &str, pages: &[Page]) -> PrintResult<PathBuf>;
}

/// Replace characters that are not allowed in file names
///
/// Path separators, `: * ? " < > |` and control characters become `_`.
/// An empty result becomes `"document"`.
pub fn sanitize_stem(stem: &str) -> String {
    let cleaned: String = stem
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if cleaned.is_empty() || cleaned.chars().all(|c| c == '.') {
        "document".to_string()
    } else {
        cleaned
    }
}

/// Plain-text exporter
///
/// Writes `<dir>/<stem>.txt` with a form feed between pages.
#[derive(Debug, Clone)]
pub struct TextFileExporter {
    dir: PathBuf,
}

impl TextFileExporter {
    /// Create an exporter writing into `dir` (created on first export)
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path a given stem would be written to
    pub fn target_path(&self, file_stem: &str) -> PathBuf {
        self.dir.join(format!("{}.txt", sanitize_stem(file_stem)))
    }

    fn encode(pages: &[Page]) -> String {
        let mut out = pages
            .iter()
            .map(Page::render)
            .collect::<Vec<_>>()
            .join(&format!("\n{}", PAGE_BREAK));
        out.push('\n');
        out
    }
}

impl DocumentExporter for TextFileExporter {
    #[instrument(skip(self, pages), fields(dir = %self.dir.display(), pages = pages.len()))]
    async fn export(&self, file_stem: &str, pages: &[Page]) -> PrintResult<PathBuf> {
        if pages.is_empty() {
            return Err(PrintError::EmptyDocument);
        }

        tokio::fs::create_dir_all(&self.dir).await?;
        let path = self.target_path(file_stem);
        tokio::fs::write(&path, Self::encode(pages)).await?;

        info!(path = %path.display(), "Document exported");
        Ok(path)
    }
}
