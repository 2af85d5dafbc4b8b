//! Fixed-size pages

use crate::error::{PrintError, PrintResult};
use crate::text::pad_to_width;

/// Lines reserved at the bottom of each page (spacer + footer)
const FOOTER_LINES: usize = 2;

/// Page geometry in character cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageFormat {
    pub name: &'static str,
    /// Columns per line
    pub width: usize,
    /// Lines per page, footer included
    pub height: usize,
}

impl PageFormat {
    /// A4 portrait at roughly 10 cpi / 6 lpi
    pub const A4: PageFormat = PageFormat {
        name: "a4",
        width: 80,
        height: 64,
    };

    /// Lines available for content on each page
    pub fn body_height(&self) -> usize {
        self.height.saturating_sub(FOOTER_LINES)
    }
}

impl Default for PageFormat {
    fn default() -> Self {
        Self::A4
    }
}

/// One rendered page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// 1-based page number
    pub number: usize,
    pub total: usize,
    /// Exactly `format.height` lines, footer included
    pub lines: Vec<String>,
}

impl Page {
    /// Page as text, one line per row
    pub fn render(&self) -> String {
        self.lines.join("\n")
    }
}

/// Split document lines into pages of the given format
///
/// Every page is filled up to the body height and ends with a right-aligned
/// `Page i/n` footer. An empty document yields no pages.
pub fn paginate(lines: Vec<String>, format: PageFormat) -> PrintResult<Vec<Page>> {
    let body = format.body_height();
    if body == 0 || format.width == 0 {
        return Err(PrintError::InvalidConfig(format!(
            "page format '{}' is too small ({}x{})",
            format.name, format.width, format.height
        )));
    }
    if lines.is_empty() {
        return Ok(Vec::new());
    }

    let total = lines.len().div_ceil(body);
    let pages = lines
        .chunks(body)
        .enumerate()
        .map(|(i, chunk)| {
            let number = i + 1;
            let mut page_lines: Vec<String> = chunk.to_vec();
            page_lines.resize(body, String::new());
            page_lines.push(String::new());
            let footer = format!("Page {}/{}", number, total);
            page_lines.push(pad_to_width(&footer, format.width, true));
            Page {
                number,
                total,
                lines: page_lines,
            }
        })
        .collect::<Vec<_>>();

    tracing::debug!(pages = pages.len(), format = format.name, "Document paginated");
    Ok(pages)
}
