//! Line-based document builder
//!
//! Accumulates fixed-width text lines. Pagination happens afterwards in
//! [`crate::paginate`], so the builder never needs to know the page height.

use crate::text::{display_width, pad_to_width, wrap_to_width};

/// Horizontal alignment inside a line or column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// Table column definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub width: usize,
    pub align: Align,
}

impl Column {
    pub const fn left(width: usize) -> Self {
        Self {
            width,
            align: Align::Left,
        }
    }

    pub const fn right(width: usize) -> Self {
        Self {
            width,
            align: Align::Right,
        }
    }
}

/// Fixed-width text document builder
pub struct DocumentBuilder {
    lines: Vec<String>,
    width: usize,
}

impl DocumentBuilder {
    /// Create a new builder with the given line width in columns
    pub fn new(width: usize) -> Self {
        Self {
            lines: Vec::new(),
            width,
        }
    }

    // === Text Output ===

    /// Write text, wrapping at the line width
    pub fn line(&mut self, s: &str) -> &mut Self {
        self.lines.extend(wrap_to_width(s, self.width));
        self
    }

    /// Write an empty line
    pub fn blank(&mut self) -> &mut Self {
        self.lines.push(String::new());
        self
    }

    // === Separators ===

    /// Line of '=' characters
    pub fn eq_sep(&mut self) -> &mut Self {
        self.lines.push("=".repeat(self.width));
        self
    }

    /// Line of '-' characters
    pub fn dash_sep(&mut self) -> &mut Self {
        self.lines.push("-".repeat(self.width));
        self
    }

    // === Layout Helpers ===

    /// Left and right text on the same line
    ///
    /// Falls back to a single space between them when they do not fit.
    pub fn line_lr(&mut self, left: &str, right: &str) -> &mut Self {
        let lw = display_width(left);
        let rw = display_width(right);

        if lw + rw >= self.width {
            self.lines.push(format!("{} {}", left, right));
        } else {
            let spaces = self.width - lw - rw;
            self.lines
                .push(format!("{}{}{}", left, " ".repeat(spaces), right));
        }
        self
    }

    /// Table row; cells are padded or truncated to their column width
    ///
    /// Columns are separated by one space. Missing cells render empty.
    pub fn row(&mut self, columns: &[Column], cells: &[&str]) -> &mut Self {
        let rendered: Vec<String> = columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let cell = cells.get(i).copied().unwrap_or("");
                align_within(cell, col.width, col.align)
            })
            .collect();
        self.lines.push(rendered.join(" ").trim_end().to_string());
        self
    }

    // === Build ===

    /// Finalize and return the accumulated lines
    pub fn finish(self) -> Vec<String> {
        self.lines
    }
}

fn align_within(s: &str, width: usize, align: Align) -> String {
    match align {
        Align::Left => pad_to_width(s, width, false),
        Align::Right => pad_to_width(s, width, true),
    }
}
