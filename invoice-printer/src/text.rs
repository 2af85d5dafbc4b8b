//! Fixed-width text utilities
//!
//! Widths are counted in `char`s; the exported document is plain text meant
//! for monospace display.

/// Display width of a string in columns
pub fn display_width(s: &str) -> usize {
    s.chars().count()
}

/// Truncate a string to fit within a column width
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    s.chars().take(max_width).collect()
}

/// Pad a string to a specific column width
///
/// If the string is longer than the width, it will be truncated.
pub fn pad_to_width(s: &str, width: usize, align_right: bool) -> String {
    let current = display_width(s);
    if current >= width {
        return truncate_to_width(s, width);
    }
    let spaces = width - current;
    if align_right {
        format!("{}{}", " ".repeat(spaces), s)
    } else {
        format!("{}{}", s, " ".repeat(spaces))
    }
}

/// Greedy word wrap
///
/// Words longer than `width` are hard-split. Explicit newlines are kept.
/// An empty input yields a single empty line.
pub fn wrap_to_width(s: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();

    for raw_line in s.split('\n') {
        let mut current = String::new();
        for word in raw_line.split_whitespace() {
            let mut word = word.to_string();
            loop {
                let cw = display_width(&current);
                let ww = display_width(&word);
                let needed = if current.is_empty() { ww } else { cw + 1 + ww };
                if needed <= width {
                    if !current.is_empty() {
                        current.push(' ');
                    }
                    current.push_str(&word);
                    break;
                }
                if !current.is_empty() {
                    out.push(std::mem::take(&mut current));
                    continue;
                }
                // Word alone does not fit
                let head = truncate_to_width(&word, width);
                word = word.chars().skip(width).collect();
                out.push(head);
                if word.is_empty() {
                    break;
                }
            }
        }
        out.push(current);
    }

    out
}
