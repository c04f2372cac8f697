//! Table formatting for CLI output.
//!
//! Provides aligned, human-readable table output with support for:
//! - Column headers
//! - Auto-sizing columns based on content
//! - Truncation of columns capped with a maximum width

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// A simple table formatter.
#[derive(Debug, Default)]
pub struct TableFormatter {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    max_widths: Vec<Option<usize>>,
}

impl TableFormatter {
    /// Create a new table formatter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the column headers.
    pub fn headers<I, S>(&mut self, headers: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headers = headers.into_iter().map(Into::into).collect();
        self
    }

    /// Add a row to the table.
    pub fn row<I, S>(&mut self, cells: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }

    /// Cap the width of a column; longer cells are truncated.
    pub fn max_width(&mut self, column: usize, width: usize) -> &mut Self {
        if self.max_widths.len() <= column {
            self.max_widths.resize(column + 1, None);
        }
        self.max_widths[column] = Some(width);
        self
    }

    /// Calculate column widths based on content.
    fn calculate_widths(&self) -> Vec<usize> {
        let num_cols = self.headers.len().max(self.rows.iter().map(Vec::len).max().unwrap_or(0));

        let mut widths = vec![0usize; num_cols];

        for (i, header) in self.headers.iter().enumerate() {
            widths[i] = widths[i].max(UnicodeWidthStr::width(header.as_str()));
        }

        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(UnicodeWidthStr::width(cell.as_str()));
            }
        }

        for (i, max) in self.max_widths.iter().enumerate() {
            if let Some(max) = max
                && i < widths.len()
            {
                widths[i] = widths[i].min(*max);
            }
        }

        widths
    }

    /// Print the table to stdout.
    pub fn print(&self) {
        print!("{}", self.render());
    }

    /// Render the table as a string.
    pub fn render(&self) -> String {
        let widths = self.calculate_widths();
        let mut output = String::new();

        if !self.headers.is_empty() {
            output.push_str(&Self::row_to_string(&self.headers, &widths));
            output.push('\n');
            let sep: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
            output.push_str(&sep.join("  "));
            output.push('\n');
        }

        for row in &self.rows {
            output.push_str(&Self::row_to_string(row, &widths));
            output.push('\n');
        }

        output
    }

    fn row_to_string(cells: &[String], widths: &[usize]) -> String {
        let parts: Vec<String> = cells
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                let width = widths.get(i).copied().unwrap_or(0);
                let cell_width = UnicodeWidthStr::width(cell.as_str());

                if cell_width <= width {
                    format!("{}{}", cell, " ".repeat(width - cell_width))
                } else {
                    truncate(cell, width)
                }
            })
            .collect();

        parts.join("  ").trim_end().to_string()
    }
}

/// Truncate a string to fit within a given width.
fn truncate(s: &str, max_width: usize) -> String {
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let mut width = 0;
    let mut chars = String::new();

    for c in s.chars() {
        let char_width = UnicodeWidthChar::width(c).unwrap_or(0);
        if width + char_width + 3 > max_width {
            chars.push_str("...");
            break;
        }
        chars.push(c);
        width += char_width;
    }

    // Pad to exact width if needed
    let current_width = UnicodeWidthStr::width(chars.as_str());
    if current_width < max_width {
        chars.push_str(&" ".repeat(max_width - current_width));
    }

    chars
}
