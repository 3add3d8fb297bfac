//! Table rendering utilities for CLI outputs.
//! Widths are computed per column from the actual cell content, measured
//! with unicode display width so non-ASCII names line up. ANSI escapes are
//! ignored by the width math, cells may be colored.

use crate::utils::formatting::strip_ansi;
use unicode_width::UnicodeWidthStr;

pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub separator_char: char,
}

impl Table {
    pub fn new<S: Into<String>>(headers: Vec<S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
            separator_char: '-',
        }
    }

    pub fn with_separator(mut self, c: char) -> Self {
        self.separator_char = c;
        self
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn visible_width(cell: &str) -> usize {
        strip_ansi(cell).width()
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| Self::visible_width(h)).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(Self::visible_width(cell));
                }
            }
        }
        widths
    }

    fn pad(cell: &str, width: usize) -> String {
        let fill = width.saturating_sub(Self::visible_width(cell));
        format!("{}{}", cell, " ".repeat(fill))
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        for (i, h) in self.headers.iter().enumerate() {
            out.push_str(&Self::pad(h, widths[i]));
            out.push_str("  ");
        }
        out.push('\n');

        let total: usize = widths.iter().sum::<usize>() + 2 * widths.len();
        out.push_str(&self.separator_char.to_string().repeat(total));
        out.push('\n');

        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                out.push_str(&Self::pad(cell, widths[i]));
                out.push_str("  ");
            }
            out.push('\n');
        }

        out
    }
}
