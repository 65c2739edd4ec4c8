//! Table rendering utilities for CLI outputs.
//!
//! Cells wider than their column wrap onto extra lines; widths are measured
//! in terminal columns, so non-ASCII notes stay aligned.

use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&pad(&col.header, col.width));
            out.push(' ');
        }
        out = out.trim_end().to_string();
        out.push('\n');

        let total: usize = self.columns.iter().map(|c| c.width + 1).sum();
        out.push_str(&"-".repeat(total.saturating_sub(1)));
        out.push('\n');

        // Rows
        for row in &self.rows {
            let cells: Vec<Vec<String>> = self
                .columns
                .iter()
                .enumerate()
                .map(|(i, col)| wrap_cell(row.get(i).map(String::as_str).unwrap_or(""), col.width))
                .collect();

            let height = cells.iter().map(Vec::len).max().unwrap_or(1);

            for line_idx in 0..height {
                let mut line = String::new();
                for (i, col) in self.columns.iter().enumerate() {
                    let text = cells[i].get(line_idx).map(String::as_str).unwrap_or("");
                    line.push_str(&pad(text, col.width));
                    line.push(' ');
                }
                out.push_str(line.trim_end());
                out.push('\n');
            }
        }

        out
    }
}

fn wrap_cell(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for raw in text.trim().lines() {
        if width == 0 || raw.width() <= width {
            lines.push(raw.to_string());
        } else {
            lines.extend(textwrap::wrap(raw, width).into_iter().map(|c| c.into_owned()));
        }
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}
