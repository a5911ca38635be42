//! Box-drawn two-column table.

use colored::Colorize;

/// A table with a highlighted header row and key/value body rows.
///
/// Widths are measured in `char`s, so wide glyphs may misalign columns.
#[derive(Debug, Clone, Default)]
pub struct Table {
    header: (String, String),
    rows: Vec<(String, String)>,
}

impl Table {
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            header: (left.into(), right.into()),
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.rows.push((key.into(), value.into()));
    }

    /// Keys of the body rows, in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|(key, _)| key.as_str())
    }

    pub fn render(&self) -> String {
        let widths = [
            column_width(&self.header.0, self.rows.iter().map(|(key, _)| key.as_str())),
            column_width(&self.header.1, self.rows.iter().map(|(_, value)| value.as_str())),
        ];

        let border = |left: char, mid: char, right: char| {
            format!(
                "{left}{}{mid}{}{right}",
                "─".repeat(widths[0] + 2),
                "─".repeat(widths[1] + 2)
            )
        };

        let mut lines = Vec::with_capacity(self.rows.len() * 2 + 3);
        lines.push(border('┌', '┬', '┐'));
        lines.push(format!(
            "│ {} │ {} │",
            pad(&self.header.0, widths[0]).as_str().yellow(),
            pad(&self.header.1, widths[1]).as_str().yellow()
        ));
        for (key, value) in &self.rows {
            lines.push(border('├', '┼', '┤'));
            lines.push(format!(
                "│ {} │ {} │",
                pad(key, widths[0]),
                pad(value, widths[1])
            ));
        }
        lines.push(border('└', '┴', '┘'));
        lines.join("\n")
    }
}

fn column_width<'a>(header: &str, cells: impl Iterator<Item = &'a str>) -> usize {
    cells
        .map(|cell| cell.chars().count())
        .fold(header.chars().count(), usize::max)
}

/// Pads before coloring so escape codes do not count toward the width.
fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{text}{}", " ".repeat(width.saturating_sub(len)))
}
