use crate::cli::output::current_preferences;

/// Describes how a column should align its contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

/// Specifies the configuration for a single column in the rendered table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableColumn {
    pub header: String,
    pub min_width: usize,
    pub max_width: Option<usize>,
    pub alignment: Alignment,
}

impl TableColumn {
    pub fn new(header: impl Into<String>, min_width: usize, alignment: Alignment) -> Self {
        Self {
            header: header.into(),
            min_width,
            max_width: None,
            alignment,
        }
    }

    pub fn max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }
}

/// Represents a table with column metadata and rows of data to render.
pub struct Table {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<Vec<String>>,
    pub padding: usize,
}

impl Table {
    /// Computes the content widths for each column based on headers, rows, and
    /// column constraints.
    pub fn compute_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let widest_cell = self
                    .rows
                    .iter()
                    .filter_map(|row| row.get(idx))
                    .map(|cell| visible_width(cell))
                    .max()
                    .unwrap_or(0);
                let width = visible_width(&column.header)
                    .max(column.min_width)
                    .max(widest_cell);
                column.max_width.map_or(width, |max| width.min(max))
            })
            .collect()
    }

    /// Renders a single row using the provided column widths.
    pub fn render_row(&self, row: &[String], widths: &[usize]) -> String {
        let cells: Vec<String> = self
            .columns
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(idx, (column, width))| {
                let text = row.get(idx).map(String::as_str).unwrap_or("");
                render_cell(text, *width, column.alignment, self.padding)
            })
            .collect();
        cells.join(" ").trim_end().to_string()
    }

    /// Renders headers framed by rules, then one line per row.
    pub fn render(&self) -> String {
        let widths = self.compute_widths();
        let rule = horizontal_rule(&widths, self.padding);
        let headers: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();

        let mut lines = vec![rule.clone(), self.render_row(&headers, &widths), rule];
        lines.extend(self.rows.iter().map(|row| self.render_row(row, &widths)));
        lines.join("\n")
    }
}

fn visible_width(text: &str) -> usize {
    text.chars().count()
}

fn truncate_text(text: &str, width: usize) -> String {
    if visible_width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut truncated: String = text.chars().take(width - 1).collect();
    truncated.push('…');
    truncated
}

/// Renders a single cell with padding and alignment applied.
pub fn render_cell(text: &str, width: usize, alignment: Alignment, padding: usize) -> String {
    let fitted = truncate_text(text, width);
    let gap = width.saturating_sub(visible_width(&fitted));
    let pad = " ".repeat(padding);
    match alignment {
        Alignment::Left => format!("{pad}{fitted}{}{pad}", " ".repeat(gap)),
        Alignment::Right => format!("{pad}{}{fitted}{pad}", " ".repeat(gap)),
    }
}

/// Builds a horizontal rule that spans the width of the table.
pub fn horizontal_rule(widths: &[usize], padding: usize) -> String {
    if widths.is_empty() {
        return String::new();
    }
    let total_width: usize =
        widths.iter().map(|w| w + (padding * 2)).sum::<usize>() + widths.len() - 1;
    let ch = if current_preferences().plain_mode {
        '-'
    } else {
        '─'
    };
    ch.to_string().repeat(total_width)
}
