/// A simple text-based table generator for the terminal popup
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    col_widths: Vec<usize>,
}

impl Table {
    /// Create a new table with the given headers
    pub fn new(headers: &[&str]) -> Self {
        let col_widths = headers.iter().map(|h| h.chars().count()).collect();
        let headers = headers.iter().map(|h| h.to_string()).collect();
        Table {
            headers,
            rows: Vec::new(),
            col_widths,
        }
    }

    /// Add a row to the table
    pub fn add_row(&mut self, row: Vec<String>) {
        // Update column widths if needed
        for (i, col) in row.iter().enumerate() {
            if i < self.col_widths.len() {
                self.col_widths[i] = self.col_widths[i].max(col.chars().count());
            }
        }

        self.rows.push(row);
    }

    /// Render the table, one line per row. An empty table renders its header only.
    pub fn render(&self) -> String {
        let mut output = self.render_row(&self.headers);
        output.push('\n');
        output.push_str(&self.render_separator());

        for row in &self.rows {
            output.push('\n');
            output.push_str(&self.render_row(row));
        }

        output
    }

    /// Render a single row with proper spacing
    fn render_row(&self, row: &[String]) -> String {
        let cells: Vec<String> = row
            .iter()
            .zip(&self.col_widths)
            .map(|(col, &width)| format!("{:<width$}", col, width = width))
            .collect();
        cells.join(" | ").trim_end().to_string()
    }

    /// Render a separator line
    fn render_separator(&self) -> String {
        self.col_widths
            .iter()
            .map(|&width| "-".repeat(width))
            .collect::<Vec<_>>()
            .join("-+-")
    }
}
