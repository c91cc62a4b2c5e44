use crate::format::{self, CellFormat};

/// Trim every cell and replace absent cells with the empty string.
#[must_use]
pub fn clean_row(cells: &[Option<String>]) -> Vec<String> {
    cells
        .iter()
        .map(|cell| cell.as_deref().map(str::trim).unwrap_or_default().to_string())
        .collect()
}

/// A named grid of text cells (row-major, rows may be ragged)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    name: String,
    rows: Vec<Vec<String>>,
    cell_format: Option<CellFormat>,
    column_widths: Vec<usize>,
}

impl Sheet {
    /// Create a new empty sheet with a name
    #[must_use]
    pub fn with_name(name: &str) -> Self {
        Sheet {
            name: name.to_string(),
            rows: Vec::new(),
            cell_format: None,
            column_widths: Vec::new(),
        }
    }

    /// Get the sheet name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get all rows
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Get the number of rows, separators included
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns (length of the longest row)
    #[must_use]
    pub fn col_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get a cell; cells past the end of a short row read as `None`
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }

    pub fn append_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn append_blank_row(&mut self) {
        self.rows.push(Vec::new());
    }

    /// Apply `cell_format` to every cell and size every column to its content.
    ///
    /// Widths are computed from the rows present at the time of the call.
    pub fn apply_formatting(&mut self, cell_format: CellFormat) {
        self.cell_format = Some(cell_format);
        self.column_widths = format::column_widths(&self.rows);
    }

    #[must_use]
    pub fn cell_format(&self) -> Option<&CellFormat> {
        self.cell_format.as_ref()
    }

    /// Column widths assigned by the last `apply_formatting` call
    #[must_use]
    pub fn column_widths(&self) -> &[usize] {
        &self.column_widths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_row_trims_and_fills_nulls() {
        let row = vec![Some("  A ".to_string()), None, Some("\tB\n".to_string())];
        assert_eq!(clean_row(&row), vec!["A", "", "B"]);
    }

    #[test]
    fn test_clean_row_empty() {
        assert!(clean_row(&[]).is_empty());
    }

    #[test]
    fn test_append_rows_and_separators() {
        let mut sheet = Sheet::with_name("Evaluation Rubric");
        sheet.append_row(vec!["A".to_string(), "B".to_string()]);
        sheet.append_blank_row();
        sheet.append_row(vec!["C".to_string()]);

        assert_eq!(sheet.name(), "Evaluation Rubric");
        assert_eq!(sheet.row_count(), 3);
        assert_eq!(sheet.col_count(), 2);
        assert!(sheet.rows()[1].is_empty());
        assert_eq!(sheet.get(2, 0), Some("C"));
        assert_eq!(sheet.get(2, 1), None);
    }

    #[test]
    fn test_apply_formatting() {
        let mut sheet = Sheet::with_name("Rubric");
        sheet.append_row(vec!["Criteria".to_string(), String::new()]);
        assert!(sheet.cell_format().is_none());
        assert!(sheet.column_widths().is_empty());

        sheet.apply_formatting(CellFormat::default());

        assert_eq!(sheet.cell_format(), Some(&CellFormat::default()));
        assert_eq!(sheet.column_widths(), &[13, 15]);
    }
}
