use rust_xlsxwriter::{Format, FormatAlign};

/// Padding added to the longest value in a column.
pub const WIDTH_PADDING: usize = 5;

/// Upper bound for any column width.
pub const MAX_COLUMN_WIDTH: usize = 50;

/// Length assumed for a column whose cells are all empty.
pub const EMPTY_COLUMN_LENGTH: usize = 10;

/// Alignment applied uniformly to every cell of a sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellFormat {
    pub wrap_text: bool,
    pub align_top: bool,
}

impl Default for CellFormat {
    fn default() -> Self {
        Self {
            wrap_text: true,
            align_top: true,
        }
    }
}

impl CellFormat {
    /// Convert to the writer's format type
    #[must_use]
    pub fn to_xlsx_format(&self) -> Format {
        let mut format = Format::new();
        if self.align_top {
            format = format.set_align(FormatAlign::Top);
        }
        if self.wrap_text {
            format = format.set_text_wrap();
        }
        format
    }
}

/// Width of every column in `rows`, in character units.
///
/// Each width is `min(longest + 5, 50)`, where `longest` counts characters and
/// falls back to 10 for a column with no non-empty cell. Rows may be ragged;
/// missing cells count as empty.
#[must_use]
pub fn column_widths(rows: &[Vec<String>]) -> Vec<usize> {
    let col_count = rows.iter().map(Vec::len).max().unwrap_or(0);

    (0..col_count)
        .map(|col| {
            let longest = rows
                .iter()
                .filter_map(|row| row.get(col))
                .map(|value| value.chars().count())
                .max()
                .unwrap_or(0);
            let longest = if longest == 0 {
                EMPTY_COLUMN_LENGTH
            } else {
                longest
            };
            (longest + WIDTH_PADDING).min(MAX_COLUMN_WIDTH)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
        data.iter()
            .map(|row| row.iter().map(|s| (*s).to_string()).collect())
            .collect()
    }

    #[test]
    fn test_width_is_longest_plus_padding() {
        let widths = column_widths(&rows(&[&["abc", "a"], &["abcdef", "ab"]]));
        assert_eq!(widths, vec![11, 7]);
    }

    #[test]
    fn test_width_is_capped() {
        let long = "x".repeat(120);
        let widths = column_widths(&rows(&[&[long.as_str()]]));
        assert_eq!(widths, vec![MAX_COLUMN_WIDTH]);
    }

    #[test]
    fn test_empty_column_gets_default_width() {
        let widths = column_widths(&rows(&[&["A", ""], &[], &["B", ""]]));
        assert_eq!(widths, vec![6, 15]);
    }

    #[test]
    fn test_width_counts_characters_not_bytes() {
        let widths = column_widths(&rows(&[&["élève"]]));
        assert_eq!(widths, vec![10]);
    }

    #[test]
    fn test_no_rows_no_columns() {
        assert!(column_widths(&[]).is_empty());
        assert!(column_widths(&[Vec::new()]).is_empty());
    }

    #[test]
    fn test_default_cell_format() {
        let format = CellFormat::default();
        assert!(format.wrap_text);
        assert!(format.align_top);
    }
}
