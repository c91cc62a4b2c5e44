//! Sheet module for rubric-extract
//!
//! Holds extracted rows in memory, applies uniform cell formatting and column
//! sizing, and writes the result as an XLSX workbook.
//!
//! # Examples
//!
//! ```
//! use rubric_sheet::{clean_row, CellFormat, Sheet};
//!
//! let mut sheet = Sheet::with_name("Evaluation Rubric");
//! sheet.append_row(clean_row(&[Some(" Clarity ".to_string()), None]));
//! sheet.append_blank_row();
//! sheet.apply_formatting(CellFormat::default());
//!
//! assert_eq!(sheet.rows()[0], vec!["Clarity", ""]);
//! assert_eq!(sheet.column_widths(), &[12, 15]);
//! ```

mod error;
mod format;
mod sheet;
mod xlsx;

/// Re-export sheet error types.
pub use error::{Result, SheetError};
/// Re-export formatting types and width rules.
pub use format::{
    column_widths, CellFormat, EMPTY_COLUMN_LENGTH, MAX_COLUMN_WIDTH, WIDTH_PADDING,
};
/// Re-export sheet type.
pub use sheet::{clean_row, Sheet};
pub use xlsx::XLSX_CONTENT_TYPE;
