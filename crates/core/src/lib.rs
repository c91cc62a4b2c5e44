//! # rubric-core
//!
//! Turns the tables found on selected PDF pages into a single formatted
//! spreadsheet.
//!
//! This crate provides:
//! - page-list parsing
//! - the flattening pass and its notices
//! - workbook extraction with scoped temporary files
//!
//! ```
//! use rubric_core::{flatten, parse_page_numbers};
//! use rubric_pdf::{Table, TableSource};
//!
//! struct OnePage;
//!
//! impl TableSource for OnePage {
//!     fn page_count(&self) -> usize {
//!         1
//!     }
//!
//!     fn extract_tables(&self, _page: usize) -> rubric_pdf::error::Result<Vec<Table>> {
//!         Ok(vec![vec![vec![Some(" Clarity ".to_string()), None]]])
//!     }
//! }
//!
//! let pages = parse_page_numbers("1, 2");
//! let extraction = flatten(&OnePage, &pages).unwrap();
//!
//! assert_eq!(extraction.sheet.rows()[0], vec!["Clarity", ""]);
//! assert_eq!(extraction.notices.len(), 1);
//! ```

/// Error types and result aliases.
pub mod error;
/// Workbook extraction from PDF bytes or files.
pub mod extract;
/// The flattening pass.
pub mod flatten;
/// Per-page notices.
pub mod notice;
/// Page-list parsing.
pub mod pages;

pub use error::{ExtractError, ExtractResult};
pub use extract::{extract_file, extract_workbook, Artifact, OUTPUT_FILE_NAME};
pub use flatten::{flatten, Extraction, SHEET_NAME};
pub use notice::{Notice, NoticeLevel};
pub use pages::{parse_page_numbers, DEFAULT_PAGES};
pub use rubric_pdf::{PdfOptions, TableStrategy};
