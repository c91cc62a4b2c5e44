//! # rubric-pdf
//!
//! Page-level access to PDF documents and the tables drawn on them. Parsing
//! and table finding are delegated to `pdfplumber`.

pub mod document;
pub mod error;

use error::Result;

/// A table as rows of cells; `None` marks a cell with no content.
pub type Table = Vec<Vec<Option<String>>>;

/// Anything that can report its page count and the tables on a page.
///
/// Pages are numbered from 1.
pub trait TableSource {
    fn page_count(&self) -> usize;

    fn extract_tables(&self, page_num: usize) -> Result<Vec<Table>>;
}

// Re-export commonly used types
pub use document::{PdfDocument, PdfOptions, TableStrategy};
pub use error::PdfError;
