//! Error types for rubric extraction.

use rubric_pdf::PdfError;
use rubric_sheet::SheetError;
use thiserror::Error;

/// Result type for extraction operations.
pub type ExtractResult<T> = Result<T, ExtractError>;

/// Errors that abort an extraction.
///
/// Per-page conditions (out-of-range pages, pages without tables) are not
/// errors; they are reported as [`crate::Notice`]s.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The document could not be opened or a page could not be read.
    #[error(transparent)]
    Pdf(#[from] PdfError),

    /// The workbook could not be written.
    #[error(transparent)]
    Sheet(#[from] SheetError),

    /// I/O error while staging temporary files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
