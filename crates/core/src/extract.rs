//! End-to-end extraction with scoped temporary files.
//!
//! Every temporary file is a [`NamedTempFile`], which removes itself when
//! dropped, so nothing is left behind on success, early return or error.

use crate::error::ExtractResult;
use crate::flatten::flatten;
use crate::notice::Notice;
use rubric_pdf::{PdfDocument, PdfOptions};
use rubric_sheet::XLSX_CONTENT_TYPE;
use std::io::Write;
use std::path::Path;
use tempfile::{Builder, NamedTempFile};

/// File name offered for download.
pub const OUTPUT_FILE_NAME: &str = "Evaluation_Rubric.xlsx";

/// A finished workbook ready to hand to the user.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
    pub notices: Vec<Notice>,
}

/// Extract tables from an uploaded PDF held in memory.
///
/// The upload is staged in a temporary `.pdf` file for the duration of the
/// call.
pub fn extract_workbook(
    pdf_bytes: &[u8],
    page_numbers: &[usize],
    options: &PdfOptions,
) -> ExtractResult<Artifact> {
    let mut input = temp_file(".pdf")?;
    input.write_all(pdf_bytes)?;
    input.flush()?;
    tracing::debug!(
        "Staged {} byte upload at {}",
        pdf_bytes.len(),
        input.path().display()
    );

    extract_file(input.path(), page_numbers, options)
}

/// Extract tables from a PDF on disk.
pub fn extract_file(
    path: &Path,
    page_numbers: &[usize],
    options: &PdfOptions,
) -> ExtractResult<Artifact> {
    let extraction = {
        let document = PdfDocument::open_with_options(path, options)?;
        flatten(&document, page_numbers)?
    };

    let output = temp_file(".xlsx")?;
    extraction.sheet.save_as_xlsx(output.path())?;
    let bytes = std::fs::read(output.path())?;
    tracing::info!("Wrote {} ({} bytes)", OUTPUT_FILE_NAME, bytes.len());

    Ok(Artifact {
        file_name: OUTPUT_FILE_NAME.to_string(),
        content_type: XLSX_CONTENT_TYPE.to_string(),
        bytes,
        notices: extraction.notices,
    })
}

fn temp_file(suffix: &str) -> ExtractResult<NamedTempFile> {
    Ok(Builder::new().prefix("rubric-").suffix(suffix).tempfile()?)
}
