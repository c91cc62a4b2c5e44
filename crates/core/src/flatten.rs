//! Flattening of per-page tables into one formatted sheet.

use crate::error::ExtractResult;
use crate::notice::Notice;
use rubric_pdf::TableSource;
use rubric_sheet::{clean_row, CellFormat, Sheet};
use std::collections::HashSet;

/// Name of the single sheet in every workbook produced.
pub const SHEET_NAME: &str = "Evaluation Rubric";

/// The result of one flattening pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub sheet: Sheet,
    pub notices: Vec<Notice>,
}

/// Collect the tables on `page_numbers` into a single formatted sheet.
///
/// Pages are visited in the order given. A page that was already visited is
/// skipped. Pages outside `1..=page_count` and pages without tables produce a
/// [`Notice`] and contribute no rows. Every table's rows are appended as clean
/// rows followed by one blank separator row.
///
/// Only a failure of `source` itself aborts the pass.
pub fn flatten<S>(source: &S, page_numbers: &[usize]) -> ExtractResult<Extraction>
where
    S: TableSource + ?Sized,
{
    let total_pages = source.page_count();
    let mut sheet = Sheet::with_name(SHEET_NAME);
    let mut notices = Vec::new();
    let mut visited = HashSet::new();

    for &page_num in page_numbers {
        if !visited.insert(page_num) {
            tracing::debug!("Page {} already processed, skipping repeat", page_num);
            continue;
        }

        if page_num < 1 || page_num > total_pages {
            tracing::warn!(
                "Page {} is out of range (document has {} pages) and will be skipped",
                page_num,
                total_pages
            );
            notices.push(Notice::out_of_range(page_num));
            continue;
        }

        let tables = source.extract_tables(page_num)?;

        if tables.is_empty() {
            tracing::info!("No tables found on page {}", page_num);
            notices.push(Notice::no_tables(page_num));
            continue;
        }

        for table in &tables {
            for row in table {
                sheet.append_row(clean_row(row));
            }
            sheet.append_blank_row();
        }
        tracing::debug!("Page {}: appended {} table(s)", page_num, tables.len());
    }

    sheet.apply_formatting(CellFormat::default());
    tracing::info!(
        "Flattened {} page(s) into {} row(s), {} notice(s)",
        visited.len(),
        sheet.row_count(),
        notices.len()
    );

    Ok(Extraction { sheet, notices })
}
