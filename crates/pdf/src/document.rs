use crate::error::{PdfError, Result};
use crate::{Table, TableSource};
use pdfplumber::{Pdf, Strategy, TableSettings};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// How tables are located on a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableStrategy {
    /// Cells bounded by ruled lines and rectangle edges.
    #[default]
    Lattice,
    /// Cells inferred from the alignment of words, no borders needed.
    Stream,
}

impl FromStr for TableStrategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lattice" => Ok(Self::Lattice),
            "stream" => Ok(Self::Stream),
            other => Err(format!(
                "unknown table strategy '{other}' (expected 'lattice' or 'stream')"
            )),
        }
    }
}

impl fmt::Display for TableStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lattice => f.write_str("lattice"),
            Self::Stream => f.write_str("stream"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PdfOptions {
    pub strategy: TableStrategy,
    /// Distance within which parallel ruling lines are snapped together.
    pub snap_tolerance: f64,
    /// Distance within which collinear ruling segments are joined.
    pub join_tolerance: f64,
    /// Slack allowed when assigning characters to cells.
    pub text_tolerance: f64,
}

impl Default for PdfOptions {
    fn default() -> Self {
        Self {
            strategy: TableStrategy::Lattice,
            snap_tolerance: 3.0,
            join_tolerance: 3.0,
            text_tolerance: 3.0,
        }
    }
}

impl PdfOptions {
    fn table_settings(&self) -> TableSettings {
        let strategy = match self.strategy {
            TableStrategy::Lattice => Strategy::Lattice,
            TableStrategy::Stream => Strategy::Stream,
        };

        TableSettings {
            strategy,
            snap_tolerance: self.snap_tolerance,
            snap_x_tolerance: self.snap_tolerance,
            snap_y_tolerance: self.snap_tolerance,
            join_tolerance: self.join_tolerance,
            join_x_tolerance: self.join_tolerance,
            join_y_tolerance: self.join_tolerance,
            text_tolerance: self.text_tolerance,
            text_x_tolerance: self.text_tolerance,
            text_y_tolerance: self.text_tolerance,
            ..TableSettings::default()
        }
    }
}

/// An opened PDF document.
///
/// The handle owns the parsed document; dropping it releases everything that
/// was loaded.
pub struct PdfDocument {
    pdf: Pdf,
    page_count: usize,
    settings: TableSettings,
}

impl PdfDocument {
    /// Open a PDF file using default options
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, &PdfOptions::default())
    }

    /// Open a PDF file with custom options
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: &PdfOptions) -> Result<Self> {
        let path = path.as_ref();
        let pdf = Pdf::open_file(path, None).map_err(|e| PdfError::Load(e.to_string()))?;
        tracing::debug!("Loaded PDF {}", path.display());
        Ok(Self::from_pdf(pdf, options))
    }

    /// Parse a PDF held in memory
    pub fn from_bytes(bytes: &[u8], options: &PdfOptions) -> Result<Self> {
        let pdf = Pdf::open(bytes, None).map_err(|e| PdfError::Load(e.to_string()))?;
        Ok(Self::from_pdf(pdf, options))
    }

    fn from_pdf(pdf: Pdf, options: &PdfOptions) -> Self {
        let page_count = pdf.page_count();
        Self {
            pdf,
            page_count,
            settings: options.table_settings(),
        }
    }

    fn check_page(&self, page_num: usize) -> Result<()> {
        if page_num < 1 || page_num > self.page_count {
            return Err(PdfError::PageOutOfRange {
                page: page_num,
                total: self.page_count,
            });
        }
        Ok(())
    }
}

impl TableSource for PdfDocument {
    fn page_count(&self) -> usize {
        self.page_count
    }

    fn extract_tables(&self, page_num: usize) -> Result<Vec<Table>> {
        self.check_page(page_num)?;

        let page = self.pdf.page(page_num - 1).map_err(|e| PdfError::Page {
            page: page_num,
            message: e.to_string(),
        })?;

        let tables: Vec<Table> = page
            .find_tables(&self.settings)
            .into_iter()
            .map(|table| {
                table
                    .rows
                    .into_iter()
                    .map(|row| row.into_iter().map(|cell| cell.text).collect())
                    .collect()
            })
            .collect();

        tracing::debug!("Page {} yielded {} table(s)", page_num, tables.len());
        Ok(tables)
    }
}

impl fmt::Debug for PdfDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PdfDocument")
            .field("page_count", &self.page_count)
            .field("strategy", &self.settings.strategy)
            .finish_non_exhaustive()
    }
}
