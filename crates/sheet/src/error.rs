use thiserror::Error;

/// Errors that can occur during sheet operations
#[derive(Error, Debug)]
pub enum SheetError {
    #[error("Row index overflow: {0} exceeds the worksheet row limit")]
    RowOverflow(usize),

    #[error("Column index overflow: {0} exceeds the worksheet column limit")]
    ColumnOverflow(usize),

    #[error("XLSX error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

pub type Result<T> = std::result::Result<T, SheetError>;
