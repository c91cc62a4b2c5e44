use crate::error::{Result, SheetError};
use crate::sheet::Sheet;
use rust_xlsxwriter::{Workbook, Worksheet};
use std::path::Path;

/// MIME type of the files written by this module.
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

impl Sheet {
    /// Save the sheet to an Excel file
    ///
    /// # Errors
    ///
    /// Returns error if the workbook cannot be built or the file written.
    pub fn save_as_xlsx<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut workbook = self.to_workbook()?;
        workbook.save(path.as_ref())?;
        Ok(())
    }

    /// Serialize the sheet to the bytes of an Excel file
    ///
    /// # Errors
    ///
    /// Returns error if the workbook cannot be built.
    pub fn to_xlsx_bytes(&self) -> Result<Vec<u8>> {
        let mut workbook = self.to_workbook()?;
        Ok(workbook.save_to_buffer()?)
    }

    fn to_workbook(&self) -> Result<Workbook> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        self.write_to_worksheet(worksheet)?;
        Ok(workbook)
    }

    /// Write sheet data to a worksheet.
    ///
    /// With a cell format applied, every position of the `rows x columns`
    /// rectangle is written, so padding and separator cells carry the format
    /// too; empty values become formatted blanks.
    fn write_to_worksheet(&self, worksheet: &mut Worksheet) -> Result<()> {
        worksheet.set_name(self.name())?;

        let format = self.cell_format().map(|f| f.to_xlsx_format());
        let col_count = self.col_count();

        for (row_idx, row) in self.rows().iter().enumerate() {
            let row_num = u32::try_from(row_idx).map_err(|_| SheetError::RowOverflow(row_idx))?;
            let width = if format.is_some() { col_count } else { row.len() };

            for col_idx in 0..width {
                let col_num =
                    u16::try_from(col_idx).map_err(|_| SheetError::ColumnOverflow(col_idx))?;
                let value = row.get(col_idx).map_or("", String::as_str);

                match (&format, value.is_empty()) {
                    (Some(format), true) => {
                        worksheet.write_blank(row_num, col_num, format)?;
                    }
                    (Some(format), false) => {
                        worksheet.write_string_with_format(row_num, col_num, value, format)?;
                    }
                    (None, true) => {} // Leave empty
                    (None, false) => {
                        worksheet.write_string(row_num, col_num, value)?;
                    }
                }
            }
        }

        for (col_idx, width) in self.column_widths().iter().enumerate() {
            let col_num = u16::try_from(col_idx).map_err(|_| SheetError::ColumnOverflow(col_idx))?;
            worksheet.set_column_width(col_num, *width as f64)?;
        }

        Ok(())
    }
}
