use crate::error::{ConverterError, Result};
use calamine::{open_workbook_auto, DataType, Reader};
use std::path::Path;
use tracing::debug;

/// In-memory copy of one worksheet: a header row plus data rows in sheet order.
#[derive(Debug)]
pub struct SheetTable {
    /// Column names from the header row, trimmed. These are what the file
    /// claims; column lookup happens downstream.
    pub headers: Vec<String>,
    /// Data rows, one `Vec` of cells per row. Rows may be shorter than the
    /// header row when trailing cells are blank.
    pub rows: Vec<Vec<DataType>>,
}

/// Loads the first worksheet of the workbook at `path`.
///
/// The first row is taken as the header row. A missing file, an unreadable
/// workbook, a workbook with no sheets, or a sheet without a header row are
/// all source-read failures.
pub fn load_table(path: &Path) -> Result<SheetTable> {
    let source_err = |reason: String| ConverterError::SourceRead {
        path: path.to_path_buf(),
        reason,
    };

    let mut workbook = open_workbook_auto(path).map_err(|e| source_err(e.to_string()))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| source_err("workbook contains no sheets".to_string()))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .ok_or_else(|| source_err(format!("sheet '{sheet_name}' not found")))?
        .map_err(|e| source_err(e.to_string()))?;

    let mut rows_iter = range.rows();

    // First row is headers
    let headers: Vec<String> = rows_iter
        .next()
        .ok_or_else(|| source_err(format!("sheet '{sheet_name}' is empty")))?
        .iter()
        .map(|cell| cell.to_string().trim().to_string())
        .collect();

    let rows: Vec<Vec<DataType>> = rows_iter.map(|row| row.to_vec()).collect();

    debug!(
        sheet = %sheet_name,
        columns = headers.len(),
        rows = rows.len(),
        "loaded worksheet"
    );

    Ok(SheetTable { headers, rows })
}
