use super::{COLUMN_COUNT, SheetRow, spreadsheet_error};
use crate::errors::AppResult;
use csv::ReaderBuilder;
use std::path::Path;

/// Read agenda rows from a CSV export of the sheet.
/// Every record counts as a row, including the header/title lines above `start_row`.
pub(super) fn read_rows(path: &Path, start_row: usize) -> AppResult<Vec<SheetRow>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| spreadsheet_error(path, e))?;

    let mut rows = Vec::new();
    for (index, record) in rdr.records().enumerate() {
        let record = record.map_err(|e| spreadsheet_error(path, e))?;
        if index < start_row {
            continue;
        }

        let cells: Vec<&str> = record.iter().take(COLUMN_COUNT).collect();
        rows.push(SheetRow::from_cells(index, &cells));
    }

    Ok(rows)
}
