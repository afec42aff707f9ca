use super::excel_date::excel_serial_to_text;
use super::{COLUMN_COUNT, SheetRow, spreadsheet_error};
use crate::errors::AppResult;
use calamine::{Data, Range, Reader, open_workbook_auto};
use std::path::Path;

/// Read agenda rows from the first sheet of an Excel/ODS workbook.
pub(super) fn read_rows(path: &Path, start_row: usize) -> AppResult<Vec<SheetRow>> {
    let mut workbook = open_workbook_auto(path).map_err(|e| spreadsheet_error(path, e))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| spreadsheet_error(path, "workbook has no sheets"))?
        .map_err(|e| spreadsheet_error(path, e))?;

    Ok(rows_from_range(&range, start_row))
}

/// Collect rows using absolute sheet coordinates: calamine ranges begin at
/// the first used cell, not at A1.
fn rows_from_range(range: &Range<Data>, start_row: usize) -> Vec<SheetRow> {
    let Some((last_row, _)) = range.end() else {
        return Vec::new();
    };

    let mut rows = Vec::new();
    for row in start_row..=last_row as usize {
        let cells: Vec<String> = (0..COLUMN_COUNT)
            .map(|col| {
                range
                    .get_value((row as u32, col as u32))
                    .map(cell_to_text)
                    .unwrap_or_default()
            })
            .collect();
        rows.push(SheetRow::from_cells(row, &cells));
    }
    rows
}

/// Coerce a cell to the text stored in the database.
fn cell_to_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => float_to_text(*f),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => {
            let serial = dt.as_f64();
            excel_serial_to_text(serial).unwrap_or_else(|| float_to_text(serial))
        }
        Data::Error(e) => e.to_string(),
    }
}

fn float_to_text(f: f64) -> String {
    if f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
        (f as i64).to_string()
    } else {
        f.to_string()
    }
}
