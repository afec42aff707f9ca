//! Spreadsheet sources for the importer.
//!
//! Every format is reduced to a list of [`SheetRow`]s holding the eight
//! positional agenda columns as text, starting at an absolute row offset.

mod csv_sheet;
mod excel_date;
mod workbook;

use crate::errors::{AppError, AppResult};
use crate::utils::path::extension_of;
use std::path::Path;

/// Number of positional columns read from each row.
pub const COLUMN_COUNT: usize = 8;

/// Raw text of one agenda row, in sheet column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetRow {
    /// Absolute (zero-based) row index in the sheet.
    pub index: usize,
    pub date: String,
    pub time_start: String,
    pub time_end: String,
    pub session_marker: String,
    pub title: String,
    pub location: String,
    pub description: String,
    pub speaker: String,
}

impl SheetRow {
    /// Build a row from positional cells; missing trailing cells are empty.
    pub fn from_cells<S: AsRef<str>>(index: usize, cells: &[S]) -> Self {
        let cell = |i: usize| {
            cells
                .get(i)
                .map(|c| c.as_ref().to_string())
                .unwrap_or_default()
        };

        Self {
            index,
            date: cell(0),
            time_start: cell(1),
            time_end: cell(2),
            session_marker: cell(3),
            title: cell(4),
            location: cell(5),
            description: cell(6),
            speaker: cell(7),
        }
    }
}

/// Read the first sheet of `path` from `start_row` (inclusive) to the end.
pub fn read_rows(path: &Path, start_row: usize) -> AppResult<Vec<SheetRow>> {
    if !path.is_file() {
        return Err(AppError::Spreadsheet {
            path: path.display().to_string(),
            reason: "file not found".into(),
        });
    }

    match extension_of(path).as_str() {
        "csv" => csv_sheet::read_rows(path, start_row),
        "xls" | "xlsx" | "xlsm" | "xlsb" | "ods" => workbook::read_rows(path, start_row),
        other => Err(AppError::UnsupportedFormat(if other.is_empty() {
            path.display().to_string()
        } else {
            format!(".{other}")
        })),
    }
}

pub(crate) fn spreadsheet_error<E: std::fmt::Display>(path: &Path, e: E) -> AppError {
    AppError::Spreadsheet {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}
