use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::AgendaTable;
use crate::errors::{AppError, AppResult};
use crate::models::NewAgendaEntry;
use crate::source::SheetRow;
use crate::ui::messages::error;
use std::path::Path;

/// Outcome of one import run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImportReport {
    pub inserted: usize,
    pub failed: usize,
}

impl ImportReport {
    pub fn summary(&self) -> String {
        format!("{} rows inserted, {} failed", self.inserted, self.failed)
    }
}

/// High-level business logic for the importer.
pub struct ImportLogic;

impl ImportLogic {
    /// Insert rows already read from `source` into `agendas`, auditing
    /// failures and the run summary in the `log` table.
    pub fn apply(pool: &DbPool, source: &Path, rows: &[SheetRow]) -> AppResult<ImportReport> {
        let table = pool.agendas()?;
        let target = source.display().to_string();
        let report = Self::import_rows(&table, rows, |row, e| {
            error(format!("Error inserting row {}: {}", row.index, e));
            ttlog_quiet(
                &pool.conn,
                "insert_failed",
                &target,
                &format!("row {}: {}", row.index, e),
            );
        });

        ttlog_quiet(&pool.conn, "import", &target, &report.summary());
        Ok(report)
    }

    /// Insert rows in order, linking each subsession to the most recently
    /// inserted session.
    ///
    /// A failed insert is handed to `on_error` and resets the running session
    /// pointer, so the subsessions that follow are stored without a parent
    /// until the next session row. Every row produces one insert, blank
    /// rows included.
    pub fn import_rows<F>(table: &AgendaTable, rows: &[SheetRow], mut on_error: F) -> ImportReport
    where
        F: FnMut(&SheetRow, &AppError),
    {
        let mut report = ImportReport::default();
        let mut current_session: Option<i64> = None;

        for row in rows {
            let entry = NewAgendaEntry::from_row(row, current_session);
            match table.insert(&entry) {
                Ok(id) => {
                    report.inserted += 1;
                    if entry.kind.is_session() {
                        current_session = Some(id);
                    }
                }
                Err(e) => {
                    report.failed += 1;
                    on_error(row, &e);
                    current_session = None;
                }
            }
        }

        report
    }
}
