//! SQLite connection wrapper (lightweight for CLI usage).

use crate::config::Config;
use crate::db::queries::AgendaTable;
use crate::errors::AppResult;
use rusqlite::Connection;
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &Path) -> AppResult<Self> {
        let conn = Connection::open(path)?;
        Ok(Self { conn })
    }

    /// Open the configured database, creating its directory when needed.
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        cfg.ensure_database_dir()?;
        Self::new(&cfg.database_path())
    }

    /// Ensure the schema and hand out the `agendas` table.
    pub fn agendas(&self) -> AppResult<AgendaTable<'_>> {
        AgendaTable::open(&self.conn)
    }
}
