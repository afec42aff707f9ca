use crate::errors::AppResult;
use rusqlite::Connection;

/// Create the `agendas` and `log` tables when missing.
/// Safe to call on every run; existing data is left untouched.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS agendas (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            date            TEXT NOT NULL,
            time_start      TEXT NOT NULL,
            time_end        TEXT NOT NULL,
            session         INTEGER NOT NULL CHECK (session IN (0, 1)),
            parent_session  INTEGER,
            title           TEXT NOT NULL,
            location        TEXT,
            description     TEXT,
            speaker         TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_agendas_parent ON agendas(parent_session);

        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}
