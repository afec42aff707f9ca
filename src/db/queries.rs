use crate::db::initialize::init_db;
use crate::errors::AppResult;
use crate::models::{AgendaEntry, Column, EntryKind, NewAgendaEntry};
use rusqlite::types::Value;
use rusqlite::{Connection, Result, Row, params};

const SELECT_COLUMNS: &str = "id, date, time_start, time_end, session, parent_session, \
                              title, location, description, speaker";

/// Row predicate for [`AgendaTable::select`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// `column = value`
    Equals(Column, String),
    /// `column` contains `value` (case-sensitive)
    Contains(Column, String),
    /// Subsessions linked to the given session id
    ChildrenOf(i64),
}

impl Filter {
    /// The predicate a lookup uses for `column`: substring for speakers,
    /// equality for everything else.
    pub fn for_lookup(column: Column, value: &str) -> Self {
        if column.matches_by_substring() {
            Filter::Contains(column, value.to_string())
        } else {
            Filter::Equals(column, value.to_string())
        }
    }

    fn where_clause(&self) -> String {
        match self {
            Filter::Equals(column, _) => format!("{} = ?1", column.name()),
            // instr() is case-sensitive, unlike LIKE
            Filter::Contains(column, _) => format!("instr({}, ?1) > 0", column.name()),
            Filter::ChildrenOf(_) => "parent_session = ?1".to_string(),
        }
    }

    fn param(&self) -> Value {
        match self {
            Filter::Equals(_, v) | Filter::Contains(_, v) => Value::Text(v.clone()),
            Filter::ChildrenOf(id) => Value::Integer(*id),
        }
    }
}

/// Handle over the `agendas` relation.
pub struct AgendaTable<'c> {
    conn: &'c Connection,
}

impl<'c> AgendaTable<'c> {
    /// Ensure the schema exists and return the handle.
    pub fn open(conn: &'c Connection) -> AppResult<Self> {
        init_db(conn)?;
        Ok(Self { conn })
    }

    /// Insert one entry and return its new id.
    ///
    /// Free-text fields are already escaped, so they are written as SQL
    /// literals; SQLite folds the doubled quotes back when storing.
    pub fn insert(&self, entry: &NewAgendaEntry) -> AppResult<i64> {
        let sql = format!(
            "INSERT INTO agendas (date, time_start, time_end, session, parent_session,
                                  title, location, description, speaker)
             VALUES (?1, ?2, ?3, ?4, ?5, {}, {}, {}, {})",
            entry.title.to_literal(),
            entry.location.to_literal(),
            entry.description.to_literal(),
            entry.speaker.to_literal(),
        );

        self.conn.execute(
            &sql,
            params![
                entry.date,
                entry.time_start,
                entry.time_end,
                entry.kind.to_db_flag(),
                entry.parent_session,
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    /// Select all entries matching `filter`, in insertion order.
    pub fn select(&self, filter: &Filter) -> AppResult<Vec<AgendaEntry>> {
        let sql = format!(
            "SELECT {SELECT_COLUMNS} FROM agendas WHERE {} ORDER BY id ASC",
            filter.where_clause()
        );

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([filter.param()], map_row)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    pub fn get(&self, id: i64) -> AppResult<Option<AgendaEntry>> {
        use rusqlite::OptionalExtension;

        let entry = self
            .conn
            .query_row(
                &format!("SELECT {SELECT_COLUMNS} FROM agendas WHERE id = ?1"),
                [id],
                map_row,
            )
            .optional()?;
        Ok(entry)
    }

    pub fn count(&self) -> AppResult<i64> {
        let n = self
            .conn
            .query_row("SELECT COUNT(*) FROM agendas", [], |row| row.get(0))?;
        Ok(n)
    }
}

pub fn map_row(row: &Row) -> Result<AgendaEntry> {
    Ok(AgendaEntry {
        id: row.get("id")?,
        date: row.get("date")?,
        time_start: row.get("time_start")?,
        time_end: row.get("time_end")?,
        kind: EntryKind::from_db_flag(row.get("session")?),
        parent_session: row.get("parent_session")?,
        title: row.get("title")?,
        location: row.get("location")?,
        description: row.get("description")?,
        speaker: row.get("speaker")?,
    })
}
