use super::{entry_kind::EntryKind, sql_text::SqlText};
use crate::source::SheetRow;

/// A stored row of the `agendas` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgendaEntry {
    pub id: i64,
    pub date: String,       // ⇔ agendas.date
    pub time_start: String, // ⇔ agendas.time_start
    pub time_end: String,   // ⇔ agendas.time_end
    pub kind: EntryKind,    // ⇔ agendas.session (0/1)
    pub parent_session: Option<i64>,
    pub title: String,
    pub location: Option<String>,
    pub description: Option<String>,
    pub speaker: Option<String>,
}

impl AgendaEntry {
    pub fn is_session(&self) -> bool {
        self.kind.is_session()
    }
}

/// A row ready to be inserted, already classified and sanitized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAgendaEntry {
    pub date: String,
    pub time_start: String,
    pub time_end: String,
    pub kind: EntryKind,
    pub parent_session: Option<i64>,
    pub title: SqlText,
    pub location: SqlText,
    pub description: SqlText,
    pub speaker: SqlText,
}

impl NewAgendaEntry {
    /// Build the insert for one sheet row.
    ///
    /// `current_session` is the id of the most recently inserted session. A
    /// session row never keeps it; a subsession row uses it as its parent.
    pub fn from_row(row: &SheetRow, current_session: Option<i64>) -> Self {
        let kind = EntryKind::from_marker(&row.session_marker);
        let parent_session = if kind.is_session() {
            None
        } else {
            current_session
        };

        Self {
            date: row.date.clone(),
            time_start: row.time_start.clone(),
            time_end: row.time_end.clone(),
            kind,
            parent_session,
            title: SqlText::sanitize(&row.title),
            location: SqlText::sanitize(&row.location),
            description: SqlText::sanitize(&row.description),
            speaker: SqlText::sanitize(&row.speaker),
        }
    }
}
