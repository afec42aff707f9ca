/// Marker cell value that flags a row as a top-level session.
pub const SESSION_MARKER: &str = "Session";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Session,
    Subsession,
}

impl EntryKind {
    /// Classify a raw session-marker cell. Only an exact (trimmed,
    /// case-sensitive) "Session" makes a session.
    pub fn from_marker(cell: &str) -> Self {
        if cell.trim() == SESSION_MARKER {
            EntryKind::Session
        } else {
            EntryKind::Subsession
        }
    }

    pub fn is_session(&self) -> bool {
        matches!(self, EntryKind::Session)
    }

    /// Convert enum → DB flag (0/1)
    pub fn to_db_flag(&self) -> i64 {
        match self {
            EntryKind::Session => 1,
            EntryKind::Subsession => 0,
        }
    }

    /// Convert DB flag → enum; any non-zero value counts as a session.
    pub fn from_db_flag(flag: i64) -> Self {
        if flag != 0 {
            EntryKind::Session
        } else {
            EntryKind::Subsession
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EntryKind::Session => "Session",
            EntryKind::Subsession => "Subsession",
        }
    }
}
