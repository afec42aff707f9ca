pub mod agenda_entry;
pub mod column;
pub mod entry_kind;
pub mod sql_text;

pub use agenda_entry::{AgendaEntry, NewAgendaEntry};
pub use column::Column;
pub use entry_kind::EntryKind;
pub use sql_text::SqlText;
