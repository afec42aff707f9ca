//! Formatting of agenda entries for the lookup output.

use crate::models::AgendaEntry;

const NO_DESCRIPTION: &str = "<No Description>";
const NO_SPEAKERS: &str = "<No Speakers>";

/// Optional text, or `placeholder` when missing or blank.
fn or_placeholder<'a>(value: Option<&'a str>, placeholder: &'a str) -> &'a str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => placeholder,
    }
}

/// One-line summary of an entry.
pub fn format_entry(entry: &AgendaEntry) -> String {
    format!(
        "Date: {}, Time: {} to {}, Title: {}, Location: {}, Description: {}, {}, Speakers: {}",
        entry.date,
        entry.time_start,
        entry.time_end,
        entry.title,
        entry.location.as_deref().unwrap_or(""),
        or_placeholder(entry.description.as_deref(), NO_DESCRIPTION),
        entry.kind.label(),
        or_placeholder(entry.speaker.as_deref(), NO_SPEAKERS),
    )
}
