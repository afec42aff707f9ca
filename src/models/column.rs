use crate::errors::{AppError, AppResult};

/// Columns a lookup may filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Date,
    TimeStart,
    TimeEnd,
    Title,
    Location,
    Description,
    Speaker,
}

impl Column {
    pub const ALL: [Column; 7] = [
        Column::Date,
        Column::TimeStart,
        Column::TimeEnd,
        Column::Title,
        Column::Location,
        Column::Description,
        Column::Speaker,
    ];

    /// Name of the column in the `agendas` table (and on the command line).
    pub fn name(&self) -> &'static str {
        match self {
            Column::Date => "date",
            Column::TimeStart => "time_start",
            Column::TimeEnd => "time_end",
            Column::Title => "title",
            Column::Location => "location",
            Column::Description => "description",
            Column::Speaker => "speaker",
        }
    }

    /// Parse a user-supplied column name against the allow-list.
    pub fn from_name(name: &str) -> AppResult<Self> {
        Column::ALL
            .iter()
            .copied()
            .find(|c| c.name() == name)
            .ok_or_else(|| AppError::InvalidColumn {
                column: name.to_string(),
                valid: Column::valid_names(),
            })
    }

    pub fn valid_names() -> String {
        Column::ALL
            .iter()
            .map(|c| c.name())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Speaker lists are free text, so they match by substring.
    pub fn matches_by_substring(&self) -> bool {
        matches!(self, Column::Speaker)
    }
}
