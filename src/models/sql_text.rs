/// Free text that has been trimmed, stripped of NUL characters and had
/// every single quote doubled.
///
/// The only way to build one is [`SqlText::sanitize`], so the wrapped string
/// can always be embedded between single quotes in a SQL statement.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SqlText(String);

impl SqlText {
    pub fn sanitize(raw: &str) -> Self {
        // SQLite stops reading statement text at a NUL
        let text: String = raw.trim().chars().filter(|&c| c != '\0').collect();
        Self(text.replace('\'', "''"))
    }

    /// The text as a SQL string literal, e.g. `'O''Brien'`.
    pub fn to_literal(&self) -> String {
        format!("'{}'", self.0)
    }
}
