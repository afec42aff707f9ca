use clap::Parser;

/// Import a conference agenda spreadsheet into the `agendas` table
#[derive(Parser, Debug)]
#[command(
    name = "import_agenda",
    version = env!("CARGO_PKG_VERSION"),
    about = "Import conference agenda rows from a spreadsheet into SQLite",
    long_about = None
)]
pub struct ImportCli {
    /// Override database path (useful for tests or custom DB)
    #[arg(long = "db")]
    pub db: Option<String>,

    /// First data row of the sheet, zero-based (default from config: 15)
    #[arg(long = "start-row", value_name = "ROW")]
    pub start_row: Option<usize>,

    /// Agenda file (xls, xlsx, xlsm, xlsb, ods or csv)
    #[arg(value_name = "FILE")]
    pub file: String,
}

/// Look up agenda entries by column, expanding sessions into their subsessions
#[derive(Parser, Debug)]
#[command(
    name = "lookup_agenda",
    version = env!("CARGO_PKG_VERSION"),
    about = "Look up agenda entries; sessions are printed with their subsessions",
    long_about = None
)]
pub struct LookupCli {
    /// Override database path (useful for tests or custom DB)
    #[arg(long = "db")]
    pub db: Option<String>,

    /// Column to search: date, time_start, time_end, title, location, description, speaker
    #[arg(value_name = "COLUMN")]
    pub column: String,

    /// Value to search for; multiple words are joined with single spaces
    #[arg(value_name = "VALUE", required = true, num_args = 1..)]
    pub value: Vec<String>,
}

impl LookupCli {
    pub fn joined_value(&self) -> String {
        self.value.join(" ")
    }
}
