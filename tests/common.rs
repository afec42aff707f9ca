#![allow(dead_code)]
use agenda_import::config::DEFAULT_START_ROW;
use assert_cmd::{Command, cargo_bin_cmd};
use rust_xlsxwriter::Workbook;
use std::env;
use std::fs;
use std::path::PathBuf;

pub const HEADERS: [&str; 8] = [
    "Date",
    "Time Start",
    "Time End",
    "Session or Sub-session(Sub)",
    "Session Title",
    "Room/Location",
    "Description",
    "Speakers",
];

pub fn import_agenda() -> Command {
    cargo_bin_cmd!("import_agenda")
}

pub fn lookup_agenda() -> Command {
    cargo_bin_cmd!("lookup_agenda")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_agenda.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary input file path inside tempdir and ensure it's removed
pub fn temp_file(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_agenda.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write an agenda workbook laid out like the real export: a title on the
/// first row, headers just above the data, data from DEFAULT_START_ROW on.
pub fn write_agenda_xlsx(name: &str, rows: &[[&str; 8]]) -> String {
    let path = temp_file(name, "xlsx");

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet.write_string(0, 0, "Conference Agenda").expect("write title");
    let header_row = (DEFAULT_START_ROW - 1) as u32;
    for (col, header) in HEADERS.iter().enumerate() {
        worksheet
            .write_string(header_row, col as u16, *header)
            .expect("write header");
    }

    for (i, row) in rows.iter().enumerate() {
        let r = (DEFAULT_START_ROW + i) as u32;
        for (col, value) in row.iter().enumerate() {
            if !value.is_empty() {
                worksheet
                    .write_string(r, col as u16, *value)
                    .expect("write cell");
            }
        }
    }

    workbook.save(&path).expect("save workbook");
    path
}

/// Import `rows` into a fresh database and return its path.
pub fn import_rows(name: &str, rows: &[[&str; 8]]) -> String {
    let db_path = setup_test_db(name);
    let xlsx = write_agenda_xlsx(name, rows);

    import_agenda()
        .args(["--db", &db_path, &xlsx])
        .assert()
        .success();

    db_path
}

pub fn open_db(db_path: &str) -> rusqlite::Connection {
    rusqlite::Connection::open(db_path).expect("open db")
}

/// (session flag, parent_session) of the entry titled `title`.
pub fn link_of(conn: &rusqlite::Connection, title: &str) -> (i64, Option<i64>) {
    conn.query_row(
        "SELECT session, parent_session FROM agendas WHERE title = ?1",
        [title],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )
    .expect("entry by title")
}

pub fn id_of(conn: &rusqlite::Connection, title: &str) -> i64 {
    conn.query_row("SELECT id FROM agendas WHERE title = ?1", [title], |row| {
        row.get(0)
    })
    .expect("id by title")
}

/// stdout lines of a successful command.
pub fn stdout_lines(cmd: &mut Command) -> Vec<String> {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output)
        .expect("utf8 stdout")
        .lines()
        .map(str::to_string)
        .collect()
}
