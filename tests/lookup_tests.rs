use agenda_import::core::LookupLogic;
use agenda_import::db::pool::DbPool;
use agenda_import::models::{Column, NewAgendaEntry};
use agenda_import::source::SheetRow;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::path::Path;

mod common;
use common::{import_rows, lookup_agenda, setup_test_db, stdout_lines};

fn entry<'a>(marker: &'a str, title: &'a str, speaker: &'a str) -> [&'a str; 8] {
    [
        "06/16/2018",
        "10:00 AM",
        "11:00 AM",
        marker,
        title,
        "Grand Ballroom",
        "",
        speaker,
    ]
}

#[test]
fn test_session_is_followed_by_its_subsessions() {
    let db_path = import_rows(
        "lookup_keynote",
        &[entry("Session", "Keynote", ""), entry("Talk", "Intro", "")],
    );

    let lines = stdout_lines(lookup_agenda().args(["--db", &db_path, "title", "Keynote"]));

    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("Title: Keynote"));
    assert!(lines[0].contains(", Session,"));
    assert!(lines[1].contains("Title: Intro"));
    assert!(lines[1].contains(", Subsession,"));
}

#[test]
fn test_line_format_with_placeholders() {
    let db_path = import_rows("lookup_format", &[entry("Session", "Keynote", "")]);

    let lines = stdout_lines(lookup_agenda().args(["--db", &db_path, "title", "Keynote"]));

    assert_eq!(
        lines,
        vec![
            "Date: 06/16/2018, Time: 10:00 AM to 11:00 AM, Title: Keynote, \
             Location: Grand Ballroom, Description: <No Description>, Session, \
             Speakers: <No Speakers>"
                .to_string()
        ]
    );
}

#[test]
fn test_subsession_match_is_not_expanded() {
    let db_path = import_rows(
        "lookup_subsession",
        &[
            entry("Session", "Keynote", ""),
            entry("Talk", "Intro", ""),
            entry("Talk", "Outro", ""),
        ],
    );

    let lines = stdout_lines(lookup_agenda().args(["--db", &db_path, "title", "Intro"]));

    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("Title: Intro"));
}

#[test]
fn test_speaker_matches_by_case_sensitive_substring() {
    let db_path = import_rows(
        "lookup_speaker",
        &[
            entry("Talk", "Storage Engines", "Janet Smith"),
            entry("Talk", "Compilers", "Bob Jansen, Alice"),
            entry("Talk", "Networking", "jane doe"),
        ],
    );

    lookup_agenda()
        .args(["--db", &db_path, "speaker", "Jan"])
        .assert()
        .success()
        .stdout(contains("Title: Storage Engines"))
        .stdout(contains("Title: Compilers"))
        .stdout(contains("Title: Networking").not());
}

#[test]
fn test_other_columns_match_exactly() {
    let db_path = import_rows(
        "lookup_exact",
        &[entry("Talk", "Rust", ""), entry("Talk", "Rust Async", "")],
    );

    let lines = stdout_lines(lookup_agenda().args(["--db", &db_path, "title", "Rust"]));

    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("Title: Rust,"));
}

#[test]
fn test_multi_word_value_is_joined_with_spaces() {
    let db_path = import_rows(
        "lookup_multi_word",
        &[entry("Session", "Opening Remarks And Welcome", "")],
    );

    lookup_agenda()
        .args([
            "--db", &db_path, "title", "Opening", "Remarks", "And", "Welcome",
        ])
        .assert()
        .success()
        .stdout(contains("Title: Opening Remarks And Welcome"));
}

#[test]
fn test_single_quotes_round_trip() {
    let db_path = import_rows(
        "lookup_quotes",
        &[entry("Session", "Women's Lunch", "Jane O'Brien")],
    );

    // looked up by an unrelated column
    let lines = stdout_lines(lookup_agenda().args(["--db", &db_path, "date", "06/16/2018"]));
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("Title: Women's Lunch,"));
    assert!(lines[0].contains("Speakers: Jane O'Brien"));
    assert_eq!(lines[0].matches('\'').count(), 2);

    // and by the quoted value itself
    lookup_agenda()
        .args(["--db", &db_path, "title", "Women's", "Lunch"])
        .assert()
        .success()
        .stdout(contains("Title: Women's Lunch"));
}

#[test]
fn test_invalid_column_runs_no_query() {
    let db_path = setup_test_db("lookup_invalid_column");

    lookup_agenda()
        .args(["--db", &db_path, "foo", "bar"])
        .assert()
        .failure()
        .stderr(contains("Invalid column: foo"))
        .stderr(contains("date, time_start, time_end, title, location, description, speaker"))
        .stdout(contains("Date:").not());

    // the database was never opened
    assert!(!Path::new(&db_path).exists());
}

#[test]
fn test_parent_session_is_not_a_lookup_column() {
    let db_path = setup_test_db("lookup_parent_column");

    lookup_agenda()
        .args(["--db", &db_path, "parent_session", "1"])
        .assert()
        .failure()
        .stderr(contains("Invalid column: parent_session"));
}

#[test]
fn test_missing_arguments_print_usage() {
    lookup_agenda()
        .args(["title"])
        .assert()
        .failure()
        .stderr(contains("Usage"));

    lookup_agenda().assert().failure().stderr(contains("Usage"));
}

#[test]
fn test_no_match_prints_warning() {
    let db_path = import_rows("lookup_no_match", &[entry("Session", "Keynote", "")]);

    lookup_agenda()
        .args(["--db", &db_path, "location", "Nowhere"])
        .assert()
        .success()
        .stdout(contains("No agenda entries match location 'Nowhere'"))
        .stdout(contains("Date:").not());
}

#[test]
fn test_collect_orders_sessions_before_their_children() {
    let pool = DbPool::new(Path::new(":memory:")).expect("in-memory db");
    let table = pool.agendas().expect("agendas table");

    let mut current = None;
    for (i, cells) in [
        ["Mon", "9", "10", "Session", "Morning", "", "", ""],
        ["Mon", "9", "10", "Sub", "Coffee", "", "", ""],
        ["Mon", "11", "12", "Session", "Midday", "", "", ""],
        ["Mon", "11", "12", "Sub", "Lunch", "", "", ""],
    ]
    .iter()
    .enumerate()
    {
        let new_entry = NewAgendaEntry::from_row(&SheetRow::from_cells(i, cells), current);
        let id = table.insert(&new_entry).expect("insert");
        if new_entry.kind.is_session() {
            current = Some(id);
        }
    }

    let titles: Vec<String> = LookupLogic::collect(&table, Column::Date, "Mon")
        .expect("collect")
        .into_iter()
        .map(|e| e.title)
        .collect();

    // children are printed under their session and again as direct matches
    assert_eq!(
        titles,
        vec!["Morning", "Coffee", "Coffee", "Midday", "Lunch", "Lunch"]
    );
}
