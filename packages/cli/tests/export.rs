use mole_cli::app::{dispatch, AppContext};
use mole_cli::cli::ls::LsArgs;
use mole_cli::cli::root::Command;
use mole_cli::error::CliError;
use mole_history::locate::{candidate_paths, snapshot_path};
use mole_history::HistoryError;
use rusqlite::Connection;
use serde_json::Value as JsonValue;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const CHROME_FIXTURE: &str = "
    CREATE TABLE urls (
        id INTEGER PRIMARY KEY,
        url TEXT NOT NULL,
        title TEXT,
        visit_count INTEGER NOT NULL DEFAULT 0,
        typed_count INTEGER NOT NULL DEFAULT 0,
        last_visit_time INTEGER NOT NULL,
        hidden INTEGER NOT NULL DEFAULT 0
    );
    CREATE TABLE keyword_search_terms (
        keyword_id INTEGER NOT NULL,
        url_id INTEGER NOT NULL,
        term TEXT NOT NULL,
        normalized_term TEXT NOT NULL
    );
    CREATE TABLE meta (key TEXT NOT NULL UNIQUE PRIMARY KEY, value TEXT);
    INSERT INTO urls VALUES (1, 'https://www.rust-lang.org/', 'Rust', 4, 1, 13300000000000000, 0);
    INSERT INTO urls VALUES (2, 'https://docs.rs/', 'Docs.rs', 2, 0, 13300000000000001, 0);
    INSERT INTO urls VALUES (3, 'https://crates.io/', NULL, 1, 0, 13300000000000002, 1);
    INSERT INTO keyword_search_terms VALUES (2, 1, 'Rust', 'rust');
    INSERT INTO keyword_search_terms VALUES (2, 42, 'orphan', 'orphan');
    INSERT INTO meta VALUES ('version', '63');
";

struct ChromeHome {
    home: TempDir,
}

impl ChromeHome {
    fn new() -> Self {
        let home = TempDir::new().expect("tempdir should be created");
        let history = candidate_paths(home.path())[0].clone();
        fs::create_dir_all(history.parent().expect("history has a parent"))
            .expect("profile directory should be created");
        let conn = Connection::open(&history).expect("fixture database should open");
        conn.execute_batch(CHROME_FIXTURE).expect("fixture schema should be created");
        Self { home }
    }

    fn history_path(&self) -> PathBuf {
        candidate_paths(self.home.path())[0].clone()
    }

    fn context(&self) -> AppContext {
        AppContext {
            db_path: None,
            home_dir: Some(self.home.path().to_path_buf()),
        }
    }
}

fn export(context: &AppContext, table: &str) -> Result<Vec<JsonValue>, CliError> {
    let mut out = Vec::new();
    dispatch(
        context,
        Some(Command::Ls(LsArgs {
            tablename: table.to_string(),
        })),
        &mut out,
    )?;
    let text = String::from_utf8(out).expect("output should be utf-8");
    Ok(text
        .lines()
        .map(|line| serde_json::from_str(line).expect("each line should be a JSON object"))
        .collect())
}

fn keys(value: &JsonValue) -> Vec<&str> {
    value
        .as_object()
        .expect("row should be an object")
        .keys()
        .map(String::as_str)
        .collect()
}

#[test]
fn urls_export_prints_one_line_per_row_in_cursor_order() {
    let chrome = ChromeHome::new();
    let lines = export(&chrome.context(), "urls").expect("export should succeed");

    assert_eq!(lines.len(), 3);
    let expected_keys = [
        "id",
        "url",
        "title",
        "visit_count",
        "typed_count",
        "last_visit_time",
        "hidden",
    ];
    for line in &lines {
        assert_eq!(keys(line), expected_keys);
    }
    assert_eq!(lines[0]["url"], "https://www.rust-lang.org/");
    assert_eq!(lines[1]["url"], "https://docs.rs/");
    assert_eq!(lines[2]["title"], JsonValue::Null);
    assert_eq!(lines[0]["last_visit_time"], 13300000000000000_i64);
}

#[test]
fn default_command_exports_urls() {
    let chrome = ChromeHome::new();
    let mut out = Vec::new();
    dispatch(&chrome.context(), None, &mut out).expect("default export should succeed");

    let text = String::from_utf8(out).expect("output should be utf-8");
    assert_eq!(text.lines().count(), 3);
}

#[test]
fn export_leaves_a_snapshot_next_to_the_history_file() {
    let chrome = ChromeHome::new();
    export(&chrome.context(), "meta").expect("export should succeed");

    let copy = snapshot_path(&chrome.history_path());
    assert_eq!(
        fs::read(copy).expect("snapshot should exist"),
        fs::read(chrome.history_path()).expect("history should exist")
    );
}

#[test]
fn keyword_search_terms_are_enriched_with_url_fields() {
    let chrome = ChromeHome::new();
    let lines = export(&chrome.context(), "keyword_search_terms").expect("export should succeed");

    assert_eq!(lines.len(), 2);
    assert_eq!(
        keys(&lines[0]),
        [
            "hidden",
            "last_visit_time",
            "normalized_term",
            "term",
            "title",
            "typed_count",
            "url",
            "visit_count"
        ]
    );
    assert_eq!(lines[0]["url"], "https://www.rust-lang.org/");
    assert_eq!(lines[0]["term"], "Rust");
    assert_eq!(lines[1]["term"], "orphan");
    assert_eq!(lines[1]["url"], JsonValue::Null);
}

#[test]
fn unknown_table_fails_before_any_file_is_touched() {
    let empty_home = TempDir::new().expect("tempdir should be created");
    let context = AppContext {
        db_path: None,
        home_dir: Some(empty_home.path().to_path_buf()),
    };

    let err = export(&context, "not_a_table").expect_err("unknown table should fail");
    assert!(matches!(
        err,
        CliError::History(HistoryError::UnknownTable(ref name)) if name == "not_a_table"
    ));
    assert_eq!(err.to_string(), "not_a_table not supported.");
}

#[test]
fn unknown_table_does_not_snapshot() {
    let chrome = ChromeHome::new();
    export(&chrome.context(), "not_a_table").expect_err("unknown table should fail");
    assert!(!snapshot_path(&chrome.history_path()).exists());
}

#[test]
fn missing_history_reports_no_candidate_matched() {
    let empty_home = TempDir::new().expect("tempdir should be created");
    let context = AppContext {
        db_path: None,
        home_dir: Some(empty_home.path().to_path_buf()),
    };

    let err = export(&context, "urls").expect_err("missing history should fail");
    assert_eq!(err.to_string(), "no candidate locations matched");
}

#[test]
fn unwritable_snapshot_fails_before_querying() {
    let chrome = ChromeHome::new();
    fs::create_dir(snapshot_path(&chrome.history_path()))
        .expect("directory should block the snapshot path");

    let err = export(&chrome.context(), "urls").expect_err("snapshot should fail");
    assert!(matches!(err, CliError::History(HistoryError::CopyWrite { .. })));
}

#[test]
fn db_override_replaces_the_candidate_search() {
    let chrome = ChromeHome::new();
    let elsewhere = TempDir::new().expect("tempdir should be created");
    let override_path = elsewhere.path().join("History");
    fs::copy(chrome.history_path(), &override_path).expect("history should copy");

    let context = AppContext {
        db_path: Some(override_path.clone()),
        home_dir: Some(elsewhere.path().to_path_buf()),
    };
    let lines = export(&context, "meta").expect("export should succeed");

    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["key"], "version");
    assert!(snapshot_path(&override_path).exists());
}

#[test]
fn missing_db_override_is_reported() {
    let dir = TempDir::new().expect("tempdir should be created");
    let context = AppContext {
        db_path: Some(dir.path().join("History")),
        home_dir: None,
    };

    let err = export(&context, "urls").expect_err("missing override should fail");
    assert!(err.to_string().starts_with("history file does not exist:"));
}

#[test]
fn table_missing_from_the_database_is_reported() {
    let chrome = ChromeHome::new();
    let err = export(&chrome.context(), "visits").expect_err("absent table should fail");
    assert!(matches!(err, CliError::History(HistoryError::QueryOpen { .. })));
}
