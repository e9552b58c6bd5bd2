#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ht() -> Command {
    cargo_bin_cmd!("hourtracker")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_hourtracker.db", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_hourtracker_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write `content` to a temp file and return its path
pub fn temp_file(name: &str, ext: &str, content: &str) -> String {
    let p = temp_out(name, ext);
    fs::write(&p, content).expect("write temp file");
    p
}

pub fn init_db(db_path: &str) {
    ht().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Initialize DB and add a small dataset useful for many tests:
/// Event Cover 2025-09-01 7.5h+1h (recorded), Unit Running 2025-09-15 2h, Client X 2025-10-02 4h+0.5h
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);

    ht().args([
        "--db", db_path, "add", "2025-09-01", "--type", "event cover", "--hours", "7.5", "--travel",
        "1", "--recorded", "--name", "Site visit",
    ])
    .assert()
    .success();

    ht().args([
        "--db", db_path, "add", "2025-09-15", "--type", "Unit Running", "--hours", "2",
    ])
    .assert()
    .success();

    ht().args([
        "--db", db_path, "add", "2025-10-02", "--type", "Client X", "--hours", "4", "--travel",
        "0.5", "--notes", "kickoff",
    ])
    .assert()
    .success();
}

/// Open the test DB through the library store.
pub fn store(db_path: &str) -> hourtracker::db::EntryStore {
    hourtracker::db::EntryStore::new(db_path)
}
