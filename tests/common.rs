#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, FixedOffset, TimeZone};
use rplanner::models::{EventForm, RecurrenceKind};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rpl() -> Command {
    cargo_bin_cmd!("rplanner")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rplanner.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rplanner_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the DB through the CLI without touching the config file
pub fn init_db(db_path: &str) {
    rpl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Anchor at `y-m-d h:mi` in UTC
pub fn utc(y: i32, m: u32, d: u32, h: u32, mi: u32) -> DateTime<FixedOffset> {
    FixedOffset::east_opt(0)
        .unwrap()
        .with_ymd_and_hms(y, m, d, h, mi, 0)
        .unwrap()
}

pub fn form(anchor: DateTime<FixedOffset>, kind: RecurrenceKind, notes: &str) -> EventForm {
    EventForm::new(anchor, kind, notes).expect("valid form")
}

/// Fresh directory used as HOME (and APPDATA) so the default config dir starts empty
pub fn temp_home(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rplanner_home", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp home");
    path
}
