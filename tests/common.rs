#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use attendo::core::recorder;
use attendo::models::EventKind;
use attendo::store::EntityStore;
use chrono::{Local, TimeZone};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn att() -> Command {
    cargo_bin_cmd!("attendo")
}

/// Create a unique test data dir inside the system temp dir and remove any
/// leftover from a previous run
pub fn setup_test_data(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_attendo_data", name));
    let data_dir = path.to_string_lossy().to_string();
    fs::remove_dir_all(&data_dir).ok();
    data_dir
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the data dir (seeds sample companies) and add two users
pub fn init_with_users(data_dir: &str) {
    att()
        .args(["--data", data_dir, "--test", "init"])
        .assert()
        .success();

    att()
        .args([
            "--data", data_dir, "user", "add", "--name", "Dana Levi", "--company", "1",
        ])
        .assert()
        .success();

    att()
        .args([
            "--data", data_dir, "user", "add", "--name", "Avi Cohen", "--company", "2",
        ])
        .assert()
        .success();
}

/// Seed `n` alternating clock events directly via the library API, one minute
/// apart, and return their record ids
pub fn seed_records(data_dir: &str, user_id: i64, n: usize) -> Vec<i64> {
    let mut store = EntityStore::open(data_dir).expect("open store");
    let mut ids = Vec::new();
    for i in 0..n {
        let kind = if i % 2 == 0 {
            EventKind::ClockIn
        } else {
            EventKind::ClockOut
        };
        let ts = Local
            .with_ymd_and_hms(2025, 6, 2, 8, 0, 0)
            .unwrap()
            + chrono::Duration::minutes(i as i64);
        let rec = recorder::record_at(&mut store, user_id, kind, ts).expect("record event");
        ids.push(rec.id);
    }
    ids
}
