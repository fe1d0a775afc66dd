#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// The binary with HOME pointed at an empty temp dir, so no user config is read
pub fn sched() -> Command {
    let home = env::temp_dir().join("studiosched_test_home");
    let mut cmd = cargo_bin_cmd!("studiosched");
    cmd.env("HOME", &home).env("APPDATA", &home);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_studiosched.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_studiosched_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize a fresh DB through the CLI (`--test` skips the config file)
pub fn init_db(db_path: &str) {
    sched()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Book a slot as a manager and expect success
pub fn book(db_path: &str, date: &str, start: &str, end: &str, studio: &str, extra: &[&str]) {
    let mut args = vec![
        "--db", db_path, "--role", "manager", "book", date, start, end, "--studio", studio,
    ];
    args.extend_from_slice(extra);
    sched().args(&args).assert().success();
}
