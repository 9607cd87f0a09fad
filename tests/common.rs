#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rhabits::db::initialize::init_db;
use rhabits::db::pool::DbPool;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rhb() -> Command {
    cargo_bin_cmd!("rhabits")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rhabits.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rhabits_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Fresh DB created through `init`, as a user would.
pub fn init_test_db(name: &str) -> String {
    let db_path = setup_test_db(name);
    rhb()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();
    db_path
}

/// Create a habit via the CLI.
pub fn create_habit(db_path: &str, name: &str, periodicity: &str) {
    rhb()
        .args(["--db", db_path, "create", name, "-p", periodicity])
        .assert()
        .success();
}

/// Check off a habit via the CLI at the given time.
pub fn check_at(db_path: &str, id: &str, at: &str) {
    rhb()
        .args(["--db", db_path, "check", id, "--at", at])
        .assert()
        .success();
}

/// In-memory store with the current schema.
pub fn memory_store() -> DbPool {
    let pool = DbPool::in_memory().expect("open in-memory db");
    init_db(&pool.conn).expect("init db");
    pool
}
