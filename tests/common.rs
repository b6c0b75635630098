#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn lsl() -> Command {
    cargo_bin_cmd!("lessonlog")
}

/// Create a unique store path inside the system temp dir and remove any existing file
pub fn setup_test_store(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_lessonlog.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize a store of the given backend (config file untouched)
pub fn init_store(store: &str, backend: &str) {
    lsl()
        .args(["--db", store, "--backend", backend, "--test", "init"])
        .assert()
        .success();
}

pub fn add_lesson(store: &str, backend: &str, date: &str, kid: &str, amount: &str) {
    lsl()
        .args([
            "--db", store, "--backend", backend, "add", "--date", date, "--kid", kid, "--amount",
            amount,
        ])
        .assert()
        .success();
}

/// Initialize a store and add the three reference lessons:
/// Alex 40 and Sam 35 on 2024-05-01, Alex 40 on 2024-05-02.
pub fn init_store_with_data(store: &str, backend: &str) {
    init_store(store, backend);
    add_lesson(store, backend, "2024-05-01", "Alex", "40");
    add_lesson(store, backend, "2024-05-01", "Sam", "35");
    add_lesson(store, backend, "2024-05-02", "Alex", "40");
}
