#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ftr() -> Command {
    cargo_bin_cmd!("ftracker")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_ftracker.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Fresh, empty output directory inside tempdir
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_ftracker_out", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

/// Fresh HOME directory, optionally holding an `.ftracker/ftracker.conf`
pub fn temp_home(name: &str, config: Option<&str>) -> PathBuf {
    let home = temp_dir(&format!("{}_home", name));
    if let Some(yaml) = config {
        let dir = home.join(".ftracker");
        fs::create_dir_all(&dir).expect("create config dir");
        fs::write(dir.join("ftracker.conf"), yaml).expect("write config");
    }
    home
}

pub fn init_db(db_path: &str) {
    ftr()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Initialize DB, configure rates and record a small March 2024 dataset
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);

    ftr()
        .args([
            "--db",
            db_path,
            "settings",
            "--daily-rate",
            "500",
            "--hourly-rate",
            "50",
            "--name",
            "Jeanne Martin",
        ])
        .assert()
        .success();

    ftr()
        .args(["--db", db_path, "set", "2024-03-05", "1"])
        .assert()
        .success();

    ftr()
        .args(["--db", db_path, "set", "2024-03-12", "4", "--type", "hourly"])
        .assert()
        .success();
}
