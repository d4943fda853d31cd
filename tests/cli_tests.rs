mod common;
use common::{ftr, init_db, init_db_with_data, setup_test_db, temp_dir, temp_home, temp_out};
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("cli_init");

    ftr()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_set_and_list_entries() {
    let db_path = setup_test_db("cli_set_list");
    init_db_with_data(&db_path);

    ftr()
        .args(["--db", &db_path, "list", "--month", "2024-03", "--entries"])
        .assert()
        .success()
        .stdout(contains("2024-03-05"))
        .stdout(contains("2024-03-12"));
}

#[test]
fn test_list_calendar_shows_every_day() {
    let db_path = setup_test_db("cli_list_calendar");
    init_db_with_data(&db_path);

    ftr()
        .args(["--db", &db_path, "list", "--month", "2024-02", "--type", "hourly"])
        .assert()
        .success()
        .stdout(contains("29/02/2024"));
}

#[test]
fn test_summary_totals() {
    let db_path = setup_test_db("cli_summary");
    init_db_with_data(&db_path);

    ftr()
        .args(["--db", &db_path, "summary", "--month", "2024-03"])
        .assert()
        .success()
        .stdout(contains("Montant total"))
        .stdout(contains("700,00"));
}

#[test]
fn test_set_rejects_weekend_without_flag() {
    let db_path = setup_test_db("cli_weekend");
    init_db(&db_path);

    ftr()
        .args(["--db", &db_path, "set", "2024-03-02", "1"])
        .assert()
        .failure()
        .stderr(contains("weekend"));

    ftr()
        .args(["--db", &db_path, "set", "2024-03-02", "1", "--weekend"])
        .assert()
        .success();
}

#[test]
fn test_set_rejects_invalid_amount() {
    let db_path = setup_test_db("cli_bad_amount");
    init_db(&db_path);

    ftr()
        .args(["--db", &db_path, "set", "2024-03-04", "2"])
        .assert()
        .failure()
        .stderr(contains("Invalid amount"));

    ftr()
        .args(["--db", &db_path, "set", "2024-03-04", "13", "--type", "hourly"])
        .assert()
        .failure();
}

#[test]
fn test_set_rejects_invalid_date() {
    let db_path = setup_test_db("cli_bad_date");
    init_db(&db_path);

    ftr()
        .args(["--db", &db_path, "set", "2024-13-01", "1"])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));
}

#[test]
fn test_set_zero_clears_day() {
    let db_path = setup_test_db("cli_set_zero");
    init_db_with_data(&db_path);

    ftr()
        .args(["--db", &db_path, "set", "2024-03-05", "0"])
        .assert()
        .success()
        .stdout(contains("Cleared"));

    ftr()
        .args(["--db", &db_path, "list", "--month", "2024-03", "--entries"])
        .assert()
        .success()
        .stdout(contains("2024-03-05").not());
}

#[test]
fn test_settings_show_and_update() {
    let db_path = setup_test_db("cli_settings");
    init_db(&db_path);

    ftr()
        .args([
            "--db",
            &db_path,
            "settings",
            "--emails",
            " a@example.com ,b@example.com,",
            "--siret",
            "123 456 789 00012",
        ])
        .assert()
        .success()
        .stdout(contains("Settings updated"));

    ftr()
        .args(["--db", &db_path, "settings"])
        .assert()
        .success()
        .stdout(contains("a@example.com, b@example.com"))
        .stdout(contains("123 456 789 00012"));
}

#[test]
fn test_report_and_invoice_written_to_out_dir() {
    let db_path = setup_test_db("cli_documents");
    init_db_with_data(&db_path);
    let out = temp_dir("cli_documents");
    let out_str = out.to_string_lossy().to_string();

    ftr()
        .args(["--db", &db_path, "report", "--month", "2024-03", "--out", &out_str])
        .assert()
        .success();

    ftr()
        .args(["--db", &db_path, "invoice", "--month", "2024-03", "--out", &out_str])
        .assert()
        .success()
        .stdout(contains("202403-001"));

    let report = fs::read(out.join("activity-report-2024-03.pdf")).expect("read report");
    let invoice = fs::read(out.join("invoice-2024-03.pdf")).expect("read invoice");
    assert!(report.starts_with(b"%PDF"));
    assert!(invoice.starts_with(b"%PDF"));
}

#[test]
fn test_invoice_overwrite_needs_force() {
    let db_path = setup_test_db("cli_invoice_force");
    init_db_with_data(&db_path);
    let out = temp_dir("cli_invoice_force");
    let out_str = out.to_string_lossy().to_string();

    ftr()
        .args(["--db", &db_path, "invoice", "--month", "2024-03", "--out", &out_str])
        .assert()
        .success();

    ftr()
        .args(["--db", &db_path, "invoice", "--month", "2024-03", "--out", &out_str])
        .write_stdin("n\n")
        .assert()
        .failure();

    // the refused run did not consume a number
    ftr()
        .args([
            "--db", &db_path, "invoice", "--month", "2024-03", "--out", &out_str, "--force",
        ])
        .assert()
        .success()
        .stdout(contains("202403-002"));
}

#[test]
fn test_send_without_email_config_fails() {
    let db_path = setup_test_db("cli_send");
    init_db_with_data(&db_path);

    let home = temp_home("cli_send", None);

    ftr()
        .env("HOME", &home)
        .args(["--db", &db_path, "send", "--month", "2024-03"])
        .assert()
        .failure()
        .stderr(contains("email.service_id"));
}

#[test]
fn test_send_failure_reported_once_and_keeps_invoice_number() {
    let db_path = setup_test_db("cli_send_unreachable");
    init_db_with_data(&db_path);
    let out = temp_dir("cli_send_unreachable");
    let config = format!(
        "database: {}\nlanguage: en\noutput_dir: {}\nemail:\n  service_id: svc\n  template_id: tpl\n  user_id: usr\n  endpoint: http://127.0.0.1:9/api/v1.0/email/send\n",
        db_path,
        out.to_string_lossy()
    );
    let home = temp_home("cli_send_unreachable", Some(&config));

    ftr()
        .env("HOME", &home)
        .args(["--db", &db_path, "settings", "--emails", "client@example.com"])
        .assert()
        .success();

    let output = ftr()
        .env("HOME", &home)
        .args(["--db", &db_path, "send", "--month", "2024-03"])
        .assert()
        .failure()
        .get_output()
        .clone();

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("Email delivery failed").count(), 1, "{stderr}");
    assert_eq!(stderr.lines().filter(|l| !l.trim().is_empty()).count(), 1, "{stderr}");

    ftr()
        .env("HOME", &home)
        .args(["--db", &db_path, "invoice", "--month", "2024-03"])
        .assert()
        .success()
        .stdout(contains("202403-001"));
}

#[test]
fn test_failed_invoice_write_keeps_number() {
    let db_path = setup_test_db("cli_invoice_write_fail");
    init_db_with_data(&db_path);

    // a regular file where the output directory should be
    let blocker = temp_out("cli_invoice_write_fail", "blk");
    fs::write(&blocker, b"x").expect("write blocker");

    ftr()
        .args(["--db", &db_path, "invoice", "--month", "2024-03", "--out", &blocker])
        .assert()
        .failure();

    let out = temp_dir("cli_invoice_write_fail");
    ftr()
        .args([
            "--db",
            &db_path,
            "invoice",
            "--month",
            "2024-03",
            "--out",
            &out.to_string_lossy(),
        ])
        .assert()
        .success()
        .stdout(contains("202403-001"));
}

#[test]
fn test_del_by_id() {
    let db_path = setup_test_db("cli_del");
    init_db_with_data(&db_path);
    let out = temp_out("cli_del", "json");

    ftr()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &out, "--range", "2024-03-05",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("parse json");
    let id = rows[0]["id"].as_str().expect("id").to_string();

    ftr()
        .args(["--db", &db_path, "del", &id])
        .assert()
        .success()
        .stdout(contains("has been deleted"));

    ftr()
        .args(["--db", &db_path, "del", &id])
        .assert()
        .failure()
        .stderr(contains("No entry found"));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("cli_log");
    init_db_with_data(&db_path);

    ftr()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("settings"))
        .stdout(contains("2024-03-05"));
}

#[test]
fn test_backup_compressed() {
    let db_path = setup_test_db("cli_backup");
    init_db_with_data(&db_path);
    let out = temp_out("cli_backup", "sqlite");
    let zip = temp_out("cli_backup", "zip");

    ftr()
        .args(["--db", &db_path, "backup", "--file", &out, "--compress"])
        .assert()
        .success();

    assert!(std::path::Path::new(&zip).exists());
    assert!(!std::path::Path::new(&out).exists());
}
