mod common;
use common::{init_store_with_data, lsl, setup_test_store, temp_out};
use std::fs;
use std::path::Path;

#[test]
fn test_export_csv_all() {
    let store = setup_test_store("export_csv_all", "sqlite");
    init_store_with_data(&store, "sqlite");

    let out = temp_out("export_csv_all", "csv");

    lsl()
        .args([
            "--db", &store, "--backend", "sqlite", "export", "--format", "csv", "--file", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("Date,Kid,Amount,Notes"));
    assert!(content.contains("2024-05-01,Sam,35,"));
    assert!(content.contains("2024-05-02,Alex,40,"));
}

#[test]
fn test_export_json_period() {
    let store = setup_test_store("export_json_period", "sqlite");
    init_store_with_data(&store, "sqlite");

    let out = temp_out("export_json_period", "json");

    lsl()
        .args([
            "--db",
            &store,
            "--backend",
            "sqlite",
            "export",
            "--format",
            "json",
            "--file",
            &out,
            "--period",
            "2024-05-02",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("2024-05-02"));
    assert!(!content.contains("2024-05-01"));
}

#[test]
fn test_export_xlsx_creates_file() {
    let store = setup_test_store("export_xlsx", "sqlite");
    init_store_with_data(&store, "sqlite");

    let out = temp_out("export_xlsx", "xlsx");

    lsl()
        .args([
            "--db", &store, "--backend", "sqlite", "export", "--format", "xlsx", "--file", &out,
        ])
        .assert()
        .success();

    let meta = fs::metadata(&out).expect("xlsx written");
    assert!(meta.len() > 0);
}

#[test]
fn test_backup_compressed() {
    let store = setup_test_store("backup_zip", "sqlite");
    init_store_with_data(&store, "sqlite");

    let out = temp_out("backup_zip", "sqlite");
    let zip = Path::new(&out).with_extension("zip");
    fs::remove_file(&zip).ok();

    lsl()
        .args([
            "--db",
            &store,
            "--backend",
            "sqlite",
            "backup",
            "--file",
            &out,
            "--compress",
        ])
        .assert()
        .success();

    assert!(zip.exists());
    assert!(!Path::new(&out).exists());
}
