#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn workshop(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("workshop").unwrap();
    cmd.current_dir(dir.path()).env("WORKSHOP_ROOT", dir.path());
    cmd
}

// ---------------------------------------------------------------------------
// workshop init
// ---------------------------------------------------------------------------

#[test]
fn init_creates_directory_tree() {
    let dir = TempDir::new().unwrap();
    workshop(&dir)
        .args(["init", "--project", "field-study"])
        .assert()
        .success();

    assert!(dir.path().join(".workshop/config.yaml").exists());
    assert!(dir.path().join("data").is_dir());
    assert!(dir.path().join("uploads").is_dir());

    let config = std::fs::read_to_string(dir.path().join(".workshop/config.yaml")).unwrap();
    assert!(config.contains("project: field-study"));
}

#[test]
fn init_refuses_to_reinitialize() {
    let dir = TempDir::new().unwrap();
    workshop(&dir).arg("init").assert().success();
    workshop(&dir)
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
}

// ---------------------------------------------------------------------------
// workshop product
// ---------------------------------------------------------------------------

#[test]
fn add_show_list_product() {
    let dir = TempDir::new().unwrap();
    workshop(&dir)
        .args(["product", "add", "Acme Tool", "--workstream", "Geology"])
        .assert()
        .success()
        .stdout(predicate::str::contains("acme-tool"));

    workshop(&dir)
        .args(["product", "show", "acme-tool"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"product_name\": \"Acme Tool\""))
        .stdout(predicate::str::contains("technical_session"));

    workshop(&dir)
        .args(["product", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Geology"));
}

#[test]
fn add_rejects_unsluggable_name() {
    let dir = TempDir::new().unwrap();
    workshop(&dir)
        .args(["product", "add", "!!!"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid product name"));
}

#[test]
fn add_rejects_duplicate_slug() {
    let dir = TempDir::new().unwrap();
    workshop(&dir)
        .args(["product", "add", "Acme Tool"])
        .assert()
        .success();
    workshop(&dir)
        .args(["product", "add", "Acme  Tool!"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn edit_merges_partial_json() {
    let dir = TempDir::new().unwrap();
    workshop(&dir)
        .args(["product", "add", "Acme Tool", "--workstream", "Geology"])
        .assert()
        .success();

    workshop(&dir)
        .args([
            "product",
            "edit",
            "acme-tool",
            "--data",
            r#"{"technical_session": {"part1_overview": {"overview_history": "built in 2019"}}}"#,
        ])
        .assert()
        .success();

    workshop(&dir)
        .args(["product", "show", "acme-tool"])
        .assert()
        .success()
        .stdout(predicate::str::contains("built in 2019"))
        .stdout(predicate::str::contains("Geology"));
}

#[test]
fn edit_unknown_product_fails() {
    let dir = TempDir::new().unwrap();
    workshop(&dir)
        .args(["product", "edit", "ghost", "--data", "{}"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("product not found"));
}

#[test]
fn delete_requires_yes() {
    let dir = TempDir::new().unwrap();
    workshop(&dir)
        .args(["product", "add", "Acme Tool"])
        .assert()
        .success();

    workshop(&dir)
        .args(["product", "delete", "acme-tool"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--yes"));

    workshop(&dir)
        .args(["product", "delete", "acme-tool", "--yes"])
        .assert()
        .success();

    workshop(&dir)
        .args(["product", "show", "acme-tool"])
        .assert()
        .failure();
}

// ---------------------------------------------------------------------------
// workshop owner
// ---------------------------------------------------------------------------

#[test]
fn owner_edit_creates_record_with_verbatim_name() {
    let dir = TempDir::new().unwrap();
    workshop(&dir)
        .args([
            "owner",
            "edit",
            "J. Smith",
            "--data",
            r#"{"part6_wrapup": {"summary_validation": "agreed"}}"#,
        ])
        .assert()
        .success();

    workshop(&dir)
        .args(["owner", "show", "J. Smith"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"owner_name\": \"J. Smith\""))
        .stdout(predicate::str::contains("agreed"));
}

// ---------------------------------------------------------------------------
// workshop import / export
// ---------------------------------------------------------------------------

#[test]
fn import_from_catalog_csv() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("uploads")).unwrap();
    std::fs::write(
        dir.path().join("uploads/product-catalog.csv"),
        "Name,Workstream,Status,Owner,Users,Extra,Operator,C7,C8,C9,Developer\n\
         Acme Tool,Geology,Active,J. Smith,Field team,,M. Jones,,,,D. Lee\n",
    )
    .unwrap();

    workshop(&dir)
        .arg("import")
        .assert()
        .success()
        .stdout(predicate::str::contains("+ acme-tool"));

    workshop(&dir)
        .args(["owner", "show", "J. Smith"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Acme Tool"));
}

#[test]
fn export_writes_csv() {
    let dir = TempDir::new().unwrap();
    workshop(&dir)
        .args(["product", "add", "Acme Tool"])
        .assert()
        .success();

    workshop(&dir)
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("product_id,product_name"))
        .stdout(predicate::str::contains("acme-tool"));

    let out = dir.path().join("all-products.csv");
    workshop(&dir)
        .args(["export", "--output", out.to_str().unwrap()])
        .assert()
        .success();
    assert!(out.exists());
}

// ---------------------------------------------------------------------------
// workshop backup
// ---------------------------------------------------------------------------

#[test]
fn backup_export_and_restore_round_trip() {
    let dir = TempDir::new().unwrap();
    workshop(&dir)
        .args(["product", "add", "Acme Tool"])
        .assert()
        .success();

    let backup_file = dir.path().join("backup.json");
    workshop(&dir)
        .args(["backup", "export", "--output", backup_file.to_str().unwrap()])
        .assert()
        .success();

    workshop(&dir)
        .args(["product", "delete", "acme-tool", "--yes"])
        .assert()
        .success();

    // Restore refuses without --yes.
    workshop(&dir)
        .args(["backup", "restore", backup_file.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--yes"));

    workshop(&dir)
        .args(["backup", "restore", backup_file.to_str().unwrap(), "--yes"])
        .assert()
        .success();

    workshop(&dir)
        .args(["product", "show", "acme-tool"])
        .assert()
        .success();
}

#[test]
fn restore_rejects_invalid_backup() {
    let dir = TempDir::new().unwrap();
    let bad = dir.path().join("bad.json");
    std::fs::write(&bad, r#"{"products": {}}"#).unwrap();

    workshop(&dir)
        .args(["backup", "restore", bad.to_str().unwrap(), "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid backup"));
}
