use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const LEDGER: &str = "\
AP Period,Name,Account Name,Amount
03 March,A,Cross Charge:Consulting,100.00
03 March,A,Travel:Flights,-40.00
03 March,B,Travel:Hotels,-60.00
GRAND TOTAL,,,0.00
";

fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

fn breakdown(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("breakdown").unwrap();
    cmd.env("LEDGER_BREAKDOWN_DIR", config_dir.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn report_json_for_explicit_month() {
    let dir = TempDir::new().unwrap();
    let ledger = write_file(dir.path(), "march.csv", LEDGER);

    breakdown(&dir)
        .args(["report", ledger.to_str().unwrap(), "--month", "2023-03", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""total_working_hours": "184""#))
        .stdout(predicate::str::contains(r#""total_revenue": "100.00""#))
        .stdout(predicate::str::contains(r#""profit_loss": "0.00""#))
        .stdout(predicate::str::contains(r#""schema_version": "1.0.0""#));
}

#[test]
fn report_text_derives_month_from_ledger() {
    let dir = TempDir::new().unwrap();
    let ledger = write_file(dir.path(), "march.csv", LEDGER);

    breakdown(&dir)
        .args(["report", ledger.to_str().unwrap(), "--year", "2023"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ledger Breakdown: March 2023 (2023-03)"))
        .stdout(predicate::str::contains("$100.00"))
        .stdout(predicate::str::contains("TRAVEL"))
        .stdout(predicate::str::contains("Period: 2023-03-01 to 2023-03-31"));
}

#[test]
fn report_csv_format() {
    let dir = TempDir::new().unwrap();
    let ledger = write_file(dir.path(), "march.csv", LEDGER);

    breakdown(&dir)
        .args(["report", ledger.to_str().unwrap(), "-m", "2023-03", "-f", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Month,Person,Metric,Category,Amount"));
}

#[test]
fn report_rejects_malformed_amount() {
    let dir = TempDir::new().unwrap();
    let ledger = write_file(
        dir.path(),
        "bad.csv",
        "AP Period,Name,Account Name,Amount\n03 March,A,Travel:Flights,12abc\n",
    );

    breakdown(&dir)
        .args(["report", ledger.to_str().unwrap(), "--month", "2023-03"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed amount"));
}

#[test]
fn report_rejects_bad_month() {
    let dir = TempDir::new().unwrap();
    let ledger = write_file(dir.path(), "march.csv", LEDGER);

    breakdown(&dir)
        .args(["report", ledger.to_str().unwrap(), "--month", "2023-13"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid period"));
}

#[test]
fn report_export_dir_writes_bundle() {
    let dir = TempDir::new().unwrap();
    let ledger = write_file(dir.path(), "march.csv", LEDGER);
    let exports = dir.path().join("exports");

    breakdown(&dir)
        .args(["report", ledger.to_str().unwrap(), "--month", "2023-03", "--export-dir"])
        .arg(&exports)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exports written to:"));

    let bundles: Vec<_> = std::fs::read_dir(&exports)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect();
    assert_eq!(bundles.len(), 1);

    let bundle = &bundles[0];
    let name = bundle.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("Breakdown-march-"));
    for file in ["report.json", "report.yaml", "report.csv", "transactions.csv"] {
        assert!(bundle.join(file).exists(), "missing {}", file);
    }
}

#[test]
fn transactions_lists_categorized_rows() {
    let dir = TempDir::new().unwrap();
    let ledger = write_file(dir.path(), "march.csv", LEDGER);

    breakdown(&dir)
        .args(["transactions", ledger.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Period,Person,Account,Category,Kind,Amount"))
        .stdout(predicate::str::contains("03 March,B,Travel:Hotels,Travel,expense,-60.00"))
        .stdout(predicate::str::contains("GRAND TOTAL").not());
}

#[test]
fn init_writes_settings() {
    let dir = TempDir::new().unwrap();

    breakdown(&dir).arg("init").assert().success();

    let settings = std::fs::read_to_string(dir.path().join("config.json")).unwrap();
    assert!(settings.contains("GRAND TOTAL"));
}

#[test]
fn custom_columns_from_settings() {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "config.json",
        r#"{"columns": {"person": "Employee", "amount": "Value"}}"#,
    );
    let ledger = write_file(
        dir.path(),
        "renamed.csv",
        "AP Period,Employee,Account Name,Value\n04 April,C,Meals:Team,-25.00\n",
    );

    breakdown(&dir)
        .args(["report", ledger.to_str().unwrap(), "--month", "2024-04", "-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""total_expenses": "-25.00""#));
}
