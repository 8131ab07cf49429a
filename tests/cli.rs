use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn expenses(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expenses").unwrap();
    cmd.env("EXPENSE_TRACKER_CONFIG_DIR", config_dir.path())
        .env_remove("EXPENSE_TRACKER_BUDGET")
        .env("RUST_LOG", "off");
    cmd
}

#[test]
fn summary_prints_dashboard_and_analysis() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .args([
            "summary",
            "--budget",
            "500",
            "--expense",
            "Coffee:4.50:Food",
            "--expense",
            "Bus:2.00:Transport",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Spent:  $6.50"))
        .stdout(predicate::str::contains("Remaining:    $493.50 (+493.50)"))
        .stdout(predicate::str::contains("Coffee"))
        .stdout(predicate::str::contains("Highest spending category: Food ($4.50)"))
        .stdout(predicate::str::contains("Average per transaction:   $3.25"))
        .stdout(predicate::str::contains("WARNING").not());
}

#[test]
fn summary_over_budget_shows_banner() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .args(["summary", "-b", "100", "-e", "Rent:150:Utilities"])
        .assert()
        .success()
        .stdout(predicate::str::contains("You are over budget by $50.00!"))
        .stdout(predicate::str::contains("-$50.00"));
}

#[test]
fn summary_json_uses_cents() {
    let dir = TempDir::new().unwrap();

    let output = expenses(&dir)
        .args(["summary", "--budget", "100", "-e", "Lunch:85:Food", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["summary"]["total_spent"], 8500);
    assert_eq!(value["summary"]["remaining"], 1500);
    assert_eq!(value["summary"]["status"]["state"], "near_limit");
    assert_eq!(value["analysis"]["expense_count"], 1);
}

#[test]
fn invalid_expense_is_skipped_with_notice() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .args(["summary", "-e", "Gift:0:Shopping", "-e", "Tea:3:Food"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Please enter a description and a valid amount.",
        ))
        .stdout(predicate::str::contains("Total Spent:  $3.00"))
        .stdout(predicate::str::contains("Gift").not());
}

#[test]
fn empty_summary_shows_placeholders() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Start by adding an expense!"))
        .stdout(predicate::str::contains(
            "Add some expenses to see the spending analysis.",
        ))
        .stdout(predicate::str::contains("Budget Usage").not());
}

#[test]
fn malformed_expense_is_an_argument_error() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .args(["summary", "-e", "Coffee:4.50:Groceries"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown category 'Groceries'"));
}

#[test]
fn negative_budget_is_an_argument_error() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .args(["summary", "--budget=-10"])
        .assert()
        .code(2);
}

#[test]
fn categories_lists_fixed_set() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Food (default)"))
        .stdout(predicate::str::contains("6. Other"));
}

#[test]
fn config_init_writes_settings() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default settings"));
    assert!(dir.path().join("config.json").exists());

    expenses(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Currency symbol:   $"));
}

#[test]
fn configured_currency_and_budget_are_used() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{ "currency_symbol": "€", "default_budget": 2000 }"#,
    )
    .unwrap();

    expenses(&dir)
        .args(["summary", "-e", "Book:12:Shopping"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Budget: €20.00"))
        .stdout(predicate::str::contains("Remaining:    €8.00"));
}

#[test]
fn invalid_settings_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{ "near_limit_ratio": 3.0 }"#,
    )
    .unwrap();

    expenses(&dir).arg("categories").assert().code(1);
}

#[test]
fn summary_stderr_holds_only_notices_at_default_log_level() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .env_remove("RUST_LOG")
        .args(["summary", "-e", "Tea:3:Food", "-e", "Gift:0:Shopping"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Skipped 'Gift:0'"))
        .stderr(predicate::str::contains("expense added").not());
}
