use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn btrack(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("btrack").unwrap();
    cmd.env("BUDGET_TRACKER_DATA_DIR", dir.path());
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_no_command_prints_hint() {
    let dir = TempDir::new().unwrap();
    btrack(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("btrack --help"));
}

#[test]
fn test_init_creates_database() {
    let dir = TempDir::new().unwrap();
    btrack(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"))
        .stdout(predicate::str::contains("budget_tracker.db"));

    assert!(dir.path().join("budget_tracker.db").exists());
    assert!(dir.path().join("config.json").exists());
}

#[test]
fn test_expense_add_and_list() {
    let dir = TempDir::new().unwrap();
    btrack(&dir)
        .args(["expense", "add", "Groceries", "49.99", "2024-12-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ID: 1"));

    btrack(&dir)
        .args(["expense", "add", "Transport", "20", "2024-12-02"])
        .assert()
        .success();

    btrack(&dir)
        .args(["expense", "list", "--category", "Groceries"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$49.99"))
        .stdout(predicate::str::contains("Transport").not());

    btrack(&dir)
        .args(["expense", "list", "--category", " Groceries "])
        .assert()
        .success()
        .stdout(predicate::str::contains("$49.99"));
}

#[test]
fn test_invalid_amount_fails() {
    let dir = TempDir::new().unwrap();
    btrack(&dir)
        .args(["expense", "add", "Groceries", "-5", "2024-12-01"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid amount"));

    btrack(&dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses found."));
}

#[test]
fn test_invalid_date_fails() {
    let dir = TempDir::new().unwrap();
    btrack(&dir)
        .args(["income", "add", "Salary", "2000", "2024-13-40"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn test_delete_missing_is_reported_not_fatal() {
    let dir = TempDir::new().unwrap();
    btrack(&dir)
        .args(["income", "add", "Salary", "2000", "2024-12-01"])
        .assert()
        .success();

    btrack(&dir)
        .args(["income", "delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("deleted successfully"));

    btrack(&dir)
        .args(["income", "delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Income not found: 1"));
}

#[test]
fn test_update_expense() {
    let dir = TempDir::new().unwrap();
    btrack(&dir)
        .args(["expense", "add", "Dining", "30", "2024-12-04"])
        .assert()
        .success();

    btrack(&dir)
        .args(["expense", "update", "1", "--amount", "45.50", "--category", "Eating out"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$45.50"))
        .stdout(predicate::str::contains("Eating out"));

    btrack(&dir)
        .args(["expense", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-12-04"));
}

#[test]
fn test_budget_summary_flags_over() {
    let dir = TempDir::new().unwrap();
    btrack(&dir)
        .args(["budget", "set", "Groceries", "200"])
        .assert()
        .success();
    for amount in ["50", "60", "100"] {
        btrack(&dir)
            .args(["expense", "add", "Groceries", amount, "2024-12-01"])
            .assert()
            .success();
    }

    btrack(&dir)
        .args(["budget", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$210.00"))
        .stdout(predicate::str::contains("1 category over budget."));
}

#[test]
fn test_budget_show_missing() {
    let dir = TempDir::new().unwrap();
    btrack(&dir)
        .args(["budget", "show", "Rent"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget not found: Rent"));
}

#[test]
fn test_goal_progress() {
    let dir = TempDir::new().unwrap();
    btrack(&dir)
        .args(["goal", "add", "Vacation", "10000"])
        .assert()
        .success();
    btrack(&dir)
        .args(["goal", "contribute", "1", "5000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$5000.00"));

    btrack(&dir)
        .args(["goal", "progress", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("50.0%"));
}

#[test]
fn test_goal_cannot_go_negative() {
    let dir = TempDir::new().unwrap();
    btrack(&dir)
        .args(["goal", "add", "Laptop", "2000"])
        .assert()
        .success();

    btrack(&dir)
        .args(["goal", "withdraw", "1", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));
}

#[test]
fn test_summary_json_with_sample_data() {
    let dir = TempDir::new().unwrap();
    btrack(&dir)
        .args(["init", "--sample"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sample expenses"));

    btrack(&dir)
        .args(["summary", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total_income\": 295000"))
        .stdout(predicate::str::contains("\"status\": \"within_budget\""));
}

#[test]
fn test_summary_text() {
    let dir = TempDir::new().unwrap();
    btrack(&dir)
        .args(["init", "--sample"])
        .assert()
        .success();

    btrack(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("$2710.00"))
        .stdout(predicate::str::contains("within budget"));
}

#[test]
fn test_config_reports_schema_after_init() {
    let dir = TempDir::new().unwrap();
    btrack(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Database not created yet"));

    btrack(&dir).arg("init").assert().success();

    btrack(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Schema version: 1"));
}

#[test]
fn test_config_shows_paths() {
    let dir = TempDir::new().unwrap();
    btrack(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("budget_tracker.db"));
}
