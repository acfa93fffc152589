use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};
use tempfile::TempDir;

const BIN_NAME: &str = "pace";

fn pace(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("PACE_DATA_DIR", dir.path());
    cmd.env_remove("PACE_LOG");
    cmd
}

fn initialized() -> TempDir {
    let dir = TempDir::new().expect("temp dir");
    pace(&dir).arg("init").assert().success();
    dir
}

#[test]
fn init_creates_default_categories() {
    let dir = TempDir::new().expect("temp dir");
    pace(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Initialization complete!"));

    assert!(dir.path().join("data").join("categories.json").exists());
    assert!(dir.path().join("config.json").exists());

    pace(&dir)
        .arg("categories")
        .assert()
        .success()
        .stdout(contains("Essentials").and(contains("Dining Out (dining)")));
}

#[test]
fn progress_without_budget_reports_no_budget() {
    let dir = initialized();
    pace(&dir)
        .args(["progress", "--period", "2025-06", "--today", "2025-06-10"])
        .assert()
        .success()
        .stdout(contains("No budget set for 2025-06."));
}

#[test]
fn budget_spend_and_progress() {
    let dir = initialized();
    pace(&dir)
        .args(["budget", "set", "1000", "--period", "2025-06"])
        .assert()
        .success()
        .stdout(contains("Budget for 2025-06 set to $1000.00"));

    pace(&dir)
        .args(["spend", "add", "groceries", "250", "--date", "2025-06-05"])
        .assert()
        .success()
        .stdout(contains("Recorded $250.00 in 'groceries'"));

    pace(&dir)
        .args(["progress", "--period", "2025-06", "--today", "2025-06-15"])
        .assert()
        .success()
        .stdout(
            contains("Spent:      $250.00 of $1000.00 (25%)")
                .and(contains("Pace:       Ahead"))
                .and(contains("No category budgets set.")),
        );
}

#[test]
fn edit_saves_locked_allocations() {
    let dir = initialized();
    pace(&dir)
        .args(["budget", "set", "1000", "--period", "2025-06"])
        .assert()
        .success();

    pace(&dir)
        .args(["edit", "--period", "2025-06", "groceries=400", "dining=100"])
        .assert()
        .success()
        .stdout(
            contains("Allocated: $500.00 of $1000.00 ($500.00 unallocated)")
                .and(contains("Saved 2 category allocations.")),
        );

    pace(&dir)
        .args(["budget", "show", "--period", "2025-06"])
        .assert()
        .success()
        .stdout(contains("Groceries").and(contains("$400.00")).and(contains("(locked)")));
}

#[test]
fn edit_dry_run_does_not_save() {
    let dir = initialized();
    pace(&dir)
        .args(["budget", "set", "600", "--period", "2025-06"])
        .assert()
        .success();

    pace(&dir)
        .args(["edit", "--period", "2025-06", "--dry-run", "travel=200"])
        .assert()
        .success()
        .stdout(contains("Dry run, nothing saved."));

    pace(&dir)
        .args(["budget", "show", "--period", "2025-06"])
        .assert()
        .success()
        .stdout(contains("Travel").not());
}

#[test]
fn review_flags_over_budget_category() {
    let dir = initialized();
    pace(&dir)
        .args(["budget", "set", "1000", "--period", "2025-06"])
        .assert()
        .success();
    pace(&dir)
        .args(["budget", "category", "dining", "100", "--period", "2025-06"])
        .assert()
        .success()
        .stdout(contains("Set 'Dining Out' to $100.00 for 2025-06"));
    pace(&dir)
        .args(["spend", "add", "Dining Out", "120", "--date", "2025-06-03"])
        .assert()
        .success();

    pace(&dir)
        .args([
            "review",
            "--period",
            "2025-06",
            "--today",
            "2025-06-20",
            "--order",
            "group",
        ])
        .assert()
        .success()
        .stdout(
            contains("Lifestyle  $120.00 of $100.00 (120%)")
                .and(contains("OVER"))
                .and(contains("1 over budget")),
        );
}

#[test]
fn unknown_category_is_rejected() {
    let dir = initialized();
    pace(&dir)
        .args(["spend", "add", "yachts", "5", "--date", "2025-06-01"])
        .assert()
        .failure()
        .stderr(contains("not found: yachts"));
}

#[test]
fn invalid_review_order_is_rejected() {
    let dir = initialized();
    pace(&dir)
        .args(["review", "--order", "sideways"])
        .assert()
        .failure()
        .stderr(contains("Unknown review order"));
}

#[test]
fn delete_budget() {
    let dir = initialized();
    pace(&dir)
        .args(["budget", "set", "300", "--period", "2025-06"])
        .assert()
        .success();
    pace(&dir)
        .args(["budget", "delete", "--period", "2025-06"])
        .assert()
        .success()
        .stdout(contains("Budget for 2025-06 deleted"));
    pace(&dir)
        .args(["budget", "delete", "--period", "2025-06"])
        .assert()
        .success()
        .stdout(contains("No budget to delete for 2025-06."));
}

#[test]
fn budgets_for_different_months_coexist() {
    let dir = initialized();
    pace(&dir)
        .args(["budget", "set", "800", "--period", "2025-06", "--no-renew"])
        .assert()
        .success();
    pace(&dir)
        .args(["budget", "set", "500", "--period", "2025-07"])
        .assert()
        .success();

    pace(&dir)
        .args(["budget", "show", "--period", "2025-06"])
        .assert()
        .success()
        .stdout(contains("$800.00"));
    pace(&dir)
        .args(["budget", "list"])
        .assert()
        .success()
        .stdout(contains("2025-06").and(contains("2025-07")).and(contains("$500.00")));
}

#[test]
fn oversized_amount_is_rejected() {
    let dir = initialized();
    pace(&dir)
        .args(["budget", "set", "100000000000000000", "--period", "2025-06"])
        .assert()
        .failure()
        .stderr(contains("Amount too large"));
    pace(&dir)
        .args(["spend", "add", "groceries", "--", "--5"])
        .assert()
        .failure()
        .stderr(contains("Invalid money format"));
}
