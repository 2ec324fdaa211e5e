use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn finboard(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("finboard").unwrap();
    cmd.env("FINBOARD_DATA_DIR", dir.path());
    cmd
}

fn logged_in() -> TempDir {
    let dir = TempDir::new().unwrap();
    finboard(&dir).arg("login").assert().success();
    dir
}

#[test]
fn status_starts_logged_out() {
    let dir = TempDir::new().unwrap();
    finboard(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged out"));

    let state = std::fs::read_to_string(dir.path().join("data").join("state.json")).unwrap();
    assert!(state.contains("\"auth\": \"false\""));
}

#[test]
fn commands_require_login() {
    let dir = TempDir::new().unwrap();
    finboard(&dir)
        .args(["expense", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not logged in"));
}

#[test]
fn login_persists_until_logout() {
    let dir = logged_in();
    finboard(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged in"));

    finboard(&dir).arg("logout").assert().success();
    finboard(&dir)
        .arg("dashboard")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not logged in"));
}

#[test]
fn dashboard_shows_totals_and_signed_amounts() {
    let dir = logged_in();
    finboard(&dir)
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("$5,000.00"))
        .stdout(predicate::str::contains("$2,969.40"))
        .stdout(predicate::str::contains("$2,030.60"))
        .stdout(predicate::str::contains("+$2,500.00"))
        .stdout(predicate::str::contains("-$64.75"))
        .stdout(predicate::str::contains("3 category suggestion(s) pending"));
}

#[test]
fn expense_add_reports_missing_fields() {
    let dir = logged_in();
    finboard(&dir)
        .args(["expense", "add"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Missing required fields: description, amount, category, payment method",
        ));
}

#[test]
fn expense_add_blank_arguments_are_missing_fields() {
    let dir = logged_in();
    finboard(&dir)
        .args(["expense", "add", "", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Missing required fields: description, amount, category, payment method",
        ))
        .stderr(predicate::str::contains("Invalid money format").not());
}

#[test]
fn expense_add_succeeds() {
    let dir = logged_in();
    finboard(&dir)
        .args([
            "expense",
            "add",
            "Museum Tickets",
            "24.00",
            "--category",
            "entertainment",
            "--payment",
            "debit-card",
            "--date",
            "2025-05-19",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense added successfully!"))
        .stdout(predicate::str::contains("2025-05-19 Museum Tickets -$24.00"));
}

#[test]
fn expense_list_recent_window() {
    let dir = logged_in();
    finboard(&dir)
        .args(["expense", "list", "--recent", "--as-of", "2025-05-18"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Grocery Store"))
        .stdout(predicate::str::contains("Gasoline"))
        .stdout(predicate::str::contains("Restaurant Dinner").not());
}

#[test]
fn suggestion_accept_recategorizes() {
    let dir = logged_in();
    finboard(&dir)
        .args(["suggestion", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("txn-00000001"))
        .stdout(predicate::str::contains("92%"));

    finboard(&dir)
        .args(["suggestion", "accept", "txn-00000001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Grocery Store is now"))
        .stdout(predicate::str::contains("Food"));

    finboard(&dir)
        .args(["suggestion", "accept", "txn-00000002"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Domain error"));
}

#[test]
fn budget_overview_flags_overspending() {
    let dir = logged_in();
    finboard(&dir)
        .args(["budget", "overview"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Entertainment"))
        .stdout(predicate::str::contains("Overspent"))
        .stdout(predicate::str::contains("$1,650.00"));

    finboard(&dir)
        .args(["budget", "create"])
        .assert()
        .success()
        .stdout(predicate::str::contains("coming soon"));
}

#[test]
fn export_csv_to_stdout() {
    let dir = logged_in();
    finboard(&dir)
        .args(["export", "expenses", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "ID,Date,Description,Category,Amount,Type,Payment Method,Payment Ref",
        ));

    finboard(&dir)
        .args(["export", "all", "--format", "csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Export error"));
}

#[test]
fn export_json_to_file() {
    let dir = logged_in();
    let output = dir.path().join("export.json");
    finboard(&dir)
        .args(["export", "all", "--format", "json", "--output"])
        .arg(&output)
        .assert()
        .success();

    let contents = std::fs::read_to_string(&output).unwrap();
    let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(value["transactions"].as_array().unwrap().len(), 13);
    assert_eq!(value["budgets"].as_array().unwrap().len(), 5);
}

#[test]
fn month_navigation_wraps_year() {
    let dir = logged_in();
    finboard(&dir)
        .args(["report", "month", "--month", "2025-01", "--prev"])
        .assert()
        .success()
        .stdout(predicate::str::contains("December 2024"));

    finboard(&dir)
        .args(["report", "month", "--month", "2025-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$1,753.41"))
        .stdout(predicate::str::contains("68.4%"));
}

#[test]
fn spending_report_for_period() {
    let dir = logged_in();
    finboard(&dir)
        .args(["report", "spending", "--period", "last-month", "--as-of", "2025-05-18"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$1,215.99"));
}

#[test]
fn settings_toggle_is_session_scoped() {
    let dir = logged_in();
    finboard(&dir)
        .args(["settings", "toggle", "push"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Notification 'push' turned off."));

    finboard(&dir)
        .args(["settings", "show"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"push\s+on").unwrap());
}

#[test]
fn config_init_writes_defaults() {
    let dir = TempDir::new().unwrap();
    finboard(&dir).args(["config", "init"]).assert().success();

    let contents = std::fs::read_to_string(dir.path().join("config.json")).unwrap();
    assert!(contents.contains("\"budget_warning_threshold\": 75"));

    finboard(&dir)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn data_dir_flag_overrides_env() {
    let env_dir = TempDir::new().unwrap();
    let flag_dir = TempDir::new().unwrap();
    finboard(&env_dir)
        .arg("--data-dir")
        .arg(flag_dir.path())
        .arg("login")
        .assert()
        .success();

    assert!(flag_dir.path().join("data").join("state.json").exists());
    assert!(!env_dir.path().join("data").join("state.json").exists());
}

#[test]
fn shell_keeps_changes_for_the_session() {
    let dir = logged_in();
    finboard(&dir)
        .arg("shell")
        .write_stdin(
            "suggestion accept txn-00000001\n\
             suggestion list\n\
             settings toggle email\n\
             settings show\n\
             exit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Grocery Store is now"))
        .stdout(predicate::str::contains("txn-00000001").not())
        .stdout(predicate::str::contains("txn-00000003"))
        .stdout(predicate::str::is_match(r"email\s+off").unwrap());
}
