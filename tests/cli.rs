use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn warikan(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("warikan").unwrap();
    cmd.env("WARIKAN_DATA_DIR", dir.path());
    cmd
}

fn add_members(dir: &TempDir, names: &[&str]) {
    for name in names {
        warikan(dir).args(["member", "add", name]).assert().success();
    }
}

#[test]
fn test_member_add_and_list() {
    let dir = TempDir::new().unwrap();
    add_members(&dir, &["Alice", "Bob"]);

    warikan(&dir)
        .args(["member", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice").and(predicate::str::contains("Bob")))
        .stdout(predicate::str::contains("Total: 2 member(s)"));
}

#[test]
fn test_duplicate_member_fails() {
    let dir = TempDir::new().unwrap();
    add_members(&dir, &["Alice"]);

    warikan(&dir)
        .args(["member", "add", "Alice"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Alice"));
}

#[test]
fn test_expense_settles_between_members() {
    let dir = TempDir::new().unwrap();
    add_members(&dir, &["Alice", "Bob", "Carol"]);

    warikan(&dir)
        .args(["expense", "add", "90", "--payer", "Alice", "--title", "Dinner"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded: Dinner"));

    warikan(&dir)
        .arg("balance")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bob pays Alice ¥30.00"))
        .stdout(predicate::str::contains("Carol pays Alice ¥30.00"));
}

#[test]
fn test_expense_with_subset_of_participants() {
    let dir = TempDir::new().unwrap();
    add_members(&dir, &["A", "B", "C"]);

    warikan(&dir)
        .args(["expense", "add", "40", "--payer", "A", "--participants", "A,B"])
        .assert()
        .success();

    warikan(&dir)
        .arg("balance")
        .assert()
        .success()
        .stdout(predicate::str::contains("B pays A ¥20.00"))
        .stdout(predicate::str::contains("C pays").not());
}

#[test]
fn test_expense_with_unknown_payer_fails() {
    let dir = TempDir::new().unwrap();
    add_members(&dir, &["Alice"]);

    warikan(&dir)
        .args(["expense", "add", "10", "--payer", "Mallory"])
        .assert()
        .failure();
}

#[test]
fn test_expense_remove_out_of_range_is_noop() {
    let dir = TempDir::new().unwrap();
    add_members(&dir, &["A", "B"]);
    warikan(&dir)
        .args(["expense", "add", "10", "--payer", "A"])
        .assert()
        .success();

    warikan(&dir)
        .args(["expense", "remove", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing was removed"));

    warikan(&dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[0] -"));
}

#[test]
fn test_reset_requires_force() {
    let dir = TempDir::new().unwrap();
    add_members(&dir, &["A"]);

    warikan(&dir)
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("--force"));
    warikan(&dir)
        .args(["member", "list"])
        .assert()
        .stdout(predicate::str::contains("A"));

    warikan(&dir).args(["reset", "--force"]).assert().success();
    warikan(&dir)
        .args(["member", "list"])
        .assert()
        .stdout(predicate::str::contains("No members yet."));
}

#[test]
fn test_backup_eviction_and_restore() {
    let dir = TempDir::new().unwrap();
    add_members(&dir, &["A", "B"]);

    warikan(&dir).args(["backup", "create", "one"]).assert().success();
    warikan(&dir).args(["backup", "create", "two"]).assert().success();

    warikan(&dir)
        .args(["backup", "create", "three"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--force"));

    warikan(&dir)
        .args(["backup", "create", "three", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Overwrote backup: one"));

    warikan(&dir)
        .args(["backup", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[0] two"))
        .stdout(predicate::str::contains("[1] three"));

    warikan(&dir).args(["reset", "--force"]).assert().success();
    warikan(&dir)
        .args(["backup", "restore", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Restore complete!"));

    warikan(&dir)
        .args(["member", "list"])
        .assert()
        .stdout(predicate::str::contains("Total: 2 member(s)"));
}

#[test]
fn test_backup_restore_invalid_index_fails() {
    let dir = TempDir::new().unwrap();

    warikan(&dir)
        .args(["backup", "restore", "0"])
        .assert()
        .failure();
}

#[test]
fn test_export_csv_to_stdout() {
    let dir = TempDir::new().unwrap();
    add_members(&dir, &["A", "B"]);
    warikan(&dir)
        .args(["expense", "add", "12.5", "--payer", "A", "--title", "Taxi"])
        .assert()
        .success();

    warikan(&dir)
        .args(["export", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Index,Title,Amount,Payer,Participants"))
        .stdout(predicate::str::contains("0,Taxi,12.50,A,A;B"));
}

#[test]
fn test_history_records_mutations() {
    let dir = TempDir::new().unwrap();
    add_members(&dir, &["Alice"]);

    warikan(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE Member Alice"));
}

#[test]
fn test_non_numeric_amount_is_rejected() {
    let dir = TempDir::new().unwrap();
    add_members(&dir, &["A", "B"]);

    for amount in ["abc5", "five 5", "1,2,3"] {
        warikan(&dir)
            .args(["expense", "add", amount, "--payer", "A"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid amount"));
    }

    warikan(&dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses recorded."));
}

#[test]
fn test_config_reports_initialization() {
    let dir = TempDir::new().unwrap();

    warikan(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized:     no"));

    warikan(&dir).arg("init").assert().success();

    warikan(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized:     yes"));
}
