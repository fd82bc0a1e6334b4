use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn bills(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("bills").expect("bills binary builds");
    cmd.env("BILL_CORE_HOME", home)
        .env("NO_COLOR", "1")
        .env("CLICOLOR", "0")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn add_list_edit_remove_flow() {
    let home = tempdir().unwrap();

    bills(home.path())
        .args([
            "add", "--type", "income", "--category", "salary", "--amount", "5000", "--date",
            "2024-01-15",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added [0]"));

    bills(home.path())
        .args([
            "add", "--type", "expense", "--category", "dining", "--amount", "40", "--date",
            "2024-01-16", "--desc", "hotpot",
        ])
        .assert()
        .success();

    bills(home.path())
        .args(["list", "--category", "dining"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hotpot"))
        .stdout(predicate::str::contains("salary").not());

    bills(home.path())
        .args(["summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("balance ¥4960.00"));

    bills(home.path())
        .args(["edit", "1", "--amount", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated [1]"));

    bills(home.path())
        .args(["remove", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed"));

    bills(home.path())
        .args(["summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("records: 1"))
        .stdout(predicate::str::contains("expense ¥50.00"));
}

#[test]
fn invalid_input_fails_without_writing() {
    let home = tempdir().unwrap();

    bills(home.path())
        .args(["add", "--type", "income", "--category", "salary", "--amount", "lots"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a finite number"));

    bills(home.path())
        .args(["remove", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));

    bills(home.path())
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No records."));
}

#[test]
fn theme_and_config_persist() {
    let home = tempdir().unwrap();

    bills(home.path())
        .args(["theme", "toggle"])
        .assert()
        .success()
        .stdout("theme: dark\n");
    bills(home.path())
        .args(["theme"])
        .assert()
        .success()
        .stdout("theme: dark\n");

    bills(home.path())
        .args(["config", "--currency", "$", "--decimals", "0"])
        .assert()
        .success();
    bills(home.path())
        .args(["add", "--type", "expense", "--category", "bonus", "--amount", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-$7"));
}
