use assert_cmd::Command;
use predicates::prelude::*;

fn cartz(data_dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("cartz").unwrap();
    cmd.arg("--data-dir").arg(data_dir);
    cmd
}

#[test]
fn create_then_list_shows_the_new_list() {
    let dir = tempfile::tempdir().unwrap();

    cartz(dir.path())
        .args(["create", "Groceries"])
        .assert()
        .success()
        .stdout(predicate::str::contains("List created: Groceries"));

    cartz(dir.path())
        .arg("lists")
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"));
}

#[test]
fn empty_store_lists_nothing() {
    let dir = tempfile::tempdir().unwrap();

    cartz(dir.path())
        .arg("lists")
        .assert()
        .success()
        .stdout(predicate::str::contains("No lists yet."));
}

#[test]
fn categories_prints_the_catalog() {
    let dir = tempfile::tempdir().unwrap();

    cartz(dir.path())
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bakery"))
        .stdout(predicate::str::contains("Spices, sauces & condiments"));
}

#[test]
fn unknown_category_id_fails() {
    let dir = tempfile::tempdir().unwrap();

    cartz(dir.path())
        .args(["create", "Groceries"])
        .assert()
        .success();

    cartz(dir.path())
        .args(["add", "123456", "Bread", "--category", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category id: 99"));
}
