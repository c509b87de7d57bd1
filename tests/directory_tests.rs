use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use attendo::store::EntityStore;
use common::{att, init_with_users, setup_test_data};

#[test]
fn test_user_ids_are_max_plus_one() {
    let data = setup_test_data("user_ids");
    init_with_users(&data); // creates users 1 and 2

    // deleting user 1 must not free its id: next is still max + 1
    att()
        .args(["--data", &data, "user", "del", "1"])
        .assert()
        .success();

    att()
        .args(["--data", &data, "user", "add", "--name", "Noa Bar", "--company", "1"])
        .assert()
        .success()
        .stdout(contains("id 3"));

    let store = EntityStore::open(&data).expect("open store");
    let mut ids: Vec<i64> = store.users.iter().map(|u| u.id).collect();
    ids.sort();
    assert_eq!(ids, vec![2, 3]);
}

#[test]
fn test_first_user_gets_id_one() {
    let data = setup_test_data("first_user_id");
    att()
        .args(["--data", &data, "--test", "init"])
        .assert()
        .success();

    att()
        .args(["--data", &data, "user", "add", "--name", "Solo", "--company", "1"])
        .assert()
        .success()
        .stdout(contains("id 1"));
}

#[test]
fn test_company_ids_continue_after_seed() {
    let data = setup_test_data("company_ids");
    att()
        .args(["--data", &data, "--test", "init"])
        .assert()
        .success();

    // init seeds companies 1..=3
    att()
        .args(["--data", &data, "company", "add", "--name", "Umbrella Corp"])
        .assert()
        .success()
        .stdout(contains("id 4"));
}

#[test]
fn test_delete_company_with_users_is_refused() {
    let data = setup_test_data("company_guard");
    init_with_users(&data); // Dana Levi is assigned to company 1

    att()
        .args(["--data", &data, "company", "del", "1"])
        .assert()
        .failure()
        .stderr(contains("cannot be deleted"));

    // both collections unchanged
    let store = EntityStore::open(&data).expect("open store");
    assert_eq!(store.companies.len(), 3);
    assert_eq!(store.users.len(), 2);

    // once the user is gone the same deletion succeeds and removes exactly
    // that company
    att()
        .args(["--data", &data, "user", "del", "1"])
        .assert()
        .success();
    att()
        .args(["--data", &data, "company", "del", "1"])
        .assert()
        .success()
        .stdout(contains("Company 1 deleted"));

    let store = EntityStore::open(&data).expect("open store");
    assert_eq!(store.companies.len(), 2);
    assert!(store.company_by_id(1).is_none());
    assert!(store.company_by_id(2).is_some());
    assert!(store.company_by_id(3).is_some());
}

#[test]
fn test_invalid_email_aborts_without_persisting() {
    let data = setup_test_data("bad_email");
    att()
        .args(["--data", &data, "--test", "init"])
        .assert()
        .success();

    att()
        .args([
            "--data", &data, "user", "add", "--name", "Typo", "--company", "1",
            "--email", "not-an-email",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid email address"));

    let store = EntityStore::open(&data).expect("open store");
    assert!(store.users.is_empty());
}

#[test]
fn test_blank_name_is_rejected() {
    let data = setup_test_data("blank_name");
    att()
        .args(["--data", &data, "--test", "init"])
        .assert()
        .success();

    att()
        .args(["--data", &data, "company", "add", "--name", "   "])
        .assert()
        .failure()
        .stderr(contains("Name is required"));
}

#[test]
fn test_reassign_does_not_check_target_company() {
    let data = setup_test_data("reassign");
    init_with_users(&data);

    // target company 77 does not exist; the reassignment still goes through
    att()
        .args(["--data", &data, "user", "assign", "1", "--company", "77"])
        .assert()
        .success();

    let store = EntityStore::open(&data).expect("open store");
    assert_eq!(store.user_by_id(1).map(|u| u.company_id), Some(77));
}

#[test]
fn test_toggle_user_active_both_ways() {
    let data = setup_test_data("toggle_active");
    init_with_users(&data);

    att()
        .args(["--data", &data, "user", "toggle", "1"])
        .assert()
        .success()
        .stdout(contains("now inactive"));

    att()
        .args(["--data", &data, "user", "toggle", "1"])
        .assert()
        .success()
        .stdout(contains("now active"));
}

#[test]
fn test_user_list_company_filter() {
    let data = setup_test_data("user_filter");
    init_with_users(&data);

    att()
        .args(["--data", &data, "user", "list", "--company", "1"])
        .assert()
        .success()
        .stdout(contains("Dana Levi"))
        .stdout(contains("Avi Cohen").not());

    // no filter: the full collection
    att()
        .args(["--data", &data, "user", "list"])
        .assert()
        .success()
        .stdout(contains("Dana Levi"))
        .stdout(contains("Avi Cohen"));
}

#[test]
fn test_edit_company_fields_in_place() {
    let data = setup_test_data("company_edit");
    att()
        .args(["--data", &data, "--test", "init"])
        .assert()
        .success();

    att()
        .args([
            "--data", &data, "company", "edit", "2",
            "--name", "Globex International",
            "--address", "12 Main St",
            "--active", "false",
        ])
        .assert()
        .success();

    let store = EntityStore::open(&data).expect("open store");
    let c = store.company_by_id(2).expect("company 2");
    assert_eq!(c.name, "Globex International");
    assert_eq!(c.address.as_deref(), Some("12 Main St"));
    assert!(!c.active);
    // untouched fields survive
    assert_eq!(c.registration_number.as_deref(), Some("987654321"));
}

#[test]
fn test_deleting_user_keeps_their_records() {
    let data = setup_test_data("orphan_records");
    init_with_users(&data);
    common::seed_records(&data, 1, 2);

    att()
        .args(["--data", &data, "user", "del", "1"])
        .assert()
        .success();

    // orphaned records keep the userId/userName snapshot
    let store = EntityStore::open(&data).expect("open store");
    assert_eq!(store.records.len(), 2);
    assert!(store.records.iter().all(|r| r.user_id == 1));
    assert!(store.records.iter().all(|r| r.user_name == "Dana Levi"));
}
