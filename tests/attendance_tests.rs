use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use attendo::store::EntityStore;
use common::{att, init_with_users, seed_records, setup_test_data};

#[test]
fn test_clock_in_snapshots_user_name() {
    let data = setup_test_data("clock_in_name");
    init_with_users(&data);

    att()
        .args(["--data", &data, "clock", "in", "--user", "1"])
        .assert()
        .success()
        .stdout(contains("Clock-in recorded for Dana Levi"));

    let store = EntityStore::open(&data).expect("open store");
    assert_eq!(store.records.len(), 1);
    let rec = &store.records[0];
    assert_eq!(rec.user_id, 1);
    assert_eq!(rec.user_name, "Dana Levi");
    assert!(rec.kind.is_in());
    assert!(!rec.approved);
}

#[test]
fn test_clock_unknown_user_records_empty_name() {
    let data = setup_test_data("clock_unknown_user");
    init_with_users(&data);

    att()
        .args(["--data", &data, "clock", "out", "--user", "99"])
        .assert()
        .success()
        .stdout(contains("User 99 not found"));

    let store = EntityStore::open(&data).expect("open store");
    assert_eq!(store.records.len(), 1);
    assert_eq!(store.records[0].user_name, "");
    assert_eq!(store.records[0].user_id, 99);
}

#[test]
fn test_repeated_clock_in_is_accepted() {
    // no mutual-exclusion check: clocking in twice simply creates two records
    let data = setup_test_data("clock_repeat");
    init_with_users(&data);

    for _ in 0..2 {
        att()
            .args(["--data", &data, "clock", "in", "--user", "1"])
            .assert()
            .success();
    }

    let store = EntityStore::open(&data).expect("open store");
    assert_eq!(store.records.len(), 2);
    assert_ne!(store.records[0].id, store.records[1].id);
}

#[test]
fn test_invalid_clock_action_is_rejected() {
    let data = setup_test_data("clock_invalid");
    init_with_users(&data);

    att()
        .args(["--data", &data, "clock", "sideways", "--user", "1"])
        .assert()
        .failure()
        .stderr(contains("Invalid clock event"));

    let store = EntityStore::open(&data).expect("open store");
    assert!(store.records.is_empty());
}

#[test]
fn test_approve_is_one_way_and_idempotent() {
    let data = setup_test_data("approve_idempotent");
    init_with_users(&data);
    let ids = seed_records(&data, 1, 3);

    let before = EntityStore::open(&data).expect("open store");

    att()
        .args(["--data", &data, "approve", &ids[1].to_string()])
        .assert()
        .success()
        .stdout(contains("approved"));

    // approving twice yields the same state as approving once
    att()
        .args(["--data", &data, "approve", &ids[1].to_string()])
        .assert()
        .success();

    let after = EntityStore::open(&data).expect("open store");
    assert_eq!(after.records.len(), 3);
    for (b, a) in before.records.iter().zip(after.records.iter()) {
        assert_eq!(b.id, a.id);
        assert_eq!(b.user_name, a.user_name);
        assert_eq!(b.timestamp, a.timestamp);
        // only record ids[1] changed, and only its approved flag
        assert_eq!(a.approved, a.id == ids[1]);
    }
}

#[test]
fn test_approve_unknown_id_is_silent_noop() {
    let data = setup_test_data("approve_unknown");
    init_with_users(&data);
    seed_records(&data, 1, 2);

    att()
        .args(["--data", &data, "approve", "424242"])
        .assert()
        .success()
        .stdout(contains("approved").not());

    let store = EntityStore::open(&data).expect("open store");
    assert!(store.records.iter().all(|r| !r.approved));
}

#[test]
fn test_kiosk_records_single_action() {
    let data = setup_test_data("kiosk");
    init_with_users(&data);

    att()
        .args(["--data", &data, "kiosk", "in", "--user", "2"])
        .assert()
        .success()
        .stdout(contains("Avi Cohen clocked in"));

    let store = EntityStore::open(&data).expect("open store");
    assert_eq!(store.records.len(), 1);
}
