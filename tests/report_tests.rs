use predicates::str::contains;

mod common;
use attendo::core::report::{self, PageItem};
use attendo::models::{AttendanceRecord, EventKind};
use chrono::{Local, TimeZone};
use common::{att, init_with_users, seed_records, setup_test_data};

fn rec_at(id: i64, hour: u32) -> AttendanceRecord {
    let ts = Local.with_ymd_and_hms(2025, 6, 2, hour, 0, 0).unwrap();
    AttendanceRecord::new(id, 1, "Dana Levi", EventKind::ClockIn, ts)
}

#[test]
fn test_count_identity() {
    let mut records = vec![rec_at(1, 9), rec_at(2, 10), rec_at(3, 11)];
    records[0].approved = true;

    let s = report::summarize(&records);
    assert_eq!(s.total, 3);
    assert_eq!(s.approved, 1);
    assert_eq!(s.unapproved, 2);
    assert_eq!(s.approved + s.unapproved, s.total);

    let empty = report::summarize(&[]);
    assert_eq!((empty.total, empty.approved, empty.unapproved), (0, 0, 0));
}

#[test]
fn test_sort_is_descending_by_timestamp() {
    let records = vec![rec_at(1, 9), rec_at(2, 12), rec_at(3, 10)];
    let sorted = report::sort_desc(&records);
    let hours: Vec<u32> = sorted
        .iter()
        .map(|r| {
            use chrono::Timelike;
            r.timestamp.hour()
        })
        .collect();
    assert_eq!(hours, vec![12, 10, 9]);
}

#[test]
fn test_pagination_23_records() {
    let records: Vec<AttendanceRecord> = (0..23).map(|i| rec_at(i, (i % 12) as u32)).collect();
    let sorted = report::sort_desc(&records);

    assert_eq!(report::total_pages(sorted.len()), 3);
    assert_eq!(report::page_slice(&sorted, 1).len(), 10);
    assert_eq!(report::page_slice(&sorted, 2).len(), 10);
    assert_eq!(report::page_slice(&sorted, 3).len(), 3);
    assert!(report::page_slice(&sorted, 4).is_empty());
    assert!(report::page_slice(&sorted, 0).is_empty());
}

#[test]
fn test_page_bar_collapses_runs() {
    use PageItem::*;
    assert_eq!(
        report::page_bar(5, 9),
        vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(9)]
    );
    // no ellipsis when every page is adjacent to an anchor
    assert_eq!(report::page_bar(2, 3), vec![Page(1), Page(2), Page(3)]);
    // current at an edge keeps first/last visible
    assert_eq!(
        report::page_bar(1, 5),
        vec![Page(1), Page(2), Ellipsis, Page(5)]
    );
}

#[test]
fn test_report_command_prints_counts_and_page_bar() {
    let data = setup_test_data("report_cli");
    init_with_users(&data);
    seed_records(&data, 1, 23);

    att()
        .args(["--data", &data, "report", "--page", "1"])
        .assert()
        .success()
        .stdout(contains("Total: 23 | Approved: 0 | Pending: 23"))
        .stdout(contains("Page 1 of 3"));
}

#[test]
fn test_report_pending_filter() {
    let data = setup_test_data("report_pending");
    init_with_users(&data);
    let ids = seed_records(&data, 1, 3);

    att()
        .args(["--data", &data, "approve", &ids[0].to_string()])
        .assert()
        .success();

    att()
        .args(["--data", &data, "report", "--pending"])
        .assert()
        .success()
        .stdout(contains("Total: 3 | Approved: 1 | Pending: 2"));
}

#[test]
fn test_report_monthly_sample_data() {
    let data = setup_test_data("report_monthly");
    init_with_users(&data);

    att()
        .args(["--data", &data, "report", "--monthly"])
        .assert()
        .success()
        .stdout(contains("January"))
        .stdout(contains("168"));
}
