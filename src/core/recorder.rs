//! Attendance recorder: turns a user action into a persisted clock event.

use crate::errors::AppResult;
use crate::models::{AttendanceRecord, EventKind};
use crate::store::EntityStore;
use chrono::{DateTime, Local};

/// Record a clock-in or clock-out for the selected user at the current time.
///
/// The user's display name is snapshotted into the record (empty string when
/// the id does not resolve); `approved` starts false. There is deliberately
/// no mutual-exclusion check against an open clock-in: repeated clock-ins are
/// accepted, "currently clocked in" is a transient per-session notion.
pub fn record(store: &mut EntityStore, user_id: i64, kind: EventKind) -> AppResult<AttendanceRecord> {
    record_at(store, user_id, kind, Local::now())
}

/// Same as [`record`], with an explicit timestamp (used by tests and seeding).
pub fn record_at(
    store: &mut EntityStore,
    user_id: i64,
    kind: EventKind,
    timestamp: DateTime<Local>,
) -> AppResult<AttendanceRecord> {
    let user_name = store
        .user_by_id(user_id)
        .map(|u| u.name.clone())
        .unwrap_or_default();

    let id = next_record_id(store, &timestamp);
    let rec = AttendanceRecord::new(id, user_id, user_name, kind, timestamp);

    store.records.push(rec.clone());
    store.persist_records()?;
    Ok(rec)
}

/// Record ids derive from the creation timestamp (millisecond value) so they
/// are monotonic; on a same-millisecond collision the id is bumped past the
/// current maximum.
fn next_record_id(store: &EntityStore, timestamp: &DateTime<Local>) -> i64 {
    let candidate = timestamp.timestamp_millis();
    let max = store.records.iter().map(|r| r.id).max().unwrap_or(0);
    if candidate > max { candidate } else { max + 1 }
}
