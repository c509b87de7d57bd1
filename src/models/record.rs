use super::event_kind::EventKind;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A single clock-in or clock-out event.
///
/// `user_name` is an immutable snapshot of the user's display name at
/// creation time. It intentionally diverges from the live User record so the
/// event stays displayable after the user is renamed or deleted; it must not
/// be turned into a live join.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: i64,
    pub user_id: i64,
    pub user_name: String,
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub timestamp: DateTime<Local>, // round-trips as an RFC 3339 string
    #[serde(default)]
    pub approved: bool,
}

impl AttendanceRecord {
    pub fn new(
        id: i64,
        user_id: i64,
        user_name: impl Into<String>,
        kind: EventKind,
        timestamp: DateTime<Local>,
    ) -> Self {
        Self {
            id,
            user_id,
            user_name: user_name.into(),
            kind,
            timestamp,
            approved: false,
        }
    }

    pub fn timestamp_str(&self) -> String {
        self.timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}
