use serde::{Deserialize, Serialize};

/// The two attendance event kinds. Serialized as `clockIn` / `clockOut` to
/// match the persisted record layout.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EventKind {
    #[serde(rename = "clockIn")]
    ClockIn,
    #[serde(rename = "clockOut")]
    ClockOut,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::ClockIn => "clockIn",
            EventKind::ClockOut => "clockOut",
        }
    }

    /// Short display code used in listings.
    pub fn code(&self) -> &'static str {
        match self {
            EventKind::ClockIn => "in",
            EventKind::ClockOut => "out",
        }
    }

    /// Helper: convert input code from CLI (`in` / `out`, any case).
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "in" | "clockin" => Some(EventKind::ClockIn),
            "out" | "clockout" => Some(EventKind::ClockOut),
            _ => None,
        }
    }

    pub fn is_in(&self) -> bool {
        matches!(self, EventKind::ClockIn)
    }

    pub fn is_out(&self) -> bool {
        matches!(self, EventKind::ClockOut)
    }
}
