use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// System-wide work schedule defaults and permission switches.
/// A single record, wholly overwritten on each save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemSettings {
    pub work_day_start: String, // "HH:MM"
    pub work_day_end: String,   // "HH:MM"
    pub work_week_days: u8,     // 1..=7
    pub require_manager_approval: bool,
    pub allow_retroactive_update: bool,
    pub allow_report_viewing: bool,
}

impl Default for SystemSettings {
    fn default() -> Self {
        Self {
            work_day_start: "08:00".to_string(),
            work_day_end: "17:00".to_string(),
            work_week_days: 5,
            require_manager_approval: true,
            allow_retroactive_update: false,
            allow_report_viewing: true,
        }
    }
}

/// The three independent permission switches. Stored but not enforced against
/// any access-control check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PermissionFlag {
    /// Attendance entries require manager approval
    Approval,
    /// Employees may amend past entries
    Retroactive,
    /// Employees may view reports
    Reports,
}

impl PermissionFlag {
    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionFlag::Approval => "requireManagerApproval",
            PermissionFlag::Retroactive => "allowRetroactiveUpdate",
            PermissionFlag::Reports => "allowReportViewing",
        }
    }
}

impl SystemSettings {
    /// Flip a single permission flag, leaving every other field untouched.
    pub fn toggle(&mut self, flag: PermissionFlag) {
        match flag {
            PermissionFlag::Approval => {
                self.require_manager_approval = !self.require_manager_approval
            }
            PermissionFlag::Retroactive => {
                self.allow_retroactive_update = !self.allow_retroactive_update
            }
            PermissionFlag::Reports => self.allow_report_viewing = !self.allow_report_viewing,
        }
    }

    pub fn flag(&self, flag: PermissionFlag) -> bool {
        match flag {
            PermissionFlag::Approval => self.require_manager_approval,
            PermissionFlag::Retroactive => self.allow_retroactive_update,
            PermissionFlag::Reports => self.allow_report_viewing,
        }
    }
}
