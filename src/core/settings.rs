//! Settings manager: load/save round-trip of the single SystemSettings
//! record, plus single-flag toggles.

use crate::errors::{AppError, AppResult};
use crate::models::{PermissionFlag, SystemSettings};
use crate::store::{KEY_SETTINGS, Storage};
use crate::utils::time;

/// Read the settings record, falling back to the fixed defaults when the key
/// is absent or its value does not parse. The stored value is only
/// presence-checked, not validated field-by-field.
pub fn load(storage: &Storage) -> SystemSettings {
    match storage.load::<SystemSettings>(KEY_SETTINGS) {
        Ok(Some(s)) => s,
        _ => SystemSettings::default(),
    }
}

/// Overwrite the stored settings with the full current value.
pub fn save(storage: &Storage, settings: &SystemSettings) -> AppResult<()> {
    storage.save(KEY_SETTINGS, settings)
}

/// Flip one permission flag and persist; every other field is untouched.
pub fn toggle(storage: &Storage, flag: PermissionFlag) -> AppResult<SystemSettings> {
    let mut settings = load(storage);
    settings.toggle(flag);
    save(storage, &settings)?;
    Ok(settings)
}

/// Apply validated field updates (workday times, week length) and persist.
pub fn update(
    storage: &Storage,
    start: Option<&str>,
    end: Option<&str>,
    week_days: Option<u8>,
) -> AppResult<SystemSettings> {
    let mut settings = load(storage);

    if let Some(s) = start {
        time::parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        settings.work_day_start = s.to_string();
    }
    if let Some(e) = end {
        time::parse_time(e).ok_or_else(|| AppError::InvalidTime(e.to_string()))?;
        settings.work_day_end = e.to_string();
    }
    if let Some(days) = week_days {
        if !(1..=7).contains(&days) {
            return Err(AppError::InvalidWeekDays(days));
        }
        settings.work_week_days = days;
    }

    save(storage, &settings)?;
    Ok(settings)
}
