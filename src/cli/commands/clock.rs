use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::recorder;
use crate::errors::{AppError, AppResult};
use crate::models::EventKind;
use crate::store::EntityStore;
use crate::ui::messages::{success, warning};
use crate::utils::time;

/// Record a clock event for a user.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clock { action, user } = cmd {
        //
        // 1. Parse the action (in | out)
        //
        let kind = EventKind::from_code(action)
            .ok_or_else(|| AppError::InvalidEventKind(action.clone()))?;

        //
        // 2. Open the store and record
        //
        let mut store = EntityStore::open(&cfg.data_dir)?;
        let rec = recorder::record(&mut store, *user, kind)?;

        if rec.user_name.is_empty() {
            warning(format!("User {} not found; event recorded without a name", user));
        }

        let verb = if kind.is_in() { "Clock-in" } else { "Clock-out" };
        success(format!(
            "{} recorded for {} at {} (record #{})",
            verb,
            display_name(&rec.user_name, *user),
            time::fmt_clock(&rec.timestamp),
            rec.id
        ));
    }
    Ok(())
}

fn display_name(name: &str, user_id: i64) -> String {
    if name.is_empty() {
        format!("user #{user_id}")
    } else {
        name.to_string()
    }
}
