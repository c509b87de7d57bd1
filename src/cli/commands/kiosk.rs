use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::recorder;
use crate::errors::{AppError, AppResult};
use crate::models::EventKind;
use crate::store::EntityStore;
use crate::utils::time;

/// Self-service kiosk entry: same operation as `clock`, terse single-line
/// output suited to a shared terminal.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Kiosk { action, user } = cmd {
        let kind = EventKind::from_code(action)
            .ok_or_else(|| AppError::InvalidEventKind(action.clone()))?;

        let mut store = EntityStore::open(&cfg.data_dir)?;
        let rec = recorder::record(&mut store, *user, kind)?;

        let who = if rec.user_name.is_empty() {
            format!("user #{user}")
        } else {
            rec.user_name.clone()
        };
        let verb = if kind.is_in() { "in" } else { "out" };
        println!("{} clocked {} at {}", who, verb, time::fmt_clock(&rec.timestamp));
    }
    Ok(())
}
