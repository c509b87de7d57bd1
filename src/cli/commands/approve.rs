use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::approval;
use crate::errors::AppResult;
use crate::store::EntityStore;
use crate::ui::messages::success;

/// Approve an attendance record. An unknown id is silently ignored.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Approve { record_id } = cmd {
        let mut store = EntityStore::open(&cfg.data_dir)?;
        if approval::approve(&mut store, *record_id)? {
            success(format!("Record #{} approved", record_id));
        }
    }
    Ok(())
}
