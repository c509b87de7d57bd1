use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup;
use crate::errors::AppResult;
use crate::store::Storage;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup { file, compress } = cmd {
        let storage = Storage::open(&cfg.data_dir)?;
        let written = backup::backup_data(&storage, file, *compress)?;
        success(format!("Backup written to {}", written.display()));
    }
    Ok(())
}
