use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report;
use crate::errors::AppResult;
use crate::export;
use crate::store::EntityStore;

/// Export the attendance collection, most recent first.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let store = EntityStore::open(&cfg.data_dir)?;
        let sorted = report::sort_desc(&store.records);
        export::write_records(format, file, &sorted, *force)?;
    }
    Ok(())
}
