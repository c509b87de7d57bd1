use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::fs;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            if !path.exists() {
                warning(format!("No configuration file at {} (using defaults)", path.display()));
                return Ok(());
            }
            let content = fs::read_to_string(&path)?;
            println!("{content}");
            return Ok(());
        }

        if *check {
            if cfg.data_dir.trim().is_empty() {
                return Err(AppError::Config("data_dir is empty".to_string()));
            }
            if cfg.separator_char.chars().count() != 1 {
                warning(format!(
                    "separator_char should be a single character, found '{}'",
                    cfg.separator_char
                ));
            }
            success("Configuration looks complete");
            return Ok(());
        }

        // No flag given: show where the config lives
        println!("Config file: {}", path.display());
        println!("Data dir   : {}", cfg.data_dir);
    }
    Ok(())
}
