use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::settings;
use crate::errors::AppResult;
use crate::models::SystemSettings;
use crate::store::Storage;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Settings {
        print,
        start,
        end,
        week_days,
        toggle,
    } = cmd
    {
        let storage = Storage::open(&cfg.data_dir)?;

        if let Some(flag) = toggle {
            let updated = settings::toggle(&storage, *flag)?;
            success(format!(
                "{} is now {}",
                flag.as_str(),
                updated.flag(*flag)
            ));
            return Ok(());
        }

        let changed = start.is_some() || end.is_some() || week_days.is_some();
        if changed {
            let updated =
                settings::update(&storage, start.as_deref(), end.as_deref(), *week_days)?;
            success("Settings saved");
            print_settings(&updated);
            return Ok(());
        }

        // `--print` or no arguments: show the current value
        let _ = print;
        print_settings(&settings::load(&storage));
    }
    Ok(())
}

fn print_settings(s: &SystemSettings) {
    println!("workDayStart           : {}", s.work_day_start);
    println!("workDayEnd             : {}", s.work_day_end);
    println!("workWeekDays           : {}", s.work_week_days);
    println!("requireManagerApproval : {}", s.require_manager_approval);
    println!("allowRetroactiveUpdate : {}", s.allow_retroactive_update);
    println!("allowReportViewing     : {}", s.allow_report_viewing);
}
