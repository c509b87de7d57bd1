use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::settings;
use crate::errors::AppResult;
use crate::models::Company;
use crate::store::{EntityStore, KEY_SETTINGS};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the JSON data directory, seeded with sample companies
///  - the default system settings record
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.data.clone(), cli.test)?;

    println!("⚙️  Initializing attendo…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Data dir   : {}", &cfg.data_dir);

    let mut store = EntityStore::open(&cfg.data_dir)?;

    // Seed the sample companies shipped with a fresh install
    if store.companies.is_empty() {
        for (id, name, reg) in [
            (1, "Acme Ltd", "123456789"),
            (2, "Globex Inc", "987654321"),
            (3, "Initech LLC", "456789123"),
        ] {
            let mut company = Company::new(id, name);
            company.registration_number = Some(reg.to_string());
            store.companies.push(company);
        }
        store.persist_companies()?;
        println!("🏢 Seeded {} sample companies", store.companies.len());
    }

    if store.storage().read(KEY_SETTINGS)?.is_none() {
        settings::save(store.storage(), &Default::default())?;
        println!("🛠️  Default settings written");
    }

    println!("🎉 attendo initialization completed!");
    Ok(())
}
