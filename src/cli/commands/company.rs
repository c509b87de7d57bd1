use crate::cli::parser::{Commands, CompanyCmd};
use crate::config::Config;
use crate::core::directory::{self, NewCompany};
use crate::errors::AppResult;
use crate::models::CompanyUpdate;
use crate::store::EntityStore;
use crate::ui::messages::{info, success, warning};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Company { action } = cmd {
        let mut store = EntityStore::open(&cfg.data_dir)?;

        match action {
            CompanyCmd::Add {
                name,
                reg_number,
                email,
                phone,
                address,
            } => {
                let company = directory::create_company(
                    &mut store,
                    NewCompany {
                        name: name.clone(),
                        registration_number: reg_number.clone(),
                        email: email.clone(),
                        phone: phone.clone(),
                        address: address.clone(),
                    },
                )?;
                success(format!(
                    "Company '{}' created with id {}",
                    company.name, company.id
                ));
            }

            CompanyCmd::List => {
                if store.companies.is_empty() {
                    info("No companies found.");
                    return Ok(());
                }

                let mut table = Table::new(
                    vec![
                        Column::new("ID", 5),
                        Column::new("NAME", 24),
                        Column::new("REG.NUMBER", 12),
                        Column::new("EMAIL", 28),
                        Column::new("STATUS", 8),
                    ],
                    cfg.separator(),
                );
                for c in &store.companies {
                    let status = if c.active { "active" } else { "inactive" };
                    table.add_row(vec![
                        c.id.to_string(),
                        c.name.clone(),
                        c.registration_number.clone().unwrap_or_default(),
                        c.email.clone().unwrap_or_default(),
                        status.to_string(),
                    ]);
                }
                print!("{}", table.render());
            }

            CompanyCmd::Del { id } => {
                // delete_company errors out while users still reference it
                if directory::delete_company(&mut store, *id)? {
                    success(format!("Company {} deleted", id));
                }
            }

            CompanyCmd::Edit {
                id,
                name,
                reg_number,
                email,
                phone,
                address,
                active,
            } => {
                let update = CompanyUpdate {
                    name: name.clone(),
                    registration_number: reg_number.clone(),
                    email: email.clone(),
                    phone: phone.clone(),
                    address: address.clone(),
                    active: *active,
                };
                if update.is_empty() {
                    warning("Nothing to change: pass at least one field option");
                    return Ok(());
                }
                if directory::edit_company(&mut store, *id, update)? {
                    success(format!("Company {} updated", id));
                }
            }
        }
    }
    Ok(())
}
