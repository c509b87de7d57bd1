use crate::cli::parser::{Commands, UserCmd};
use crate::config::Config;
use crate::core::directory::{self, NewUser};
use crate::errors::AppResult;
use crate::store::EntityStore;
use crate::ui::messages::{info, success, warning};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::User { action } = cmd {
        let mut store = EntityStore::open(&cfg.data_dir)?;

        match action {
            UserCmd::Add {
                name,
                company,
                email,
                phone,
                role,
            } => {
                let user = directory::create_user(
                    &mut store,
                    NewUser {
                        name: name.clone(),
                        company_id: *company,
                        email: email.clone(),
                        phone: phone.clone(),
                        role: role.clone(),
                    },
                )?;
                success(format!("User '{}' created with id {}", user.name, user.id));
            }

            UserCmd::List { company } => {
                let users = directory::users_by_company(&store.users, *company);
                if users.is_empty() {
                    info("No users found.");
                    return Ok(());
                }

                let mut table = Table::new(
                    vec![
                        Column::new("ID", 5),
                        Column::new("NAME", 24),
                        Column::new("COMPANY", 8),
                        Column::new("ROLE", 16),
                        Column::new("EMAIL", 28),
                        Column::new("STATUS", 8),
                    ],
                    cfg.separator(),
                );
                for u in users {
                    table.add_row(vec![
                        u.id.to_string(),
                        u.name.clone(),
                        u.company_id.to_string(),
                        u.role.clone().unwrap_or_default(),
                        u.email.clone().unwrap_or_default(),
                        u.status_str().to_string(),
                    ]);
                }
                print!("{}", table.render());
            }

            UserCmd::Del { id } => {
                if directory::delete_user(&mut store, *id)? {
                    success(format!("User {} deleted", id));
                }
            }

            UserCmd::Assign { id, company } => {
                if directory::reassign_user(&mut store, *id, *company)? {
                    success(format!("User {} assigned to company {}", id, company));
                }
            }

            UserCmd::Toggle { id } => match directory::toggle_user_active(&mut store, *id)? {
                Some(true) => success(format!("User {} is now active", id)),
                Some(false) => warning(format!("User {} is now inactive", id)),
                None => {}
            },
        }
    }
    Ok(())
}
