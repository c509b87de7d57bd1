//! Directory manager: CRUD over users and companies.
//!
//! References are plain ids resolved by scan. The only integrity rule
//! enforced here is the company-deletion guard; every other reference
//! (record userId, user companyId after a reassignment) is best-effort.

use crate::errors::{AppError, AppResult};
use crate::models::{Company, CompanyUpdate, User};
use crate::store::EntityStore;
use crate::utils::validate;

#[derive(Debug, Clone, Default)]
pub struct NewUser {
    pub name: String,
    pub company_id: i64,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct NewCompany {
    pub name: String,
    pub registration_number: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Create a user with the next available id, active by default.
pub fn create_user(store: &mut EntityStore, new: NewUser) -> AppResult<User> {
    validate::require_name(&new.name)?;
    validate::optional_email(new.email.as_deref())?;

    let mut user = User::new(store.next_user_id(), new.name.trim(), new.company_id);
    user.email = new.email;
    user.phone = new.phone;
    user.role = new.role;

    store.users.push(user.clone());
    store.persist_users()?;
    Ok(user)
}

pub fn create_company(store: &mut EntityStore, new: NewCompany) -> AppResult<Company> {
    validate::require_name(&new.name)?;
    validate::optional_email(new.email.as_deref())?;

    let mut company = Company::new(store.next_company_id(), new.name.trim());
    company.registration_number = new.registration_number;
    company.email = new.email;
    company.phone = new.phone;
    company.address = new.address;

    store.companies.push(company.clone());
    store.persist_companies()?;
    Ok(company)
}

/// Replace a user's company. The target company is not checked for existence.
/// Unknown user id: silent no-op, returns false.
pub fn reassign_user(store: &mut EntityStore, user_id: i64, company_id: i64) -> AppResult<bool> {
    let Some(user) = store.users.iter_mut().find(|u| u.id == user_id) else {
        return Ok(false);
    };
    user.company_id = company_id;
    store.persist_users()?;
    Ok(true)
}

/// Flip a user's active flag (freely toggled, both directions).
pub fn toggle_user_active(store: &mut EntityStore, user_id: i64) -> AppResult<Option<bool>> {
    let Some(user) = store.users.iter_mut().find(|u| u.id == user_id) else {
        return Ok(None);
    };
    user.active = !user.active;
    let now = user.active;
    store.persist_users()?;
    Ok(Some(now))
}

/// Unconditional removal. Attendance records referencing the user are left
/// untouched; their userName snapshot keeps them displayable.
pub fn delete_user(store: &mut EntityStore, user_id: i64) -> AppResult<bool> {
    let before = store.users.len();
    store.users.retain(|u| u.id != user_id);
    if store.users.len() == before {
        return Ok(false);
    }
    store.persist_users()?;
    Ok(true)
}

/// Remove a company, refusing while any user still references it.
pub fn delete_company(store: &mut EntityStore, company_id: i64) -> AppResult<bool> {
    let assigned = store.users.iter().filter(|u| u.company_id == company_id).count();
    if assigned > 0 {
        return Err(AppError::CompanyInUse {
            id: company_id,
            users: assigned,
        });
    }
    let before = store.companies.len();
    store.companies.retain(|c| c.id != company_id);
    if store.companies.len() == before {
        return Ok(false);
    }
    store.persist_companies()?;
    Ok(true)
}

/// In-place replacement of an arbitrary subset of company fields.
pub fn edit_company(store: &mut EntityStore, company_id: i64, update: CompanyUpdate) -> AppResult<bool> {
    if let Some(name) = &update.name {
        validate::require_name(name)?;
    }
    validate::optional_email(update.email.as_deref())?;

    let Some(company) = store.companies.iter_mut().find(|c| c.id == company_id) else {
        return Ok(false);
    };
    if let Some(name) = update.name {
        company.name = name.trim().to_string();
    }
    if let Some(reg) = update.registration_number {
        company.registration_number = Some(reg);
    }
    if let Some(email) = update.email {
        company.email = Some(email);
    }
    if let Some(phone) = update.phone {
        company.phone = Some(phone);
    }
    if let Some(address) = update.address {
        company.address = Some(address);
    }
    if let Some(active) = update.active {
        company.active = active;
    }
    store.persist_companies()?;
    Ok(true)
}

/// View-level filter: the users of one company, or the full collection when
/// no filter is selected. Pure, non-mutating.
pub fn users_by_company(users: &[User], company_id: Option<i64>) -> Vec<&User> {
    match company_id {
        Some(cid) => users.iter().filter(|u| u.company_id == cid).collect(),
        None => users.iter().collect(),
    }
}
