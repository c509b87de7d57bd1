pub mod storage;

pub use storage::{KEY_COMPANIES, KEY_RECORDS, KEY_SETTINGS, KEY_USERS, Storage};

use crate::errors::AppResult;
use crate::models::{AttendanceRecord, Company, User};
use std::path::Path;

/// The in-memory entity collections, mirrored to durable storage.
///
/// The store is the sole owner of entity instances: callers mutate the
/// collections through the `core` operations, each of which re-persists the
/// affected collection before returning. Reads always see the snapshot
/// current at call time.
pub struct EntityStore {
    storage: Storage,
    pub users: Vec<User>,
    pub companies: Vec<Company>,
    pub records: Vec<AttendanceRecord>,
}

impl EntityStore {
    /// Load all collections from the given data directory. Absent keys start
    /// as empty collections; a present but corrupted key is a load error.
    pub fn open(dir: impl AsRef<Path>) -> AppResult<Self> {
        let storage = Storage::open(dir)?;
        let users = storage.load(KEY_USERS)?.unwrap_or_default();
        let companies = storage.load(KEY_COMPANIES)?.unwrap_or_default();
        let records = storage.load(KEY_RECORDS)?.unwrap_or_default();
        Ok(Self {
            storage,
            users,
            companies,
            records,
        })
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    pub fn persist_users(&self) -> AppResult<()> {
        self.storage.save(KEY_USERS, &self.users)
    }

    pub fn persist_companies(&self) -> AppResult<()> {
        self.storage.save(KEY_COMPANIES, &self.companies)
    }

    pub fn persist_records(&self) -> AppResult<()> {
        self.storage.save(KEY_RECORDS, &self.records)
    }

    /// Next available user id: max existing + 1, or 1 on an empty collection.
    pub fn next_user_id(&self) -> i64 {
        self.users.iter().map(|u| u.id).max().unwrap_or(0) + 1
    }

    pub fn next_company_id(&self) -> i64 {
        self.companies.iter().map(|c| c.id).max().unwrap_or(0) + 1
    }

    pub fn user_by_id(&self, id: i64) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn company_by_id(&self, id: i64) -> Option<&Company> {
        self.companies.iter().find(|c| c.id == id)
    }
}
