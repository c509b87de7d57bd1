//! Durable key-value storage: one JSON document per key, kept as UTF-8 text
//! files under the configured data directory.

use crate::errors::{AppError, AppResult};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

pub const KEY_USERS: &str = "users";
pub const KEY_COMPANIES: &str = "companies";
pub const KEY_RECORDS: &str = "attendanceRecords";
pub const KEY_SETTINGS: &str = "systemSettings";

pub struct Storage {
    dir: PathBuf,
}

impl Storage {
    /// Open (and create, if missing) the storage directory.
    pub fn open(dir: impl AsRef<Path>) -> AppResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Raw JSON text for a key, `None` when the key was never written.
    pub fn read(&self, key: &str) -> AppResult<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    /// Load and deserialize a key. A present but unparsable value is surfaced
    /// as `AppError::Corrupt` instead of being silently discarded.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> AppResult<Option<T>> {
        match self.read(key)? {
            None => Ok(None),
            Some(text) => {
                serde_json::from_str(&text).map(Some).map_err(|_| AppError::Corrupt(key.to_string()))
            }
        }
    }

    /// Serialize and overwrite a key with the full value.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> AppResult<()> {
        let json = serde_json::to_string_pretty(value)?;
        fs::write(self.key_path(key), json)?;
        Ok(())
    }

    /// List the JSON files currently held (used by backup).
    pub fn files(&self) -> AppResult<Vec<PathBuf>> {
        let mut out = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|e| e == "json") {
                out.push(path);
            }
        }
        out.sort();
        Ok(out)
    }
}
