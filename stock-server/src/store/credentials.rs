//! Credential Store
//!
//! 用户凭证：append-only CSV。注册追加一行，登录按用户名查找。
//! 凭证一经写入不再修改或删除。

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use shared::models::Credential;

use super::{DELIMITER, StoreError, StoreResult};

/// CSV-backed credential store
pub struct CredentialStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Every stored credential, in file order
    pub fn load_all(&self) -> StoreResult<Vec<Credential>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(DELIMITER)
            .from_path(&self.path)?;

        let mut credentials: Vec<Credential> = Vec::new();
        for record in reader.deserialize() {
            credentials.push(record?);
        }
        Ok(credentials)
    }

    /// Look up a credential by username
    pub fn lookup(&self, username: &str) -> StoreResult<Option<Credential>> {
        Ok(self
            .load_all()?
            .into_iter()
            .find(|c| c.username == username))
    }

    /// Append a new credential; usernames are unique
    pub fn insert(&self, credential: &Credential) -> StoreResult<()> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);

        if self.lookup(&credential.username)?.is_some() {
            return Err(StoreError::Duplicate(format!(
                "Username {}",
                credential.username
            )));
        }

        let needs_header = self
            .path
            .metadata()
            .map(|m| m.len() == 0)
            .unwrap_or(true);

        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;

        let mut writer = csv::WriterBuilder::new()
            .delimiter(DELIMITER)
            .has_headers(needs_header)
            .from_writer(file);

        writer.serialize(credential)?;
        writer.flush()?;
        Ok(())
    }
}

impl std::fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialStore")
            .field("path", &self.path)
            .finish()
    }
}
