//! Sale Ledger Store
//!
//! 销售台账：append-only CSV。首次写入时补表头，之后只追加。

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use shared::models::SaleLine;

use super::{DELIMITER, StoreResult};

/// Append-only CSV ledger of sale lines
pub struct SaleLedger {
    path: PathBuf,
    lock: Mutex<()>,
}

impl SaleLedger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Append one sale line
    pub fn append(&self, line: &SaleLine) -> StoreResult<()> {
        self.append_all(std::slice::from_ref(line))
    }

    /// Append a batch of sale lines under one file handle
    ///
    /// The header row is written only when the file is missing or empty.
    pub fn append_all(&self, lines: &[SaleLine]) -> StoreResult<()> {
        if lines.is_empty() {
            return Ok(());
        }

        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);

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

        for line in lines {
            writer.serialize(line)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Every sale line, in file (append) order
    ///
    /// A missing backing file is an empty ledger, not an error.
    pub fn load_all(&self) -> StoreResult<Vec<SaleLine>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(DELIMITER)
            .from_path(&self.path)?;

        let mut lines: Vec<SaleLine> = Vec::new();
        for record in reader.deserialize() {
            lines.push(record?);
        }
        Ok(lines)
    }

    /// Path of the backing file (used by diagnostics and tests)
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl std::fmt::Debug for SaleLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SaleLedger")
            .field("path", &self.path)
            .finish()
    }
}
