//! Flat-file Storage Layer
//!
//! CSV-backed stores, one per data set:
//!
//! | Store | File | Write pattern |
//! |-------|------|---------------|
//! | [`CatalogStore`] | `inventory.csv` | full rewrite per mutation (atomic replace) |
//! | [`SaleLedger`] | `sales.csv` | append-only |
//! | [`CredentialStore`] | `users.csv` | append-only |
//!
//! Every store assumes a single writer process. Within the process, each
//! store serializes its load → mutate → rewrite cycle behind its own mutex;
//! cross-store ordering (catalog deduction before ledger append) is the
//! order processor's job.
//!
//! Files are semicolon-delimited CSV with a header row. A missing file
//! reads as an empty data set.

pub mod catalog;
pub mod credentials;
pub mod ledger;

pub use catalog::CatalogStore;
pub use credentials::CredentialStore;
pub use ledger::SaleLedger;

use thiserror::Error;

/// Storage error types
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for storage operations
pub type StoreResult<T> = Result<T, StoreError>;

/// 数据文件统一使用分号分隔
pub(crate) const DELIMITER: u8 = b';';
