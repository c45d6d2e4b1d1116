//! Credential Model

use serde::{Deserialize, Serialize};

/// Stored user credential
///
/// `hash` is the hex SHA-256 digest of `salt` ‖ password. Credentials are
/// created by registration and never mutated or deleted afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credential {
    pub username: String,
    pub salt: String,
    pub hash: String,
}
