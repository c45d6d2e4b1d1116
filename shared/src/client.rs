//! Client-related types shared between server and presentation adapters
//!
//! Common request/response types used in API communication.

use serde::{Deserialize, Serialize};

// Re-export ApiResponse from response module
pub use crate::response::ApiResponse;

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

/// User information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub username: String,
}

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

// =============================================================================
// Order API DTOs
// =============================================================================

fn default_client_name() -> String {
    "Anonymous".to_string()
}

/// Cart entry as submitted over the wire: `{id, qte}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemInput {
    pub id: u32,
    pub qte: u32,
}

/// Order request: a client name and the cart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRequest {
    #[serde(default = "default_client_name")]
    pub client: String,
    pub items: Vec<OrderItemInput>,
}

/// Order outcome returned to the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
}
