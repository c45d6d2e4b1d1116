//! Shared types for the stock manager
//!
//! 服务端与各展示层 (HTTP 客户端、桌面壳) 共享的类型：
//!
//! - **模型** (`models`): 商品、销售行、凭证
//! - **DTO** (`client`): 登录、下单、注册等请求/响应类型
//! - **响应** (`response`): 统一 API 响应结构

pub mod client;
pub mod models;
pub mod response;

// Re-export 公共类型
pub use client::{
    LoginRequest, LoginResponse, OrderItemInput, OrderRequest, OrderResponse, RegisterRequest,
    UserInfo,
};
pub use models::{CartItem, Credential, Product, ProductCreate, ProductUpdate, SaleLine};
pub use response::{API_CODE_SUCCESS, ApiResponse};
