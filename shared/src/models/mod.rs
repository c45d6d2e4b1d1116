//! Domain models
//!
//! 与 CSV 存储格式一一对应的领域模型。

pub mod credential;
pub mod product;
pub mod sale;

pub use credential::Credential;
pub use product::{Product, ProductCreate, ProductUpdate};
pub use sale::{CartItem, SaleLine};
