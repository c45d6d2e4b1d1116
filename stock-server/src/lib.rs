//! Stock Edge Server - 轻量库存/销售点管理服务
//!
//! # 架构概述
//!
//! 本模块是服务端的主入口，提供以下核心功能：
//!
//! - **平面文件存储** (`store`): 商品目录、销售台账、用户凭证的 CSV 存储
//! - **订单处理** (`orders`): 两段式校验/提交的下单核心
//! - **统计汇总** (`stats`): 营收、毛利估算、七日曲线、热销商品
//! - **认证** (`auth`): JWT + 加盐 SHA-256 凭证体系
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! stock-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── auth/          # JWT 认证、口令摘要
//! ├── store/         # 平面文件存储层
//! ├── orders/        # 订单处理核心
//! ├── stats/         # 统计汇总
//! ├── api/           # HTTP 路由和处理器
//! └── utils/         # 工具函数
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod orders;
pub mod stats;
pub mod store;
pub mod utils;

// Re-export 公共类型
pub use auth::{CurrentUser, JwtConfig, JwtService};
pub use crate::core::{Config, Server, ServerState};
pub use orders::{OrderError, OrderProcessor, OrderReceipt};
pub use stats::StatsAggregator;
pub use store::{CatalogStore, CredentialStore, SaleLedger};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - 支持 tracing 格式说明符
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// 设置运行环境 (dotenv, 日志)
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    // .env 可选，缺失不是错误
    dotenv::dotenv().ok();

    let log_level = std::env::var("RUST_LOG").ok();
    init_logger_with_file(log_level.as_deref(), None);

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
   _____ __             __
  / ___// /_____  _____/ /__
  \__ \/ __/ __ \/ ___/ //_/
 ___/ / /_/ /_/ / /__/ ,<
/____/\__/\____/\___/_/|_|
    ______    __
   / ____/___/ /___ ____
  / __/ / __  / __ `/ _ \
 / /___/ /_/ / /_/ /  __/
/_____/\__,_/\__, /\___/
            /____/
    "#
    );
}
