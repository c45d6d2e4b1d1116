use std::path::PathBuf;

use crate::auth::JwtConfig;

/// 商品目录文件名
pub const INVENTORY_FILE: &str = "inventory.csv";
/// 用户凭证文件名
pub const USERS_FILE: &str = "users.csv";
/// 销售台账文件名
pub const SALES_FILE: &str = "sales.csv";

/// 服务器配置 - 库存节点的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | ./data | 工作目录 (CSV 数据文件、日志) |
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | JWT_SECRET | (开发环境自动生成) | JWT 密钥 |
/// | JWT_EXPIRATION_MINUTES | 30 | 令牌有效期 (分钟) |
/// | ENVIRONMENT | development | 运行环境 |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/data/stock HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录，存储 CSV 数据文件和日志
    pub work_dir: PathBuf,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// JWT 认证配置
    pub jwt: JwtConfig,
    /// 运行环境: development | staging | production
    pub environment: String,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data")),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            jwt: JwtConfig::default(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(work_dir: impl Into<PathBuf>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    /// 商品目录 CSV 路径
    pub fn inventory_file(&self) -> PathBuf {
        self.work_dir.join(INVENTORY_FILE)
    }

    /// 用户凭证 CSV 路径
    pub fn users_file(&self) -> PathBuf {
        self.work_dir.join(USERS_FILE)
    }

    /// 销售台账 CSV 路径
    pub fn sales_file(&self) -> PathBuf {
        self.work_dir.join(SALES_FILE)
    }

    /// 日志目录
    pub fn log_dir(&self) -> PathBuf {
        self.work_dir.join("logs")
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
