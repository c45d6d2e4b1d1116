use std::sync::Arc;

use crate::auth::JwtService;
use crate::core::Config;
use crate::orders::OrderProcessor;
use crate::stats::StatsAggregator;
use crate::store::{CatalogStore, CredentialStore, SaleLedger};

/// 服务器状态 - 持有所有服务的单例引用
///
/// ServerState 是服务端的核心数据结构，持有所有服务的共享引用。
/// 使用 Arc 实现浅拷贝，所有权成本极低。
///
/// # 服务组件
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | catalog | CatalogStore | 商品目录存储 |
/// | ledger | SaleLedger | 销售台账存储 |
/// | credentials | CredentialStore | 用户凭证存储 |
/// | orders | OrderProcessor | 订单处理核心 |
/// | stats | StatsAggregator | 统计汇总 |
/// | jwt_service | Arc<JwtService> | JWT 认证服务 |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 商品目录存储
    pub catalog: Arc<CatalogStore>,
    /// 销售台账存储
    pub ledger: Arc<SaleLedger>,
    /// 用户凭证存储
    pub credentials: Arc<CredentialStore>,
    /// 订单处理核心
    pub orders: Arc<OrderProcessor>,
    /// 统计汇总
    pub stats: Arc<StatsAggregator>,
    /// JWT 认证服务 (Arc 共享所有权)
    pub jwt_service: Arc<JwtService>,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 工作目录 (确保目录存在)
    /// 2. 三个 CSV 存储 (目录、台账、凭证)
    /// 3. 订单处理器与统计汇总 (共享存储引用)
    /// 4. JWT 服务
    pub fn initialize(config: &Config) -> std::io::Result<Self> {
        std::fs::create_dir_all(&config.work_dir)?;

        let catalog = Arc::new(CatalogStore::new(config.inventory_file()));
        let ledger = Arc::new(SaleLedger::new(config.sales_file()));
        let credentials = Arc::new(CredentialStore::new(config.users_file()));

        let orders = Arc::new(OrderProcessor::new(catalog.clone(), ledger.clone()));
        let stats = Arc::new(StatsAggregator::new(ledger.clone()));

        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));

        tracing::info!(
            work_dir = %config.work_dir.display(),
            "Server state initialized"
        );

        Ok(Self {
            config: config.clone(),
            catalog,
            ledger,
            credentials,
            orders,
            stats,
            jwt_service,
        })
    }

    /// 获取 JWT 服务
    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }
}
