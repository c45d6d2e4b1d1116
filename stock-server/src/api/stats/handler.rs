//! Statistics API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::stats::StatsReport;
use crate::utils::{AppResult, time};

/// GET /api/stats - 统计汇总 (营收、毛利估算、七日曲线、热销商品)
pub async fn get_stats(State(state): State<ServerState>) -> AppResult<Json<StatsReport>> {
    let report = state.stats.compute(time::today())?;
    Ok(Json(report))
}
