//! Order API Handlers

use axum::{Json, extract::State};

use shared::client::{OrderRequest, OrderResponse};
use shared::models::CartItem;

use crate::core::ServerState;
use crate::stats::TransactionSummary;
use crate::utils::AppResult;

/// POST /api/orders - 下单 (整单校验后提交)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<OrderRequest>,
) -> AppResult<Json<OrderResponse>> {
    let cart: Vec<CartItem> = payload
        .items
        .iter()
        .map(|item| CartItem {
            product_id: item.id,
            quantity: item.qte,
        })
        .collect();

    let receipt = state.orders.process(&cart, &payload.client)?;

    tracing::info!(
        transaction_id = %receipt.transaction_id,
        lines = receipt.lines.len(),
        client = %payload.client,
        "Order processed"
    );

    Ok(Json(OrderResponse {
        success: true,
        message: "Order processed successfully".to_string(),
        transaction_id: Some(receipt.transaction_id),
    }))
}

/// GET /api/orders - 按交易分组的销售历史 (最近在前)
pub async fn history(
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<TransactionSummary>>> {
    let history = state.stats.grouped_history()?;
    Ok(Json(history))
}
