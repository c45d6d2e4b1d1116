//! Product API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use rust_decimal::Decimal;

use shared::models::{Product, ProductCreate, ProductUpdate};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// 价格与数量的公共校验
fn check_payload(name: &str, price: Decimal) -> AppResult<()> {
    if name.trim().is_empty() {
        return Err(AppError::validation("Product name cannot be empty"));
    }
    if price < Decimal::ZERO {
        return Err(AppError::validation("Price cannot be negative"));
    }
    Ok(())
}

/// GET /api/products - 获取所有商品
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Product>>> {
    let products = state.catalog.list()?;
    Ok(Json(products))
}

/// GET /api/products/:id - 获取单个商品
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<u32>,
) -> AppResult<Json<Product>> {
    let product = state.catalog.get(id)?;
    Ok(Json(product))
}

/// POST /api/products - 创建商品
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ProductCreate>,
) -> AppResult<Json<Product>> {
    check_payload(&payload.name, payload.price)?;

    let product = state.catalog.add(payload)?;
    Ok(Json(product))
}

/// PUT /api/products/:id - 更新商品 (整体替换三个字段)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<u32>,
    Json(payload): Json<ProductUpdate>,
) -> AppResult<Json<Product>> {
    check_payload(&payload.name, payload.price)?;

    let product = state.catalog.update(id, payload)?;
    Ok(Json(product))
}

/// DELETE /api/products/:id - 删除商品
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<u32>,
) -> AppResult<Json<bool>> {
    state.catalog.delete(id)?;
    Ok(Json(true))
}
