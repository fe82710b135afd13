//! Handler模块

use axum::{extract::State, response::Html, Json};

use common::errors::AppError;
use common::models::data::DataResponse;
use crate::service::DataService;
use crate::state::AppState;

/// 欢迎页
pub async fn home() -> Html<&'static str> {
    Html("Welcome to the Flask App!")
}

/// 查询当前数据库名并以 JSON 返回
pub async fn data(
    State(state): State<AppState>,
) -> Result<Json<DataResponse>, AppError> {
    let service = DataService::new(state.config.database.clone());
    let database = service.database_name().await?;
    Ok(Json(DataResponse::new(database)))
}
