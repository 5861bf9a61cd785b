/*
 * Responsibility
 * - GET /health (疎通用)
 * - header auth 有効時は gate を通った後にしか届かない
 */
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}
