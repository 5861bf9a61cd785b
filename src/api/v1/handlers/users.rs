/*
 * Responsibility
 * - GET /users/{username}: UserStore の username 検索
 * - 見つからなければ 404、それ以外の失敗は 500
 */
use axum::{
    Json,
    extract::{Path, State},
};

use crate::{api::v1::dto::users::UserResponse, error::AppError, state::AppState};

pub async fn get_user_by_username(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.users.get_by_username(&username).await?;
    Ok(Json(user.into()))
}
