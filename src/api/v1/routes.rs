/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - auth proxy ヘッダ認証は app.rs で Router 全体に掛ける (ここでは意識しない)
 */
use axum::{Router, routing::get};

use crate::state::AppState;

use crate::api::v1::handlers::{health::health, me::me, users::get_user_by_username};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/me", get(me))
        .route("/users/{username}", get(get_user_by_username))
}
