/*
 * Responsibility
 * - GET /me: リクエスト主体 (Actor) をそのまま返す
 * - Actor が無い場合は anonymous (header auth 無効時など)
 */
use axum::Json;

use crate::api::v1::{dto::me::MeResponse, extractors::CurrentActor};

pub async fn me(CurrentActor(actor): CurrentActor) -> Json<MeResponse> {
    Json(actor.into())
}
