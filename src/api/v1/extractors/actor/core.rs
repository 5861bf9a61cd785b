use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use super::Actor;

/// Handler で Actor を受け取るための extractor
/// extensions に Actor が無ければ anonymous として扱う (拒否はしない)
/// 認証必須にしたい場合は handler 側で `is_authenticated()` を見る
#[derive(Debug, Clone, Copy)]
pub struct CurrentActor(pub Actor);

impl<S> FromRequestParts<S> for CurrentActor
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let actor = parts
            .extensions
            .get::<Actor>()
            .copied()
            .unwrap_or_else(Actor::anonymous);

        Ok(CurrentActor(actor))
    }
}
