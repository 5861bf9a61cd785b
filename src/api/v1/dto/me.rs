use serde::Serialize;

use crate::api::v1::extractors::Actor;
use crate::services::users::UserId;

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub authenticated: bool,
    pub user_id: Option<UserId>,
}

impl From<Actor> for MeResponse {
    fn from(actor: Actor) -> Self {
        Self {
            authenticated: actor.is_authenticated(),
            user_id: actor.uid(),
        }
    }
}
