/*
 * Responsibility
 * - Users の response DTO
 */
use serde::Serialize;

use crate::services::users::{User, UserId};

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: UserId,
    pub username: String,
    pub external_id: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            external_id: user.external_id,
        }
    }
}
