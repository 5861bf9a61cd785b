/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - users: UserStore (trait object, テストでは mock に差し替え)
 *   - header_auth: auth gate の設定 + store
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use std::sync::Arc;

use crate::services::{
    header_auth::{HeaderAuth, HeaderAuthConfig},
    users::UserStore,
};

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub header_auth: HeaderAuth,
}

impl AppState {
    pub fn new(users: Arc<dyn UserStore>, header_auth: HeaderAuthConfig) -> Self {
        let header_auth = HeaderAuth::new(header_auth, users.clone());
        Self { users, header_auth }
    }
}
