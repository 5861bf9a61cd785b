/*
 * Responsibility
 * - auth proxy が付与するヘッダによる認証 (extract → resolve)
 * - middleware が使う state (HeaderAuth) を組み立てる
 */
use std::sync::Arc;

use crate::services::users::UserStore;

pub mod extract;
pub mod resolver;

pub use extract::{Assertion, HeaderAuthConfig, extract};
pub use resolver::resolve_user;

/// Middleware state for the header auth gate. Cheap to clone.
#[derive(Clone)]
pub struct HeaderAuth {
    config: HeaderAuthConfig,
    users: Arc<dyn UserStore>,
}

impl HeaderAuth {
    pub fn new(config: HeaderAuthConfig, users: Arc<dyn UserStore>) -> Self {
        Self { config, users }
    }

    pub fn config(&self) -> &HeaderAuthConfig {
        &self.config
    }

    pub fn users(&self) -> &dyn UserStore {
        self.users.as_ref()
    }
}
