//! User store interface consumed by the auth gate.
use async_trait::async_trait;
use sqlx::PgPool;

use crate::repos::{error::RepoResult, user_repo};

use super::types::{ExternalIdentity, NewUser, User};

/// Account storage the auth gate depends on.
///
/// Implementations must:
/// - return `RepoError::NotFound` (and nothing else) when no user matches
/// - enforce uniqueness of both external id and username on create
///
/// Implementations must be shareable across requests (`Arc<dyn UserStore>`).
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    async fn lookup_by_external_id(&self, identity: &ExternalIdentity) -> RepoResult<User>;

    async fn create_user(&self, new_user: NewUser) -> RepoResult<User>;

    async fn get_by_username(&self, username: &str) -> RepoResult<User>;
}

/// Postgres backed store (`users` table).
#[derive(Clone, Debug)]
pub struct PgUserStore {
    db: PgPool,
}

impl PgUserStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn lookup_by_external_id(&self, identity: &ExternalIdentity) -> RepoResult<User> {
        let row = user_repo::get_by_external_id(&self.db, &identity.key()).await?;
        Ok(row.into())
    }

    async fn create_user(&self, new_user: NewUser) -> RepoResult<User> {
        let row =
            user_repo::create(&self.db, &new_user.username, &new_user.external_id.key()).await?;
        Ok(row.into())
    }

    async fn get_by_username(&self, username: &str) -> RepoResult<User> {
        let row = user_repo::get_by_username(&self.db, username).await?;
        Ok(row.into())
    }
}
