//! Proxy-asserted username → internal user id.
//!
//! One lookup per call, at most one create. No caching, no retries.
//! A create that loses a race (or hits a taken username) is reported as
//! `ResolveError::Create`; the caller must not fall back to another user.
use thiserror::Error;

use crate::repos::error::RepoError;
use crate::services::users::{NewUser, UserId, UserStore};

use super::extract::{external_identity, normalize_username};

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("user lookup failed")]
    Lookup(#[source] RepoError),
    #[error("user provisioning failed")]
    Create(#[source] RepoError),
}

pub async fn resolve_user(users: &dyn UserStore, raw: &str) -> Result<UserId, ResolveError> {
    let identity = external_identity(raw);

    match users.lookup_by_external_id(&identity).await {
        Ok(user) => {
            tracing::debug!(user_id = user.id, external_id = %identity, "known user");
            return Ok(user.id);
        }
        Err(err) if err.is_not_found() => {}
        Err(err) => return Err(ResolveError::Lookup(err)),
    }

    let username = normalize_username(raw);
    let user = users
        .create_user(NewUser {
            external_id: identity.clone(),
            username,
        })
        .await
        .map_err(ResolveError::Create)?;

    tracing::info!(
        user_id = user.id,
        username = %user.username,
        provider = identity.provider(),
        external_id = %identity,
        "provisioned user from auth proxy header"
    );

    Ok(user.id)
}
