use std::fmt;

use crate::repos::user_repo::UserRow;

pub type UserId = i32;

/// A user record as seen by the auth gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub external_id: Option<String>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            username: row.username,
            external_id: row.external_id,
        }
    }
}

/// Durable link between an upstream identity and a user record.
///
/// - `provider` は認証方式の定数 (ex: `http-header`)
/// - `id` は上流が主張した値そのもの (正規化しない)
///
/// The stored form is `"{provider}:{id}"`, see [`ExternalIdentity::key`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalIdentity {
    provider: &'static str,
    id: String,
}

impl ExternalIdentity {
    pub fn new(provider: &'static str, id: impl Into<String>) -> Self {
        Self {
            provider,
            id: id.into(),
        }
    }

    pub fn provider(&self) -> &'static str {
        self.provider
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn key(&self) -> String {
        format!("{}:{}", self.provider, self.id)
    }
}

impl fmt::Display for ExternalIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.provider, self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub external_id: ExternalIdentity,
    pub username: String,
}
