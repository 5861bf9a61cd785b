/*
 * Responsibility
 * - users テーブル向け SQLx 操作
 * - external_id / username の一意制約違反は RepoError::Conflict に変換
 * - 見つからない場合は RepoError::NotFound (auth gate が provisioning に進む合図)
 */
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use crate::repos::error::{RepoError, RepoResult};

#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: i32,
    pub username: String,
    pub external_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

pub async fn get_by_external_id(db: &PgPool, external_id: &str) -> RepoResult<UserRow> {
    sqlx::query_as::<_, UserRow>(
        r#"
        SELECT id, username, external_id, created_at
        FROM users
        WHERE external_id = $1
        "#,
    )
    .bind(external_id)
    .fetch_optional(db)
    .await
    .map_err(RepoError::from_sqlx)?
    .ok_or(RepoError::NotFound)
}

pub async fn get_by_username(db: &PgPool, username: &str) -> RepoResult<UserRow> {
    sqlx::query_as::<_, UserRow>(
        r#"
        SELECT id, username, external_id, created_at
        FROM users
        WHERE username = $1
        "#,
    )
    .bind(username)
    .fetch_optional(db)
    .await
    .map_err(RepoError::from_sqlx)?
    .ok_or(RepoError::NotFound)
}

pub async fn create(db: &PgPool, username: &str, external_id: &str) -> RepoResult<UserRow> {
    let row = sqlx::query_as::<_, UserRow>(
        r#"
        INSERT INTO users (username, external_id)
        VALUES ($1, $2)
        RETURNING id, username, external_id, created_at
        "#,
    )
    .bind(username)
    .bind(external_id)
    .fetch_one(db)
    .await
    .map_err(RepoError::from_sqlx)?;

    Ok(row)
}
