/*
 * Responsibility
 * - repo が上位に伝える意味の定義
 * - NotFound / Conflict は auth gate が分岐に使う
 */
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("not found")]
    NotFound,
    #[error("conflict")]
    Conflict,
    #[error("db error")]
    Db(#[source] sqlx::Error),
}

impl RepoError {
    pub fn from_sqlx(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(dbe) = &e
            && dbe.code().as_deref() == Some("23505")
        {
            return RepoError::Conflict;
        }
        RepoError::Db(e)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RepoError::NotFound)
    }
}

pub type RepoResult<T> = Result<T, RepoError>;
