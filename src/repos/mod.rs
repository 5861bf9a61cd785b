/*
 * Responsibility
 * - DB アクセス層 (SQLx)
 */
pub mod error;
pub mod user_repo;
