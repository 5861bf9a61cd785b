/*
 * Responsibility
 * - middleware の公開インターフェース
 * - auth: auth proxy ヘッダ認証 / http: request-id, trace, limit, timeout
 */
pub mod auth;
pub mod http;
