/*
 * Responsibility
 * - 設定されたヘッダ名で、プロキシが主張するユーザー名を取り出す
 * - external identity (provider + 生の値) と候補 username を作る
 * - 副作用なし (ヘッダ設定 + request だけの純粋関数)
 */
use axum::http::{HeaderMap, HeaderName};

use crate::services::users::ExternalIdentity;

/// Provider tag stored with every identity created through the proxy header.
pub const PROVIDER: &str = "http-header";

/// Which header (if any) carries the proxy-asserted username.
#[derive(Debug, Clone, Default)]
pub struct HeaderAuthConfig {
    header: Option<HeaderName>,
}

impl HeaderAuthConfig {
    pub fn new(header: Option<HeaderName>) -> Self {
        Self { header }
    }

    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn header(&self) -> Option<&HeaderName> {
        self.header.as_ref()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assertion<'a> {
    /// Header auth is not configured; other auth mechanisms apply.
    Disabled,
    /// Configured, but the request carried no usable value.
    Missing,
    Present(&'a str),
}

/// Reads the asserted username off `headers`.
///
/// Empty and non-UTF-8 values count as missing.
pub fn extract<'a>(config: &HeaderAuthConfig, headers: &'a HeaderMap) -> Assertion<'a> {
    let Some(name) = config.header() else {
        return Assertion::Disabled;
    };

    match headers.get(name).and_then(|v| v.to_str().ok()) {
        Some(value) if !value.is_empty() => Assertion::Present(value),
        _ => Assertion::Missing,
    }
}

/// Lookup key for a proxy-asserted username. Never normalized.
pub fn external_identity(raw: &str) -> ExternalIdentity {
    ExternalIdentity::new(PROVIDER, raw)
}

/// Maps characters that are not allowed in usernames to a legal substitute.
///
/// Only `.` is rewritten (to `-`). Anything else is left for the store's own
/// username validation.
pub fn normalize_username(raw: &str) -> String {
    raw.chars()
        .map(|c| if c == '.' { '-' } else { c })
        .collect()
}
