/*
 * Responsibility
 * - 環境変数の読み込み (PORT, DATABASE_URL, APP_ENV, AUTH_HTTP_HEADER)
 * - 設定値のバリデーション (不足・不正なら起動失敗)
 */
use std::net::SocketAddr;
use std::str::FromStr;

use axum::http::HeaderName;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn from_env() -> Self {
        Self::parse(&std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()))
    }

    fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing configuration: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}

pub struct Config {
    pub addr: SocketAddr,
    pub database_url: String,
    pub database_max_connections: u32,

    pub app_env: AppEnv,

    /// Trusted header set by the auth proxy. `None` disables header auth.
    pub auth_http_header: Option<HeaderName>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let port: u16 = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3000);

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;

        let database_max_connections = std::env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(5);

        let app_env = AppEnv::from_env();

        let auth_http_header =
            parse_header_name(&std::env::var("AUTH_HTTP_HEADER").unwrap_or_default())?;

        Ok(Self {
            addr,
            database_url,
            database_max_connections,
            app_env,
            auth_http_header,
        })
    }
}

/// Empty (or whitespace only) means header auth is off.
fn parse_header_name(raw: &str) -> Result<Option<HeaderName>, ConfigError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    HeaderName::from_bytes(raw.as_bytes())
        .map(Some)
        .map_err(|_| ConfigError::Invalid("AUTH_HTTP_HEADER"))
}
