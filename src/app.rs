/*
 * Responsibility
 * - tracing / panic hook の初期化
 * - Config読み込み → 依存生成 (PgPool, UserStore) → Router 組み立て
 * - Middleware の適用 (auth proxy ヘッダ認証 → HTTP 共通)
 * - axum::serve() で起動
 */
use std::{panic, process, sync::Arc};

use anyhow::{Context, Result};
use axum::Router;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    api,
    config::Config,
    middleware,
    services::{header_auth::HeaderAuthConfig, users::PgUserStore},
    state::AppState,
};

fn init_tracing() {
    // RUST_LOG=info,http_header_auth=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        tracing::error!(?info, "panic");

        // development は即落として気付けるようにする
        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

pub async fn run() -> Result<()> {
    init_tracing();
    let config = Config::from_env()?;
    init_panic_hook(!config.app_env.is_production());

    let state = build_state(&config).await?;
    let app = build_router(state);

    tracing::info!(
        "starting API in {:?} mode on {}",
        config.app_env,
        config.addr
    );

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn build_state(config: &Config) -> Result<AppState> {
    let db = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await
        .context("failed to connect to DATABASE_URL")?;

    let users = Arc::new(PgUserStore::new(db));
    let header_auth = HeaderAuthConfig::new(config.auth_http_header.clone());
    match header_auth.header() {
        Some(header) => tracing::info!(%header, "auth proxy header authentication enabled"),
        None => tracing::warn!("AUTH_HTTP_HEADER is not set; header authentication is disabled"),
    }

    Ok(AppState::new(users, header_auth))
}

fn build_router(state: AppState) -> Router {
    let header_auth = state.header_auth.clone();

    let router = Router::new()
        .nest("/api/v1", api::v1::routes())
        .with_state(state);

    let router = middleware::auth::http_header::apply(router, header_auth);
    middleware::http::apply(router)
}
