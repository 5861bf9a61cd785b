//! auth proxy ヘッダ検証 → Actor を extensions に入れる
//!
//! - ヘッダ名未設定: 何もせず次へ (他の認証方式に任せる)
//! - 設定済みでヘッダ無し/空: 401 + 固定文言で打ち切り
//! - ヘッダあり: external id で検索 → 無ければ作成 → Actor を付与して次へ
//!
//! Lookup/create failures stop the chain with a 500. Nothing reaches the inner
//! handlers without an attached actor once the header is configured.

use axum::{
    Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::Actor;
use crate::error::AppError;
use crate::services::header_auth::{Assertion, HeaderAuth, extract, resolve_user};

/// Router 全体に auth proxy ヘッダ認証を掛ける。
///
/// 例：
/// ```ignore
/// let app = Router::new().nest("/api/v1", api::v1::routes()).with_state(state.clone());
/// let app = middleware::auth::http_header::apply(app, state.header_auth.clone());
/// ```
pub fn apply<S>(router: Router<S>, header_auth: HeaderAuth) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(middleware::from_fn_with_state(
        header_auth,
        http_header_middleware,
    ))
}

async fn http_header_middleware(
    State(auth): State<HeaderAuth>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let raw = match extract(auth.config(), req.headers()) {
        Assertion::Disabled => None,
        Assertion::Missing => {
            tracing::debug!(uri = %req.uri(), "request without auth proxy header");
            return Err(AppError::ProxyAuthRequired);
        }
        Assertion::Present(raw) => Some(raw.to_owned()),
    };
    let Some(raw) = raw else {
        return Ok(next.run(req).await);
    };

    let user_id = resolve_user(auth.users(), &raw).await.map_err(|err| {
        tracing::error!(error = ?err, asserted = %raw, "auth proxy identity resolution failed");
        AppError::Internal
    })?;

    req.extensions_mut().insert(Actor::from_uid(user_id));

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use axum::{
        body::to_bytes,
        http::{HeaderName, StatusCode},
        routing::get,
    };
    use tower::ServiceExt;

    use super::*;
    use crate::api::v1::extractors::CurrentActor;
    use crate::services::header_auth::HeaderAuthConfig;
    use crate::services::users::store::mock::MockUserStore;

    const HEADER: &str = "x-sso-user-header";

    struct Harness {
        app: Router,
        store: Arc<MockUserStore>,
        hits: Arc<AtomicUsize>,
    }

    fn harness(config: HeaderAuthConfig, store: MockUserStore) -> Harness {
        let store = Arc::new(store);
        let hits = Arc::new(AtomicUsize::new(0));

        let counter = hits.clone();
        let router = Router::new().route(
            "/",
            get(move |CurrentActor(actor): CurrentActor| {
                let counter = counter.clone();
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    match actor.uid() {
                        Some(uid) => format!("user {uid}"),
                        None => "no user".to_string(),
                    }
                }
            }),
        );

        let app = apply(router, HeaderAuth::new(config, store.clone()));
        Harness { app, store, hits }
    }

    fn enabled() -> HeaderAuthConfig {
        HeaderAuthConfig::new(Some(HeaderName::from_static(HEADER)))
    }

    async fn send(app: Router, header: Option<&str>) -> (StatusCode, String) {
        let mut builder = Request::builder().uri("/");
        if let Some(value) = header {
            builder = builder.header(HEADER, value);
        }
        let res = app
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = res.status();
        let body = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn disabled_passes_through_without_actor() {
        let h = harness(HeaderAuthConfig::disabled(), MockUserStore::new());

        let (status, body) = send(h.app, Some("alice")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "no user");
        assert_eq!(h.hits.load(Ordering::SeqCst), 1);
        assert!(h.store.lookup_keys().is_empty());
    }

    #[tokio::test]
    async fn not_sent_is_rejected() {
        let h = harness(enabled(), MockUserStore::new());

        let (status, body) = send(h.app, None).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, "must access via HTTP authentication proxy\n");
        assert_eq!(h.hits.load(Ordering::SeqCst), 0);
        assert!(h.store.lookup_keys().is_empty());
    }

    #[tokio::test]
    async fn empty_header_is_rejected() {
        let h = harness(enabled(), MockUserStore::new());

        let (status, body) = send(h.app, Some("")).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, "must access via HTTP authentication proxy\n");
        assert_eq!(h.hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn sent_new_user() {
        let h = harness(enabled(), MockUserStore::new());

        let (status, body) = send(h.app, Some("alice")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "user 1");
        assert_eq!(h.store.lookup_keys(), vec!["http-header:alice"]);
        assert_eq!(h.store.created()[0].username, "alice");
    }

    #[tokio::test]
    async fn sent_new_user_with_unnormalized_username() {
        let h = harness(enabled(), MockUserStore::new());

        let (_, body) = send(h.app, Some("alice.zhao")).await;

        assert_eq!(body, "user 1");
        assert_eq!(h.store.lookup_keys(), vec!["http-header:alice.zhao"]);
        assert_eq!(h.store.created()[0].username, "alice-zhao");
    }

    #[tokio::test]
    async fn sent_existing_user() {
        let h = harness(
            enabled(),
            MockUserStore::new().with_user(1, "bob", "http-header:bob"),
        );

        let (_, body) = send(h.app, Some("bob")).await;

        assert_eq!(body, "user 1");
        assert_eq!(h.store.lookup_keys(), vec!["http-header:bob"]);
        assert!(h.store.created().is_empty());
    }

    #[tokio::test]
    async fn lookup_failure_stops_the_chain() {
        let h = harness(enabled(), MockUserStore::new().failing_lookup());

        let (status, _) = send(h.app, Some("alice")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(h.store.created().is_empty());
        assert_eq!(h.hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn create_failure_stops_the_chain() {
        let h = harness(enabled(), MockUserStore::new().failing_create());

        let (status, _) = send(h.app, Some("alice")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(h.store.created().len(), 1);
        assert_eq!(h.hits.load(Ordering::SeqCst), 0);
    }
}
