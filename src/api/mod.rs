//! Journal Host API
//!
//! HTTP API consumed by the browser UI, built with Axum. The UI never talks to
//! the ledger or the wallet connector directly; it goes through these routes.
//!
//! # Endpoints
//!
//! ## Journals
//! - `POST /api/v1/journals` - Create a journal
//! - `GET /api/v1/journals/:id` - Read a journal
//! - `POST /api/v1/journals/:id/entries` - Append an entry
//!
//! ## Network
//! - `GET /api/v1/network` - Active network variables
//! - `GET /api/v1/account` - Connected wallet account
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health` - Health status
//!
//! When `static_dir` is configured, the built UI is served for every other path.

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{AppState, NetworkInfo};

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/journals", post(routes::journals::create_journal))
        .route("/journals/:id", get(routes::journals::get_journal))
        .route("/journals/:id/entries", post(routes::journals::add_entry))
        .route("/network", get(routes::network::get_network))
        .route("/account", get(routes::network::get_account));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/", get(routes::health::full_health));

    let static_dir = state.config.static_dir.clone();
    let shared_state = Arc::new(state);

    let router = Router::new()
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes);

    let router = match static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    };

    router
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the API server
pub async fn serve(state: AppState) -> Result<(), ApiError> {
    let addr = state.config.addr();
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Journal API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Journal API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::journal::testing::{journal_object, FakeLedger, FakeWallet};
    use crate::ledger::ObjectId;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    const OWNER: &str = "0x1";

    fn create_test_app(ledger: Arc<FakeLedger>, package: Option<&str>) -> Router {
        let network = NetworkInfo {
            name: "localnet".to_string(),
            rpc_url: "http://127.0.0.1:9000".to_string(),
            journal_package_id: package.map(|p| ObjectId::parse(p).unwrap()),
        };
        let state = AppState::new(
            ledger,
            Arc::new(FakeWallet::connected(OWNER)),
            network,
            ApiConfig::default(),
        );
        build_router(state)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_live() {
        let app = create_test_app(Arc::new(FakeLedger::new()), Some("0x42"));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health/live")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_degraded_without_package() {
        let app = create_test_app(Arc::new(FakeLedger::new()), None);

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "degraded");
    }

    #[tokio::test]
    async fn test_network() {
        let app = create_test_app(Arc::new(FakeLedger::new()), Some("0x42"));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/network")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["network"], "localnet");
        assert_eq!(
            body["journal_package_id"],
            ObjectId::parse("0x42").unwrap().as_str()
        );
    }

    #[tokio::test]
    async fn test_get_journal() {
        let ledger = Arc::new(FakeLedger::new());
        ledger.insert(journal_object(
            "0xabc",
            OWNER,
            "Travel",
            &[("first", "1700000000000"), ("second", "1700000001000")],
        ));
        let app = create_test_app(ledger, Some("0x42"));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/journals/0xabc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["title"], "Travel");
        assert_eq!(body["entries"][0]["content"], "first");
        assert_eq!(body["entries"][1]["create_at_ms"], "1700000001000");
    }

    #[tokio::test]
    async fn test_get_journal_not_found() {
        let app = create_test_app(Arc::new(FakeLedger::new()), Some("0x42"));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/journals/0xabc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_get_journal_invalid_id() {
        let app = create_test_app(Arc::new(FakeLedger::new()), Some("0x42"));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/journals/not-an-id")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_get_journal_ledger_error() {
        let ledger = Arc::new(FakeLedger::new());
        ledger.fail_reads("network down");
        let app = create_test_app(ledger, Some("0x42"));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/journals/0xabc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(body_json(response).await["error"]["message"], "network down");
    }

    #[tokio::test]
    async fn test_create_journal() {
        let ledger = Arc::new(FakeLedger::new());
        ledger.set_created(ObjectId::parse("0xbeef").unwrap());
        let app = create_test_app(ledger, Some("0x42"));

        let response = app
            .oneshot(post_json("/api/v1/journals", r#"{"title": "Travel"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            body_json(response).await["id"],
            ObjectId::parse("0xbeef").unwrap().as_str()
        );
    }

    #[tokio::test]
    async fn test_create_journal_blank_title() {
        let app = create_test_app(Arc::new(FakeLedger::new()), Some("0x42"));

        let response = app
            .oneshot(post_json("/api/v1/journals", r#"{"title": "   "}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_journal_without_package() {
        let app = create_test_app(Arc::new(FakeLedger::new()), None);

        let response = app
            .oneshot(post_json("/api/v1/journals", r#"{"title": "Travel"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_add_entry() {
        let ledger = Arc::new(FakeLedger::new());
        ledger.insert(journal_object("0xabc", OWNER, "Travel", &[]));
        let app = create_test_app(ledger.clone(), Some("0x42"));

        let response = app
            .oneshot(post_json(
                "/api/v1/journals/0xabc/entries",
                r#"{"content": "hello"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(ledger.waits().len(), 1);
    }

    #[tokio::test]
    async fn test_add_entry_invalid_json() {
        let app = create_test_app(Arc::new(FakeLedger::new()), Some("0x42"));

        let response = app
            .oneshot(post_json("/api/v1/journals/0xabc/entries", "not json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
