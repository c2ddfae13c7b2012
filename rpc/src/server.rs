//! Axum-based API server.

use crate::handlers;
use crate::RpcError;
use axum::routing::get;
use axum::Router;
use std::future::Future;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;
use verigate_session::SessionResolver;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<SessionResolver>,
}

/// The API server, configured with a port and the session resolver.
pub struct RpcServer {
    pub port: u16,
    state: AppState,
}

impl RpcServer {
    pub fn new(port: u16, resolver: Arc<SessionResolver>) -> Self {
        Self {
            port,
            state: AppState { resolver },
        }
    }

    /// Build the router. Exposed separately so tests can drive it without a
    /// listener.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/api/user/:uuid", get(handlers::get_user))
            .route("/api/user", get(handlers::missing_uuid))
            .route("/health", get(handlers::health))
            .layer(CorsLayer::permissive())
            .with_state(self.state.clone())
    }

    /// Bind and serve until the shutdown future resolves.
    pub async fn start_with_shutdown(
        &self,
        shutdown: impl Future<Output = ()> + Send + 'static,
    ) -> Result<(), RpcError> {
        let addr = format!("0.0.0.0:{}", self.port);
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| RpcError::Server(format!("bind {addr}: {e}")))?;
        info!("API server listening on {addr}");
        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| RpcError::Server(e.to_string()))
    }

    /// Bind and serve until the process exits.
    pub async fn start(&self) -> Result<(), RpcError> {
        self.start_with_shutdown(std::future::pending()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;
    use verigate_store::{MemorySessionStore, SessionRecord};

    const WALLET: &str = "0xabcdef0123456789abcdef0123456789abcdef01";

    fn router_with(store: MemorySessionStore) -> Router {
        let resolver = Arc::new(SessionResolver::new(Arc::new(store)));
        RpcServer::new(0, resolver).router()
    }

    async fn send_get(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap();
        (status, body)
    }

    #[tokio::test]
    async fn unknown_uuid_is_404_with_session_not_found_code() {
        let (status, body) = send_get(router_with(MemorySessionStore::new()), "/api/user/abc-123").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
        assert_eq!(body["code"], "SESSION_NOT_FOUND");
        assert!(body["message"].as_str().unwrap().contains("/verify"));
    }

    #[tokio::test]
    async fn pending_session_payload_matches_contract() {
        let store = MemorySessionStore::new();
        store.insert(SessionRecord::pending("u1", "d1", "nomad", WALLET, "g1"));
        let (status, body) = send_get(router_with(store), "/api/user/u1").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        let data = &body["data"];
        assert_eq!(data["discordUserId"], "d1");
        assert_eq!(data["walletAddress"], WALLET);
        assert_eq!(data["verifyUuid"], "u1");
        assert_eq!(data["status"], "pending");
        assert_eq!(data["onChainVerified"], false);
        assert_eq!(data["country"], serde_json::Value::Null);
    }

    #[tokio::test]
    async fn completed_session_reports_completed_status() {
        let store = MemorySessionStore::new();
        let mut record = SessionRecord::pending("u2", "d2", "nomad", WALLET, "g1");
        record.verified = true;
        record.selected_country = Some("Portugal".into());
        store.insert(record);
        let (status, body) = send_get(router_with(store), "/api/user/u2").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["status"], "completed");
        assert_eq!(body["data"]["country"], "Portugal");
        // Off-chain acceptance does not imply settlement.
        assert_eq!(body["data"]["onChainVerified"], false);
    }

    #[tokio::test]
    async fn missing_uuid_segment_is_400() {
        let (status, body) = send_get(router_with(MemorySessionStore::new()), "/api/user").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "UUID is required");
    }

    #[tokio::test]
    async fn backend_failure_is_generic_500() {
        let store = MemorySessionStore::new();
        store.fail_lookups("connection refused to mongodb://internal-host");
        let (status, body) = send_get(router_with(store), "/api/user/u1").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal server error");
        // Backend detail stays out of the response.
        assert!(!body.to_string().contains("internal-host"));
    }

    #[tokio::test]
    async fn corrupt_record_is_500_not_404() {
        let store = MemorySessionStore::new();
        let mut record = SessionRecord::pending("u3", "d3", "nomad", WALLET, "g1");
        record.wallet_address = None;
        store.insert(record);
        let (status, body) = send_get(router_with(store), "/api/user/u3").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.get("code").is_none());
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let (status, body) = send_get(router_with(MemorySessionStore::new()), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }
}
