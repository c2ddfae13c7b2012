//! RPC error types and their HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;
use verigate_session::ResolveError;

#[derive(Debug, Error)]
pub enum RpcError {
    #[error("UUID is required")]
    MissingUuid,

    #[error("session not found")]
    SessionNotFound,

    /// Full detail is logged server-side; only a generic message crosses the
    /// trust boundary.
    #[error("internal error: {0}")]
    Internal(String),

    #[error("server error: {0}")]
    Server(String),
}

impl From<ResolveError> for RpcError {
    fn from(e: ResolveError) -> Self {
        match e {
            ResolveError::InvalidInput => RpcError::MissingUuid,
            ResolveError::NotFound => RpcError::SessionNotFound,
            ResolveError::Integrity(detail) => {
                RpcError::Internal(format!("integrity: {detail}"))
            }
            ResolveError::Backend(detail) => RpcError::Internal(format!("backend: {detail}")),
        }
    }
}

impl IntoResponse for RpcError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            RpcError::MissingUuid => (
                StatusCode::BAD_REQUEST,
                json!({ "success": false, "error": "UUID is required" }),
            ),
            RpcError::SessionNotFound => (
                StatusCode::NOT_FOUND,
                json!({
                    "success": false,
                    "error": "Invalid verification link",
                    "message": "This verification session was not found. Please run /verify in Discord to get a new link.",
                    "code": "SESSION_NOT_FOUND",
                }),
            ),
            RpcError::Internal(detail) | RpcError::Server(detail) => {
                error!(%detail, "session lookup failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "success": false, "error": "Internal server error" }),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}
