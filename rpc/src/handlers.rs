//! Request handlers and wire payloads.

use crate::{AppState, RpcError};
use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;
use verigate_types::{Gender, SessionStatus, Timestamp, VerificationSession, WalletAddress};

/// Success envelope.
#[derive(Serialize, Deserialize)]
pub struct ApiSuccess<T> {
    pub success: bool,
    pub data: T,
}

/// The session payload as consumed by the verification page. Field names are
/// the contract; `status` is derived, never stored.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionPayload {
    pub discord_user_id: String,
    pub username: String,
    pub wallet_address: WalletAddress,
    pub guild_id: String,
    pub verify_uuid: String,
    pub verified: bool,
    pub on_chain_verified: bool,
    pub country: Option<String>,
    pub gender: Option<Gender>,
    pub is_adult: Option<bool>,
    pub ens_name: Option<String>,
    pub status: SessionStatus,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
    pub verified_at: Option<Timestamp>,
}

impl From<VerificationSession> for SessionPayload {
    fn from(session: VerificationSession) -> Self {
        let status = session.status();
        Self {
            discord_user_id: session.discord_user_id,
            username: session.username,
            wallet_address: session.wallet_address,
            guild_id: session.guild_id,
            verify_uuid: session.session_id,
            verified: session.verified,
            on_chain_verified: session.on_chain_verified,
            country: session.country,
            gender: session.gender,
            is_adult: session.is_adult,
            ens_name: session.ens_name,
            status,
            created_at: session.created_at,
            updated_at: session.updated_at,
            verified_at: session.verified_at,
        }
    }
}

/// `GET /api/user/{uuid}` — resolve a verification session.
pub async fn get_user(
    State(state): State<AppState>,
    Path(uuid): Path<String>,
) -> Result<Json<ApiSuccess<SessionPayload>>, RpcError> {
    let session = state.resolver.resolve(&uuid).await?;
    info!(%uuid, username = %session.username, "session lookup ok");
    Ok(Json(ApiSuccess {
        success: true,
        data: session.into(),
    }))
}

/// `GET /api/user` with no uuid segment.
pub async fn missing_uuid() -> RpcError {
    RpcError::MissingUuid
}

/// `GET /health` — liveness probe.
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
