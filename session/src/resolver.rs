//! Session resolver — UUID in, normalized session out.

use crate::ResolveError;
use std::sync::Arc;
use tracing::{debug, warn};
use verigate_store::{SessionRecord, SessionStore};
use verigate_types::{Timestamp, VerificationSession, WalletAddress};

/// Resolves session UUIDs against the session store and normalizes the raw
/// records. Read-only and idempotent: resolving the same UUID twice with no
/// intervening store mutation yields identical sessions.
pub struct SessionResolver {
    store: Arc<dyn SessionStore>,
}

impl SessionResolver {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Look up a session by UUID and normalize it.
    ///
    /// Empty input fails fast without touching the store. A missing record is
    /// [`ResolveError::NotFound`]; a record missing identity-binding fields
    /// is [`ResolveError::Integrity`] — the session exists but is unusable.
    pub async fn resolve(&self, session_id: &str) -> Result<VerificationSession, ResolveError> {
        if session_id.trim().is_empty() {
            return Err(ResolveError::InvalidInput);
        }

        let record = self
            .store
            .find_by_uuid(session_id)
            .await?
            .ok_or(ResolveError::NotFound)?;

        let session = normalize(record)?;
        debug!(session_id, username = %session.username, status = %session.status(), "session resolved");
        Ok(session)
    }
}

/// Map a raw store record into the normalized session shape.
///
/// Optional disclosure fields default to `None`; absent identity-binding
/// fields are integrity errors, not defaults.
fn normalize(record: SessionRecord) -> Result<VerificationSession, ResolveError> {
    let wallet_raw = require(record.wallet_address, "walletAddress", &record.verify_uuid)?;
    let wallet_address = WalletAddress::parse(wallet_raw.as_str()).map_err(|e| {
        warn!(session_id = %record.verify_uuid, error = %e, "stored wallet address is malformed");
        ResolveError::Integrity(format!("malformed wallet address: {e}"))
    })?;

    Ok(VerificationSession {
        discord_user_id: require(record.user_id, "userId", &record.verify_uuid)?,
        username: require(record.username, "username", &record.verify_uuid)?,
        guild_id: require(record.guild_id, "guildId", &record.verify_uuid)?,
        wallet_address,
        session_id: record.verify_uuid,
        verified: record.verified,
        on_chain_verified: record.on_chain_verified,
        country: record.selected_country,
        gender: record.gender,
        is_adult: record.is_adult,
        ens_name: record.ens_name,
        created_at: record.created_at.map(|t| Timestamp::from_millis(t.timestamp_millis())),
        updated_at: record.updated_at.map(|t| Timestamp::from_millis(t.timestamp_millis())),
        verified_at: record.verified_at.map(|t| Timestamp::from_millis(t.timestamp_millis())),
    })
}

fn require(
    field: Option<String>,
    name: &'static str,
    session_id: &str,
) -> Result<String, ResolveError> {
    match field {
        Some(value) if !value.is_empty() => Ok(value),
        _ => {
            warn!(session_id, field = name, "session record missing identity field");
            Err(ResolveError::Integrity(format!(
                "missing identity field {name}"
            )))
        }
    }
}
