//! Normalized verification-session snapshot.

use crate::{Timestamp, WalletAddress};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A verification session, normalized from the raw record the Discord bot
/// wrote into the session store.
///
/// One session binds one Discord user to one wallet address under one
/// `session_id` (the UUID minted by the bot). The disclosure fields are only
/// present after a successful proof.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationSession {
    /// The session UUID, sole lookup key. Opaque to this codebase.
    pub session_id: String,
    pub discord_user_id: String,
    pub username: String,
    pub wallet_address: WalletAddress,
    pub guild_id: String,
    /// Off-chain proof accepted.
    pub verified: bool,
    /// On-chain settlement done. Owned by the external settlement
    /// collaborator; read-only here and may lag `verified`.
    pub on_chain_verified: bool,
    pub country: Option<String>,
    pub gender: Option<Gender>,
    pub is_adult: Option<bool>,
    pub ens_name: Option<String>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
    /// Set exactly once, when `verified` first became true. Written by the
    /// proof-callback processor, never by this gateway.
    pub verified_at: Option<Timestamp>,
}

impl VerificationSession {
    /// Derived session status. Never stored independently: always recomputed
    /// from `verified`.
    pub fn status(&self) -> SessionStatus {
        if self.verified {
            SessionStatus::Completed
        } else {
            SessionStatus::Pending
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Pending,
    Completed,
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionStatus::Pending => write!(f, "pending"),
            SessionStatus::Completed => write!(f, "completed"),
        }
    }
}

/// Disclosed gender, when the proof revealed it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}
