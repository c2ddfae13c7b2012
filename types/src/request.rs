//! Proof request and disclosure policy.
//!
//! A `ProofRequest` is ephemeral: constructed fresh on every session
//! resolution, handed to the external proof capability, never persisted.

use crate::{ProofConfig, WalletAddress};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The disclosure set a proof must reveal or satisfy.
///
/// In the current deployment this is a pure function of static configuration
/// (no per-session variance), though the shape supports it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisclosurePolicy {
    pub minimum_age: u8,
    pub excluded_countries: Vec<String>,
    pub ofac: bool,
    pub nationality: bool,
    pub gender: bool,
}

impl DisclosurePolicy {
    /// Build the policy from deployment configuration. Recomputed on every
    /// request build; cheap and deterministic.
    pub fn from_config(config: &ProofConfig) -> Self {
        Self {
            minimum_age: config.minimum_age,
            excluded_countries: config.excluded_countries.clone(),
            ofac: config.ofac_screening,
            nationality: config.disclose_nationality,
            gender: config.disclose_gender,
        }
    }
}

/// A user-scoped verification request for the external proof capability.
///
/// Serialized camelCase: the field names are the capability's wire contract.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProofRequest {
    pub version: u8,
    pub app_name: String,
    pub scope: String,
    pub endpoint: String,
    #[serde(rename = "chainID")]
    pub chain_id: u64,
    pub endpoint_type: String,
    pub logo_url: String,
    /// The session's wallet address: the identity the proof binds to.
    pub user_id: WalletAddress,
    /// Address encoding in use, fixed per deployment.
    pub user_id_type: String,
    /// The session's Discord user id, round-tripped opaquely by the proof
    /// capability so its callback can be correlated without a second lookup.
    pub user_defined_data: String,
    pub disclosures: DisclosurePolicy,
}

/// A derived, shareable locator that activates the proof capability on a
/// compatible client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniversalLink(String);

impl UniversalLink {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UniversalLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
