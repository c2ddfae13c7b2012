//! Static proof-request configuration.
//!
//! Read once at process startup (TOML file, env, or CLI in the daemon) and
//! identical across every request in a deployment.

use serde::{Deserialize, Serialize};

/// Deployment-wide configuration for proof-request construction.
///
/// Every field has a serde default so a TOML file may specify only what it
/// overrides. An empty `endpoint` is representable on purpose: its absence
/// must surface as a build error, not a startup crash.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofConfig {
    /// Proof-request schema version expected by the external capability.
    #[serde(default = "default_version")]
    pub version: u8,

    /// Application name shown in the prover's client.
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// Proof scope identifying this deployment to the capability.
    #[serde(default = "default_scope")]
    pub scope: String,

    /// Callback endpoint the capability posts proof results to.
    #[serde(default)]
    pub endpoint: String,

    /// Target chain for on-chain settlement.
    #[serde(default = "default_chain_id")]
    pub chain_id: u64,

    /// Endpoint flavor understood by the capability.
    #[serde(default = "default_endpoint_type")]
    pub endpoint_type: String,

    /// Logo displayed alongside the request.
    #[serde(default = "default_logo_url")]
    pub logo_url: String,

    /// Base URL universal links are derived from.
    #[serde(default = "default_deep_link_base")]
    pub deep_link_base: String,

    /// Minimum age the proof must attest to.
    #[serde(default = "default_minimum_age")]
    pub minimum_age: u8,

    /// Jurisdictions excluded from verification.
    #[serde(default = "default_excluded_countries")]
    pub excluded_countries: Vec<String>,

    /// Whether the proof must include OFAC screening.
    #[serde(default)]
    pub ofac_screening: bool,

    /// Whether the proof discloses nationality.
    #[serde(default = "default_true")]
    pub disclose_nationality: bool,

    /// Whether the proof discloses gender.
    #[serde(default = "default_true")]
    pub disclose_gender: bool,
}

impl Default for ProofConfig {
    fn default() -> Self {
        // serde defaults and Default must agree; both route through the
        // default_* helpers.
        Self {
            version: default_version(),
            app_name: default_app_name(),
            scope: default_scope(),
            endpoint: String::new(),
            chain_id: default_chain_id(),
            endpoint_type: default_endpoint_type(),
            logo_url: default_logo_url(),
            deep_link_base: default_deep_link_base(),
            minimum_age: default_minimum_age(),
            excluded_countries: default_excluded_countries(),
            ofac_screening: false,
            disclose_nationality: default_true(),
            disclose_gender: default_true(),
        }
    }
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_version() -> u8 {
    2
}

fn default_app_name() -> String {
    "CryptoNomads Verification".to_string()
}

fn default_scope() -> String {
    "crypto-nomads".to_string()
}

fn default_chain_id() -> u64 {
    // Celo mainnet.
    42220
}

fn default_endpoint_type() -> String {
    "celo".to_string()
}

fn default_logo_url() -> String {
    "https://i.postimg.cc/mrmVf9hm/self.png".to_string()
}

fn default_deep_link_base() -> String {
    "https://redirect.self.xyz/verify".to_string()
}

fn default_minimum_age() -> u8 {
    18
}

fn default_excluded_countries() -> Vec<String> {
    vec!["Pakistan".to_string()]
}

fn default_true() -> bool {
    true
}
