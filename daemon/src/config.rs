//! Gateway configuration with TOML file support.

use serde::{Deserialize, Serialize};
use verigate_store::MongoConfig;
use verigate_types::ProofConfig;

/// Configuration for the Verigate gateway.
///
/// Can be loaded from a TOML file via [`GatewayConfig::from_toml_str`] or
/// built programmatically (e.g. for tests). CLI flags and environment
/// variables override file values in `main`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Port the lookup API listens on.
    #[serde(default = "default_rpc_port")]
    pub rpc_port: u16,

    /// Session-store connection settings.
    #[serde(default = "default_mongo")]
    pub mongo: MongoConfig,

    /// Static proof-request configuration.
    #[serde(default)]
    pub proof: ProofConfig,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

impl GatewayConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn json_logs(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            rpc_port: default_rpc_port(),
            mongo: default_mongo(),
            proof: ProofConfig::default(),
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_rpc_port() -> u16 {
    8080
}

fn default_mongo() -> MongoConfig {
    MongoConfig {
        uri: "mongodb://localhost:27017".to_string(),
        database: "cryptonomads-bot".to_string(),
        collection: "user_verifications".to_string(),
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "human".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config = GatewayConfig::from_toml_str("").unwrap();
        assert_eq!(config.rpc_port, 8080);
        assert_eq!(config.mongo.collection, "user_verifications");
        assert_eq!(config.proof.minimum_age, 18);
        assert!(!config.json_logs());
    }

    #[test]
    fn partial_file_overrides_named_fields() {
        let config = GatewayConfig::from_toml_str(
            r#"
            rpc_port = 9090
            log_format = "json"

            [mongo]
            uri = "mongodb://db.internal:27017"

            [proof]
            endpoint = "https://verify.example.org/callback"
            "#,
        )
        .unwrap();
        assert_eq!(config.rpc_port, 9090);
        assert!(config.json_logs());
        assert_eq!(config.mongo.uri, "mongodb://db.internal:27017");
        assert_eq!(config.mongo.database, "cryptonomads-bot");
        assert_eq!(config.proof.endpoint, "https://verify.example.org/callback");
    }
}
