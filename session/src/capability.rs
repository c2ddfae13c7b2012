//! Seam for the external proof-verification capability.
//!
//! The capability's cryptography and QR rendering are opaque to this
//! codebase; all we consume is "turn a proof request into a universal link".

use crate::CapabilityError;
use verigate_types::{ProofRequest, UniversalLink};

/// Derives a universal link from a proof request.
///
/// Treated as side-effecting by callers: a fresh link is derived on every
/// build, never cached across page visits.
pub trait ProofCapability: Send + Sync {
    fn derive_link(&self, request: &ProofRequest) -> Result<UniversalLink, CapabilityError>;
}

/// Default deriver: embeds the JSON-serialized request hex-encoded in the
/// configured deep-link base URL. Deterministic and stateless; a compatible
/// client decodes the payload to reconstruct the request.
pub struct DeepLinkDeriver {
    base: String,
}

impl DeepLinkDeriver {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}

impl ProofCapability for DeepLinkDeriver {
    fn derive_link(&self, request: &ProofRequest) -> Result<UniversalLink, CapabilityError> {
        if self.base.is_empty() {
            return Err(CapabilityError("deep-link base URL is empty".to_string()));
        }
        let payload = serde_json::to_vec(request)
            .map_err(|e| CapabilityError(format!("request serialization: {e}")))?;
        Ok(UniversalLink::new(format!(
            "{}?sessionId={}&app={}",
            self.base,
            request.user_defined_data,
            hex::encode(payload)
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verigate_types::{DisclosurePolicy, ProofConfig, WalletAddress};

    fn request() -> ProofRequest {
        let config = ProofConfig::default();
        ProofRequest {
            version: config.version,
            app_name: config.app_name.clone(),
            scope: config.scope.clone(),
            endpoint: "https://verify.example.org/callback".into(),
            chain_id: config.chain_id,
            endpoint_type: config.endpoint_type.clone(),
            logo_url: config.logo_url.clone(),
            user_id: WalletAddress::parse("0xabcdef0123456789abcdef0123456789abcdef01").unwrap(),
            user_id_type: "hex".into(),
            user_defined_data: "discord-123".into(),
            disclosures: DisclosurePolicy::from_config(&config),
        }
    }

    #[test]
    fn link_is_deterministic_for_equal_requests() {
        let deriver = DeepLinkDeriver::new("https://redirect.example/verify");
        let a = deriver.derive_link(&request()).unwrap();
        let b = deriver.derive_link(&request()).unwrap();
        assert_eq!(a, b);
        assert!(a.as_str().starts_with("https://redirect.example/verify?"));
    }

    #[test]
    fn empty_base_fails() {
        let deriver = DeepLinkDeriver::new("");
        assert!(deriver.derive_link(&request()).is_err());
    }
}
