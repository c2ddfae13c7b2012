//! Request builder — resolved session in, proof request and link out.

use crate::{BuildError, ProofCapability};
use std::sync::Arc;
use tracing::{debug, error};
use verigate_types::{DisclosurePolicy, ProofConfig, ProofRequest, UniversalLink, VerificationSession};

/// Address encoding carried in every request. All wallets are hex EVM
/// addresses in this deployment.
const USER_ID_TYPE: &str = "hex";

/// A freshly built proof request and its universal link. Ephemeral: built on
/// every session resolution, never persisted or cached across visits.
#[derive(Clone, Debug)]
pub struct BuiltRequest {
    pub request: ProofRequest,
    pub link: UniversalLink,
}

/// Deterministically constructs proof requests from resolved sessions and
/// derives universal links via the external proof capability.
pub struct RequestBuilder {
    config: ProofConfig,
    capability: Arc<dyn ProofCapability>,
}

impl RequestBuilder {
    pub fn new(config: ProofConfig, capability: Arc<dyn ProofCapability>) -> Self {
        Self { config, capability }
    }

    /// Build a proof request bound to the session's wallet and derive its
    /// universal link. Exactly one capability call per build.
    pub fn build(&self, session: &VerificationSession) -> Result<BuiltRequest, BuildError> {
        if session.wallet_address.is_zero() {
            return Err(BuildError::MissingIdentity);
        }
        if self.config.endpoint.is_empty() {
            return Err(BuildError::EndpointMissing);
        }

        let request = ProofRequest {
            version: self.config.version,
            app_name: self.config.app_name.clone(),
            scope: self.config.scope.clone(),
            endpoint: self.config.endpoint.clone(),
            chain_id: self.config.chain_id,
            endpoint_type: self.config.endpoint_type.clone(),
            logo_url: self.config.logo_url.clone(),
            user_id: session.wallet_address.clone(),
            user_id_type: USER_ID_TYPE.to_string(),
            user_defined_data: session.discord_user_id.clone(),
            // Recomputed every build; cheap, deterministic, and static in
            // this deployment.
            disclosures: DisclosurePolicy::from_config(&self.config),
        };

        let link = self.capability.derive_link(&request).map_err(|e| {
            error!(session_id = %session.session_id, error = %e, "universal link derivation failed");
            BuildError::LinkDerivationFailed(e.to_string())
        })?;

        debug!(session_id = %session.session_id, wallet = %request.user_id, "proof request built");
        Ok(BuiltRequest { request, link })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CapabilityError, DeepLinkDeriver};
    use verigate_types::WalletAddress;

    const WALLET: &str = "0xabcdef0123456789abcdef0123456789abcdef01";

    fn session(wallet: &str) -> VerificationSession {
        VerificationSession {
            session_id: "u1".into(),
            discord_user_id: "d1".into(),
            username: "nomad".into(),
            wallet_address: WalletAddress::parse(wallet).unwrap(),
            guild_id: "g1".into(),
            verified: false,
            on_chain_verified: false,
            country: None,
            gender: None,
            is_adult: None,
            ens_name: None,
            created_at: None,
            updated_at: None,
            verified_at: None,
        }
    }

    fn config() -> ProofConfig {
        ProofConfig {
            endpoint: "https://verify.example.org/callback".into(),
            ..ProofConfig::default()
        }
    }

    fn builder(config: ProofConfig) -> RequestBuilder {
        let base = config.deep_link_base.clone();
        RequestBuilder::new(config, Arc::new(DeepLinkDeriver::new(base)))
    }

    struct FailingCapability;

    impl ProofCapability for FailingCapability {
        fn derive_link(
            &self,
            _request: &ProofRequest,
        ) -> Result<UniversalLink, CapabilityError> {
            Err(CapabilityError("simulated SDK failure".into()))
        }
    }

    #[test]
    fn request_binds_wallet_and_discord_id_exactly() {
        let built = builder(config()).build(&session(WALLET)).unwrap();
        assert_eq!(built.request.user_id.as_str(), WALLET);
        assert_eq!(built.request.user_defined_data, "d1");
        assert_eq!(built.request.user_id_type, "hex");
    }

    #[test]
    fn zero_wallet_is_missing_identity() {
        let zero = format!("0x{}", "0".repeat(40));
        assert!(matches!(
            builder(config()).build(&session(&zero)),
            Err(BuildError::MissingIdentity)
        ));
    }

    #[test]
    fn missing_endpoint_is_a_build_error_not_a_panic() {
        let config = ProofConfig::default();
        assert!(config.endpoint.is_empty());
        assert!(matches!(
            builder(config).build(&session(WALLET)),
            Err(BuildError::EndpointMissing)
        ));
    }

    #[test]
    fn capability_failure_maps_to_link_derivation_failed() {
        let builder = RequestBuilder::new(config(), Arc::new(FailingCapability));
        assert!(matches!(
            builder.build(&session(WALLET)),
            Err(BuildError::LinkDerivationFailed(_))
        ));
    }

    #[test]
    fn disclosure_policy_matches_configuration() {
        let built = builder(config()).build(&session(WALLET)).unwrap();
        assert_eq!(built.request.disclosures.minimum_age, 18);
        assert_eq!(built.request.disclosures.excluded_countries, vec!["Pakistan"]);
        assert!(built.request.disclosures.nationality);
        assert!(!built.request.disclosures.ofac);
    }
}
