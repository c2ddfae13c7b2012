use thiserror::Error;
use verigate_store::StoreError;

/// Failures while resolving a session UUID to session state.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Empty or absent session identifier. No store call is made.
    #[error("session identifier is required")]
    InvalidInput,

    /// No session exists under this UUID. The user must re-issue one via the
    /// originating bot command.
    #[error("verification session not found")]
    NotFound,

    /// A record exists but is missing identity-binding fields or carries a
    /// malformed wallet address. Operator-actionable, never reported to the
    /// user as "not found".
    #[error("session record failed integrity check: {0}")]
    Integrity(String),

    /// The store was unreachable or misbehaved.
    #[error("session store error: {0}")]
    Backend(String),
}

impl From<StoreError> for ResolveError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Serialization(detail) => ResolveError::Integrity(detail),
            other => ResolveError::Backend(other.to_string()),
        }
    }
}

/// Failures while constructing a proof request from a resolved session.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The session has no usable wallet address; the downstream proof
    /// capability would bind the request to an invalid identity.
    #[error("session has no wallet address to bind the proof request to")]
    MissingIdentity,

    /// No callback endpoint configured for this deployment.
    #[error("proof endpoint is not configured")]
    EndpointMissing,

    /// The external capability failed to derive a universal link.
    #[error("universal link derivation failed: {0}")]
    LinkDerivationFailed(String),
}

/// Opaque failure from the external proof capability.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct CapabilityError(pub String);
