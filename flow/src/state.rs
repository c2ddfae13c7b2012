//! Tagged-union view state.
//!
//! One value models the whole page lifecycle, so illegal combinations (a
//! renderable view with no proof request, an error with a live link) are
//! unrepresentable.

use verigate_session::BuiltRequest;
use verigate_types::VerificationSession;

/// Where a terminal session error came from. Lookup and initialization
/// failures render similarly but must stay distinguishable in logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Session resolution failed (bad input, unknown session, store error).
    Lookup,
    /// Request construction or link derivation failed.
    Initialization,
}

/// The session page lifecycle.
#[derive(Clone, Debug)]
pub enum FlowState {
    /// Resolving the session UUID.
    Loading,
    /// Session resolved; proof request and link not yet derived.
    Initializing { session: VerificationSession },
    /// QR and link renderable; awaiting a proof callback.
    Ready {
        session: VerificationSession,
        built: BuiltRequest,
    },
    /// Terminal failure. The user restarts out-of-band; no automatic retry.
    SessionError { kind: ErrorKind, message: String },
    /// Terminal success; the page navigates to `target`.
    VerifiedRedirect { target: String },
}

impl FlowState {
    pub fn is_ready(&self) -> bool {
        matches!(self, FlowState::Ready { .. })
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            FlowState::SessionError { .. } | FlowState::VerifiedRedirect { .. }
        )
    }
}
