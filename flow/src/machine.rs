//! The per-visit session state machine.

use crate::{ErrorKind, FlowState, Notifier, REDIRECT_DELAY, TOAST_DURATION};
use std::sync::{Arc, Mutex};
use tracing::{info, warn};
use verigate_session::{RequestBuilder, ResolveError, SessionResolver};

/// Where a completed verification navigates to.
const VERIFIED_TARGET: &str = "/verified";

struct Inner {
    session_id: String,
    /// Bumped on every reset. Async resumptions compare their captured epoch
    /// before applying a transition, so a torn-down visit can never mutate
    /// the state that replaced it.
    epoch: u64,
    state: FlowState,
}

/// Drives one verification session's lifecycle:
/// `Loading → {SessionError, Initializing → Ready}`, then proof callbacks
/// move `Ready` to `VerifiedRedirect` or leave it in place for a retry.
///
/// Cheap to clone; clones share the same state.
#[derive(Clone)]
pub struct SessionFlow {
    inner: Arc<Mutex<Inner>>,
    notifier: Arc<dyn Notifier>,
}

impl SessionFlow {
    pub fn new(session_id: impl Into<String>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                session_id: session_id.into(),
                epoch: 0,
                state: FlowState::Loading,
            })),
            notifier,
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> FlowState {
        self.lock().state.clone()
    }

    pub fn session_id(&self) -> String {
        self.lock().session_id.clone()
    }

    /// Point this flow at a different session (page navigation). Any
    /// in-flight resolution or redirect for the old session becomes stale.
    pub fn reset(&self, session_id: impl Into<String>) {
        let mut inner = self.lock();
        inner.session_id = session_id.into();
        inner.epoch += 1;
        inner.state = FlowState::Loading;
    }

    /// Resolve the session, then build its proof request — strictly in that
    /// order. Terminal on failure; the user restarts out-of-band.
    pub async fn initialize(&self, resolver: &SessionResolver, builder: &RequestBuilder) {
        let (session_id, epoch) = {
            let inner = self.lock();
            (inner.session_id.clone(), inner.epoch)
        };

        let resolved = resolver.resolve(&session_id).await;

        let session = {
            let mut inner = self.lock();
            if inner.epoch != epoch {
                return;
            }
            match resolved {
                Ok(session) => {
                    inner.state = FlowState::Initializing {
                        session: session.clone(),
                    };
                    session
                }
                Err(e) => {
                    warn!(%session_id, error = %e, "session resolution failed");
                    inner.state = FlowState::SessionError {
                        kind: ErrorKind::Lookup,
                        message: lookup_message(&e),
                    };
                    return;
                }
            }
        };

        let built = builder.build(&session);

        let mut inner = self.lock();
        if inner.epoch != epoch {
            return;
        }
        match built {
            Ok(built) => {
                info!(%session_id, "verification session ready");
                inner.state = FlowState::Ready { session, built };
            }
            Err(e) => {
                warn!(%session_id, error = %e, "request initialization failed");
                inner.state = FlowState::SessionError {
                    kind: ErrorKind::Initialization,
                    message: "Failed to initialize verification app".to_string(),
                };
            }
        }
    }

    /// Proof accepted: notify, wait out [`REDIRECT_DELAY`], then navigate to
    /// the terminal verified view. On-chain reconciliation happens
    /// asynchronously in the external collaborator; nothing is re-fetched.
    pub async fn on_proof_success(&self) {
        let epoch = {
            let inner = self.lock();
            if !inner.state.is_ready() {
                return;
            }
            inner.epoch
        };

        self.notifier
            .notify("Verification successful! Updating Discord...", TOAST_DURATION);

        tokio::time::sleep(REDIRECT_DELAY).await;

        let mut inner = self.lock();
        if inner.epoch == epoch && inner.state.is_ready() {
            info!(session_id = %inner.session_id, "verification complete, redirecting");
            inner.state = FlowState::VerifiedRedirect {
                target: VERIFIED_TARGET.to_string(),
            };
        }
    }

    /// Proof rejected or cancelled: notify and stay `Ready` so the user can
    /// retry scanning without reloading.
    pub fn on_proof_error(&self, detail: &str) {
        let inner = self.lock();
        if !inner.state.is_ready() {
            return;
        }
        warn!(session_id = %inner.session_id, detail, "proof callback reported failure");
        drop(inner);
        self.notifier
            .notify("Verification failed. Please try again.", TOAST_DURATION);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().expect("flow lock poisoned")
    }
}

/// User-facing message for a lookup failure. Backend detail stays in the
/// logs; only a generic message crosses the trust boundary.
fn lookup_message(error: &ResolveError) -> String {
    match error {
        ResolveError::InvalidInput => "Session identifier is required".to_string(),
        ResolveError::NotFound => {
            "This verification session was not found. Please run /verify in Discord to get a new link."
                .to_string()
        }
        ResolveError::Integrity(_) | ResolveError::Backend(_) => {
            "Internal error. Please try again later.".to_string()
        }
    }
}
