//! Clipboard and external-open helpers.
//!
//! Pure side effects driven by the state machine. Failures here are never
//! fatal: the user gets a notification and the page stays usable.

use crate::{Notifier, COPIED_REVERT, TOAST_DURATION};
use std::sync::{Arc, Mutex};
use std::time::Instant;
use thiserror::Error;
use tracing::warn;
use verigate_types::UniversalLink;

#[derive(Debug, Error)]
#[error("{0}")]
pub struct UtilityError(pub String);

/// Host clipboard access.
pub trait Clipboard: Send + Sync {
    fn write(&self, text: &str) -> Result<(), UtilityError>;
}

/// Asks the host environment to open a link in an external context.
pub trait ExternalOpener: Send + Sync {
    fn open(&self, url: &str);
}

/// Copy/open actions around the universal link, with the transient "copied"
/// indicator.
pub struct LinkActions {
    clipboard: Arc<dyn Clipboard>,
    opener: Arc<dyn ExternalOpener>,
    notifier: Arc<dyn Notifier>,
    copied_until: Mutex<Option<Instant>>,
}

impl LinkActions {
    pub fn new(
        clipboard: Arc<dyn Clipboard>,
        opener: Arc<dyn ExternalOpener>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            clipboard,
            opener,
            notifier,
            copied_until: Mutex::new(None),
        }
    }

    /// Whether the "copied" indicator is currently set. Auto-reverts after
    /// [`COPIED_REVERT`].
    pub fn link_copied(&self) -> bool {
        self.copied_until
            .lock()
            .expect("copied lock poisoned")
            .is_some_and(|until| until > Instant::now())
    }

    /// Write the link to the clipboard. On success the indicator toggles and
    /// a success toast fires; on failure only a failure toast fires and the
    /// indicator is left unchanged.
    pub fn copy_link(&self, link: &UniversalLink) {
        match self.clipboard.write(link.as_str()) {
            Ok(()) => {
                *self.copied_until.lock().expect("copied lock poisoned") =
                    Some(Instant::now() + COPIED_REVERT);
                self.notifier
                    .notify("Universal link copied to clipboard", TOAST_DURATION);
            }
            Err(e) => {
                warn!(error = %e, "clipboard write failed");
                self.notifier.notify("Failed to copy link", TOAST_DURATION);
            }
        }
    }

    /// Open the link externally. Fire-and-forget: the host gives us no open
    /// result, so the toast fires regardless of the actual outcome.
    pub fn open_external(&self, link: &UniversalLink) {
        self.opener.open(link.as_str());
        self.notifier.notify("Opening verification app", TOAST_DURATION);
    }
}
