//! Session UI state machine and the side-effect helpers it drives.
//!
//! One [`SessionFlow`] per page visit: it sequences session resolution and
//! request construction, holds the tagged-union view state, and reacts to
//! proof callbacks from the external QR-rendering capability. Notifications
//! and clipboard/external-open actions are non-fatal side effects behind
//! small traits.

pub mod actions;
pub mod machine;
pub mod notify;
pub mod state;

pub use actions::{Clipboard, ExternalOpener, LinkActions, UtilityError};
pub use machine::SessionFlow;
pub use notify::{Notifier, ToastSlot, TOAST_DURATION};
pub use state::{ErrorKind, FlowState};

use std::time::Duration;

/// Delay between a success callback and the redirect to the verified view,
/// long enough for the notification to be read.
pub const REDIRECT_DELAY: Duration = Duration::from_secs(2);

/// How long the "copied" indicator stays set after a clipboard write.
pub const COPIED_REVERT: Duration = Duration::from_secs(2);
