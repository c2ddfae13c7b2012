//! Single-slot toast notifications.

use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Default auto-dismiss for toasts.
pub const TOAST_DURATION: Duration = Duration::from_secs(4);

/// Sink for transient user-facing messages.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str, duration: Duration);
}

struct Toast {
    message: String,
    expires_at: Instant,
}

/// At most one visible toast; a new notification preempts an in-flight one.
/// Expiry is evaluated lazily on read, which is all a render loop needs.
#[derive(Default)]
pub struct ToastSlot {
    current: Mutex<Option<Toast>>,
}

impl ToastSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently visible message, if any.
    pub fn current(&self) -> Option<String> {
        let mut slot = self.current.lock().expect("toast lock poisoned");
        match &*slot {
            Some(toast) if toast.expires_at > Instant::now() => Some(toast.message.clone()),
            Some(_) => {
                *slot = None;
                None
            }
            None => None,
        }
    }
}

impl Notifier for ToastSlot {
    fn notify(&self, message: &str, duration: Duration) {
        let mut slot = self.current.lock().expect("toast lock poisoned");
        *slot = Some(Toast {
            message: message.to_string(),
            expires_at: Instant::now() + duration,
        });
    }
}
