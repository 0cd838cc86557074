// ── Transient notifications ──
//
// Toasts are fire-and-forget: each one gets its own expiry timer and is
// removed when that timer fires, independent of any other toast. There is
// no queue and no de-duplication.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use strum::{AsRefStr, Display};
use tracing::{debug, warn};

/// Toast severity. Renders as the `toast-<severity>` CSS class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
}

/// Anything that can show a message to the user.
pub trait Notifier {
    fn notify(&self, message: &str, severity: Severity);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, message: &str, severity: Severity) {
        (**self).notify(message, severity);
    }
}

/// Fan out: every message reaches both notifiers, in order.
impl<A: Notifier, B: Notifier> Notifier for (A, B) {
    fn notify(&self, message: &str, severity: Severity) {
        self.0.notify(message, severity);
        self.1.notify(message, severity);
    }
}

/// A visible toast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    pub shown_at: DateTime<Utc>,
}

/// The page's toast area.
///
/// Cheaply cloneable; clones share the same set of toasts. Expiry timers
/// are spawned on the current Tokio runtime. Outside a runtime a toast
/// stays until [`dismiss`](Self::dismiss)ed.
#[derive(Clone)]
pub struct ToastBoard {
    inner: Arc<BoardInner>,
}

struct BoardInner {
    toasts: Mutex<Vec<Toast>>,
    next_id: AtomicU64,
    lifetime: Duration,
}

impl ToastBoard {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            inner: Arc::new(BoardInner {
                toasts: Mutex::new(Vec::new()),
                next_id: AtomicU64::new(1),
                lifetime,
            }),
        }
    }

    /// Snapshot of the toasts currently on screen, oldest first.
    pub fn active(&self) -> Vec<Toast> {
        self.inner.toasts.lock().expect("toast lock poisoned").clone()
    }

    pub fn len(&self) -> usize {
        self.inner.toasts.lock().expect("toast lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove a toast early. Returns `false` if it already expired.
    pub fn dismiss(&self, id: u64) -> bool {
        let mut toasts = self.inner.toasts.lock().expect("toast lock poisoned");
        let before = toasts.len();
        toasts.retain(|t| t.id != id);
        toasts.len() != before
    }

    fn schedule_expiry(&self, id: u64) {
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            warn!(id, "no runtime for toast expiry; toast stays until dismissed");
            return;
        };
        let board = self.clone();
        let lifetime = self.inner.lifetime;
        handle.spawn(async move {
            tokio::time::sleep(lifetime).await;
            if board.dismiss(id) {
                debug!(id, "toast expired");
            }
        });
    }
}

impl Default for ToastBoard {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_TOAST_LIFETIME)
    }
}

impl Notifier for ToastBoard {
    fn notify(&self, message: &str, severity: Severity) {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        debug!(id, %severity, message, "showing toast");
        self.inner
            .toasts
            .lock()
            .expect("toast lock poisoned")
            .push(Toast {
                id,
                message: message.to_owned(),
                severity,
                shown_at: Utc::now(),
            });
        self.schedule_expiry(id);
    }
}
