//! Transient notification banner
//!
//! At most one banner is visible at a time: showing a new notification
//! removes the current one first, and a spawned auto-dismiss task takes
//! each banner down after a fixed display window plus a short exit
//! transition. A replaced banner's timer keeps running; its dismissal
//! targets only the banner it belongs to, which is already gone.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// How long a banner stays on screen
pub const DISPLAY_WINDOW: Duration = Duration::from_secs(3);

/// Exit transition length before the banner is removed
pub const EXIT_TRANSITION: Duration = Duration::from_millis(300);

/// Banner kind, controls icon and color on the presentation side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A single banner: kind plus the message to show
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }
}

/// Presentation side of the notifier.
///
/// `begin_exit` and `remove` must tolerate ids that are already gone;
/// a stale dismiss timer will call them for a replaced banner.
pub trait NotificationSink: Send + Sync + 'static {
    /// Put the banner on screen
    fn render(&self, id: u64, notification: &Notification);

    /// Start the exit transition, if the banner is still present
    fn begin_exit(&self, id: u64);

    /// Take the banner off screen, if it is still present
    fn remove(&self, id: u64);
}

/// Shows transient banners through a sink, newest replacing oldest.
pub struct Notifier<S> {
    sink: Arc<S>,
    current: Arc<Mutex<Option<u64>>>,
    next_id: Arc<AtomicU64>,
}

impl<S> Clone for Notifier<S> {
    fn clone(&self) -> Self {
        Self {
            sink: Arc::clone(&self.sink),
            current: Arc::clone(&self.current),
            next_id: Arc::clone(&self.next_id),
        }
    }
}

impl<S: NotificationSink> Notifier<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink: Arc::new(sink),
            current: Arc::new(Mutex::new(None)),
            next_id: Arc::new(AtomicU64::new(0)),
        }
    }

    /// The sink banners are drawn through
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Show a notification, replacing the visible one if any.
    ///
    /// Spawns the auto-dismiss task; must run inside a tokio runtime.
    pub fn show(&self, notification: Notification) {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        {
            let mut current = self.current.lock().expect("notifier state poisoned");
            if let Some(old) = current.take() {
                self.sink.remove(old);
            }
            self.sink.render(id, &notification);
            *current = Some(id);
        }

        let sink = Arc::clone(&self.sink);
        let current = Arc::clone(&self.current);
        tokio::spawn(async move {
            tokio::time::sleep(DISPLAY_WINDOW).await;
            sink.begin_exit(id);
            tokio::time::sleep(EXIT_TRANSITION).await;
            sink.remove(id);

            let mut current = current.lock().expect("notifier state poisoned");
            if *current == Some(id) {
                *current = None;
            }
        });
    }

    /// Show a success banner
    pub fn success(&self, message: impl Into<String>) {
        self.show(Notification::success(message));
    }

    /// Show an error banner
    pub fn error(&self, message: impl Into<String>) {
        self.show(Notification::error(message));
    }
}

/// Headless sink that writes banners to the log.
///
/// Used by the demo and anywhere without a surface to draw on.
#[derive(Debug, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn render(&self, id: u64, notification: &Notification) {
        match notification.kind {
            NotificationKind::Success => {
                tracing::info!(id, message = %notification.message, "notification shown");
            }
            NotificationKind::Error => {
                tracing::error!(id, message = %notification.message, "notification shown");
            }
        }
    }

    fn begin_exit(&self, _id: u64) {}

    fn remove(&self, id: u64) {
        tracing::debug!(id, "notification removed");
    }
}
