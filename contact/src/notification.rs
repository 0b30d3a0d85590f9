//! Transient notification banner
//!
//! `BannerState` is the pure state machine (hidden → visible → dismissing →
//! hidden). `NotificationCenter` drives it with tokio timers: an auto-dismiss
//! timer after the banner's lifetime and a short exit transition before the
//! banner is removed.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::task::JoinHandle;

/// How long a banner stays up before dismissing itself
pub const NOTIFICATION_LIFETIME: Duration = Duration::from_secs(5);
/// Length of the exit transition between dismissing and removal
pub const EXIT_TRANSITION: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationKind::Success => write!(f, "success"),
            NotificationKind::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Error,
        }
    }

    pub fn render(&self) -> String {
        format!("[{}] {}  (x)", self.kind, self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BannerEvent {
    Show(Notification),
    Timeout,
    Dismiss,
    Removed,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BannerState {
    #[default]
    Hidden,
    Visible(Notification),
    Dismissing(Notification),
}

impl BannerState {
    /// Apply an event. Pairs not listed in the transition table leave the
    /// state unchanged.
    pub fn apply(self, event: BannerEvent) -> Self {
        match (self, event) {
            (_, BannerEvent::Show(n)) => BannerState::Visible(n),
            (BannerState::Visible(n), BannerEvent::Timeout | BannerEvent::Dismiss) => {
                BannerState::Dismissing(n)
            }
            (BannerState::Dismissing(_), BannerEvent::Removed) => BannerState::Hidden,
            (state, _) => state,
        }
    }

    pub fn notification(&self) -> Option<&Notification> {
        match self {
            BannerState::Hidden => None,
            BannerState::Visible(n) | BannerState::Dismissing(n) => Some(n),
        }
    }
}

#[derive(Default)]
struct Inner {
    state: BannerState,
    /// Bumped on every `show`; timers from older banners compare and bail
    generation: u64,
    timer: Option<JoinHandle<()>>,
}

/// Owns the single banner slot and its timers
#[derive(Clone)]
pub struct NotificationCenter {
    inner: Arc<Mutex<Inner>>,
    lifetime: Duration,
    exit: Duration,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(NOTIFICATION_LIFETIME, EXIT_TRANSITION)
    }
}

impl NotificationCenter {
    pub fn new(lifetime: Duration, exit: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner::default())),
            lifetime,
            exit,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn state(&self) -> BannerState {
        self.lock().state.clone()
    }

    pub fn current(&self) -> Option<Notification> {
        self.lock().state.notification().cloned()
    }

    /// Show a banner, replacing whatever is on screen, and arm auto-dismiss
    ///
    /// Must be called from within a tokio runtime.
    pub fn show(&self, notification: Notification) {
        tracing::debug!(
            kind = %notification.kind,
            "Showing notification: {}",
            notification.message
        );

        let mut inner = self.lock();
        if let Some(timer) = inner.timer.take() {
            timer.abort();
        }
        inner.generation += 1;
        let generation = inner.generation;
        inner.state = std::mem::take(&mut inner.state).apply(BannerEvent::Show(notification));

        let center = self.clone();
        inner.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(center.lifetime).await;
            if center.transition(generation, BannerEvent::Timeout) {
                tokio::time::sleep(center.exit).await;
                center.transition(generation, BannerEvent::Removed);
            }
        }));
    }

    /// User closed the banner: cancel auto-dismiss and start the exit transition
    pub fn dismiss(&self) {
        let mut inner = self.lock();
        if !matches!(inner.state, BannerState::Visible(_)) {
            return;
        }
        if let Some(timer) = inner.timer.take() {
            timer.abort();
        }
        let generation = inner.generation;
        inner.state = std::mem::take(&mut inner.state).apply(BannerEvent::Dismiss);

        let center = self.clone();
        inner.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(center.exit).await;
            center.transition(generation, BannerEvent::Removed);
        }));
    }

    /// Apply a timer-driven event if the banner it was armed for is still current
    fn transition(&self, generation: u64, event: BannerEvent) -> bool {
        let mut inner = self.lock();
        if inner.generation != generation {
            return false;
        }
        inner.state = std::mem::take(&mut inner.state).apply(event);
        true
    }
}
