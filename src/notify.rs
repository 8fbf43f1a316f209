/// Default time a toast stays on screen.
pub const DEFAULT_DURATION_MS: u32 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
}

impl NotificationKind {
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Success => "fa-check-circle",
            NotificationKind::Error => "fa-exclamation-circle",
            NotificationKind::Warning => "fa-exclamation-triangle",
            NotificationKind::Info => "fa-info-circle",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            NotificationKind::Success => "#28a745",
            NotificationKind::Error => "#dc3545",
            NotificationKind::Warning => "#ffc107",
            NotificationKind::Info => "#17a2b8",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub duration_ms: u32,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Notification {
            message: message.into(),
            kind,
            duration_ms: DEFAULT_DURATION_MS,
        }
    }
}

/// At most one toast is visible at a time; posting a new one replaces the
/// current one. Dismissal is either explicit or by the elapsed-time check.
#[derive(Debug, Default)]
pub struct NotificationCenter {
    current: Option<(Notification, u64)>,
}

impl NotificationCenter {
    pub fn post(&mut self, notification: Notification, now_ms: u64) {
        self.current = Some((notification, now_ms));
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Drop the toast once its duration has elapsed.
    pub fn expire(&mut self, now_ms: u64) {
        if let Some((notification, posted_at)) = &self.current {
            if now_ms.saturating_sub(*posted_at) >= notification.duration_ms as u64 {
                self.current = None;
            }
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref().map(|(n, _)| n)
    }
}
