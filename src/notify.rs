use std::time::{Duration, Instant};
use tracing::debug;

pub const DISPLAY_FOR: Duration = Duration::from_millis(3000);
pub const DETACH_AFTER: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

impl NoticeKind {
    pub fn css_class(self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
            NoticeKind::Info => "info",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    shown_at: Instant,
}

/// Transient toasts: shown for a fixed delay, detached shortly after.
#[derive(Debug, Default)]
pub struct Notifier {
    notices: Vec<Notice>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: NoticeKind, message: impl Into<String>) {
        let message = message.into();
        debug!("notice ({}): {message}", kind.css_class());
        self.notices.push(Notice {
            kind,
            message,
            shown_at: Instant::now(),
        });
    }

    pub fn visible(&self, now: Instant) -> impl Iterator<Item = &Notice> {
        self.notices
            .iter()
            .filter(move |notice| now < notice.shown_at + DISPLAY_FOR)
    }

    /// Drops notices past their detach deadline. Safe to call repeatedly;
    /// already-detached notices are simply gone.
    pub fn sweep(&mut self, now: Instant) {
        self.notices
            .retain(|notice| now < notice.shown_at + DISPLAY_FOR + DETACH_AFTER);
    }

    pub fn latest(&self) -> Option<&Notice> {
        self.notices.last()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}
