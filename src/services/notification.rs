// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Auto-dismiss timing for transient notifications.

use crate::config::Config;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Error,
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPhase {
    Visible,
    /// Exit transition running
    Exiting,
    Dismissed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Error,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Success,
        }
    }
}

/// Fixed, non-cancellable dismissal schedule; `fade_after <= dismiss_after`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationTimer {
    fade_after: Duration,
    dismiss_after: Duration,
}

impl Default for NotificationTimer {
    fn default() -> Self {
        Self {
            fade_after: Duration::from_millis(4500),
            dismiss_after: Duration::from_millis(5000),
        }
    }
}

impl NotificationTimer {
    pub fn from_config(config: &Config) -> Self {
        let dismiss_after = Duration::from_millis(config.notification_dismiss_ms);
        Self {
            fade_after: Duration::from_millis(config.notification_fade_ms).min(dismiss_after),
            dismiss_after,
        }
    }

    pub fn fade_after(&self) -> Duration {
        self.fade_after
    }

    pub fn dismiss_after(&self) -> Duration {
        self.dismiss_after
    }

    /// Phase of a notification shown `elapsed` ago.
    pub fn phase(&self, elapsed: Duration) -> NotificationPhase {
        if elapsed >= self.dismiss_after {
            NotificationPhase::Dismissed
        } else if elapsed >= self.fade_after {
            NotificationPhase::Exiting
        } else {
            NotificationPhase::Visible
        }
    }
}
