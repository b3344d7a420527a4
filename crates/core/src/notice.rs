// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Transient notices.
//!
//! Only one notice exists at a time. Showing a new one replaces the old one
//! and restarts the display timer. Nothing is scheduled here: callers ask
//! [`Notifier::current`] whether the last notice is still visible.

use crate::time::{millis, Clock};
use std::time::Duration;

/// Default time a notice stays visible.
pub const DEFAULT_NOTICE_DURATION: Duration = Duration::from_millis(2200);

/// A message with the moment it was shown and how long it stays visible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub shown_at_ms: u64,
    pub duration: Duration,
}

impl Notice {
    /// Milliseconds since epoch at which the notice disappears.
    pub fn expires_at_ms(&self) -> u64 {
        self.shown_at_ms.saturating_add(millis(self.duration))
    }

    pub fn is_visible_at(&self, now_ms: u64) -> bool {
        now_ms < self.expires_at_ms()
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Holder of the last notice.
#[derive(Debug)]
pub struct Notifier<C: Clock> {
    clock: C,
    duration: Duration,
    last: Option<Notice>,
}

impl<C: Clock> Notifier<C> {
    pub fn new(clock: C) -> Self {
        Self::with_duration(clock, DEFAULT_NOTICE_DURATION)
    }

    pub fn with_duration(clock: C, duration: Duration) -> Self {
        Self {
            clock,
            duration,
            last: None,
        }
    }

    /// Show `message`, replacing any earlier notice.
    pub fn show(&mut self, message: impl Into<String>) -> &Notice {
        let notice = Notice {
            message: message.into(),
            shown_at_ms: self.clock.now_millis(),
            duration: self.duration,
        };
        tracing::debug!(message = %notice.message, "notice");
        self.last.insert(notice)
    }

    /// The last notice while it is still visible.
    pub fn current(&self) -> Option<&Notice> {
        let now = self.clock.now_millis();
        self.last.as_ref().filter(|n| n.is_visible_at(now))
    }

    /// The last notice regardless of expiry.
    pub fn last(&self) -> Option<&Notice> {
        self.last.as_ref()
    }

    pub fn clear(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
#[path = "notice_tests.rs"]
mod tests;
