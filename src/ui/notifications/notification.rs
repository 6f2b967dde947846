// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` record, its `Kind`, and the
//! `NotificationId` used to address a single toast for removal.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::fmt;
use std::time::Duration;

/// Unique identifier for a notification.
///
/// Combines the creation time in epoch milliseconds with a random nonce so
/// that two notifications created within the same millisecond still differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId {
    created_ms: i64,
    nonce: u64,
}

impl NotificationId {
    /// Creates a new identifier from the current time and a random nonce.
    pub fn new() -> Self {
        Self {
            created_ms: chrono::Utc::now().timestamp_millis(),
            nonce: rand::random(),
        }
    }

    /// Milliseconds since the Unix epoch at which this id was generated.
    #[must_use]
    pub fn created_ms(&self) -> i64 {
        self.created_ms
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "message-{}-{:016x}", self.created_ms, self.nonce)
    }
}

/// Kind of notification. Only affects styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Kind {
    Success,
    Error,
    #[default]
    Info,
    Warning,
}

/// Presentation attributes for a notification kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KindStyle {
    /// Glyph shown at the start of the toast.
    pub glyph: &'static str,
    /// Border and glyph colour.
    pub accent: Color,
}

impl Kind {
    pub const ALL: [Kind; 4] = [Kind::Success, Kind::Error, Kind::Info, Kind::Warning];

    /// Returns the glyph and accent colour for this kind.
    #[must_use]
    pub fn style(&self) -> KindStyle {
        match self {
            Kind::Success => KindStyle {
                glyph: "✔",
                accent: palette::SUCCESS_500,
            },
            Kind::Error => KindStyle {
                glyph: "✖",
                accent: palette::ERROR_500,
            },
            Kind::Info => KindStyle {
                glyph: "ℹ",
                accent: palette::INFO_500,
            },
            Kind::Warning => KindStyle {
                glyph: "⚠",
                accent: palette::WARNING_500,
            },
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Success => "success",
            Kind::Error => "error",
            Kind::Info => "info",
            Kind::Warning => "warning",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    id: NotificationId,
    kind: Kind,
    content: String,
    /// Per-message display time. `None` or zero falls back to the
    /// container default when the toast is shown.
    duration: Option<Duration>,
}

impl Notification {
    /// Creates a notification with a freshly generated id.
    pub fn new(kind: Kind, content: impl Into<String>, duration: Option<Duration>) -> Self {
        Self {
            id: NotificationId::new(),
            kind,
            content: content.into(),
            duration,
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self::new(Kind::Success, content, None)
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self::new(Kind::Error, content, None)
    }

    pub fn info(content: impl Into<String>) -> Self {
        Self::new(Kind::Info, content, None)
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self::new(Kind::Warning, content, None)
    }

    /// Sets the display duration, overriding the container default.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the duration requested at creation, if any.
    #[must_use]
    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    /// Resolves how long this notification stays visible.
    ///
    /// A missing or zero duration resolves to `default`.
    #[must_use]
    pub fn effective_duration(&self, default: Duration) -> Duration {
        self.duration.filter(|d| !d.is_zero()).unwrap_or(default)
    }
}
