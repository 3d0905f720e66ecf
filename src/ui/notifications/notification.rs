// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! This module defines the immutable [`Toast`] record, its [`ToastKind`]
//! and the [`ToastOptions`] builder accepted by the manager.

use super::config::ToastConfig;
use crate::domain::ui::ToastDuration;
use chrono::{DateTime, Utc};
use std::fmt;
use std::ops::Deref;
use std::time::Duration;
use tokio::time::Instant;

/// Unique identifier for a toast.
///
/// Opaque to callers; formatted as `toast-<unix millis>-<random suffix>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ToastId(String);

impl ToastId {
    /// Creates a new unique toast ID.
    #[must_use]
    pub fn generate() -> Self {
        let suffix = uuid::Uuid::new_v4().simple().to_string();
        Self(format!(
            "toast-{}-{}",
            Utc::now().timestamp_millis(),
            &suffix[..9]
        ))
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for ToastId {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind of toast; drives the styling picked by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl ToastKind {
    /// Returns the lowercase name used by stylesheets and logs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Warning => "warning",
            ToastKind::Info => "info",
        }
    }
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional settings for a new toast.
///
/// Every field falls back to a default when left unset: kind `Info`,
/// duration from the manager's [`ToastConfig`], not persistent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastOptions {
    pub title: Option<String>,
    pub kind: Option<ToastKind>,
    pub icon: Option<String>,
    pub duration: Option<ToastDuration>,
    pub persistent: bool,
}

impl ToastOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: ToastKind) -> Self {
        self.kind = Some(kind);
        self
    }

    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Sets a custom auto-dismiss delay. Zero means manual dismissal only.
    #[must_use]
    pub fn duration(mut self, duration: impl Into<ToastDuration>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    /// Keeps the toast until it is removed explicitly, whatever the duration.
    #[must_use]
    pub fn persistent(mut self, persistent: bool) -> Self {
        self.persistent = persistent;
        self
    }
}

/// A notification shown to the shopper.
///
/// Toasts are immutable once created; the manager only inserts and removes them.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    id: ToastId,
    message: String,
    title: Option<String>,
    kind: ToastKind,
    icon: Option<String>,
    duration: ToastDuration,
    persistent: bool,
    created_at: DateTime<Utc>,
    /// Monotonic deadline used by [`ToastManager::tick`](super::ToastManager::tick).
    expires_at: Option<Instant>,
}

impl Toast {
    pub(crate) fn new(message: String, options: ToastOptions, config: &ToastConfig) -> Self {
        let duration = options.duration.unwrap_or(config.default_duration);
        let persistent = options.persistent;
        let expires_at = if persistent {
            None
        } else {
            duration.as_duration().map(|d| Instant::now() + d)
        };

        Self {
            id: ToastId::generate(),
            message,
            title: options.title,
            kind: options.kind.unwrap_or_default(),
            icon: options.icon,
            duration,
            persistent,
            created_at: Utc::now(),
            expires_at,
        }
    }

    #[must_use]
    pub fn id(&self) -> &ToastId {
        &self.id
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn kind(&self) -> ToastKind {
        self.kind
    }

    #[must_use]
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    #[must_use]
    pub fn duration(&self) -> ToastDuration {
        self.duration
    }

    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.persistent
    }

    /// Returns when this toast was created (wall clock).
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the delay after which this toast removes itself, if any.
    #[must_use]
    pub fn auto_dismiss_after(&self) -> Option<Duration> {
        if self.persistent {
            None
        } else {
            self.duration.as_duration()
        }
    }

    /// Returns whether the auto-dismiss deadline has passed at `now`.
    #[must_use]
    pub fn is_expired_at(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|deadline| now >= deadline)
    }
}
