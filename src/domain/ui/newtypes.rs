// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Toast Capacity Bounds
// =============================================================================

/// Toast stack capacity bounds.
pub mod toast_bounds {
    /// Minimum number of toasts kept.
    pub const MIN_CAPACITY: usize = 1;
    /// Default number of toasts kept.
    pub const DEFAULT_CAPACITY: usize = 5;
    /// Default auto-dismiss delay in milliseconds.
    pub const DEFAULT_DURATION_MS: u64 = 5000;
}

// =============================================================================
// MaxToasts
// =============================================================================

/// Maximum number of toasts on screen, guaranteed to be positive.
///
/// A capacity of zero would silently drop every toast, so values below 1 are
/// raised to 1 at construction. There is no upper limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaxToasts(usize);

impl MaxToasts {
    /// Creates a new capacity, raising zero to the minimum.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.max(toast_bounds::MIN_CAPACITY))
    }

    /// Returns the raw capacity.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }

    /// Returns whether `len` entries exceed this capacity.
    #[must_use]
    pub fn is_exceeded_by(self, len: usize) -> bool {
        len > self.0
    }
}

impl Default for MaxToasts {
    fn default() -> Self {
        Self(toast_bounds::DEFAULT_CAPACITY)
    }
}

// =============================================================================
// ToastDuration
// =============================================================================

/// Auto-dismiss delay of a toast in milliseconds.
///
/// Zero means the toast stays until it is dismissed manually.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastDuration(u64);

impl ToastDuration {
    /// A duration that never auto-dismisses.
    pub const MANUAL: Self = Self(0);

    /// Creates a duration from milliseconds.
    #[must_use]
    pub const fn from_millis(ms: u64) -> Self {
        Self(ms)
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns `true` if this duration requires a manual dismissal.
    #[must_use]
    pub fn is_manual(self) -> bool {
        self.0 == 0
    }

    /// Returns the delay as a [`Duration`], or `None` for manual dismissal.
    #[must_use]
    pub fn as_duration(self) -> Option<Duration> {
        (!self.is_manual()).then(|| Duration::from_millis(self.0))
    }
}

impl Default for ToastDuration {
    fn default() -> Self {
        Self(toast_bounds::DEFAULT_DURATION_MS)
    }
}

impl From<Duration> for ToastDuration {
    fn from(duration: Duration) -> Self {
        Self(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
    }
}
