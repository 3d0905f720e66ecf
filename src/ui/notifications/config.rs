// SPDX-License-Identifier: MPL-2.0
//! Display defaults shared by every toast.

use crate::domain::ui::{MaxToasts, ToastDuration};
use serde::{Deserialize, Serialize};

/// Screen corner (or edge centre) where the toast stack is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToastPosition {
    #[default]
    TopRight,
    TopLeft,
    BottomRight,
    BottomLeft,
    TopCenter,
    BottomCenter,
}

/// Application-wide toast settings.
///
/// Changes only apply to toasts created afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToastConfig {
    pub position: ToastPosition,
    pub default_duration: ToastDuration,
    pub max_toasts: MaxToasts,
}

/// Partial update of a [`ToastConfig`]; unset fields are left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToastConfigUpdate {
    pub position: Option<ToastPosition>,
    pub default_duration: Option<ToastDuration>,
    pub max_toasts: Option<MaxToasts>,
}

impl ToastConfigUpdate {
    #[must_use]
    pub fn position(mut self, position: ToastPosition) -> Self {
        self.position = Some(position);
        self
    }

    #[must_use]
    pub fn default_duration(mut self, duration: impl Into<ToastDuration>) -> Self {
        self.default_duration = Some(duration.into());
        self
    }

    #[must_use]
    pub fn max_toasts(mut self, max_toasts: usize) -> Self {
        self.max_toasts = Some(MaxToasts::new(max_toasts));
        self
    }
}

impl ToastConfig {
    /// Shallow-merges `update` into this configuration.
    pub fn apply(&mut self, update: ToastConfigUpdate) {
        if let Some(position) = update.position {
            self.position = position;
        }
        if let Some(duration) = update.default_duration {
            self.default_duration = duration;
        }
        if let Some(max_toasts) = update.max_toasts {
            self.max_toasts = max_toasts;
        }
    }
}
