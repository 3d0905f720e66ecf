// SPDX-License-Identifier: MPL-2.0
//! This module handles the storefront's display settings, loaded from and
//! saved to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[toast]` - Toast stack position, auto-dismiss delay and capacity
//! - `[modal]` - Default modal placement and size classes
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Pass a directory to `load_with_override()`/`save_with_override()`
//! 3. Set the `STOREFRONT_CONFIG_DIR` environment variable
//! 4. Falls back to the platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use storefront_core::config::{self, Settings};
//!
//! // Load existing settings (returns tuple with optional warning)
//! let (mut settings, _warning) = config::load();
//!
//! // Modify a setting
//! settings.toast.max_toasts = Some(3);
//!
//! // Save the modified settings
//! config::save(&settings).expect("Failed to save settings");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::ui::{MaxToasts, ToastDuration};
use crate::error::{Error, Result};
use crate::ui::modal::{ModalDefaults, ModalPosition};
use crate::ui::notifications::{ToastConfig, ToastPosition};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "StorefrontCore";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "STOREFRONT_CONFIG_DIR";

// =============================================================================
// Section Structs
// =============================================================================

/// Toast settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToastSettings {
    /// Screen corner of the toast stack.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<ToastPosition>,

    /// Auto-dismiss delay in milliseconds (0 keeps toasts until dismissed).
    #[serde(
        default = "default_toast_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_duration_ms: Option<u64>,

    /// Maximum number of toasts on screen.
    #[serde(default = "default_max_toasts", skip_serializing_if = "Option::is_none")]
    pub max_toasts: Option<usize>,
}

impl Default for ToastSettings {
    fn default() -> Self {
        Self {
            position: Some(ToastPosition::default()),
            default_duration_ms: default_toast_duration_ms(),
            max_toasts: default_max_toasts(),
        }
    }
}

impl ToastSettings {
    /// Resolves the settings into a [`ToastConfig`], filling gaps with defaults.
    #[must_use]
    pub fn to_config(&self) -> ToastConfig {
        ToastConfig {
            position: self.position.unwrap_or_default(),
            default_duration: self
                .default_duration_ms
                .map_or_else(ToastDuration::default, ToastDuration::from_millis),
            max_toasts: self.max_toasts.map_or_else(MaxToasts::default, MaxToasts::new),
        }
    }
}

/// Modal settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModalSettings {
    /// Edge modals slide in from when the caller does not choose one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_position: Option<ModalPosition>,

    /// Size classes used when the caller does not provide any.
    #[serde(default = "default_modal_size", skip_serializing_if = "Option::is_none")]
    pub default_size: Option<String>,
}

impl Default for ModalSettings {
    fn default() -> Self {
        Self {
            default_position: Some(ModalPosition::default()),
            default_size: default_modal_size(),
        }
    }
}

impl ModalSettings {
    /// Resolves the settings into [`ModalDefaults`].
    #[must_use]
    pub fn to_defaults(&self) -> ModalDefaults {
        ModalDefaults {
            position: self.default_position.unwrap_or_default(),
            size: self
                .default_size
                .clone()
                .filter(|size| !size.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_MODAL_SIZE.to_string()),
        }
    }
}

#[allow(clippy::unnecessary_wraps)]
fn default_toast_duration_ms() -> Option<u64> {
    Some(DEFAULT_TOAST_DURATION_MS)
}

#[allow(clippy::unnecessary_wraps)]
fn default_max_toasts() -> Option<usize> {
    Some(DEFAULT_MAX_TOASTS)
}

#[allow(clippy::unnecessary_wraps)]
fn default_modal_size() -> Option<String> {
    Some(DEFAULT_MODAL_SIZE.to_string())
}

// =============================================================================
// Main Settings Struct
// =============================================================================

/// Storefront settings, organized by section.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    #[serde(default)]
    pub toast: ToastSettings,
    #[serde(default)]
    pub modal: ModalSettings,
}

// =============================================================================
// Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(dir) = base_dir {
        return Some(dir.join(CONFIG_FILE));
    }

    if let Some(dir) = std::env::var_os(ENV_CONFIG_DIR).filter(|dir| !dir.is_empty()) {
        return Some(PathBuf::from(dir).join(CONFIG_FILE));
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the settings from the default path.
///
/// Returns a tuple of (settings, optional_warning). If loading fails, returns
/// default settings with a warning explaining what went wrong.
pub fn load() -> (Settings, Option<String>) {
    load_with_override(None)
}

/// Loads the settings from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Settings, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(settings) => return (settings, None),
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "settings unreadable, using defaults");
                    return (Settings::default(), Some(err.to_string()));
                }
            }
        }
    }
    (Settings::default(), None)
}

/// Loads settings from a specific path.
pub fn load_from_path(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path)?;
    let settings: Settings = toml::from_str(&content)?;
    Ok(settings)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the settings to the default path.
pub fn save(settings: &Settings) -> Result<()> {
    save_with_override(settings, None)
}

/// Saves the settings to a custom directory.
pub fn save_with_override(settings: &Settings, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(settings, &path);
    }
    Ok(())
}

/// Saves settings to a specific path.
pub fn save_to_path(settings: &Settings, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(settings).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
