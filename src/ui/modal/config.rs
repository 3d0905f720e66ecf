// SPDX-License-Identifier: MPL-2.0
//! Modal identifiers, placement and configuration records.

use crate::config::DEFAULT_MODAL_SIZE;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;

/// Identifier of a modal, either caller-chosen or a generated UUID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModalId(String);

impl ModalId {
    /// Generates a random (version 4) UUID in its hyphenated textual form.
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for ModalId {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ModalId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ModalId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ModalId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for ModalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Screen edge a modal slides in from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModalPosition {
    Top,
    #[default]
    Right,
    Bottom,
    Left,
}

impl ModalPosition {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ModalPosition::Top => "top",
            ModalPosition::Right => "right",
            ModalPosition::Bottom => "bottom",
            ModalPosition::Left => "left",
        }
    }
}

impl fmt::Display for ModalPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stored state of one modal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModalConfig {
    pub id: ModalId,
    pub title: String,
    pub position: ModalPosition,
    pub size: Option<String>,
    pub visible: bool,
}

/// Placement applied when an open request leaves it unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalDefaults {
    pub position: ModalPosition,
    pub size: String,
}

impl Default for ModalDefaults {
    fn default() -> Self {
        Self {
            position: ModalPosition::default(),
            size: DEFAULT_MODAL_SIZE.to_string(),
        }
    }
}

/// What a caller asks for when opening a modal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModalRequest {
    pub id: Option<ModalId>,
    pub title: String,
    pub position: Option<ModalPosition>,
    pub size: Option<String>,
}

impl ModalRequest {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn id(mut self, id: impl Into<ModalId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn position(mut self, position: ModalPosition) -> Self {
        self.position = Some(position);
        self
    }

    #[must_use]
    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    /// Builds the visible configuration stored for `id`.
    pub(crate) fn into_config(self, id: ModalId, defaults: &ModalDefaults) -> ModalConfig {
        ModalConfig {
            id,
            title: self.title,
            position: self.position.unwrap_or(defaults.position),
            size: Some(self.size.unwrap_or_else(|| defaults.size.clone())),
            visible: true,
        }
    }
}
