// SPDX-License-Identifier: MPL-2.0
//! Slide-in modal management.
//!
//! # Components
//!
//! - [`config`] - `ModalId`, `ModalPosition`, `ModalConfig` and open requests
//! - [`data`] - `ModalData` payloads, renderable `ModalContent` and callbacks
//! - [`store`] - `ModalStore`, the shared state of every modal
//! - [`launcher`] - `ModalLauncher`, the entry points used by view code
//!
//! # Usage
//!
//! ```
//! use storefront_core::ui::modal::{ModalPosition, ModalRequest, ModalStore};
//!
//! let modals: ModalStore = ModalStore::new();
//! let id = modals.open(
//!     ModalRequest::new("Pick size").position(ModalPosition::Left),
//!     None,
//! );
//! assert!(modals.is_modal_visible(&id));
//!
//! modals.close(&id);
//! assert!(!modals.is_modal_visible(&id));
//! assert!(modals.get_modal(&id).is_some());
//! ```

mod config;
mod data;
mod launcher;
mod store;

pub use config::{ModalConfig, ModalDefaults, ModalId, ModalPosition, ModalRequest};
pub use data::{keys, ActionHandler, Loader, ModalContent, ModalData};
pub use launcher::{CloseHandler, ModalLauncher, OpenModalOptions, CLOSE_ACTION};
pub use store::{ModalState, ModalStore, WeakModalStore};
