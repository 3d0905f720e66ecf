// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for shopper feedback.
//!
//! Toasts inform the shopper about actions (item added to basket, invalid
//! selection, etc.) without blocking interaction. They stack newest-first,
//! are capped to a configurable count and dismiss themselves after a delay
//! unless marked persistent.
//!
//! # Components
//!
//! - [`notification`] - Core `Toast` record, `ToastKind` and `ToastOptions`
//! - [`config`] - `ToastConfig` display defaults and partial updates
//! - [`manager`] - `ToastManager` for the stack and its expiry timers
//!
//! # Usage
//!
//! ```
//! use storefront_core::ui::notifications::{ToastManager, ToastOptions};
//!
//! let toasts = ToastManager::new();
//! let id = toasts.success("Added to basket", ToastOptions::new().title("Basket"));
//! assert_eq!(toasts.active()[0].id(), &id);
//! toasts.remove(&id);
//! assert!(toasts.is_empty());
//! ```

mod config;
mod manager;
mod notification;

pub use config::{ToastConfig, ToastConfigUpdate, ToastPosition};
pub use manager::{Message as ToastMessage, ToastManager};
pub use notification::{Toast, ToastId, ToastKind, ToastOptions};
