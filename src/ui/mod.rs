// SPDX-License-Identifier: MPL-2.0
//! Shopper-facing UI state.
//!
//! Rendering lives in the presentation layer; this module only owns the state
//! it reads and the operations it calls.
//!
//! - [`notifications`] - Toast notification system for shopper feedback
//! - [`modal`] - Slide-in modals keyed by ID

pub mod modal;
pub mod notifications;
