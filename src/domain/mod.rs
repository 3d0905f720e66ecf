// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core value types with ZERO external dependencies.
//!
//! This module contains pure domain types and value objects.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`ui`]: UI value objects ([`MaxToasts`](ui::newtypes::MaxToasts),
//!   [`ToastDuration`](ui::newtypes::ToastDuration))

pub mod ui;
