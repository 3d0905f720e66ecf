// SPDX-License-Identifier: MPL-2.0
//! `storefront_core` holds the client-side state of a product configurator
//! storefront: toast notifications, slide-in modals and product pricing.
//!
//! Rendering is left to the presentation layer, which subscribes to the
//! managers in [`ui`] and calls the pure helpers in [`product`].

#![doc(html_root_url = "https://docs.rs/storefront_core/0.1.0")]

pub mod config;
pub mod domain;
pub mod error;
pub mod product;
pub mod ui;
