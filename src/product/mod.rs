// SPDX-License-Identifier: MPL-2.0
//! Product catalogue types, option lookups and pricing.
//!
//! # Examples
//!
//! ```
//! use storefront_core::product::{product_price, ProductDetailForm, ProductOption, ProductOptionKind};
//!
//! let mut form = ProductDetailForm::new("vanity", 2);
//! form.select(
//!     ProductOptionKind::Size,
//!     ProductOption { uid: "s1".into(), sku_code: "L1".into(), display_name: "Large".into(), price: 50_000 },
//! );
//! assert_eq!(product_price(Some(&form)), 100_000);
//! ```

mod options;
mod price;
mod types;

pub use options::{options_by_kind, options_by_name};
pub use price::product_price;
pub use types::{
    OptionType, ProductDetail, ProductDetailForm, ProductInfo, ProductOption, ProductOptionKind,
};
