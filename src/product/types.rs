// SPDX-License-Identifier: MPL-2.0
//! Catalogue entities and the product configuration form.
//!
//! Field names follow the storefront API (camelCase). Prices are integers in
//! the smallest currency unit; a missing or `null` price reads as 0.

use crate::error::Result;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Reads a number, treating an explicit `null` as zero.
fn null_as_zero<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A product variant, e.g. one specific size.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductOption {
    pub uid: String,
    #[serde(default)]
    pub sku_code: String,
    #[serde(default)]
    pub display_name: String,
    /// Price in cents (or smallest currency unit).
    #[serde(default, deserialize_with = "null_as_zero")]
    pub price: u64,
}

/// A category of variants (e.g. "Size") and the variants it offers.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionType {
    pub option_type_id: u32,
    pub display_name: String,
    #[serde(default)]
    pub options: Vec<ProductOption>,
}

/// Core product information.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInfo {
    pub uid: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
}

/// A product with every option category it can be configured with.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    pub product: ProductInfo,
    #[serde(default)]
    pub option_types: Vec<OptionType>,
}

impl ProductDetail {
    /// Parses a product detail document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a product detail document from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}

/// The configurable option categories of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductOptionKind {
    Size,
    Colour,
    DrawerFront,
    Slabtop,
    Handles,
}

impl ProductOptionKind {
    /// Every kind, in the order the configurator presents them.
    pub const ALL: [ProductOptionKind; 5] = [
        ProductOptionKind::Size,
        ProductOptionKind::Colour,
        ProductOptionKind::DrawerFront,
        ProductOptionKind::Slabtop,
        ProductOptionKind::Handles,
    ];

    /// Returns the catalogue name of the matching [`OptionType`].
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            ProductOptionKind::Size => "Size",
            ProductOptionKind::Colour => "Colour",
            ProductOptionKind::DrawerFront => "Drawer Front",
            ProductOptionKind::Slabtop => "Slabtop",
            ProductOptionKind::Handles => "Handles",
        }
    }

    /// Returns the name of the form field holding this kind's selection.
    #[must_use]
    pub fn form_key(self) -> &'static str {
        match self {
            ProductOptionKind::Size => "size",
            ProductOptionKind::Colour => "colour",
            ProductOptionKind::DrawerFront => "drawerFront",
            ProductOptionKind::Slabtop => "slabtop",
            ProductOptionKind::Handles => "handles",
        }
    }

    /// Parses a form key or catalogue name, ignoring ASCII case.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| {
            name.eq_ignore_ascii_case(kind.form_key())
                || name.eq_ignore_ascii_case(kind.display_name())
        })
    }
}

impl fmt::Display for ProductOptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.display_name())
    }
}

/// The shopper's current configuration of a product.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetailForm {
    pub product_id: String,
    #[serde(default)]
    pub size: ProductOption,
    #[serde(default)]
    pub colour: ProductOption,
    #[serde(default)]
    pub drawer_front: ProductOption,
    #[serde(default)]
    pub slabtop: ProductOption,
    #[serde(default)]
    pub handles: ProductOption,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub quantity: u32,
}

impl ProductDetailForm {
    /// Creates a form with empty selections and the given quantity.
    #[must_use]
    pub fn new(product_id: impl Into<String>, quantity: u32) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
            ..Self::default()
        }
    }

    /// Returns the option selected for `kind`.
    #[must_use]
    pub fn selection(&self, kind: ProductOptionKind) -> &ProductOption {
        match kind {
            ProductOptionKind::Size => &self.size,
            ProductOptionKind::Colour => &self.colour,
            ProductOptionKind::DrawerFront => &self.drawer_front,
            ProductOptionKind::Slabtop => &self.slabtop,
            ProductOptionKind::Handles => &self.handles,
        }
    }

    /// Replaces the option selected for `kind`.
    pub fn select(&mut self, kind: ProductOptionKind, option: ProductOption) {
        let slot = match kind {
            ProductOptionKind::Size => &mut self.size,
            ProductOptionKind::Colour => &mut self.colour,
            ProductOptionKind::DrawerFront => &mut self.drawer_front,
            ProductOptionKind::Slabtop => &mut self.slabtop,
            ProductOptionKind::Handles => &mut self.handles,
        };
        *slot = option;
    }

    /// Iterates over every selection with its kind.
    pub fn selections(&self) -> impl Iterator<Item = (ProductOptionKind, &ProductOption)> {
        ProductOptionKind::ALL
            .into_iter()
            .map(move |kind| (kind, self.selection(kind)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_detail_parses_api_shape() {
        let json = r#"{
            "product": {"uid": "p1", "name": "Vanity", "slug": "vanity", "description": "Oak"},
            "optionTypes": [
                {"optionTypeId": 1, "displayName": "Size", "options": [
                    {"uid": "s1", "skuCode": "S1", "displayName": "Small", "price": 10000}
                ]}
            ]
        }"#;
        let detail = ProductDetail::from_json(json).expect("valid detail");

        assert_eq!(detail.product.slug, "vanity");
        assert_eq!(detail.option_types[0].display_name, "Size");
        assert_eq!(detail.option_types[0].options[0].sku_code, "S1");
        assert_eq!(detail.option_types[0].options[0].price, 10000);
    }

    #[test]
    fn malformed_detail_is_a_parse_error() {
        let result = ProductDetail::from_json("{\"product\": 3}");
        assert!(matches!(result, Err(crate::error::Error::Parse(_))));
    }

    #[test]
    fn from_path_reports_missing_file() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let result = ProductDetail::from_path(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }

    #[test]
    fn missing_price_reads_as_zero() {
        let option: ProductOption =
            serde_json::from_str(r#"{"uid": "x", "skuCode": "X", "displayName": "X"}"#).unwrap();
        assert_eq!(option.price, 0);
    }

    #[test]
    fn null_numbers_read_as_zero() {
        let option: ProductOption = serde_json::from_str(
            r#"{"uid": "x", "skuCode": "X", "displayName": "X", "price": null}"#,
        )
        .unwrap();
        assert_eq!(option.price, 0);

        let form: ProductDetailForm = serde_json::from_str(
            r#"{"productId": "p1", "size": {"uid": "s1", "price": null}, "quantity": null}"#,
        )
        .unwrap();
        assert_eq!(form.size.price, 0);
        assert_eq!(form.quantity, 0);
    }

    #[test]
    fn kind_names_and_form_keys() {
        assert_eq!(ProductOptionKind::DrawerFront.display_name(), "Drawer Front");
        assert_eq!(ProductOptionKind::DrawerFront.form_key(), "drawerFront");
        assert_eq!(ProductOptionKind::parse("drawerfront"), Some(ProductOptionKind::DrawerFront));
        assert_eq!(ProductOptionKind::parse("colour"), Some(ProductOptionKind::Colour));
        assert_eq!(ProductOptionKind::parse("Drawer Front"), Some(ProductOptionKind::DrawerFront));
        assert_eq!(ProductOptionKind::parse("legs"), None);
    }

    #[test]
    fn select_updates_matching_field() {
        let mut form = ProductDetailForm::new("p1", 1);
        let chrome = ProductOption {
            uid: "h1".into(),
            sku_code: "CH1".into(),
            display_name: "Chrome".into(),
            price: 5000,
        };
        form.select(ProductOptionKind::Handles, chrome.clone());

        assert_eq!(form.handles, chrome);
        assert_eq!(form.selection(ProductOptionKind::Handles), &chrome);
        assert_eq!(form.selections().count(), 5);
    }

    #[test]
    fn form_serializes_with_camel_case_keys() {
        let form = ProductDetailForm::new("p1", 2);
        let value = serde_json::to_value(&form).unwrap();
        assert!(value.get("drawerFront").is_some());
        assert!(value.get("productId").is_some());
        assert_eq!(value["quantity"], 2);
    }
}
