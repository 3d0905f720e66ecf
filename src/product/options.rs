// SPDX-License-Identifier: MPL-2.0
//! Option lookups on a product detail.

use super::types::{ProductDetail, ProductOption, ProductOptionKind};

/// Returns the options of the first option type named exactly `name`.
///
/// The match is case-sensitive. Unknown names yield an empty slice.
#[must_use]
pub fn options_by_name<'a>(detail: &'a ProductDetail, name: &str) -> &'a [ProductOption] {
    detail
        .option_types
        .iter()
        .find(|option_type| option_type.display_name == name)
        .map(|option_type| option_type.options.as_slice())
        .unwrap_or(&[])
}

/// Returns the options offered for `kind`.
#[must_use]
pub fn options_by_kind(detail: &ProductDetail, kind: ProductOptionKind) -> &[ProductOption] {
    options_by_name(detail, kind.display_name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::types::{OptionType, ProductInfo};
    use proptest::prelude::*;

    fn option(uid: &str, sku: &str, name: &str, price: u64) -> ProductOption {
        ProductOption {
            uid: uid.to_string(),
            sku_code: sku.to_string(),
            display_name: name.to_string(),
            price,
        }
    }

    fn detail() -> ProductDetail {
        ProductDetail {
            product: ProductInfo {
                uid: "product-1".to_string(),
                name: "Test Product".to_string(),
                slug: "test-product".to_string(),
                description: "A product used in tests".to_string(),
            },
            option_types: vec![
                OptionType {
                    option_type_id: 1,
                    display_name: "Size".to_string(),
                    options: vec![
                        option("size-1", "S1", "Small", 10_000),
                        option("size-2", "L1", "Large", 20_000),
                    ],
                },
                OptionType {
                    option_type_id: 2,
                    display_name: "Colour".to_string(),
                    options: vec![
                        option("colour-1", "RED", "Red", 0),
                        option("colour-2", "BLU", "Blue", 1_000),
                    ],
                },
                OptionType {
                    option_type_id: 3,
                    display_name: "Handles".to_string(),
                    options: vec![option("handle-1", "CH1", "Chrome", 5_000)],
                },
            ],
        }
    }

    #[test]
    fn finds_options_by_display_name() {
        let detail = detail();

        let sizes = options_by_name(&detail, "Size");
        assert_eq!(sizes.len(), 2);
        assert_eq!(sizes[1].sku_code, "L1");

        let colours = options_by_name(&detail, "Colour");
        assert_eq!(colours[0].display_name, "Red");

        let handles = options_by_name(&detail, "Handles");
        assert_eq!(handles, &[option("handle-1", "CH1", "Chrome", 5_000)]);
    }

    #[test]
    fn missing_option_type_is_empty() {
        let detail = detail();
        assert!(options_by_kind(&detail, ProductOptionKind::DrawerFront).is_empty());
        assert!(options_by_name(&detail, "Drawer Front").is_empty());
    }

    #[test]
    fn match_is_case_sensitive() {
        assert!(options_by_name(&detail(), "size").is_empty());
    }

    #[test]
    fn first_matching_type_wins() {
        let mut detail = detail();
        detail.option_types.push(OptionType {
            option_type_id: 9,
            display_name: "Size".to_string(),
            options: vec![option("size-9", "XL", "Extra Large", 90_000)],
        });
        assert_eq!(options_by_name(&detail, "Size")[0].uid, "size-1");
    }

    #[test]
    fn product_without_option_types_is_empty() {
        let detail = ProductDetail::default();
        for kind in ProductOptionKind::ALL {
            assert!(options_by_kind(&detail, kind).is_empty());
        }
    }

    #[test]
    fn kind_lookup_uses_catalogue_name() {
        let detail = detail();
        assert_eq!(options_by_kind(&detail, ProductOptionKind::Size).len(), 2);
        assert_eq!(options_by_kind(&detail, ProductOptionKind::Colour).len(), 2);
    }

    proptest! {
        /// The lookup returns the options of the first type with that exact
        /// name, or nothing when no type matches.
        #[test]
        fn prop_lookup_returns_first_exact_match(
            names in prop::collection::vec(
                prop::sample::select(vec!["Size", "Colour", "Handles", "size"]),
                0..8,
            ),
            wanted in prop::sample::select(vec!["Size", "Colour", "Handles", "Slabtop"]),
        ) {
            let detail = ProductDetail {
                product: ProductInfo::default(),
                option_types: names
                    .iter()
                    .zip(0u32..)
                    .map(|(name, type_id)| OptionType {
                        option_type_id: type_id,
                        display_name: (*name).to_string(),
                        options: vec![option(&format!("opt-{type_id}"), "SKU", name, 0)],
                    })
                    .collect(),
            };

            let found = options_by_name(&detail, wanted);
            match names.iter().position(|name| *name == wanted) {
                Some(index) => {
                    prop_assert_eq!(found.len(), 1);
                    prop_assert_eq!(&found[0].uid, &format!("opt-{index}"));
                }
                None => prop_assert!(found.is_empty()),
            }
        }
    }
}
