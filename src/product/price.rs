// SPDX-License-Identifier: MPL-2.0
//! Price of a configured product.

use super::types::ProductDetailForm;

/// Returns the total price of `form`: the sum of every selected option's
/// price multiplied by the quantity. A missing form costs 0.
///
/// Arithmetic saturates at `u64::MAX` instead of wrapping.
#[must_use]
pub fn product_price(form: Option<&ProductDetailForm>) -> u64 {
    let Some(form) = form else {
        return 0;
    };

    let options_total = form
        .selections()
        .fold(0u64, |total, (_, option)| total.saturating_add(option.price));

    options_total.saturating_mul(u64::from(form.quantity))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::types::ProductOption;
    use proptest::prelude::*;

    fn option(uid: &str, sku: &str, name: &str, price: u64) -> ProductOption {
        ProductOption {
            uid: uid.to_string(),
            sku_code: sku.to_string(),
            display_name: name.to_string(),
            price,
        }
    }

    fn vanity(quantity: u32) -> ProductDetailForm {
        ProductDetailForm {
            product_id: "test-product-id".to_string(),
            size: option("size-1", "L1", "Large", 50_000),
            colour: option("color-1", "BLU", "Blue", 1_000),
            drawer_front: option("drawer-1", "WD1", "Wood", 15_000),
            slabtop: option("slab-1", "ST1", "Marble", 25_000),
            handles: option("handle-1", "CH1", "Chrome", 5_000),
            quantity,
        }
    }

    #[test]
    fn multiplies_options_total_by_quantity() {
        assert_eq!(product_price(Some(&vanity(2))), 192_000);
    }

    #[test]
    fn single_quantity_is_options_total() {
        assert_eq!(product_price(Some(&vanity(1))), 96_000);
    }

    #[test]
    fn large_quantity() {
        assert_eq!(product_price(Some(&vanity(10))), 960_000);
    }

    #[test]
    fn zero_prices_cost_nothing() {
        let form = ProductDetailForm {
            product_id: "zero-price-product".to_string(),
            size: option("size-1", "S1", "Small", 0),
            colour: option("color-1", "RED", "Red", 0),
            drawer_front: option("drawer-1", "WD1", "Wood", 0),
            slabtop: option("slab-1", "ST1", "Stone", 0),
            handles: option("handle-1", "H1", "Handle", 0),
            quantity: 3,
        };
        assert_eq!(product_price(Some(&form)), 0);
    }

    #[test]
    fn zero_quantity_costs_nothing() {
        assert_eq!(product_price(Some(&vanity(0))), 0);
    }

    #[test]
    fn missing_form_costs_nothing() {
        assert_eq!(product_price(None), 0);
    }

    #[test]
    fn saturates_instead_of_overflowing() {
        let mut form = vanity(u32::MAX);
        form.size.price = u64::MAX;
        assert_eq!(product_price(Some(&form)), u64::MAX);
    }

    proptest! {
        /// The price is the five option prices summed, times the quantity,
        /// saturating at `u64::MAX`.
        #[test]
        fn prop_price_is_sum_times_quantity(
            prices in prop::array::uniform5(0u64..=u64::MAX / 4),
            quantity in any::<u32>(),
        ) {
            let mut form = vanity(quantity);
            form.size.price = prices[0];
            form.colour.price = prices[1];
            form.drawer_front.price = prices[2];
            form.slabtop.price = prices[3];
            form.handles.price = prices[4];

            let sum: u128 = prices.iter().map(|&p| u128::from(p)).sum();
            let expected = (sum * u128::from(quantity)).min(u128::from(u64::MAX));
            prop_assert_eq!(u128::from(product_price(Some(&form))), expected);
        }
    }
}
