//! Session cart engine.
//!
//! A [`Cart`] is a plain value. Every operation takes the current cart and
//! returns the next one, so callers own where the state lives (a session
//! store, a test, the CLI) and the engine itself never performs I/O.
//!
//! Invariants:
//! - at most one [`CartItem`] per product id
//! - items keep the order in which products were first added
//! - every quantity is at least 1

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::types::{Price, ProductId};

/// A product together with the quantity selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    /// The product id this line is keyed by.
    #[must_use]
    pub const fn id(&self) -> ProductId {
        self.product.id
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.quantity)
    }
}

/// An ordered list of cart lines.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add one unit of `product`.
    ///
    /// Increments the existing line for the product, or appends a new line
    /// with quantity 1.
    #[must_use]
    pub fn add_to_cart(mut self, product: &Product) -> Self {
        if let Some(item) = self.items.iter_mut().find(|i| i.id() == product.id) {
            item.quantity = item.quantity.saturating_add(1);
        } else {
            self.items.push(CartItem {
                product: product.clone(),
                quantity: 1,
            });
        }
        self
    }

    /// Remove the line for `id` whatever its quantity. Unknown ids are ignored.
    #[must_use]
    pub fn remove_from_cart(mut self, id: ProductId) -> Self {
        self.items.retain(|i| i.id() != id);
        self
    }

    /// Shift the quantity of the line for `id` by `delta`.
    ///
    /// The new quantity is floored at 1, so decrementing never removes a
    /// line; use [`Cart::remove_from_cart`] for that. Lines that end at zero
    /// are still dropped afterwards. Unknown ids are ignored.
    #[must_use]
    pub fn update_quantity(mut self, id: ProductId, delta: i32) -> Self {
        for item in self.items.iter_mut().filter(|i| i.product.id == id) {
            let next = (i64::from(item.quantity) + i64::from(delta)).max(1);
            item.quantity = u32::try_from(next).unwrap_or(u32::MAX);
        }
        self.items.retain(|i| i.quantity > 0);
        self
    }

    /// Sum of `price * quantity` over all lines.
    #[must_use]
    pub fn total(&self) -> Price {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Sum of quantities over all lines.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.items
            .iter()
            .fold(0_u32, |acc, i| acc.saturating_add(i.quantity))
    }

    /// Lines in the order their products were first added.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// The line for `id`, if present.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| i.id() == id)
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn product(id: u32) -> Product {
        Catalog::seeded()
            .find(ProductId::new(id))
            .cloned()
            .unwrap()
    }

    fn quantities(cart: &Cart) -> Vec<(u32, u32)> {
        cart.items()
            .iter()
            .map(|i| (i.id().as_u32(), i.quantity))
            .collect()
    }

    #[test]
    fn test_add_to_empty_cart() {
        for id in 1..=6 {
            let cart = Cart::new().add_to_cart(&product(id));
            assert_eq!(quantities(&cart), vec![(id, 1)]);
        }
    }

    #[test]
    fn test_add_twice_increments() {
        let p = product(1);
        let cart = Cart::new().add_to_cart(&p).add_to_cart(&p);
        assert_eq!(quantities(&cart), vec![(1, 2)]);
    }

    #[test]
    fn test_insertion_order_is_first_add() {
        let cart = Cart::new()
            .add_to_cart(&product(3))
            .add_to_cart(&product(1))
            .add_to_cart(&product(3));
        assert_eq!(quantities(&cart), vec![(3, 2), (1, 1)]);
    }

    #[test]
    fn test_remove_drops_whole_line() {
        let p = product(2);
        let cart = Cart::new()
            .add_to_cart(&p)
            .add_to_cart(&p)
            .add_to_cart(&product(1))
            .remove_from_cart(p.id);
        assert_eq!(quantities(&cart), vec![(1, 1)]);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let cart = Cart::new().add_to_cart(&product(1));
        let after = cart.clone().remove_from_cart(ProductId::new(99));
        assert_eq!(after, cart);
        assert_eq!(Cart::new().remove_from_cart(ProductId::new(1)), Cart::new());
    }

    #[test]
    fn test_update_quantity_increment() {
        let cart = Cart::new()
            .add_to_cart(&product(1))
            .update_quantity(ProductId::new(1), 1);
        assert_eq!(quantities(&cart), vec![(1, 2)]);
    }

    #[test]
    fn test_update_quantity_floors_at_one() {
        let cart = Cart::new()
            .add_to_cart(&product(1))
            .update_quantity(ProductId::new(1), -1);
        assert_eq!(quantities(&cart), vec![(1, 1)]);

        let cart = cart.update_quantity(ProductId::new(1), -50);
        assert_eq!(quantities(&cart), vec![(1, 1)]);
    }

    #[test]
    fn test_update_quantity_extreme_deltas() {
        let cart = Cart::new()
            .add_to_cart(&product(1))
            .update_quantity(ProductId::new(1), i32::MIN);
        assert_eq!(quantities(&cart), vec![(1, 1)]);

        let cart = cart
            .update_quantity(ProductId::new(1), i32::MAX)
            .update_quantity(ProductId::new(1), i32::MAX)
            .update_quantity(ProductId::new(1), i32::MAX);
        assert_eq!(cart.items()[0].quantity, u32::MAX);
    }

    #[test]
    fn test_update_quantity_unknown_id_is_noop() {
        let cart = Cart::new().add_to_cart(&product(4));
        assert_eq!(cart.clone().update_quantity(ProductId::new(7), 3), cart);
    }

    #[test]
    fn test_update_only_touches_matching_line() {
        let cart = Cart::new()
            .add_to_cart(&product(1))
            .add_to_cart(&product(2))
            .update_quantity(ProductId::new(2), 4);
        assert_eq!(quantities(&cart), vec![(1, 1), (2, 5)]);
    }

    #[test]
    fn test_empty_cart_totals() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Price::ZERO);
        assert_eq!(cart.count(), 0);
    }

    #[test]
    fn test_end_to_end_scenario() {
        let cart = Cart::new()
            .add_to_cart(&product(1))
            .add_to_cart(&product(2))
            .add_to_cart(&product(1));

        assert_eq!(quantities(&cart), vec![(1, 2), (2, 1)]);
        assert_eq!(cart.total(), Price::new(4500 * 2 + 5500));
        assert_eq!(cart.total(), Price::new(14500));
        assert_eq!(cart.count(), 3);
        assert_eq!(cart.get(ProductId::new(1)).unwrap().line_total(), Price::new(9000));
    }

    #[test]
    fn test_serde_roundtrip_keeps_order() {
        let cart = Cart::new()
            .add_to_cart(&product(6))
            .add_to_cart(&product(2));
        let json = serde_json::to_string(&cart).unwrap();
        let restored: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, cart);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Op {
            Add(u32),
            Remove(u32),
            Update(u32, i32),
        }

        fn op() -> impl Strategy<Value = Op> {
            prop_oneof![
                (1..=6_u32).prop_map(Op::Add),
                (1..=8_u32).prop_map(Op::Remove),
                ((1..=8_u32), -5..=5_i32).prop_map(|(id, d)| Op::Update(id, d)),
            ]
        }

        fn apply(cart: Cart, op: &Op) -> Cart {
            match *op {
                Op::Add(id) => cart.add_to_cart(&product(id)),
                Op::Remove(id) => cart.remove_from_cart(ProductId::new(id)),
                Op::Update(id, delta) => cart.update_quantity(ProductId::new(id), delta),
            }
        }

        proptest! {
            /// Property: totals are always derived from the current lines.
            #[test]
            fn totals_match_lines(ops in prop::collection::vec(op(), 0..40)) {
                let cart = ops.iter().fold(Cart::new(), apply);

                let expected_total: u64 = cart
                    .items()
                    .iter()
                    .map(|i| i.product.price.amount() * u64::from(i.quantity))
                    .sum();
                let expected_count: u32 = cart.items().iter().map(|i| i.quantity).sum();

                prop_assert_eq!(cart.total(), Price::new(expected_total));
                prop_assert_eq!(cart.count(), expected_count);
            }

            /// Property: one line per product and every quantity is positive.
            #[test]
            fn lines_are_unique_and_positive(ops in prop::collection::vec(op(), 0..40)) {
                let cart = ops.iter().fold(Cart::new(), apply);
                let mut ids: Vec<u32> = cart.items().iter().map(|i| i.id().as_u32()).collect();
                let len = ids.len();
                ids.sort_unstable();
                ids.dedup();
                prop_assert_eq!(ids.len(), len);
                prop_assert!(cart.items().iter().all(|i| i.quantity >= 1));
            }
        }
    }
}
