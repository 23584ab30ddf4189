//! # Cart Module
//!
//! The cart store and every figure derived from it.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Screen Action            Cart Method             Line Items Change     │
//! │  ─────────────            ───────────             ─────────────────     │
//! │                                                                         │
//! │  "Add to cart" ─────────► add_item() ───────────► push or merge qty    │
//! │                                                                         │
//! │  Stepper +/- ───────────► update_quantity() ────► qty = n (n<=0 drops) │
//! │                                                                         │
//! │  Trash icon ────────────► remove_item() ────────► retain(id != x)      │
//! │                                                                         │
//! │  Bill details ──────────► BillSummary::compute() (read only)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Items are unique by `id`; adding an existing id merges quantities
//! - First-insertion order is preserved
//! - Every stored quantity is >= 1
//! - The unit count and both totals always fit in `i64`; mutations that
//!   would break this are rejected before anything is stored
//! - Totals are never stored; every read recomputes them from the items

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::CartLineItem;
use crate::validation::validate_line_item;

/// Flat shipping fee charged below the free-delivery threshold (₹79).
pub const DEFAULT_SHIPPING_FEE: Money = Money::from_rupees(79);

/// Cart total at which delivery becomes free (₹77).
pub const DEFAULT_FREE_DELIVERY_THRESHOLD: Money = Money::from_rupees(77);

// =============================================================================
// Cart Change
// =============================================================================

/// What a mutation did to the cart.
///
/// Subscribers use this to skip redundant work; it carries no state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CartChange {
    /// A new line was appended.
    Added,
    /// Units were added to an existing line.
    Merged,
    /// A line's quantity was set to a new value.
    Updated,
    /// A line was dropped.
    Removed,
    /// All lines were dropped.
    Cleared,
    /// The summary banner was closed; lines untouched.
    BannerDismissed,
    /// Nothing changed (absent id, same quantity, already empty).
    Unchanged,
}

impl CartChange {
    pub fn is_change(&self) -> bool {
        !matches!(self, CartChange::Unchanged)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    items: Vec<CartLineItem>,

    /// When the cart was created or last cleared.
    created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds units of a product, merging into an existing line with the same id.
    ///
    /// ## Behavior
    /// - Invalid payload (empty id/title, negative price, quantity < 1):
    ///   validation error, cart unchanged
    /// - Resulting quantity would push the unit count or either total past
    ///   `i64`: `QuantityOverflow`, cart unchanged
    /// - Id already present: its quantity grows by `item.quantity`; the
    ///   stored title, prices and labels are kept
    /// - Otherwise: appended at the end
    pub fn add_item(&mut self, item: CartLineItem) -> CoreResult<CartChange> {
        validate_line_item(&item)?;

        if let Some(index) = self.items.iter().position(|i| i.id == item.id) {
            let existing = &self.items[index];
            let max = self.max_quantity_for(existing);
            let merged = existing
                .quantity
                .checked_add(item.quantity)
                .filter(|qty| *qty <= max)
                .ok_or_else(|| CoreError::QuantityOverflow {
                    id: item.id.clone(),
                    max,
                })?;
            self.items[index].quantity = merged;
            return Ok(CartChange::Merged);
        }

        let max = self.max_quantity_for(&item);
        if item.quantity > max {
            return Err(CoreError::QuantityOverflow { id: item.id, max });
        }

        self.items.push(item);
        Ok(CartChange::Added)
    }

    /// Sets the quantity of a line.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: removes the line (no-op when absent)
    /// - Id not in cart: `LineItemNotFound`, cart unchanged
    /// - Quantity too large for the totals: `QuantityOverflow`, cart unchanged
    pub fn update_quantity(&mut self, id: &str, quantity: i64) -> CoreResult<CartChange> {
        if quantity <= 0 {
            return Ok(self.remove_item(id));
        }

        let index = self
            .items
            .iter()
            .position(|i| i.id == id)
            .ok_or_else(|| CoreError::LineItemNotFound(id.to_string()))?;

        if self.items[index].quantity == quantity {
            return Ok(CartChange::Unchanged);
        }

        let max = self.max_quantity_for(&self.items[index]);
        if quantity > max {
            return Err(CoreError::QuantityOverflow {
                id: id.to_string(),
                max,
            });
        }

        self.items[index].quantity = quantity;
        Ok(CartChange::Updated)
    }

    /// Largest quantity `line` can hold next to the other lines while the
    /// unit count, total price and original total all stay within `i64`.
    fn max_quantity_for(&self, line: &CartLineItem) -> i64 {
        let others = self.items.iter().filter(|i| i.id != line.id);

        let (mut units, mut total, mut original) = (0i64, 0i64, 0i64);
        for other in others {
            units = units.saturating_add(other.quantity);
            total = total.saturating_add(other.price.paise().saturating_mul(other.quantity));
            original = original
                .saturating_add(other.original_price.paise().saturating_mul(other.quantity));
        }

        let headroom = |used: i64, unit_price: Money| match unit_price.paise() {
            p if p > 0 => (i64::MAX - used) / p,
            _ => i64::MAX,
        };

        (i64::MAX - units)
            .min(headroom(total, line.price))
            .min(headroom(original, line.original_price))
    }

    /// Removes a line by id. Absent ids are a no-op.
    pub fn remove_item(&mut self, id: &str) -> CartChange {
        let initial_len = self.items.len();
        self.items.retain(|i| i.id != id);

        if self.items.len() == initial_len {
            CartChange::Unchanged
        } else {
            CartChange::Removed
        }
    }

    /// Clears all lines from the cart.
    pub fn clear(&mut self) -> CartChange {
        let had_items = !self.items.is_empty();
        self.items.clear();
        self.created_at = Utc::now();

        if had_items {
            CartChange::Cleared
        } else {
            CartChange::Unchanged
        }
    }

    /// Lines in first-insertion order.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&CartLineItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Units of `id` in the cart, 0 when absent.
    pub fn quantity_of(&self, id: &str) -> i64 {
        self.get(id).map_or(0, |i| i.quantity)
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total units across all lines.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Σ price × quantity.
    pub fn total_price(&self) -> Money {
        self.items.iter().map(CartLineItem::line_total).sum()
    }

    /// Σ original price × quantity.
    pub fn original_total(&self) -> Money {
        self.items.iter().map(CartLineItem::original_line_total).sum()
    }

    /// Original total minus total price. Negative when a line lists an
    /// original price below its selling price.
    pub fn savings(&self) -> Money {
        self.original_total() - self.total_price()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Delivery Policy
// =============================================================================

/// Shipping fee rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryPolicy {
    /// Flat fee charged below the threshold.
    pub shipping_fee: Money,

    /// Cart total at which delivery becomes free.
    pub free_delivery_threshold: Money,
}

impl DeliveryPolicy {
    pub const fn new(shipping_fee: Money, free_delivery_threshold: Money) -> Self {
        DeliveryPolicy {
            shipping_fee,
            free_delivery_threshold,
        }
    }

    /// Whether `total` qualifies for free delivery.
    pub fn qualifies(&self, total: Money) -> bool {
        total >= self.free_delivery_threshold
    }

    /// Fee for a cart with the given total; empty carts pay nothing.
    pub fn fee_for(&self, total: Money, cart_is_empty: bool) -> Money {
        if cart_is_empty || self.qualifies(total) {
            Money::zero()
        } else {
            self.shipping_fee
        }
    }

    /// How much more must be added to reach the threshold.
    pub fn remaining_for_free_delivery(&self, total: Money) -> Money {
        self.free_delivery_threshold.saturating_remaining(total)
    }
}

impl Default for DeliveryPolicy {
    fn default() -> Self {
        DeliveryPolicy::new(DEFAULT_SHIPPING_FEE, DEFAULT_FREE_DELIVERY_THRESHOLD)
    }
}

// =============================================================================
// Bill Summary
// =============================================================================

/// Every derived figure the cart screen and the counter widget display.
///
/// Always built fresh from a `Cart`; never stored alongside it.
///
/// ```text
/// ┌───────────────────────────────────────────┐
/// │  Bill details                             │
/// │  Item total               ₹1198.00        │  item_total
/// │  Total discount         - ₹200.00         │  total_discount
/// │  Estimated shipping fee   ₹0.00           │  shipping_fee
/// │  ───────────────────────────────────      │
/// │  To be paid               ₹1198.00        │  amount_to_pay
/// └───────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BillSummary {
    pub item_count: i64,
    pub line_count: usize,
    pub item_total: Money,
    pub original_total: Money,
    pub total_discount: Money,
    pub shipping_fee: Money,
    pub amount_to_free_delivery: Money,
    pub has_free_delivery: bool,
    pub amount_to_pay: Money,
}

impl BillSummary {
    /// Derives the bill for `cart` under `policy`.
    pub fn compute(cart: &Cart, policy: &DeliveryPolicy) -> Self {
        let item_total = cart.total_price();
        let original_total = cart.original_total();
        let shipping_fee = policy.fee_for(item_total, cart.is_empty());

        BillSummary {
            item_count: cart.item_count(),
            line_count: cart.line_count(),
            item_total,
            original_total,
            total_discount: original_total - item_total,
            shipping_fee,
            amount_to_free_delivery: policy.remaining_for_free_delivery(item_total),
            has_free_delivery: policy.qualifies(item_total),
            amount_to_pay: item_total.saturating_add(shipping_fee),
        }
    }

    /// Same as `total_discount`; the cart footer calls it "You will save".
    pub fn savings(&self) -> Money {
        self.total_discount
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn line(id: &str, price_rupees: i64, original_rupees: i64) -> CartLineItem {
        CartLineItem::new(id, format!("Product {}", id), Money::from_rupees(price_rupees))
            .with_original_price(Money::from_rupees(original_rupees))
    }

    #[test]
    fn test_add_item() {
        let mut cart = Cart::new();

        let change = cart.add_item(line("1", 599, 699).with_quantity(2)).unwrap();

        assert_eq!(change, CartChange::Added);
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total_price(), Money::from_rupees(1198));
    }

    #[test]
    fn test_add_same_id_merges_quantity() {
        let mut cart = Cart::new();

        cart.add_item(line("A", 100, 120)).unwrap();
        let change = cart.add_item(line("A", 100, 120)).unwrap();

        assert_eq!(change, CartChange::Merged);
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.quantity_of("A"), 2);
        assert_eq!(cart.total_price(), Money::from_rupees(200));
        assert_eq!(cart.savings(), Money::from_rupees(40));
    }

    #[test]
    fn test_merge_sums_every_added_quantity() {
        let mut cart = Cart::new();
        for qty in [1, 3, 2, 5] {
            cart.add_item(line("5", 50, 55).with_quantity(qty)).unwrap();
        }

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.quantity_of("5"), 11);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = Cart::new();
        cart.add_item(line("3", 511, 549)).unwrap();
        cart.add_item(line("1", 599, 699)).unwrap();
        cart.add_item(line("3", 511, 549)).unwrap();
        cart.add_item(line("2", 689, 815)).unwrap();

        let ids: Vec<&str> = cart.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[test]
    fn test_add_invalid_item_leaves_cart_unchanged() {
        let mut cart = Cart::new();
        cart.add_item(line("1", 599, 699)).unwrap();

        let err = cart.add_item(line("", 10, 10)).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::Required { .. })
        ));

        let err = cart.add_item(line("2", 10, 10).with_quantity(0)).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_update_quantity() {
        let mut cart = Cart::new();
        cart.add_item(line("4", 150, 160)).unwrap();

        assert_eq!(cart.update_quantity("4", 3).unwrap(), CartChange::Updated);
        assert_eq!(cart.quantity_of("4"), 3);
        assert_eq!(cart.update_quantity("4", 3).unwrap(), CartChange::Unchanged);
    }

    #[test]
    fn test_add_rejects_quantity_that_overflows_totals() {
        let mut cart = Cart::new();
        cart.add_item(line("B", 2, 2)).unwrap();

        let huge = line("A", 1, 1).with_quantity(i64::MAX / 2);
        let err = cart.add_item(huge).unwrap_err();
        assert!(matches!(err, CoreError::QuantityOverflow { ref id, max } if id == "A" && max > 0));

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.total_price(), Money::from_rupees(2));
    }

    #[test]
    fn test_merge_rejects_quantity_that_overflows_totals() {
        let mut cart = Cart::new();
        cart.add_item(line("A", 1, 1).with_quantity(1_000)).unwrap();

        let err = cart
            .add_item(line("A", 1, 1).with_quantity(i64::MAX - 10))
            .unwrap_err();
        assert!(matches!(err, CoreError::QuantityOverflow { .. }));
        assert_eq!(cart.quantity_of("A"), 1_000);
    }

    #[test]
    fn test_update_rejects_quantity_that_overflows_totals() {
        let mut cart = Cart::new();
        cart.add_item(line("1", 599, 699)).unwrap();

        let err = cart.update_quantity("1", 1_000_000_000_000_000).unwrap_err();
        let max = match err {
            CoreError::QuantityOverflow { max, .. } => max,
            other => panic!("unexpected error: {other:?}"),
        };

        assert_eq!(cart.quantity_of("1"), 1);
        let bill = BillSummary::compute(&cart, &DeliveryPolicy::default());
        assert_eq!(bill.item_total, Money::from_rupees(599));

        // The reported maximum is accepted and every figure still computes.
        assert_eq!(cart.update_quantity("1", max).unwrap(), CartChange::Updated);
        let bill = BillSummary::compute(&cart, &DeliveryPolicy::default());
        assert_eq!(bill.original_total, Money::from_rupees(699).multiply_quantity(max));
        assert!(cart.update_quantity("1", max + 1).is_err());
    }

    #[test]
    fn test_free_lines_are_bounded_by_unit_count() {
        let mut cart = Cart::new();
        cart.add_item(line("sample", 0, 0).with_quantity(i64::MAX)).unwrap();

        let err = cart.add_item(line("other", 0, 0)).unwrap_err();
        assert!(matches!(err, CoreError::QuantityOverflow { max: 0, .. }));
        assert_eq!(cart.item_count(), i64::MAX);
    }

    #[test]
    fn test_update_quantity_non_positive_removes() {
        let mut cart = Cart::new();
        cart.add_item(line("4", 150, 160).with_quantity(2)).unwrap();
        cart.add_item(line("5", 50, 55)).unwrap();

        assert_eq!(cart.update_quantity("4", 0).unwrap(), CartChange::Removed);
        assert_eq!(cart.item_count(), 1);
        assert!(cart.get("4").is_none());

        assert_eq!(cart.update_quantity("5", -3).unwrap(), CartChange::Removed);
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_update_quantity_unknown_id() {
        let mut cart = Cart::new();
        cart.add_item(line("1", 599, 699)).unwrap();

        let err = cart.update_quantity("missing", 2).unwrap_err();
        assert!(matches!(err, CoreError::LineItemNotFound(id) if id == "missing"));
        assert_eq!(cart.line_count(), 1);
        assert!(cart.get("missing").is_none());

        // Removal through a zero quantity stays a silent no-op.
        assert_eq!(
            cart.update_quantity("missing", 0).unwrap(),
            CartChange::Unchanged
        );
    }

    #[test]
    fn test_remove_item() {
        let mut cart = Cart::new();
        cart.add_item(line("1", 599, 699)).unwrap();

        assert_eq!(cart.remove_item("nope"), CartChange::Unchanged);
        assert_eq!(cart.remove_item("1"), CartChange::Removed);
        assert!(cart.is_empty());
        assert_eq!(cart.remove_item("1"), CartChange::Unchanged);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        assert_eq!(cart.clear(), CartChange::Unchanged);

        cart.add_item(line("1", 599, 699)).unwrap();
        assert_eq!(cart.clear(), CartChange::Cleared);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_totals_match_recomputation_after_mutations() {
        let catalog = [
            line("1", 599, 699),
            line("2", 689, 815),
            line("5", 50, 55),
            line("8", 30, 35),
        ];

        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut cart = Cart::new();

            for _ in 0..40 {
                let product = &catalog[rng.gen_range(0..catalog.len())];
                match rng.gen_range(0..4) {
                    0 => {
                        let qty = rng.gen_range(1..5);
                        cart.add_item(product.clone().with_quantity(qty)).unwrap();
                    }
                    1 => {
                        let qty = rng.gen_range(-1..6);
                        // Unknown ids with a positive quantity are rejected.
                        let _ = cart.update_quantity(&product.id, qty);
                    }
                    2 => {
                        cart.remove_item(&product.id);
                    }
                    _ => {
                        cart.clear();
                    }
                }

                let expected: i64 = cart
                    .items()
                    .iter()
                    .map(|i| i.price.paise() * i.quantity)
                    .sum();
                let expected_original: i64 = cart
                    .items()
                    .iter()
                    .map(|i| i.original_price.paise() * i.quantity)
                    .sum();
                let expected_units: i64 = cart.items().iter().map(|i| i.quantity).sum();

                assert_eq!(cart.total_price().paise(), expected, "seed {seed}");
                assert_eq!(cart.original_total().paise(), expected_original, "seed {seed}");
                assert_eq!(cart.item_count(), expected_units, "seed {seed}");
                assert!(cart.items().iter().all(|i| i.quantity >= 1), "seed {seed}");
            }
        }
    }

    #[test]
    fn test_bill_empty_cart() {
        let bill = BillSummary::compute(&Cart::new(), &DeliveryPolicy::default());

        assert_eq!(bill.item_count, 0);
        assert_eq!(bill.shipping_fee, Money::zero());
        assert_eq!(bill.amount_to_pay, Money::zero());
        assert_eq!(bill.amount_to_free_delivery, Money::from_rupees(77));
        assert!(!bill.has_free_delivery);
    }

    #[test]
    fn test_bill_below_threshold_charges_fee() {
        let mut cart = Cart::new();
        cart.add_item(line("8", 30, 35)).unwrap();

        let bill = BillSummary::compute(&cart, &DeliveryPolicy::default());

        assert_eq!(bill.item_total, Money::from_rupees(30));
        assert_eq!(bill.shipping_fee, Money::from_rupees(79));
        assert_eq!(bill.amount_to_free_delivery, Money::from_rupees(47));
        assert_eq!(bill.amount_to_pay, Money::from_rupees(109));
        assert_eq!(bill.savings(), Money::from_rupees(5));
    }

    #[test]
    fn test_bill_at_threshold_is_free() {
        let mut cart = Cart::new();
        cart.add_item(line("x", 77, 77)).unwrap();

        let bill = BillSummary::compute(&cart, &DeliveryPolicy::default());

        assert!(bill.has_free_delivery);
        assert_eq!(bill.shipping_fee, Money::zero());
        assert_eq!(bill.amount_to_free_delivery, Money::zero());
        assert_eq!(bill.amount_to_pay, Money::from_rupees(77));
    }

    #[test]
    fn test_bill_custom_policy() {
        let mut cart = Cart::new();
        cart.add_item(line("1", 599, 699)).unwrap();
        let policy = DeliveryPolicy::new(Money::from_rupees(49), Money::from_rupees(1000));

        let bill = BillSummary::compute(&cart, &policy);

        assert_eq!(bill.shipping_fee, Money::from_rupees(49));
        assert_eq!(bill.amount_to_pay, Money::from_rupees(648));
        assert_eq!(bill.amount_to_free_delivery, Money::from_rupees(401));
    }

    #[test]
    fn test_inverted_discount_reports_negative_savings() {
        let mut cart = Cart::new();
        cart.add_item(line("odd", 100, 90)).unwrap();

        assert_eq!(cart.savings(), Money::from_rupees(-10));
    }
}
