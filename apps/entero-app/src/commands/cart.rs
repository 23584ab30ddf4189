//! # Cart Commands
//!
//! The cart access interface: every screen reads and mutates the cart
//! through these functions and nothing else.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌──────────┐  add_to_cart   ┌──────────┐  update_quantity(id, 0)      │
//! │  │  Empty   │ ─────────────► │ In Cart  │  remove_from_cart            │
//! │  │  Cart    │ ◄───────────── │          │  decrement_item (last unit)  │
//! │  └──────────┘   clear_cart   └──────────┘                               │
//! │                                   │                                     │
//! │                      increment_item / update_quantity(id, n > 0)       │
//! │                                                                         │
//! │  Every successful mutation returns the fresh CartSnapshot and          │
//! │  broadcasts it to subscribers.                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use entero_core::{
    BannerView, BillSummary, CartChange, CartLineItem, CartSession, CartSnapshot, Money,
};
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::state::CartState;

/// Gets the current cart contents with bill and banner.
pub fn get_cart(cart: &CartState) -> CartSnapshot {
    debug!("get_cart command");
    cart.snapshot()
}

/// Current line items, in insertion order.
pub fn get_items(cart: &CartState) -> Vec<CartLineItem> {
    cart.with_session(|s| s.items().to_vec())
}

/// Sum of quantities across all lines.
pub fn get_item_count(cart: &CartState) -> i64 {
    cart.with_session(|s| s.item_count())
}

/// Sum of price × quantity across all lines.
pub fn get_total_price(cart: &CartState) -> Money {
    cart.with_session(|s| s.total_price())
}

/// Quantity of one product, 0 when absent. Drives the card steppers.
pub fn quantity_of(cart: &CartState, product_id: &str) -> i64 {
    cart.with_session(|s| s.quantity_of(product_id))
}

pub fn get_bill(cart: &CartState) -> BillSummary {
    cart.with_session(|s| s.bill())
}

pub fn get_banner(cart: &CartState) -> BannerView {
    cart.with_session(|s| s.banner_view())
}

/// Adds a line to the cart.
///
/// ## Behavior
/// - Product already in cart: quantity grows by `item.quantity`, the stored
///   title and prices are kept
/// - Product not in cart: appended as a new line
/// - Invalid payload: `VALIDATION_ERROR`, cart unchanged
/// - Quantity too large for the cart totals: `CART_ERROR`, cart unchanged
pub fn add_to_cart(cart: &CartState, item: CartLineItem) -> Result<CartSnapshot, ApiError> {
    debug!(product_id = %item.id, quantity = %item.quantity, "add_to_cart command");

    let product_id = item.id.clone();
    let (_, snapshot) = cart
        .with_session_mut(|s| s.add_to_cart(item))
        .map_err(|e| {
            warn!(product_id = %product_id, error = %e, "add_to_cart rejected");
            ApiError::from(e)
        })?;
    Ok(snapshot)
}

/// Sets the quantity of a line.
///
/// ## Behavior
/// - Quantity 0 or below: removes the line
/// - Product not in cart with a positive quantity: `NOT_FOUND`, cart unchanged
pub fn update_quantity(
    cart: &CartState,
    product_id: &str,
    quantity: i64,
) -> Result<CartSnapshot, ApiError> {
    debug!(product_id = %product_id, quantity = %quantity, "update_quantity command");

    let (_, snapshot) = cart
        .with_session_mut(|s| s.update_quantity(product_id, quantity))
        .map_err(|e| {
            warn!(product_id = %product_id, error = %e, "update_quantity rejected");
            ApiError::from(e)
        })?;
    Ok(snapshot)
}

/// Removes a line. Unknown ids are a no-op.
pub fn remove_from_cart(cart: &CartState, product_id: &str) -> CartSnapshot {
    debug!(product_id = %product_id, "remove_from_cart command");
    mutate_infallible(cart, |s| s.remove_from_cart(product_id))
}

/// Clears all items from the cart.
pub fn clear_cart(cart: &CartState) -> CartSnapshot {
    debug!("clear_cart command");
    mutate_infallible(cart, |s| s.clear())
}

/// Card "+" button. Adds the product with quantity 1 if absent.
pub fn increment_item(cart: &CartState, item: CartLineItem) -> Result<CartSnapshot, ApiError> {
    debug!(product_id = %item.id, "increment_item command");

    let product_id = item.id.clone();
    let (_, snapshot) = cart
        .with_session_mut(|s| s.increment(item))
        .map_err(|e| {
            warn!(product_id = %product_id, error = %e, "increment_item rejected");
            ApiError::from(e)
        })?;
    Ok(snapshot)
}

/// Card "-" button. The last unit removes the line.
pub fn decrement_item(cart: &CartState, product_id: &str) -> Result<CartSnapshot, ApiError> {
    debug!(product_id = %product_id, "decrement_item command");

    let (_, snapshot) = cart
        .with_session_mut(|s| s.decrement(product_id))
        .map_err(|e| {
            warn!(product_id = %product_id, error = %e, "decrement_item rejected");
            ApiError::from(e)
        })?;
    Ok(snapshot)
}

/// Closes the summary banner until the item count next increases.
pub fn dismiss_banner(cart: &CartState) -> BannerView {
    debug!("dismiss_banner command");
    mutate_infallible(cart, |s| s.dismiss_banner()).banner
}

fn mutate_infallible<F>(cart: &CartState, f: F) -> CartSnapshot
where
    F: FnOnce(&mut CartSession) -> CartChange,
{
    match cart.with_session_mut(|s| Ok(f(s))) {
        Ok((_, snapshot)) => snapshot,
        // The closure never fails; fall back to a plain read.
        Err(_) => cart.snapshot(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
