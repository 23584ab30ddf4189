//! # Cart Session
//!
//! Owns the cart and the summary-banner state together, so that when any
//! mutation returns, the items, the derived bill and the banner all agree.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 CartSession                  │
//! │  ┌──────────┐  ┌───────────────┐  ┌────────┐ │
//! │  │   Cart   │  │ SummaryBanner │  │ Policy │ │
//! │  └──────────┘  └───────────────┘  └────────┘ │
//! │        │ every mutation ──► banner.observe() │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! The session is created at app start and lives for the process; nothing
//! here is persisted.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::banner::{BannerView, BannerVisibility, SummaryBanner};
use crate::cart::{BillSummary, Cart, CartChange, DeliveryPolicy};
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::CartLineItem;

/// Cart plus session-level banner state.
#[derive(Debug, Clone, Default)]
pub struct CartSession {
    cart: Cart,
    banner: SummaryBanner,
    policy: DeliveryPolicy,
}

impl CartSession {
    /// Starts an empty session with the given delivery rules.
    pub fn new(policy: DeliveryPolicy) -> Self {
        let mut session = CartSession {
            cart: Cart::new(),
            banner: SummaryBanner::new(),
            policy,
        };
        session.banner.observe(0);
        session
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// See [`Cart::add_item`].
    pub fn add_to_cart(&mut self, item: CartLineItem) -> CoreResult<CartChange> {
        let result = self.cart.add_item(item);
        self.settle(result)
    }

    /// See [`Cart::update_quantity`].
    pub fn update_quantity(&mut self, id: &str, quantity: i64) -> CoreResult<CartChange> {
        let result = self.cart.update_quantity(id, quantity);
        self.settle(result)
    }

    /// See [`Cart::remove_item`].
    pub fn remove_from_cart(&mut self, id: &str) -> CartChange {
        let change = self.cart.remove_item(id);
        self.banner.observe(self.cart.item_count());
        change
    }

    pub fn clear(&mut self) -> CartChange {
        let change = self.cart.clear();
        self.banner.observe(self.cart.item_count());
        change
    }

    /// Card "+" button: adds one unit, creating the line if needed.
    pub fn increment(&mut self, item: CartLineItem) -> CoreResult<CartChange> {
        let current = self.cart.quantity_of(&item.id);
        if current == 0 {
            return self.add_to_cart(item.with_quantity(1));
        }

        let next = current
            .checked_add(1)
            .ok_or_else(|| CoreError::QuantityOverflow {
                id: item.id.clone(),
                max: i64::MAX,
            })?;
        self.update_quantity(&item.id, next)
    }

    /// Card "-" button: drops one unit, removing the line at zero.
    pub fn decrement(&mut self, id: &str) -> CoreResult<CartChange> {
        let current = self.cart.quantity_of(id);
        if current == 0 {
            return Ok(CartChange::Unchanged);
        }
        self.update_quantity(id, current - 1)
    }

    /// User closed the summary banner. Closing a hidden banner is a no-op.
    pub fn dismiss_banner(&mut self) -> CartChange {
        if !self.banner.visibility().is_visible() {
            return CartChange::Unchanged;
        }
        self.banner.dismiss();
        CartChange::BannerDismissed
    }

    fn settle(&mut self, result: CoreResult<CartChange>) -> CoreResult<CartChange> {
        self.banner.observe(self.cart.item_count());
        result
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn items(&self) -> &[CartLineItem] {
        self.cart.items()
    }

    pub fn item_count(&self) -> i64 {
        self.cart.item_count()
    }

    pub fn total_price(&self) -> Money {
        self.cart.total_price()
    }

    pub fn quantity_of(&self, id: &str) -> i64 {
        self.cart.quantity_of(id)
    }

    pub fn policy(&self) -> &DeliveryPolicy {
        &self.policy
    }

    pub fn bill(&self) -> BillSummary {
        BillSummary::compute(&self.cart, &self.policy)
    }

    pub fn banner_visibility(&self) -> BannerVisibility {
        self.banner.visibility()
    }

    pub fn banner_view(&self) -> BannerView {
        BannerView::new(
            self.banner.visibility(),
            self.cart.item_count(),
            self.cart.total_price(),
        )
    }

    /// Items, bill and banner captured together.
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            items: self.cart.items().to_vec(),
            bill: self.bill(),
            banner: self.banner_view(),
        }
    }
}

/// A consistent read of the whole session, as handed to screens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartSnapshot {
    pub items: Vec<CartLineItem>,
    pub bill: BillSummary,
    pub banner: BannerView,
}

// =============================================================================
// Unit Tests
// =============================================================================
