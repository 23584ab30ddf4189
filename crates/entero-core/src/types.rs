//! # Domain Types
//!
//! The line item shape every screen feeds into the cart.
//!
//! ```text
//! ┌──────────────────────────┐
//! │       CartLineItem       │
//! │  ──────────────────────  │
//! │  id (product key)        │  unique within the cart
//! │  title                   │
//! │  price / originalPrice   │  Money (paise)
//! │  discount label          │  display only
//! │  imageUrl, packSize      │  display only
//! │  prescriptionRequired    │  display only
//! │  quantity                │  >= 1 while in the cart
//! └──────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Cart Line Item
// =============================================================================

/// A product line in the cart.
///
/// The same shape is used as the payload of "add to cart": the incoming
/// `quantity` is the number of units to add.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    /// Stable product identifier; the merge key.
    pub id: String,

    /// Display name.
    pub title: String,

    /// Current unit price, already discounted.
    pub price: Money,

    /// Pre-discount unit price.
    pub original_price: Money,

    /// Discount label such as "15% off".
    pub discount: Option<String>,

    pub image_url: Option<String>,

    /// Units of this product in the cart.
    pub quantity: i64,

    /// Selected variant label such as "50 gms".
    pub pack_size: Option<String>,

    pub prescription_required: Option<bool>,
}

impl CartLineItem {
    /// Creates a single-unit line with no discount.
    pub fn new(id: impl Into<String>, title: impl Into<String>, price: Money) -> Self {
        CartLineItem {
            id: id.into(),
            title: title.into(),
            price,
            original_price: price,
            discount: None,
            image_url: None,
            quantity: 1,
            pack_size: None,
            prescription_required: None,
        }
    }

    pub fn with_original_price(mut self, original_price: Money) -> Self {
        self.original_price = original_price;
        self
    }

    pub fn with_discount(mut self, label: impl Into<String>) -> Self {
        self.discount = Some(label.into());
        self
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    pub fn with_quantity(mut self, quantity: i64) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_pack_size(mut self, pack_size: impl Into<String>) -> Self {
        self.pack_size = Some(pack_size.into());
        self
    }

    pub fn with_prescription_required(mut self, required: bool) -> Self {
        self.prescription_required = Some(required);
        self
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.price.multiply_quantity(self.quantity)
    }

    /// Original unit price × quantity.
    #[inline]
    pub fn original_line_total(&self) -> Money {
        self.original_price.multiply_quantity(self.quantity)
    }

    /// Whether the card should show a struck-through original price.
    #[inline]
    pub fn is_discounted(&self) -> bool {
        self.original_price > self.price
    }

    pub fn requires_prescription(&self) -> bool {
        self.prescription_required.unwrap_or(false)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
