//! # Cart Summary Banner
//!
//! State behind the dismissible "N items · ₹total · View Cart" counter that
//! floats above the tab bar on several screens.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │            count increased              dismiss()                       │
//! │   ┌────────┐ ─────────────────► ┌─────────┐ ──────────► ┌────────┐     │
//! │   │ Hidden │                    │ Visible │             │ Hidden │     │
//! │   └────────┘ ◄───────────────── └─────────┘             └────────┘     │
//! │                 count == 0                                  │           │
//! │                                                              │           │
//! │                 count increased (overrides dismissal)        │           │
//! │   Visible ◄──────────────────────────────────────────────────┘           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The banner mounts fresh on every screen, so this state must outlive any
//! single mount. It lives in [`crate::session::CartSession`] next to the cart.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

/// Whether the counter is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum BannerVisibility {
    Hidden,
    Visible,
}

impl BannerVisibility {
    pub fn is_visible(&self) -> bool {
        matches!(self, BannerVisibility::Visible)
    }
}

/// Session-level dismissal state for the summary banner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryBanner {
    dismissed: bool,
    last_seen_count: i64,
}

impl SummaryBanner {
    /// Banner for a fresh session: nothing seen, nothing dismissed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the current item count.
    ///
    /// A count above the last observed one clears any dismissal.
    pub fn observe(&mut self, item_count: i64) -> BannerVisibility {
        if item_count > self.last_seen_count {
            self.dismissed = false;
        }
        self.last_seen_count = item_count;
        self.visibility()
    }

    /// User tapped the close button.
    pub fn dismiss(&mut self) -> BannerVisibility {
        self.dismissed = true;
        self.visibility()
    }

    pub fn visibility(&self) -> BannerVisibility {
        if self.last_seen_count == 0 || self.dismissed {
            BannerVisibility::Hidden
        } else {
            BannerVisibility::Visible
        }
    }

    pub fn is_dismissed(&self) -> bool {
        self.dismissed
    }

    pub fn last_seen_count(&self) -> i64 {
        self.last_seen_count
    }
}

/// Everything the banner renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BannerView {
    pub visibility: BannerVisibility,
    pub item_count: i64,
    pub total_price: Money,
    /// "1 item" / "3 items".
    pub label: String,
}

impl BannerView {
    pub fn new(visibility: BannerVisibility, item_count: i64, total_price: Money) -> Self {
        BannerView {
            visibility,
            item_count,
            total_price,
            label: item_count_label(item_count),
        }
    }
}

/// "1 item" for a single unit, "N items" otherwise.
pub fn item_count_label(count: i64) -> String {
    if count == 1 {
        "1 item".to_string()
    } else {
        format!("{} items", count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
