//! # entero-core: Storefront Logic for the Entero Pharmacy App
//!
//! Everything the shopping screens agree on lives here: the cart, the bill,
//! the floating summary banner, the product catalog and the route table.
//! The crate performs no I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Entero Storefront Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                         Screens                                 │   │
//! │  │  Home ── Pharmacy ── Product Detail ── Cart ── Add Prescription │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands / snapshots                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 entero-app (state + commands)                   │   │
//! │  │     CartState, NavigationState, AppConfig, tracing setup        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ entero-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌──────────┐ │   │
//! │  │   │  money  │ │  cart   │ │ banner  │ │ catalog │ │navigation│ │   │
//! │  │   │  Money  │ │  Cart   │ │ Summary │ │ Product │ │  Route   │ │   │
//! │  │   │         │ │  Bill   │ │ Banner  │ │  Deals  │ │Navigator │ │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └─────────┘ └──────────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DEVICE ACCESS • NO PERSISTENCE                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Rupee amounts held as integer paise
//! - [`types`] - The cart line item
//! - [`cart`] - Cart store, delivery policy and bill
//! - [`banner`] - Summary banner state machine
//! - [`session`] - Cart and banner kept in step
//! - [`catalog`] - Product detail records and deal sections
//! - [`navigation`] - Routes, tabs and the stack navigator
//! - [`prescription`] - Add Prescription form
//! - [`error`] / [`validation`] - Typed errors and input checks
//!
//! ## Example Usage
//!
//! ```rust
//! use entero_core::{CartLineItem, CartSession, DeliveryPolicy, Money};
//!
//! let mut session = CartSession::new(DeliveryPolicy::default());
//! session
//!     .add_to_cart(CartLineItem::new("2", "Dolo 650", Money::from_rupees(30)).with_quantity(2))
//!     .unwrap();
//!
//! assert_eq!(session.item_count(), 2);
//! assert_eq!(session.total_price(), Money::from_rupees(60));
//! assert!(session.banner_visibility().is_visible());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod banner;
pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod navigation;
pub mod prescription;
pub mod session;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use banner::{BannerView, BannerVisibility, SummaryBanner};
pub use cart::{BillSummary, Cart, CartChange, DeliveryPolicy};
pub use catalog::{Catalog, DealItem, DealSection, ProductRecord};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use navigation::{Navigator, Route, Screen, Tab};
pub use prescription::{PrescriptionDraft, PrescriptionReceipt};
pub use session::{CartSession, CartSnapshot};
pub use types::CartLineItem;
