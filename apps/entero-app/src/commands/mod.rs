//! # Commands Module
//!
//! Everything the screens can ask of the app.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs           ◄─── You are here (exports)
//! ├── cart.rs          ◄─── Cart access interface
//! ├── catalog.rs       ◄─── Product detail, deals, add-from-catalog
//! ├── navigation.rs    ◄─── Route stack
//! ├── prescription.rs  ◄─── Add Prescription form
//! └── config.rs        ◄─── Configuration retrieval
//! ```
//!
//! ## State Injection
//! Each command takes only the state it needs:
//! ```rust,ignore
//! // Only needs the cart
//! fn get_cart(cart: &CartState) -> CartSnapshot
//!
//! // Needs catalog and cart
//! fn add_product_to_cart(catalog: &Catalog, cart: &CartState, ...)
//!
//! // Needs the draft and the route stack
//! fn submit_prescription(prescription: &PrescriptionState, nav: &NavigationState)
//! ```

pub mod cart;
pub mod catalog;
pub mod config;
pub mod navigation;
pub mod prescription;
