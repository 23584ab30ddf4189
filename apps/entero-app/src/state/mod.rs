//! # State Module
//!
//! Process-wide state shared by every screen.
//!
//! Each concern gets its own state type, so a command only takes the state
//! it actually touches:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌──────────────────┐ ┌──────────────────┐ ┌──────────────────────┐    │
//! │  │    CartState     │ │ NavigationState  │ │  PrescriptionState   │    │
//! │  │                  │ │                  │ │                      │    │
//! │  │  • Cart session  │ │  • Route stack   │ │  • Current draft     │    │
//! │  │  • Banner state  │ │                  │ │                      │    │
//! │  │  • Subscribers   │ │                  │ │                      │    │
//! │  └──────────────────┘ └──────────────────┘ └──────────────────────┘    │
//! │                                                                         │
//! │  ┌──────────────────┐ ┌──────────────────┐                              │
//! │  │    AppConfig     │ │     Catalog      │   read-only after startup    │
//! │  └──────────────────┘ └──────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod config;
mod navigation;
mod prescription;

pub use cart::{CartEvent, CartState, EVENT_CHANNEL_CAPACITY};
pub use config::{AppConfig, ConfigError};
pub use navigation::NavigationState;
pub use prescription::PrescriptionState;
