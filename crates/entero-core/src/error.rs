//! # Error Types
//!
//! Domain-specific error types for entero-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  entero-core errors (this file)                                        │
//! │  ├── CoreError        - Cart and session rule violations               │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  entero-app errors (separate crate)                                    │
//! │  ├── ConfigError      - Config file / environment failures             │
//! │  └── ApiError         - What the screens see (serialized)              │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Screen alert           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Lookups that have a designated fallback (unknown product id on the
//! Product Detail route) are not errors and never appear here.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Cart and session errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A quantity update named a line item that is not in the cart.
    ///
    /// ## When This Occurs
    /// - A screen kept a stale card after the line was removed elsewhere
    /// - `update_quantity` was called with a positive quantity for an id
    ///   that was never added
    ///
    /// The cart is left untouched; an item is never created implicitly.
    #[error("Cart line item not found: {0}")]
    LineItemNotFound(String),

    /// A quantity would push the unit count or a cart total past what
    /// `i64` paise can hold. `max` is the largest quantity the line accepts.
    ///
    /// The cart is left untouched.
    #[error("Quantity for {id} cannot grow beyond {max}")]
    QuantityOverflow { id: String, max: i64 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., malformed rupee amount).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// A form was submitted without any of its alternative inputs.
    #[error("Missing information: {message}")]
    MissingInformation { message: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
