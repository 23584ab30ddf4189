//! # Validation Module
//!
//! Input validation for everything that enters the cart.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Screen (TypeScript)                                          │
//! │  └── Only offers steppers and "Add to cart" for catalog items          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: entero-app command                                           │
//! │  └── Deserializes the payload into typed structs                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: THIS MODULE                                                  │
//! │  └── id/title present, prices non-negative, quantity >= 1              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use entero_core::validation::{validate_quantity, validate_required};
//!
//! assert!(validate_required("id", "4").is_ok());
//! assert!(validate_quantity(0).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::CartLineItem;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates that a text field is not empty or whitespace.
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity being added to the cart.
///
/// ## Rules
/// - Must be at least 1
///
/// Setting a quantity to zero or below is not an error: `update_quantity`
/// treats it as removal and never calls this.
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a unit price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free samples)
pub fn validate_price(field: &str, price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Line Item Validator
// =============================================================================

/// Validates a line item before it enters the cart.
///
/// `original_price < price` is accepted: the label is display-only and the
/// resulting negative savings are reported as-is.
pub fn validate_line_item(item: &CartLineItem) -> ValidationResult<()> {
    validate_required("id", &item.id)?;
    validate_required("title", &item.title)?;
    validate_price("price", item.price)?;
    validate_price("originalPrice", item.original_price)?;
    validate_quantity(item.quantity)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> CartLineItem {
        CartLineItem::new("5", "Crocin Pain Relief Tablet", Money::from_rupees(50))
            .with_original_price(Money::from_rupees(55))
    }

    #[test]
    fn test_validate_required() {
        assert!(validate_required("id", "1").is_ok());
        assert!(validate_required("id", "").is_err());
        assert!(validate_required("id", "   ").is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(250).is_ok());
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price("price", Money::zero()).is_ok());
        assert!(validate_price("price", Money::from_rupees(599)).is_ok());
        assert!(validate_price("price", Money::from_paise(-1)).is_err());
    }

    #[test]
    fn test_validate_line_item() {
        assert!(validate_line_item(&item()).is_ok());

        let mut missing_title = item();
        missing_title.title = String::new();
        assert!(matches!(
            validate_line_item(&missing_title),
            Err(ValidationError::Required { field }) if field == "title"
        ));

        let mut zero_qty = item();
        zero_qty.quantity = 0;
        assert!(validate_line_item(&zero_qty).is_err());

        let mut negative_original = item();
        negative_original.original_price = Money::from_paise(-100);
        assert!(validate_line_item(&negative_original).is_err());
    }

    #[test]
    fn test_inverted_discount_is_accepted() {
        let inverted = item().with_original_price(Money::from_rupees(10));
        assert!(validate_line_item(&inverted).is_ok());
    }
}
