//! # Catalog Commands
//!
//! Read access to the mock catalog (Home feed, Pharmacy grids, Product
//! Detail), plus the "Add to cart" buttons of the Product Detail and
//! Pharmacy screens, which turn catalog records into cart lines.

use entero_core::catalog::{Category, HomeFeed};
use entero_core::{Catalog, CartSnapshot, DealSection, ProductRecord};
use tracing::debug;

use crate::commands::cart;
use crate::error::ApiError;
use crate::state::CartState;

/// Product Detail lookup by route parameter.
///
/// A missing or unknown id resolves to the default product; this never fails.
pub fn get_product_detail(catalog: &Catalog, product_id: Option<&str>) -> ProductRecord {
    debug!(product_id = ?product_id, "get_product_detail command");
    catalog.lookup(product_id).clone()
}

/// Home screen lists: category cards, health packages, health concerns and
/// top brands.
pub fn get_home_feed(catalog: &Catalog) -> HomeFeed {
    debug!("get_home_feed command");
    catalog.home_feed()
}

pub fn get_deal_sections(catalog: &Catalog) -> Vec<DealSection> {
    catalog.deal_sections().to_vec()
}

pub fn get_health_concerns(catalog: &Catalog) -> Vec<Category> {
    catalog.health_concerns().to_vec()
}

pub fn get_popular_categories(catalog: &Catalog) -> Vec<Category> {
    catalog.popular_categories().to_vec()
}

/// Product Detail "Add to cart".
///
/// Resolves the product the same way the screen did, so the line always
/// matches what was shown. `pack_size` defaults to the first pack size,
/// `quantity` to 1.
pub fn add_product_to_cart(
    catalog: &Catalog,
    cart_state: &CartState,
    product_id: Option<&str>,
    pack_size: Option<&str>,
    quantity: Option<i64>,
) -> Result<CartSnapshot, ApiError> {
    let record = catalog.lookup(product_id);
    debug!(product_id = %record.id, pack_size = ?pack_size, "add_product_to_cart command");
    cart::add_to_cart(
        cart_state,
        record.to_line_item(pack_size, quantity.unwrap_or(1)),
    )
}

/// Deal card "Add to cart" / "+" button.
pub fn increment_deal(
    catalog: &Catalog,
    cart_state: &CartState,
    deal_id: &str,
) -> Result<CartSnapshot, ApiError> {
    let deal = catalog
        .deal(deal_id)
        .ok_or_else(|| ApiError::not_found("Deal", deal_id))?;
    cart::increment_item(cart_state, deal.to_line_item())
}

/// Deal card "-" button.
pub fn decrement_deal(cart_state: &CartState, deal_id: &str) -> Result<CartSnapshot, ApiError> {
    cart::decrement_item(cart_state, deal_id)
}

// =============================================================================
// Unit Tests
// =============================================================================
