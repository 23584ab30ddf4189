//! End-to-end flows across screens, driven only through commands.

use entero_app::commands::{cart, catalog, navigation, prescription};
use entero_app::error::ErrorCode;
use entero_app::state::AppConfig;
use entero_app::AppState;
use entero_core::catalog::DEFAULT_PRODUCT_ID;
use entero_core::{BannerVisibility, CartChange, CartLineItem, Money, Route, Screen, Tab};

fn line(id: &str, price: i64, original: i64) -> CartLineItem {
    CartLineItem::new(id, format!("Product {}", id), Money::from_rupees(price))
        .with_original_price(Money::from_rupees(original))
}

#[test]
fn browse_add_and_check_out_bill() {
    let app = AppState::default();

    navigation::switch_tab(&app.navigation, Tab::Pharmacy);
    let deal = app.catalog.deal_sections()[1].items[0].clone();
    let route = navigation::open_product(&app.navigation, &deal.id);
    assert_eq!(route, Route::product_detail(deal.id.as_str()));

    let record = catalog::get_product_detail(&app.catalog, Some(deal.id.as_str()));
    catalog::add_product_to_cart(&app.catalog, &app.cart, Some(record.id.as_str()), None, None)
        .unwrap();
    catalog::add_product_to_cart(&app.catalog, &app.cart, Some(record.id.as_str()), None, None)
        .unwrap();

    let snapshot = cart::get_cart(&app.cart);
    assert_eq!(snapshot.items.len(), 1);
    assert_eq!(snapshot.items[0].quantity, 2);
    assert_eq!(snapshot.bill.item_total, record.price.multiply_quantity(2));
    assert_eq!(snapshot.banner.label, "2 items");

    navigation::navigate(&app.navigation, Route::Cart);
    assert_eq!(navigation::current_screen(&app.navigation), Screen::Cart);
    navigation::go_back(&app.navigation);
    assert_eq!(
        navigation::current_route(&app.navigation),
        Route::product_detail(deal.id.as_str())
    );
}

#[test]
fn merge_keeps_one_line_and_reports_savings() {
    let app = AppState::default();

    cart::add_to_cart(&app.cart, line("A", 100, 120)).unwrap();
    let snapshot = cart::add_to_cart(&app.cart, line("A", 100, 120)).unwrap();

    assert_eq!(snapshot.items.len(), 1);
    assert_eq!(snapshot.items[0].quantity, 2);
    assert_eq!(cart::get_total_price(&app.cart), Money::from_rupees(200));
    assert_eq!(snapshot.bill.savings(), Money::from_rupees(40));
}

#[test]
fn banner_follows_the_cart_across_screens() {
    let app = AppState::default();
    assert_eq!(cart::get_banner(&app.cart).visibility, BannerVisibility::Hidden);

    cart::add_to_cart(&app.cart, line("A", 100, 100)).unwrap();
    assert_eq!(cart::get_banner(&app.cart).visibility, BannerVisibility::Visible);

    cart::dismiss_banner(&app.cart);
    navigation::switch_tab(&app.navigation, Tab::Home);
    // Another screen mounts the banner: still dismissed.
    assert_eq!(cart::get_banner(&app.cart).visibility, BannerVisibility::Hidden);

    cart::increment_item(&app.cart, line("A", 100, 100)).unwrap();
    assert_eq!(cart::get_banner(&app.cart).visibility, BannerVisibility::Visible);

    cart::update_quantity(&app.cart, "A", 0).unwrap();
    assert_eq!(cart::get_item_count(&app.cart), 0);
    assert_eq!(cart::get_banner(&app.cart).visibility, BannerVisibility::Hidden);
}

#[test]
fn shipping_threshold() {
    let app = AppState::default();

    let empty = cart::get_bill(&app.cart);
    assert_eq!(empty.shipping_fee, Money::zero());
    assert_eq!(empty.amount_to_pay, Money::zero());

    cart::add_to_cart(&app.cart, line("A", 30, 30)).unwrap();
    let below = cart::get_bill(&app.cart);
    assert_eq!(below.shipping_fee, Money::from_rupees(79));
    assert_eq!(below.amount_to_free_delivery, Money::from_rupees(47));
    assert_eq!(below.amount_to_pay, Money::from_rupees(109));

    cart::update_quantity(&app.cart, "A", 3).unwrap();
    let above = cart::get_bill(&app.cart);
    assert_eq!(above.shipping_fee, Money::zero());
    assert!(above.has_free_delivery);
}

#[test]
fn configured_delivery_policy_applies() {
    let mut config = AppConfig::default();
    config.shipping_fee = Money::from_rupees(40);
    config.free_delivery_threshold = Money::from_rupees(500);
    let app = AppState::new(config);

    cart::add_to_cart(&app.cart, line("A", 100, 100)).unwrap();
    let bill = cart::get_bill(&app.cart);
    assert_eq!(bill.shipping_fee, Money::from_rupees(40));
    assert_eq!(bill.amount_to_free_delivery, Money::from_rupees(400));
}

#[test]
fn unknown_product_shows_default_record() {
    let app = AppState::default();
    navigation::navigate(&app.navigation, Route::ProductDetail { product_id: None });

    let record = catalog::get_product_detail(&app.catalog, None);
    assert_eq!(record.id, DEFAULT_PRODUCT_ID);
    assert_eq!(record.title, "Azithral 500 tablet");
    assert_eq!(record.original_price, Money::from_paise(13194));
}

#[test]
fn unknown_line_update_is_rejected() {
    let app = AppState::default();
    cart::add_to_cart(&app.cart, line("A", 10, 10)).unwrap();

    let err = cart::update_quantity(&app.cart, "B", 2).unwrap_err();
    assert_eq!(err.code, ErrorCode::NotFound);
    assert_eq!(cart::get_items(&app.cart).len(), 1);
}

#[test]
fn prescription_submission_routes_to_cart() {
    let app = AppState::default();
    navigation::navigate(&app.navigation, Route::AddPrescription);

    let err = prescription::submit_prescription(&app.prescription, &app.navigation).unwrap_err();
    assert_eq!(err.code, ErrorCode::ValidationError);
    assert_eq!(navigation::current_route(&app.navigation), Route::AddPrescription);

    prescription::set_description(&app.prescription, "Azithral 500, 1 strip".to_string());
    let receipt = prescription::submit_prescription(&app.prescription, &app.navigation).unwrap();
    assert_eq!(receipt.next_route, Route::Cart);
    assert_eq!(navigation::current_screen(&app.navigation), Screen::Cart);
}

#[tokio::test]
async fn subscribers_see_every_change() {
    let app = AppState::default();
    let mut rx = app.cart.subscribe();

    cart::add_to_cart(&app.cart, line("A", 10, 10)).unwrap();
    cart::add_to_cart(&app.cart, line("A", 10, 10)).unwrap();
    cart::remove_from_cart(&app.cart, "A");

    let changes = [
        rx.recv().await.unwrap(),
        rx.recv().await.unwrap(),
        rx.recv().await.unwrap(),
    ];
    assert_eq!(changes[0].change, CartChange::Added);
    assert_eq!(changes[1].change, CartChange::Merged);
    assert_eq!(changes[1].snapshot.bill.item_count, 2);
    assert_eq!(changes[2].change, CartChange::Removed);
    assert!(changes[2].snapshot.items.is_empty());
}

#[tokio::test]
async fn concurrent_writers_keep_totals_consistent() {
    let app = AppState::default();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let cart_state = app.cart.clone();
            tokio::task::spawn_blocking(move || {
                for _ in 0..25 {
                    cart::increment_item(&cart_state, line("A", 10, 10)).unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(cart::quantity_of(&app.cart, "A"), 200);
    assert_eq!(cart::get_total_price(&app.cart), Money::from_rupees(2000));
}
