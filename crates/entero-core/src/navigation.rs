//! # Navigation
//!
//! Routes are a closed set; each carries its own (possibly empty) parameter
//! record, and every consumer resolves them with an exhaustive `match`.
//!
//! ```text
//! ┌──────────────────────────── Stack ─────────────────────────────┐
//! │  Splash                                                        │
//! │  MainTabs { tab } ──► Home | Doctor | Pharmacy | LabTest | Profile
//! │  ProductDetail { productId? }                                  │
//! │  Cart                                                          │
//! │  AddPrescription                                               │
//! └────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::mem::discriminant;
use ts_rs::TS;

// =============================================================================
// Tabs
// =============================================================================

/// Bottom tab bar entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Tab {
    #[default]
    Home,
    Doctor,
    Pharmacy,
    LabTest,
    Profile,
}

impl Tab {
    /// Tabs in tab-bar order.
    pub const ALL: [Tab; 5] = [Tab::Home, Tab::Doctor, Tab::Pharmacy, Tab::LabTest, Tab::Profile];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Doctor => "Doctor",
            Tab::Pharmacy => "Pharmacy",
            Tab::LabTest => "Lab Test",
            Tab::Profile => "Profile",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Tab::Home => "🏠",
            Tab::Doctor => "👨‍⚕️",
            Tab::Pharmacy => "💊",
            Tab::LabTest => "🧪",
            Tab::Profile => "👤",
        }
    }

    /// Screen rendered for the tab. Doctor, Lab Test and Profile have no
    /// screens of their own yet and show the Pharmacy screen.
    pub fn screen(&self) -> Screen {
        match self {
            Tab::Home => Screen::Home,
            Tab::Doctor | Tab::Pharmacy | Tab::LabTest | Tab::Profile => Screen::Pharmacy,
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

// =============================================================================
// Routes
// =============================================================================

/// A stack route with its parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "name")]
pub enum Route {
    Splash,
    MainTabs {
        #[serde(default)]
        tab: Tab,
    },
    ProductDetail {
        #[serde(rename = "productId", default)]
        product_id: Option<String>,
    },
    Cart,
    AddPrescription,
}

impl Route {
    /// Route the app opens on.
    pub fn initial() -> Self {
        Route::MainTabs { tab: Tab::Home }
    }

    pub fn product_detail(product_id: impl Into<String>) -> Self {
        Route::ProductDetail {
            product_id: Some(product_id.into()),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Route::Splash => "Splash",
            Route::MainTabs { .. } => "MainTabs",
            Route::ProductDetail { .. } => "ProductDetail",
            Route::Cart => "Cart",
            Route::AddPrescription => "AddPrescription",
        }
    }

    /// Whether the stack header is drawn for this route.
    pub fn shows_header(&self) -> bool {
        matches!(self, Route::ProductDetail { .. })
    }

    pub fn screen(&self) -> Screen {
        match self {
            Route::Splash => Screen::Splash,
            Route::MainTabs { tab } => tab.screen(),
            Route::ProductDetail { product_id } => Screen::ProductDetail {
                product_id: product_id.clone(),
            },
            Route::Cart => Screen::Cart,
            Route::AddPrescription => Screen::AddPrescription,
        }
    }

    fn same_kind(&self, other: &Route) -> bool {
        discriminant(self) == discriminant(other)
    }
}

/// The screen a route resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Splash,
    Home,
    Pharmacy,
    ProductDetail { product_id: Option<String> },
    Cart,
    AddPrescription,
}

// =============================================================================
// Navigator
// =============================================================================

/// Stack navigator state.
///
/// ## Semantics
/// - `navigate`: if a route of the same kind is already on the stack, pop
///   back to it and replace its parameters; otherwise push
/// - `push`: always push
/// - `go_back`: pop unless at the root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::starting_at(Route::initial())
    }

    pub fn starting_at(route: Route) -> Self {
        Navigator { stack: vec![route] }
    }

    /// Goes to `route`. If a route of the same kind is anywhere on the
    /// stack, pops back to it and replaces its parameters; otherwise pushes.
    pub fn navigate(&mut self, route: Route) {
        match self.stack.iter().position(|r| r.same_kind(&route)) {
            Some(index) => {
                self.stack.truncate(index);
                self.stack.push(route);
            }
            None => self.stack.push(route),
        }
    }

    pub fn push(&mut self, route: Route) {
        self.stack.push(route);
    }

    /// Pops the top route. Returns `false` at the root.
    pub fn go_back(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    /// Switches the active tab, returning to the tab navigator if needed.
    pub fn switch_tab(&mut self, tab: Tab) {
        self.navigate(Route::MainTabs { tab });
    }

    /// Replaces the whole stack with a single route.
    pub fn reset(&mut self, route: Route) {
        self.stack.clear();
        self.stack.push(route);
    }

    pub fn current(&self) -> &Route {
        // The stack is never empty: every mutation leaves at least one route.
        &self.stack[self.stack.len() - 1]
    }

    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn routes(&self) -> &[Route] {
        &self.stack
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_route_is_home_tab() {
        let nav = Navigator::new();
        assert_eq!(nav.current(), &Route::MainTabs { tab: Tab::Home });
        assert_eq!(nav.current().screen(), Screen::Home);
        assert!(!nav.can_go_back());
    }

    #[test]
    fn test_placeholder_tabs_render_pharmacy() {
        for tab in [Tab::Doctor, Tab::LabTest, Tab::Profile, Tab::Pharmacy] {
            assert_eq!(tab.screen(), Screen::Pharmacy);
        }
        assert_eq!(Tab::LabTest.to_string(), "Lab Test");
    }

    #[test]
    fn test_navigate_and_go_back() {
        let mut nav = Navigator::new();
        nav.switch_tab(Tab::Pharmacy);
        nav.navigate(Route::product_detail("2"));
        nav.navigate(Route::Cart);

        assert_eq!(nav.depth(), 3);
        assert!(nav.go_back());
        assert_eq!(
            nav.current().screen(),
            Screen::ProductDetail {
                product_id: Some("2".to_string())
            }
        );
        assert!(nav.go_back());
        assert_eq!(nav.current(), &Route::MainTabs { tab: Tab::Pharmacy });
        assert!(!nav.go_back());
    }

    #[test]
    fn test_navigate_to_existing_kind_pops_back() {
        let mut nav = Navigator::new();
        nav.navigate(Route::product_detail("1"));
        nav.navigate(Route::Cart);
        nav.navigate(Route::product_detail("3"));

        assert_eq!(nav.depth(), 2);
        assert_eq!(nav.current(), &Route::product_detail("3"));
    }

    #[test]
    fn test_push_always_stacks() {
        let mut nav = Navigator::new();
        nav.push(Route::product_detail("1"));
        nav.push(Route::product_detail("2"));
        assert_eq!(nav.depth(), 3);
    }

    #[test]
    fn test_splash_to_main_tabs() {
        let mut nav = Navigator::starting_at(Route::Splash);
        nav.navigate(Route::initial());
        assert_eq!(nav.current().name(), "MainTabs");

        nav.reset(Route::initial());
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_route_serialization() {
        let json = serde_json::to_value(Route::product_detail("4")).unwrap();
        assert_eq!(json["name"], "ProductDetail");
        assert_eq!(json["productId"], "4");

        let parsed: Route = serde_json::from_str(r#"{"name":"ProductDetail"}"#).unwrap();
        assert_eq!(parsed, Route::ProductDetail { product_id: None });

        let parsed: Route = serde_json::from_str(r#"{"name":"Cart"}"#).unwrap();
        assert_eq!(parsed, Route::Cart);
    }

    #[test]
    fn test_header_only_on_product_detail() {
        assert!(Route::product_detail("1").shows_header());
        assert!(!Route::Cart.shows_header());
    }
}
