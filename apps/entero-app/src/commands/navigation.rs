//! # Navigation Commands
//!
//! Stack operations behind the tab bar, card taps and back buttons. Each
//! returns the route now on top so the host can render its screen.

use entero_core::{Route, Screen, Tab};
use tracing::debug;

use crate::state::NavigationState;

pub fn current_route(nav: &NavigationState) -> Route {
    nav.current()
}

pub fn current_screen(nav: &NavigationState) -> Screen {
    nav.with_navigator(|n| n.current().screen())
}

pub fn navigate(nav: &NavigationState, route: Route) -> Route {
    debug!(route = route.name(), "navigate command");
    nav.with_navigator_mut(|n| {
        n.navigate(route);
        n.current().clone()
    })
}

/// Card tap: opens Product Detail for `product_id`.
pub fn open_product(nav: &NavigationState, product_id: &str) -> Route {
    navigate(nav, Route::product_detail(product_id))
}

pub fn switch_tab(nav: &NavigationState, tab: Tab) -> Route {
    debug!(tab = %tab, "switch_tab command");
    nav.with_navigator_mut(|n| {
        n.switch_tab(tab);
        n.current().clone()
    })
}

/// Back button. At the root the stack is left as is.
pub fn go_back(nav: &NavigationState) -> Route {
    nav.with_navigator_mut(|n| {
        if !n.go_back() {
            debug!("go_back at root ignored");
        }
        n.current().clone()
    })
}

/// Splash "Get Started".
pub fn get_started(nav: &NavigationState) -> Route {
    nav.with_navigator_mut(|n| {
        n.reset(Route::initial());
        n.current().clone()
    })
}
