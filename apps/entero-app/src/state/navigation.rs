//! # Navigation State
//!
//! The route stack shared by the tab bar and every screen's back button.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use entero_core::{Navigator, Route};

#[derive(Debug, Clone, Default)]
pub struct NavigationState {
    navigator: Arc<Mutex<Navigator>>,
}

impl NavigationState {
    pub fn new(navigator: Navigator) -> Self {
        NavigationState {
            navigator: Arc::new(Mutex::new(navigator)),
        }
    }

    pub fn with_navigator<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Navigator) -> R,
    {
        f(&*self.lock())
    }

    pub fn with_navigator_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Navigator) -> R,
    {
        f(&mut *self.lock())
    }

    pub fn current(&self) -> Route {
        self.with_navigator(|nav| nav.current().clone())
    }

    fn lock(&self) -> MutexGuard<'_, Navigator> {
        self.navigator.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
