//! # Entero App Library
//!
//! Process-wide state and the command surface behind the Entero screens.
//!
//! ## Module Organization
//! ```text
//! entero_app/
//! ├── lib.rs              ◄─── You are here (startup, logging)
//! ├── state/
//! │   ├── mod.rs          ◄─── State type exports
//! │   ├── cart.rs         ◄─── Shared cart session + change feed
//! │   ├── navigation.rs   ◄─── Route stack
//! │   ├── prescription.rs ◄─── Add Prescription draft
//! │   └── config.rs       ◄─── AppConfig (defaults, TOML, env)
//! ├── commands/
//! │   ├── cart.rs         ◄─── Cart access interface
//! │   ├── catalog.rs      ◄─── Product detail and deals
//! │   ├── navigation.rs   ◄─── Navigate / back / tabs
//! │   ├── prescription.rs ◄─── Prescription form
//! │   └── config.rs       ◄─── Configuration retrieval
//! └── error.rs            ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod state;

use std::path::PathBuf;

use entero_core::Catalog;
use tracing::info;
use tracing_subscriber::EnvFilter;

use state::{AppConfig, CartState, ConfigError, NavigationState, PrescriptionState};

/// Everything the host hands to commands.
///
/// Clones share the cart, route stack and prescription draft.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub catalog: Catalog,
    pub cart: CartState,
    pub navigation: NavigationState,
    pub prescription: PrescriptionState,
}

impl AppState {
    /// Fresh session state for `config`: empty cart, Home tab, blank draft.
    pub fn new(config: AppConfig) -> Self {
        let cart = CartState::new(config.delivery_policy());
        AppState {
            config,
            catalog: Catalog::builtin(),
            cart,
            navigation: NavigationState::default(),
            prescription: PrescriptionState::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

/// Starts the app.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │     • Default: info,entero=debug, override with RUST_LOG                │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • defaults → config.toml → ENTERO_* environment variables          │
/// │                                                                         │
/// │  3. Initialize State Objects ─────────────────────────────────────────► │
/// │     • CartState: empty session with the configured delivery policy     │
/// │     • NavigationState: MainTabs / Home                                  │
/// │     • PrescriptionState: blank draft                                    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn bootstrap(config_path: Option<PathBuf>) -> Result<AppState, ConfigError> {
    init_tracing();

    info!("Starting Entero storefront");

    let config = AppConfig::load(config_path)?;
    info!(
        shipping_fee = %config.shipping_fee,
        free_delivery_threshold = %config.free_delivery_threshold,
        "Configuration loaded"
    );

    let state = AppState::new(config);
    info!("State initialized");
    Ok(state)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=entero=trace` - Show trace for entero crates only
/// - Default: `info,entero=debug`
///
/// Safe to call more than once; later calls leave the first subscriber.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,entero=debug"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
