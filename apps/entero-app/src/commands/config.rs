//! # Config Commands

use tracing::debug;

use crate::state::AppConfig;

/// Gets the current application configuration (read-only).
pub fn get_config(config: &AppConfig) -> AppConfig {
    debug!("get_config command");
    config.clone()
}
