//! # App Configuration
//!
//! Read once at startup, read-only afterwards.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     ENTERO_SHIPPING_FEE=79                                             │
//! │     ENTERO_FREE_DELIVERY_THRESHOLD=77                                  │
//! │     ENTERO_CURRENCY_SYMBOL=₹                                           │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     $ENTERO_CONFIG, else                                               │
//! │     ~/.config/entero/config.toml (Linux)                               │
//! │     ~/Library/Application Support/com.entero.storefront/config.toml    │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! brandName = "ENTRO"
//! tagline = "Your Health, Our Priority"
//! currencyCode = "INR"
//! currencySymbol = "₹"
//! shippingFee = 79          # rupees, up to two decimals
//! freeDeliveryThreshold = "77.50"
//! ```
//!
//! Amounts are written in rupees and held as [`Money`] (paise).

use std::path::PathBuf;

use entero_core::cart::{DEFAULT_FREE_DELIVERY_THRESHOLD, DEFAULT_SHIPPING_FEE};
use entero_core::{DeliveryPolicy, Money};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Path override for the config file.
pub const CONFIG_PATH_ENV: &str = "ENTERO_CONFIG";
const SHIPPING_FEE_ENV: &str = "ENTERO_SHIPPING_FEE";
const FREE_DELIVERY_THRESHOLD_ENV: &str = "ENTERO_FREE_DELIVERY_THRESHOLD";
const CURRENCY_SYMBOL_ENV: &str = "ENTERO_CURRENCY_SYMBOL";

// =============================================================================
// Errors
// =============================================================================

/// Configuration load failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },
}

// =============================================================================
// App Config
// =============================================================================

/// Application configuration.
///
/// Monetary fields serialize as paise, like every other amount the screens
/// receive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// Splash screen title
    pub brand_name: String,

    /// Splash screen subtitle
    pub tagline: String,

    /// Currency code (ISO 4217)
    pub currency_code: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Charged when the cart total is below the threshold
    #[serde(deserialize_with = "deserialize_rupees")]
    pub shipping_fee: Money,

    /// Cart total at which delivery becomes free
    #[serde(deserialize_with = "deserialize_rupees")]
    pub free_delivery_threshold: Money,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            brand_name: "ENTRO".to_string(),
            tagline: "Your Health, Our Priority".to_string(),
            currency_code: "INR".to_string(),
            currency_symbol: "₹".to_string(),
            shipping_fee: DEFAULT_SHIPPING_FEE,
            free_delivery_threshold: DEFAULT_FREE_DELIVERY_THRESHOLD,
        }
    }
}

impl AppConfig {
    /// Loads configuration: defaults, then the TOML file, then environment.
    ///
    /// A missing file is not an error; an unreadable or malformed one is.
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let path = config_path
            .or_else(|| std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from))
            .or_else(Self::default_config_path);

        if let Some(path) = path {
            if path.exists() {
                info!(?path, "Loading config from file");
                let contents = std::fs::read_to_string(&path).map_err(|source| {
                    ConfigError::Io {
                        path: path.clone(),
                        source,
                    }
                })?;
                config = Self::from_toml_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns defaults if loading fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Parses a TOML document; absent keys keep their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Applies overrides from `lookup` (the process environment in
    /// [`AppConfig::load`]).
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(SHIPPING_FEE_ENV) {
            self.shipping_fee = parse_amount(SHIPPING_FEE_ENV, &value)?;
            debug!(shipping_fee = %self.shipping_fee, "Overriding shipping fee from environment");
        }

        if let Some(value) = lookup(FREE_DELIVERY_THRESHOLD_ENV) {
            self.free_delivery_threshold = parse_amount(FREE_DELIVERY_THRESHOLD_ENV, &value)?;
            debug!(
                threshold = %self.free_delivery_threshold,
                "Overriding free delivery threshold from environment"
            );
        }

        if let Some(symbol) = lookup(CURRENCY_SYMBOL_ENV) {
            self.currency_symbol = symbol;
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.currency_symbol.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "currencySymbol".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        if self.currency_code.len() != 3 {
            return Err(ConfigError::InvalidValue {
                key: "currencyCode".to_string(),
                reason: format!("expected a 3-letter code, got '{}'", self.currency_code),
            });
        }

        Ok(())
    }

    /// Platform config file location.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "entero", "storefront")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    pub fn delivery_policy(&self) -> DeliveryPolicy {
        DeliveryPolicy::new(self.shipping_fee, self.free_delivery_threshold)
    }

    /// Formats an amount with the configured symbol.
    ///
    /// ## Example
    /// - 13194 paise with "₹" → "₹131.94"
    /// - -550 paise → "-₹5.50"
    pub fn format_currency(&self, amount: Money) -> String {
        let sign = if amount.is_negative() { "-" } else { "" };
        let paise = amount.paise().unsigned_abs();
        format!(
            "{}{}{}.{:02}",
            sign,
            self.currency_symbol,
            paise / 100,
            paise % 100
        )
    }
}

fn parse_amount(key: &str, value: &str) -> Result<Money, ConfigError> {
    Money::parse_rupees(value).map_err(|e| ConfigError::InvalidValue {
        key: key.to_string(),
        reason: e.to_string(),
    })
}

/// TOML accepts `79`, `77.5` or `"77.50"` for amounts.
#[derive(Deserialize)]
#[serde(untagged)]
enum RupeeInput {
    Whole(i64),
    Decimal(f64),
    Text(String),
}

fn deserialize_rupees<'de, D>(deserializer: D) -> Result<Money, D::Error>
where
    D: Deserializer<'de>,
{
    let text = match RupeeInput::deserialize(deserializer)? {
        RupeeInput::Whole(n) => n.to_string(),
        RupeeInput::Decimal(n) => n.to_string(),
        RupeeInput::Text(s) => s,
    };
    Money::parse_rupees(&text).map_err(serde::de::Error::custom)
}

// =============================================================================
// Unit Tests
// =============================================================================
