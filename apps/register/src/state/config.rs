//! # Store Configuration
//!
//! Read-only configuration loaded at startup: no mutex needed. If
//! hot-reloading is ever added it would move behind an `RwLock`.
//!
//! ## Sources (priority order)
//! 1. Environment variables (`ORCHARD_*`)
//! 2. Defaults (this file)

use serde::{Deserialize, Serialize};

use orchard_core::{TaxRate, DEFAULT_TAX_RATE_BPS};

/// Store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Store name shown on receipts.
    pub store_name: String,

    /// Currency code (ISO 4217).
    pub currency_code: String,

    /// Currency symbol for display.
    pub currency_symbol: String,

    /// Decimal places for the currency.
    pub currency_decimals: u8,

    /// Sales tax rate in basis points (800 = 8%).
    pub tax_rate_bps: u32,
}

impl Default for Config {
    /// Defaults suitable for the demo store.
    fn default() -> Self {
        Config {
            store_name: "Orchard Demo Store".to_string(),
            currency_code: "USD".to_string(),
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
            tax_rate_bps: DEFAULT_TAX_RATE_BPS,
        }
    }
}

impl Config {
    /// Builds configuration from environment variables over defaults.
    ///
    /// ## Environment Variables
    /// - `ORCHARD_STORE_NAME`: override the store name
    /// - `ORCHARD_TAX_RATE`: override the tax rate as a percentage ("8.25")
    pub fn from_env() -> Self {
        let mut config = Config::default();

        if let Ok(store_name) = std::env::var("ORCHARD_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Ok(rate_str) = std::env::var("ORCHARD_TAX_RATE") {
            if let Ok(pct) = rate_str.parse::<f64>() {
                config.tax_rate_bps = (pct * 100.0).round() as u32;
            }
        }

        config
    }

    /// The configured tax rate as a core TaxRate.
    #[inline]
    pub fn tax_rate(&self) -> TaxRate {
        TaxRate::from_bps(self.tax_rate_bps)
    }

    /// Formats a cent amount as a currency string for logs and receipts.
    pub fn format_currency(&self, cents: i64) -> String {
        let divisor = 10_i64.pow(self.currency_decimals as u32);
        let whole = (cents / divisor).abs();
        let frac = (cents % divisor).abs();

        format!(
            "{}{}{}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            if self.currency_decimals > 0 {
                format!("{}.{:0width$}", whole, frac, width = self.currency_decimals as usize)
            } else {
                whole.to_string()
            }
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
