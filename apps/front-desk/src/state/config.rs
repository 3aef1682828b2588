//! # Configuration State
//!
//! Front-desk configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`ALBERGO_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after initialization.

use std::path::PathBuf;

use albergo_core::{CoreResult, DiscountTable, Money};
use directories::ProjectDirs;
use serde::Serialize;
use tracing::warn;

/// File name of the ledger snapshot inside the data directory.
pub const SNAPSHOT_FILE: &str = "albergo.json";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Shown in the desk header and logs
    pub hotel_name: String,

    /// Snapshot file. `None` keeps bookings in memory only.
    pub data_path: Option<PathBuf>,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u8,

    /// Default operating cost per day, used when a revenue query gives none
    pub daily_cost_cents: i64,

    /// Discount tiers as `CODE:PERCENT`, comma separated
    pub discount_codes: String,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Hotel: "Albergo"
    /// - Data: platform data dir + `albergo.json`
    /// - Currency: EUR (€)
    /// - Daily cost: €0.00
    /// - Discounts: `VIP2025:20`
    fn default() -> Self {
        ConfigState {
            hotel_name: "Albergo".to_string(),
            data_path: default_data_path(),
            currency_symbol: "€".to_string(),
            currency_decimals: 2,
            daily_cost_cents: 0,
            discount_codes: "VIP2025:20".to_string(),
        }
    }
}

/// Platform data location of the snapshot.
///
/// - **macOS**: `~/Library/Application Support/com.albergo.frontdesk/albergo.json`
/// - **Windows**: `%APPDATA%\albergo\frontdesk\data\albergo.json`
/// - **Linux**: `~/.local/share/frontdesk/albergo.json`
pub fn default_data_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "albergo", "frontdesk").map(|dirs| dirs.data_dir().join(SNAPSHOT_FILE))
}

/// Parses a euro amount such as `"250"` or `"250.50"` into cents.
fn parse_euros(input: &str) -> Option<i64> {
    let value: f64 = input.trim().parse().ok()?;
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    Some((value * 100.0).round() as i64)
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `ALBERGO_HOTEL_NAME`: Override hotel name
    /// - `ALBERGO_DATA_PATH`: Snapshot file path (empty string = memory only)
    /// - `ALBERGO_DAILY_COST`: Daily operating cost in euros (e.g., "250.00")
    /// - `ALBERGO_DISCOUNT_CODES`: Discount tiers (e.g., "VIP2025:20,GOLD:35")
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ConfigState::from_env`] with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(name) = lookup("ALBERGO_HOTEL_NAME") {
            config.hotel_name = name;
        }

        if let Some(path) = lookup("ALBERGO_DATA_PATH") {
            config.data_path = if path.trim().is_empty() {
                None
            } else {
                Some(PathBuf::from(path))
            };
        }

        if let Some(cost) = lookup("ALBERGO_DAILY_COST") {
            match parse_euros(&cost) {
                Some(cents) => config.daily_cost_cents = cents,
                None => warn!(value = %cost, "Ignoring invalid ALBERGO_DAILY_COST"),
            }
        }

        if let Some(codes) = lookup("ALBERGO_DISCOUNT_CODES") {
            config.discount_codes = codes;
        }

        config
    }

    /// Builds the discount table from `discount_codes`.
    pub fn discount_table(&self) -> CoreResult<DiscountTable> {
        DiscountTable::parse_list(&self.discount_codes)
    }

    pub fn daily_cost(&self) -> Money {
        Money::from_cents(self.daily_cost_cents)
    }

    /// Formats a cent amount as a currency string.
    ///
    /// ## Example
    /// ```rust
    /// use albergo_frontdesk::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(12800), "€128.00");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        let divisor = 10_i64.pow(self.currency_decimals as u32);
        let whole = (cents / divisor).abs();
        let frac = (cents % divisor).abs();
        let sign = if cents < 0 { "-" } else { "" };

        if self.currency_decimals > 0 {
            format!(
                "{}{}{}.{:0width$}",
                sign,
                self.currency_symbol,
                whole,
                frac,
                width = self.currency_decimals as usize
            )
        } else {
            format!("{}{}{}", sign, self.currency_symbol, whole)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_format_currency() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(16000), "€160.00");
        assert_eq!(config.format_currency(1), "€0.01");
        assert_eq!(config.format_currency(0), "€0.00");
        assert_eq!(config.format_currency(-550), "-€5.50");
    }

    #[test]
    fn test_env_overrides() {
        let config = ConfigState::from_lookup(lookup_from(&[
            ("ALBERGO_HOTEL_NAME", "Hotel Belvedere"),
            ("ALBERGO_DATA_PATH", "/srv/albergo/data.json"),
            ("ALBERGO_DAILY_COST", "250.50"),
            ("ALBERGO_DISCOUNT_CODES", "VIP2025:20,GOLD:35"),
        ]));

        assert_eq!(config.hotel_name, "Hotel Belvedere");
        assert_eq!(config.data_path, Some(PathBuf::from("/srv/albergo/data.json")));
        assert_eq!(config.daily_cost_cents, 25050);
        assert_eq!(config.discount_table().unwrap().tiers().len(), 2);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = ConfigState::from_lookup(lookup_from(&[
            ("ALBERGO_DATA_PATH", ""),
            ("ALBERGO_DAILY_COST", "a lot"),
        ]));
        assert_eq!(config.data_path, None);
        assert_eq!(config.daily_cost_cents, 0);
    }

    #[test]
    fn test_default_discount_table() {
        let table = ConfigState::default().discount_table().unwrap();
        assert!(table.resolve("VIP2025").is_tiered());
    }
}
