//! # Discount Tiers
//!
//! Resolution of a free-text discount code to a pricing variant.
//!
//! ## Resolution Is Binary and Happens Once
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Booking form: code "VIP2025"                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DiscountTable::resolve("VIP2025")  ← exact, case-sensitive match      │
//! │       │                                                                 │
//! │       ├── match    → Tiered { code: "VIP2025", rate: 20% }             │
//! │       └── no match → Standard  (never an error)                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Stored on the Stay. Repricing reads the stored variant, so editing   │
//! │  or revoking a code later never changes historical prices.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreResult, ValidationError};
use crate::validation::{validate_discount_code, validate_discount_rate_bps};

/// The code accepted by the default table.
pub const DEFAULT_DISCOUNT_CODE: &str = "VIP2025";

/// Percentage off granted by the default tier.
pub const DEFAULT_DISCOUNT_PERCENT: f64 = 20.0;

// =============================================================================
// Discount Rate
// =============================================================================

/// Discount rate in basis points (1 bps = 0.01%, 2000 bps = 20%).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// Creates a rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        DiscountRate(bps)
    }

    /// Creates a rate from a percentage (20.0 = 20%).
    pub fn from_percentage(pct: f64) -> Self {
        DiscountRate((pct * 100.0).round().max(0.0) as u32)
    }

    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    #[inline]
    pub const fn zero() -> Self {
        DiscountRate(0)
    }
}

impl Default for DiscountRate {
    fn default() -> Self {
        DiscountRate::zero()
    }
}

// =============================================================================
// Discount Variant
// =============================================================================

/// How a stay is priced. Resolved once when the stay is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum DiscountVariant {
    /// Full price.
    Standard,
    /// A registered tier matched the supplied code.
    Tiered { code: String, rate: DiscountRate },
}

impl DiscountVariant {
    /// Checks if this variant grants a discount.
    #[inline]
    pub fn is_tiered(&self) -> bool {
        matches!(self, DiscountVariant::Tiered { .. })
    }

    /// Discount rate, zero for a standard stay.
    pub fn rate(&self) -> DiscountRate {
        match self {
            DiscountVariant::Standard => DiscountRate::zero(),
            DiscountVariant::Tiered { rate, .. } => *rate,
        }
    }
}

impl Default for DiscountVariant {
    fn default() -> Self {
        DiscountVariant::Standard
    }
}

// =============================================================================
// Discount Table
// =============================================================================

/// A named tier: the code a guest types and the percentage it grants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DiscountTier {
    pub code: String,
    pub rate: DiscountRate,
}

/// Registered discount tiers, looked up by exact code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountTable {
    tiers: Vec<DiscountTier>,
}

impl DiscountTable {
    /// An empty table: every code resolves to standard pricing.
    pub fn new() -> Self {
        DiscountTable { tiers: Vec::new() }
    }

    /// The hotel's default table: `VIP2025` for 20% off.
    pub fn standard() -> Self {
        DiscountTable {
            tiers: vec![DiscountTier {
                code: DEFAULT_DISCOUNT_CODE.to_string(),
                rate: DiscountRate::from_percentage(DEFAULT_DISCOUNT_PERCENT),
            }],
        }
    }

    /// Registers a tier. Codes must be unique and the rate at most 100%.
    pub fn register(&mut self, code: impl Into<String>, rate: DiscountRate) -> CoreResult<()> {
        let code = code.into();
        validate_discount_code(&code)?;
        validate_discount_rate_bps(rate.bps())?;

        if self.tiers.iter().any(|t| t.code == code) {
            return Err(ValidationError::Duplicate {
                field: "discount code".to_string(),
                value: code,
            }
            .into());
        }

        self.tiers.push(DiscountTier { code, rate });
        Ok(())
    }

    /// Builds a table from a `CODE:PERCENT` list, e.g. `"VIP2025:20,GOLD:35"`.
    ///
    /// ```rust
    /// use albergo_core::discount::DiscountTable;
    ///
    /// let table = DiscountTable::parse_list("VIP2025:20, GOLD:35").unwrap();
    /// assert_eq!(table.tiers().len(), 2);
    /// assert!(DiscountTable::parse_list("VIP2025").is_err());
    /// ```
    pub fn parse_list(list: &str) -> CoreResult<Self> {
        let mut table = DiscountTable::new();

        for entry in list.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (code, pct) = entry.split_once(':').ok_or_else(|| {
                ValidationError::InvalidFormat {
                    field: "discount tier".to_string(),
                    reason: format!("'{}' is not CODE:PERCENT", entry),
                }
            })?;
            let pct: f64 = pct.trim().parse().map_err(|_| ValidationError::InvalidFormat {
                field: "discount tier".to_string(),
                reason: format!("'{}' is not a percentage", pct.trim()),
            })?;
            if !pct.is_finite() || pct < 0.0 {
                return Err(ValidationError::OutOfRange {
                    field: "discount percentage".to_string(),
                    min: 0,
                    max: 100,
                }
                .into());
            }
            table.register(code.trim(), DiscountRate::from_percentage(pct))?;
        }

        Ok(table)
    }

    /// Resolves a code to a variant. Unknown or empty codes yield
    /// [`DiscountVariant::Standard`]; this never fails.
    pub fn resolve(&self, code: &str) -> DiscountVariant {
        self.tiers
            .iter()
            .find(|t| t.code == code)
            .map(|t| DiscountVariant::Tiered {
                code: t.code.clone(),
                rate: t.rate,
            })
            .unwrap_or(DiscountVariant::Standard)
    }

    pub fn tiers(&self) -> &[DiscountTier] {
        &self.tiers
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
