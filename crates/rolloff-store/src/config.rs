//! # Configuration State
//!
//! Company-level configuration loaded by the embedding shell at startup.
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.
//! If hot-reloading is added later, we'd wrap in `RwLock`.

use serde::{Deserialize, Serialize};

use rolloff_core::DEFAULT_TAX_RATE_BPS;

/// Company configuration.
///
/// ## Fields
/// Most fields have sensible defaults for development.
/// Production deployments configure these from the shell.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Company name (shown on invoices).
    pub company_name: String,

    /// Currency code (ISO 4217).
    pub currency_code: String,

    /// Currency symbol (for display).
    pub currency_symbol: String,

    /// Default tax rate in basis points, applied to new drafts.
    /// e.g., 825 = 8.25%
    pub default_tax_rate_bps: u32,

    /// Whether an over-discounted invoice (negative total) may be sent.
    /// Defaults to true: the office issues credit memos this way.
    pub allow_negative_totals: bool,
}

impl Default for ConfigState {
    /// Returns default configuration suitable for development.
    ///
    /// ## Default Values
    /// - Company: "Rolloff Ops Dev Yard"
    /// - Currency: USD ($)
    /// - Tax: 8.25%
    /// - Negative totals: allowed (credit memos)
    fn default() -> Self {
        ConfigState {
            company_name: "Rolloff Ops Dev Yard".to_string(),
            currency_code: "USD".to_string(),
            currency_symbol: "$".to_string(),
            default_tax_rate_bps: DEFAULT_TAX_RATE_BPS,
            allow_negative_totals: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ConfigState::default();
        assert_eq!(config.default_tax_rate_bps, 825);
        assert!(config.allow_negative_totals);
        assert_eq!(config.currency_code, "USD");
    }
}
