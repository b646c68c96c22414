//! # Domain Types
//!
//! Core domain types shared across the invoice and authorization modules.
//!
//! ## Dual-Key Identity Pattern
//! Entities carry:
//! - `id`: UUID v4 - immutable, used by the embedding layers for lookups
//! - Business ID: (invoice_number, customer_id, etc.) - human-readable

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::parse_decimal_hundredths;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 825 bps = 8.25% (e.g., Texas sales tax)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Parses a user-entered percent string ("8.25") into a tax rate,
    /// leniently. Invalid or negative input coerces to a zero rate, same
    /// policy as [`crate::money::Money::parse_input`].
    pub fn parse_input(input: &str) -> Self {
        let bps = parse_decimal_hundredths(input)
            .and_then(|v| u32::try_from(v).ok())
            .unwrap_or(0);
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Invoice Status
// =============================================================================

/// The status of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    /// Invoice is being edited (line items still changing).
    Draft,
    /// Invoice has been finalized and sent to the customer.
    Sent,
    /// Customer has paid.
    Paid,
    /// Invoice was cancelled.
    Voided,
}

impl Default for InvoiceStatus {
    fn default() -> Self {
        InvoiceStatus::Draft
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_rate_from_bps() {
        let rate = TaxRate::from_bps(825);
        assert_eq!(rate.bps(), 825);
        assert!((rate.percentage() - 8.25).abs() < 0.001);
    }

    #[test]
    fn test_tax_rate_parse_input() {
        assert_eq!(TaxRate::parse_input("8.25").bps(), 825);
        assert_eq!(TaxRate::parse_input("0").bps(), 0);
        assert_eq!(TaxRate::parse_input("10").bps(), 1000);
        // Lenient coercion: garbage and negatives become a zero rate
        assert_eq!(TaxRate::parse_input("").bps(), 0);
        assert_eq!(TaxRate::parse_input("n/a").bps(), 0);
        assert_eq!(TaxRate::parse_input("-5").bps(), 0);
    }

    #[test]
    fn test_invoice_status_default() {
        assert_eq!(InvoiceStatus::default(), InvoiceStatus::Draft);
    }
}
