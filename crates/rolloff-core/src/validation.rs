//! # Validation Module
//!
//! Submit-time validation for invoice drafts.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Two-Phase Validation                               │
//! │                                                                         │
//! │  Phase 1: While editing                                                 │
//! │  ├── NO validation — bad field input coerces to 0                       │
//! │  └── The user is never blocked mid-edit                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Phase 2: On "Send Invoice"                                             │
//! │  ├── THIS MODULE: collect ALL violations at once                        │
//! │  └── The form shows every problem in a single toast                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rolloff_core::invoice::InvoiceDraft;
//! use rolloff_core::validation::validate_for_send;
//!
//! let draft = InvoiceDraft::new("cust-1", 825);
//! let problems = validate_for_send(&draft, true);
//! assert!(!problems.is_empty()); // no line items yet
//! ```

use crate::error::ValidationError;
use crate::invoice::{InvoiceDraft, LineItem};
use crate::MAX_QUANTITY;

/// Result type for single-field validators.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Maximum length of a line-item description.
const MAX_DESCRIPTION_LEN: usize = 200;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a line-item description for a finalized invoice.
///
/// ## Rules
/// - Must not be empty (blank rows are fine while drafting, not on a
///   sent invoice)
/// - At most 200 characters
pub fn validate_description(description: &str) -> ValidationResult<()> {
    let description = description.trim();

    if description.is_empty() {
        return Err(ValidationError::Required {
            field: "description".to_string(),
        });
    }

    if description.len() > MAX_DESCRIPTION_LEN {
        return Err(ValidationError::TooLong {
            field: "description".to_string(),
            max: MAX_DESCRIPTION_LEN,
        });
    }

    Ok(())
}

/// Validates a line-item quantity.
///
/// ## Rules
/// - Must not be negative (lenient parsing should already guarantee this)
/// - Must not exceed MAX_QUANTITY
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity < 0 {
        return Err(ValidationError::Negative {
            field: "quantity".to_string(),
        });
    }

    if quantity > MAX_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 0,
            max: MAX_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a unit rate in cents.
///
/// Zero is allowed (no-charge rows such as "courtesy swap").
pub fn validate_unit_rate_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::Negative {
            field: "unit rate".to_string(),
        });
    }

    Ok(())
}

/// Validates a tax rate in basis points (0% to 100%).
pub fn validate_tax_rate_bps(bps: u32) -> ValidationResult<()> {
    if bps > 10000 {
        return Err(ValidationError::OutOfRange {
            field: "tax rate".to_string(),
            min: 0,
            max: 10000,
        });
    }

    Ok(())
}

// =============================================================================
// Submit-Time Draft Validation
// =============================================================================

fn validate_item(item: &LineItem) -> Vec<ValidationError> {
    let mut problems = Vec::new();
    if let Err(e) = validate_description(&item.description) {
        problems.push(e);
    }
    if let Err(e) = validate_quantity(item.quantity) {
        problems.push(e);
    }
    if let Err(e) = validate_unit_rate_cents(item.unit_rate_cents) {
        problems.push(e);
    }
    problems
}

/// Validates a draft before it is sent, collecting every violation.
///
/// An empty vec means the draft may be sent. `allow_negative_totals`
/// is the credit-memo policy switch: when false, an over-discounted
/// draft with a negative total is rejected here (and only here — the
/// live totals computation never clamps).
pub fn validate_for_send(draft: &InvoiceDraft, allow_negative_totals: bool) -> Vec<ValidationError> {
    let mut problems = Vec::new();

    if draft.items.is_empty() {
        problems.push(ValidationError::Required {
            field: "line items".to_string(),
        });
    }

    for item in &draft.items {
        problems.extend(validate_item(item));
    }

    if let Err(e) = validate_tax_rate_bps(draft.tax_rate_bps) {
        problems.push(e);
    }

    if !allow_negative_totals && draft.totals().total_cents < 0 {
        problems.push(ValidationError::Negative {
            field: "total".to_string(),
        });
    }

    problems
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invoice::{Discount, LineItem};
    use crate::money::Money;

    fn draft_with_item(description: &str, quantity: &str, rate: &str) -> InvoiceDraft {
        let mut draft = InvoiceDraft::new("cust-1", 825);
        draft
            .add_item(LineItem::from_input(description, quantity, rate))
            .unwrap();
        draft
    }

    #[test]
    fn test_validate_description() {
        assert!(validate_description("20 Yard Dumpster").is_ok());
        assert!(validate_description("").is_err());
        assert!(validate_description("   ").is_err());
        assert!(validate_description(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(0).is_ok());
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(1000).is_err());
    }

    #[test]
    fn test_validate_unit_rate_cents() {
        assert!(validate_unit_rate_cents(0).is_ok());
        assert!(validate_unit_rate_cents(39900).is_ok());
        assert!(validate_unit_rate_cents(-100).is_err());
    }

    #[test]
    fn test_validate_tax_rate_bps() {
        assert!(validate_tax_rate_bps(0).is_ok());
        assert!(validate_tax_rate_bps(825).is_ok());
        assert!(validate_tax_rate_bps(10000).is_ok());
        assert!(validate_tax_rate_bps(10001).is_err());
    }

    #[test]
    fn test_valid_draft_passes() {
        let draft = draft_with_item("20 Yard Dumpster", "1", "399.00");
        assert!(validate_for_send(&draft, true).is_empty());
    }

    #[test]
    fn test_empty_draft_rejected() {
        let draft = InvoiceDraft::new("cust-1", 825);
        let problems = validate_for_send(&draft, true);
        assert!(problems
            .iter()
            .any(|p| matches!(p, ValidationError::Required { field } if field == "line items")));
    }

    #[test]
    fn test_blank_description_rejected_at_send_only() {
        // Drafting tolerates blank rows; sending does not
        let draft = draft_with_item("", "1", "399.00");
        let problems = validate_for_send(&draft, true);
        assert_eq!(problems.len(), 1);
        assert!(matches!(
            &problems[0],
            ValidationError::Required { field } if field == "description"
        ));
    }

    #[test]
    fn test_collects_multiple_violations() {
        let mut draft = draft_with_item("", "1", "10.00");
        draft
            .add_item(LineItem::from_input("", "2", "5.00"))
            .unwrap();
        let problems = validate_for_send(&draft, true);
        assert_eq!(problems.len(), 2);
    }

    #[test]
    fn test_negative_total_policy() {
        let mut draft = draft_with_item("20 Yard Dumpster", "1", "100.00");
        draft
            .set_discount(Discount::Fixed(Money::from_cents(15000)))
            .unwrap();
        assert!(draft.totals().total_cents < 0);

        // Default policy: credit memos allowed
        assert!(validate_for_send(&draft, true).is_empty());

        // Strict policy: rejected
        let problems = validate_for_send(&draft, false);
        assert!(problems
            .iter()
            .any(|p| matches!(p, ValidationError::Negative { field } if field == "total")));
    }
}
