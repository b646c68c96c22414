//! # Error Types
//!
//! Domain-specific error types for rolloff-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  rolloff-core errors (this file)                                        │
//! │  ├── CoreError        - Invoice domain errors                           │
//! │  ├── ValidationError  - Submit-time input validation failures           │
//! │  └── AuthzError       - Authorization failures                          │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → embedding layer → toast message    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (line-item id, role, etc.)
//! 3. Errors are enum variants, never String

use thiserror::Error;

use crate::authz::Role;

// =============================================================================
// Core Error
// =============================================================================

/// Invoice domain errors.
///
/// These represent business rule violations. The embedding layer catches
/// them and translates to user-facing toast messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Line item cannot be found on the draft being edited.
    #[error("Line item not found: {0}")]
    LineItemNotFound(String),

    /// Draft has exceeded maximum allowed line items.
    #[error("Invoice cannot have more than {max} line items")]
    TooManyLineItems { max: usize },

    /// Item quantity exceeds maximum allowed.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// Invoice is not in a state that allows the requested operation.
    ///
    /// ## When This Occurs
    /// - Editing line items on a sent invoice
    /// - Marking a draft paid before sending it
    /// - Voiding an invoice that was already paid
    #[error("Invoice {invoice_id} is {current_status:?}, cannot perform operation")]
    InvalidInvoiceStatus {
        invoice_id: String,
        current_status: String,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Submit-time validation errors.
///
/// While a draft is being edited, nothing validates — bad field input
/// coerces to zero so the user is never blocked mid-edit. These errors
/// only surface when the office finalizes an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },
}

// =============================================================================
// Authorization Error
// =============================================================================

/// Authorization failures.
///
/// The source system silently ignored unauthorized view switches; we
/// surface them as typed errors instead so callers and audits can see
/// the rejected attempt. The session itself is left untouched either way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthzError {
    /// A role attempted an action it does not hold.
    #[error("Role {role:?} is not permitted to {action}")]
    PermissionDenied { role: Role, action: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
