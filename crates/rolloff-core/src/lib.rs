//! # rolloff-core: Pure Business Logic for Rolloff Ops
//!
//! This crate is the **heart** of the Rolloff Ops back-office. It contains
//! the invoice math and authorization decisions as pure functions with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Rolloff Ops Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Dashboard Frontend (browser)                   │   │
//! │  │   Invoice Form ──► Dispatch Board ──► Driver View ──► Menus     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  rolloff-store (state holders)                  │   │
//! │  │        current draft, session store, configuration              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ rolloff-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │  invoice  │  │   authz   │  │ validation│  │   │
//! │  │   │   Money   │  │  totals   │  │  Session  │  │   rules   │  │   │
//! │  │   │  TaxCalc  │  │   draft   │  │   roles   │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`types`] - Domain types (TaxRate, InvoiceStatus)
//! - [`invoice`] - Line items, discounts, totals, and the draft aggregate
//! - [`authz`] - Roles, capabilities, sessions, admin view-switching
//! - [`validation`] - Submit-time validation
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every computation is deterministic
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are cents (i64), rates are
//!    basis points (u32)
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use rolloff_core::invoice::{compute_totals, Discount, LineItem};
//! use rolloff_core::types::TaxRate;
//!
//! let items = vec![LineItem::from_input("20 Yard Dumpster", "1", "399.00")];
//! let totals = compute_totals(&items, &Discount::none(), TaxRate::from_bps(825));
//!
//! assert_eq!(totals.total_cents, 43192); // $431.92
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod authz;
pub mod error;
pub mod invoice;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use rolloff_core::Money` instead of
// `use rolloff_core::money::Money`

pub use authz::{Capability, Role, Session};
pub use error::{AuthzError, CoreError, CoreResult, ValidationError};
pub use invoice::{compute_totals, Discount, InvoiceDraft, InvoiceTotals, LineItem};
pub use money::Money;
pub use types::{InvoiceStatus, TaxRate};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum line items on a single invoice
///
/// ## Business Reason
/// A rental invoice bills one or a handful of hauls plus surcharges;
/// a runaway row count is a data-entry mistake.
pub const MAX_LINE_ITEMS: usize = 50;

/// Maximum quantity on a single line item
///
/// ## Business Reason
/// Prevents accidental over-billing (e.g., typing 1000 instead of 10).
pub const MAX_QUANTITY: i64 = 999;

/// Default tax rate in basis points (8.25%)
///
/// Used when no per-company configuration is present.
pub const DEFAULT_TAX_RATE_BPS: u32 = 825;
