//! # Invoice Module
//!
//! Line items, discounts, and the totals computation for the invoice
//! editor.
//!
//! ## Totals Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Invoice Totals Pipeline                              │
//! │                                                                         │
//! │  LineItem.amount = quantity × unit_rate          (per row)              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  subtotal = Σ amount                                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  discount = subtotal × pct  (or a fixed amount, NOT clamped)            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  taxable = subtotal − discount   (may go negative: credit memo)         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  tax = taxable × rate                                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  total = taxable + tax                                                  │
//! │                                                                         │
//! │  Recomputed unconditionally on every edit. Never cached.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Editing Model
//! Field edits land as raw strings and coerce leniently (bad input → 0);
//! the user is never blocked mid-edit. Real validation happens once, at
//! send time, in [`crate::validation`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{InvoiceStatus, TaxRate};
use crate::{MAX_LINE_ITEMS, MAX_QUANTITY};

// =============================================================================
// Line Item
// =============================================================================

/// One billable row on an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Row ID (UUID v4), stable across edits.
    pub id: String,

    /// What is being billed ("20 Yard Dumpster", "Extra tonnage", ...).
    pub description: String,

    /// Billed quantity. Never negative.
    pub quantity: i64,

    /// Unit rate in cents. Never negative.
    pub unit_rate_cents: i64,
}

impl LineItem {
    /// Creates a blank row with form defaults: quantity 1, rate $0.00.
    pub fn new() -> Self {
        LineItem {
            id: Uuid::new_v4().to_string(),
            description: String::new(),
            quantity: 1,
            unit_rate_cents: 0,
        }
    }

    /// Builds a row from raw form fields, coercing leniently.
    pub fn from_input(description: &str, quantity: &str, unit_rate: &str) -> Self {
        LineItem {
            id: Uuid::new_v4().to_string(),
            description: description.to_string(),
            quantity: parse_quantity(quantity),
            unit_rate_cents: Money::parse_input(unit_rate).cents(),
        }
    }

    /// Returns the unit rate as Money.
    #[inline]
    pub fn unit_rate(&self) -> Money {
        Money::from_cents(self.unit_rate_cents)
    }

    /// Derived row amount (quantity × unit rate).
    #[inline]
    pub fn amount(&self) -> Money {
        self.unit_rate().multiply_quantity(self.quantity)
    }
}

impl Default for LineItem {
    fn default() -> Self {
        LineItem::new()
    }
}

/// Parses a user-entered quantity string, leniently.
///
/// Quantities are whole numbers; non-numeric or negative input coerces
/// to 0 (a zero row contributes nothing to the subtotal).
pub fn parse_quantity(input: &str) -> i64 {
    input
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|q| *q >= 0)
        .unwrap_or(0)
}

// =============================================================================
// Discount
// =============================================================================

/// Discount applied to the invoice subtotal.
///
/// Serialized as `{ "kind": ..., "value": ... }` to match the shape the
/// invoice form binds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Discount {
    /// Percentage of the subtotal, in basis points (825 = 8.25%).
    Percentage(u32),
    /// Fixed amount off, in cents.
    Fixed(Money),
}

impl Discount {
    /// No discount.
    pub const fn none() -> Self {
        Discount::Percentage(0)
    }

    /// Builds a percentage discount from a user-entered percent string
    /// ("10", "12.5"), coercing leniently.
    pub fn percentage_from_input(input: &str) -> Self {
        Discount::Percentage(TaxRate::parse_input(input).bps())
    }

    /// Builds a fixed discount from a user-entered amount string,
    /// coercing leniently.
    pub fn fixed_from_input(input: &str) -> Self {
        Discount::Fixed(Money::parse_input(input))
    }

    /// The discount amount for a given subtotal.
    ///
    /// Intentionally NOT clamped to the subtotal: the office uses
    /// over-subtotal fixed discounts as credit memos, and the resulting
    /// negative taxable amount flows through tax and total. Whether a
    /// negative invoice may actually be *sent* is policy, checked at
    /// finalize time.
    pub fn amount(&self, subtotal: Money) -> Money {
        match self {
            Discount::Percentage(bps) => subtotal.percentage_of(*bps),
            Discount::Fixed(amount) => *amount,
        }
    }
}

impl Default for Discount {
    fn default() -> Self {
        Discount::none()
    }
}

// =============================================================================
// Invoice Totals
// =============================================================================

/// Fully derived invoice totals. Never stored independently of the
/// inputs that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceTotals {
    pub subtotal_cents: i64,
    pub discount_cents: i64,
    pub taxable_cents: i64,
    pub tax_cents: i64,
    pub total_cents: i64,
}

impl InvoiceTotals {
    /// Grand total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

/// Computes invoice totals from line items, discount, and tax rate.
///
/// Pure and deterministic: identical inputs always produce identical
/// totals, and there are no error paths — all coercion happened when the
/// fields were parsed.
///
/// ## Example
/// ```rust
/// use rolloff_core::invoice::{compute_totals, Discount, LineItem};
/// use rolloff_core::types::TaxRate;
///
/// let items = vec![LineItem::from_input("20 Yard Dumpster", "1", "399.00")];
/// let totals = compute_totals(&items, &Discount::none(), TaxRate::from_bps(825));
///
/// assert_eq!(totals.subtotal_cents, 39900);
/// assert_eq!(totals.tax_cents, 3292); // $32.9175 rounds to $32.92
/// assert_eq!(totals.total_cents, 43192);
/// ```
pub fn compute_totals(items: &[LineItem], discount: &Discount, tax_rate: TaxRate) -> InvoiceTotals {
    let subtotal: Money = items
        .iter()
        .fold(Money::zero(), |acc, item| acc + item.amount());

    let discount_amount = discount.amount(subtotal);
    let taxable = subtotal - discount_amount;
    let tax = taxable.calculate_tax(tax_rate);
    let total = taxable + tax;

    InvoiceTotals {
        subtotal_cents: subtotal.cents(),
        discount_cents: discount_amount.cents(),
        taxable_cents: taxable.cents(),
        tax_cents: tax.cents(),
        total_cents: total.cents(),
    }
}

// =============================================================================
// Invoice Draft
// =============================================================================

/// The invoice being edited.
///
/// ## Invariants
/// - Owned by exactly one editing surface at a time (see rolloff-store)
/// - Line items are unique by `id`
/// - At most [`MAX_LINE_ITEMS`] rows, quantity capped at [`MAX_QUANTITY`]
/// - Items/discount/tax only mutate while status is `Draft`
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDraft {
    /// Draft ID (UUID v4).
    pub id: String,

    /// Customer being billed.
    pub customer_id: String,

    /// Job this invoice bills, when it bills a single job.
    pub job_id: Option<String>,

    pub status: InvoiceStatus,
    pub items: Vec<LineItem>,
    pub discount: Discount,

    /// Tax rate in basis points (825 = 8.25%).
    pub tax_rate_bps: u32,

    /// Free-form note printed on the invoice.
    pub notes: Option<String>,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl InvoiceDraft {
    /// Creates a new empty draft for a customer.
    pub fn new(customer_id: &str, tax_rate_bps: u32) -> Self {
        let now = Utc::now();
        InvoiceDraft {
            id: Uuid::new_v4().to_string(),
            customer_id: customer_id.to_string(),
            job_id: None,
            status: InvoiceStatus::Draft,
            items: Vec::new(),
            discount: Discount::none(),
            tax_rate_bps,
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns the tax rate.
    #[inline]
    pub fn tax_rate(&self) -> TaxRate {
        TaxRate::from_bps(self.tax_rate_bps)
    }

    /// Recomputes totals from current state.
    pub fn totals(&self) -> InvoiceTotals {
        compute_totals(&self.items, &self.discount, self.tax_rate())
    }

    fn ensure_editable(&self) -> CoreResult<()> {
        if self.status != InvoiceStatus::Draft {
            return Err(CoreError::InvalidInvoiceStatus {
                invoice_id: self.id.clone(),
                current_status: format!("{:?}", self.status),
            });
        }
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Adds a line item to the draft.
    ///
    /// ## Returns
    /// The id of the added row, for the form to focus.
    pub fn add_item(&mut self, item: LineItem) -> CoreResult<String> {
        self.ensure_editable()?;

        if self.items.len() >= MAX_LINE_ITEMS {
            return Err(CoreError::TooManyLineItems {
                max: MAX_LINE_ITEMS,
            });
        }
        if item.quantity > MAX_QUANTITY {
            return Err(CoreError::QuantityTooLarge {
                requested: item.quantity,
                max: MAX_QUANTITY,
            });
        }

        let id = item.id.clone();
        self.items.push(item);
        self.touch();
        Ok(id)
    }

    /// Adds a blank row with form defaults (quantity 1, rate $0.00).
    pub fn add_blank_item(&mut self) -> CoreResult<String> {
        self.add_item(LineItem::new())
    }

    /// Updates a row's description from a field edit.
    pub fn update_description(&mut self, item_id: &str, description: &str) -> CoreResult<()> {
        self.ensure_editable()?;
        let item = self.item_mut(item_id)?;
        item.description = description.to_string();
        self.touch();
        Ok(())
    }

    /// Updates a row's quantity from a raw field edit, coercing leniently.
    pub fn update_quantity(&mut self, item_id: &str, input: &str) -> CoreResult<()> {
        self.ensure_editable()?;
        let quantity = parse_quantity(input);
        if quantity > MAX_QUANTITY {
            return Err(CoreError::QuantityTooLarge {
                requested: quantity,
                max: MAX_QUANTITY,
            });
        }
        let item = self.item_mut(item_id)?;
        item.quantity = quantity;
        self.touch();
        Ok(())
    }

    /// Updates a row's unit rate from a raw field edit, coercing leniently.
    pub fn update_unit_rate(&mut self, item_id: &str, input: &str) -> CoreResult<()> {
        self.ensure_editable()?;
        let rate = Money::parse_input(input);
        let item = self.item_mut(item_id)?;
        item.unit_rate_cents = rate.cents();
        self.touch();
        Ok(())
    }

    /// Removes a row by id.
    pub fn remove_item(&mut self, item_id: &str) -> CoreResult<()> {
        self.ensure_editable()?;
        let before = self.items.len();
        self.items.retain(|i| i.id != item_id);
        if self.items.len() == before {
            return Err(CoreError::LineItemNotFound(item_id.to_string()));
        }
        self.touch();
        Ok(())
    }

    /// Removes every row.
    pub fn clear_items(&mut self) -> CoreResult<()> {
        self.ensure_editable()?;
        self.items.clear();
        self.touch();
        Ok(())
    }

    /// Sets the discount.
    pub fn set_discount(&mut self, discount: Discount) -> CoreResult<()> {
        self.ensure_editable()?;
        self.discount = discount;
        self.touch();
        Ok(())
    }

    /// Sets the tax rate from a raw percent field edit, coercing leniently.
    pub fn set_tax_rate_input(&mut self, input: &str) -> CoreResult<()> {
        self.ensure_editable()?;
        self.tax_rate_bps = TaxRate::parse_input(input).bps();
        self.touch();
        Ok(())
    }

    fn item_mut(&mut self, item_id: &str) -> CoreResult<&mut LineItem> {
        self.items
            .iter_mut()
            .find(|i| i.id == item_id)
            .ok_or_else(|| CoreError::LineItemNotFound(item_id.to_string()))
    }

    // -------------------------------------------------------------------------
    // Status transitions
    // -------------------------------------------------------------------------

    /// Finalizes the draft: Draft → Sent.
    ///
    /// Callers run [`crate::validation::validate_for_send`] first; this
    /// only enforces the status machine.
    pub fn send(&mut self) -> CoreResult<()> {
        self.ensure_editable()?;
        self.status = InvoiceStatus::Sent;
        self.touch();
        Ok(())
    }

    /// Records payment: Sent → Paid.
    pub fn mark_paid(&mut self) -> CoreResult<()> {
        if self.status != InvoiceStatus::Sent {
            return Err(CoreError::InvalidInvoiceStatus {
                invoice_id: self.id.clone(),
                current_status: format!("{:?}", self.status),
            });
        }
        self.status = InvoiceStatus::Paid;
        self.touch();
        Ok(())
    }

    /// Cancels the invoice: Draft or Sent → Voided.
    pub fn void(&mut self) -> CoreResult<()> {
        match self.status {
            InvoiceStatus::Draft | InvoiceStatus::Sent => {
                self.status = InvoiceStatus::Voided;
                self.touch();
                Ok(())
            }
            _ => Err(CoreError::InvalidInvoiceStatus {
                invoice_id: self.id.clone(),
                current_status: format!("{:?}", self.status),
            }),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
