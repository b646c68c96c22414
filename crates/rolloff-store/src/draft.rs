//! # Draft State
//!
//! Holds the invoice draft currently open in the editor.
//!
//! ## Thread Safety
//! The draft is wrapped in `Arc<Mutex<T>>` because shell callbacks can
//! run concurrently while exactly one of them should mutate the draft
//! at a time. Each draft is edited by exactly one editor surface; this
//! mutex is about callback interleaving, not multi-user concurrency.

use std::sync::{Arc, Mutex};

use tracing::debug;

use rolloff_core::InvoiceDraft;

/// The invoice draft currently being edited, if any.
#[derive(Debug, Clone, Default)]
pub struct DraftState {
    draft: Arc<Mutex<Option<InvoiceDraft>>>,
}

impl DraftState {
    /// Creates an empty state: no draft open.
    pub fn new() -> Self {
        DraftState {
            draft: Arc::new(Mutex::new(None)),
        }
    }

    /// Opens a draft for editing, replacing any previously open one.
    pub fn open(&self, draft: InvoiceDraft) {
        debug!(draft_id = %draft.id, "draft opened");
        *self.draft.lock().expect("draft mutex poisoned") = Some(draft);
    }

    /// Closes the editor, dropping the draft.
    pub fn close(&self) {
        debug!("draft closed");
        *self.draft.lock().expect("draft mutex poisoned") = None;
    }

    /// Whether a draft is currently open.
    pub fn is_open(&self) -> bool {
        self.draft.lock().expect("draft mutex poisoned").is_some()
    }

    /// Executes a function with read access to the open draft.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let totals = draft_state.with_draft(|d| d.totals());
    /// ```
    pub fn with_draft<F, R>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&InvoiceDraft) -> R,
    {
        let guard = self.draft.lock().expect("draft mutex poisoned");
        guard.as_ref().map(f)
    }

    /// Executes a function with write access to the open draft.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// draft_state.with_draft_mut(|d| d.update_quantity(&id, "2"))?;
    /// ```
    pub fn with_draft_mut<F, R>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&mut InvoiceDraft) -> R,
    {
        let mut guard = self.draft.lock().expect("draft mutex poisoned");
        guard.as_mut().map(f)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rolloff_core::LineItem;

    #[test]
    fn test_open_edit_close() {
        let state = DraftState::new();
        assert!(!state.is_open());
        assert!(state.with_draft(|d| d.totals()).is_none());

        state.open(InvoiceDraft::new("cust-1", 825));
        assert!(state.is_open());

        state
            .with_draft_mut(|d| d.add_item(LineItem::from_input("20 Yard Dumpster", "1", "399.00")))
            .unwrap()
            .unwrap();

        let totals = state.with_draft(|d| d.totals()).unwrap();
        assert_eq!(totals.subtotal_cents, 39900);

        state.close();
        assert!(!state.is_open());
    }

    #[test]
    fn test_open_replaces_previous_draft() {
        let state = DraftState::new();
        state.open(InvoiceDraft::new("cust-1", 825));
        let first_id = state.with_draft(|d| d.id.clone()).unwrap();

        state.open(InvoiceDraft::new("cust-2", 825));
        let second_id = state.with_draft(|d| d.id.clone()).unwrap();
        assert_ne!(first_id, second_id);
    }
}
