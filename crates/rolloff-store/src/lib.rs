//! # rolloff-store: In-Process State Holders
//!
//! The mutable state behind the dashboard shell: the invoice draft being
//! edited, the authenticated session, and company configuration. All of
//! it is single-process; persistence and rendering are someone else's
//! job.
//!
//! ## Modules
//!
//! - [`draft`] - the currently open invoice draft
//! - [`session`] - `SessionStore` capability + in-memory implementation
//! - [`config`] - company configuration
//!
//! ## Integration Test
//!
//! `tests/invoice_flow.rs` drives a full office workflow — login, draft
//! an invoice, validate, send — through this crate's public surface.

pub mod config;
pub mod draft;
pub mod session;

pub use config::ConfigState;
pub use draft::DraftState;
pub use session::{InMemorySessionStore, SessionStore};
