//! # Shelf Architecture
//!
//! Shelf is a **UI-agnostic inventory library**. The CLI binary is a thin
//! client; everything it can do goes through the same layered core, and the
//! same core could sit behind a TUI or an HTTP handler without changes.
//!
//! ## The Layers
//!
//! ```text
//! CLI (main.rs + args.rs)
//!   parses arguments, renders tables, owns stdout/stderr/exit codes
//!        │
//! API ([`api::ShelfApi`])
//!   thin facade: parses selectors, dispatches to commands
//!        │
//! Commands (commands/*.rs)
//!   business logic on plain Rust types, returns [`commands::CmdResult`]
//!        │
//! Storage (store/)
//!   [`store::DataStore`] trait; FileStore in production, InMemoryStore in tests
//! ```
//!
//! ## The Inventory Model
//!
//! The whole inventory is one ordered list of [`model::Item`]s, newest first.
//! Each command loads the list, works on it in memory, and writes the full
//! list back; the persisted blob is always replaced wholesale, never patched.
//! When nothing usable is persisted (first run, unreadable file), commands
//! start from the bundled seed list in [`seed`].
//!
//! Two fields are derived, never set directly:
//! - `status` is recomputed from `quantity` on every create, update, and load
//!   (see [`model::Status::from_quantity`]), so a stored status can never
//!   disagree with its quantity.
//! - `last_updated` is stamped on create and refreshed on update.
//!
//! ## Failure Policy
//!
//! Persistence is best-effort by design: an unreadable blob falls back to the
//! seed list, and a failed write leaves the in-memory list authoritative for
//! the rest of the invocation. Both paths emit `tracing` warnings and neither
//! surfaces as a user-facing error. Commands asked to touch an item that does
//! not exist answer with a warning message, not an `Err`.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade all UI clients go through
//! - [`commands`]: one module per operation, plus shared result types
//! - [`store`]: storage trait and backends
//! - [`model`]: `Item`, `Category`, `Status`
//! - [`index`]: user-facing item selectors (list position or SKU)
//! - [`seed`]: the default item list for first runs
//! - [`config`]: display configuration
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod seed;
pub mod store;
