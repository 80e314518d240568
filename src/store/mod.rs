//! # Storage Layer
//!
//! The whole inventory lives under a single entry: one serialized JSON list.
//! [`DataStore`] abstracts where that entry lives so the command layer never
//! touches the filesystem directly.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, `items.json` in the data directory
//! - [`memory::InMemoryStore`]: test storage, the blob held in memory (and
//!   poisonable with arbitrary bytes to exercise the corrupt-data path)
//!
//! ## Load Tolerance
//!
//! `load_items` answers `Ok(None)` for "nothing usable here": the entry is
//! absent, it does not parse, or it parses to an empty list. All three cases
//! leave the caller on the seed list, and the unusable ones are logged rather
//! than propagated. Loaded items are normalized so a stored `status` that
//! disagrees with its `quantity` is corrected before anything sees it.

use crate::error::Result;
use crate::model::Item;

pub mod fs;
pub mod memory;

/// Abstract interface for the persisted inventory list.
pub trait DataStore {
    /// Load the full item list, or `None` when no usable data is persisted.
    fn load_items(&self) -> Result<Option<Vec<Item>>>;

    /// Replace the persisted list wholesale.
    fn save_items(&mut self, items: &[Item]) -> Result<()>;
}

/// Shared decode policy for both backends: parse failures and empty lists are
/// demoted to `None` with a warning, never an error.
pub(crate) fn decode_items(bytes: &[u8]) -> Option<Vec<Item>> {
    match serde_json::from_slice::<Vec<Item>>(bytes) {
        Ok(items) if !items.is_empty() => Some(
            items
                .into_iter()
                .map(|mut item| {
                    item.normalize();
                    item
                })
                .collect(),
        ),
        Ok(_) => {
            tracing::warn!("persisted inventory is an empty list, treating as absent");
            None
        }
        Err(err) => {
            tracing::warn!(%err, "persisted inventory is unreadable, treating as absent");
            None
        }
    }
}
