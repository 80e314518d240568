use crate::error::Result;
use crate::model::Item;
use crate::seed;
use crate::store::DataStore;

/// Load the inventory, falling back to the seed list when nothing usable is
/// persisted. Read failures are logged and absorbed here; no command ever
/// fails because the blob could not be read.
pub fn load_or_seed<S: DataStore>(store: &S) -> Result<Vec<Item>> {
    match store.load_items() {
        Ok(Some(items)) => Ok(items),
        Ok(None) => Ok(seed::default_items()),
        Err(err) => {
            tracing::warn!(%err, "could not read inventory, starting from the seed list");
            Ok(seed::default_items())
        }
    }
}

/// Persist the full list. A failed write is logged and swallowed; the
/// in-memory list stays authoritative for the rest of the invocation.
pub fn persist<S: DataStore>(store: &mut S, items: &[Item]) {
    if let Err(err) = store.save_items(items) {
        tracing::warn!(%err, "could not persist inventory, keeping in-memory state");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn seeds_an_empty_store() {
        let store = InMemoryStore::new();
        let items = load_or_seed(&store).unwrap();
        assert_eq!(items.len(), seed::default_items().len());
    }

    #[test]
    fn seeds_past_a_corrupt_blob() {
        let store = InMemoryStore::with_raw("][ nonsense");
        let items = load_or_seed(&store).unwrap();
        assert!(!items.is_empty());
    }

    #[test]
    fn returns_persisted_items_when_present() {
        let mut store = InMemoryStore::new();
        let items = seed::default_items();
        persist(&mut store, &items[..2]);

        let loaded = load_or_seed(&store).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].sku, items[0].sku);
    }
}
