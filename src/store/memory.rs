use super::{decode_items, DataStore};
use crate::error::{Result, ShelfError};
use crate::model::Item;

/// In-memory store for tests: the serialized blob, nothing else.
///
/// Holding bytes rather than a `Vec<Item>` keeps the serialize/deserialize
/// contract under test, and [`InMemoryStore::with_raw`] lets tests plant
/// corrupt data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    blob: Option<Vec<u8>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-loaded with raw bytes, valid or not.
    pub fn with_raw(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            blob: Some(bytes.into()),
        }
    }

    /// Whether anything has been written.
    pub fn is_empty(&self) -> bool {
        self.blob.is_none()
    }
}

impl DataStore for InMemoryStore {
    fn load_items(&self) -> Result<Option<Vec<Item>>> {
        Ok(self.blob.as_deref().and_then(decode_items))
    }

    fn save_items(&mut self, items: &[Item]) -> Result<()> {
        self.blob = Some(serde_json::to_vec(items).map_err(ShelfError::Serialization)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Status};

    fn sample() -> Item {
        Item::new(
            "Label Printer".into(),
            "ELC-19".into(),
            Category::Electronics,
            5,
            79.00,
            "Aisle 1, Bin 9".into(),
        )
    }

    #[test]
    fn empty_store_loads_as_absent() {
        let store = InMemoryStore::new();
        assert!(store.load_items().unwrap().is_none());
    }

    #[test]
    fn saved_items_round_trip() {
        let mut store = InMemoryStore::new();
        let items = vec![sample()];
        store.save_items(&items).unwrap();
        assert_eq!(store.load_items().unwrap(), Some(items));
    }

    #[test]
    fn corrupt_blob_loads_as_absent() {
        let store = InMemoryStore::with_raw("{not json");
        assert!(store.load_items().unwrap().is_none());
    }

    #[test]
    fn empty_list_blob_loads_as_absent() {
        let store = InMemoryStore::with_raw("[]");
        assert!(store.load_items().unwrap().is_none());
    }

    #[test]
    fn load_corrects_a_stale_status() {
        let mut item = sample();
        item.status = Status::InStock; // lies: quantity is 5
        let store = InMemoryStore::with_raw(serde_json::to_vec(&vec![item]).unwrap());

        let loaded = store.load_items().unwrap().unwrap();
        assert_eq!(loaded[0].status, Status::LowStock);
    }
}
