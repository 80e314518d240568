use super::{decode_items, DataStore};
use crate::error::{Result, ShelfError};
use crate::model::Item;
use std::fs;
use std::path::{Path, PathBuf};

const ITEMS_FILENAME: &str = "items.json";

/// File-backed store: the whole inventory as one pretty-printed JSON file
/// under the data directory.
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn items_path(&self) -> PathBuf {
        self.data_dir.join(ITEMS_FILENAME)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.data_dir.exists() {
            fs::create_dir_all(&self.data_dir).map_err(ShelfError::Io)?;
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load_items(&self) -> Result<Option<Vec<Item>>> {
        let path = self.items_path();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no inventory file yet");
            return Ok(None);
        }
        let bytes = fs::read(&path).map_err(ShelfError::Io)?;
        Ok(decode_items(&bytes))
    }

    fn save_items(&mut self, items: &[Item]) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(items).map_err(ShelfError::Serialization)?;
        fs::write(self.items_path(), content).map_err(ShelfError::Io)?;
        tracing::debug!(count = items.len(), "inventory saved");
        Ok(())
    }
}
