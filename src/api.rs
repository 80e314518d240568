//! # API Facade
//!
//! The single entry point for all shelf operations. A thin layer: it parses
//! selectors coming in as raw strings, dispatches to the command layer, and
//! returns structured [`CmdResult`]s. No business logic, no terminal I/O.
//!
//! `ShelfApi<S: DataStore>` is generic over the storage backend:
//! `ShelfApi<FileStore>` in production, `ShelfApi<InMemoryStore>` in tests.

use crate::commands;
use crate::error::{Result, ShelfError};
use crate::index::ItemSelector;
use crate::store::DataStore;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub struct ShelfApi<S: DataStore> {
    store: S,
    data_dir: PathBuf,
}

impl<S: DataStore> ShelfApi<S> {
    pub fn new(store: S, data_dir: PathBuf) -> Self {
        Self { store, data_dir }
    }

    pub fn add_item(&mut self, draft: commands::ItemDraft) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, draft)
    }

    pub fn update_item(
        &mut self,
        selector: &str,
        patch: commands::ItemPatch,
    ) -> Result<commands::CmdResult> {
        let selector = parse_selector(selector)?;
        commands::update::run(&mut self.store, &selector, patch)
    }

    pub fn delete_items<I: AsRef<str>>(
        &mut self,
        selectors: &[I],
        skip_confirm: bool,
    ) -> Result<commands::CmdResult> {
        let selectors = selectors
            .iter()
            .map(|s| parse_selector(s.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        commands::delete::run(&mut self.store, &selectors, skip_confirm)
    }

    pub fn list_items(&self, filter: commands::list::ItemFilter) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, &filter)
    }

    pub fn stats(&self) -> Result<commands::CmdResult> {
        commands::stats::run(&self.store)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.data_dir, action)
    }

    pub fn init(&self) -> Result<commands::CmdResult> {
        commands::init::run(&self.data_dir)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

fn parse_selector(input: &str) -> Result<ItemSelector> {
    ItemSelector::from_str(input).map_err(ShelfError::Api)
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::list::ItemFilter;
pub use commands::{CmdMessage, CmdResult, ItemDraft, ItemPatch, MessageLevel};
