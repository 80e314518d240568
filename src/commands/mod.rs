use crate::commands::stats::InventoryStats;
use crate::config::ShelfConfig;
use crate::index::DisplayItem;
use crate::model::{Category, Item};

pub mod add;
pub mod config;
pub mod delete;
pub mod helpers;
pub mod init;
pub mod list;
pub mod stats;
pub mod update;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// What a command hands back to the UI layer: data to render plus messages.
/// Mutating commands also attach freshly computed stats.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_items: Vec<Item>,
    pub listed_items: Vec<DisplayItem>,
    /// Size of the unfiltered list, for "Showing X of Y" footers.
    pub total_items: Option<usize>,
    pub stats: Option<InventoryStats>,
    pub config: Option<ShelfConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_items(mut self, items: Vec<DisplayItem>) -> Self {
        self.listed_items = items;
        self
    }

    pub fn with_total_items(mut self, total: usize) -> Self {
        self.total_items = Some(total);
        self
    }

    pub fn with_stats(mut self, stats: InventoryStats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_config(mut self, config: ShelfConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// A fully collected new-item form. The CLI boundary guarantees the string
/// fields are non-empty and the numbers non-negative before this exists.
#[derive(Debug, Clone)]
pub struct ItemDraft {
    pub name: String,
    pub sku: String,
    pub category: Category,
    pub quantity: u32,
    pub price: f64,
    pub location: String,
}

/// A partial edit. `None` fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub sku: Option<String>,
    pub category: Option<Category>,
    pub quantity: Option<u32>,
    pub price: Option<f64>,
    pub location: Option<String>,
}

impl ItemPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.sku.is_none()
            && self.category.is_none()
            && self.quantity.is_none()
            && self.price.is_none()
            && self.location.is_none()
    }
}
