use crate::commands::{helpers, CmdResult};
use crate::error::Result;
use crate::index::{index_items, DisplayItem};
use crate::model::{Category, Item};
use crate::store::DataStore;

/// The visible subset of the inventory: an optional free-text term matched
/// against names and SKUs, and an optional category. Both default to
/// "everything".
#[derive(Debug, Clone, Default)]
pub struct ItemFilter {
    pub search: Option<String>,
    pub category: Option<Category>,
}

impl ItemFilter {
    pub fn matches(&self, item: &Item) -> bool {
        let matches_search = match self.search.as_deref() {
            Some(term) if !term.is_empty() => {
                let term = term.to_lowercase();
                item.name.to_lowercase().contains(&term)
                    || item.sku.to_lowercase().contains(&term)
            }
            _ => true,
        };
        let matches_category = self.category.map_or(true, |c| item.category == c);
        matches_search && matches_category
    }
}

/// Apply the filter, preserving stored order and positions.
pub fn apply_filter(indexed: Vec<DisplayItem>, filter: &ItemFilter) -> Vec<DisplayItem> {
    indexed
        .into_iter()
        .filter(|di| filter.matches(&di.item))
        .collect()
}

pub fn run<S: DataStore>(store: &S, filter: &ItemFilter) -> Result<CmdResult> {
    let items = helpers::load_or_seed(store)?;
    let total = items.len();
    let visible = apply_filter(index_items(&items), filter);
    Ok(CmdResult::default()
        .with_listed_items(visible)
        .with_total_items(total))
}
