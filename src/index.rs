//! User-facing item addressing.
//!
//! `list` shows each item with its 1-based position in the stored order
//! (newest first). Commands that target an item accept either that position
//! or a SKU; positions always resolve against the full, unfiltered list so a
//! filtered listing never shifts what `3` means.

use crate::model::Item;
use std::fmt;
use std::str::FromStr;

/// How a user names an item on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemSelector {
    /// 1-based position in the stored list, as printed by `list`.
    Position(usize),
    /// A SKU, matched case-insensitively.
    Sku(String),
}

impl fmt::Display for ItemSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemSelector::Position(n) => write!(f, "#{}", n),
            ItemSelector::Sku(sku) => write!(f, "'{}'", sku),
        }
    }
}

impl FromStr for ItemSelector {
    type Err = String;

    /// Digits parse as a position; anything else non-empty is taken as a SKU.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("empty item selector".to_string());
        }
        if let Ok(n) = s.parse::<usize>() {
            if n == 0 {
                return Err("item positions start at 1".to_string());
            }
            return Ok(ItemSelector::Position(n));
        }
        Ok(ItemSelector::Sku(s.to_string()))
    }
}

/// An item paired with its stored position, for display.
#[derive(Debug, Clone)]
pub struct DisplayItem {
    pub position: usize,
    pub item: Item,
}

/// Assign 1-based positions in stored order.
pub fn index_items(items: &[Item]) -> Vec<DisplayItem> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| DisplayItem {
            position: i + 1,
            item: item.clone(),
        })
        .collect()
}

/// Resolve a selector to an index into `items`, or `None` when nothing
/// matches. The first SKU match wins when duplicates exist.
pub fn resolve(items: &[Item], selector: &ItemSelector) -> Option<usize> {
    match selector {
        ItemSelector::Position(pos) => {
            if *pos >= 1 && *pos <= items.len() {
                Some(pos - 1)
            } else {
                None
            }
        }
        ItemSelector::Sku(sku) => items.iter().position(|i| i.sku.eq_ignore_ascii_case(sku)),
    }
}
