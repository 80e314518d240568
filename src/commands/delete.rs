use crate::commands::stats::InventoryStats;
use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::index::{self, ItemSelector};
use crate::store::DataStore;
use std::io::{self, Write};

pub fn run<S: DataStore>(
    store: &mut S,
    selectors: &[ItemSelector],
    skip_confirm: bool,
) -> Result<CmdResult> {
    let mut items = helpers::load_or_seed(store)?;
    let mut result = CmdResult::default();

    // 1. Resolve targets up front so the prompt can show what is about to go.
    let mut targets: Vec<usize> = Vec::new();
    for selector in selectors {
        match index::resolve(&items, selector) {
            Some(pos) => targets.push(pos),
            None => result.add_message(CmdMessage::warning(format!(
                "No item matches {}, skipping",
                selector
            ))),
        }
    }
    targets.sort_unstable();
    targets.dedup();

    if targets.is_empty() {
        result.add_message(CmdMessage::info("Nothing to delete."));
        return Ok(result);
    }

    // 2. Confirm
    if !skip_confirm {
        println!("Are you sure you want to delete:");
        for &pos in &targets {
            println!("  {} ({})", items[pos].name, items[pos].sku);
        }
        print!("[y/N] ");
        io::stdout().flush().map_err(ShelfError::Io)?;

        let mut input = String::new();
        io::stdin().read_line(&mut input).map_err(ShelfError::Io)?;

        let answer = input.trim().to_lowercase();
        if answer != "y" && answer != "yes" {
            result.add_message(CmdMessage::info("Operation cancelled."));
            return Ok(result);
        }
    }

    // 3. Delete, back to front so positions stay valid.
    for &pos in targets.iter().rev() {
        let item = items.remove(pos);
        result.add_message(CmdMessage::success(format!(
            "Deleted {} ({})",
            item.name, item.sku
        )));
        result.affected_items.push(item);
    }
    helpers::persist(store, &items);

    result.stats = Some(InventoryStats::compute(&items));
    Ok(result)
}
