use crate::commands::stats::InventoryStats;
use crate::commands::{helpers, CmdMessage, CmdResult, ItemDraft};
use crate::error::Result;
use crate::model::Item;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, draft: ItemDraft) -> Result<CmdResult> {
    let mut items = helpers::load_or_seed(store)?;

    let item = Item::new(
        draft.name,
        draft.sku,
        draft.category,
        draft.quantity,
        draft.price,
        draft.location,
    );

    // Newest first.
    items.insert(0, item.clone());
    helpers::persist(store, &items);

    let mut result = CmdResult::default().with_stats(InventoryStats::compute(&items));
    result.add_message(CmdMessage::success(format!(
        "Added {} ({})",
        item.name, item.sku
    )));
    result.affected_items.push(item);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Status};
    use crate::store::memory::InMemoryStore;

    fn draft(name: &str, sku: &str, quantity: u32) -> ItemDraft {
        ItemDraft {
            name: name.into(),
            sku: sku.into(),
            category: Category::Electronics,
            quantity,
            price: 10.0,
            location: "Aisle 1".into(),
        }
    }

    #[test]
    fn prepends_the_new_item() {
        let mut store = InMemoryStore::new();
        run(&mut store, draft("First", "SKU-1", 5)).unwrap();
        run(&mut store, draft("Second", "SKU-2", 5)).unwrap();

        let items = store.load_items().unwrap().unwrap();
        assert_eq!(items[0].name, "Second");
        assert_eq!(items[1].name, "First");
    }

    #[test]
    fn assigns_a_fresh_unique_id() {
        let mut store = InMemoryStore::new();
        run(&mut store, draft("A", "SKU-1", 5)).unwrap();
        run(&mut store, draft("B", "SKU-2", 5)).unwrap();

        let items = store.load_items().unwrap().unwrap();
        let ids: Vec<_> = items.iter().map(|i| i.id).collect();
        let mut deduped = ids.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
        assert!(ids.iter().all(|id| !id.is_nil()));
    }

    #[test]
    fn derives_status_from_the_supplied_quantity() {
        let mut store = InMemoryStore::new();
        let out = run(&mut store, draft("Empty", "SKU-0", 0)).unwrap();
        assert_eq!(out.affected_items[0].status, Status::OutOfStock);

        let low = run(&mut store, draft("Low", "SKU-5", 5)).unwrap();
        assert_eq!(low.affected_items[0].status, Status::LowStock);

        let full = run(&mut store, draft("Full", "SKU-50", 50)).unwrap();
        assert_eq!(full.affected_items[0].status, Status::InStock);
    }

    #[test]
    fn first_add_lands_on_top_of_the_seed_list() {
        let mut store = InMemoryStore::new();
        run(&mut store, draft("A", "SKU-1", 0)).unwrap();
        let result = run(&mut store, draft("B", "SKU-2", 4)).unwrap();

        let stats = result.stats.unwrap();
        assert_eq!(stats.total_items, crate::seed::default_items().len() + 2);
        assert!(stats.out_of_stock_count >= 1);
    }
}
