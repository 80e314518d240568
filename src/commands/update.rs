use crate::commands::stats::InventoryStats;
use crate::commands::{helpers, CmdMessage, CmdResult, ItemPatch};
use crate::error::Result;
use crate::index::{self, ItemSelector};
use crate::store::DataStore;

pub fn run<S: DataStore>(
    store: &mut S,
    selector: &ItemSelector,
    patch: ItemPatch,
) -> Result<CmdResult> {
    let mut items = helpers::load_or_seed(store)?;
    let mut result = CmdResult::default();

    let Some(pos) = index::resolve(&items, selector) else {
        result.add_message(CmdMessage::warning(format!(
            "No item matches {}, nothing updated",
            selector
        )));
        return Ok(result);
    };

    let item = &mut items[pos];
    if let Some(name) = patch.name {
        item.name = name;
    }
    if let Some(sku) = patch.sku {
        item.sku = sku;
    }
    if let Some(category) = patch.category {
        item.category = category;
    }
    if let Some(quantity) = patch.quantity {
        item.quantity = quantity;
    }
    if let Some(price) = patch.price {
        item.price = price;
    }
    if let Some(location) = patch.location {
        item.location = location;
    }
    item.touch();
    let updated = item.clone();

    helpers::persist(store, &items);

    result.stats = Some(InventoryStats::compute(&items));
    result.add_message(CmdMessage::success(format!(
        "Updated {} ({})",
        updated.name, updated.sku
    )));
    result.affected_items.push(updated);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, ItemDraft};
    use crate::model::{Category, Status};
    use crate::store::memory::InMemoryStore;

    fn seeded_store() -> InMemoryStore {
        let mut store = InMemoryStore::new();
        add::run(
            &mut store,
            ItemDraft {
                name: "Barcode Scanner".into(),
                sku: "ELC-7".into(),
                category: Category::Electronics,
                quantity: 20,
                price: 55.0,
                location: "Aisle 1, Bin 2".into(),
            },
        )
        .unwrap();
        store
    }

    #[test]
    fn merges_fields_and_rederives_status() {
        let mut store = seeded_store();
        let patch = ItemPatch {
            quantity: Some(0),
            price: Some(49.5),
            ..ItemPatch::default()
        };
        let result = run(&mut store, &ItemSelector::Sku("elc-7".into()), patch).unwrap();

        let updated = &result.affected_items[0];
        assert_eq!(updated.quantity, 0);
        assert_eq!(updated.price, 49.5);
        assert_eq!(updated.status, Status::OutOfStock);
        // Untouched fields survive the merge.
        assert_eq!(updated.name, "Barcode Scanner");
    }

    #[test]
    fn quantity_falls_back_to_the_existing_value() {
        let mut store = seeded_store();
        let patch = ItemPatch {
            name: Some("Barcode Scanner v2".into()),
            ..ItemPatch::default()
        };
        let result = run(&mut store, &ItemSelector::Position(1), patch).unwrap();

        let updated = &result.affected_items[0];
        assert_eq!(updated.quantity, 20);
        assert_eq!(updated.status, Status::InStock);
    }

    #[test]
    fn unknown_selector_is_a_noop() {
        let mut store = seeded_store();
        let before = store.load_items().unwrap().unwrap();

        let patch = ItemPatch {
            quantity: Some(1),
            ..ItemPatch::default()
        };
        let result = run(&mut store, &ItemSelector::Sku("NOPE-404".into()), patch).unwrap();

        assert!(result.affected_items.is_empty());
        assert!(matches!(
            result.messages[0].level,
            crate::commands::MessageLevel::Warning
        ));
        let after = store.load_items().unwrap().unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn update_keeps_the_item_in_place() {
        let mut store = seeded_store();
        add::run(
            &mut store,
            ItemDraft {
                name: "Pallet Jack".into(),
                sku: "FRN-9".into(),
                category: Category::Furniture,
                quantity: 2,
                price: 300.0,
                location: "Dock".into(),
            },
        )
        .unwrap();

        // Update the second item; it must stay second.
        let patch = ItemPatch {
            quantity: Some(3),
            ..ItemPatch::default()
        };
        run(&mut store, &ItemSelector::Position(2), patch).unwrap();

        let items = store.load_items().unwrap().unwrap();
        assert_eq!(items[0].sku, "FRN-9");
        assert_eq!(items[1].sku, "ELC-7");
        assert_eq!(items[1].quantity, 3);
    }
}
