use crate::commands::{helpers, CmdResult};
use crate::error::Result;
use crate::model::{Item, Status};
use crate::store::DataStore;

/// The dashboard summary, recomputed in full whenever the list changes.
/// Cheap at this scale, so no incremental bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InventoryStats {
    pub total_items: usize,
    pub total_value: f64,
    pub low_stock_count: usize,
    pub out_of_stock_count: usize,
}

impl InventoryStats {
    pub fn compute(items: &[Item]) -> Self {
        let mut stats = InventoryStats {
            total_items: items.len(),
            ..InventoryStats::default()
        };
        for item in items {
            stats.total_value += item.price * f64::from(item.quantity);
            match item.status {
                Status::LowStock => stats.low_stock_count += 1,
                Status::OutOfStock => stats.out_of_stock_count += 1,
                Status::InStock => {}
            }
        }
        stats
    }
}

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let items = helpers::load_or_seed(store)?;
    Ok(CmdResult::default().with_stats(InventoryStats::compute(&items)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use crate::store::memory::InMemoryStore;
    use crate::store::DataStore;

    fn item(quantity: u32, price: f64) -> Item {
        Item::new(
            format!("Item q{}", quantity),
            format!("SKU-{}", quantity),
            Category::Electronics,
            quantity,
            price,
            "Aisle 0".into(),
        )
    }

    #[test]
    fn empty_list_is_all_zeroes() {
        let stats = InventoryStats::compute(&[]);
        assert_eq!(stats.total_items, 0);
        assert_eq!(stats.total_value, 0.0);
        assert_eq!(stats.low_stock_count, 0);
        assert_eq!(stats.out_of_stock_count, 0);
    }

    #[test]
    fn aggregates_counts_and_value() {
        let items = vec![item(0, 10.0), item(5, 2.0), item(20, 3.0)];
        let stats = InventoryStats::compute(&items);

        assert_eq!(stats.total_items, 3);
        assert_eq!(stats.total_value, 70.0);
        assert_eq!(stats.low_stock_count, 1);
        assert_eq!(stats.out_of_stock_count, 1);
    }

    #[test]
    fn run_reports_over_the_persisted_list() {
        let mut store = InMemoryStore::new();
        store.save_items(&[item(0, 1.0), item(50, 2.0)]).unwrap();

        let result = run(&store).unwrap();
        let stats = result.stats.unwrap();
        assert_eq!(stats.total_items, 2);
        assert_eq!(stats.out_of_stock_count, 1);
        assert_eq!(stats.total_value, 100.0);
    }
}
