//! The default item list, used whenever no usable inventory is persisted.

use crate::model::{Category, Item};

/// Build the seed inventory. Fresh ids and dates on every call.
pub fn default_items() -> Vec<Item> {
    vec![
        Item::new(
            "Wireless Keyboard".into(),
            "ELC-1001".into(),
            Category::Electronics,
            42,
            29.99,
            "Aisle 1, Bin 3".into(),
        ),
        Item::new(
            "LED Monitor 27in".into(),
            "ELC-1002".into(),
            Category::Electronics,
            7,
            189.50,
            "Aisle 1, Bin 7".into(),
        ),
        Item::new(
            "Standing Desk".into(),
            "FRN-2001".into(),
            Category::Furniture,
            12,
            349.00,
            "Aisle 4, Bin 2".into(),
        ),
        Item::new(
            "Ergonomic Chair".into(),
            "FRN-2002".into(),
            Category::Furniture,
            0,
            229.99,
            "Aisle 4, Bin 5".into(),
        ),
        Item::new(
            "Copy Paper 500ct".into(),
            "OFF-3001".into(),
            Category::OfficeSupplies,
            240,
            6.49,
            "Aisle 2, Bin 1".into(),
        ),
        Item::new(
            "Hi-Vis Vest".into(),
            "APP-4001".into(),
            Category::Apparel,
            3,
            12.75,
            "Aisle 6, Bin 4".into(),
        ),
        Item::new(
            "Cold Brew Concentrate".into(),
            "FNB-5001".into(),
            Category::FoodAndBeverage,
            18,
            9.25,
            "Aisle 8, Bin 2".into(),
        ),
    ]
}
