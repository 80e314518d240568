use shelf::model::{Category, Item};
use shelf::store::fs::FileStore;
use shelf::store::DataStore;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FileStore) {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().to_path_buf());
    (dir, store)
}

fn sample_items() -> Vec<Item> {
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
            "Hi-Vis Vest".into(),
            "APP-4001".into(),
            Category::Apparel,
            3,
            12.75,
            "Aisle 6, Bin 4".into(),
        ),
        Item::new(
            "Ergonomic Chair".into(),
            "FRN-2002".into(),
            Category::Furniture,
            0,
            229.99,
            "Aisle 4, Bin 5".into(),
        ),
    ]
}

#[test]
fn round_trips_a_saved_list() {
    let (_dir, mut store) = setup();
    let items = sample_items();

    store.save_items(&items).unwrap();
    let loaded = store.load_items().unwrap().unwrap();

    assert_eq!(loaded, items);
}

#[test]
fn missing_file_loads_as_absent() {
    let (_dir, store) = setup();
    assert!(store.load_items().unwrap().is_none());
}

#[test]
fn corrupt_blob_loads_as_absent() {
    let (dir, store) = setup();
    fs::write(dir.path().join("items.json"), "{definitely not json").unwrap();

    assert!(store.load_items().unwrap().is_none());
}

#[test]
fn wrong_shape_loads_as_absent() {
    let (dir, store) = setup();
    fs::write(dir.path().join("items.json"), r#"{"items": []}"#).unwrap();

    assert!(store.load_items().unwrap().is_none());
}

#[test]
fn empty_list_loads_as_absent() {
    let (dir, store) = setup();
    fs::write(dir.path().join("items.json"), "[]").unwrap();

    assert!(store.load_items().unwrap().is_none());
}

#[test]
fn load_rederives_status_from_quantity() {
    let (dir, store) = setup();
    // A hand-edited blob whose status disagrees with its quantity.
    let blob = r#"[{
        "id": "7c9e6679-7425-40de-944b-e07fc1f90ae7",
        "name": "Desk Lamp",
        "sku": "ELC-3",
        "category": "Electronics",
        "quantity": 0,
        "price": 19.99,
        "location": "Aisle 1, Bin 2",
        "last_updated": "2026-03-01",
        "status": "In Stock"
    }]"#;
    fs::write(dir.path().join("items.json"), blob).unwrap();

    let loaded = store.load_items().unwrap().unwrap();
    assert_eq!(loaded[0].status, shelf::model::Status::OutOfStock);
    assert_eq!(loaded[0].quantity, 0);
}

#[test]
fn save_creates_the_data_dir() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("state").join("shelf");
    let mut store = FileStore::new(nested.clone());

    store.save_items(&sample_items()).unwrap();

    assert!(nested.join("items.json").exists());
}

#[test]
fn save_replaces_the_list_wholesale() {
    let (_dir, mut store) = setup();
    store.save_items(&sample_items()).unwrap();

    let shorter = vec![sample_items().remove(0)];
    store.save_items(&shorter).unwrap();

    let loaded = store.load_items().unwrap().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].sku, "ELC-1001");
}
