use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Quantities below this count as low stock; zero is out of stock.
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// The closed set of item categories.
///
/// Serialized with the human-facing labels ("Office Supplies", not
/// `OfficeSupplies`) so the persisted blob reads naturally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Furniture,
    #[serde(rename = "Office Supplies")]
    OfficeSupplies,
    Apparel,
    #[serde(rename = "Food & Beverage")]
    FoodAndBeverage,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Electronics,
        Category::Furniture,
        Category::OfficeSupplies,
        Category::Apparel,
        Category::FoodAndBeverage,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Furniture => "Furniture",
            Category::OfficeSupplies => "Office Supplies",
            Category::Apparel => "Apparel",
            Category::FoodAndBeverage => "Food & Beverage",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    /// Accepts the display label in any casing, plus dash/underscore forms
    /// that are easier to type (`office-supplies`, `food-and-beverage`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();
        match normalized.as_str() {
            "electronics" => Ok(Category::Electronics),
            "furniture" => Ok(Category::Furniture),
            "officesupplies" => Ok(Category::OfficeSupplies),
            "apparel" => Ok(Category::Apparel),
            "foodbeverage" | "foodandbeverage" => Ok(Category::FoodAndBeverage),
            _ => Err(format!(
                "Unknown category '{}'. Expected one of: {}",
                s,
                Category::ALL.map(|c| c.label()).join(", ")
            )),
        }
    }
}

/// Stock level classification, always derived from `quantity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "In Stock")]
    InStock,
    #[serde(rename = "Low Stock")]
    LowStock,
    #[serde(rename = "Out of Stock")]
    OutOfStock,
}

impl Status {
    pub fn from_quantity(quantity: u32) -> Self {
        match quantity {
            0 => Status::OutOfStock,
            q if q < LOW_STOCK_THRESHOLD => Status::LowStock,
            _ => Status::InStock,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Status::InStock => "In Stock",
            Status::LowStock => "Low Stock",
            Status::OutOfStock => "Out of Stock",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One inventory record.
///
/// `status` and `last_updated` are derived fields: construct items through
/// [`Item::new`] and mutate them through field assignment followed by
/// [`Item::touch`], and the two can never drift from `quantity`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: Uuid,
    pub name: String,
    pub sku: String,
    pub category: Category,
    pub quantity: u32,
    pub price: f64,
    pub location: String,
    pub last_updated: NaiveDate,
    pub status: Status,
}

impl Item {
    pub fn new(
        name: String,
        sku: String,
        category: Category,
        quantity: u32,
        price: f64,
        location: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            sku,
            category,
            quantity,
            price,
            location,
            last_updated: Utc::now().date_naive(),
            status: Status::from_quantity(quantity),
        }
    }

    /// Re-derive `status` from the current quantity and stamp `last_updated`.
    /// Call after any field mutation.
    pub fn touch(&mut self) {
        self.status = Status::from_quantity(self.quantity);
        self.last_updated = Utc::now().date_naive();
    }

    /// Re-derive `status` without touching `last_updated`. Used when loading
    /// persisted data, where a hand-edited blob may carry a stale status.
    pub fn normalize(&mut self) {
        self.status = Status::from_quantity(self.quantity);
    }
}
