use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Catalog identifier, unique within a machine.
pub type ItemId = u32;

/// A catalog entry: a priced product and the number of units left in the machine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    name: String,
    price: Decimal,
    stock: u32,
}

impl Item {
    /// Builds an item as given. The price is not validated here.
    pub fn new(id: ItemId, name: impl Into<String>, price: Decimal, stock: u32) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            stock,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn stock(&self) -> u32 {
        self.stock
    }

    /// Overwrites the stock count. Negative or out-of-range requests are ignored.
    pub fn set_stock(&mut self, quantity: i64) {
        if let Ok(quantity) = u32::try_from(quantity) {
            self.stock = quantity;
        }
    }

    pub fn is_available(&self) -> bool {
        self.stock > 0
    }

    /// Takes one unit out of stock. Returns `false` when nothing is left.
    pub fn decrement_stock(&mut self) -> bool {
        if self.is_available() {
            self.stock -= 1;
            true
        } else {
            false
        }
    }
}

/// Identity of an item as it was when a transaction was recorded.
///
/// Records keep this snapshot rather than the item itself, so the catalog entry
/// can keep changing without affecting history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRef {
    pub id: ItemId,
    pub name: String,
    pub price: Decimal,
}

impl From<&Item> for ItemRef {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            price: item.price,
        }
    }
}
