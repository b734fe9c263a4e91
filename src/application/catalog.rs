use super::machine::VendingMachine;
use crate::domain::item::{Item, ItemId};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

/// One line of a catalog seed: an item as it is first loaded into a machine.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CatalogEntry {
    pub id: ItemId,
    pub name: String,
    pub price: Decimal,
    pub stock: u32,
}

impl CatalogEntry {
    pub fn new(id: ItemId, name: impl Into<String>, price: Decimal, stock: u32) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            stock,
        }
    }
}

impl From<CatalogEntry> for Item {
    fn from(entry: CatalogEntry) -> Self {
        Item::new(entry.id, entry.name, entry.price, entry.stock)
    }
}

/// The drinks a freshly installed machine is loaded with.
pub fn default_catalog() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new(1, "Coca-Cola", dec!(1000), 10),
        CatalogEntry::new(2, "Mineral water", dec!(650), 15),
        CatalogEntry::new(3, "Orange juice", dec!(1300), 8),
        CatalogEntry::new(4, "Coffee", dec!(500), 20),
        CatalogEntry::new(5, "Tea", dec!(450), 12),
    ]
}

/// Adds every entry to the machine in order. Returns the ids that were rejected
/// because they were already taken.
pub fn seed<I>(machine: &mut VendingMachine, entries: I) -> Vec<ItemId>
where
    I: IntoIterator<Item = CatalogEntry>,
{
    entries
        .into_iter()
        .filter_map(|entry| {
            let id = entry.id;
            (!machine.add_item(entry.into())).then_some(id)
        })
        .collect()
}
