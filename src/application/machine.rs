use crate::domain::item::{Item, ItemId, ItemRef};
use crate::domain::ledger::Ledger;
use crate::domain::transaction::TransactionRecord;
use crate::domain::wallet::Wallet;
use crate::error::{Result, ensure_non_negative};
use rust_decimal::Decimal;

/// The vending machine and its purchase engine.
///
/// `VendingMachine` owns the catalog, the cash register and the sales ledger.
/// Every operation completes synchronously and reports its outcome as a value;
/// the machine never logs or prints.
#[derive(Default)]
pub struct VendingMachine {
    items: Vec<Item>,
    register: Wallet,
    ledger: Ledger,
}

impl VendingMachine {
    /// Creates an empty machine with its own ledger.
    ///
    /// Record ids are then unique per machine only; build machines through
    /// [`with_ledger`](Self::with_ledger) with one shared `SharedSequence` to number
    /// records across machines.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty machine recording sales into `ledger`.
    pub fn with_ledger(ledger: Ledger) -> Self {
        Self {
            items: Vec::new(),
            register: Wallet::new(),
            ledger,
        }
    }

    /// Adds an item to the catalog. Returns `false` if its id is already taken.
    pub fn add_item(&mut self, item: Item) -> bool {
        if self.find_item(item.id()).is_some() {
            return false;
        }
        self.items.push(item);
        true
    }

    pub fn find_item(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id() == id)
    }

    fn find_item_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    /// Items with at least one unit in stock, in catalog order.
    pub fn list_available(&self) -> Vec<&Item> {
        self.items.iter().filter(|item| item.is_available()).collect()
    }

    /// Every item, in catalog order.
    pub fn list_all(&self) -> Vec<&Item> {
        self.items.iter().collect()
    }

    /// Sells one unit of `id` for the `tendered` amount.
    ///
    /// A negative amount is rejected with [`VendingError::InvalidAmount`]. Any other
    /// failure (unknown item, out of stock, underpayment) is returned as an
    /// unsuccessful record whose change is the whole tendered amount; nothing else
    /// moves. On success the item loses one unit, the register gains the price and
    /// the record is appended to the ledger.
    ///
    /// [`VendingError::InvalidAmount`]: crate::error::VendingError::InvalidAmount
    pub fn purchase(&mut self, id: ItemId, tendered: Decimal) -> Result<TransactionRecord> {
        let tendered = ensure_non_negative(tendered)?;

        let Some(item) = self.items.iter_mut().find(|item| item.id() == id) else {
            return Ok(self.ledger.record(None, tendered, tendered, false));
        };

        let snapshot = ItemRef::from(&*item);
        if !item.is_available() || tendered < item.price() {
            return Ok(self.ledger.record(Some(snapshot), tendered, tendered, false));
        }

        let price = item.price();
        // A negative price or a full register is refused here, before the item is touched.
        self.register.deposit(price)?;
        item.decrement_stock();
        let change = tendered - price;

        let record = self.ledger.record(Some(snapshot), tendered, change, true);
        self.ledger.append(record.clone());
        Ok(record)
    }

    /// Adds `quantity` units to an item. Returns `false` for a non-positive quantity
    /// or an unknown id.
    pub fn restock(&mut self, id: ItemId, quantity: i64) -> bool {
        if quantity <= 0 {
            return false;
        }
        let Some(item) = self.find_item_mut(id) else {
            return false;
        };
        let Some(stock) = i64::from(item.stock()).checked_add(quantity) else {
            return false;
        };
        let before = item.stock();
        item.set_stock(stock);
        item.stock() != before
    }

    /// Empties the register, returning exactly the amount removed.
    pub fn collect_funds(&mut self) -> Decimal {
        let amount = self.register.balance();
        self.register.reset();
        amount
    }

    pub fn register_balance(&self) -> Decimal {
        self.register.balance()
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }
}
