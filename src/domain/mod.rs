//! Domain model of the vending machine: money, items, records and the sales ledger.

pub mod item;
pub mod ledger;
pub mod ports;
pub mod transaction;
pub mod wallet;
