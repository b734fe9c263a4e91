//! Text rendering of items and records for the command shell.

use crate::domain::item::Item;
use crate::domain::transaction::TransactionRecord;
use rust_decimal::Decimal;

/// Renders an amount without trailing zeros, so integral values carry no decimals.
pub fn amount(value: Decimal) -> String {
    value.normalize().to_string()
}

pub fn item(item: &Item, currency: &str) -> String {
    format!(
        "{} - {} - {} {} (Stock: {})",
        item.id(),
        item.name(),
        amount(item.price()),
        currency,
        item.stock()
    )
}

pub fn record(record: &TransactionRecord, currency: &str) -> String {
    format!(
        "Transaction #{} - Item: {} - Tendered: {} {currency} - Change: {} {currency} - Date: {} - Success: {}",
        record.id(),
        record.item().map_or("N/A", |i| i.name.as_str()),
        amount(record.tendered()),
        amount(record.change()),
        record.timestamp().format("%Y-%m-%d %H:%M:%S"),
        if record.is_success() { "yes" } else { "no" }
    )
}
