use crate::domain::item::ItemId;
use crate::domain::transaction::{TransactionRecord, TxId};
use crate::error::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

/// Flat CSV shape of a transaction record.
#[derive(Debug, Serialize)]
struct LedgerRow<'a> {
    id: TxId,
    item_id: Option<ItemId>,
    item_name: Option<&'a str>,
    price: Option<Decimal>,
    tendered: Decimal,
    change: Decimal,
    timestamp: String,
    success: bool,
}

impl LedgerRow<'_> {
    const HEADER: [&'static str; 8] = [
        "id",
        "item_id",
        "item_name",
        "price",
        "tendered",
        "change",
        "timestamp",
        "success",
    ];
}

impl<'a> From<&'a TransactionRecord> for LedgerRow<'a> {
    fn from(record: &'a TransactionRecord) -> Self {
        let item = record.item();
        Self {
            id: record.id(),
            item_id: item.map(|i| i.id),
            item_name: item.map(|i| i.name.as_str()),
            price: item.map(|i| i.price),
            tendered: record.tendered().normalize(),
            change: record.change().normalize(),
            timestamp: record.timestamp().format("%Y-%m-%dT%H:%M:%S").to_string(),
            success: record.is_success(),
        }
    }
}

/// Writes transaction records as CSV under a header row.
///
/// The header is written once per writer, even for an empty ledger.
pub struct LedgerWriter<W: Write> {
    writer: csv::Writer<W>,
    header_written: bool,
}

impl<W: Write> LedgerWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(sink),
            header_written: false,
        }
    }

    pub fn write_records<'a, I>(&mut self, records: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a TransactionRecord>,
    {
        if !self.header_written {
            self.writer.write_record(LedgerRow::HEADER)?;
            self.header_written = true;
        }
        for record in records {
            self.writer.serialize(LedgerRow::from(record))?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
