use crate::application::catalog::CatalogEntry;
use crate::error::{Result, VendingError};
use rust_decimal::Decimal;
use std::io::Read;

/// Reads catalog entries (`id,name,price,stock`) from a CSV source.
///
/// Whitespace around fields is trimmed. Rows with a negative price are rejected
/// here, before they can reach a machine.
pub struct CatalogReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CatalogReader<R> {
    /// Creates a new `CatalogReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and validates entries.
    pub fn entries(self) -> impl Iterator<Item = Result<CatalogEntry>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(VendingError::from).and_then(validate))
    }
}

fn validate(entry: CatalogEntry) -> Result<CatalogEntry> {
    if entry.price < Decimal::ZERO {
        return Err(VendingError::InvalidCatalog(format!(
            "item {} has a negative price ({})",
            entry.id, entry.price
        )));
    }
    Ok(entry)
}
