use super::item::ItemRef;
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::Serialize;

/// Sequence number of a transaction record.
pub type TxId = u64;

/// Immutable record of one purchase attempt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionRecord {
    id: TxId,
    item: Option<ItemRef>,
    tendered: Decimal,
    change: Decimal,
    timestamp: NaiveDateTime,
    success: bool,
}

impl TransactionRecord {
    pub fn new(
        id: TxId,
        item: Option<ItemRef>,
        tendered: Decimal,
        change: Decimal,
        timestamp: NaiveDateTime,
        success: bool,
    ) -> Self {
        Self {
            id,
            item,
            tendered,
            change,
            timestamp,
            success,
        }
    }

    pub fn id(&self) -> TxId {
        self.id
    }

    /// The item the attempt named, or `None` when the id was unknown.
    pub fn item(&self) -> Option<&ItemRef> {
        self.item.as_ref()
    }

    pub fn tendered(&self) -> Decimal {
        self.tendered
    }

    pub fn change(&self) -> Decimal {
        self.change
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Amount this record adds to revenue: the item price for a success, zero otherwise.
    pub fn revenue(&self) -> Decimal {
        match (&self.item, self.success) {
            (Some(item), true) => item.price,
            _ => Decimal::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn at(date: &str) -> NaiveDateTime {
        NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap()
    }

    fn cola() -> ItemRef {
        ItemRef {
            id: 1,
            name: "Cola".to_string(),
            price: dec!(1000),
        }
    }

    #[test]
    fn test_record_accessors() {
        let record = TransactionRecord::new(
            7,
            Some(cola()),
            dec!(1500),
            dec!(500),
            at("2024-03-01"),
            true,
        );
        assert_eq!(record.id(), 7);
        assert_eq!(record.item().map(|i| i.id), Some(1));
        assert_eq!(record.tendered(), dec!(1500));
        assert_eq!(record.change(), dec!(500));
        assert_eq!(record.date(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert!(record.is_success());
    }

    #[test]
    fn test_failed_record_has_no_revenue() {
        let record = TransactionRecord::new(
            1,
            Some(cola()),
            dec!(650),
            dec!(650),
            at("2024-03-01"),
            false,
        );
        assert_eq!(record.revenue(), Decimal::ZERO);

        let unknown = TransactionRecord::new(2, None, dec!(2), dec!(2), at("2024-03-01"), false);
        assert!(unknown.item().is_none());
        assert_eq!(unknown.revenue(), Decimal::ZERO);
    }

    #[test]
    fn test_successful_record_revenue_is_item_price() {
        let record = TransactionRecord::new(
            3,
            Some(cola()),
            dec!(2000),
            dec!(1000),
            at("2024-03-01"),
            true,
        );
        assert_eq!(record.revenue(), dec!(1000));
    }
}
