use super::item::ItemRef;
use super::ports::{ClockBox, SharedSequence};
use super::transaction::TransactionRecord;
use crate::infrastructure::clock::SystemClock;
use crate::infrastructure::sequence::AtomicSequence;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::sync::Arc;

/// Append-only history of completed sales.
///
/// The ledger also stamps new records: it owns the sequence generator that
/// numbers them and the clock that dates them.
pub struct Ledger {
    records: Vec<TransactionRecord>,
    sequence: SharedSequence,
    clock: ClockBox,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    /// Creates an empty ledger with its own counter and the system clock.
    pub fn new() -> Self {
        Self::with_sources(Arc::new(AtomicSequence::new()), Box::new(SystemClock))
    }

    /// Creates an empty ledger drawing ids and timestamps from the given sources.
    ///
    /// Pass the same `sequence` to several ledgers to number their records from
    /// one shared counter.
    pub fn with_sources(sequence: SharedSequence, clock: ClockBox) -> Self {
        Self {
            records: Vec::new(),
            sequence,
            clock,
        }
    }

    /// Builds a record stamped with the next id and the current time. Does not append it.
    pub fn record(
        &self,
        item: Option<ItemRef>,
        tendered: Decimal,
        change: Decimal,
        success: bool,
    ) -> TransactionRecord {
        TransactionRecord::new(
            self.sequence.next_id(),
            item,
            tendered,
            change,
            self.clock.now(),
            success,
        )
    }

    pub fn append(&mut self, record: TransactionRecord) {
        self.records.push(record);
    }

    /// Snapshot of every record in insertion order.
    pub fn all(&self) -> Vec<TransactionRecord> {
        self.records.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TransactionRecord> + '_ {
        self.records.iter()
    }

    pub fn by_date(&self, date: NaiveDate) -> Vec<TransactionRecord> {
        self.records
            .iter()
            .filter(|r| r.date() == date)
            .cloned()
            .collect()
    }

    /// Sum of sale prices. Saturates at `Decimal::MAX`.
    pub fn total_revenue(&self) -> Decimal {
        self.records
            .iter()
            .map(TransactionRecord::revenue)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    pub fn revenue_by_date(&self, date: NaiveDate) -> Decimal {
        self.records
            .iter()
            .filter(|r| r.date() == date)
            .map(TransactionRecord::revenue)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn success_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_success()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::FixedClock;
    use chrono::NaiveDateTime;
    use rust_decimal_macros::dec;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    fn noon(d: u32) -> NaiveDateTime {
        day(d).and_hms_opt(12, 0, 0).unwrap()
    }

    fn item(price: Decimal) -> Option<ItemRef> {
        Some(ItemRef {
            id: 1,
            name: "Tea".to_string(),
            price,
        })
    }

    fn record_at(id: u64, d: u32, price: Decimal, success: bool) -> TransactionRecord {
        TransactionRecord::new(id, item(price), price, Decimal::ZERO, noon(d), success)
    }

    #[test]
    fn test_empty_ledger() {
        let ledger = Ledger::new();
        assert_eq!(ledger.count(), 0);
        assert_eq!(ledger.success_count(), 0);
        assert_eq!(ledger.total_revenue(), Decimal::ZERO);
        assert!(ledger.all().is_empty());
    }

    #[test]
    fn test_append_preserves_order() {
        let mut ledger = Ledger::new();
        ledger.append(record_at(1, 1, dec!(450), true));
        ledger.append(record_at(2, 1, dec!(650), true));
        ledger.append(record_at(3, 2, dec!(1000), true));

        let ids: Vec<u64> = ledger.all().iter().map(TransactionRecord::id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_all_is_a_snapshot() {
        let mut ledger = Ledger::new();
        ledger.append(record_at(1, 1, dec!(450), true));

        let mut snapshot = ledger.all();
        snapshot.clear();
        assert_eq!(ledger.count(), 1);
        assert_eq!(ledger.all(), ledger.all());
    }

    #[test]
    fn test_revenue_ignores_failed_records() {
        let mut ledger = Ledger::new();
        ledger.append(record_at(1, 1, dec!(450), true));
        ledger.append(record_at(2, 1, dec!(1300), false));
        ledger.append(record_at(3, 1, dec!(650), true));

        assert_eq!(ledger.total_revenue(), dec!(1100));
        assert_eq!(ledger.count(), 3);
        assert_eq!(ledger.success_count(), 2);
    }

    #[test]
    fn test_revenue_saturates_at_max() {
        let mut ledger = Ledger::new();
        ledger.append(record_at(1, 1, Decimal::MAX, true));
        ledger.append(record_at(2, 1, dec!(1), true));

        assert_eq!(ledger.total_revenue(), Decimal::MAX);
        assert_eq!(ledger.revenue_by_date(day(1)), Decimal::MAX);
    }

    #[test]
    fn test_by_date_and_revenue_by_date() {
        let mut ledger = Ledger::new();
        ledger.append(record_at(1, 1, dec!(450), true));
        ledger.append(record_at(2, 2, dec!(650), true));
        ledger.append(record_at(3, 2, dec!(1000), false));
        ledger.append(record_at(4, 2, dec!(500), true));

        let second: Vec<u64> = ledger.by_date(day(2)).iter().map(TransactionRecord::id).collect();
        assert_eq!(second, vec![2, 3, 4]);
        assert!(ledger.by_date(day(3)).is_empty());

        assert_eq!(ledger.revenue_by_date(day(1)), dec!(450));
        assert_eq!(ledger.revenue_by_date(day(2)), dec!(1150));
        assert_eq!(ledger.revenue_by_date(day(3)), Decimal::ZERO);
    }

    #[test]
    fn test_record_is_stamped_but_not_appended() {
        let ledger = Ledger::with_sources(
            Arc::new(AtomicSequence::new()),
            Box::new(FixedClock::new(noon(9))),
        );

        let first = ledger.record(None, dec!(2), dec!(2), false);
        let second = ledger.record(item(dec!(450)), dec!(450), Decimal::ZERO, true);

        assert_eq!(first.id(), 1);
        assert_eq!(second.id(), 2);
        assert_eq!(first.timestamp(), noon(9));
        assert_eq!(ledger.count(), 0);
    }

    #[test]
    fn test_shared_sequence_spans_ledgers() {
        let sequence: SharedSequence = Arc::new(AtomicSequence::new());
        let a = Ledger::with_sources(sequence.clone(), Box::new(FixedClock::new(noon(1))));
        let b = Ledger::with_sources(sequence, Box::new(FixedClock::new(noon(1))));

        let ids = [
            a.record(None, dec!(1), dec!(1), false).id(),
            b.record(None, dec!(1), dec!(1), false).id(),
            a.record(None, dec!(1), dec!(1), false).id(),
        ];
        assert_eq!(ids, [1, 2, 3]);
    }
}
