use crate::domain::ports::SequenceGenerator;
use crate::domain::transaction::TxId;
use std::sync::atomic::{AtomicU64, Ordering};

/// A thread-safe counter numbering transaction records from 1.
///
/// Wrap it in an `Arc` to share one numbering between several machines.
#[derive(Debug, Default)]
pub struct AtomicSequence {
    last: AtomicU64,
}

impl AtomicSequence {
    /// Creates a counter whose first id is 1.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SequenceGenerator for AtomicSequence {
    fn next_id(&self) -> TxId {
        self.last.fetch_add(1, Ordering::SeqCst) + 1
    }
}
