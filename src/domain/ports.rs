use super::transaction::TxId;
use chrono::NaiveDateTime;
use std::sync::Arc;

/// Hands out transaction record ids.
///
/// Implementations must return distinct, strictly increasing ids even when the
/// generator is shared between machines or threads.
pub trait SequenceGenerator: Send + Sync {
    fn next_id(&self) -> TxId;
}

/// Source of record timestamps.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

pub type SharedSequence = Arc<dyn SequenceGenerator>;
pub type ClockBox = Box<dyn Clock>;
