//! Commit collaborators
//!
//! The controller hands every committed transaction to a [`TransactionSink`]
//! and takes its ids from an [`IdGenerator`]. Both are traits so the core can
//! run against the JSON-lines journal, an in-memory list or a test double.

use uuid::Uuid;

use crate::error::LedgerResult;
use crate::models::{Transaction, TransactionId};

/// Receives committed transactions
///
/// Called at most once per commit. The controller does not retry a failed
/// `record` and does not restore the draft it already reset.
pub trait TransactionSink {
    fn record(&mut self, transaction: Transaction) -> LedgerResult<()>;
}

/// Produces collision-free transaction ids
pub trait IdGenerator {
    fn new_id(&mut self) -> TransactionId;
}

/// Random v4 UUID ids
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn new_id(&mut self) -> TransactionId {
        TransactionId::new()
    }
}

/// Predictable ids 1, 2, 3, ... encoded as UUIDs
#[derive(Debug, Clone, Default)]
pub struct SequentialIdGenerator {
    next: u128,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn new_id(&mut self) -> TransactionId {
        self.next += 1;
        TransactionId::from_uuid(Uuid::from_u128(self.next))
    }
}

/// Keeps recorded transactions in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    transactions: Vec<Transaction>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transactions in the order they were recorded
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

impl TransactionSink for MemorySink {
    fn record(&mut self, transaction: Transaction) -> LedgerResult<()> {
        self.transactions.push(transaction);
        Ok(())
    }
}

impl<S: TransactionSink + ?Sized> TransactionSink for Box<S> {
    fn record(&mut self, transaction: Transaction) -> LedgerResult<()> {
        (**self).record(transaction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Draft;

    #[test]
    fn test_sequential_ids() {
        let mut ids = SequentialIdGenerator::new();
        let first = ids.new_id();
        let second = ids.new_id();
        assert_eq!(first.as_uuid(), &Uuid::from_u128(1));
        assert_eq!(second.as_uuid(), &Uuid::from_u128(2));
    }

    #[test]
    fn test_uuid_ids_are_unique() {
        let mut ids = UuidIdGenerator;
        assert_ne!(ids.new_id(), ids.new_id());
    }

    #[test]
    fn test_memory_sink_keeps_order() {
        let mut sink = MemorySink::new();
        assert!(sink.is_empty());

        for amount in ["1", "2"] {
            let mut draft = Draft::initial("2024-01-01");
            draft.amount = amount.into();
            sink.record(Transaction::from_draft(draft, TransactionId::new()))
                .unwrap();
        }

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.transactions()[0].amount, "1");
        assert_eq!(sink.transactions()[1].amount, "2");
    }

    #[test]
    fn test_boxed_sink_records() {
        let mut sink: Box<MemorySink> = Box::new(MemorySink::new());
        sink.record(Transaction::from_draft(
            Draft::initial("2024-01-01"),
            TransactionId::new(),
        ))
        .unwrap();
        assert_eq!(sink.len(), 1);
    }
}
