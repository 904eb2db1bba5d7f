//! Transaction journal
//!
//! Append-only JSON-lines file of committed transactions. Each transaction is
//! written as a single JSON line and flushed immediately.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Transaction;
use crate::services::sink::TransactionSink;

/// Records committed transactions to a JSONL file
pub struct TransactionJournal {
    path: PathBuf,
}

impl TransactionJournal {
    /// Create a journal that writes to the specified path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Append one transaction
    pub fn append(&self, transaction: &Transaction) -> LedgerResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                LedgerError::Storage(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| LedgerError::Io(format!("Failed to open journal: {}", e)))?;

        let json = serde_json::to_string(transaction)
            .map_err(|e| LedgerError::Json(format!("Failed to serialize transaction: {}", e)))?;

        writeln!(file, "{}", json)
            .map_err(|e| LedgerError::Io(format!("Failed to write transaction: {}", e)))?;

        file.flush()
            .map_err(|e| LedgerError::Io(format!("Failed to flush journal: {}", e)))?;

        Ok(())
    }

    /// Read all transactions, oldest first
    pub fn read_all(&self) -> LedgerResult<Vec<Transaction>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)
            .map_err(|e| LedgerError::Io(format!("Failed to open journal: {}", e)))?;

        let reader = BufReader::new(file);
        let mut transactions = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                LedgerError::Io(format!("Failed to read journal line {}: {}", line_num + 1, e))
            })?;

            if line.trim().is_empty() {
                continue;
            }

            let transaction: Transaction = serde_json::from_str(&line).map_err(|e| {
                LedgerError::Json(format!(
                    "Failed to parse journal line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;

            transactions.push(transaction);
        }

        Ok(transactions)
    }

    /// Read the most recent `count` transactions, oldest first
    pub fn read_recent(&self, count: usize) -> LedgerResult<Vec<Transaction>> {
        let all = self.read_all()?;
        let start = all.len().saturating_sub(count);
        Ok(all[start..].to_vec())
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl TransactionSink for TransactionJournal {
    fn record(&mut self, transaction: Transaction) -> LedgerResult<()> {
        self.append(&transaction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Draft, TransactionId, TransactionType};
    use tempfile::TempDir;

    fn create_test_journal() -> (TransactionJournal, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let journal = TransactionJournal::new(temp_dir.path().join("data").join("txns.jsonl"));
        (journal, temp_dir)
    }

    fn transaction(amount: &str) -> Transaction {
        let draft = Draft {
            amount: amount.into(),
            category: "Food".into(),
            kind: TransactionType::Expense,
            date: "2024-01-01".into(),
        };
        Transaction::from_draft(draft, TransactionId::new())
    }

    #[test]
    fn test_empty_journal() {
        let (journal, _temp) = create_test_journal();
        assert!(!journal.path().exists());
        assert!(journal.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_record_and_read() {
        let (mut journal, _temp) = create_test_journal();
        let txn = transaction("12");

        journal.record(txn.clone()).unwrap();

        let all = journal.read_all().unwrap();
        assert_eq!(all, vec![txn]);
    }

    #[test]
    fn test_read_recent() {
        let (journal, _temp) = create_test_journal();
        for i in 0..10 {
            journal.append(&transaction(&i.to_string())).unwrap();
        }

        let recent = journal.read_recent(3).unwrap();
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].amount, "7");
        assert_eq!(recent[2].amount, "9");

        assert_eq!(journal.read_recent(50).unwrap().len(), 10);
    }

    #[test]
    fn test_survives_reopen() {
        let (journal, temp) = create_test_journal();
        journal.append(&transaction("1")).unwrap();

        let reopened = TransactionJournal::new(temp.path().join("data").join("txns.jsonl"));
        assert_eq!(reopened.read_all().unwrap().len(), 1);
    }

    #[test]
    fn test_corrupt_line_reported() {
        let (journal, _temp) = create_test_journal();
        journal.append(&transaction("1")).unwrap();
        let mut file = OpenOptions::new().append(true).open(journal.path()).unwrap();
        writeln!(file, "garbage").unwrap();

        let err = journal.read_all().unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }
}
