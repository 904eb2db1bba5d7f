//! Transaction model
//!
//! A committed draft. Created once at commit time and handed straight to the
//! transaction sink; nothing in the controller keeps it afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::draft::{Draft, TransactionType};
use super::ids::TransactionId;

/// An immutable, finished transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub amount: String,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub date: String,
    /// When the draft was committed
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Freeze a draft under the given id
    pub fn from_draft(draft: Draft, id: TransactionId) -> Self {
        Self {
            id,
            amount: draft.amount,
            category: draft.category,
            kind: draft.kind,
            date: draft.date,
            created_at: Utc::now(),
        }
    }

    /// The draft fields of this transaction
    pub fn draft(&self) -> Draft {
        Draft {
            amount: self.amount.clone(),
            category: self.category.clone(),
            kind: self.kind,
            date: self.date.clone(),
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date, self.kind, self.category, self.amount
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_draft() -> Draft {
        Draft {
            amount: "50".into(),
            category: "Rent".into(),
            kind: TransactionType::Expense,
            date: "2024-01-01".into(),
        }
    }

    #[test]
    fn test_from_draft_keeps_fields() {
        let id = TransactionId::new();
        let txn = Transaction::from_draft(sample_draft(), id);

        assert_eq!(txn.id, id);
        assert_eq!(txn.draft(), sample_draft());
        assert_eq!(txn.kind, TransactionType::Expense);
    }

    #[test]
    fn test_serialization_fields() {
        let txn = Transaction::from_draft(sample_draft(), TransactionId::new());
        let json = serde_json::to_value(&txn).unwrap();

        assert_eq!(json["amount"], "50");
        assert_eq!(json["category"], "Rent");
        assert_eq!(json["type"], "Expense");
        assert_eq!(json["date"], "2024-01-01");
        assert!(json["id"].is_string());

        let back: Transaction = serde_json::from_value(json).unwrap();
        assert_eq!(back, txn);
    }

    #[test]
    fn test_display() {
        let txn = Transaction::from_draft(sample_draft(), TransactionId::new());
        assert_eq!(txn.to_string(), "2024-01-01 Expense Rent 50");
    }
}
