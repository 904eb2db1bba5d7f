//! Draft model
//!
//! The in-progress, not-yet-committed transaction that speech segments and
//! manual edits fill in field by field.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether a transaction brings money in or sends it out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TransactionType {
    #[default]
    Income,
    Expense,
}

impl TransactionType {
    /// Both types in display order
    pub fn all() -> &'static [Self] {
        &[Self::Income, Self::Expense]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(format!("unknown transaction type: {}", other)),
        }
    }
}

/// The live transaction form
///
/// `amount` and `category` use the empty string for "unset". `date` is never
/// empty; it starts as the formatted current date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub amount: String,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub date: String,
}

impl Draft {
    /// The canonical initial draft for the given normalized date
    pub fn initial(date: impl Into<String>) -> Self {
        Self {
            amount: String::new(),
            category: String::new(),
            kind: TransactionType::Income,
            date: date.into(),
        }
    }

    /// Copy of this draft with a different type
    pub fn with_kind(&self, kind: TransactionType) -> Self {
        Self {
            kind,
            ..self.clone()
        }
    }

    /// True when amount, category and date all hold a value
    pub fn is_complete(&self) -> bool {
        !self.amount.is_empty() && !self.category.is_empty() && !self.date.is_empty()
    }
}
