//! Category vocabulary
//!
//! Two fixed, disjoint lists of category labels: one for income, one for
//! expenses. The lists drive both the selectable options of the form and the
//! classification of spoken category entities.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::draft::TransactionType;

const INCOME_LABELS: &[&str] = &[
    "Business",
    "Investments",
    "Extra income",
    "Deposits",
    "Lottery",
    "Gifts",
    "Salary",
    "Savings",
    "Rental income",
];

const EXPENSE_LABELS: &[&str] = &[
    "Bills",
    "Car",
    "Clothes",
    "Travel",
    "Food",
    "Shopping",
    "House",
    "Entertainment",
    "Phone",
    "Pets",
    "Other",
];

/// A single selectable category, serialized as `{"type": label}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryEntry {
    #[serde(rename = "type")]
    pub label: String,
}

impl CategoryEntry {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl fmt::Display for CategoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Income-side and expense-side category lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryVocabulary {
    pub income: Vec<CategoryEntry>,
    pub expense: Vec<CategoryEntry>,
}

impl CategoryVocabulary {
    pub fn new(income: Vec<CategoryEntry>, expense: Vec<CategoryEntry>) -> Self {
        Self { income, expense }
    }

    /// The options offered for a given transaction type
    pub fn options_for(&self, kind: TransactionType) -> &[CategoryEntry] {
        match kind {
            TransactionType::Income => &self.income,
            TransactionType::Expense => &self.expense,
        }
    }

    /// Check that no label is empty and that the two sides don't overlap
    pub fn validate(&self) -> Result<(), VocabularyError> {
        let mut income = HashSet::new();
        for entry in &self.income {
            if entry.label.trim().is_empty() {
                return Err(VocabularyError::EmptyLabel);
            }
            income.insert(entry.label.as_str());
        }

        for entry in &self.expense {
            if entry.label.trim().is_empty() {
                return Err(VocabularyError::EmptyLabel);
            }
            if income.contains(entry.label.as_str()) {
                return Err(VocabularyError::Overlap(entry.label.clone()));
            }
        }

        Ok(())
    }
}

impl Default for CategoryVocabulary {
    fn default() -> Self {
        Self {
            income: INCOME_LABELS.iter().map(|l| CategoryEntry::new(*l)).collect(),
            expense: EXPENSE_LABELS.iter().map(|l| CategoryEntry::new(*l)).collect(),
        }
    }
}

/// Normalize a spoken category: upper-case first letter, lower-case remainder
///
/// "GROCERIES" and "groceries" both become "Groceries". Applying it twice
/// gives the same label.
pub fn normalize_label(value: &str) -> String {
    let mut chars = value.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    // At most one upper-case char, even when it expands ('ß' -> "SS")
    let mut upper = first.to_uppercase();
    let mut label: String = upper.next().into_iter().collect();
    label.extend(upper.flat_map(char::to_lowercase));
    label.extend(chars.flat_map(char::to_lowercase));
    label
}

/// Validation errors for category vocabularies
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VocabularyError {
    #[error("Category label cannot be empty")]
    EmptyLabel,

    #[error("Category '{0}' appears in both income and expense lists")]
    Overlap(String),
}
