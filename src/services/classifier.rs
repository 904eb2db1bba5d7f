//! Category classification
//!
//! Decides which side of the vocabulary a normalized category label belongs
//! to. Pure lookup, no side effects.

use std::collections::HashSet;

use crate::models::{CategoryVocabulary, TransactionType};

/// Result of classifying a category label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Income,
    Expense,
    Unknown,
}

impl Classification {
    /// The transaction type implied by this classification, if any
    pub fn transaction_type(&self) -> Option<TransactionType> {
        match self {
            Self::Income => Some(TransactionType::Income),
            Self::Expense => Some(TransactionType::Expense),
            Self::Unknown => None,
        }
    }
}

/// Lookup over the income and expense label sets
#[derive(Debug, Clone)]
pub struct CategoryClassifier {
    income: HashSet<String>,
    expense: HashSet<String>,
}

impl CategoryClassifier {
    pub fn new(vocabulary: &CategoryVocabulary) -> Self {
        Self {
            income: vocabulary.income.iter().map(|e| e.label.clone()).collect(),
            expense: vocabulary.expense.iter().map(|e| e.label.clone()).collect(),
        }
    }

    /// Classify an already-normalized label
    ///
    /// Matching is exact: "groceries" is Unknown even if "Groceries" is listed.
    pub fn classify(&self, label: &str) -> Classification {
        if self.income.contains(label) {
            Classification::Income
        } else if self.expense.contains(label) {
            Classification::Expense
        } else {
            Classification::Unknown
        }
    }
}

impl Default for CategoryClassifier {
    fn default() -> Self {
        Self::new(&CategoryVocabulary::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryEntry;

    #[test]
    fn test_classify_default_vocabulary() {
        let classifier = CategoryClassifier::default();
        assert_eq!(classifier.classify("Salary"), Classification::Income);
        assert_eq!(classifier.classify("Extra income"), Classification::Income);
        assert_eq!(classifier.classify("Food"), Classification::Expense);
        assert_eq!(classifier.classify("Groceries"), Classification::Unknown);
        assert_eq!(classifier.classify(""), Classification::Unknown);
    }

    #[test]
    fn test_classify_is_exact() {
        let classifier = CategoryClassifier::default();
        assert_eq!(classifier.classify("FOOD"), Classification::Unknown);
        assert_eq!(classifier.classify("food"), Classification::Unknown);
    }

    #[test]
    fn test_custom_vocabulary() {
        let vocabulary = CategoryVocabulary::new(
            vec![CategoryEntry::new("Refund")],
            vec![CategoryEntry::new("Groceries"), CategoryEntry::new("Rent")],
        );
        let classifier = CategoryClassifier::new(&vocabulary);
        assert_eq!(classifier.classify("Groceries"), Classification::Expense);
        assert_eq!(classifier.classify("Refund"), Classification::Income);
    }

    #[test]
    fn test_income_labels_never_classify_as_expense() {
        let vocabulary = CategoryVocabulary::default();
        let classifier = CategoryClassifier::new(&vocabulary);
        for entry in &vocabulary.income {
            assert_eq!(classifier.classify(&entry.label), Classification::Income);
        }
        for entry in &vocabulary.expense {
            assert_eq!(classifier.classify(&entry.label), Classification::Expense);
        }
    }

    #[test]
    fn test_transaction_type() {
        assert_eq!(
            Classification::Expense.transaction_type(),
            Some(TransactionType::Expense)
        );
        assert_eq!(Classification::Unknown.transaction_type(), None);
    }
}
