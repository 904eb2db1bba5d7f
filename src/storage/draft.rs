//! Draft store
//!
//! Owns the single live draft. Every write swaps the whole record; merging
//! happens in the reducer before the swap.

use crate::models::Draft;
use crate::services::dates::DateFormatter;

/// Holder of the one live draft
pub struct DraftStore {
    draft: Draft,
    formatter: Box<dyn DateFormatter>,
}

impl DraftStore {
    /// Create a store holding the canonical initial draft
    pub fn new(formatter: Box<dyn DateFormatter>) -> Self {
        let draft = Draft::initial(formatter.today());
        Self { draft, formatter }
    }

    /// The live draft
    pub fn current(&self) -> &Draft {
        &self.draft
    }

    /// Swap in a whole new draft
    pub fn replace(&mut self, draft: Draft) {
        self.draft = draft;
    }

    /// Replace the draft with the canonical initial draft
    pub fn reset(&mut self) {
        self.draft = self.initial();
    }

    /// The canonical initial draft for today
    pub fn initial(&self) -> Draft {
        Draft::initial(self.formatter.today())
    }

    /// Normalize a raw date with the store's formatter
    pub fn format_date(&self, raw: &str) -> String {
        self.formatter.format(raw)
    }
}

impl std::fmt::Debug for DraftStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DraftStore")
            .field("draft", &self.draft)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionType;
    use crate::services::dates::FixedDateFormatter;
    use chrono::NaiveDate;

    fn store() -> DraftStore {
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        DraftStore::new(Box::new(FixedDateFormatter::new(today)))
    }

    #[test]
    fn test_starts_with_initial_draft() {
        let store = store();
        assert_eq!(store.current(), &Draft::initial("2024-01-01"));
        assert_eq!(store.initial(), Draft::initial("2024-01-01"));
    }

    #[test]
    fn test_replace_is_total() {
        let mut store = store();
        let draft = Draft {
            amount: "9".into(),
            category: "Food".into(),
            kind: TransactionType::Expense,
            date: "2024-05-05".into(),
        };
        store.replace(draft.clone());
        assert_eq!(store.current(), &draft);
    }

    #[test]
    fn test_reset_restores_initial() {
        let mut store = store();
        let mut draft = store.current().clone();
        draft.amount = "10".into();
        draft.kind = TransactionType::Expense;
        store.replace(draft);

        store.reset();
        assert_eq!(store.current(), &Draft::initial("2024-01-01"));
    }

    #[test]
    fn test_format_date_uses_formatter() {
        let store = store();
        assert_eq!(store.format_date("2024/2/3"), "2024-02-03");
    }
}
