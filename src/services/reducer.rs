//! Segment reducer
//!
//! The state-machine core: folds one speech segment into the current draft.
//!
//! Rules are tried in a fixed order and only one terminal outcome is produced
//! per segment:
//!
//! 1. `add_expense` / `add_income` set the draft type. Entities in the same
//!    segment are still merged, but the spoken command decides the type.
//! 2. A final `create_transaction` commits the draft as-is.
//! 3. A final `cancel_transaction` resets the draft.
//! 4. Anything else merges the segment's entities in order.
//!
//! A `Continue` result is escalated to `Commit` when the commit gate approves
//! the merged draft.

use crate::models::{normalize_label, Draft, EntityKind, Intent, Segment, TransactionType};

use super::classifier::CategoryClassifier;
use super::commit_gate::should_commit;

/// What the controller should do after a reducer pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReducerOutcome {
    /// Store the updated draft and wait for more speech
    Continue(Draft),
    /// Finalize this draft, hand it to the sink and reset the store
    Commit(Draft),
    /// Discard the draft and reset the store
    Reset,
}

impl ReducerOutcome {
    pub fn is_commit(&self) -> bool {
        matches!(self, Self::Commit(_))
    }
}

/// Applies intent and entity rules to drafts
#[derive(Debug, Clone, Default)]
pub struct SegmentReducer {
    classifier: CategoryClassifier,
}

impl SegmentReducer {
    pub fn new(classifier: CategoryClassifier) -> Self {
        Self { classifier }
    }

    /// Fold one segment into `draft`
    pub fn reduce(&self, draft: &Draft, segment: &Segment) -> ReducerOutcome {
        let updated = match segment.intent {
            Intent::AddExpense => self.merge_with_type(draft, segment, TransactionType::Expense),
            Intent::AddIncome => self.merge_with_type(draft, segment, TransactionType::Income),
            Intent::CreateTransaction if segment.is_final => {
                return ReducerOutcome::Commit(draft.clone());
            }
            Intent::CancelTransaction if segment.is_final => return ReducerOutcome::Reset,
            _ => self.merge_entities(draft.clone(), segment),
        };

        if should_commit(segment.is_final, &updated) {
            ReducerOutcome::Commit(updated)
        } else {
            ReducerOutcome::Continue(updated)
        }
    }

    fn merge_with_type(&self, draft: &Draft, segment: &Segment, kind: TransactionType) -> Draft {
        let mut merged = self.merge_entities(draft.with_kind(kind), segment);
        merged.kind = kind;
        merged
    }

    fn merge_entities(&self, mut draft: Draft, segment: &Segment) -> Draft {
        for entity in &segment.entities {
            match entity.kind {
                EntityKind::Amount => draft.amount = entity.value.clone(),
                EntityKind::Category => {
                    let label = normalize_label(&entity.value);
                    if let Some(kind) = self.classifier.classify(&label).transaction_type() {
                        draft.kind = kind;
                    }
                    draft.category = label;
                }
                EntityKind::Date => draft.date = entity.value.clone(),
                EntityKind::Unrecognized => {}
            }
        }
        draft
    }
}
