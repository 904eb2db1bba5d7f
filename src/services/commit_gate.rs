//! Commit eligibility checks
//!
//! Two predicates decide whether a draft may leave the form:
//! - [`should_commit`]: automatic commit after a speech segment (all fields
//!   filled and the utterance is final)
//! - [`validate_for_commit`]: the looser check every commit passes before
//!   reaching the sink (numeric amount, date with a separator)

use crate::models::Draft;

/// Separator a date must contain to be accepted
pub const DATE_SEPARATOR: char = '-';

/// Whether a draft produced by a segment pass should be committed
pub fn should_commit(is_final: bool, draft: &Draft) -> bool {
    // `kind` is an enum, so it is always set
    is_final && draft.is_complete()
}

/// Why a commit was refused
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommitRejection {
    #[error("Amount is not a number: '{0}'")]
    InvalidAmount(String),

    #[error("Date is not in a recognizable format: '{0}'")]
    MalformedDate(String),
}

/// Check that a draft's amount parses as a number and its date has a separator
///
/// Category and type are not checked here.
pub fn validate_for_commit(draft: &Draft) -> Result<(), CommitRejection> {
    let amount = draft.amount.trim();
    let numeric = amount
        .parse::<f64>()
        .map(|value| value.is_finite())
        .unwrap_or(false);
    if !numeric {
        return Err(CommitRejection::InvalidAmount(draft.amount.clone()));
    }

    if !draft.date.contains(DATE_SEPARATOR) {
        return Err(CommitRejection::MalformedDate(draft.date.clone()));
    }

    Ok(())
}
