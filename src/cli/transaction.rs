//! Transaction CLI commands
//!
//! Implements the manual "create" path and the transaction listing.

use tracing::debug;

use crate::config::{LedgerPaths, Settings};
use crate::display::format_transaction_register;
use crate::error::{LedgerError, LedgerResult};
use crate::models::TransactionType;
use crate::services::{FieldEdit, VoiceFormController};
use crate::storage::TransactionJournal;

/// Field values for a manually created transaction
#[derive(Debug, Clone, Default)]
pub struct ManualEntry {
    pub amount: String,
    pub category: Option<String>,
    pub kind: Option<TransactionType>,
    pub date: Option<String>,
}

/// Handle the add command
pub fn handle_add_command(
    paths: &LedgerPaths,
    settings: &Settings,
    entry: ManualEntry,
) -> LedgerResult<()> {
    let journal = TransactionJournal::new(paths.transactions_file());
    let mut controller = VoiceFormController::from_settings(settings, journal)?;

    if let Some(kind) = entry.kind {
        controller.edit(FieldEdit::Type(kind));
    }
    if let Some(category) = entry.category {
        controller.edit(FieldEdit::Category(category));
    }
    controller.edit(FieldEdit::Amount(entry.amount));
    if let Some(date) = entry.date {
        controller.edit(FieldEdit::Date(date));
    }

    let draft = controller.draft().clone();
    debug!(?draft, "manual create");

    let id = controller
        .create()
        .map_err(|rejection| LedgerError::Validation(rejection.to_string()))?;

    println!("Created transaction: {}", id);
    println!("  {} {} {} on {}", draft.kind, draft.category, draft.amount, draft.date);
    if let Some(notification) = controller.notification() {
        println!("{}", notification.message);
    }

    Ok(())
}

/// Handle the list command
pub fn handle_list_command(paths: &LedgerPaths, limit: usize) -> LedgerResult<()> {
    let journal = TransactionJournal::new(paths.transactions_file());
    let transactions = journal.read_recent(limit)?;
    print!("{}", format_transaction_register(&transactions));
    Ok(())
}
