//! Category CLI commands

use crate::config::Settings;
use crate::display::format_vocabulary;
use crate::error::LedgerResult;
use crate::models::TransactionType;

/// Handle the categories command
pub fn handle_categories_command(
    settings: &Settings,
    only: Option<TransactionType>,
) -> LedgerResult<()> {
    let vocabulary = settings.vocabulary()?;
    print!("{}", format_vocabulary(&vocabulary, only));
    Ok(())
}
