//! Transaction display formatting
//!
//! Formats committed transactions for terminal display as a register.

use crate::models::{Transaction, TransactionType};

/// Format a single transaction for display (register row)
pub fn format_transaction_row(txn: &Transaction) -> String {
    let sign = match txn.kind {
        TransactionType::Income => "+",
        TransactionType::Expense => "-",
    };

    let category_display = if txn.category.is_empty() {
        "(no category)"
    } else {
        txn.category.as_str()
    };

    format!(
        "{:12} {:10} {:8} {:16} {:>12}",
        txn.id.to_string(),
        truncate(&txn.date, 10),
        txn.kind,
        truncate(category_display, 16),
        format!("{}{}", sign, txn.amount)
    )
}

/// Format a list of transactions as a register
pub fn format_transaction_register(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:12} {:10} {:8} {:16} {:>12}\n",
        "ID", "Date", "Type", "Category", "Amount"
    ));
    output.push_str(&"-".repeat(62));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn));
        output.push('\n');
    }

    output
}

/// Truncate a string to a maximum number of characters, padding short ones
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
