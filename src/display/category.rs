//! Category display formatting

use crate::models::{CategoryEntry, CategoryVocabulary, TransactionType};

/// Format the vocabulary, optionally restricted to one side
pub fn format_vocabulary(vocabulary: &CategoryVocabulary, only: Option<TransactionType>) -> String {
    let mut output = String::new();

    for kind in TransactionType::all() {
        if only.is_some_and(|k| k != *kind) {
            continue;
        }
        output.push_str(&format_category_list(*kind, vocabulary.options_for(*kind)));
    }

    output
}

fn format_category_list(kind: TransactionType, entries: &[CategoryEntry]) -> String {
    let mut output = format!("{} ({})\n", kind, entries.len());
    for entry in entries {
        output.push_str(&format!("  {}\n", entry));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_both_sides() {
        let output = format_vocabulary(&CategoryVocabulary::default(), None);
        assert!(output.starts_with("Income (9)\n  Business\n"));
        assert!(output.contains("Expense (11)\n  Bills\n"));
    }

    #[test]
    fn test_format_one_side() {
        let output = format_vocabulary(
            &CategoryVocabulary::default(),
            Some(TransactionType::Expense),
        );
        assert!(!output.contains("Income"));
        assert!(output.contains("  Pets\n"));
    }
}
