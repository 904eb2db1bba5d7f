//! Draft display formatting
//!
//! Renders the live form: what was last heard, the four fields and the
//! categories offered for the current type.

use crate::models::{CategoryEntry, Draft};
use crate::services::SegmentEffect;

/// Format the draft as a small form
pub fn format_draft(draft: &Draft) -> String {
    let mut output = String::new();

    output.push_str(&format!("Type:     {}\n", draft.kind));
    output.push_str(&format!("Category: {}\n", or_placeholder(&draft.category)));
    output.push_str(&format!("Amount:   {}\n", or_placeholder(&draft.amount)));
    output.push_str(&format!("Date:     {}\n", draft.date));

    output
}

/// Format the transcript line shown above the form
pub fn format_transcript(transcript: &str) -> String {
    if transcript.is_empty() {
        String::new()
    } else {
        format!("\"{}\"\n", transcript)
    }
}

/// Format the selectable category options on one line
pub fn format_options(options: &[CategoryEntry]) -> String {
    let labels: Vec<&str> = options.iter().map(|e| e.label.as_str()).collect();
    format!("Options:  {}\n", labels.join(", "))
}

/// Describe what a segment did to the form
pub fn format_effect(effect: &SegmentEffect) -> String {
    match effect {
        SegmentEffect::Updated => "Draft updated".to_string(),
        SegmentEffect::Committed(id) => format!("Committed {}", id),
        SegmentEffect::Discarded => "Draft discarded".to_string(),
        SegmentEffect::CommitRejected(reason) => format!("Commit rejected: {}", reason),
    }
}

fn or_placeholder(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionId;
    use crate::services::CommitRejection;

    #[test]
    fn test_format_initial_draft() {
        let output = format_draft(&Draft::initial("2024-01-01"));
        assert_eq!(
            output,
            "Type:     Income\nCategory: -\nAmount:   -\nDate:     2024-01-01\n"
        );
    }

    #[test]
    fn test_format_transcript() {
        assert_eq!(format_transcript(""), "");
        assert_eq!(format_transcript("add fifty"), "\"add fifty\"\n");
    }

    #[test]
    fn test_format_options() {
        let options = vec![CategoryEntry::new("Food"), CategoryEntry::new("Car")];
        assert_eq!(format_options(&options), "Options:  Food, Car\n");
    }

    #[test]
    fn test_format_effect() {
        assert_eq!(format_effect(&SegmentEffect::Updated), "Draft updated");
        assert_eq!(format_effect(&SegmentEffect::Discarded), "Draft discarded");

        let id = TransactionId::new();
        assert_eq!(
            format_effect(&SegmentEffect::Committed(id)),
            format!("Committed {}", id)
        );

        let rejected = SegmentEffect::CommitRejected(CommitRejection::InvalidAmount("x".into()));
        assert_eq!(
            format_effect(&rejected),
            "Commit rejected: Amount is not a number: 'x'"
        );
    }
}
