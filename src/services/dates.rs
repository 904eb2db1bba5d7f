//! Date normalization
//!
//! The draft's date is kept as a string in one normalized textual format.
//! Formatting is a collaborator so tests can pin "today".

use std::fmt::Write;

use chrono::{DateTime, Local, NaiveDate};

/// Layout used when the configured output format can't render a date
const FALLBACK_FORMAT: &str = "%Y-%m-%d";

/// Input layouts accepted when normalizing a manually edited date
const INPUT_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d.%m.%Y", "%B %d, %Y"];

/// Normalizes raw date strings and produces today's date
pub trait DateFormatter {
    /// Normalize a raw date; input that can't be read is returned unchanged
    fn format(&self, raw: &str) -> String;

    /// The current date in normalized form
    fn today(&self) -> String;
}

/// Formatter backed by chrono and a strftime output format
#[derive(Debug, Clone)]
pub struct ChronoDateFormatter {
    output_format: String,
}

impl ChronoDateFormatter {
    pub fn new(output_format: impl Into<String>) -> Self {
        Self {
            output_format: output_format.into(),
        }
    }

    fn parse(raw: &str) -> Option<NaiveDate> {
        let raw = raw.trim();
        INPUT_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
            .or_else(|| {
                DateTime::parse_from_rfc3339(raw)
                    .ok()
                    .map(|dt| dt.date_naive())
            })
    }

    /// Render with the output format; `None` if the format string is invalid
    fn render(&self, date: NaiveDate) -> Option<String> {
        let mut out = String::new();
        write!(out, "{}", date.format(&self.output_format)).ok()?;
        Some(out)
    }
}

impl Default for ChronoDateFormatter {
    fn default() -> Self {
        Self::new(FALLBACK_FORMAT)
    }
}

impl DateFormatter for ChronoDateFormatter {
    fn format(&self, raw: &str) -> String {
        match Self::parse(raw) {
            Some(date) => self.render(date).unwrap_or_else(|| raw.to_string()),
            None => raw.to_string(),
        }
    }

    fn today(&self) -> String {
        let today = Local::now().date_naive();
        self.render(today)
            .unwrap_or_else(|| today.format(FALLBACK_FORMAT).to_string())
    }
}

/// Formatter whose "today" never moves
#[derive(Debug, Clone)]
pub struct FixedDateFormatter {
    today: NaiveDate,
    inner: ChronoDateFormatter,
}

impl FixedDateFormatter {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            inner: ChronoDateFormatter::default(),
        }
    }
}

impl DateFormatter for FixedDateFormatter {
    fn format(&self, raw: &str) -> String {
        self.inner.format(raw)
    }

    fn today(&self) -> String {
        self.inner.format(&self.today.format("%Y-%m-%d").to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_known_layouts() {
        let formatter = ChronoDateFormatter::default();
        assert_eq!(formatter.format("2024-01-05"), "2024-01-05");
        assert_eq!(formatter.format("2024/1/5"), "2024-01-05");
        assert_eq!(formatter.format("01/05/2024"), "2024-01-05");
        assert_eq!(formatter.format("5.1.2024"), "2024-01-05");
        assert_eq!(formatter.format("January 5, 2024"), "2024-01-05");
        assert_eq!(formatter.format("2024-01-05T10:00:00+00:00"), "2024-01-05");
    }

    #[test]
    fn test_unreadable_input_passes_through() {
        let formatter = ChronoDateFormatter::default();
        assert_eq!(formatter.format("next tuesday"), "next tuesday");
        assert_eq!(formatter.format(""), "");
    }

    #[test]
    fn test_custom_output_format() {
        let formatter = ChronoDateFormatter::new("%d/%m/%Y");
        assert_eq!(formatter.format("2024-01-05"), "05/01/2024");
    }

    #[test]
    fn test_today_is_normalized() {
        let formatter = ChronoDateFormatter::default();
        let today = formatter.today();
        assert_eq!(formatter.format(&today), today);
        assert!(today.contains('-'));
    }

    #[test]
    fn test_fixed_today() {
        let formatter = FixedDateFormatter::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(formatter.today(), "2024-01-01");
        assert_eq!(formatter.format("2024/02/03"), "2024-02-03");
    }

    #[test]
    fn test_invalid_output_format_never_panics() {
        let formatter = ChronoDateFormatter::new("%Q");
        assert_eq!(formatter.format("2024-01-05"), "2024-01-05");
        assert_eq!(formatter.format("2024/01/05"), "2024/01/05");

        let today = formatter.today();
        assert_eq!(ChronoDateFormatter::default().format(&today), today);
    }
}
