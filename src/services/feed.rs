//! Segment delivery
//!
//! - [`SegmentSlot`]: a one-element mailbox where the newest segment replaces
//!   any segment still waiting to be processed.
//! - [`SegmentFeed`]: reads recognizer output as JSON lines.

use std::io::BufRead;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Segment;

/// Holds at most one pending segment; the latest offer wins
#[derive(Debug, Default)]
pub struct SegmentSlot {
    pending: Option<Segment>,
}

impl SegmentSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver a segment, returning the stale one it replaced
    pub fn offer(&mut self, segment: Segment) -> Option<Segment> {
        self.pending.replace(segment)
    }

    /// Take the pending segment for processing
    pub fn take(&mut self) -> Option<Segment> {
        self.pending.take()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_none()
    }
}

/// Iterator over segments encoded one JSON object per line
///
/// A malformed line yields one `LedgerError::Segment` and reading continues.
/// A read failure yields one `LedgerError::Io` and ends the feed.
pub struct SegmentFeed<R> {
    reader: R,
    line_number: usize,
    done: bool,
}

impl<R: BufRead> SegmentFeed<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_number: 0,
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for SegmentFeed<R> {
    type Item = LedgerResult<Segment>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut line = String::new();
        loop {
            line.clear();
            self.line_number += 1;

            match self.reader.read_line(&mut line) {
                Ok(0) => {
                    self.done = true;
                    return None;
                }
                Ok(_) => {}
                Err(e) => {
                    self.done = true;
                    return Some(Err(LedgerError::Io(format!(
                        "Failed to read segment line {}: {}",
                        self.line_number, e
                    ))))
                }
            }

            // Skip empty lines
            if line.trim().is_empty() {
                continue;
            }

            return Some(
                serde_json::from_str(line.trim()).map_err(|e| LedgerError::Segment {
                    line: self.line_number,
                    message: e.to_string(),
                }),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Intent;
    use std::io::{self, Cursor, Read};

    struct BrokenReader;

    impl Read for BrokenReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "Is a directory"))
        }
    }

    impl BufRead for BrokenReader {
        fn fill_buf(&mut self) -> io::Result<&[u8]> {
            Err(io::Error::new(io::ErrorKind::Other, "Is a directory"))
        }

        fn consume(&mut self, _amt: usize) {}
    }

    #[test]
    fn test_slot_latest_wins() {
        let mut slot = SegmentSlot::new();
        assert!(slot.is_empty());

        assert!(slot.offer(Segment::new(Intent::AddIncome)).is_none());
        let stale = slot.offer(Segment::new(Intent::AddExpense));
        assert_eq!(stale.map(|s| s.intent), Some(Intent::AddIncome));

        assert_eq!(slot.take().map(|s| s.intent), Some(Intent::AddExpense));
        assert!(slot.take().is_none());
    }

    #[test]
    fn test_feed_reads_lines_and_skips_blanks() {
        let input = "{\"intent\": \"add_income\"}\n\n  \n{\"intent\": \"cancel_transaction\", \"isFinal\": true}\n";
        let segments: Vec<Segment> = SegmentFeed::new(Cursor::new(input))
            .collect::<LedgerResult<_>>()
            .unwrap();

        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].intent, Intent::AddIncome);
        assert!(segments[1].is_final);
    }

    #[test]
    fn test_feed_reports_bad_line_number() {
        let input = "{\"intent\": \"add_income\"}\n\nnot json\n";
        let mut feed = SegmentFeed::new(Cursor::new(input));

        assert!(feed.next().unwrap().is_ok());
        match feed.next().unwrap() {
            Err(LedgerError::Segment { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected segment error, got {:?}", other),
        }
        assert!(feed.next().is_none());
    }

    #[test]
    fn test_feed_ends_after_read_error() {
        let mut feed = SegmentFeed::new(BrokenReader);

        assert!(matches!(feed.next(), Some(Err(LedgerError::Io(_)))));
        assert!(feed.next().is_none());
        assert_eq!(SegmentFeed::new(BrokenReader).take(1000).count(), 1);
    }
}
