//! Listen command
//!
//! Feeds recognizer segments (JSON lines, from a file or stdin) through the
//! voice form controller and prints the form after every segment.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use tracing::warn;

use crate::config::{LedgerPaths, Settings};
use crate::display::{format_draft, format_effect, format_options, format_transcript};
use crate::error::{LedgerError, LedgerResult};
use crate::services::{SegmentFeed, SegmentSlot, TransactionSink, VoiceFormController};
use crate::storage::TransactionJournal;

/// Handle the listen command
pub fn handle_listen_command(
    paths: &LedgerPaths,
    settings: &Settings,
    file: Option<PathBuf>,
) -> LedgerResult<()> {
    let journal = TransactionJournal::new(paths.transactions_file());
    let mut controller = VoiceFormController::from_settings(settings, journal)?;

    let reader: Box<dyn BufRead> = match file {
        Some(path) => {
            let file = File::open(&path).map_err(|e| {
                LedgerError::Io(format!("Failed to open {}: {}", path.display(), e))
            })?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(io::stdin())),
    };

    let committed = run_feed(&mut controller, reader);
    println!("{} transaction(s) committed.", committed);
    Ok(())
}

/// Drive the controller from a segment feed, returning the number of commits
pub fn run_feed<S, R>(controller: &mut VoiceFormController<S>, reader: R) -> usize
where
    S: TransactionSink,
    R: BufRead,
{
    let mut slot = SegmentSlot::new();
    let mut committed = 0;

    for segment in SegmentFeed::new(reader) {
        let segment = match segment {
            Ok(segment) => segment,
            Err(e) => {
                // Malformed input never advances the draft
                warn!(error = %e, "skipping segment");
                eprintln!("Skipped: {}", e);
                continue;
            }
        };

        slot.offer(segment);
        let Some(effect) = controller.pump(&mut slot) else {
            continue;
        };

        if matches!(effect, crate::services::SegmentEffect::Committed(_)) {
            committed += 1;
        }

        print!("{}", format_transcript(controller.transcript()));
        println!("{}", format_effect(&effect));
        print!("{}", format_draft(controller.draft()));
        print!("{}", format_options(controller.category_options()));
        if let Some(notification) = controller.notification() {
            println!("{}", notification.message);
        }
        println!();
    }

    committed
}
