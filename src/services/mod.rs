//! Business logic layer for Voice Ledger
//!
//! This module contains the voice form's reconciliation logic:
//!
//! - `classifier`: income/expense lookup for category labels
//! - `reducer`: folds one speech segment into the draft
//! - `commit_gate`: decides when a draft may be committed
//! - `controller`: owns the draft and carries out commits and resets
//!
//! and the collaborators it talks to (`dates`, `sink`, `feed`, `notification`).

pub mod classifier;
pub mod commit_gate;
pub mod controller;
pub mod dates;
pub mod feed;
pub mod notification;
pub mod reducer;
pub mod sink;

pub use classifier::{CategoryClassifier, Classification};
pub use commit_gate::{should_commit, validate_for_commit, CommitRejection};
pub use controller::{FieldEdit, SegmentEffect, VoiceFormController};
pub use dates::{ChronoDateFormatter, DateFormatter, FixedDateFormatter};
pub use feed::{SegmentFeed, SegmentSlot};
pub use notification::Notification;
pub use reducer::{ReducerOutcome, SegmentReducer};
pub use sink::{IdGenerator, MemorySink, SequentialIdGenerator, TransactionSink, UuidIdGenerator};
