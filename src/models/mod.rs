//! Core data models for Voice Ledger
//!
//! This module contains the data structures of the voice form: the draft being
//! filled in, the speech segments that fill it, the category vocabulary and
//! the committed transaction.

pub mod category;
pub mod draft;
pub mod ids;
pub mod segment;
pub mod transaction;

pub use category::{normalize_label, CategoryEntry, CategoryVocabulary, VocabularyError};
pub use draft::{Draft, TransactionType};
pub use ids::TransactionId;
pub use segment::{Entity, EntityKind, Intent, Segment, Word};
pub use transaction::Transaction;
