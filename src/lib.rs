//! Voice Ledger - voice-driven transaction form controller
//!
//! This library turns a stream of speech-recognition segments into committed
//! income and expense transactions. Each segment carries an intent, a final
//! flag, extracted entities (amount, category, date) and the spoken words; the
//! controller folds them into a single draft and commits it once it is
//! complete.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Draft, segment, category and transaction models
//! - `storage`: Draft store and the transaction journal
//! - `services`: Reducer, commit gate, classifier and the form controller
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use voice_ledger::models::{Entity, Intent, Segment};
//! use voice_ledger::services::{MemorySink, VoiceFormController};
//!
//! let mut controller = VoiceFormController::from_settings(&settings, MemorySink::new())?;
//! controller.handle_segment(&Segment::new(Intent::AddExpense).with_entity(Entity::amount("20")));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
