//! Storage layer for Voice Ledger
//!
//! - `draft`: the in-memory store of the single live draft
//! - `transactions`: the append-only journal of committed transactions
//! - `file_io`: atomic JSON writes for settings

pub mod draft;
pub mod file_io;
pub mod transactions;

pub use draft::DraftStore;
pub use file_io::write_json_atomic;
pub use transactions::TransactionJournal;
