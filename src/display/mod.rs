//! Display formatting for terminal output
//!
//! Provides utilities for formatting the live draft, committed transactions
//! and the category vocabulary for terminal display.

pub mod category;
pub mod draft;
pub mod transaction;

pub use category::format_vocabulary;
pub use draft::{format_draft, format_effect, format_options, format_transcript};
pub use transaction::{format_transaction_register, format_transaction_row};
