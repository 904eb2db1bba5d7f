//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the voice form controller.

pub mod category;
pub mod listen;
pub mod transaction;

pub use category::handle_categories_command;
pub use listen::{handle_listen_command, run_feed};
pub use transaction::{handle_add_command, handle_list_command, ManualEntry};
