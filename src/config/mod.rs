//! Configuration module for Voice Ledger
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence (date format, vocabulary override, logging)

pub mod paths;
pub mod settings;

pub use paths::LedgerPaths;
pub use settings::Settings;
