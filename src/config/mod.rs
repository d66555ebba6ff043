//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (default paths, endpoint, timeouts)
//! - Library configuration with validation
//! - CLI option types and parsing

mod cli;
mod constants;
mod types;

// Re-export all constants
pub use cli::{Cli, Command, ContactArgs};
pub use constants::*;
pub use types::{Config, ConfigValidationError, LogFormat, LogLevel};
