//! Application configuration and constants.
//!
//! This module provides:
//! - Default paths and survey document field names
//! - CLI option types and parsing
//! - Configuration validation

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};
