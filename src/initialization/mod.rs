//! Application initialization.
//!
//! Sets up process-wide state before a run. Currently this is only the logger.

mod logger;

// Re-export public API
pub use logger::init_logger_with;
