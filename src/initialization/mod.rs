//! Application initialization.
//!
//! The pattern catalog builds itself lazily on first use; the only process-wide
//! resource that needs explicit setup is the logger.

mod logger;

// Re-export public API
pub use logger::init_logger_with;
