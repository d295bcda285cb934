//! Error handling.
//!
//! This module provides the error types surfaced by the library:
//! - **Initialization**: logger setup failures
//! - **Ingestion**: the access log could not be read
//!
//! Parsing and classification have no error type: malformed log lines are
//! skipped and absent identifiers classify as "nothing matched".

mod types;

// Re-export public API
pub use types::{IngestionError, InitializationError};
