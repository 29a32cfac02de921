//! Stable machine-readable error codes.
//!
//! Every error enum in the workspace implements `ErrorCode` so downstream
//! consumers can branch on a stable string instead of display text.

/// Maps an error to a stable, SCREAMING_SNAKE code.
pub trait ErrorCode {
    fn error_code(&self) -> &'static str;
}

pub const MALFORMED_NAME: &str = "MALFORMED_NAME";
pub const ORACLE_UNAVAILABLE: &str = "ORACLE_UNAVAILABLE";
pub const EVIDENCE_EXHAUSTED: &str = "EVIDENCE_EXHAUSTED";
pub const UNTRAINED_MODEL: &str = "UNTRAINED_MODEL";
pub const MISSING_TRAINING_DATA: &str = "MISSING_TRAINING_DATA";
pub const MODEL_IO: &str = "MODEL_IO";
pub const GRAPH_ERROR: &str = "GRAPH_ERROR";
pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const MIGRATION_FAILED: &str = "MIGRATION_FAILED";
pub const DB_BUSY: &str = "DB_BUSY";
pub const NOT_FOUND: &str = "NOT_FOUND";
