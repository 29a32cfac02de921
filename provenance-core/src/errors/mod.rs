//! Error types for the classification engine.

pub mod classify_error;
pub mod error_code;
pub mod storage_error;

pub use classify_error::ClassifyError;
pub use storage_error::StorageError;
