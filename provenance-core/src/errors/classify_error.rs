//! Classification-engine errors.
//!
//! None of these aborts a batch run: each candidate node independently
//! degrades to the most conservative available classification instead of
//! blocking the walk.

use crate::types::language::Language;

use super::error_code::{self, ErrorCode};
use super::storage_error::StorageError;

/// Errors surfaced by the classification engine.
#[derive(Debug, thiserror::Error)]
pub enum ClassifyError {
    /// Name shorter than the required prefix length at a given depth.
    /// Skipped, never fatal.
    #[error("Malformed name '{name}' at depth {depth}")]
    MalformedName { name: String, depth: u32 },

    /// Knowledge-base catalog unreachable; the affected node degrades to
    /// the NLP fallback path.
    #[error("Knowledge base unavailable: {message}")]
    OracleUnavailable { message: String },

    /// Web-evidence source rate-limited or failing; disables the online
    /// path for the remainder of the run.
    #[error("Evidence source exhausted")]
    EvidenceSourceExhausted,

    /// Classifier invoked before a model exists for the language.
    /// Triggers lazy training when a corpus is available.
    #[error("No trained model for language {language}")]
    UntrainedModel { language: Language },

    /// Lazy training attempted with no training data at all.
    #[error("No training data for language {language}")]
    MissingTrainingData { language: Language },

    /// Model (de)serialization failure.
    #[error("Model I/O error: {message}")]
    ModelIo { message: String },

    /// Source graph store failure.
    #[error("Graph store error: {message}")]
    Graph { message: String },

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl ErrorCode for ClassifyError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MalformedName { .. } => error_code::MALFORMED_NAME,
            Self::OracleUnavailable { .. } => error_code::ORACLE_UNAVAILABLE,
            Self::EvidenceSourceExhausted => error_code::EVIDENCE_EXHAUSTED,
            Self::UntrainedModel { .. } => error_code::UNTRAINED_MODEL,
            Self::MissingTrainingData { .. } => error_code::MISSING_TRAINING_DATA,
            Self::ModelIo { .. } => error_code::MODEL_IO,
            Self::Graph { .. } => error_code::GRAPH_ERROR,
            Self::Storage(e) => e.error_code(),
        }
    }
}
