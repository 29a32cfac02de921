//! # provenance-core
//!
//! Foundation crate for the Provenance classification engine.
//! Defines types, collaborator traits, errors, config, constants, and
//! tracing setup. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing_init;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::ClassifyConfig;
pub use errors::error_code::ErrorCode;
pub use errors::{ClassifyError, StorageError};
pub use traits::{EvidenceSource, GraphStore, KnowledgeBase};
pub use types::classification::{Classification, ClassificationKind};
pub use types::collections::{FxHashMap, FxHashSet};
pub use types::framework::{FrameworkRecord, Taxonomy};
pub use types::language::Language;
pub use types::symbol::SymbolRef;
