//! Core data model: symbols, framework records, classifications, languages.

pub mod classification;
pub mod collections;
pub mod framework;
pub mod language;
pub mod symbol;

pub use classification::{Classification, ClassificationKind};
pub use framework::{FrameworkRecord, Taxonomy};
pub use language::Language;
pub use symbol::SymbolRef;
