//! # provenance-engine
//!
//! Classification engine for the Provenance framework-classification tool.
//! Organizes external symbol names into trees, reconciles them against the
//! knowledge base, clusters flat names into families, and falls back to a
//! confidence-gated text classifier when no catalog evidence exists.

pub mod cluster;
pub mod evidence;
pub mod nlp;
pub mod pipeline;
pub mod report;
pub mod similarity;
pub mod tree;
pub mod walker;

pub use cluster::{Family, FamilyClusterer};
pub use pipeline::ClassificationPipeline;
pub use report::{ClassificationReport, ReportEntry};
pub use tree::{NodeId, Segmenter, SymbolTree, TreeNode};
pub use walker::ReconcileWalker;
