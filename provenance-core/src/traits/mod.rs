//! Collaborator traits.
//!
//! These traits define the contract between the classification engine and
//! its external collaborators: the source graph store, the knowledge-base
//! oracle, and the web-evidence source. Implementations live outside this
//! crate (`provenance-storage` for SQLite, `provenance-engine::evidence`
//! for HTTP); tests substitute in-memory fakes. The oracle is always
//! injected — never a process-wide singleton.

pub mod evidence;
pub mod graph;
pub mod knowledge;

pub use evidence::EvidenceSource;
pub use graph::GraphStore;
pub use knowledge::KnowledgeBase;
