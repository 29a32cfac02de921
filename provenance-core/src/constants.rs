//! Default thresholds for the classification engine.
//!
//! All of these are empirical and overridable through `ClassifyConfig` —
//! none is derived from a labeled dataset.

/// Smallest family the clusterer will emit as a standalone bucket.
pub const MIN_FAMILY_SIZE: usize = 3;

/// Default depth bound for flat-name prefix expansion.
pub const MAX_CLUSTER_DEPTH: usize = 6;

/// Prefixes at or below this length carry too little signal to name a family.
pub const MIN_PREFIX_LEN: u32 = 2;

/// Minimum gap between adjacent category probabilities before a
/// prediction counts as confident.
pub const MIN_CONFIDENCE_GAP: f64 = 0.20;

/// The first path segments are organizational namespaces, too generic to be
/// framework boundaries; the walker never queries the catalog above this depth.
pub const ORG_NAMESPACE_DEPTH: u32 = 2;

/// Default timeout for a single web-evidence lookup.
pub const EVIDENCE_TIMEOUT_SECS: u64 = 10;
