//! Web-evidence source contract.

use crate::errors::ClassifyError;

/// Returns free-text evidence (search snippets, descriptions) for a symbol
/// name, for the statistical fallback classifier.
///
/// Treated as unreliable and rate-limited: the first
/// `EvidenceSourceExhausted` disables the source for the remainder of the
/// run, and the engine fails open to offline classification.
pub trait EvidenceSource: Send {
    fn lookup(&mut self, name: &str) -> Result<String, ClassifyError>;
}
