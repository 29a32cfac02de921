//! Knowledge-base oracle contract.

use crate::errors::ClassifyError;
use crate::types::framework::FrameworkRecord;
use crate::types::language::Language;

/// The catalog of canonical framework records.
///
/// `find_by_pattern` looks up by exact `(pattern, language)` key, then by
/// regex records whose expression matches the given path — so a namespace
/// minted as a regex boundary in one run resolves on the next.
///
/// `upsert` must be atomic find-or-create from the oracle's perspective:
/// the engine issues calls with at-least-once semantics and relies on the
/// server to deduplicate on the `(pattern, language)` key, not on any
/// client-side locking.
pub trait KnowledgeBase: Send + Sync {
    fn find_by_pattern(
        &self,
        pattern: &str,
        language: Language,
    ) -> Result<Option<FrameworkRecord>, ClassifyError>;

    fn upsert(&self, record: FrameworkRecord) -> Result<FrameworkRecord, ClassifyError>;
}
