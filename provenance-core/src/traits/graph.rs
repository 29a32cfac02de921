//! Source graph store contract.

use crate::errors::ClassifyError;
use crate::types::classification::Classification;
use crate::types::language::Language;
use crate::types::symbol::SymbolRef;

/// The graph holding source-code objects discovered by prior analysis.
///
/// The engine treats this purely as input enumeration plus output
/// annotation; no schema knowledge beyond "a symbol has a name and an
/// internal type" is assumed. Tagging the same symbol twice is safe —
/// implementations must upsert.
pub trait GraphStore: Send + Sync {
    /// All external symbols of one language within one application.
    fn list_external_symbols(
        &self,
        language: Language,
        application: &str,
    ) -> Result<Vec<SymbolRef>, ClassifyError>;

    /// Attach (or replace) a classification on a symbol.
    fn tag_symbol(
        &self,
        symbol: &SymbolRef,
        classification: &Classification,
    ) -> Result<(), ClassifyError>;
}
