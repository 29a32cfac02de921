//! Symbol references handed over by the source graph store.

use serde::{Deserialize, Serialize};

/// One source-code object discovered by prior static analysis.
///
/// Owned by the caller; the engine only reads it and returns it grouped.
/// `name` is either a fully qualified path ("org.spring.Bean") or a flat
/// name ("ACCTMST01"), depending on the language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolRef {
    /// Fully qualified or flat name.
    pub name: String,
    /// Language-specific internal type (class, program, module, ...).
    pub object_type: String,
    /// Whether the graph store marked this symbol as external.
    pub external: bool,
}

impl SymbolRef {
    pub fn new(name: impl Into<String>, object_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            object_type: object_type.into(),
            external: true,
        }
    }
}
