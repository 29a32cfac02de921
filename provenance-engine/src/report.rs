//! Classification report for downstream export.

use provenance_core::types::classification::{Classification, ClassificationKind};
use provenance_core::types::collections::FxHashMap;
use serde::Serialize;

/// One symbol's final classification.
#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    pub symbol: String,
    pub framework: Option<String>,
    pub kind: ClassificationKind,
}

/// Ordered classification results, one entry per symbol.
///
/// Re-flagging a symbol overwrites its entry in place — the walker flags
/// idempotently and a later, more specific match wins — while first-seen
/// order is preserved for deterministic export.
#[derive(Debug, Default)]
pub struct ClassificationReport {
    entries: Vec<ReportEntry>,
    index: FxHashMap<String, usize>,
}

impl ClassificationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or replace) a symbol's classification.
    pub fn record(&mut self, symbol: &str, classification: &Classification) {
        let entry = ReportEntry {
            symbol: symbol.to_string(),
            framework: classification.framework_name().map(String::from),
            kind: classification.kind(),
        };
        match self.index.get(symbol) {
            Some(&i) => self.entries[i] = entry,
            None => {
                self.index.insert(symbol.to_string(), self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries of one kind, for summaries.
    pub fn count_of(&self, kind: ClassificationKind) -> usize {
        self.entries.iter().filter(|e| e.kind == kind).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use provenance_core::types::framework::{FrameworkRecord, Taxonomy};
    use provenance_core::types::language::Language;

    fn known(name: &str) -> Classification {
        Classification::KnownFramework(FrameworkRecord {
            name: name.to_string(),
            pattern: "x".to_string(),
            is_regex: false,
            language: Language::Java,
            is_root: false,
            taxonomy: Taxonomy::default(),
            description: None,
            location: None,
        })
    }

    #[test]
    fn reflagging_overwrites_in_place() {
        let mut report = ClassificationReport::new();
        report.record("org.a.B", &Classification::ToInvestigate);
        report.record("org.c.D", &Classification::NotFramework);
        report.record("org.a.B", &known("Alib"));

        assert_eq!(report.len(), 2);
        assert_eq!(report.entries()[0].symbol, "org.a.B");
        assert_eq!(report.entries()[0].framework.as_deref(), Some("Alib"));
        assert_eq!(report.entries()[0].kind, ClassificationKind::KnownFramework);
    }
}
