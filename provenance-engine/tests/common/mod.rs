//! In-memory collaborator fakes shared by the integration suites.
#![allow(dead_code)]

use std::sync::Mutex;

use provenance_core::errors::ClassifyError;
use provenance_core::traits::{EvidenceSource, GraphStore, KnowledgeBase};
use provenance_core::types::classification::Classification;
use provenance_core::types::collections::FxHashMap;
use provenance_core::types::framework::FrameworkRecord;
use provenance_core::types::language::Language;
use provenance_core::types::symbol::SymbolRef;

use provenance_engine::nlp::{Category, TextClassifier, TrainingSet};

/// Knowledge base that persists records across walks, mimicking the
/// remote catalog: exact (pattern, language) lookup, then regex records.
#[derive(Default)]
pub struct MemoryOracle {
    records: Mutex<Vec<FrameworkRecord>>,
}

impl MemoryOracle {
    pub fn seeded(records: Vec<FrameworkRecord>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }

    pub fn record_count(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn records(&self) -> Vec<FrameworkRecord> {
        self.records.lock().unwrap().clone()
    }
}

impl KnowledgeBase for MemoryOracle {
    fn find_by_pattern(
        &self,
        pattern: &str,
        language: Language,
    ) -> Result<Option<FrameworkRecord>, ClassifyError> {
        let records = self.records.lock().unwrap();
        if let Some(exact) = records
            .iter()
            .find(|r| !r.is_regex && r.language == language && r.pattern == pattern)
        {
            return Ok(Some(exact.clone()));
        }
        Ok(records
            .iter()
            .find(|r| r.is_regex && r.language == language && r.matches(pattern))
            .cloned())
    }

    fn upsert(&self, record: FrameworkRecord) -> Result<FrameworkRecord, ClassifyError> {
        let mut records = self.records.lock().unwrap();
        if let Some(existing) = records
            .iter_mut()
            .find(|r| r.pattern == record.pattern && r.language == record.language)
        {
            *existing = record.clone();
        } else {
            records.push(record.clone());
        }
        Ok(record)
    }
}

/// Graph store that remembers the latest tag per symbol.
#[derive(Default)]
pub struct MemoryGraph {
    pub symbols: Vec<SymbolRef>,
    tags: Mutex<FxHashMap<String, Classification>>,
}

impl MemoryGraph {
    pub fn with_symbols(names: &[&str]) -> Self {
        Self {
            symbols: names.iter().map(|n| SymbolRef::new(*n, "class")).collect(),
            tags: Mutex::default(),
        }
    }

    pub fn tag_of(&self, name: &str) -> Option<Classification> {
        self.tags.lock().unwrap().get(name).cloned()
    }

    pub fn tag_count(&self) -> usize {
        self.tags.lock().unwrap().len()
    }
}

impl GraphStore for MemoryGraph {
    fn list_external_symbols(
        &self,
        _language: Language,
        _application: &str,
    ) -> Result<Vec<SymbolRef>, ClassifyError> {
        Ok(self.symbols.clone())
    }

    fn tag_symbol(
        &self,
        symbol: &SymbolRef,
        classification: &Classification,
    ) -> Result<(), ClassifyError> {
        self.tags
            .lock()
            .unwrap()
            .insert(symbol.name.clone(), classification.clone());
        Ok(())
    }
}

/// Evidence source with scripted responses; `None` scripts a failure.
pub struct ScriptedEvidence {
    responses: Vec<Option<String>>,
    pub calls: usize,
}

impl ScriptedEvidence {
    pub fn new(responses: Vec<Option<String>>) -> Self {
        Self {
            responses,
            calls: 0,
        }
    }
}

impl EvidenceSource for ScriptedEvidence {
    fn lookup(&mut self, _name: &str) -> Result<String, ClassifyError> {
        let response = self.responses.get(self.calls).cloned().flatten();
        self.calls += 1;
        response.ok_or(ClassifyError::EvidenceSourceExhausted)
    }
}

/// Classifier trained on a small, well-separated corpus.
pub fn trained_classifier(language: Language, min_gap: f64) -> TextClassifier {
    let mut corpus = TrainingSet::new();
    corpus.add_samples(
        Category::Framework,
        [
            "open source http client library framework",
            "logging framework appenders layouts library",
            "persistence mapping framework library vendor",
        ],
    );
    corpus.add_samples(
        Category::NotFramework,
        [
            "internal billing batch job invoices",
            "customer account reconciliation program internal",
            "monthly payroll report generator internal",
        ],
    );
    let mut classifier = TextClassifier::new(language, min_gap);
    classifier.set_corpus(corpus);
    classifier.train().expect("corpus is non-empty");
    classifier
}
