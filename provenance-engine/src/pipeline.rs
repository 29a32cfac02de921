//! Batch classification pipeline.
//!
//! Phases: enumerate external symbols from the graph store, organize them
//! into a tree (namespace split for delimited languages, family clustering
//! for flat ones), reconcile against the knowledge base, report.

use provenance_core::config::ClassifyConfig;
use provenance_core::errors::ClassifyError;
use provenance_core::traits::{EvidenceSource, GraphStore, KnowledgeBase};
use provenance_core::types::framework::FrameworkRecord;
use provenance_core::types::language::Language;
use tracing::info;

use crate::cluster::FamilyClusterer;
use crate::nlp::TextClassifier;
use crate::report::ClassificationReport;
use crate::tree::{Segmenter, SymbolTree};
use crate::walker::{ReconcileWalker, WalkerDiagnostics};

/// Everything one batch run produces.
pub struct PipelineOutcome {
    pub report: ClassificationReport,
    pub resolved: Vec<FrameworkRecord>,
    pub diagnostics: WalkerDiagnostics,
}

/// One-shot batch pass over a snapshot of candidate symbols.
pub struct ClassificationPipeline<'a> {
    graph: &'a dyn GraphStore,
    oracle: &'a dyn KnowledgeBase,
    config: ClassifyConfig,
}

impl<'a> ClassificationPipeline<'a> {
    pub fn new(
        graph: &'a dyn GraphStore,
        oracle: &'a dyn KnowledgeBase,
        config: ClassifyConfig,
    ) -> Self {
        Self {
            graph,
            oracle,
            config,
        }
    }

    /// Classify every external symbol of `language` in `application`.
    ///
    /// Only input enumeration can fail the run; every downstream error
    /// degrades per node inside the walker.
    pub fn run(
        &self,
        language: Language,
        application: &str,
        classifier: &mut TextClassifier,
        evidence: Option<&mut dyn EvidenceSource>,
    ) -> Result<PipelineOutcome, ClassifyError> {
        let symbols = self.graph.list_external_symbols(language, application)?;
        info!(
            %language,
            application,
            count = symbols.len(),
            "enumerated external symbols"
        );

        let tree = match language.delimiter() {
            Some(delimiter) => {
                let mut tree = SymbolTree::new(Segmenter::Delimited(delimiter));
                for symbol in symbols {
                    let name = symbol.name.clone();
                    tree.insert(&name, symbol);
                }
                tree
            }
            None => FamilyClusterer::new(&self.config)
                .build_tree(symbols, self.config.effective_max_cluster_depth()),
        };
        info!(nodes = tree.len(), "built symbol tree");

        let mut walker =
            ReconcileWalker::new(self.oracle, self.graph, classifier, language, &self.config);
        if let Some(source) = evidence {
            walker = walker.with_evidence(source);
        }

        let resolved = walker.classify_tree(&tree);
        let diagnostics = walker.diagnostics().clone();
        info!(
            resolved = resolved.len(),
            visited = diagnostics.nodes_visited,
            nlp_fallbacks = diagnostics.nlp_fallbacks,
            "walk complete"
        );

        Ok(PipelineOutcome {
            report: walker.into_report(),
            resolved,
            diagnostics,
        })
    }
}
