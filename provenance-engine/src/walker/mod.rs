//! Knowledge-base reconciliation walker.
//!
//! Walks a symbol tree depth-first against the knowledge-base oracle,
//! resolving or minting framework identities at the correct boundary and
//! falling back to the confidence-gated text classifier when no catalog
//! evidence exists. The traversal is an explicit work-list of
//! `(node, parent record, depth)` — no recursion, so pathological trees
//! cannot blow the call stack and each step is unit-testable.

pub mod naming;

use provenance_core::config::ClassifyConfig;
use provenance_core::traits::{EvidenceSource, GraphStore, KnowledgeBase};
use provenance_core::types::classification::Classification;
use provenance_core::types::collections::FxHashSet;
use provenance_core::types::framework::FrameworkRecord;
use provenance_core::types::language::Language;
use tracing::{debug, warn};

use crate::nlp::{Category, Confidence, TextClassifier};
use crate::report::ClassificationReport;
use crate::tree::{NodeId, SymbolTree};

/// Counters for one walk, for diagnostics and summaries.
#[derive(Debug, Clone, Default)]
pub struct WalkerDiagnostics {
    pub nodes_visited: usize,
    pub catalog_hits: usize,
    pub minted_roots: usize,
    pub minted_children: usize,
    pub nlp_fallbacks: usize,
    pub evidence_failures: usize,
    pub oracle_failures: usize,
}

/// Depth-first reconciliation of a symbol tree against the oracle.
///
/// The oracle is injected, never global; side effects are symbol flags on
/// the graph store, oracle upserts, and report entries. The only state
/// threaded across siblings is the parent record on the work-list.
pub struct ReconcileWalker<'a> {
    oracle: &'a dyn KnowledgeBase,
    graph: &'a dyn GraphStore,
    classifier: &'a mut TextClassifier,
    evidence: Option<&'a mut dyn EvidenceSource>,
    language: Language,
    skip_depth: u32,
    evidence_disabled: bool,
    report: ClassificationReport,
    resolved: Vec<FrameworkRecord>,
    resolved_patterns: FxHashSet<String>,
    diag: WalkerDiagnostics,
}

impl<'a> ReconcileWalker<'a> {
    pub fn new(
        oracle: &'a dyn KnowledgeBase,
        graph: &'a dyn GraphStore,
        classifier: &'a mut TextClassifier,
        language: Language,
        config: &ClassifyConfig,
    ) -> Self {
        Self {
            oracle,
            graph,
            classifier,
            evidence: None,
            language,
            skip_depth: config.effective_skip_depth(),
            evidence_disabled: true,
            report: ClassificationReport::new(),
            resolved: Vec::new(),
            resolved_patterns: FxHashSet::default(),
            diag: WalkerDiagnostics::default(),
        }
    }

    /// Attach a web-evidence source for the NLP fallback.
    pub fn with_evidence(mut self, source: &'a mut dyn EvidenceSource) -> Self {
        self.evidence = Some(source);
        self.evidence_disabled = false;
        self
    }

    pub fn report(&self) -> &ClassificationReport {
        &self.report
    }

    pub fn into_report(self) -> ClassificationReport {
        self.report
    }

    pub fn diagnostics(&self) -> &WalkerDiagnostics {
        &self.diag
    }

    /// Walk the tree and return the deduplicated set of framework records
    /// resolved anywhere in it.
    ///
    /// Never fails as a whole: every degraded node falls back to the most
    /// conservative available classification.
    pub fn classify_tree(&mut self, tree: &SymbolTree) -> Vec<FrameworkRecord> {
        let mut worklist: Vec<(NodeId, Option<FrameworkRecord>, u32)> = Vec::new();
        for &child in tree.children(SymbolTree::ROOT).iter().rev() {
            worklist.push((child, None, tree.node(child).depth));
        }

        while let Some((id, parent, depth)) = worklist.pop() {
            self.diag.nodes_visited += 1;
            let node = tree.node(id);

            // Organizational namespaces: too generic to be boundaries.
            if depth < self.skip_depth {
                if node.is_leaf() {
                    self.nlp_fallback(tree, id);
                } else {
                    for &child in node.children.iter().rev() {
                        worklist.push((child, parent.clone(), tree.node(child).depth));
                    }
                }
                continue;
            }

            match self.oracle.find_by_pattern(&node.full_path, self.language) {
                Ok(Some(record)) => {
                    self.diag.catalog_hits += 1;
                    debug!(path = %node.full_path, framework = %record.name, "catalog hit");
                    self.flag(tree, id, &Classification::KnownFramework(record.clone()));
                    self.remember(record.clone());
                    for &child in node.children.iter().rev() {
                        worklist.push((child, Some(record.clone()), tree.node(child).depth));
                    }
                }
                Ok(None) => match parent {
                    Some(ref p) if p.is_root => {
                        // First specific child under a generic root match.
                        let minted = naming::mint_child(p, node);
                        match self.oracle.upsert(minted) {
                            Ok(record) => {
                                self.diag.minted_children += 1;
                                debug!(path = %node.full_path, "minted child boundary");
                                self.flag(
                                    tree,
                                    id,
                                    &Classification::KnownFramework(record.clone()),
                                );
                                self.remember(record.clone());
                                for &child in node.children.iter().rev() {
                                    worklist.push((
                                        child,
                                        Some(record.clone()),
                                        tree.node(child).depth,
                                    ));
                                }
                            }
                            Err(e) => {
                                warn!(path = %node.full_path, error = %e, "mint failed, degrading to NLP");
                                self.diag.oracle_failures += 1;
                                self.nlp_fallback(tree, id);
                            }
                        }
                    }
                    Some(ref p) => {
                        // Subtree already covered by a specific match.
                        self.flag(tree, id, &Classification::KnownFramework(p.clone()));
                    }
                    None => {
                        // No ancestry at a meaningful depth: one generic
                        // root match covers the whole subtree.
                        let minted = naming::mint_root(node, self.language);
                        match self.oracle.upsert(minted) {
                            Ok(record) => {
                                self.diag.minted_roots += 1;
                                debug!(path = %node.full_path, "minted root record");
                                self.flag(
                                    tree,
                                    id,
                                    &Classification::KnownFramework(record.clone()),
                                );
                                self.remember(record);
                            }
                            Err(e) => {
                                warn!(path = %node.full_path, error = %e, "mint failed, degrading to NLP");
                                self.diag.oracle_failures += 1;
                                self.nlp_fallback(tree, id);
                            }
                        }
                    }
                },
                Err(e) => {
                    warn!(path = %node.full_path, error = %e, "oracle unavailable, degrading to NLP");
                    self.diag.oracle_failures += 1;
                    self.nlp_fallback(tree, id);
                }
            }
        }

        self.resolved.clone()
    }

    /// Statistical fallback for nodes with no catalog resolution.
    ///
    /// Evidence text comes from the web source while it is healthy; the
    /// first failure disables it for the rest of the run and classification
    /// proceeds offline on the symbol path itself.
    fn nlp_fallback(&mut self, tree: &SymbolTree, id: NodeId) {
        let node = tree.node(id);
        if node.members.is_empty() {
            return;
        }
        self.diag.nlp_fallbacks += 1;

        let text = self.fetch_evidence(&node.full_path);
        match self.classifier.classify(&text) {
            Ok(result) => match (result.confidence, result.category) {
                (Confidence::Confident, Category::Framework) => {
                    let minted = naming::mint_from_nlp(node, self.language);
                    match self.oracle.upsert(minted) {
                        Ok(record) => {
                            debug!(path = %node.full_path, "minted framework from NLP verdict");
                            self.flag(tree, id, &Classification::KnownFramework(record.clone()));
                            self.remember(record);
                        }
                        Err(e) => {
                            warn!(path = %node.full_path, error = %e, "NLP mint failed");
                            self.diag.oracle_failures += 1;
                            self.flag(tree, id, &Classification::ToInvestigate);
                        }
                    }
                }
                (Confidence::Confident, Category::NotFramework) => {
                    self.flag(tree, id, &Classification::NotFramework);
                }
                _ => {
                    self.flag(tree, id, &Classification::ToInvestigate);
                }
            },
            Err(e) => {
                warn!(path = %node.full_path, error = %e, "classifier unavailable");
                self.flag(tree, id, &Classification::Unresolved);
            }
        }
    }

    fn fetch_evidence(&mut self, path: &str) -> String {
        if self.evidence_disabled {
            return path.to_string();
        }
        let source = match self.evidence.as_mut() {
            Some(s) => s,
            None => return path.to_string(),
        };
        match source.lookup(path) {
            Ok(snippet) => snippet,
            Err(e) => {
                warn!(error = %e, "evidence source failed, disabling for the run");
                self.diag.evidence_failures += 1;
                self.evidence_disabled = true;
                path.to_string()
            }
        }
    }

    /// Flag every symbol under this node's prefix. Idempotent: tagging is
    /// an upsert on the graph side and the report overwrites in place.
    fn flag(&mut self, tree: &SymbolTree, id: NodeId, classification: &Classification) {
        for member in tree.members(id) {
            if let Err(e) = self.graph.tag_symbol(member, classification) {
                warn!(symbol = %member.name, error = %e, "tagging failed");
            }
            self.report.record(&member.name, classification);
        }
    }

    fn remember(&mut self, record: FrameworkRecord) {
        if self.resolved_patterns.insert(record.pattern.clone()) {
            self.resolved.push(record);
        }
    }
}
