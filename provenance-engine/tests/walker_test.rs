//! Integration tests for the knowledge-base reconciliation walker.

mod common;

use common::{trained_classifier, MemoryGraph, MemoryOracle, ScriptedEvidence};
use provenance_core::config::ClassifyConfig;
use provenance_core::types::classification::{Classification, ClassificationKind};
use provenance_core::types::framework::{FrameworkRecord, Taxonomy};
use provenance_core::types::language::Language;
use provenance_core::types::symbol::SymbolRef;
use provenance_engine::tree::{Segmenter, SymbolTree};
use provenance_engine::walker::ReconcileWalker;

fn java_tree(names: &[&str]) -> SymbolTree {
    let mut tree = SymbolTree::new(Segmenter::Delimited('.'));
    for name in names {
        tree.insert(name, SymbolRef::new(*name, "class"));
    }
    tree
}

fn root_record(pattern: &str) -> FrameworkRecord {
    FrameworkRecord {
        name: "Alib".to_string(),
        pattern: pattern.to_string(),
        is_regex: false,
        language: Language::Java,
        is_root: true,
        taxonomy: Taxonomy::default(),
        description: None,
        location: None,
    }
}

#[test]
fn test_root_narrowing_mints_specific_children() {
    let oracle = MemoryOracle::seeded(vec![root_record("org.alib")]);
    let graph = MemoryGraph::with_symbols(&["org.alib.core.Buffer", "org.alib.io.Channel"]);
    let mut classifier = trained_classifier(Language::Java, 0.0);
    let config = ClassifyConfig::default();

    let tree = java_tree(&["org.alib.core.Buffer", "org.alib.io.Channel"]);
    let mut walker =
        ReconcileWalker::new(&oracle, &graph, &mut classifier, Language::Java, &config);
    walker.classify_tree(&tree);

    // Two new non-root records anchored at the depth-3 children.
    let minted: Vec<FrameworkRecord> = oracle
        .records()
        .into_iter()
        .filter(|r| !r.is_root)
        .collect();
    let mut patterns: Vec<&str> = minted.iter().map(|r| r.pattern.as_str()).collect();
    patterns.sort();
    assert_eq!(patterns, vec!["org.alib.core", "org.alib.io"]);
    assert!(minted.iter().all(|r| r.taxonomy.level5.is_some()));

    // The original root record is no longer the terminal match: each
    // symbol's final tag is the specific child record.
    match graph.tag_of("org.alib.core.Buffer").unwrap() {
        Classification::KnownFramework(rec) => {
            assert_eq!(rec.pattern, "org.alib.core");
            assert!(!rec.is_root);
        }
        other => panic!("expected framework tag, got {other:?}"),
    }
    match graph.tag_of("org.alib.io.Channel").unwrap() {
        Classification::KnownFramework(rec) => assert_eq!(rec.pattern, "org.alib.io"),
        other => panic!("expected framework tag, got {other:?}"),
    }
}

#[test]
fn test_reconciliation_is_idempotent_across_runs() {
    let oracle = MemoryOracle::seeded(vec![root_record("org.alib")]);
    let graph = MemoryGraph::with_symbols(&["org.alib.core.Buffer", "org.alib.io.Channel"]);
    let config = ClassifyConfig::default();
    let tree = java_tree(&["org.alib.core.Buffer", "org.alib.io.Channel"]);

    let mut classifier = trained_classifier(Language::Java, 0.0);
    let mut first =
        ReconcileWalker::new(&oracle, &graph, &mut classifier, Language::Java, &config);
    first.classify_tree(&tree);
    let records_after_first = oracle.record_count();
    assert!(first.diagnostics().minted_children > 0);

    // Second pass over the unchanged tree against the persisted catalog:
    // every previously resolved node reaches the Found branch.
    let mut classifier = trained_classifier(Language::Java, 0.0);
    let mut second =
        ReconcileWalker::new(&oracle, &graph, &mut classifier, Language::Java, &config);
    second.classify_tree(&tree);

    assert_eq!(oracle.record_count(), records_after_first);
    assert_eq!(second.diagnostics().minted_children, 0);
    assert_eq!(second.diagnostics().minted_roots, 0);
    assert!(second.diagnostics().catalog_hits >= 3);
}

#[test]
fn test_unmatched_namespace_mints_generic_root() {
    let oracle = MemoryOracle::default();
    let graph = MemoryGraph::with_symbols(&["com.vendorlib.util.Helper", "com.vendorlib.net.Conn"]);
    let mut classifier = trained_classifier(Language::Java, 0.0);
    let config = ClassifyConfig::default();

    let tree = java_tree(&["com.vendorlib.util.Helper", "com.vendorlib.net.Conn"]);
    let mut walker =
        ReconcileWalker::new(&oracle, &graph, &mut classifier, Language::Java, &config);
    let resolved = walker.classify_tree(&tree);

    // One generic root at the first meaningful depth; no descent below it.
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].pattern, "com.vendorlib");
    assert!(resolved[0].is_root);
    assert_eq!(walker.diagnostics().minted_roots, 1);

    // Every symbol under the subtree carries the root identity.
    for name in ["com.vendorlib.util.Helper", "com.vendorlib.net.Conn"] {
        match graph.tag_of(name).unwrap() {
            Classification::KnownFramework(rec) => assert_eq!(rec.pattern, "com.vendorlib"),
            other => panic!("expected framework tag, got {other:?}"),
        }
    }
}

#[test]
fn test_flat_leaf_with_confident_framework_verdict_mints_regex_record() {
    let oracle = MemoryOracle::default();
    let graph = MemoryGraph::with_symbols(&["HttpKit"]);
    // Gap of zero: every prediction passes the gate.
    let mut classifier = trained_classifier(Language::Java, 0.0);
    let config = ClassifyConfig::default();
    let mut evidence = ScriptedEvidence::new(vec![Some(
        "open source http client library framework".to_string(),
    )]);

    let tree = java_tree(&["HttpKit"]);
    let mut walker = ReconcileWalker::new(&oracle, &graph, &mut classifier, Language::Java, &config)
        .with_evidence(&mut evidence);
    let resolved = walker.classify_tree(&tree);

    assert_eq!(resolved.len(), 1);
    assert!(resolved[0].is_regex);
    assert!(resolved[0].pattern.starts_with('^'));
    assert_eq!(
        graph.tag_of("HttpKit").unwrap().kind(),
        ClassificationKind::KnownFramework
    );
}

#[test]
fn test_not_confident_verdict_defers_to_investigation() {
    let oracle = MemoryOracle::default();
    let graph = MemoryGraph::with_symbols(&["Mystery"]);
    // Impossible gap: every prediction fails the gate.
    let mut classifier = trained_classifier(Language::Java, 1.1);
    let config = ClassifyConfig::default();

    let tree = java_tree(&["Mystery"]);
    let mut walker =
        ReconcileWalker::new(&oracle, &graph, &mut classifier, Language::Java, &config);
    let resolved = walker.classify_tree(&tree);

    assert!(resolved.is_empty(), "no minting under uncertainty");
    assert_eq!(
        graph.tag_of("Mystery").unwrap(),
        Classification::ToInvestigate
    );
}

#[test]
fn test_evidence_failure_disables_source_for_the_run() {
    let oracle = MemoryOracle::default();
    let graph = MemoryGraph::with_symbols(&["AlphaOne", "BetaTwo"]);
    let mut classifier = trained_classifier(Language::Java, 1.1);
    let config = ClassifyConfig::default();
    // First lookup fails; the second leaf must not trigger another call.
    let mut evidence = ScriptedEvidence::new(vec![None, Some("unused".to_string())]);

    let tree = java_tree(&["AlphaOne", "BetaTwo"]);
    let mut walker = ReconcileWalker::new(&oracle, &graph, &mut classifier, Language::Java, &config)
        .with_evidence(&mut evidence);
    walker.classify_tree(&tree);

    assert_eq!(walker.diagnostics().evidence_failures, 1);
    assert_eq!(walker.diagnostics().nlp_fallbacks, 2);
    // Both leaves still classified (offline), neither left untagged.
    assert_eq!(graph.tag_count(), 2);

    drop(walker);
    assert_eq!(evidence.calls, 1, "source disabled after first failure");
}

#[test]
fn test_missing_training_data_degrades_to_unresolved() {
    let oracle = MemoryOracle::default();
    let graph = MemoryGraph::with_symbols(&["Orphan"]);
    let config = ClassifyConfig::default();
    // Untrained classifier with no corpus: lazy training cannot happen.
    let mut classifier = provenance_engine::nlp::TextClassifier::new(Language::Java, 0.2);

    let tree = java_tree(&["Orphan"]);
    let mut walker =
        ReconcileWalker::new(&oracle, &graph, &mut classifier, Language::Java, &config);
    walker.classify_tree(&tree);

    assert_eq!(graph.tag_of("Orphan").unwrap(), Classification::Unresolved);
}

#[test]
fn test_report_orders_symbols_first_seen_and_overwrites() {
    let oracle = MemoryOracle::seeded(vec![root_record("org.alib")]);
    let graph = MemoryGraph::with_symbols(&["org.alib.core.Buffer"]);
    let mut classifier = trained_classifier(Language::Java, 0.0);
    let config = ClassifyConfig::default();

    let tree = java_tree(&["org.alib.core.Buffer"]);
    let mut walker =
        ReconcileWalker::new(&oracle, &graph, &mut classifier, Language::Java, &config);
    walker.classify_tree(&tree);

    let report = walker.report();
    assert_eq!(report.len(), 1);
    let entry = &report.entries()[0];
    assert_eq!(entry.symbol, "org.alib.core.Buffer");
    assert_eq!(entry.kind, ClassificationKind::KnownFramework);
    assert_eq!(entry.framework.as_deref(), Some("Core"));
}
