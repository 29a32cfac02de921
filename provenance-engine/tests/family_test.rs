//! Integration tests for the flat-name family clusterer.

use provenance_core::types::symbol::SymbolRef;
use provenance_engine::cluster::FamilyClusterer;
use provenance_engine::tree::SymbolTree;

fn syms(names: &[&str]) -> Vec<SymbolRef> {
    names.iter().map(|n| SymbolRef::new(*n, "program")).collect()
}

#[test]
fn test_two_families_with_merged_straggler() {
    let clusterer = FamilyClusterer::with_thresholds(3, 2);
    let items = syms(&[
        "ACCT01", "ACCT02", "ACCT03", "ACCT04", // account batch family
        "PAYR01", "PAYR02", "PAYR03", // payroll family
        "GLX1", // straggler, folds into the nearest sibling
    ]);
    let tree = clusterer.build_tree(items, 4);
    let mut families = clusterer.families(&tree);
    families.sort_by(|a, b| a.prefix.cmp(&b.prefix));

    assert_eq!(families.len(), 2);
    assert_eq!(families[0].prefix, "ACC");
    assert_eq!(families[0].members.len(), 5); // GLX1 rode along via merges
    assert_eq!(families[1].prefix, "PAY");
    assert_eq!(families[1].members.len(), 3);
}

#[test]
fn test_no_family_smaller_than_minimum_except_root() {
    let clusterer = FamilyClusterer::with_thresholds(3, 2);
    let items = syms(&[
        "ACCT01", "ACCT02", "ACCT03", "ACCT04", "PAYR01", "PAYR02", "PAYR03", "GLX1",
    ]);
    let tree = clusterer.build_tree(items, 4);
    for family in clusterer.families(&tree) {
        assert!(
            family.members.len() >= 3 || family.prefix.is_empty(),
            "undersized family '{}' with {} members",
            family.prefix,
            family.members.len()
        );
    }
}

#[test]
fn test_breakpoint_forces_descent_into_subfamilies() {
    // Twelve names diverging at the third character: the depth-2 node has
    // four children of three members each (4 > mean size 3), so it is a
    // breakpoint and reporting must descend past it.
    let clusterer = FamilyClusterer::with_thresholds(3, 2);
    let items = syms(&[
        "ABC1", "ABC2", "ABC3", "ABD1", "ABD2", "ABD3", "ABE1", "ABE2", "ABE3", "ABF1", "ABF2",
        "ABF3",
    ]);
    let tree = clusterer.build_tree(items, 4);

    let a = tree.children(SymbolTree::ROOT)[0];
    let ab = tree.children(a)[0];
    assert!(tree.node(ab).breakpoint);

    let mut families = clusterer.families(&tree);
    families.sort_by(|a, b| a.prefix.cmp(&b.prefix));
    let prefixes: Vec<&str> = families.iter().map(|f| f.prefix.as_str()).collect();
    assert_eq!(prefixes, vec!["ABC", "ABD", "ABE", "ABF"]);
    assert!(families.iter().all(|f| f.members.len() == 3));
}

#[test]
fn test_breakpoint_free_subtree_cuts_at_informative_depth() {
    // A single chain of buckets never breaks, so reporting stops at the
    // first depth past the minimum informative prefix length instead of
    // descending to max depth.
    let clusterer = FamilyClusterer::with_thresholds(3, 2);
    let items = syms(&[
        "ACCT01", "ACCT02", "ACCT03", "ACCT04", "PAYR01", "PAYR02", "PAYR03", "GLX1",
    ]);
    let tree = clusterer.build_tree(items, 5);
    let mut families = clusterer.families(&tree);
    families.sort_by(|a, b| a.prefix.cmp(&b.prefix));

    // Depth 3 ("ACC"/"PAY"), not depth 4 ("ACCT"/"PAYR").
    assert_eq!(families.len(), 2);
    assert_eq!(families[0].prefix, "ACC");
    assert_eq!(families[1].prefix, "PAY");
}

#[test]
fn test_conservation_beyond_short_name_filter() {
    let clusterer = FamilyClusterer::with_thresholds(3, 2);
    let names = [
        "ACCT01", "ACCT02", "ACCT03", "PAYR01", "PAYR02", "PAYR03", "GLX1", "ZZ", // too short
    ];
    let tree = clusterer.build_tree(syms(&names), 4);
    let families = clusterer.families(&tree);

    let mut reported: Vec<String> = families
        .iter()
        .flat_map(|f| f.members.iter().map(|m| m.name.clone()))
        .filter(|n| n.chars().count() > 2)
        .collect();
    reported.sort();

    let mut expected: Vec<String> = names
        .iter()
        .filter(|n| n.chars().count() > 2)
        .map(|n| n.to_string())
        .collect();
    expected.sort();

    assert_eq!(reported, expected);
}
