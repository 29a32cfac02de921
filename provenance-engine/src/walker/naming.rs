//! Framework identity minting.

use provenance_core::types::framework::{FrameworkRecord, Taxonomy};
use provenance_core::types::language::Language;

use crate::tree::TreeNode;

/// Descriptive label derived from a path segment: capitalized, with any
/// literal "API" substring stripped and re-prefixed as `"API <name>"`.
pub fn derive_label(segment: &str) -> String {
    let mut chars = segment.chars();
    let capitalized = match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    };
    if capitalized.contains("API") {
        let stripped = capitalized.replace("API", "");
        format!("API {}", stripped.trim())
    } else {
        capitalized
    }
}

/// Record for the first specific child discovered under a root match:
/// anchored at the child's path, carrying the parent's taxonomy narrowed
/// with a level-5 label.
pub fn mint_child(parent: &FrameworkRecord, node: &TreeNode) -> FrameworkRecord {
    let label = derive_label(&node.segment);
    FrameworkRecord {
        name: label.clone(),
        pattern: node.full_path.clone(),
        is_regex: false,
        language: parent.language,
        is_root: false,
        taxonomy: parent.taxonomy.with_level5(label),
        description: parent.description.clone(),
        location: parent.location.clone(),
    }
}

/// Generic root record covering a whole unmatched subtree as one match.
pub fn mint_root(node: &TreeNode, language: Language) -> FrameworkRecord {
    FrameworkRecord {
        name: derive_label(&node.segment),
        pattern: node.full_path.clone(),
        is_regex: false,
        language,
        is_root: true,
        taxonomy: Taxonomy::default(),
        description: None,
        location: None,
    }
}

/// Record minted from a confident NLP verdict: regex pattern anchored to
/// the node's full path, so later runs resolve the same subtree.
pub fn mint_from_nlp(node: &TreeNode, language: Language) -> FrameworkRecord {
    FrameworkRecord {
        name: derive_label(&node.segment),
        pattern: format!("^{}", regex::escape(&node.full_path)),
        is_regex: true,
        language,
        is_root: false,
        taxonomy: Taxonomy::default(),
        description: None,
        location: None,
    }
}
