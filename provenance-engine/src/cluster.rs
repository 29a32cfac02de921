//! Flat-name family clustering.
//!
//! For languages whose names carry no structural delimiter (COBOL program
//! names and the like), families are inferred by depth-bounded prefix
//! bucketing: expand leaves one character at a time, merge undersized
//! buckets into their nearest sibling by prefix edit distance, then cut the
//! tree where the breakpoint heuristic says subdivision stops being
//! productive. Heuristic, not exact — thresholds are configuration.

use provenance_core::config::ClassifyConfig;
use provenance_core::types::collections::{FxHashMap, FxHashSet};
use provenance_core::types::symbol::SymbolRef;
use tracing::trace;

use crate::similarity::edit_distance;
use crate::tree::{NodeId, Segmenter, SymbolTree};

/// One inferred family: a common prefix and the symbols behind it.
#[derive(Debug, Clone)]
pub struct Family {
    pub prefix: String,
    pub members: Vec<SymbolRef>,
}

/// Builds depth-bounded prefix trees over flat names.
pub struct FamilyClusterer {
    min_family_size: usize,
    min_prefix_len: u32,
}

impl FamilyClusterer {
    pub fn new(config: &ClassifyConfig) -> Self {
        Self {
            min_family_size: config.effective_min_family_size(),
            min_prefix_len: config.effective_min_prefix_len(),
        }
    }

    pub fn with_thresholds(min_family_size: usize, min_prefix_len: u32) -> Self {
        Self {
            min_family_size,
            min_prefix_len,
        }
    }

    /// Build the family tree: seed one root bucket with all items, run
    /// `max_depth - 1` expansion passes, then compute breakpoints.
    pub fn build_tree(&self, items: Vec<SymbolRef>, max_depth: usize) -> SymbolTree {
        let mut tree = SymbolTree::new(Segmenter::FixedPrefix);
        tree.node_mut(SymbolTree::ROOT).members = items;

        for _ in 1..max_depth {
            self.increase_depth(&mut tree);
        }
        compute_breakpoints(&mut tree);
        tree
    }

    /// One expansion pass: split every non-empty leaf bucket on the next
    /// prefix character, merging undersized sub-buckets into siblings.
    fn increase_depth(&self, tree: &mut SymbolTree) {
        let leaves: Vec<NodeId> = tree
            .depth_first()
            .into_iter()
            .filter(|&id| tree.node(id).is_leaf() && !tree.node(id).members.is_empty())
            .collect();

        for leaf in leaves {
            self.expand_leaf(tree, leaf);
        }
    }

    fn expand_leaf(&self, tree: &mut SymbolTree, leaf: NodeId) {
        let prefix_len = tree.node(leaf).depth as usize + 1;

        // Candidate sub-buckets keyed by the first `prefix_len` characters,
        // in first-encounter order. Members too short for this depth stay
        // in the ancestor's member list.
        let mut order: Vec<String> = Vec::new();
        let mut buckets: FxHashMap<String, Vec<SymbolRef>> = FxHashMap::default();
        for member in tree.node(leaf).members.clone() {
            let chars: Vec<char> = member.name.chars().collect();
            if chars.len() < prefix_len {
                trace!(name = %member.name, prefix_len, "name too short for sub-bucketing");
                continue;
            }
            let prefix: String = chars[..prefix_len].iter().collect();
            if !buckets.contains_key(&prefix) {
                order.push(prefix.clone());
            }
            buckets.entry(prefix).or_default().push(member);
        }

        // Merge pass: an undersized bucket folds into the candidate with
        // the smallest prefix edit distance. First encountered with a
        // strictly smaller distance wins; buckets already merged away this
        // pass are excluded. A sole undersized bucket with no sibling is
        // simply not created.
        let mut removed: FxHashSet<String> = FxHashSet::default();
        for i in 0..order.len() {
            let prefix = order[i].clone();
            if removed.contains(&prefix) {
                continue;
            }
            if buckets[&prefix].len() >= self.min_family_size {
                continue;
            }

            let mut best: Option<(String, usize)> = None;
            for candidate in &order {
                if candidate == &prefix || removed.contains(candidate) {
                    continue;
                }
                let dist = edit_distance(&prefix, candidate);
                if best.as_ref().map_or(true, |(_, d)| dist < *d) {
                    best = Some((candidate.clone(), dist));
                }
            }

            let moved = buckets.remove(&prefix).unwrap_or_default();
            removed.insert(prefix.clone());
            if let Some((target, dist)) = best {
                trace!(from = %prefix, to = %target, dist, "merging undersized bucket");
                buckets.entry(target).or_default().extend(moved);
            }
            // No sibling at all: members stay in the parent bucket.
        }

        for prefix in order {
            if removed.contains(&prefix) {
                continue;
            }
            let members = buckets.remove(&prefix).unwrap_or_default();
            let child = tree.add_child(leaf, &prefix);
            tree.node_mut(child).members = members;
        }
    }

    /// Terminal families, depth-first.
    ///
    /// A node is terminal when it has no children, or when no breakpoint
    /// exists anywhere in its subtree and its depth exceeds the minimum
    /// informative prefix length. Otherwise descend — emitting, at
    /// informative depths, the members too short to have entered any child
    /// so the documented short-name filter is the only loss.
    pub fn families(&self, tree: &SymbolTree) -> Vec<Family> {
        let mut out = Vec::new();
        let mut stack = vec![SymbolTree::ROOT];

        while let Some(id) = stack.pop() {
            let node = tree.node(id);

            if node.is_leaf() {
                if !node.members.is_empty() {
                    out.push(Family {
                        prefix: node.full_path.clone(),
                        members: node.members.clone(),
                    });
                }
                continue;
            }

            if !subtree_has_breakpoint(tree, id) && node.depth > self.min_prefix_len {
                out.push(Family {
                    prefix: node.full_path.clone(),
                    members: node.members.clone(),
                });
                continue;
            }

            let leftover: Vec<SymbolRef> = node
                .members
                .iter()
                .filter(|m| m.name.chars().count() as u32 == node.depth)
                .cloned()
                .collect();
            if !leftover.is_empty() && node.depth > self.min_prefix_len {
                out.push(Family {
                    prefix: node.full_path.clone(),
                    members: leftover,
                });
            }

            for &child in node.children.iter().rev() {
                stack.push(child);
            }
        }

        out
    }
}

/// Bottom-up breakpoint computation: a node breaks when it has more
/// distinct sub-families than the average sub-family size would predict.
fn compute_breakpoints(tree: &mut SymbolTree) {
    // Reversed preorder visits children before their parent.
    let order = tree.depth_first();
    for id in order.into_iter().rev() {
        let node = tree.node(id);
        if node.is_leaf() {
            continue;
        }
        let sizes: Vec<usize> = node
            .children
            .iter()
            .map(|&c| tree.node(c).members.len())
            .collect();
        let sum: usize = sizes.iter().sum();
        let mean = sum as f64 / sizes.len() as f64;
        tree.node_mut(id).breakpoint = (sizes.len() as f64) > mean && sum != 0;
    }
}

fn subtree_has_breakpoint(tree: &SymbolTree, id: NodeId) -> bool {
    let mut stack = vec![id];
    while let Some(n) = stack.pop() {
        let node = tree.node(n);
        if node.breakpoint {
            return true;
        }
        stack.extend(node.children.iter().copied());
    }
    false
}
