//! Generic symbol tree shared by the namespace builder and the family
//! clusterer.
//!
//! One arena-backed tree type, parameterized over how a name decomposes
//! into segments (`Segmenter`): delimiter splitting for namespaced
//! languages, fixed-width prefix slicing for flat names. Nodes are created
//! lazily on insert and never deleted; trees are rebuilt per run.

use provenance_core::types::collections::FxHashMap;
use provenance_core::types::symbol::SymbolRef;
use smallvec::SmallVec;

/// Index of a node inside the tree arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

/// How a full name decomposes into tree segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segmenter {
    /// Split on a package delimiter ('.' for Java/.NET-style names).
    Delimited(char),
    /// Children are keyed by synthetic fixed-width prefixes of the name.
    FixedPrefix,
}

/// One segment of a name path.
#[derive(Debug, Clone)]
pub struct TreeNode {
    /// This node's own segment (or synthetic prefix).
    pub segment: String,
    /// Path accumulated from the root. Empty for the root itself.
    pub full_path: String,
    /// Root is 0; a child is always its parent's depth + 1.
    pub depth: u32,
    /// Children in insertion order.
    pub children: SmallVec<[NodeId; 4]>,
    /// Every symbol whose name passes through this node's prefix.
    pub members: Vec<SymbolRef>,
    /// Set post-hoc by the clusterer: this node's children subdivide its
    /// members more finely than the average child size predicts.
    pub breakpoint: bool,
}

impl TreeNode {
    fn new(segment: String, full_path: String, depth: u32) -> Self {
        Self {
            segment,
            full_path,
            depth,
            children: SmallVec::new(),
            members: Vec::new(),
            breakpoint: false,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Arena-backed prefix tree over symbol names.
pub struct SymbolTree {
    nodes: Vec<TreeNode>,
    segmenter: Segmenter,
    /// (parent, segment) → child, so repeated inserts stay O(1) per level.
    child_index: FxHashMap<(NodeId, String), NodeId>,
}

impl SymbolTree {
    pub const ROOT: NodeId = NodeId(0);

    pub fn new(segmenter: Segmenter) -> Self {
        Self {
            nodes: vec![TreeNode::new(String::new(), String::new(), 0)],
            segmenter,
            child_index: FxHashMap::default(),
        }
    }

    pub fn segmenter(&self) -> Segmenter {
        self.segmenter
    }

    pub fn node(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.0 as usize]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut TreeNode {
        &mut self.nodes[id.0 as usize]
    }

    /// Children of a node, in insertion order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    /// Symbols whose names pass through this node's prefix.
    pub fn members(&self, id: NodeId) -> &[SymbolRef] {
        &self.node(id).members
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1 && self.node(Self::ROOT).members.is_empty()
    }

    /// Existing child with exactly this segment, if any.
    pub fn child_by_segment(&self, parent: NodeId, segment: &str) -> Option<NodeId> {
        self.child_index
            .get(&(parent, segment.to_string()))
            .copied()
    }

    /// Find-or-create a child under `parent`.
    ///
    /// Matching is exact segment equality, so re-adding is idempotent.
    /// The child's full path derives from the segmenter: parent path plus
    /// delimiter plus segment, or the synthetic prefix itself.
    pub fn add_child(&mut self, parent: NodeId, segment: &str) -> NodeId {
        if let Some(existing) = self.child_by_segment(parent, segment) {
            return existing;
        }

        let parent_node = self.node(parent);
        let full_path = match self.segmenter {
            Segmenter::Delimited(d) => {
                if parent_node.full_path.is_empty() {
                    segment.to_string()
                } else {
                    format!("{}{}{}", parent_node.full_path, d, segment)
                }
            }
            Segmenter::FixedPrefix => segment.to_string(),
        };
        let depth = parent_node.depth + 1;

        let id = NodeId(self.nodes.len() as u32);
        self.nodes
            .push(TreeNode::new(segment.to_string(), full_path, depth));
        self.node_mut(parent).children.push(id);
        self.child_index.insert((parent, segment.to_string()), id);
        id
    }

    /// Insert a qualified name, walking or creating one node per segment
    /// and appending `item` to the members of every node visited — a
    /// node's members are the union of all items under its prefix.
    ///
    /// Only meaningful for the delimited strategy; fixed-prefix trees are
    /// grown by the clusterer's expansion passes instead.
    pub fn insert(&mut self, full_name: &str, item: SymbolRef) {
        let delimiter = match self.segmenter {
            Segmenter::Delimited(d) => d,
            Segmenter::FixedPrefix => {
                debug_assert!(false, "insert() requires a delimited tree");
                return;
            }
        };

        self.node_mut(Self::ROOT).members.push(item.clone());

        let mut cursor = Self::ROOT;
        for segment in full_name.split(delimiter).filter(|s| !s.is_empty()) {
            cursor = self.add_child(cursor, segment);
            self.node_mut(cursor).members.push(item.clone());
        }
    }

    /// Node ids in depth-first order, children in insertion order.
    pub fn depth_first(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![Self::ROOT];
        while let Some(id) = stack.pop() {
            order.push(id);
            for &child in self.node(id).children.iter().rev() {
                stack.push(child);
            }
        }
        order
    }
}
