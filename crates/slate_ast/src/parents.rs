//! Node-to-parent index.

use rustc_hash::FxHashMap;

use crate::node::{NodeId, SyntaxTree};

/// A precomputed, non-owning map from a node to its single parent.
///
/// Built once per formatting pass with one pre-order walk from the root.
/// The index is auxiliary lookup state: it never owns nodes and must be
/// rebuilt whenever the tree is restructured between passes.
#[derive(Default, Debug)]
pub struct ParentIndex {
    parents: FxHashMap<NodeId, NodeId>,
}

impl ParentIndex {
    /// Build the index for every node reachable from `root`.
    pub fn build(tree: &SyntaxTree, root: NodeId) -> Self {
        let mut parents = FxHashMap::default();
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            for child in tree.children(node) {
                parents.insert(child, node);
                stack.push(child);
            }
        }
        ParentIndex { parents }
    }

    /// Parent of `node`, or `None` for the root (and unreachable nodes).
    #[inline]
    pub fn parent_of(&self, node: NodeId) -> Option<NodeId> {
        self.parents.get(&node).copied()
    }

    /// Number of child-to-parent entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    /// Whether the index has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeKind;
    use crate::token::TokenId;

    #[test]
    fn build_walks_nested_children() {
        let mut tree = SyntaxTree::new();
        let t = TokenId::new(0);
        let init = tree.alloc(NodeKind::Expression, t, t);
        let declarator = tree.alloc(NodeKind::VariableDeclarator { init: Some(init) }, t, t);
        let declaration = tree.alloc(
            NodeKind::VariableDeclaration {
                declarations: vec![declarator],
            },
            t,
            t,
        );

        let parents = ParentIndex::build(&tree, declaration);
        assert_eq!(parents.parent_of(init), Some(declarator));
        assert_eq!(parents.parent_of(declarator), Some(declaration));
        assert_eq!(parents.parent_of(declaration), None);
        assert_eq!(parents.len(), 2);
    }
}
