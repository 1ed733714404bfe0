//! Syntax tree nodes.
//!
//! Nodes live in a flat arena (`SyntaxTree`) and refer to children by
//! `NodeId`. Every node records its boundary tokens: the first and last
//! tokens spanning its textual range in the companion `TokenList`. The
//! re-layout engine never inspects expression interiors beyond what the
//! category-specific child lists expose, so anything opaque is represented
//! as a plain `Expression` leaf.

use std::fmt;

use crate::category::NodeCategory;
use crate::token::TokenId;

/// Index into the node arena.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    /// Create a new `NodeId`.
    #[inline]
    pub const fn new(index: u32) -> Self {
        NodeId(index)
    }

    /// Get the index into the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// Category-specific shape of a node.
///
/// Child lists hold the children the re-layout engine iterates; `Expression`
/// is the opaque leaf used for anything whose interior the engine never
/// restructures (literal elements, property values, conditional branches).
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum NodeKind {
    ArrayExpression { elements: Vec<NodeId> },
    ArrayPattern { elements: Vec<NodeId> },
    ObjectExpression { properties: Vec<NodeId> },
    ObjectPattern { properties: Vec<NodeId> },
    ConditionalExpression { consequent: NodeId },
    FunctionExpression { body: NodeId },
    BlockStatement { statements: Vec<NodeId> },
    MemberExpression { property: NodeId, computed: bool },
    TemplateLiteral { expressions: Vec<NodeId> },
    VariableDeclaration { declarations: Vec<NodeId> },
    VariableDeclarator { init: Option<NodeId> },
    Expression,
}

impl NodeKind {
    /// The fieldless category tag for this kind.
    pub const fn category(&self) -> NodeCategory {
        match self {
            NodeKind::ArrayExpression { .. } => NodeCategory::ArrayExpression,
            NodeKind::ArrayPattern { .. } => NodeCategory::ArrayPattern,
            NodeKind::ObjectExpression { .. } => NodeCategory::ObjectExpression,
            NodeKind::ObjectPattern { .. } => NodeCategory::ObjectPattern,
            NodeKind::ConditionalExpression { .. } => NodeCategory::ConditionalExpression,
            NodeKind::FunctionExpression { .. } => NodeCategory::FunctionExpression,
            NodeKind::BlockStatement { .. } => NodeCategory::BlockStatement,
            NodeKind::MemberExpression { .. } => NodeCategory::MemberExpression,
            NodeKind::TemplateLiteral { .. } => NodeCategory::TemplateLiteral,
            NodeKind::VariableDeclaration { .. } => NodeCategory::VariableDeclaration,
            NodeKind::VariableDeclarator { .. } => NodeCategory::VariableDeclarator,
            NodeKind::Expression => NodeCategory::Expression,
        }
    }
}

/// A node together with its boundary tokens.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct NodeData {
    pub kind: NodeKind,
    /// First token of the node's textual span.
    pub first_token: TokenId,
    /// Last token of the node's textual span.
    pub last_token: TokenId,
}

/// Flat arena of syntax tree nodes.
///
/// Ownership is exclusive top-down: a node's children are reachable only
/// through its `NodeKind` child ids. The tree itself carries no parent
/// links; ancestor queries go through [`crate::ParentIndex`].
#[derive(Default)]
pub struct SyntaxTree {
    nodes: Vec<NodeData>,
}

impl SyntaxTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes in the arena.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the arena is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocate a node with the given kind and boundary tokens.
    pub fn alloc(&mut self, kind: NodeKind, first_token: TokenId, last_token: TokenId) -> NodeId {
        let id = NodeId::new(u32::try_from(self.nodes.len()).unwrap_or(u32::MAX));
        self.nodes.push(NodeData {
            kind,
            first_token,
            last_token,
        });
        id
    }

    /// The node stored under `id`.
    #[inline]
    pub fn get(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.index()]
    }

    /// The kind of the node under `id`.
    #[inline]
    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.get(id).kind
    }

    /// The category of the node under `id`.
    #[inline]
    pub fn category(&self, id: NodeId) -> NodeCategory {
        self.get(id).kind.category()
    }

    /// First token of the node's textual span.
    #[inline]
    pub fn first_token(&self, id: NodeId) -> TokenId {
        self.get(id).first_token
    }

    /// Last token of the node's textual span.
    #[inline]
    pub fn last_token(&self, id: NodeId) -> TokenId {
        self.get(id).last_token
    }

    /// Child ids of the node under `id`, in source order.
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        match self.kind(id) {
            NodeKind::ArrayExpression { elements } | NodeKind::ArrayPattern { elements } => {
                elements.clone()
            }
            NodeKind::ObjectExpression { properties } | NodeKind::ObjectPattern { properties } => {
                properties.clone()
            }
            NodeKind::ConditionalExpression { consequent } => vec![*consequent],
            NodeKind::FunctionExpression { body } => vec![*body],
            NodeKind::BlockStatement { statements } => statements.clone(),
            NodeKind::MemberExpression { property, .. } => vec![*property],
            NodeKind::TemplateLiteral { expressions } => expressions.clone(),
            NodeKind::VariableDeclaration { declarations } => declarations.clone(),
            NodeKind::VariableDeclarator { init } => init.iter().copied().collect(),
            NodeKind::Expression => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenId;

    #[test]
    fn category_matches_kind() {
        let kind = NodeKind::ArrayPattern { elements: vec![] };
        assert_eq!(kind.category(), NodeCategory::ArrayPattern);
        assert_eq!(kind.category().to_string(), "ArrayPattern");
    }

    #[test]
    fn children_in_source_order() {
        let mut tree = SyntaxTree::new();
        let t = TokenId::new(0);
        let a = tree.alloc(NodeKind::Expression, t, t);
        let b = tree.alloc(NodeKind::Expression, t, t);
        let arr = tree.alloc(
            NodeKind::ArrayExpression {
                elements: vec![a, b],
            },
            t,
            t,
        );
        assert_eq!(tree.children(arr), vec![a, b]);
        assert_eq!(tree.children(a), vec![]);
    }

    #[test]
    fn declarator_child_is_init() {
        let mut tree = SyntaxTree::new();
        let t = TokenId::new(0);
        let init = tree.alloc(NodeKind::Expression, t, t);
        let with_init = tree.alloc(NodeKind::VariableDeclarator { init: Some(init) }, t, t);
        let without = tree.alloc(NodeKind::VariableDeclarator { init: None }, t, t);
        assert_eq!(tree.children(with_init), vec![init]);
        assert_eq!(tree.children(without), vec![]);
    }
}
