//! Wrap/unwrap rules and the dispatching façade.
//!
//! Each rule family lives in its own module and mutates the shared layout
//! surface in place; no new tree is produced. The [`Wrapper`] façade maps a
//! node's category to the matching rule with an exhaustive match, so the
//! set of supported constructs is a compile-time-visible decision.
//!
//! Fewer categories support unwrap than wrap. Callers that need to branch
//! on support should consult [`can_wrap`] / [`can_unwrap`] instead of
//! probing for the `Unsupported*` errors.
//!
//! # Rules
//!
//! - [`literals`]: array/object literals and destructuring patterns
//! - [`conditional`]: ternary expressions
//! - [`functions`]: function bodies (wrap only)
//! - [`members`]: non-computed property access (wrap only)
//! - [`templates`]: interpolated-string literals
//! - [`declarations`]: multi-declarator variable declarations (wrap only)

mod conditional;
mod declarations;
mod functions;
mod literals;
mod members;
mod templates;


use thiserror::Error;
use tracing::trace;

use slate_ast::{NodeCategory, NodeId, NodeKind, ParentIndex, SyntaxTree};

use crate::layout::{Layout, LayoutError};

/// A wrap/unwrap contract violation.
///
/// Every variant is fatal for the current formatting pass: the engine
/// performs no retries and no partial recovery, since these errors indicate
/// integration bugs between the driver, the tree, and the token stream.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum WrapError {
    /// `wrap` was invoked for a category with no expand rule.
    #[error("no wrap rule is registered for {0} nodes")]
    UnsupportedWrap(NodeCategory),

    /// `unwrap` was invoked for a category with no collapse rule.
    #[error("no unwrap rule is registered for {0} nodes")]
    UnsupportedUnwrap(NodeCategory),

    /// An expected marker token was missing from the stream.
    #[error(transparent)]
    Layout(#[from] LayoutError),
}

/// Whether nodes of this category have an expand rule.
pub const fn can_wrap(category: NodeCategory) -> bool {
    match category {
        NodeCategory::ArrayExpression
        | NodeCategory::ArrayPattern
        | NodeCategory::ObjectExpression
        | NodeCategory::ObjectPattern
        | NodeCategory::ConditionalExpression
        | NodeCategory::FunctionExpression
        | NodeCategory::MemberExpression
        | NodeCategory::TemplateLiteral
        | NodeCategory::VariableDeclaration => true,
        NodeCategory::BlockStatement
        | NodeCategory::VariableDeclarator
        | NodeCategory::Expression => false,
    }
}

/// Whether nodes of this category have a collapse rule.
///
/// Note that the literal/pattern collapse rules only act on empty bodies
/// with no interior comments; on anything else they are a safe no-op.
pub const fn can_unwrap(category: NodeCategory) -> bool {
    match category {
        NodeCategory::ArrayExpression
        | NodeCategory::ArrayPattern
        | NodeCategory::ObjectExpression
        | NodeCategory::ObjectPattern
        | NodeCategory::ConditionalExpression
        | NodeCategory::TemplateLiteral => true,
        NodeCategory::FunctionExpression
        | NodeCategory::MemberExpression
        | NodeCategory::VariableDeclaration
        | NodeCategory::BlockStatement
        | NodeCategory::VariableDeclarator
        | NodeCategory::Expression => false,
    }
}

/// Is `node` the initializer of the first declarator in a declaration that
/// binds more than one declarator?
///
/// Such initializers sit one level deeper than their statement, because the
/// declarator list itself consumes an indent level when it wraps. This is
/// the one piece of nesting detection shared by the literal and
/// function-body rules.
pub(crate) fn increases_declaration_indent(
    tree: &SyntaxTree,
    parents: &ParentIndex,
    node: NodeId,
) -> bool {
    let Some(parent) = parents.parent_of(node) else {
        return false;
    };
    let NodeKind::VariableDeclarator { init } = tree.kind(parent) else {
        return false;
    };
    if *init != Some(node) {
        return false;
    }
    let Some(grandparent) = parents.parent_of(parent) else {
        return false;
    };
    let NodeKind::VariableDeclaration { declarations } = tree.kind(grandparent) else {
        return false;
    };
    declarations.len() > 1 && declarations.first() == Some(&parent)
}

/// Dispatches `wrap` / `unwrap` to the rule registered for a node's
/// category.
///
/// The wrapper borrows the tree, the parent index, and the layout surface
/// for one formatting pass; each rule invocation runs to completion before
/// the next begins and retains no token handles across calls.
pub struct Wrapper<'a> {
    tree: &'a SyntaxTree,
    parents: &'a ParentIndex,
    layout: &'a mut Layout,
}

impl<'a> Wrapper<'a> {
    /// Create a wrapper over shared formatting state.
    pub fn new(tree: &'a SyntaxTree, parents: &'a ParentIndex, layout: &'a mut Layout) -> Self {
        Self {
            tree,
            parents,
            layout,
        }
    }

    /// Expand the node's construct onto multiple indented lines.
    pub fn wrap(&mut self, node: NodeId) -> Result<(), WrapError> {
        let kind = self.tree.kind(node);
        trace!(node = node.raw(), category = %kind.category(), "wrap");

        match kind {
            NodeKind::ArrayExpression { elements } | NodeKind::ArrayPattern { elements } => {
                literals::wrap(self.layout, self.tree, self.parents, node, elements)
            }
            NodeKind::ObjectExpression { properties } | NodeKind::ObjectPattern { properties } => {
                literals::wrap(self.layout, self.tree, self.parents, node, properties)
            }
            NodeKind::ConditionalExpression { consequent } => {
                conditional::wrap(self.layout, self.tree, node, *consequent)
            }
            NodeKind::FunctionExpression { body } => {
                functions::wrap(self.layout, self.tree, self.parents, node, *body)
            }
            NodeKind::MemberExpression { property, computed } => {
                members::wrap(self.layout, self.tree, node, *property, *computed)
            }
            NodeKind::TemplateLiteral { expressions } => {
                templates::wrap(self.layout, self.tree, node, expressions)
            }
            NodeKind::VariableDeclaration { declarations } => {
                declarations::wrap(self.layout, self.tree, node, declarations)
            }
            NodeKind::BlockStatement { .. }
            | NodeKind::VariableDeclarator { .. }
            | NodeKind::Expression => Err(WrapError::UnsupportedWrap(kind.category())),
        }
    }

    /// Collapse the node's construct back onto one line.
    pub fn unwrap(&mut self, node: NodeId) -> Result<(), WrapError> {
        let kind = self.tree.kind(node);
        trace!(node = node.raw(), category = %kind.category(), "unwrap");

        match kind {
            NodeKind::ArrayExpression { elements } | NodeKind::ArrayPattern { elements } => {
                literals::unwrap(self.layout, self.tree, node, elements)
            }
            NodeKind::ObjectExpression { properties } | NodeKind::ObjectPattern { properties } => {
                literals::unwrap(self.layout, self.tree, node, properties)
            }
            NodeKind::ConditionalExpression { consequent } => {
                conditional::unwrap(self.layout, self.tree, node, *consequent)
            }
            NodeKind::TemplateLiteral { expressions } => {
                templates::unwrap(self.layout, self.tree, node, expressions)
            }
            NodeKind::FunctionExpression { .. }
            | NodeKind::MemberExpression { .. }
            | NodeKind::VariableDeclaration { .. }
            | NodeKind::BlockStatement { .. }
            | NodeKind::VariableDeclarator { .. }
            | NodeKind::Expression => Err(WrapError::UnsupportedUnwrap(kind.category())),
        }
    }
}
