//! Interpolated-string (template) literal rule.
//!
//! Expand puts every embedded expression on its own line, one level deeper
//! than the literal; the quasi chunks around them keep their places.
//! Collapse removes the surrounding breaks and restores each expression's
//! indent level to the literal's, so nothing dangles after a round trip.

use slate_ast::{NodeId, SyntaxTree};

use crate::layout::Layout;
use crate::wrapper::WrapError;

pub(super) fn wrap(
    layout: &mut Layout,
    tree: &SyntaxTree,
    node: NodeId,
    expressions: &[NodeId],
) -> Result<(), WrapError> {
    let level = layout.node_indent_level(tree, node) + 1;

    for &child in expressions {
        layout.line_break_before(tree.first_token(child));
        layout.line_break_after(tree.last_token(child));
        layout.set_node_indent_level(tree, child, level)?;
    }

    Ok(())
}

pub(super) fn unwrap(
    layout: &mut Layout,
    tree: &SyntaxTree,
    node: NodeId,
    expressions: &[NodeId],
) -> Result<(), WrapError> {
    let level = layout.node_indent_level(tree, node);

    for &child in expressions {
        layout.no_line_break_before(tree.first_token(child));
        layout.no_line_break_after(tree.last_token(child));
        layout.set_node_indent_level(tree, child, level)?;
    }

    Ok(())
}
