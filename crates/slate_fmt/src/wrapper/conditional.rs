//! Conditional (ternary) expression rule.
//!
//! Expand puts `?` and `:` at the start of their own lines, one level
//! deeper than the expression. Collapse replaces the breaks with single
//! spaces and restores the markers' indent levels, so an immediate
//! wrap/unwrap round trip leaves no trace.

use slate_ast::{NodeId, SyntaxTree};

use crate::layout::Layout;
use crate::wrapper::WrapError;

pub(super) fn wrap(
    layout: &mut Layout,
    tree: &SyntaxTree,
    node: NodeId,
    consequent: NodeId,
) -> Result<(), WrapError> {
    let question = layout.find_previous("?", tree.first_token(consequent))?;
    let colon = layout.find_next(":", tree.last_token(consequent))?;
    let level = layout.node_indent_level(tree, node) + 1;

    layout.line_break_before(question);
    layout.set_indent_level(question, level);
    layout.line_break_before(colon);
    layout.set_indent_level(colon, level);

    Ok(())
}

pub(super) fn unwrap(
    layout: &mut Layout,
    tree: &SyntaxTree,
    node: NodeId,
    consequent: NodeId,
) -> Result<(), WrapError> {
    let question = layout.find_previous("?", tree.first_token(consequent))?;
    let colon = layout.find_next(":", tree.last_token(consequent))?;
    let level = layout.node_indent_level(tree, node);

    layout.no_line_break_before(question);
    layout.space_before(question);
    layout.set_indent_level(question, level);
    layout.no_line_break_before(colon);
    layout.space_before(colon);
    layout.set_indent_level(colon, level);

    Ok(())
}
