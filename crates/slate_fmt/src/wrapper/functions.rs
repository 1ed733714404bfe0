//! Function-body expansion rule.
//!
//! Operates on the boundary tokens of the function's body block, not the
//! whole function node: the brace goes on its own line, the body indents
//! one level past the function (two past it when the function initializes
//! the first of several declarators). Collapsing a function body is not
//! supported.

use slate_ast::{NodeId, ParentIndex, SyntaxTree};

use crate::layout::{BoundaryTokens, Layout};
use crate::wrapper::{increases_declaration_indent, WrapError};

pub(super) fn wrap(
    layout: &mut Layout,
    tree: &SyntaxTree,
    parents: &ParentIndex,
    node: NodeId,
    body: NodeId,
) -> Result<(), WrapError> {
    let BoundaryTokens { first, last } = layout.boundary_tokens(tree, body);
    let first_body = layout.tokens().next_significant_or_comment(first);
    let last_body = layout.tokens().prev_significant_or_comment(last);

    let mut closing_level = layout.node_indent_level(tree, node);
    if increases_declaration_indent(tree, parents, node) {
        closing_level += 1;
    }
    let body_level = closing_level + 1;

    layout.line_break_after(first);
    layout.line_break_before(last);
    layout.set_indent_level(last, closing_level);

    if let (Some(first_body), Some(last_body)) = (first_body, last_body) {
        if first_body != last {
            layout.set_indent_level_between(first_body, last_body, body_level)?;
        }
    }

    Ok(())
}
