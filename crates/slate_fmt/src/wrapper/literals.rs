//! Array/object literal and destructuring-pattern rules.
//!
//! Expand puts the opening and closing boundary tokens on their own lines,
//! breaks after each child's separator comma, applies the trailing-comma
//! policy to the last child, and re-indents the body one level past the
//! construct (two past it when the construct initializes the first of
//! several declarators).
//!
//! Collapse is defined only for an empty body with no interior comments;
//! everything else is left untouched.

use slate_ast::{NodeId, ParentIndex, SyntaxTree};

use crate::layout::{BoundaryTokens, Layout};
use crate::wrapper::{increases_declaration_indent, WrapError};

pub(super) fn wrap(
    layout: &mut Layout,
    tree: &SyntaxTree,
    parents: &ParentIndex,
    node: NodeId,
    children: &[NodeId],
) -> Result<(), WrapError> {
    let BoundaryTokens { first, last } = layout.boundary_tokens(tree, node);
    let first_body = layout.tokens().next_significant_or_comment(first);

    let mut closing_level = layout.node_indent_level(tree, node);
    let mut body_level = closing_level + 1;
    if increases_declaration_indent(tree, parents, node) {
        closing_level += 1;
        body_level += 1;
    }

    layout.line_break_after(first);
    layout.line_break_before(last);
    layout.set_indent_level(last, closing_level);

    if !children.is_empty() {
        for &child in children {
            let child_last = tree.last_token(child);
            if let Some(maybe_comma) = layout.tokens().next_significant(child_last) {
                if layout.tokens().get(maybe_comma).text == "," {
                    layout.line_break_after(maybe_comma);
                }
            }
        }

        // The closing boundary's line break already follows the last child.
        if let Some(&last_child) = children.last() {
            if layout.options().trailing_commas {
                layout.comma_after(tree, last_child);
            } else {
                layout.no_comma_after(tree, last_child);
            }
        }
    }

    // The trailing-comma edit above may have deleted or added the token
    // ending the body, so the body range is resolved only now.
    let last_body = layout.tokens().prev_significant_or_comment(last);
    if let (Some(first_body), Some(last_body)) = (first_body, last_body) {
        if first_body != last {
            layout.set_indent_level_between(first_body, last_body, body_level)?;
        }
    }

    Ok(())
}

pub(super) fn unwrap(
    layout: &mut Layout,
    tree: &SyntaxTree,
    node: NodeId,
    children: &[NodeId],
) -> Result<(), WrapError> {
    // Collapsing a body that still has content would need a policy for
    // relocating its comments and separators; only the empty case is
    // defined, and anything else is left as-is.
    if !children.is_empty() {
        return Ok(());
    }

    let BoundaryTokens { first, last } = layout.boundary_tokens(tree, node);

    // A comment between the boundaries blocks the collapse.
    if layout.tokens().next_significant_or_comment(first) != Some(last) {
        return Ok(());
    }

    let mut cursor = layout.tokens().next(first);
    while let Some(id) = cursor {
        if id == last {
            break;
        }
        let next = layout.tokens().next(id);
        if layout.tokens().is_whitespace_or_line_break(id) {
            layout.tokens_mut().delete(id);
        }
        cursor = next;
    }

    Ok(())
}
