//! Property-access (member) expression rule.
//!
//! Expand moves the `.` to the start of its own line, one level deeper
//! than the expression. Computed access (`obj[expr]`) has no dot to move
//! and is never restructured. No collapse rule exists.

use slate_ast::{NodeId, SyntaxTree};

use crate::layout::Layout;
use crate::wrapper::WrapError;

pub(super) fn wrap(
    layout: &mut Layout,
    tree: &SyntaxTree,
    node: NodeId,
    property: NodeId,
    computed: bool,
) -> Result<(), WrapError> {
    if computed {
        return Ok(());
    }

    let dot = layout.find_previous(".", tree.first_token(property))?;
    let level = layout.node_indent_level(tree, node) + 1;

    layout.line_break_before(dot);
    layout.set_indent_level(dot, level);

    Ok(())
}
