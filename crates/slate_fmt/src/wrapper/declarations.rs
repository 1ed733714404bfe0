//! Multi-declarator variable declaration rule.
//!
//! Expand breaks after the separator comma following each declarator and
//! indents every declarator after the first one level past the statement.
//! The first declarator stays put: it shares a line with the `let`/`const`/
//! `var` keyword. Declarations with a single declarator are left alone,
//! and no collapse rule exists.

use slate_ast::{NodeId, SyntaxTree};

use crate::layout::Layout;
use crate::wrapper::WrapError;

pub(super) fn wrap(
    layout: &mut Layout,
    tree: &SyntaxTree,
    node: NodeId,
    declarations: &[NodeId],
) -> Result<(), WrapError> {
    if declarations.len() <= 1 {
        return Ok(());
    }

    let level = layout.node_indent_level(tree, node) + 1;

    for (i, &declarator) in declarations.iter().enumerate() {
        let declarator_last = tree.last_token(declarator);
        if let Some(maybe_comma) = layout.tokens().next_significant(declarator_last) {
            if layout.tokens().get(maybe_comma).text == "," {
                layout.line_break_after(maybe_comma);
            }
        }

        if i > 0 {
            layout.set_node_indent_level(tree, declarator, level)?;
        }
    }

    Ok(())
}
