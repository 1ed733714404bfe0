//! Layout surface.
//!
//! `Layout` owns the token stream for the duration of a formatting pass and
//! layers two pieces of state over it: a per-token indent table (logical
//! nesting depth, not literal columns) and the style configuration. All
//! whitespace, line-break, and separator edits the wrap/unwrap rules make
//! go through this surface; content tokens are never touched.
//!
//! Line-break insertion is idempotent (inserting next to an existing break
//! is a no-op) and consumes any directly adjacent horizontal whitespace so
//! wrapping never leaves trailing spaces on a line.

use rustc_hash::FxHashMap;
use thiserror::Error;

use slate_ast::{NodeId, SyntaxTree, Token, TokenId, TokenKind, TokenList};

use crate::config::FormatOptions;

/// The first and last tokens spanning a node's textual range.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct BoundaryTokens {
    pub first: TokenId,
    pub last: TokenId,
}

/// A marker token the layout surface expected to find was not there.
///
/// This indicates a mismatch between the syntax tree and the token stream
/// (for example a stale tree after an unrelated mutation). It is a fatal
/// integration error: the current formatting pass must abort, since
/// continuing would silently corrupt output.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum LayoutError {
    #[error("expected a `{needle}` token adjacent to the node span, but none was found")]
    TokenNotFound { needle: &'static str },

    #[error("indent range end {last:?} is not reachable from {first:?}")]
    RangeEndNotReached { first: TokenId, last: TokenId },
}

/// Indentation, line-break, spacing, and separator operations addressed by
/// node or by token.
pub struct Layout {
    tokens: TokenList,
    indents: FxHashMap<TokenId, usize>,
    options: FormatOptions,
}

impl Layout {
    /// Take ownership of a token stream for one formatting pass.
    pub fn new(tokens: TokenList, options: FormatOptions) -> Self {
        Self {
            tokens,
            indents: FxHashMap::default(),
            options,
        }
    }

    /// The current style configuration.
    #[inline]
    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Read access to the underlying stream.
    #[inline]
    pub fn tokens(&self) -> &TokenList {
        &self.tokens
    }

    /// Mutable access to the underlying stream.
    #[inline]
    pub fn tokens_mut(&mut self) -> &mut TokenList {
        &mut self.tokens
    }

    /// Give the stream back, ending the pass.
    pub fn into_tokens(self) -> TokenList {
        self.tokens
    }

    // ------------------------------------------------------------------
    // Node addressing
    // ------------------------------------------------------------------

    /// Boundary tokens of a node.
    pub fn boundary_tokens(&self, tree: &SyntaxTree, node: NodeId) -> BoundaryTokens {
        BoundaryTokens {
            first: tree.first_token(node),
            last: tree.last_token(node),
        }
    }

    /// First token of a node.
    #[inline]
    pub fn first_token(&self, tree: &SyntaxTree, node: NodeId) -> TokenId {
        tree.first_token(node)
    }

    /// Last token of a node.
    #[inline]
    pub fn last_token(&self, tree: &SyntaxTree, node: NodeId) -> TokenId {
        tree.last_token(node)
    }

    // ------------------------------------------------------------------
    // Indent levels
    // ------------------------------------------------------------------

    /// Indent level of a token. Tokens start at level 0.
    #[inline]
    pub fn indent_level(&self, token: TokenId) -> usize {
        self.indents.get(&token).copied().unwrap_or(0)
    }

    /// Set the indent level of a single token.
    #[inline]
    pub fn set_indent_level(&mut self, token: TokenId, level: usize) {
        self.indents.insert(token, level);
    }

    /// Set the indent level of every token from `first` through `last`,
    /// inclusive, in stream order.
    ///
    /// Fails without mutating anything when `last` is not reachable from
    /// `first` (a deleted token, or a reversed range). A silent walk to the
    /// end of the stream would re-indent tokens outside the range.
    pub fn set_indent_level_between(
        &mut self,
        first: TokenId,
        last: TokenId,
        level: usize,
    ) -> Result<(), LayoutError> {
        let mut range = Vec::new();
        let mut cursor = Some(first);
        loop {
            let Some(id) = cursor else {
                return Err(LayoutError::RangeEndNotReached { first, last });
            };
            range.push(id);
            if id == last {
                break;
            }
            cursor = self.tokens.next(id);
        }
        for id in range {
            self.indents.insert(id, level);
        }
        Ok(())
    }

    /// Indent level of a node: the level of its first token.
    #[inline]
    pub fn node_indent_level(&self, tree: &SyntaxTree, node: NodeId) -> usize {
        self.indent_level(tree.first_token(node))
    }

    /// Set the indent level of a node's entire token span.
    pub fn set_node_indent_level(
        &mut self,
        tree: &SyntaxTree,
        node: NodeId,
        level: usize,
    ) -> Result<(), LayoutError> {
        self.set_indent_level_between(tree.first_token(node), tree.last_token(node), level)
    }

    // ------------------------------------------------------------------
    // Line breaks and spaces
    // ------------------------------------------------------------------

    /// Ensure a line break immediately follows `token`.
    ///
    /// A directly following whitespace token is consumed; if the break is
    /// already there this is a no-op.
    pub fn line_break_after(&mut self, token: TokenId) {
        if let Some(next) = self.tokens.next(token) {
            match self.tokens.get(next).kind {
                TokenKind::LineBreak => return,
                TokenKind::Whitespace => self.tokens.delete(next),
                _ => {}
            }
        }
        self.tokens.insert_after(token, Token::line_break());
    }

    /// Ensure a line break immediately precedes `token`.
    ///
    /// A directly preceding whitespace token is consumed; if the break is
    /// already there this is a no-op.
    pub fn line_break_before(&mut self, token: TokenId) {
        if let Some(prev) = self.tokens.prev(token) {
            match self.tokens.get(prev).kind {
                TokenKind::LineBreak => return,
                TokenKind::Whitespace => self.tokens.delete(prev),
                _ => {}
            }
        }
        self.tokens.insert_before(token, Token::line_break());
    }

    /// Remove the line break preceding `token`, if any, together with the
    /// old indentation whitespace between the break and the token.
    pub fn no_line_break_before(&mut self, token: TokenId) {
        let mut cursor = self.tokens.prev(token);
        while let Some(id) = cursor {
            match self.tokens.get(id).kind {
                TokenKind::Whitespace => {
                    let prev = self.tokens.prev(id);
                    self.tokens.delete(id);
                    cursor = prev;
                }
                TokenKind::LineBreak => {
                    self.tokens.delete(id);
                    return;
                }
                _ => return,
            }
        }
    }

    /// Remove the line break following `token`, if any, together with the
    /// indentation whitespace that follows the break.
    pub fn no_line_break_after(&mut self, token: TokenId) {
        let mut cursor = self.tokens.next(token);
        let mut pending_whitespace = Vec::new();
        while let Some(id) = cursor {
            match self.tokens.get(id).kind {
                TokenKind::Whitespace => {
                    pending_whitespace.push(id);
                    cursor = self.tokens.next(id);
                }
                TokenKind::LineBreak => {
                    // Also drop indentation on the continuation line.
                    if let Some(indent) = self.tokens.next(id) {
                        if self.tokens.get(indent).kind == TokenKind::Whitespace {
                            self.tokens.delete(indent);
                        }
                    }
                    self.tokens.delete(id);
                    for ws in pending_whitespace {
                        self.tokens.delete(ws);
                    }
                    return;
                }
                _ => return,
            }
        }
    }

    /// Ensure exactly one plain space precedes `token`.
    pub fn space_before(&mut self, token: TokenId) {
        match self.tokens.prev(token) {
            Some(prev) if self.tokens.get(prev).kind == TokenKind::Whitespace => {
                self.tokens.get_mut(prev).text = " ".to_owned();
            }
            _ => {
                self.tokens.insert_before(token, Token::space());
            }
        }
    }

    // ------------------------------------------------------------------
    // Separators
    // ------------------------------------------------------------------

    /// Ensure a separator comma follows the node's last token.
    pub fn comma_after(&mut self, tree: &SyntaxTree, node: NodeId) {
        let last = tree.last_token(node);
        if let Some(next) = self.tokens.next_significant(last) {
            if self.tokens.get(next).text == "," {
                return;
            }
        }
        self.tokens.insert_after(last, Token::punctuator(","));
    }

    /// Ensure no separator comma follows the node's last token.
    pub fn no_comma_after(&mut self, tree: &SyntaxTree, node: NodeId) {
        let last = tree.last_token(node);
        if let Some(next) = self.tokens.next_significant(last) {
            if self.tokens.get(next).text == "," {
                self.tokens.delete(next);
            }
        }
    }

    // ------------------------------------------------------------------
    // Marker lookup
    // ------------------------------------------------------------------

    /// Nearest token before `from` whose text equals `needle`.
    pub fn find_previous(
        &self,
        needle: &'static str,
        from: TokenId,
    ) -> Result<TokenId, LayoutError> {
        let mut cursor = self.tokens.prev(from);
        while let Some(id) = cursor {
            if self.tokens.get(id).text == needle {
                return Ok(id);
            }
            cursor = self.tokens.prev(id);
        }
        Err(LayoutError::TokenNotFound { needle })
    }

    /// Nearest token after `from` whose text equals `needle`.
    pub fn find_next(&self, needle: &'static str, from: TokenId) -> Result<TokenId, LayoutError> {
        let mut cursor = self.tokens.next(from);
        while let Some(id) = cursor {
            if self.tokens.get(id).text == needle {
                return Ok(id);
            }
            cursor = self.tokens.next(id);
        }
        Err(LayoutError::TokenNotFound { needle })
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    /// Serialize the stream to text.
    ///
    /// Token texts are emitted in stream order; after each line break, the
    /// next token's indent level is rendered as `indent_width` spaces per
    /// level. Indent levels on tokens not at the start of a line have no
    /// rendered effect.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let mut cursor = self.tokens.first();
        while let Some(id) = cursor {
            let token = self.tokens.get(id);
            out.push_str(&token.text);
            let next = self.tokens.next(id);
            if token.kind == TokenKind::LineBreak {
                if let Some(next_id) = next {
                    if self.tokens.get(next_id).kind != TokenKind::LineBreak {
                        let level = self.indent_level(next_id);
                        out.push_str(&" ".repeat(level * self.options.indent_width));
                    }
                }
            }
            cursor = next;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn layout_of(tokens: &[Token]) -> (Layout, Vec<TokenId>) {
        let mut list = TokenList::new();
        let ids = tokens.iter().cloned().map(|t| list.push_back(t)).collect();
        (Layout::new(list, FormatOptions::default()), ids)
    }

    #[test]
    fn line_break_after_consumes_adjacent_space() {
        let (mut layout, ids) = layout_of(&[
            Token::punctuator(","),
            Token::space(),
            Token::identifier("b"),
        ]);
        layout.line_break_after(ids[0]);
        assert_eq!(layout.tokens().texts(), [",", "\n", "b"]);
    }

    #[test]
    fn line_break_after_is_idempotent() {
        let (mut layout, ids) = layout_of(&[Token::punctuator("{"), Token::identifier("a")]);
        layout.line_break_after(ids[0]);
        layout.line_break_after(ids[0]);
        assert_eq!(layout.tokens().texts(), ["{", "\n", "a"]);
    }

    #[test]
    fn line_break_before_consumes_adjacent_space() {
        let (mut layout, ids) = layout_of(&[
            Token::identifier("a"),
            Token::space(),
            Token::punctuator("?"),
        ]);
        layout.line_break_before(ids[2]);
        assert_eq!(layout.tokens().texts(), ["a", "\n", "?"]);
    }

    #[test]
    fn no_line_break_before_removes_break_and_indentation() {
        let (mut layout, ids) = layout_of(&[
            Token::identifier("a"),
            Token::line_break(),
            Token::whitespace("    "),
            Token::punctuator("?"),
        ]);
        layout.no_line_break_before(ids[3]);
        assert_eq!(layout.tokens().texts(), ["a", "?"]);
    }

    #[test]
    fn no_line_break_before_leaves_inline_neighbors_alone() {
        let (mut layout, ids) = layout_of(&[Token::identifier("a"), Token::punctuator("?")]);
        layout.no_line_break_before(ids[1]);
        assert_eq!(layout.tokens().texts(), ["a", "?"]);
    }

    #[test]
    fn no_line_break_after_removes_break_and_continuation_indent() {
        let (mut layout, ids) = layout_of(&[
            Token::identifier("a"),
            Token::line_break(),
            Token::whitespace("    "),
            Token::template_element("}`"),
        ]);
        layout.no_line_break_after(ids[0]);
        assert_eq!(layout.tokens().texts(), ["a", "}`"]);
    }

    #[test]
    fn space_before_inserts_or_normalizes() {
        let (mut layout, ids) = layout_of(&[
            Token::identifier("a"),
            Token::whitespace("   "),
            Token::punctuator("?"),
            Token::identifier("b"),
        ]);
        layout.space_before(ids[2]);
        layout.space_before(ids[3]);
        assert_eq!(layout.tokens().texts(), ["a", " ", "?", " ", "b"]);
    }

    #[test]
    fn comma_after_respects_existing_separator() {
        let mut list = TokenList::new();
        let a = list.push_back(Token::identifier("a"));
        list.push_back(Token::punctuator(","));
        let mut tree = SyntaxTree::new();
        let node = tree.alloc(slate_ast::NodeKind::Expression, a, a);

        let mut layout = Layout::new(list, FormatOptions::default());
        layout.comma_after(&tree, node);
        assert_eq!(layout.tokens().texts(), ["a", ","]);

        layout.no_comma_after(&tree, node);
        assert_eq!(layout.tokens().texts(), ["a"]);

        layout.comma_after(&tree, node);
        assert_eq!(layout.tokens().texts(), ["a", ","]);
    }

    #[test]
    fn find_markers_in_both_directions() {
        let (layout, ids) = layout_of(&[
            Token::punctuator("?"),
            Token::space(),
            Token::identifier("b"),
            Token::space(),
            Token::punctuator(":"),
        ]);
        assert_eq!(layout.find_previous("?", ids[2]), Ok(ids[0]));
        assert_eq!(layout.find_next(":", ids[2]), Ok(ids[4]));
        assert_eq!(
            layout.find_next("?", ids[2]),
            Err(LayoutError::TokenNotFound { needle: "?" })
        );
    }

    #[test]
    fn render_applies_indent_after_breaks() {
        let (mut layout, ids) = layout_of(&[
            Token::punctuator("{"),
            Token::line_break(),
            Token::identifier("a"),
            Token::line_break(),
            Token::punctuator("}"),
        ]);
        layout.set_indent_level(ids[2], 1);
        assert_eq!(layout.render(), "{\n    a\n}");
    }

    #[test]
    fn set_indent_level_between_is_inclusive() {
        let (mut layout, ids) = layout_of(&[
            Token::identifier("a"),
            Token::punctuator(","),
            Token::identifier("b"),
        ]);
        assert_eq!(layout.set_indent_level_between(ids[0], ids[2], 2), Ok(()));
        assert_eq!(layout.indent_level(ids[0]), 2);
        assert_eq!(layout.indent_level(ids[1]), 2);
        assert_eq!(layout.indent_level(ids[2]), 2);
    }

    #[test]
    fn set_indent_level_between_rejects_detached_end() {
        let (mut layout, ids) = layout_of(&[
            Token::identifier("a"),
            Token::punctuator(","),
            Token::identifier("b"),
        ]);
        layout.tokens_mut().delete(ids[1]);
        assert_eq!(
            layout.set_indent_level_between(ids[0], ids[1], 3),
            Err(LayoutError::RangeEndNotReached {
                first: ids[0],
                last: ids[1],
            })
        );
        assert_eq!(layout.indent_level(ids[0]), 0);
        assert_eq!(layout.indent_level(ids[2]), 0);
    }
}
