//! Programmatic stream/tree construction.
//!
//! The re-layout engine consumes a token stream and a syntax tree produced
//! by an external parser. `FixtureBuilder` gives embedders and tests a way
//! to assemble the two in lockstep without a parser: push tokens in stream
//! order, then register nodes over the token spans they cover.

use crate::node::{NodeId, NodeKind, SyntaxTree};
use crate::stream::TokenList;
use crate::token::{Token, TokenId};

/// Builds a `TokenList` and `SyntaxTree` pair.
#[derive(Default)]
pub struct FixtureBuilder {
    tokens: TokenList,
    tree: SyntaxTree,
}

impl FixtureBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a token to the stream.
    pub fn token(&mut self, token: Token) -> TokenId {
        self.tokens.push_back(token)
    }

    /// Register a node spanning `first_token..=last_token`.
    ///
    /// Children referenced by `kind` must already be registered.
    pub fn node(&mut self, kind: NodeKind, first_token: TokenId, last_token: TokenId) -> NodeId {
        self.tree.alloc(kind, first_token, last_token)
    }

    /// Finish building, yielding the tree and the stream.
    pub fn build(self) -> (SyntaxTree, TokenList) {
        (self.tree, self.tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builds_stream_and_tree_in_lockstep() {
        let mut builder = FixtureBuilder::new();
        let open = builder.token(Token::punctuator("["));
        let close = builder.token(Token::punctuator("]"));
        let array = builder.node(NodeKind::ArrayExpression { elements: vec![] }, open, close);

        let (tree, tokens) = builder.build();
        assert_eq!(tokens.texts(), ["[", "]"]);
        assert_eq!(tree.first_token(array), open);
        assert_eq!(tree.last_token(array), close);
    }
}
