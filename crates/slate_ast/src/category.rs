//! Node categories.

use std::fmt;

/// The syntactic kind of a tree node, as a fieldless tag.
///
/// Used for rule dispatch, capability queries, and error payloads. The set
/// is closed: dispatch sites match exhaustively, so adding a category is a
/// compile-time-visible decision rather than a missing-entry runtime miss.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NodeCategory {
    ArrayExpression,
    ArrayPattern,
    ObjectExpression,
    ObjectPattern,
    ConditionalExpression,
    FunctionExpression,
    BlockStatement,
    MemberExpression,
    TemplateLiteral,
    VariableDeclaration,
    VariableDeclarator,
    Expression,
}

impl NodeCategory {
    /// ESTree-style name for this category.
    pub const fn name(self) -> &'static str {
        match self {
            NodeCategory::ArrayExpression => "ArrayExpression",
            NodeCategory::ArrayPattern => "ArrayPattern",
            NodeCategory::ObjectExpression => "ObjectExpression",
            NodeCategory::ObjectPattern => "ObjectPattern",
            NodeCategory::ConditionalExpression => "ConditionalExpression",
            NodeCategory::FunctionExpression => "FunctionExpression",
            NodeCategory::BlockStatement => "BlockStatement",
            NodeCategory::MemberExpression => "MemberExpression",
            NodeCategory::TemplateLiteral => "TemplateLiteral",
            NodeCategory::VariableDeclaration => "VariableDeclaration",
            NodeCategory::VariableDeclarator => "VariableDeclarator",
            NodeCategory::Expression => "Expression",
        }
    }
}

impl fmt::Display for NodeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
