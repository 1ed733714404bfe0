//! Slate AST - Token Stream and Syntax Tree Types
//!
//! This crate contains the data model consumed by the Slate re-layout engine:
//! - Tokens and `TokenList`, a mutable token stream with stable handles
//! - Syntax tree nodes with category tags and boundary tokens
//! - `ParentIndex`, a non-owning node-to-parent map
//! - `FixtureBuilder` for programmatic stream/tree construction
//!
//! # Design Philosophy
//!
//! - **Flatten everything**: no `Box` children, nodes and tokens live in
//!   arenas addressed by `NodeId(u32)` / `TokenId(u32)` indices
//! - **Stable identity**: deleting a token tombstones its slot; handles held
//!   by other tokens or nodes never dangle and are never reused
//! - **Non-owning indices**: the parent index is auxiliary lookup state,
//!   rebuilt whenever the tree is restructured

pub mod builder;
pub mod category;
pub mod node;
pub mod parents;
pub mod stream;
pub mod token;

pub use builder::FixtureBuilder;
pub use category::NodeCategory;
pub use node::{NodeData, NodeId, NodeKind, SyntaxTree};
pub use parents::ParentIndex;
pub use stream::TokenList;
pub use token::{Token, TokenId, TokenKind};
