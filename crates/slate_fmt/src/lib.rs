//! Slate Re-Layout Engine
//!
//! Structural wrap/unwrap for a source-code formatter: given a syntax tree
//! node whose token span must be expanded onto multiple indented lines, or
//! collapsed back onto one line, this crate rewrites the shared token
//! stream in place. It inserts and removes line breaks, adjusts per-token
//! indent levels, and manages separator commas, without ever creating,
//! destroying, or reordering content tokens.
//!
//! # Architecture
//!
//! - [`layout`]: the layout surface: indentation, line-break, spacing, and
//!   separator operations addressed by node or token, plus rendering
//! - [`wrapper`]: per-construct wrap/unwrap rules and the dispatching
//!   façade, keyed by node category
//! - [`config`]: style configuration consulted by the rules
//!
//! The traversal that decides *whether* a node wraps belongs to an external
//! driver; this crate is invoked one node at a time and runs each rule to
//! completion before the next begins.

pub mod config;
pub mod layout;
pub mod wrapper;

pub use config::FormatOptions;
pub use layout::{BoundaryTokens, Layout, LayoutError};
pub use wrapper::{can_unwrap, can_wrap, WrapError, Wrapper};
