//! Prompt AST: node types, construction, and JSON projection
//!
//! The AST is a flat tiling of the source text: nodes carry non-overlapping
//! byte spans in document order, and stretches the grammar does not claim
//! simply have no node. `children` exists on every node for shape
//! compatibility but the tiling builder never populates it.

pub mod builder;
pub mod json;
pub mod node;

pub use builder::build_ast;
pub use json::ast_to_json;
pub use node::{filter_nodes, AstStatistics, NodeKind, NodeMeta, PromptAst, PromptNode};
