//! Main module for prompt parsing functionality

pub mod ast;
pub mod combinators;
pub mod grammar;
pub mod source;
pub mod testing;
pub mod variables;

pub use ast::{
    ast_to_json, build_ast, filter_nodes, AstStatistics, NodeKind, NodeMeta, PromptAst, PromptNode,
};
pub use variables::{
    extract_variables, ExtractOptions, ExtractedVariable, PlaceholderStyle, VarType,
    VariableExtraction, VariableSummary,
};
