//! JSON projection of a parsed prompt

use serde_json::{json, Value};

use super::node::{PromptAst, PromptNode};

/// Node content longer than this many characters is truncated in the JSON
/// projection. The AST itself always keeps the full content.
pub const MAX_JSON_CONTENT_CHARS: usize = 200;

/// Project an AST into a JSON value suitable for logging or piping.
///
/// The projection is lossy on purpose: node content is capped at
/// [`MAX_JSON_CONTENT_CHARS`] characters so a pathological prompt cannot
/// balloon the output. Spans and statistics are preserved exactly.
pub fn ast_to_json(ast: &PromptAst) -> Value {
    json!({
        "nodes": ast.nodes.iter().map(node_to_json).collect::<Vec<_>>(),
        "statistics": ast.statistics,
        "node_count": ast.nodes.len(),
        "source_length": ast.source.chars().count(),
    })
}

fn node_to_json(node: &PromptNode) -> Value {
    let content: String = node.content.chars().take(MAX_JSON_CONTENT_CHARS).collect();
    json!({
        "kind": node.kind.name(),
        "content": content,
        "meta": node.meta,
        "captures": node.captures,
        "children": node.children.iter().map(node_to_json).collect::<Vec<_>>(),
    })
}
