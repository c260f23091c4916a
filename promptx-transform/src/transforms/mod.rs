//! Built-in transform implementations
//!
//! One module per transform. The registry in [`crate::registry`] wires them
//! together; nothing here is stateful.

pub mod flat_to_structured;
pub mod markdown_to_json;
pub mod normalize_variables;
pub mod single_to_multiturn;

pub use flat_to_structured::FlatToStructured;
pub use markdown_to_json::MarkdownToJson;
pub use normalize_variables::NormalizeVariables;
pub use single_to_multiturn::SingleToMultiturn;

use promptx_parser::prompt::PromptNode;

/// The text between and around the given node spans.
///
/// `nodes` must be in document order with disjoint spans, which is what any
/// slice of one AST's nodes gives. Each gap is trimmed; blank gaps are
/// dropped; the surviving pieces join with single spaces.
pub(crate) fn residual_text(source: &str, nodes: &[&PromptNode]) -> String {
    let mut pieces: Vec<&str> = Vec::new();
    let mut cursor = 0;
    for node in nodes {
        if node.meta.start > cursor {
            let gap = source[cursor..node.meta.start].trim();
            if !gap.is_empty() {
                pieces.push(gap);
            }
        }
        cursor = cursor.max(node.meta.end);
    }
    if cursor < source.len() {
        let tail = source[cursor..].trim();
        if !tail.is_empty() {
            pieces.push(tail);
        }
    }
    pieces.join(" ")
}
