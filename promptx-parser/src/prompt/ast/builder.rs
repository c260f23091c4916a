//! AST construction: one scan of the master grammar over the source

use crate::prompt::combinators::scan_text;
use crate::prompt::grammar::master_parser;
use crate::prompt::source::SourceMap;

use super::node::{AstStatistics, NodeMeta, PromptAst, PromptNode};

/// Parse a prompt into a flat, position-annotated AST.
///
/// One left-to-right scan of the master grammar tiles the text with
/// non-overlapping nodes in document order. The same input always produces
/// the same AST; nothing here reads clocks, randomness, or the environment.
pub fn build_ast(source: &str) -> PromptAst {
    let master = master_parser();
    let source_map = SourceMap::new(source);
    let nodes: Vec<PromptNode> = scan_text(&master, source)
        .into_iter()
        .map(|found| {
            let position = source_map.position(found.start);
            let draft = found.value;
            PromptNode {
                kind: draft.kind,
                content: draft.text.trim().to_string(),
                children: Vec::new(),
                meta: NodeMeta {
                    line: position.line,
                    column: position.column,
                    start: found.start,
                    end: found.end,
                    confidence: draft.confidence,
                    style: draft.style.to_string(),
                    level: draft.level,
                },
                captures: draft.captures,
            }
        })
        .collect();
    let statistics = AstStatistics::tally(&nodes);
    PromptAst {
        nodes,
        source: source.to_string(),
        statistics,
    }
}
