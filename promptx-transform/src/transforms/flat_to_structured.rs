//! Reshaping flat prose into labeled Markdown sections

use crate::transform::{Transform, TransformOptions, TransformResult};
use crate::transforms::residual_text;
use promptx_parser::prompt::{NodeKind, PromptAst, PromptNode};
use serde_json::json;

/// Rewrite an unstructured prompt as canonical `##` Markdown sections.
///
/// Recognized nodes are routed to their section in the fixed order ROLE,
/// INSTRUCTIONS, CONSTRAINTS, OUTPUT FORMAT, EXAMPLES, GUARDRAILS; only
/// non-empty sections are emitted. Everything the grammar did not claim
/// becomes INSTRUCTIONS, with variable placeholders staying inline. A
/// prompt that already has two or more section headers is left alone.
pub struct FlatToStructured;

impl Transform for FlatToStructured {
    fn name(&self) -> &str {
        "flat_to_structured"
    }

    fn description(&self) -> &str {
        "Reshape flat prose into labeled Markdown sections"
    }

    fn apply(&self, source: &str, ast: &PromptAst, _options: &TransformOptions) -> TransformResult {
        if ast.statistics.section_count >= 2 {
            return TransformResult {
                original: source.to_string(),
                transformed: source.to_string(),
                format: "markdown".to_string(),
                changes: vec![format!(
                    "already structured ({} sections); left unchanged",
                    ast.statistics.section_count
                )],
                metadata: json!({ "section_count": ast.statistics.section_count }),
            };
        }

        // Variables are not claimed: their placeholders belong inline in
        // whatever sentence carries them.
        let claimed: Vec<&PromptNode> = ast
            .nodes
            .iter()
            .filter(|node| node.kind != NodeKind::Variable)
            .collect();
        let instructions = residual_text(source, &claimed);

        let sections = [
            ("ROLE", contents_of(ast, NodeKind::RoleDefinition).join("\n")),
            ("INSTRUCTIONS", instructions),
            ("CONSTRAINTS", bulleted(&contents_of(ast, NodeKind::Constraint))),
            (
                "OUTPUT FORMAT",
                contents_of(ast, NodeKind::OutputFormat).join("\n"),
            ),
            (
                "EXAMPLES",
                contents_of(ast, NodeKind::ExampleBlock).join("\n\n"),
            ),
            ("GUARDRAILS", bulleted(&contents_of(ast, NodeKind::Guardrail))),
        ];

        let mut blocks: Vec<String> = Vec::new();
        let mut changes: Vec<String> = Vec::new();
        for (section, body) in sections {
            if body.is_empty() {
                continue;
            }
            blocks.push(format!("## {}\n{}", section, body));
            changes.push(format!("added {} section", section));
        }

        if blocks.is_empty() {
            changes.push("no recognizable structure found".to_string());
        }

        TransformResult {
            original: source.to_string(),
            transformed: blocks.join("\n\n"),
            format: "markdown".to_string(),
            metadata: json!({ "sections_emitted": blocks.len() }),
            changes,
        }
    }
}

fn contents_of(ast: &PromptAst, kind: NodeKind) -> Vec<String> {
    ast.nodes_of_kind(kind)
        .map(|node| node.content.clone())
        .collect()
}

fn bulleted(lines: &[String]) -> String {
    lines
        .iter()
        .map(|line| format!("- {}", line))
        .collect::<Vec<_>>()
        .join("\n")
}
