//! Projection of recognized prompt structure into one JSON object

use crate::transform::{Transform, TransformOptions, TransformResult};
use promptx_parser::prompt::{
    extract_variables, ExtractOptions, NodeKind, PromptAst, PromptNode,
};
use serde_json::json;

/// Pull role, sections, constraints, output formats, examples, guardrails
/// and variables out of a prompt into a single JSON object.
///
/// The object also embeds the AST statistics, so a consumer gets structure
/// and coverage in one read. `transformed` is the pretty-printed object.
pub struct MarkdownToJson;

impl Transform for MarkdownToJson {
    fn name(&self) -> &str {
        "markdown_to_json"
    }

    fn description(&self) -> &str {
        "Project recognized prompt structure into a JSON object"
    }

    fn apply(&self, source: &str, ast: &PromptAst, _options: &TransformOptions) -> TransformResult {
        let role = ast.nodes_of_kind(NodeKind::RoleDefinition).next().map(role_text);
        let sections: Vec<String> = ast
            .nodes_of_kind(NodeKind::SectionHeader)
            .map(section_title)
            .collect();
        let constraints = contents_of(ast, NodeKind::Constraint);
        let output_formats = contents_of(ast, NodeKind::OutputFormat);
        let examples = contents_of(ast, NodeKind::ExampleBlock);
        let guardrails = contents_of(ast, NodeKind::Guardrail);

        let extraction = extract_variables(source, &ExtractOptions::default());
        let variables: Vec<serde_json::Value> = extraction
            .variables
            .iter()
            .map(|var| {
                json!({
                    "name": var.name,
                    "style": var.style,
                    "type": var.var_type,
                    "required": var.required,
                })
            })
            .collect();

        let mut changes = Vec::new();
        if role.is_some() {
            changes.push("extracted role".to_string());
        }
        if !sections.is_empty() {
            changes.push(format!("collected {} section title(s)", sections.len()));
        }
        if !constraints.is_empty() {
            changes.push(format!("collected {} constraint(s)", constraints.len()));
        }
        if !output_formats.is_empty() {
            changes.push(format!(
                "collected {} output format directive(s)",
                output_formats.len()
            ));
        }
        if !examples.is_empty() {
            changes.push(format!("collected {} example(s)", examples.len()));
        }
        if !guardrails.is_empty() {
            changes.push(format!("collected {} guardrail(s)", guardrails.len()));
        }
        if !variables.is_empty() {
            changes.push(format!("collected {} variable(s)", variables.len()));
        }

        let object = json!({
            "role": role,
            "sections": sections,
            "constraints": constraints,
            "output_formats": output_formats,
            "examples": examples,
            "guardrails": guardrails,
            "variables": variables,
            "statistics": ast.statistics,
        });

        TransformResult {
            original: source.to_string(),
            transformed: format!("{:#}", object),
            format: "json".to_string(),
            changes,
            metadata: json!({
                "node_count": ast.nodes.len(),
                "variable_count": extraction.summary.unique_count,
            }),
        }
    }
}

/// The captured role description when the pattern has one, else the full
/// matched sentence.
fn role_text(node: &PromptNode) -> String {
    node.first_capture().unwrap_or(&node.content).to_string()
}

/// Markdown headers capture `(hashes, title)`, so the title is the last
/// capture. Label styles capture only the title.
fn section_title(node: &PromptNode) -> String {
    node.last_capture().unwrap_or(&node.content).to_string()
}

fn contents_of(ast: &PromptAst, kind: NodeKind) -> Vec<String> {
    ast.nodes_of_kind(kind)
        .map(|node| node.content.clone())
        .collect()
}
