//! Splitting one flat prompt into chat messages

use crate::transform::{Transform, TransformOptions, TransformResult};
use crate::transforms::residual_text;
use promptx_parser::prompt::{NodeKind, PromptAst, PromptNode};
use serde::Serialize;
use serde_json::json;

/// One chat message in provider-neutral shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    fn new(role: &str, content: String) -> Self {
        Message {
            role: role.to_string(),
            content,
        }
    }
}

/// Split a single prompt into a system/user message pair.
///
/// The system message collects role, guardrail and constraint contents, in
/// that order. The user message is the text left over after removing the
/// spans of role, guardrail, constraint and output format nodes. When the
/// first output format directive names json, xml or yaml, an assistant
/// prefill message opens the answer in that syntax. `transformed` is the
/// pretty-printed message array.
pub struct SingleToMultiturn;

impl Transform for SingleToMultiturn {
    fn name(&self) -> &str {
        "single_to_multiturn"
    }

    fn description(&self) -> &str {
        "Split a flat prompt into system/user chat messages"
    }

    fn apply(&self, source: &str, ast: &PromptAst, _options: &TransformOptions) -> TransformResult {
        let mut system_parts: Vec<&str> = Vec::new();
        for kind in [
            NodeKind::RoleDefinition,
            NodeKind::Guardrail,
            NodeKind::Constraint,
        ] {
            system_parts.extend(ast.nodes_of_kind(kind).map(|node| node.content.as_str()));
        }

        let claimed: Vec<&PromptNode> = ast
            .nodes
            .iter()
            .filter(|node| {
                matches!(
                    node.kind,
                    NodeKind::RoleDefinition
                        | NodeKind::Guardrail
                        | NodeKind::Constraint
                        | NodeKind::OutputFormat
                )
            })
            .collect();

        let mut messages: Vec<Message> = Vec::new();
        let mut changes: Vec<String> = Vec::new();

        if claimed.is_empty() {
            // Nothing to split on: the whole prompt becomes the user turn.
            messages.push(Message::new("user", source.trim().to_string()));
            changes.push("no structural signal; emitted a single user message".to_string());
        } else {
            if !system_parts.is_empty() {
                messages.push(Message::new("system", system_parts.join("\n")));
                changes.push(format!(
                    "system message from {} node(s)",
                    system_parts.len()
                ));
            }
            let user_text = residual_text(source, &claimed);
            if !user_text.is_empty() {
                messages.push(Message::new("user", user_text));
                changes.push("user message from remaining text".to_string());
            }
            let first_format = ast.nodes_of_kind(NodeKind::OutputFormat).next();
            if let Some(hint) = first_format.and_then(|node| prefill_hint(&node.content)) {
                messages.push(Message::new("assistant", hint.to_string()));
                changes.push("assistant prefill from output format".to_string());
            }
        }

        let array = json!(messages);
        TransformResult {
            original: source.to_string(),
            transformed: format!("{:#}", array),
            format: "messages_json".to_string(),
            metadata: json!({ "message_count": messages.len() }),
            changes,
        }
    }
}

/// An opening token for formats where starting the answer pins the syntax.
fn prefill_hint(directive: &str) -> Option<&'static str> {
    let lower = directive.to_lowercase();
    if lower.contains("json") {
        Some("{")
    } else if lower.contains("xml") {
        Some("<")
    } else if lower.contains("yaml") {
        Some("---")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefill_hints() {
        assert_eq!(prefill_hint("Respond in JSON."), Some("{"));
        assert_eq!(prefill_hint("Çıktı formatı: JSON"), Some("{"));
        assert_eq!(prefill_hint("Output format: XML"), Some("<"));
        assert_eq!(prefill_hint("Use YAML format."), Some("---"));
        assert_eq!(prefill_hint("Respond in a table."), None);
        assert_eq!(prefill_hint(""), None);
    }
}
