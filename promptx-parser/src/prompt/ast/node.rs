//! AST node types and statistics

use serde::Serialize;
use std::collections::BTreeMap;

/// Closed classification vocabulary for prompt nodes.
///
/// The grammar only ever emits eight of these; `Instruction`,
/// `ContextBlock`, `Metadata`, and `PlainText` complete the vocabulary for
/// consumers that classify residual text themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    RoleDefinition,
    SectionHeader,
    Instruction,
    Constraint,
    OutputFormat,
    ExampleBlock,
    Variable,
    ChainOfThought,
    Guardrail,
    ContextBlock,
    Metadata,
    PlainText,
}

impl NodeKind {
    /// Stable snake_case name, identical to the serialized form.
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::RoleDefinition => "role_definition",
            NodeKind::SectionHeader => "section_header",
            NodeKind::Instruction => "instruction",
            NodeKind::Constraint => "constraint",
            NodeKind::OutputFormat => "output_format",
            NodeKind::ExampleBlock => "example_block",
            NodeKind::Variable => "variable",
            NodeKind::ChainOfThought => "chain_of_thought",
            NodeKind::Guardrail => "guardrail",
            NodeKind::ContextBlock => "context_block",
            NodeKind::Metadata => "metadata",
            NodeKind::PlainText => "plain_text",
        }
    }
}

/// Positional and provenance metadata for one node.
///
/// `line` and `column` are 1-based and count characters; `start` and `end`
/// are byte offsets into the source, half-open.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeMeta {
    pub line: usize,
    pub column: usize,
    pub start: usize,
    pub end: usize,
    pub confidence: f64,
    pub style: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
}

/// One recognized structural element of a prompt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromptNode {
    pub kind: NodeKind,
    /// Matched source text, whitespace-trimmed.
    pub content: String,
    pub children: Vec<PromptNode>,
    pub meta: NodeMeta,
    /// Capture groups from the winning pattern, in group order.
    pub captures: Vec<String>,
}

impl PromptNode {
    /// First non-empty capture. Role patterns put the role name here.
    pub fn first_capture(&self) -> Option<&str> {
        self.captures
            .iter()
            .find(|c| !c.is_empty())
            .map(String::as_str)
    }

    /// Last non-empty capture. Section header patterns put the title here.
    pub fn last_capture(&self) -> Option<&str> {
        self.captures
            .iter()
            .rev()
            .find(|c| !c.is_empty())
            .map(String::as_str)
    }
}

/// Aggregate counts over a node list, computed once at build time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AstStatistics {
    /// Node count per kind name, only kinds that occur.
    pub counts: BTreeMap<String, usize>,
    pub section_count: usize,
    pub max_depth: u8,
    pub has_role: bool,
    pub has_output_format: bool,
    pub has_examples: bool,
    pub has_guardrails: bool,
    pub has_chain_of_thought: bool,
}

impl AstStatistics {
    pub fn tally(nodes: &[PromptNode]) -> Self {
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for node in nodes {
            *counts.entry(node.kind.name().to_string()).or_insert(0) += 1;
        }
        let count =
            |kind: NodeKind| -> usize { counts.get(kind.name()).copied().unwrap_or(0) };
        let section_count = count(NodeKind::SectionHeader);
        let has_role = count(NodeKind::RoleDefinition) > 0;
        let has_output_format = count(NodeKind::OutputFormat) > 0;
        let has_examples = count(NodeKind::ExampleBlock) > 0;
        let has_guardrails = count(NodeKind::Guardrail) > 0;
        let has_chain_of_thought = count(NodeKind::ChainOfThought) > 0;
        // The deepest heading level seen; nodes don't nest, so levels carry
        // all the depth the document has.
        let max_depth = nodes.iter().filter_map(|node| node.meta.level).max().unwrap_or(0);
        Self {
            counts,
            section_count,
            max_depth,
            has_role,
            has_output_format,
            has_examples,
            has_guardrails,
            has_chain_of_thought,
        }
    }
}

/// A fully parsed prompt: the node tiling, the source it came from, and the
/// statistics tallied over the nodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromptAst {
    pub nodes: Vec<PromptNode>,
    pub source: String,
    pub statistics: AstStatistics,
}

impl PromptAst {
    /// Iterate the nodes of one kind, in document order.
    pub fn nodes_of_kind(&self, kind: NodeKind) -> impl Iterator<Item = &PromptNode> {
        self.nodes.iter().filter(move |node| node.kind == kind)
    }
}

/// Collect references to every node satisfying `predicate`, in document
/// order.
pub fn filter_nodes<'a, F>(ast: &'a PromptAst, predicate: F) -> Vec<&'a PromptNode>
where
    F: Fn(&PromptNode) -> bool,
{
    ast.nodes.iter().filter(|node| predicate(node)).collect()
}
