use promptx_parser::prompt::{NodeKind, PromptAst, PromptNode};
use serde::Serialize;

/// Stable identifiers for structural findings. Downstream tooling keys
/// on these, so the set and their serialized names must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    MissingRole,
    NoSections,
    LowConstraints,
    NoOutputFormat,
    NoExamples,
    NoGuardrails,
    NoChainOfThought,
    TooShort,
}

impl IssueCode {
    pub fn name(&self) -> &'static str {
        match self {
            IssueCode::MissingRole => "missing_role",
            IssueCode::NoSections => "no_sections",
            IssueCode::LowConstraints => "low_constraints",
            IssueCode::NoOutputFormat => "no_output_format",
            IssueCode::NoExamples => "no_examples",
            IssueCode::NoGuardrails => "no_guardrails",
            IssueCode::NoChainOfThought => "no_chain_of_thought",
            IssueCode::TooShort => "too_short",
        }
    }
}

/// One finding with a short human-readable message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Issue {
    pub code: IssueCode,
    pub message: String,
}

impl Issue {
    fn new(code: IssueCode, message: &str) -> Self {
        Self {
            code,
            message: message.to_string(),
        }
    }
}

/// What `review_structure` found in one document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructureReport {
    pub issues: Vec<Issue>,
    pub word_count: usize,
    pub section_count: usize,
    /// Section titles in document order.
    pub sections_found: Vec<String>,
}

/// Check a prompt document for missing structure. Issues come out in a
/// fixed order; an empty document reports all of them.
pub fn review_structure(ast: &PromptAst, text: &str) -> StructureReport {
    let stats = &ast.statistics;
    let constraints = stats.counts.get(NodeKind::Constraint.name()).copied().unwrap_or(0);
    let word_count = text.split_whitespace().count();

    let mut issues = Vec::new();
    if !stats.has_role {
        issues.push(Issue::new(IssueCode::MissingRole, "No role definition found"));
    }
    if stats.section_count == 0 {
        issues.push(Issue::new(IssueCode::NoSections, "No section structure"));
    }
    if constraints < 3 {
        issues.push(Issue::new(IssueCode::LowConstraints, "Fewer than 3 constraints"));
    }
    if !stats.has_output_format {
        issues.push(Issue::new(IssueCode::NoOutputFormat, "No output format specified"));
    }
    if !stats.has_examples {
        issues.push(Issue::new(IssueCode::NoExamples, "No examples provided"));
    }
    if !stats.has_guardrails {
        issues.push(Issue::new(IssueCode::NoGuardrails, "No guardrails present"));
    }
    if !stats.has_chain_of_thought {
        issues.push(Issue::new(
            IssueCode::NoChainOfThought,
            "No chain-of-thought guidance",
        ));
    }
    if word_count < 100 {
        issues.push(Issue::new(IssueCode::TooShort, "Prompt is under 100 words"));
    }

    let sections_found = ast
        .nodes_of_kind(NodeKind::SectionHeader)
        .map(section_title)
        .collect();

    StructureReport {
        issues,
        word_count,
        section_count: stats.section_count,
        sections_found,
    }
}

/// Markdown headers capture (hashes, title); the title is the last capture.
fn section_title(node: &PromptNode) -> String {
    node.last_capture().unwrap_or(&node.content).to_string()
}
