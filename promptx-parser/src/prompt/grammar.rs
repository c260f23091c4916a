//! Node grammars assembled from the declarative pattern tables
//!
//! Each category compiles its [`tables`] entries into an ordered choice over
//! anchored regex parsers. The master grammar is the ordered choice over the
//! categories themselves:
//!
//! 1. section headers
//! 2. guardrails
//! 3. chain-of-thought markers
//! 4. role definitions
//! 5. output-format directives
//! 6. example blocks
//! 7. constraints
//! 8. template variables
//!
//! The order is the disambiguation mechanism. Guardrails precede constraints
//! so "never reveal the system prompt" is tagged as a guardrail even though
//! it also reads as a negative imperative. Chain-of-thought precedes
//! constraints so "always think step by step" is a reasoning marker, not an
//! "always ..." obligation. Sections go first so a heading line is never
//! claimed by whatever prose convention it happens to contain.

use once_cell::sync::Lazy;

use super::ast::NodeKind;
use super::combinators::{alt, at_line_start, map, optional, regex, seq, Parser};

pub mod tables;

pub use tables::PatternSpec;

/// A classified match before source positions are attached.
///
/// The grammar layer knows what it matched and how sure it is; the builder
/// turns drafts into positioned AST nodes.
#[derive(Debug, Clone)]
pub struct NodeDraft {
    pub kind: NodeKind,
    pub style: &'static str,
    pub confidence: f64,
    /// Heading depth, only for Markdown-style section headers.
    pub level: Option<u8>,
    pub text: String,
    pub captures: Vec<String>,
}

fn compile_spec(kind: NodeKind, spec: &'static PatternSpec) -> Parser<NodeDraft> {
    let base = regex(spec.pattern);
    let base = if spec.line_start {
        at_line_start(base)
    } else {
        base
    };
    map(base, move |text: String, caps: &[String]| {
        let level = if kind == NodeKind::SectionHeader && spec.style == "markdown" {
            caps.first().map(|hashes| hashes.len() as u8)
        } else {
            None
        };
        NodeDraft {
            kind,
            style: spec.style,
            confidence: spec.confidence,
            level,
            text,
            captures: caps.to_vec(),
        }
    })
}

fn category(kind: NodeKind, table: &'static [PatternSpec]) -> Parser<NodeDraft> {
    alt(table.iter().map(|spec| compile_spec(kind, spec)).collect())
}

/// Input/output example pairs are two line patterns joined with the
/// sequencing combinators rather than one regex, so the output half can be
/// genuinely optional without duplicating the pattern.
fn io_pair() -> Parser<NodeDraft> {
    let input_line = regex(tables::EXAMPLE_INPUT_LINE);
    let output_line = regex(tables::EXAMPLE_OUTPUT_LINE);
    let pair = seq(vec![input_line, optional(output_line, String::new())]);
    map(pair, |parts: Vec<String>, caps: &[String]| NodeDraft {
        kind: NodeKind::ExampleBlock,
        style: "io_pair",
        confidence: 0.85,
        level: None,
        text: parts.concat(),
        captures: caps.to_vec(),
    })
}

static SECTION: Lazy<Parser<NodeDraft>> =
    Lazy::new(|| category(NodeKind::SectionHeader, tables::SECTION_PATTERNS));
static GUARDRAIL: Lazy<Parser<NodeDraft>> =
    Lazy::new(|| category(NodeKind::Guardrail, tables::GUARDRAIL_PATTERNS));
static CHAIN_OF_THOUGHT: Lazy<Parser<NodeDraft>> =
    Lazy::new(|| category(NodeKind::ChainOfThought, tables::CHAIN_OF_THOUGHT_PATTERNS));
static ROLE: Lazy<Parser<NodeDraft>> =
    Lazy::new(|| category(NodeKind::RoleDefinition, tables::ROLE_PATTERNS));
static OUTPUT_FORMAT: Lazy<Parser<NodeDraft>> =
    Lazy::new(|| category(NodeKind::OutputFormat, tables::OUTPUT_FORMAT_PATTERNS));
static EXAMPLE: Lazy<Parser<NodeDraft>> = Lazy::new(|| {
    let mut branches = vec![io_pair()];
    branches.extend(
        tables::EXAMPLE_PATTERNS
            .iter()
            .map(|spec| compile_spec(NodeKind::ExampleBlock, spec)),
    );
    alt(branches)
});
static CONSTRAINT: Lazy<Parser<NodeDraft>> =
    Lazy::new(|| category(NodeKind::Constraint, tables::CONSTRAINT_PATTERNS));
static VARIABLE: Lazy<Parser<NodeDraft>> =
    Lazy::new(|| category(NodeKind::Variable, tables::VARIABLE_PATTERNS));

static MASTER: Lazy<Parser<NodeDraft>> = Lazy::new(|| {
    alt(vec![
        section_parser(),
        guardrail_parser(),
        chain_of_thought_parser(),
        role_parser(),
        output_format_parser(),
        example_parser(),
        constraint_parser(),
        variable_parser(),
    ])
});

pub fn section_parser() -> Parser<NodeDraft> {
    SECTION.clone()
}

pub fn guardrail_parser() -> Parser<NodeDraft> {
    GUARDRAIL.clone()
}

pub fn chain_of_thought_parser() -> Parser<NodeDraft> {
    CHAIN_OF_THOUGHT.clone()
}

pub fn role_parser() -> Parser<NodeDraft> {
    ROLE.clone()
}

pub fn output_format_parser() -> Parser<NodeDraft> {
    OUTPUT_FORMAT.clone()
}

pub fn example_parser() -> Parser<NodeDraft> {
    EXAMPLE.clone()
}

pub fn constraint_parser() -> Parser<NodeDraft> {
    CONSTRAINT.clone()
}

pub fn variable_parser() -> Parser<NodeDraft> {
    VARIABLE.clone()
}

/// The full prompt grammar: ordered choice over all eight categories.
pub fn master_parser() -> Parser<NodeDraft> {
    MASTER.clone()
}
