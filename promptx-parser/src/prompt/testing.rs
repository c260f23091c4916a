//! Fluent assertion helpers for prompt AST tests
//!
//! Keeps test bodies declarative: parse once, then chain assertions.
//! Every failure panics with enough context to identify the node.

use crate::prompt::ast::{build_ast, NodeKind, PromptAst, PromptNode};

/// Parse `source` and start an assertion chain over the result.
pub fn assert_prompt(source: &str) -> AstAssertion {
    AstAssertion {
        ast: build_ast(source),
    }
}

/// Start an assertion chain over an already built AST.
pub fn assert_ast(ast: PromptAst) -> AstAssertion {
    AstAssertion { ast }
}

pub struct AstAssertion {
    ast: PromptAst,
}

impl AstAssertion {
    pub fn node_count(self, expected: usize) -> Self {
        if self.ast.nodes.len() != expected {
            panic!(
                "Expected {expected} nodes, found {}: {:?}",
                self.ast.nodes.len(),
                self.kinds()
            );
        }
        self
    }

    pub fn count_of(self, kind: NodeKind, expected: usize) -> Self {
        let found = self.ast.nodes_of_kind(kind).count();
        if found != expected {
            panic!(
                "Expected {expected} {} nodes, found {found}: {:?}",
                kind.name(),
                self.kinds()
            );
        }
        self
    }

    pub fn has_kind(self, kind: NodeKind) -> Self {
        if self.ast.nodes_of_kind(kind).next().is_none() {
            panic!("Expected a {} node, found: {:?}", kind.name(), self.kinds());
        }
        self
    }

    pub fn lacks_kind(self, kind: NodeKind) -> Self {
        if let Some(node) = self.ast.nodes_of_kind(kind).next() {
            panic!(
                "Expected no {} node, found one with content {:?}",
                kind.name(),
                node.content
            );
        }
        self
    }

    /// Assert on the node at `index` in document order.
    pub fn node<F>(self, index: usize, f: F) -> Self
    where
        F: FnOnce(NodeAssertion),
    {
        let Some(node) = self.ast.nodes.get(index) else {
            panic!(
                "Node {index}: out of range, AST has {} nodes",
                self.ast.nodes.len()
            );
        };
        f(NodeAssertion {
            node,
            context: format!("Node {index}"),
        });
        self
    }

    /// Assert on the `index`-th node of one kind, in document order.
    pub fn nth_of<F>(self, kind: NodeKind, index: usize, f: F) -> Self
    where
        F: FnOnce(NodeAssertion),
    {
        let Some(node) = self.ast.nodes_of_kind(kind).nth(index) else {
            panic!(
                "{} {index}: out of range, found {:?}",
                kind.name(),
                self.kinds()
            );
        };
        f(NodeAssertion {
            node,
            context: format!("{} {index}", kind.name()),
        });
        self
    }

    /// Hand the AST back for checks the chain does not cover.
    pub fn into_ast(self) -> PromptAst {
        self.ast
    }

    fn kinds(&self) -> Vec<&'static str> {
        self.ast.nodes.iter().map(|n| n.kind.name()).collect()
    }
}

pub struct NodeAssertion<'a> {
    node: &'a PromptNode,
    context: String,
}

impl NodeAssertion<'_> {
    pub fn kind(self, expected: NodeKind) -> Self {
        if self.node.kind != expected {
            panic!(
                "{}: expected kind {}, found {} with content {:?}",
                self.context,
                expected.name(),
                self.node.kind.name(),
                self.node.content
            );
        }
        self
    }

    pub fn content(self, expected: &str) -> Self {
        if self.node.content != expected {
            panic!(
                "{}: expected content {expected:?}, found {:?}",
                self.context, self.node.content
            );
        }
        self
    }

    pub fn content_contains(self, needle: &str) -> Self {
        if !self.node.content.contains(needle) {
            panic!(
                "{}: expected content containing {needle:?}, found {:?}",
                self.context, self.node.content
            );
        }
        self
    }

    pub fn style(self, expected: &str) -> Self {
        if self.node.meta.style != expected {
            panic!(
                "{}: expected style {expected:?}, found {:?}",
                self.context, self.node.meta.style
            );
        }
        self
    }

    pub fn capture(self, index: usize, expected: &str) -> Self {
        match self.node.captures.get(index) {
            Some(found) if found == expected => {}
            Some(found) => panic!(
                "{}: expected capture {index} to be {expected:?}, found {found:?}",
                self.context
            ),
            None => panic!(
                "{}: expected capture {index}, node has {:?}",
                self.context, self.node.captures
            ),
        }
        self
    }

    pub fn confidence_at_least(self, floor: f64) -> Self {
        if self.node.meta.confidence < floor {
            panic!(
                "{}: expected confidence >= {floor}, found {}",
                self.context, self.node.meta.confidence
            );
        }
        self
    }

    pub fn line(self, expected: usize) -> Self {
        if self.node.meta.line != expected {
            panic!(
                "{}: expected line {expected}, found {}",
                self.context, self.node.meta.line
            );
        }
        self
    }

    pub fn column(self, expected: usize) -> Self {
        if self.node.meta.column != expected {
            panic!(
                "{}: expected column {expected}, found {}",
                self.context, self.node.meta.column
            );
        }
        self
    }

    pub fn level(self, expected: u8) -> Self {
        if self.node.meta.level != Some(expected) {
            panic!(
                "{}: expected level {expected}, found {:?}",
                self.context, self.node.meta.level
            );
        }
        self
    }
}
