//! # promptx-parser
//!
//! Structure recognition for prompt documents.
//!
//! A "prompt" here is free-form instructional text intended for a language
//! model. This crate classifies the structural elements such text tends to
//! carry (role statements, section headers, constraints, output-format
//! directives, example blocks, template variables, chain-of-thought markers,
//! guardrail statements), tracks their source positions, and extracts
//! template variables with inferred types.
//!
//! The recognition model is deliberately flat: the document is tiled into an
//! ordered list of non-overlapping classified spans rather than a nested
//! tree. Classification is heuristic and pattern-ordered; misclassification
//! is accepted imprecision, mitigated by pattern order and per-pattern
//! confidence tags, never by validation gates.
//!
//! Everything in this crate is pure and synchronous. No I/O, no shared
//! mutable state; all parsers are immutable compositions built once, so every
//! public function is safe to call concurrently.

#![allow(rustdoc::invalid_html_tags)]

pub mod prompt;
