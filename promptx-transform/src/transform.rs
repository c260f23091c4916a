//! Transform trait definition and shared result types
//!
//! This module defines the core Transform trait that all transforms
//! implement, plus the option and result types they exchange.

use promptx_parser::prompt::{PlaceholderStyle, PromptAst};
use serde::Serialize;

/// A named rewrite of a prompt document
///
/// Implementations consume the source text together with its parsed AST and
/// produce a [`TransformResult`]. They are pure: no I/O, no shared state,
/// and no failure mode. A transform that finds nothing to do returns the
/// source unchanged with a note in `changes`.
///
/// # Examples
///
/// ```ignore
/// struct Shout;
/// impl Transform for Shout {
///     fn name(&self) -> &str {
///         "shout"
///     }
///     fn apply(&self, source: &str, _ast: &PromptAst, _options: &TransformOptions) -> TransformResult {
///         TransformResult {
///             original: source.to_string(),
///             transformed: source.to_uppercase(),
///             format: "text".to_string(),
///             changes: vec!["uppercased everything".to_string()],
///             metadata: serde_json::Value::Null,
///         }
///     }
/// }
/// ```
pub trait Transform: Send + Sync {
    /// Registry key, e.g. "markdown_to_json"
    fn name(&self) -> &str;

    /// Human-readable description of what the transform does
    fn description(&self) -> &str {
        ""
    }

    /// Rewrite `source` according to this transform
    fn apply(&self, source: &str, ast: &PromptAst, options: &TransformOptions) -> TransformResult;
}

/// The closed set of built-in transformations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Transformation {
    MarkdownToJson,
    FlatToStructured,
    SingleToMultiturn,
    NormalizeVariables,
}

impl Transformation {
    pub fn name(&self) -> &'static str {
        match self {
            Transformation::MarkdownToJson => "markdown_to_json",
            Transformation::FlatToStructured => "flat_to_structured",
            Transformation::SingleToMultiturn => "single_to_multiturn",
            Transformation::NormalizeVariables => "normalize_variables",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "markdown_to_json" => Some(Transformation::MarkdownToJson),
            "flat_to_structured" => Some(Transformation::FlatToStructured),
            "single_to_multiturn" => Some(Transformation::SingleToMultiturn),
            "normalize_variables" => Some(Transformation::NormalizeVariables),
            _ => None,
        }
    }

    pub fn all() -> &'static [Transformation] {
        &[
            Transformation::MarkdownToJson,
            Transformation::FlatToStructured,
            Transformation::SingleToMultiturn,
            Transformation::NormalizeVariables,
        ]
    }
}

/// Options shared by every transform.
///
/// Only `normalize_variables` reads `target_style` today; the other
/// transforms take no options and ignore the struct.
#[derive(Debug, Clone)]
pub struct TransformOptions {
    /// Placeholder syntax that `normalize_variables` rewrites into.
    pub target_style: PlaceholderStyle,
}

impl Default for TransformOptions {
    fn default() -> Self {
        TransformOptions {
            target_style: PlaceholderStyle::DoubleBrace,
        }
    }
}

/// Outcome of one transform application.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransformResult {
    pub original: String,
    pub transformed: String,
    /// Shape of `transformed`: "json", "markdown", "messages_json" or "text".
    pub format: String,
    /// Human-readable notes, one per change, in application order.
    pub changes: Vec<String>,
    /// Transform-specific details, e.g. per-style conversion counts.
    pub metadata: serde_json::Value,
}
