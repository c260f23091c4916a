//! Quality metrics and structure review for prompt documents
//!
//! This crate scores a parsed prompt. `compute_metrics` reduces the AST and
//! the raw text to numeric complexity, coverage and quality measures;
//! `review_structure` lists what a well-formed prompt would have that this
//! one lacks.
//!
//! Architecture
//!
//!     - metrics.rs: compute_metrics and its result structs
//!     - review.rs: review_structure, issue codes and the report struct
//!
//!     Both entry points are pure functions over (&PromptAst, &str). The
//!     scores are user visible and release stable: the weights, caps,
//!     thresholds and rounding in metrics.rs must reproduce bit-identical
//!     numbers for identical inputs.

pub mod metrics;
pub mod review;

pub use metrics::{
    compute_metrics, ComplexityMetrics, CoverageMetrics, QualityMetrics, QualityScores,
};
pub use review::{review_structure, Issue, IssueCode, StructureReport};
