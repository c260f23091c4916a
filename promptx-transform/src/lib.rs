//! Prompt rewriting behind a uniform transform interface
//!
//! This crate turns one prompt document into another shape: a JSON
//! projection of its recognized structure, a sectioned Markdown rewrite, a
//! system/user chat split, or the same text with every placeholder in one
//! syntax.
//!
//! Architecture
//!
//!     - Transform trait: uniform interface for all transforms
//!     - TransformRegistry: discovery and by-name selection (the CLI path)
//!     - transform_prompt: typed convenience entry point, infallible
//!     - Transform implementations: one module per transform under transforms/
//!
//!     This is a pure lib: no I/O, no environment access, no printing. Every
//!     transform consumes the source text plus the AST that promptx-parser
//!     built from it and returns a TransformResult value.
//!
//!     The file structure:
//!     .
//!     ├── error.rs
//!     ├── transform.rs            # Transform trait + option/result types
//!     ├── registry.rs             # TransformRegistry for discovery and selection
//!     ├── transforms
//!     │   ├── markdown_to_json.rs
//!     │   ├── flat_to_structured.rs
//!     │   ├── single_to_multiturn.rs
//!     │   └── normalize_variables.rs
//!     └── lib.rs
//!
//! Failure model
//!
//!     Transforms cannot fail. A prompt with nothing to work on still
//!     produces a well-formed result, with the situation recorded in
//!     `changes`. The only error in the crate is the registry's unknown-name
//!     lookup, which the typed entry point below cannot hit.

pub mod error;
pub mod registry;
pub mod transform;
pub mod transforms;

pub use error::TransformError;
pub use registry::TransformRegistry;
pub use transform::{Transform, TransformOptions, TransformResult, Transformation};
pub use transforms::single_to_multiturn::Message;

// `TransformOptions::target_style` is this type; re-exported so callers
// don't need promptx-parser in scope to build options.
pub use promptx_parser::prompt::PlaceholderStyle;

use promptx_parser::prompt::build_ast;

/// Apply one transformation to a prompt.
///
/// Parses `source` and dispatches on the enum, so unlike the registry's
/// string-keyed path this cannot fail.
pub fn transform_prompt(
    source: &str,
    transformation: Transformation,
    options: &TransformOptions,
) -> TransformResult {
    let ast = build_ast(source);
    match transformation {
        Transformation::MarkdownToJson => {
            transforms::MarkdownToJson.apply(source, &ast, options)
        }
        Transformation::FlatToStructured => {
            transforms::FlatToStructured.apply(source, &ast, options)
        }
        Transformation::SingleToMultiturn => {
            transforms::SingleToMultiturn.apply(source, &ast, options)
        }
        Transformation::NormalizeVariables => {
            transforms::NormalizeVariables.apply(source, &ast, options)
        }
    }
}
