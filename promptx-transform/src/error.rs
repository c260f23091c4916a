//! Error types for transform lookup

use std::fmt;

/// Errors that can occur when resolving a transform by name.
///
/// The transforms themselves never fail; every input, including the empty
/// string, produces a well-formed result. Only the registry's string-keyed
/// lookup can go wrong.
#[derive(Debug, Clone)]
pub enum TransformError {
    /// No transform registered under the given name
    UnknownTransformation(String),
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformError::UnknownTransformation(name) => {
                write!(f, "Unknown transformation: {}", name)
            }
        }
    }
}

impl std::error::Error for TransformError {}
