//! Transform registry for discovery and selection
//!
//! This module provides a centralized registry for all available transforms.
//! Transforms can be registered and retrieved by name; the CLI resolves
//! user-supplied names through it.

use crate::error::TransformError;
use crate::transform::{Transform, TransformOptions, TransformResult};
use promptx_parser::prompt::PromptAst;
use std::collections::HashMap;

/// Registry of prompt transforms
///
/// Provides a centralized registry for all available transforms.
/// Transforms can be registered and retrieved by name.
///
/// # Examples
///
/// ```ignore
/// let registry = TransformRegistry::with_defaults();
/// let ast = build_ast(source);
/// let result = registry.apply(source, &ast, "normalize_variables", &TransformOptions::default())?;
/// ```
pub struct TransformRegistry {
    transforms: HashMap<String, Box<dyn Transform>>,
}

impl TransformRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        TransformRegistry {
            transforms: HashMap::new(),
        }
    }

    /// Register a transform
    ///
    /// If a transform with the same name already exists, it will be replaced.
    pub fn register<T: Transform + 'static>(&mut self, transform: T) {
        self.transforms
            .insert(transform.name().to_string(), Box::new(transform));
    }

    /// Get a transform by name
    pub fn get(&self, name: &str) -> Result<&dyn Transform, TransformError> {
        self.transforms
            .get(name)
            .map(|t| t.as_ref())
            .ok_or_else(|| TransformError::UnknownTransformation(name.to_string()))
    }

    /// Check if a transform exists
    pub fn has(&self, name: &str) -> bool {
        self.transforms.contains_key(name)
    }

    /// List all available transform names (sorted)
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.transforms.keys().cloned().collect();
        names.sort();
        names
    }

    /// Apply the named transform to already-parsed source
    pub fn apply(
        &self,
        source: &str,
        ast: &PromptAst,
        name: &str,
        options: &TransformOptions,
    ) -> Result<TransformResult, TransformError> {
        let transform = self.get(name)?;
        Ok(transform.apply(source, ast, options))
    }

    /// Create a registry with the built-in transforms
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::transforms::MarkdownToJson);
        registry.register(crate::transforms::FlatToStructured);
        registry.register(crate::transforms::SingleToMultiturn);
        registry.register(crate::transforms::NormalizeVariables);

        registry
    }
}

impl Default for TransformRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
