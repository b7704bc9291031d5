//! Merged-annotation attribute oracle.
//!
//! Attribute lookups follow merged-annotation semantics: an annotation may be
//! present on a method either directly or through a meta-annotation chain
//! (an annotation whose own declaration is annotated with the requested one).
//! Attribute values declared closest to the method win; declaration defaults
//! fill the gaps.

use std::collections::VecDeque;
use std::fmt;

use indexmap::IndexMap;
use repogen_model::{AnnotationSpec, MethodDescriptor};
use serde_json::Value;

/// Injected capability resolving annotation attributes for a method.
pub trait AnnotationOracle: fmt::Debug {
    /// Look up an attribute of an annotation present on `method`, directly or
    /// via meta-annotations.
    ///
    /// Returns `None` when the annotation is not present or the attribute key
    /// is unknown — absence is never an error.
    fn attribute(&self, method: &MethodDescriptor, annotation: &str, attribute: &str)
    -> Option<Value>;
}

/// Default [`AnnotationOracle`] backed by registered annotation declarations.
///
/// Declarations carry default attribute values; meta edges record which
/// annotations an annotation's declaration is itself annotated with. With no
/// registrations the oracle still resolves direct usages.
#[derive(Debug, Clone, Default)]
pub struct StandardAnnotationOracle {
    declarations: IndexMap<String, AnnotationSpec>,
    meta: IndexMap<String, Vec<String>>,
}

impl StandardAnnotationOracle {
    /// Create an oracle with no registered declarations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an annotation declaration (attribute keys mapped to default
    /// values).
    pub fn declare(mut self, declaration: AnnotationSpec) -> Self {
        self.declarations
            .insert(declaration.path().to_string(), declaration);
        self
    }

    /// Record that `annotation`'s declaration is annotated with `meta`.
    pub fn declare_meta(
        mut self,
        annotation: impl Into<String>,
        meta: impl Into<String>,
    ) -> Self {
        self.meta.entry(annotation.into()).or_default().push(meta.into());
        self
    }

    /// Walk the meta chain from `start`, returning the visited annotation
    /// paths in proximity order if `target` is reachable.
    fn merged_chain(&self, start: &str, target: &str) -> Option<Vec<String>> {
        let mut visited = vec![start.to_string()];
        let mut queue = VecDeque::from([start.to_string()]);

        while let Some(current) = queue.pop_front() {
            if current == target {
                return Some(visited);
            }
            for meta in self.meta.get(&current).into_iter().flatten() {
                if !visited.contains(meta) {
                    visited.push(meta.clone());
                    queue.push_back(meta.clone());
                }
            }
        }
        None
    }
}

impl AnnotationOracle for StandardAnnotationOracle {
    fn attribute(
        &self,
        method: &MethodDescriptor,
        annotation: &str,
        attribute: &str,
    ) -> Option<Value> {
        for usage in method.annotations() {
            let Some(chain) = self.merged_chain(usage.path(), annotation) else {
                continue;
            };
            // The usage closest to the method overrides declaration defaults.
            if let Some(value) = usage.get(attribute) {
                return Some(value.clone());
            }
            for path in &chain {
                if let Some(value) = self.declarations.get(path).and_then(|d| d.get(attribute)) {
                    return Some(value.clone());
                }
            }
            return None;
        }
        None
    }
}
