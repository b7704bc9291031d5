//! Reflective method metadata for ahead-of-time repository generation.
//!
//! This crate defines the descriptor types an external scanner produces for
//! every repository method whose implementation is generated: structural type
//! references, method declarations, and annotation usages. Descriptors are
//! plain serde-derived data so they can be captured once and replayed into
//! the generation layer (`repogen-codegen`) without any live reflection.
//!
//! # Module Organization
//!
//! - [`types`] - Structural type references ([`TypeName`])
//! - [`method`] - Method declaration descriptors ([`MethodDescriptor`])
//! - [`annotation`] - Annotation usages and declarations ([`AnnotationSpec`])

pub mod annotation;
pub mod method;
pub mod types;

pub use annotation::AnnotationSpec;
pub use method::MethodDescriptor;
pub use types::TypeName;
