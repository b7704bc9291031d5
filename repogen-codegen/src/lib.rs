//! Method-generation metadata model for ahead-of-time repository
//! implementations.
//!
//! This crate is the bookkeeping core of the repogen generator: it tracks a
//! target type's fields, a target method's parameters and return-type shape,
//! and the derivation rules that classify a repository method's result
//! (single value, collection, paged, sliced, optional) to drive downstream
//! code emission. It consumes reflective metadata descriptors from
//! [`repogen_model`] and produces intermediate declarations, never final
//! artifacts.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (FunctionSpec, FieldSpec, CodeFragment)
//! - [`oracle`] - Injected type/annotation capabilities (TypeOracle, AnnotationOracle)
//! - [`generation`] - Per-run state (MethodSignatureModel, TargetTypeFieldRegistry, etc.)
//! - [`error`] - Generation-model errors

pub mod builder;
pub mod error;
pub mod generation;
pub mod oracle;

pub use error::{Error, Result};
