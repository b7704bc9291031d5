//! Injected reflection capabilities.
//!
//! The generation model never inspects types or annotations itself; it asks
//! these oracles. Both are traits so tests and embedders can substitute
//! fakes, with standard implementations backed by registration tables.

mod annotations;
mod types;

pub use annotations::{AnnotationOracle, StandardAnnotationOracle};
pub use types::{FrameworkType, StandardTypeOracle, TypeOracle};
