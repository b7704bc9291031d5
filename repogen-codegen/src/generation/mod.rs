//! Per-run generation state.
//!
//! - [`TargetTypeFieldRegistry`] - Class-wide field bookkeeping, one per type
//! - [`MethodSignatureModel`] - Per-method signature state and classification
//! - [`CodeFragmentFactory`] - Boilerplate fragments over registry fields
//! - [`MethodBuilder`] / [`MethodCustomizer`] - Method finalization chain

mod fields;
mod fragments;
mod method;
mod signature;

pub use fields::{DuplicatePolicy, SharedFieldRegistry, TargetTypeFieldRegistry};
pub use fragments::CodeFragmentFactory;
pub use method::{MethodBuilder, MethodCustomizer};
pub use signature::MethodSignatureModel;
