//! Per-type field registry.
//!
//! Fields are a class-wide resource contended over by every generated
//! method: one logger, one template/operations object, shared by whoever
//! needs them. The registry is the single owner; method models hold it by
//! reference and the outer class assembler reads it once at final assembly.

use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexMap;
use repogen_model::TypeName;

use crate::builder::{FieldSpec, Modifier};
use crate::error::{Error, Result};

/// How name collisions in a registry or model are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Last registration wins silently. Callers wanting safety pre-check
    /// with `has_field` / `field_name_of`.
    #[default]
    Overwrite,
    /// Duplicate names fail instead of masking a caller bug.
    Reject,
}

/// Shared handle to a registry, one per generated type.
///
/// `Rc` rather than `Arc`: generation is single-threaded by contract, and a
/// non-`Send` handle makes accidental cross-thread sharing unrepresentable.
/// Parallel generation of different types gets one registry each.
pub type SharedFieldRegistry = Rc<RefCell<TargetTypeFieldRegistry>>;

/// The set of instance fields to declare on one generated repository type.
#[derive(Debug, Clone, Default)]
pub struct TargetTypeFieldRegistry {
    fields: IndexMap<String, FieldSpec>,
    policy: DuplicatePolicy,
}

impl TargetTypeFieldRegistry {
    /// Create an empty registry with the default overwrite policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry with an explicit duplicate policy.
    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        Self {
            fields: IndexMap::new(),
            policy,
        }
    }

    /// Wrap this registry in the shared per-type handle.
    pub fn shared(self) -> SharedFieldRegistry {
        Rc::new(RefCell::new(self))
    }

    /// Check for a field by exact name.
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Register a field from its parts.
    pub fn add_field(
        &mut self,
        name: impl Into<String>,
        ty: TypeName,
        modifiers: impl IntoIterator<Item = Modifier>,
    ) -> Result<()> {
        self.add_field_spec(FieldSpec::new(name, ty).modifiers(modifiers))
    }

    /// Register a prebuilt field spec.
    pub fn add_field_spec(&mut self, spec: FieldSpec) -> Result<()> {
        if self.policy == DuplicatePolicy::Reject && self.has_field(&spec.name) {
            return Err(Error::DuplicateField { name: spec.name });
        }
        self.fields.insert(spec.name.clone(), spec);
        Ok(())
    }

    /// Name of the first registered field with exactly the given declared
    /// type, in registration order.
    ///
    /// `None` signals the caller should create and register one.
    pub fn field_name_of(&self, ty: &TypeName) -> Option<&str> {
        self.fields
            .values()
            .find(|field| &field.ty == ty)
            .map(|field| field.name.as_str())
    }

    /// All registered fields in registration order. Callers must treat the
    /// view as read-only.
    pub fn fields(&self) -> &IndexMap<String, FieldSpec> {
        &self.fields
    }

    /// Number of registered fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
