//! Per-method generation state.
//!
//! One [`MethodSignatureModel`] exists per repository method for the
//! duration of a single generation pass. Independently pluggable customizers
//! (query, paging, projection) mutate it without coordinating directly, so
//! every derivation they share — above all return-shape classification —
//! lives here and is computed fresh on every call.

use std::rc::Rc;

use indexmap::IndexMap;
use repogen_model::{MethodDescriptor, TypeName};
use serde_json::Value;

use crate::builder::{FieldSpec, Modifier, ParamSpec};
use crate::error::{Error, Result};
use crate::generation::fields::{DuplicatePolicy, SharedFieldRegistry};
use crate::oracle::{
    AnnotationOracle, FrameworkType, StandardAnnotationOracle, StandardTypeOracle, TypeOracle,
};

/// Mutable per-method state: ordered parameters, resolved return types, and
/// classification queries over the originating method declaration.
///
/// Also the façade through which customizers reach the shared per-type field
/// registry while working on one method.
#[derive(Debug)]
pub struct MethodSignatureModel {
    method: MethodDescriptor,
    registry: SharedFieldRegistry,
    types: Rc<dyn TypeOracle>,
    annotations: Rc<dyn AnnotationOracle>,
    parameters: IndexMap<String, ParamSpec>,
    return_type: Option<TypeName>,
    actual_return_type: Option<TypeName>,
    policy: DuplicatePolicy,
}

impl MethodSignatureModel {
    /// Create the model for one method, bound to its type's shared registry.
    pub fn new(method: MethodDescriptor, registry: SharedFieldRegistry) -> Self {
        Self {
            method,
            registry,
            types: Rc::new(StandardTypeOracle::new()),
            annotations: Rc::new(StandardAnnotationOracle::new()),
            parameters: IndexMap::new(),
            return_type: None,
            actual_return_type: None,
            policy: DuplicatePolicy::Overwrite,
        }
    }

    /// Replace the type oracle.
    pub fn with_type_oracle(mut self, oracle: Rc<dyn TypeOracle>) -> Self {
        self.types = oracle;
        self
    }

    /// Replace the annotation oracle.
    pub fn with_annotation_oracle(mut self, oracle: Rc<dyn AnnotationOracle>) -> Self {
        self.annotations = oracle;
        self
    }

    /// Set the duplicate-name policy for parameters.
    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The reflective method declaration this model describes.
    pub fn method(&self) -> &MethodDescriptor {
        &self.method
    }

    /// The shared per-type field registry handle.
    pub fn registry(&self) -> &SharedFieldRegistry {
        &self.registry
    }

    /// The injected type oracle.
    pub fn type_oracle(&self) -> &Rc<dyn TypeOracle> {
        &self.types
    }

    // ------------------------------------------------------------------
    // Parameters
    // ------------------------------------------------------------------

    /// Append or overwrite a parameter.
    ///
    /// Parameterized types keep their argument list only when every argument
    /// resolves; otherwise the raw base type is stored. Overwriting an
    /// existing name preserves its position and replaces its type.
    pub fn add_parameter(&mut self, name: impl Into<String>, ty: TypeName) -> Result<()> {
        let name = name.into();
        let ty = if ty.is_parameterized() && ty.has_unresolved_args() {
            ty.erased()
        } else {
            ty
        };
        self.add_parameter_spec(ParamSpec::new(name, ty))
    }

    /// Append or overwrite a parameter from a prebuilt spec.
    pub fn add_parameter_spec(&mut self, spec: ParamSpec) -> Result<()> {
        if !is_valid_identifier(&spec.name) {
            return Err(Error::InvalidParameter { name: spec.name });
        }
        if self.policy == DuplicatePolicy::Reject && self.parameters.contains_key(&spec.name) {
            return Err(Error::DuplicateParameter { name: spec.name });
        }
        self.parameters.insert(spec.name.clone(), spec);
        Ok(())
    }

    /// Parameters in insertion order. Insertion order is significant: it
    /// becomes the generated method's parameter order.
    pub fn parameters(&self) -> &IndexMap<String, ParamSpec> {
        &self.parameters
    }

    /// Name of the first parameter whose declared type equals `ty` exactly.
    ///
    /// No assignability is applied: a `Page<User>` parameter is not found by
    /// the raw `Page` marker.
    pub fn parameter_name_of(&self, ty: &TypeName) -> Option<&str> {
        self.parameters
            .values()
            .find(|param| &param.ty == ty)
            .map(|param| param.name.as_str())
    }

    /// Name of the parameter declared with the sort-specification type.
    pub fn sort_parameter_name(&self) -> Option<&str> {
        self.parameter_name_of(self.types.marker(FrameworkType::Sort))
    }

    /// Name of the parameter declared with the pagination-specification type.
    pub fn pageable_parameter_name(&self) -> Option<&str> {
        self.parameter_name_of(self.types.marker(FrameworkType::Pageable))
    }

    /// Name of the parameter declared with the result-limit type.
    pub fn limit_parameter_name(&self) -> Option<&str> {
        self.parameter_name_of(self.types.marker(FrameworkType::Limit))
    }

    // ------------------------------------------------------------------
    // Return types
    // ------------------------------------------------------------------

    /// Set the generated method's declared return type and the unwrapped
    /// element type used for element-level code generation.
    ///
    /// Both optional; absent encodes "void" or "not yet resolved". No
    /// validation against the reflective return type happens here — the
    /// type-resolution collaborator is trusted.
    pub fn set_return_type(
        &mut self,
        return_type: Option<TypeName>,
        actual_return_type: Option<TypeName>,
    ) {
        self.return_type = return_type;
        self.actual_return_type = actual_return_type;
    }

    /// The rewritten return type for the generated declaration.
    pub fn return_type(&self) -> Option<&TypeName> {
        self.return_type.as_ref()
    }

    /// The unwrapped element type.
    pub fn actual_return_type(&self) -> Option<&TypeName> {
        self.actual_return_type.as_ref()
    }

    // ------------------------------------------------------------------
    // Return-shape classification (always against the raw declared type)
    // ------------------------------------------------------------------

    /// The declaration returns nothing.
    pub fn returns_void(&self) -> bool {
        self.method.return_type().is_unit()
    }

    /// The declared return type is a paged result.
    pub fn returns_page(&self) -> bool {
        self.is_raw_return_assignable(FrameworkType::Page)
    }

    /// The declared return type is a windowed (sliced) result.
    pub fn returns_slice(&self) -> bool {
        self.is_raw_return_assignable(FrameworkType::Slice)
    }

    /// The declared return type is a plain result container.
    pub fn returns_collection(&self) -> bool {
        self.is_raw_return_assignable(FrameworkType::Collection)
    }

    /// Derived: none of page, slice, or collection.
    pub fn returns_single_value(&self) -> bool {
        !self.returns_page() && !self.returns_slice() && !self.returns_collection()
    }

    /// The declared return type is a possibly-absent single value.
    pub fn returns_optional_value(&self) -> bool {
        self.is_raw_return_assignable(FrameworkType::Optional)
    }

    fn is_raw_return_assignable(&self, abstraction: FrameworkType) -> bool {
        self.types
            .is_assignable(abstraction, self.method.return_type())
    }

    // ------------------------------------------------------------------
    // Annotations
    // ------------------------------------------------------------------

    /// Merged-annotation attribute lookup on the underlying method.
    ///
    /// The value's shape is attribute-defined; callers must know what to
    /// expect. Absence is not an error.
    pub fn annotation_value(&self, annotation: &str, attribute: &str) -> Option<Value> {
        self.annotations.attribute(&self.method, annotation, attribute)
    }

    // ------------------------------------------------------------------
    // Field-registry passthrough
    // ------------------------------------------------------------------

    /// Check the shared registry for a field by name.
    pub fn has_field(&self, name: &str) -> bool {
        self.registry.borrow().has_field(name)
    }

    /// Register a field on the shared registry.
    pub fn add_field(
        &self,
        name: impl Into<String>,
        ty: TypeName,
        modifiers: impl IntoIterator<Item = Modifier>,
    ) -> Result<()> {
        self.registry.borrow_mut().add_field(name, ty, modifiers)
    }

    /// Register a prebuilt field spec on the shared registry.
    pub fn add_field_spec(&self, spec: FieldSpec) -> Result<()> {
        self.registry.borrow_mut().add_field_spec(spec)
    }

    /// Name of the first registered field with the given declared type.
    pub fn field_name_of(&self, ty: &TypeName) -> Option<String> {
        self.registry
            .borrow()
            .field_name_of(ty)
            .map(str::to_owned)
    }

    /// Snapshot of the registered fields in registration order.
    pub fn fields(&self) -> Vec<FieldSpec> {
        self.registry.borrow().fields().values().cloned().collect()
    }
}

fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
