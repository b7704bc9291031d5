//! Method declaration descriptors.

use serde::{Deserialize, Serialize};

use crate::{AnnotationSpec, TypeName};

/// A reflective description of one repository method declaration.
///
/// This is the identity a method-generation pass works against: the declared
/// shape of the method as the repository interface states it, before any
/// return-type rewriting. Descriptors are immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    name: String,
    declaring_type: TypeName,
    parameter_types: Vec<TypeName>,
    return_type: TypeName,
    annotations: Vec<AnnotationSpec>,
}

impl MethodDescriptor {
    /// Create a descriptor for a void method with no parameters.
    pub fn new(name: impl Into<String>, declaring_type: TypeName) -> Self {
        Self {
            name: name.into(),
            declaring_type,
            parameter_types: Vec::new(),
            return_type: TypeName::Unit,
            annotations: Vec::new(),
        }
    }

    /// Append a declared parameter type.
    pub fn parameter_type(mut self, ty: TypeName) -> Self {
        self.parameter_types.push(ty);
        self
    }

    /// Set the declared return type.
    pub fn returns(mut self, ty: TypeName) -> Self {
        self.return_type = ty;
        self
    }

    /// Attach an annotation usage.
    pub fn annotation(mut self, annotation: AnnotationSpec) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Get the method name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the type declaring this method.
    pub fn declaring_type(&self) -> &TypeName {
        &self.declaring_type
    }

    /// Declared parameter types, in declaration order.
    pub fn parameter_types(&self) -> &[TypeName] {
        &self.parameter_types
    }

    /// The declared (raw, unrewritten) return type.
    pub fn return_type(&self) -> &TypeName {
        &self.return_type
    }

    /// Annotations present directly on the declaration.
    pub fn annotations(&self) -> &[AnnotationSpec] {
        &self.annotations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_defaults_to_void() {
        let method = MethodDescriptor::new("delete_all", TypeName::named("UserRepository"));

        assert_eq!(method.name(), "delete_all");
        assert!(method.return_type().is_unit());
        assert!(method.parameter_types().is_empty());
        assert!(method.annotations().is_empty());
    }

    #[test]
    fn test_descriptor_builder() {
        let method = MethodDescriptor::new("find_by_name", TypeName::named("UserRepository"))
            .parameter_type(TypeName::named("String"))
            .parameter_type(TypeName::named("Sort"))
            .returns(TypeName::parameterized("Vec", vec![TypeName::named("User")]))
            .annotation(AnnotationSpec::new("Query").attribute("value", "..."));

        assert_eq!(method.parameter_types().len(), 2);
        assert_eq!(method.return_type().base(), Some("Vec"));
        assert_eq!(method.annotations()[0].path(), "Query");
    }

    #[test]
    fn test_round_trips_through_serde() {
        let method = MethodDescriptor::new("count", TypeName::named("UserRepository"))
            .returns(TypeName::named("u64"));

        let json = serde_json::to_string(&method).unwrap();
        let back: MethodDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, method);
    }
}
