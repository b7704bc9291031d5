//! Field specifications for generated types.

use repogen_model::TypeName;

use super::modifier::Modifier;

/// A declarative specification for one field on a generated type.
///
/// Field specs are immutable value objects once registered: the registry
/// replaces whole specs rather than mutating them in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name.
    pub name: String,
    /// Declared field type.
    pub ty: TypeName,
    /// Declaration modifiers, in registration order.
    pub modifiers: Vec<Modifier>,
    /// Documentation comment.
    pub doc: Option<String>,
}

impl FieldSpec {
    /// Create a new field spec with no modifiers.
    pub fn new(name: impl Into<String>, ty: TypeName) -> Self {
        Self {
            name: name.into(),
            ty,
            modifiers: Vec::new(),
            doc: None,
        }
    }

    /// Add a declaration modifier.
    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    /// Add multiple declaration modifiers.
    pub fn modifiers(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        self.modifiers.extend(modifiers);
        self
    }

    /// Set documentation comment.
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Check if this field carries the given modifier.
    pub fn has_modifier(&self, modifier: Modifier) -> bool {
        self.modifiers.contains(&modifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_spec_builder() {
        let field = FieldSpec::new("log", TypeName::named("Logger"))
            .modifier(Modifier::Private)
            .modifier(Modifier::Final)
            .doc("Shared logger for the generated type");

        assert_eq!(field.name, "log");
        assert_eq!(field.ty, TypeName::named("Logger"));
        assert!(field.has_modifier(Modifier::Private));
        assert!(field.has_modifier(Modifier::Final));
        assert!(!field.has_modifier(Modifier::Static));
        assert!(field.doc.is_some());
    }

    #[test]
    fn test_modifiers_keep_registration_order() {
        let field = FieldSpec::new("template", TypeName::named("Operations"))
            .modifiers([Modifier::Private, Modifier::Final]);

        assert_eq!(field.modifiers, vec![Modifier::Private, Modifier::Final]);
    }
}
