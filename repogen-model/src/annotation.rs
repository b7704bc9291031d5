//! Annotation usages and declarations.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An annotation as it appears on a declaration, or an annotation declaration
/// itself (attribute keys mapped to their default values).
///
/// Attribute values are heterogeneous: each attribute defines its own shape,
/// and callers looking one up must know what to expect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationSpec {
    path: String,
    attributes: IndexMap<String, Value>,
}

impl AnnotationSpec {
    /// Create an annotation reference with no attributes.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            attributes: IndexMap::new(),
        }
    }

    /// Add an attribute value.
    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Get the annotation path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Look up an attribute value by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// All attributes in declaration order.
    pub fn attributes(&self) -> &IndexMap<String, Value> {
        &self.attributes
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_attribute_lookup() {
        let query = AnnotationSpec::new("Query")
            .attribute("value", "select u from User u")
            .attribute("count", 5);

        assert_eq!(query.path(), "Query");
        assert_eq!(query.get("value"), Some(&json!("select u from User u")));
        assert_eq!(query.get("count"), Some(&json!(5)));
        assert_eq!(query.get("missing"), None);
    }

    #[test]
    fn test_attributes_keep_declaration_order() {
        let spec = AnnotationSpec::new("Modifying")
            .attribute("clear", true)
            .attribute("flush", false);

        let keys: Vec<_> = spec.attributes().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["clear", "flush"]);
    }
}
