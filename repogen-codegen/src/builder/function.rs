//! Method declaration specifications.
//!
//! A [`FunctionSpec`] is the finalized, declarative shape of one generated
//! repository method: signature plus an accumulated fragment body. It is the
//! intermediate artifact handed to the outer class assembler.

use repogen_model::TypeName;

use super::{fragment::CodeFragment, modifier::Modifier};

/// A declarative specification for a generated method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSpec {
    /// Method name.
    pub name: String,
    /// Documentation comment.
    pub doc: Option<String>,
    /// Parameters, in declaration order.
    pub params: Vec<ParamSpec>,
    /// Return type (None for void).
    pub return_type: Option<TypeName>,
    /// Declaration modifiers.
    pub modifiers: Vec<Modifier>,
    /// Method body as accumulated code fragments.
    pub body: Vec<CodeFragment>,
}

impl FunctionSpec {
    /// Create a new method spec with no parameters and a void return.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            params: Vec::new(),
            return_type: None,
            modifiers: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Set documentation comment.
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Add a parameter.
    pub fn param(mut self, param: ParamSpec) -> Self {
        self.params.push(param);
        self
    }

    /// Add multiple parameters.
    pub fn params(mut self, params: impl IntoIterator<Item = ParamSpec>) -> Self {
        self.params.extend(params);
        self
    }

    /// Set the return type.
    pub fn returns(mut self, ty: TypeName) -> Self {
        self.return_type = Some(ty);
        self
    }

    /// Add a declaration modifier.
    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    /// Append a body fragment.
    pub fn push_statement(&mut self, fragment: CodeFragment) -> &mut Self {
        self.body.push(fragment);
        self
    }

    /// Check if this method has a body.
    pub fn has_body(&self) -> bool {
        !self.body.is_empty()
    }
}

/// A parameter of a generated method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamSpec {
    /// Parameter name.
    pub name: String,
    /// Declared parameter type.
    pub ty: TypeName,
}

impl ParamSpec {
    /// Create a new parameter.
    pub fn new(name: impl Into<String>, ty: TypeName) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}
