//! Structural type references.
//!
//! A [`TypeName`] describes a declared type the way reflective metadata sees
//! it: a raw named type, a parameterization of one, an unresolved type
//! variable, or the unit marker for void declarations. Equality is structural
//! and exact; assignability between types is decided by the generation
//! layer's type oracle, never here.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A structural reference to a declared type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeName {
    /// A raw named type (e.g., "User", "repository::Page").
    Named(String),
    /// A generic type with resolved or unresolved arguments.
    Parameterized {
        /// Base type name (e.g., "Page", "Vec").
        base: String,
        /// Type arguments in declaration order.
        args: Vec<TypeName>,
    },
    /// An unresolved type variable (e.g., "T").
    Variable(String),
    /// The unit/void marker.
    Unit,
}

impl TypeName {
    /// Create a raw named type reference.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Create a parameterized type reference.
    pub fn parameterized(base: impl Into<String>, args: Vec<TypeName>) -> Self {
        Self::Parameterized {
            base: base.into(),
            args,
        }
    }

    /// Create an unresolved type variable reference.
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    /// Create the unit/void marker.
    pub fn unit() -> Self {
        Self::Unit
    }

    /// Get the base type name.
    ///
    /// Returns `None` for type variables and the unit marker, which have no
    /// nameable base.
    pub fn base(&self) -> Option<&str> {
        match self {
            Self::Named(name) => Some(name),
            Self::Parameterized { base, .. } => Some(base),
            Self::Variable(_) | Self::Unit => None,
        }
    }

    /// Check if this reference carries type arguments.
    pub fn is_parameterized(&self) -> bool {
        matches!(self, Self::Parameterized { .. })
    }

    /// Check if this reference is the unit/void marker.
    pub fn is_unit(&self) -> bool {
        matches!(self, Self::Unit)
    }

    /// Check if any type argument is an unresolved variable, recursively.
    pub fn has_unresolved_args(&self) -> bool {
        match self {
            Self::Variable(_) => true,
            Self::Parameterized { args, .. } => args.iter().any(TypeName::has_unresolved_args),
            Self::Named(_) | Self::Unit => false,
        }
    }

    /// Erase the argument list, keeping the raw base type.
    ///
    /// Non-parameterized references are returned unchanged.
    pub fn erased(&self) -> TypeName {
        match self {
            Self::Parameterized { base, .. } => Self::Named(base.clone()),
            other => other.clone(),
        }
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) | Self::Variable(name) => f.write_str(name),
            Self::Parameterized { base, args } => {
                write!(f, "{base}<")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(">")
            }
            Self::Unit => f.write_str("()"),
        }
    }
}
